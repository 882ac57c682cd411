//! Feature vector assembly from a customer record.

use churn_core::CustomerRecord;

use crate::error::FeatureResult;
use crate::label::LabelEncoder;
use crate::onehot::OneHotEncoder;

/// Number of columns preceding the geography one-hot block.
pub const NUM_BASE_FEATURES: usize = 9;

/// Assembles a [`CustomerRecord`] into the fixed-order numeric vector
/// the scaler and model were fitted on.
///
/// The column order is
/// `[credit_score, gender, age, tenure, balance, num_of_products,
/// has_cr_card, is_active_member, estimated_salary, geography...]`
/// and must never change independently of the artifacts: nothing at
/// runtime can detect a reorder, so this assembler is the single place
/// that defines it.
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    gender: LabelEncoder,
    geography: OneHotEncoder,
}

impl FeatureAssembler {
    /// Creates an assembler from the two fitted categorical encoders.
    pub fn new(gender: LabelEncoder, geography: OneHotEncoder) -> Self {
        Self { gender, geography }
    }

    /// Builds the feature vector for one record.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::UnknownCategory`](crate::FeatureError::UnknownCategory)
    /// if the record's gender or geography is not among the fitted
    /// categories.
    pub fn assemble(&self, record: &CustomerRecord) -> FeatureResult<Vec<f32>> {
        let gender_index = self.gender.transform(&record.gender)?;
        let geo_one_hot = self.geography.transform(&record.geography)?;

        let mut features = Vec::with_capacity(self.output_dim());
        features.push(record.credit_score as f32);
        features.push(gender_index as f32);
        features.push(record.age as f32);
        features.push(record.tenure as f32);
        features.push(record.balance);
        features.push(record.num_of_products as f32);
        features.push(record.has_cr_card as f32);
        features.push(record.is_active_member as f32);
        features.push(record.estimated_salary);
        features.extend(geo_one_hot);

        Ok(features)
    }

    /// Returns the assembled vector width:
    /// [`NUM_BASE_FEATURES`] plus the geography category count.
    pub fn output_dim(&self) -> usize {
        NUM_BASE_FEATURES + self.geography.num_categories()
    }

    /// Returns the column names of the assembled vector, in order.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = [
            "credit_score",
            "gender",
            "age",
            "tenure",
            "balance",
            "num_of_products",
            "has_cr_card",
            "is_active_member",
            "estimated_salary",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        names.extend(self.geography.feature_names());
        names
    }

    /// Returns the gender encoder.
    pub fn gender_encoder(&self) -> &LabelEncoder {
        &self.gender
    }

    /// Returns the geography encoder.
    pub fn geography_encoder(&self) -> &OneHotEncoder {
        &self.geography
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureError;

    fn test_assembler() -> FeatureAssembler {
        FeatureAssembler::new(
            LabelEncoder::from_classes("gender", ["Female", "Male"]).unwrap(),
            OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"]).unwrap(),
        )
    }

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            credit_score: 600,
            gender: "Female".to_string(),
            age: 40,
            tenure: 3,
            balance: 60_000.0,
            num_of_products: 2,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 50_000.0,
            geography: "France".to_string(),
        }
    }

    #[test]
    fn test_assemble_fixed_column_order() {
        let assembler = test_assembler();
        let features = assembler.assemble(&sample_record()).unwrap();

        assert_eq!(
            features,
            vec![600.0, 0.0, 40.0, 3.0, 60_000.0, 2.0, 1.0, 1.0, 50_000.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_output_dim_is_base_plus_categories() {
        let assembler = test_assembler();
        assert_eq!(assembler.output_dim(), 12);
        let features = assembler.assemble(&sample_record()).unwrap();
        assert_eq!(features.len(), assembler.output_dim());
    }

    #[test]
    fn test_assemble_unknown_geography() {
        let assembler = test_assembler();
        let record = CustomerRecord {
            geography: "Atlantis".to_string(),
            ..sample_record()
        };
        let err = assembler.assemble(&record).unwrap_err();
        assert!(matches!(err, FeatureError::UnknownCategory { .. }));
    }

    #[test]
    fn test_assemble_unknown_gender() {
        let assembler = test_assembler();
        let record = CustomerRecord {
            gender: "Robot".to_string(),
            ..sample_record()
        };
        let err = assembler.assemble(&record).unwrap_err();
        assert!(matches!(err, FeatureError::UnknownCategory { .. }));
    }

    #[test]
    fn test_gender_index_follows_class_order() {
        let assembler = test_assembler();
        let record = CustomerRecord {
            gender: "Male".to_string(),
            ..sample_record()
        };
        let features = assembler.assemble(&record).unwrap();
        assert_eq!(features[1], 1.0);
    }

    #[test]
    fn test_column_names_align_with_vector() {
        let assembler = test_assembler();
        let names = assembler.column_names();
        assert_eq!(names.len(), assembler.output_dim());
        assert_eq!(names[0], "credit_score");
        assert_eq!(names[9], "geography_France");
        assert_eq!(names[11], "geography_Spain");
    }
}
