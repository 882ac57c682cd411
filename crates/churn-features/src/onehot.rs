//! One-hot encoding for categorical features.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, FeatureResult};

/// Expands a categorical label into a one-hot indicator vector.
///
/// The encoder holds the ordered category list it was fitted on; the
/// output vector has one column per category, with a 1.0 in the column
/// of the supplied label and 0.0 elsewhere. The column order is fixed
/// by the fitted state.
///
/// # Example
///
/// ```
/// use churn_features::OneHotEncoder;
///
/// let encoder =
///     OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"]).unwrap();
/// assert_eq!(encoder.transform("France").unwrap(), vec![1.0, 0.0, 0.0]);
/// assert_eq!(encoder.transform("Spain").unwrap(), vec![0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    /// Name of the feature this encoder applies to (used in errors).
    feature: String,
    /// Ordered category labels from fitting.
    categories: Vec<String>,
}

impl OneHotEncoder {
    /// Builds an encoder from an ordered category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the category list is empty or contains
    /// duplicates.
    pub fn from_categories<I, S>(feature: impl Into<String>, categories: I) -> FeatureResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let encoder = Self {
            feature: feature.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Checks the fitted state for internal consistency.
    pub fn validate(&self) -> FeatureResult<()> {
        if self.categories.is_empty() {
            return Err(FeatureError::invalid_artifact(format!(
                "one-hot encoder for {} has no categories",
                self.feature
            )));
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(FeatureError::invalid_artifact(format!(
                    "one-hot encoder for {} has duplicate category {:?}",
                    self.feature, category
                )));
            }
        }
        Ok(())
    }

    /// Encodes a label to a one-hot vector of width
    /// [`num_categories`](Self::num_categories).
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::UnknownCategory`] if the label is not
    /// among the fitted categories.
    pub fn transform(&self, label: &str) -> FeatureResult<Vec<f32>> {
        let index = self
            .categories
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| FeatureError::unknown_category(&self.feature, label))?;

        let mut one_hot = vec![0.0; self.categories.len()];
        one_hot[index] = 1.0;
        Ok(one_hot)
    }

    /// Returns the output column names, one per category.
    ///
    /// Column names follow the `<feature>_<category>` convention so the
    /// assembled vector's columns can be reported by name.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", self.feature, c))
            .collect()
    }

    /// Returns the ordered category labels.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the number of categories (the one-hot width).
    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    /// Returns the feature name this encoder applies to.
    pub fn feature(&self) -> &str {
        &self.feature
    }
}
