//! Ordinal label encoding for categorical features.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, FeatureResult};

/// Maps a categorical label to its integer class index.
///
/// The encoder holds the ordered list of classes it was fitted on; the
/// index of a label in that list is its encoded value. The class order
/// is part of the fitted state and must never be changed independently
/// of the model that was trained against it.
///
/// # Example
///
/// ```
/// use churn_features::LabelEncoder;
///
/// let encoder = LabelEncoder::from_classes("gender", ["Female", "Male"]).unwrap();
/// assert_eq!(encoder.transform("Female").unwrap(), 0);
/// assert_eq!(encoder.transform("Male").unwrap(), 1);
/// assert!(encoder.transform("Other").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Name of the feature this encoder applies to (used in errors).
    feature: String,
    /// Ordered class labels from fitting.
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Builds an encoder from an ordered class list.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list is empty or contains
    /// duplicates.
    pub fn from_classes<I, S>(feature: impl Into<String>, classes: I) -> FeatureResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let encoder = Self {
            feature: feature.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Checks the fitted state for internal consistency.
    pub fn validate(&self) -> FeatureResult<()> {
        if self.classes.is_empty() {
            return Err(FeatureError::invalid_artifact(format!(
                "label encoder for {} has no classes",
                self.feature
            )));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if self.classes[..i].contains(class) {
                return Err(FeatureError::invalid_artifact(format!(
                    "label encoder for {} has duplicate class {:?}",
                    self.feature, class
                )));
            }
        }
        Ok(())
    }

    /// Encodes a label to its class index.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::UnknownCategory`] if the label is not
    /// among the fitted classes.
    pub fn transform(&self, label: &str) -> FeatureResult<usize> {
        self.classes
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| FeatureError::unknown_category(&self.feature, label))
    }

    /// Returns the ordered class labels.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns the feature name this encoder applies to.
    pub fn feature(&self) -> &str {
        &self.feature
    }
}
