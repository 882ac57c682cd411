//! Prediction results and the churn classification threshold.

use serde::{Deserialize, Serialize};

/// Probability threshold separating the two churn labels.
///
/// A probability strictly greater than this value classifies as likely
/// to churn; exactly the threshold classifies as not likely.
pub const CHURN_THRESHOLD: f32 = 0.5;

/// Binary churn outcome derived from a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChurnLabel {
    /// The customer is likely to churn.
    LikelyToChurn,
    /// The customer is not likely to churn.
    NotLikelyToChurn,
}

impl ChurnLabel {
    /// Classifies a probability against [`CHURN_THRESHOLD`].
    ///
    /// The comparison is strict: a probability of exactly 0.5 yields
    /// [`ChurnLabel::NotLikelyToChurn`].
    pub fn from_probability(probability: f32) -> Self {
        if probability > CHURN_THRESHOLD {
            Self::LikelyToChurn
        } else {
            Self::NotLikelyToChurn
        }
    }

    /// Returns a human-readable description of this label.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::LikelyToChurn => "likely to churn",
            Self::NotLikelyToChurn => "not likely to churn",
        }
    }
}

/// The outcome of one churn prediction: a probability in [0, 1] and the
/// label obtained by thresholding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Churn probability produced by the model.
    pub probability: f32,

    /// Binary label derived from the probability.
    pub label: ChurnLabel,
}

impl PredictionResult {
    /// Builds a result from a probability, deriving the label.
    pub fn from_probability(probability: f32) -> Self {
        Self {
            probability,
            label: ChurnLabel::from_probability(probability),
        }
    }

    /// Returns whether this result classifies as likely to churn.
    pub fn is_churn(&self) -> bool {
        self.label == ChurnLabel::LikelyToChurn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 0.5 is not-churn; anything above is churn.
        assert_eq!(
            ChurnLabel::from_probability(0.5),
            ChurnLabel::NotLikelyToChurn
        );
        assert_eq!(
            ChurnLabel::from_probability(0.5000001),
            ChurnLabel::LikelyToChurn
        );
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            ChurnLabel::from_probability(0.0),
            ChurnLabel::NotLikelyToChurn
        );
        assert_eq!(ChurnLabel::from_probability(1.0), ChurnLabel::LikelyToChurn);
    }

    #[test]
    fn test_result_from_probability() {
        let result = PredictionResult::from_probability(0.73);
        assert!(result.is_churn());
        assert!((result.probability - 0.73).abs() < 1e-6);

        let result = PredictionResult::from_probability(0.12);
        assert!(!result.is_churn());
    }

    #[test]
    fn test_label_describe() {
        assert_eq!(ChurnLabel::LikelyToChurn.describe(), "likely to churn");
        assert_eq!(
            ChurnLabel::NotLikelyToChurn.describe(),
            "not likely to churn"
        );
    }
}
