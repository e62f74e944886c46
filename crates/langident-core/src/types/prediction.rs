use serde::{Deserialize, Serialize};

/// Prefix fastText puts in front of every label.
pub const LABEL_PREFIX: &str = "__label__";

/// A single (label, confidence) pair returned by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Label exactly as the model reports it (e.g. `__label__ta-rom`).
    pub label: String,

    /// Confidence in `[0.0, 1.0]`.
    pub score: f32,
}

impl Prediction {
    /// Creates a new prediction.
    #[must_use]
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// The label without the `__label__` prefix (e.g. `ta-rom`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.label
            .strip_prefix(LABEL_PREFIX)
            .unwrap_or(&self.label)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4})", self.label, self.score)
    }
}

/// Output of [`crate::LangIdentifier::predict`], shaped like its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predictions {
    /// Predictions for a single text, by descending confidence.
    Single(Vec<Prediction>),
    /// One prediction list per batch element, in input order.
    Batch(Vec<Vec<Prediction>>),
}

impl Predictions {
    /// Top prediction of a single text, or `None` for a batch or an empty result.
    #[must_use]
    pub fn top(&self) -> Option<&Prediction> {
        match self {
            Self::Single(predictions) => predictions.first(),
            Self::Batch(_) => None,
        }
    }

    /// Flattens the output into one prediction list per text.
    #[must_use]
    pub fn into_batch(self) -> Vec<Vec<Prediction>> {
        match self {
            Self::Single(predictions) => vec![predictions],
            Self::Batch(batch) => batch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_strips_label_prefix() {
        let prediction = Prediction::new("__label__ta-rom", 0.97);
        assert_eq!(prediction.language(), "ta-rom");
    }

    #[test]
    fn language_keeps_unprefixed_labels() {
        let prediction = Prediction::new("hi-rom", 0.5);
        assert_eq!(prediction.language(), "hi-rom");
    }

    #[test]
    fn display_shows_label_and_score() {
        let display = Prediction::new("__label__ml-rom", 0.8).to_string();
        assert!(display.contains("__label__ml-rom"));
        assert!(display.contains("0.8000"));
    }

    #[test]
    fn single_top_and_batch_flattening() {
        let single = Predictions::Single(vec![
            Prediction::new("__label__ar-rom", 0.9),
            Prediction::new("__label__hi-rom", 0.05),
        ]);
        assert_eq!(single.top().unwrap().language(), "ar-rom");
        assert_eq!(single.into_batch().len(), 1);

        let batch = Predictions::Batch(vec![vec![], vec![Prediction::new("__label__en", 1.0)]]);
        assert!(batch.top().is_none());
        assert_eq!(batch.into_batch()[1][0].label, "__label__en");
    }
}
