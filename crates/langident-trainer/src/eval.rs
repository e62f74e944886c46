//! Precision and recall at one, the way `fasttext test` reports them.

use std::collections::HashSet;
use std::fmt;

use langident_core::Classifier;
use serde::Serialize;
use tracing::debug;

use crate::data::LabeledExample;

/// Held-out scores of a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Examples scored
    pub examples: usize,
    /// Correct predictions over predictions made
    pub precision: f64,
    /// Correct predictions over gold labels
    pub recall: f64,
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.examples, self.precision, self.recall)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Scores `classifier` on `examples` with its top prediction per example.
///
/// Gold labels the classifier does not know are ignored, and examples left
/// without any gold label are skipped. Examples with labels but no text are
/// still scored.
pub fn evaluate<C: Classifier>(
    classifier: &C,
    examples: &[LabeledExample],
) -> langident_core::Result<EvaluationReport> {
    let known: HashSet<String> = classifier.labels()?.into_iter().collect();

    let mut scored = 0usize;
    let mut predicted = 0usize;
    let mut gold = 0usize;
    let mut correct = 0usize;

    for example in examples {
        let labels: Vec<&String> = example
            .labels
            .iter()
            .filter(|label| known.contains(*label))
            .collect();
        if labels.is_empty() {
            continue;
        }

        let predictions = classifier.predict(&example.text, 1, 0.0)?;

        scored += 1;
        predicted += predictions.len();
        gold += labels.len();
        correct += predictions
            .iter()
            .filter(|p| labels.contains(&&p.label))
            .count();
    }

    debug!(scored, predicted, gold, correct, "evaluation counts");

    Ok(EvaluationReport {
        examples: scored,
        precision: ratio(correct, predicted),
        recall: ratio(correct, gold),
    })
}
