//! # Langident Trainer
//!
//! Trains the augmented language identification model with fastText, scores
//! it against a held-out file and writes the artifact next to the corpus.

pub mod data;
pub mod eval;
pub mod trainer;

pub use data::{Corpus, LabeledExample, load_corpus, parse_corpus};
pub use eval::{EvaluationReport, evaluate};
pub use trainer::{Loss, Trainer, TrainingConfig, run_training};
