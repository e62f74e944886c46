//! Supervised fastText training with fixed hyperparameters.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use fasttext::{Args, FastText, LossName, ModelName};
use langident_core::FastTextClassifier;
use tracing::info;

use crate::data::load_corpus;
use crate::eval::{EvaluationReport, evaluate};

/// Loss function used by the output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    HierarchicalSoftmax,
    NegativeSampling,
    Softmax,
}

impl From<Loss> for LossName {
    fn from(loss: Loss) -> Self {
        match loss {
            Loss::HierarchicalSoftmax => LossName::HS,
            Loss::NegativeSampling => LossName::NS,
            Loss::Softmax => LossName::SOFTMAX,
        }
    }
}

/// Paths and hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub train_path: PathBuf,
    pub valid_path: PathBuf,
    pub output_path: PathBuf,
    pub dim: i32,
    pub minn: i32,
    pub maxn: i32,
    pub epoch: i32,
    pub loss: Loss,
    pub lr: f64,
    pub min_count: i32,
    pub word_ngrams: i32,
    /// Hash buckets for character n-grams
    pub bucket: i32,
}

impl Default for TrainingConfig {
    /// The augmented model's recipe.
    fn default() -> Self {
        Self {
            train_path: PathBuf::from("train_augmented.txt"),
            valid_path: PathBuf::from("valid_augmented.txt"),
            output_path: PathBuf::from("langdetect_augmented.bin"),
            dim: 50,
            minn: 2,
            maxn: 4,
            epoch: 25,
            loss: Loss::HierarchicalSoftmax,
            // Supervised-mode defaults of the fastText CLI
            lr: 0.1,
            min_count: 1,
            word_ngrams: 1,
            bucket: 2_000_000,
        }
    }
}

fn path_str(path: &Path) -> anyhow::Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow!("path is not valid UTF-8: {}", path.display()))
}

pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    fn args(&self) -> anyhow::Result<Args> {
        let mut args = Args::new();
        args.set_input(path_str(&self.config.train_path)?)
            .map_err(|e| anyhow!("invalid training input path: {e}"))?;
        args.set_model(ModelName::SUP);
        args.set_loss(self.config.loss.into());
        args.set_dim(self.config.dim);
        args.set_minn(self.config.minn);
        args.set_maxn(self.config.maxn);
        args.set_epoch(self.config.epoch);
        args.set_lr(self.config.lr);
        args.set_min_count(self.config.min_count);
        args.set_word_ngrams(self.config.word_ngrams);
        args.set_bucket(self.config.bucket);
        Ok(args)
    }

    /// Trains a model on the training file.
    pub fn train(&self) -> anyhow::Result<FastTextClassifier> {
        let train_path = &self.config.train_path;
        let corpus = load_corpus(train_path)
            .with_context(|| format!("Training data not found: {}", train_path.display()))?;
        if corpus.is_empty() {
            anyhow::bail!("Training data has no labeled lines: {}", train_path.display());
        }

        info!(
            examples = corpus.len(),
            skipped = corpus.skipped,
            labels = corpus.label_counts().len(),
            "loaded training corpus"
        );
        for (label, count) in corpus.label_counts() {
            info!(label, count, "label frequency");
        }

        let args = self.args()?;
        info!(
            dim = self.config.dim,
            minn = self.config.minn,
            maxn = self.config.maxn,
            epoch = self.config.epoch,
            loss = ?self.config.loss,
            "starting supervised training"
        );

        let mut model = FastText::new();
        model
            .train(&args)
            .map_err(|e| anyhow!("fastText training failed: {e}"))?;

        Ok(FastTextClassifier::from_model(
            model,
            self.config.output_path.clone(),
        ))
    }

    /// Scores `classifier` on the validation file.
    pub fn evaluate(&self, classifier: &FastTextClassifier) -> anyhow::Result<EvaluationReport> {
        let valid_path = &self.config.valid_path;
        let corpus = load_corpus(valid_path)
            .with_context(|| format!("Validation data not found: {}", valid_path.display()))?;

        let report = evaluate(classifier, &corpus.examples)?;
        info!(
            examples = report.examples,
            precision = report.precision,
            recall = report.recall,
            "validation complete"
        );
        Ok(report)
    }

    /// Writes the trained model to the output path.
    pub fn save(&self, classifier: FastTextClassifier) -> anyhow::Result<()> {
        let output_path = &self.config.output_path;
        let mut model = classifier.into_model();
        model
            .save_model(path_str(output_path)?)
            .map_err(|e| anyhow!("failed to save model to {}: {e}", output_path.display()))?;
        info!(path = %output_path.display(), "model saved");
        Ok(())
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}

/// Trains, evaluates and saves the augmented model.
pub fn run_training() -> anyhow::Result<EvaluationReport> {
    let trainer = Trainer::default();

    let classifier = trainer.train()?;
    let report = trainer.evaluate(&classifier)?;
    println!("{report}");
    trainer.save(classifier)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use langident_core::Classifier;

    #[test]
    fn test_default_recipe() {
        let config = TrainingConfig::default();
        assert_eq!(config.train_path, PathBuf::from("train_augmented.txt"));
        assert_eq!(config.valid_path, PathBuf::from("valid_augmented.txt"));
        assert_eq!(config.output_path, PathBuf::from("langdetect_augmented.bin"));
        assert_eq!(config.dim, 50);
        assert_eq!(config.minn, 2);
        assert_eq!(config.maxn, 4);
        assert_eq!(config.epoch, 25);
        assert_eq!(config.loss, Loss::HierarchicalSoftmax);
    }

    #[test]
    fn test_missing_training_file() {
        let trainer = Trainer::new(TrainingConfig {
            train_path: PathBuf::from("does/not/exist.txt"),
            ..TrainingConfig::default()
        });
        let err = trainer.train().err().unwrap();
        assert!(err.to_string().contains("Training data not found"));
    }

    #[test]
    fn test_train_evaluate_save_and_reload() {
        let dir = std::env::temp_dir().join(format!("langident-train-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let tamil = "__label__ta-rom naan evlo solliyum kekkaama avan paattukku irukkaan";
        let hindi = "__label__hi-rom teesri lehar ke dar ke beech kya yeh school kholne ka sahi waqt hai";
        let mut corpus = String::new();
        for _ in 0..50 {
            corpus.push_str(tamil);
            corpus.push('\n');
            corpus.push_str(hindi);
            corpus.push('\n');
        }
        let train_path = dir.join("train.txt");
        let valid_path = dir.join("valid.txt");
        std::fs::write(&train_path, &corpus).unwrap();
        std::fs::write(&valid_path, format!("{tamil}\n{hindi}\n__label__xx-unseen foo\n")).unwrap();

        let trainer = Trainer::new(TrainingConfig {
            train_path,
            valid_path,
            output_path: dir.join("model.bin"),
            epoch: 5,
            bucket: 10_000,
            ..TrainingConfig::default()
        });

        let classifier = trainer.train().unwrap();
        let mut labels = classifier.labels().unwrap();
        labels.sort();
        assert_eq!(labels, vec!["__label__hi-rom", "__label__ta-rom"]);

        let report = trainer.evaluate(&classifier).unwrap();
        assert_eq!(report.examples, 2);

        trainer.save(classifier).unwrap();
        let reloaded = FastTextClassifier::load(dir.join("model.bin")).unwrap();
        let predictions = reloaded.predict("naan evlo solliyum", 1, 0.0).unwrap();
        assert_eq!(predictions.len(), 1);
        assert!(
            predictions[0].label == "__label__ta-rom" || predictions[0].label == "__label__hi-rom"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
