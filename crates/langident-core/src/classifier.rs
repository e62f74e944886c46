//! # Classifier Backends
//!
//! The identifier never scores text itself; it hands cleaned text to a
//! [`Classifier`]. [`FastTextClassifier`] wraps a supervised fastText model
//! loaded from disk.

use std::path::{Path, PathBuf};

use fasttext::FastText;
use tracing::{debug, info};

use crate::error::{LangIdError, Result};
use crate::types::Prediction;

/// A text classifier returning labels by descending confidence.
pub trait Classifier {
    /// Scores `text`, returning at most `k` labels with a score of at least
    /// `threshold`.
    fn predict(&self, text: &str, k: u32, threshold: f32) -> Result<Vec<Prediction>>;

    /// Every label the classifier can predict.
    fn labels(&self) -> Result<Vec<String>>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, text: &str, k: u32, threshold: f32) -> Result<Vec<Prediction>> {
        (**self).predict(text, k, threshold)
    }

    fn labels(&self) -> Result<Vec<String>> {
        (**self).labels()
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, text: &str, k: u32, threshold: f32) -> Result<Vec<Prediction>> {
        (**self).predict(text, k, threshold)
    }

    fn labels(&self) -> Result<Vec<String>> {
        (**self).labels()
    }
}

/// A fastText supervised model loaded from a `.bin` artifact.
pub struct FastTextClassifier {
    model: FastText,
    path: PathBuf,
}

impl FastTextClassifier {
    /// Loads the model artifact at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LangIdError::ModelLoad` carrying fastText's message if the file
    /// is missing or is not a fastText model.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| {
            LangIdError::ModelLoad(format!("model path is not valid UTF-8: {}", path.display()))
        })?;

        let mut model = FastText::new();
        model
            .load_model(path_str)
            .map_err(|e| LangIdError::ModelLoad(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), "loaded fastText model");

        Ok(Self {
            model,
            path: path.to_path_buf(),
        })
    }

    /// Wraps an already trained or loaded model.
    pub fn from_model(model: FastText, path: impl Into<PathBuf>) -> Self {
        Self {
            model,
            path: path.into(),
        }
    }

    /// Path the model was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying fastText model.
    pub fn model(&self) -> &FastText {
        &self.model
    }

    /// Releases the underlying model, e.g. to save it.
    pub fn into_model(self) -> FastText {
        self.model
    }
}

impl Classifier for FastTextClassifier {
    fn predict(&self, text: &str, k: u32, threshold: f32) -> Result<Vec<Prediction>> {
        let k = i32::try_from(k).unwrap_or(i32::MAX);
        let predictions = self
            .model
            .predict(text, k, threshold)
            .map_err(|e| LangIdError::Inference(e.to_string()))?;

        debug!(text, count = predictions.len(), "fastText prediction");

        Ok(predictions
            .into_iter()
            .map(|p| Prediction::new(p.label, p.prob))
            .collect())
    }

    fn labels(&self) -> Result<Vec<String>> {
        let (labels, _counts) = self
            .model
            .get_labels()
            .map_err(|e| LangIdError::Inference(e.to_string()))?;
        Ok(labels)
    }
}

impl std::fmt::Debug for FastTextClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastTextClassifier")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_a_model_load_error() {
        let err = FastTextClassifier::load("models/does-not-exist.bin").unwrap_err();
        assert!(matches!(err, LangIdError::ModelLoad(_)));
        assert!(err.to_string().contains("does-not-exist.bin"));
    }
}
