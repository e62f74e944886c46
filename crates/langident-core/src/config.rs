use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LangIdError, Result};
use crate::types::ModelVariant;

/// Default directory holding the model artifacts.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Configuration for a [`crate::LangIdentifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Which pretrained model to load
    pub variant: ModelVariant,
    /// Directory the variant's artifact is looked up in
    pub model_dir: PathBuf,
    /// Number of labels returned per text
    pub top_k: u32,
    /// Labels scoring below this are dropped by the classifier
    pub threshold: f32,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            variant: ModelVariant::default(),
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            top_k: 1,
            threshold: 0.0,
        }
    }
}

impl IdentifierConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model variant.
    pub fn with_variant(mut self, variant: ModelVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the directory holding the model artifacts.
    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    /// Set how many labels to return per text (at least one).
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Set the minimum score a label needs to be returned.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Full path of the configured variant's artifact.
    #[must_use]
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(self.variant.file_name())
    }

    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `LangIdError::Io` if the file cannot be read and
    /// `LangIdError::Config` if it is not a valid configuration.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| LangIdError::Config(format!("failed to parse config: {e}")))?;
        // Re-apply the builder bounds to values read from disk
        let (top_k, threshold) = (config.top_k, config.threshold);
        Ok(config.with_top_k(top_k).with_threshold(threshold))
    }
}
