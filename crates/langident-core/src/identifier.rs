//! # Language Identifier
//!
//! Cleans incoming text and hands it to a loaded classifier. Predictions are
//! returned exactly as the classifier produced them.

use tracing::debug;

use crate::classifier::{Classifier, FastTextClassifier};
use crate::config::IdentifierConfig;
use crate::error::{LangIdError, Result};
use crate::preprocess::Preprocessor;
use crate::types::{ModelVariant, Prediction, Predictions, TextInput};

/// Language identifier over a pretrained model.
///
/// The model is read-only once constructed.
pub struct LangIdentifier<C = FastTextClassifier> {
    config: IdentifierConfig,
    preprocessor: Preprocessor,
    classifier: C,
}

impl LangIdentifier<FastTextClassifier> {
    /// Loads the artifact selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `LangIdError::ModelLoad` if the artifact cannot be loaded.
    pub fn new(config: IdentifierConfig) -> Result<Self> {
        let classifier = FastTextClassifier::load(config.model_path())?;
        Self::with_classifier(config, classifier)
    }

    /// Loads a variant from the default model directory.
    pub fn from_variant(variant: ModelVariant) -> Result<Self> {
        Self::new(IdentifierConfig::new().with_variant(variant))
    }
}

impl<C: Classifier> LangIdentifier<C> {
    /// Builds an identifier around an already constructed classifier.
    pub fn with_classifier(config: IdentifierConfig, classifier: C) -> Result<Self> {
        Ok(Self {
            config,
            preprocessor: Preprocessor::new()?,
            classifier,
        })
    }

    /// Validates and cleans `text`. See [`Preprocessor::preprocess_text`].
    ///
    /// # Examples
    /// ```no_run
    /// use langident_core::{LangIdentifier, ModelVariant, TextInput};
    ///
    /// let identifier = LangIdentifier::from_variant(ModelVariant::Original).unwrap();
    /// let cleaned = identifier.preprocess_text("This !?,is \"some@#|` text.").unwrap();
    /// assert_eq!(cleaned, TextInput::from("This is some text"));
    /// ```
    pub fn preprocess_text<T>(&self, text: T) -> Result<TextInput>
    where
        T: TryInto<TextInput>,
        LangIdError: From<T::Error>,
    {
        self.preprocessor.preprocess_text(text)
    }

    /// Predicts the language of a single text.
    ///
    /// Newlines survive cleaning, and fastText stops reading at the first one:
    /// only the text before it is classified. Use [`Self::predict`] with a
    /// batch to classify several lines.
    ///
    /// # Examples
    /// ```no_run
    /// use langident_core::{LangIdentifier, ModelVariant};
    ///
    /// let identifier = LangIdentifier::from_variant(ModelVariant::Augmented).unwrap();
    /// let prediction = identifier
    ///     .predict_lang("indhiya idhayangalil hockeyai uchathukku kondu sendra singa pengal")
    ///     .unwrap();
    /// assert_eq!(prediction[0].label, "__label__ta-rom");
    /// ```
    pub fn predict_lang(&self, text: &str) -> Result<Vec<Prediction>> {
        let cleaned = self.preprocessor.clean(text);
        self.classify(&cleaned)
    }

    /// Predicts languages for a single text or a batch, keeping the input shape.
    ///
    /// # Errors
    ///
    /// Fails with a validation error if `input` is not text-shaped, or with
    /// whatever the classifier reports for any element.
    pub fn predict<T>(&self, input: T) -> Result<Predictions>
    where
        T: TryInto<TextInput>,
        LangIdError: From<T::Error>,
    {
        match self.preprocess_text(input)? {
            TextInput::Text(text) => self.classify(&text).map(Predictions::Single),
            TextInput::TextBatch(texts) => texts
                .iter()
                .map(|text| self.classify(text))
                .collect::<Result<Vec<_>>>()
                .map(Predictions::Batch),
        }
    }

    fn classify(&self, cleaned: &str) -> Result<Vec<Prediction>> {
        let predictions =
            self.classifier
                .predict(cleaned, self.config.top_k, self.config.threshold)?;
        debug!(
            text = cleaned,
            top = predictions.first().map(|p| p.label.as_str()),
            "predicted language"
        );
        Ok(predictions)
    }

    /// Get the identifier configuration.
    pub fn config(&self) -> &IdentifierConfig {
        &self.config
    }

    /// The classifier predictions are delegated to.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
