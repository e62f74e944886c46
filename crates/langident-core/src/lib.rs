//! # Langident Core
//!
//! Language identification over pretrained fastText models, including
//! romanized variants of several languages. Provides text preprocessing,
//! model variant selection and a thin inference layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use langident_core::preprocess::preprocess_text;
//! use langident_core::TextInput;
//!
//! let cleaned = preprocess_text("This !?,is \"some@#|` text.").unwrap();
//! assert_eq!(cleaned, TextInput::from("This is some text"));
//! ```
//!
//! Predicting needs a model artifact on disk:
//!
//! ```no_run
//! use langident_core::{IdentifierConfig, LangIdentifier, ModelVariant};
//!
//! let config = IdentifierConfig::new().with_variant(ModelVariant::Augmented);
//! let identifier = LangIdentifier::new(config).unwrap();
//! let predictions = identifier.predict_lang("athe, athu thanne").unwrap();
//! println!("{}", predictions[0]);
//! ```
pub mod classifier;
pub mod config;
pub mod error;
pub mod identifier;
pub mod preprocess;
pub mod types;

// Re-export primary API
pub use classifier::{Classifier, FastTextClassifier};
pub use config::IdentifierConfig;
pub use error::{LangIdError, Result};
pub use identifier::LangIdentifier;
pub use preprocess::{Preprocessor, preprocess_text};
pub use types::{LABEL_PREFIX, ModelVariant, Prediction, Predictions, TextInput};
