use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::LangIdError;

/// Text accepted by the preprocessor and the identifier.
///
/// Either a single string or an ordered batch of strings. Building one from a
/// dynamic [`Value`] is where input shape is validated; every other conversion
/// is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TextInput {
    /// A single text.
    Text(String),
    /// An ordered batch of texts.
    TextBatch(Vec<String>),
}

impl TextInput {
    /// Number of texts carried (1 for [`TextInput::Text`]).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::TextBatch(texts) => texts.len(),
        }
    }

    /// Returns `true` for an empty batch. A single text is never empty here,
    /// even if the string itself is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::TextBatch(texts) if texts.is_empty())
    }

    /// Returns `true` if this is a batch.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::TextBatch(_))
    }

    /// Iterates over the carried texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        let slice = match self {
            Self::Text(text) => std::slice::from_ref(text),
            Self::TextBatch(texts) => texts.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// Applies `f` to every text, keeping the shape, length and order.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Self::Text(text) => Self::Text(f(text)),
            Self::TextBatch(texts) => Self::TextBatch(texts.iter().map(|t| f(t)).collect()),
        }
    }

    /// Returns the single text, or `None` for a batch.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::TextBatch(_) => None,
        }
    }

    /// Returns the batch, or `None` for a single text.
    #[must_use]
    pub fn as_batch(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::TextBatch(texts) => Some(texts),
        }
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Vec<String>> for TextInput {
    fn from(texts: Vec<String>) -> Self {
        Self::TextBatch(texts)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(texts: Vec<&str>) -> Self {
        Self::TextBatch(texts.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for TextInput {
    fn from(texts: &[&str]) -> Self {
        Self::TextBatch(texts.iter().map(|t| (*t).to_owned()).collect())
    }
}

impl TryFrom<Value> for TextInput {
    type Error = LangIdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text),
                    _ => Err(LangIdError::NonStringElement),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::TextBatch),
            _ => Err(LangIdError::UnsupportedInput),
        }
    }
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
