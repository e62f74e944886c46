//! # Text Preprocessing
//!
//! Strips punctuation and symbols from text before it reaches the classifier.
//! Letters (with their combining marks), digits and whitespace survive;
//! everything else is removed in place, so word spacing is left untouched.

use regex::Regex;

use crate::error::{LangIdError, Result};
use crate::types::TextInput;

/// Anything that is not a letter, combining mark, number or whitespace.
const STRIP_PATTERN: &str = r"[^\p{L}\p{M}\p{N}\s]+";

/// Punctuation and symbol stripper.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    re_strip: Regex,
}

impl Preprocessor {
    /// Constructs a new `Preprocessor` with its pattern compiled.
    ///
    /// # Errors
    ///
    /// Returns `LangIdError::Regex` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_strip: Regex::new(STRIP_PATTERN)?,
        })
    }

    /// Cleans a single string.
    ///
    /// # Examples
    /// ```
    /// use langident_core::preprocess::Preprocessor;
    ///
    /// let preprocessor = Preprocessor::new().unwrap();
    /// assert_eq!(preprocessor.clean("This !?,is \"some@#|` text."), "This is some text");
    /// ```
    pub fn clean(&self, text: &str) -> String {
        self.re_strip.replace_all(text, "").into_owned()
    }

    /// Cleans every text in `input`, keeping its shape, length and order.
    pub fn preprocess(&self, input: &TextInput) -> TextInput {
        input.map(|text| self.clean(text))
    }

    /// Validates `text` as a [`TextInput`] and cleans it.
    ///
    /// Strings and string lists always convert; a [`serde_json::Value`] is
    /// checked for shape first.
    ///
    /// # Errors
    ///
    /// Returns `LangIdError::NonStringElement` for a list holding a non-string
    /// and `LangIdError::UnsupportedInput` for any other non-text shape.
    pub fn preprocess_text<T>(&self, text: T) -> Result<TextInput>
    where
        T: TryInto<TextInput>,
        LangIdError: From<T::Error>,
    {
        let input = text.try_into()?;
        Ok(self.preprocess(&input))
    }
}

/// Convenience function to preprocess text with a fresh [`Preprocessor`].
pub fn preprocess_text<T>(text: T) -> Result<TextInput>
where
    T: TryInto<TextInput>,
    LangIdError: From<T::Error>,
{
    Preprocessor::new()?.preprocess_text(text)
}
