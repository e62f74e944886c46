use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LangIdError;

/// Named pretrained model variants shipped with the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    /// Trained on the original corpus. Smaller artifact.
    Original,
    /// Trained on the augmented corpus.
    #[default]
    Augmented,
}

impl ModelVariant {
    /// All known variants.
    pub const ALL: [ModelVariant; 2] = [Self::Original, Self::Augmented];

    /// Artifact file name for this variant.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Original => "langdetect_original.bin",
            Self::Augmented => "langdetect_augmented.bin",
        }
    }

    /// Short identifier, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Augmented => "augmented",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = LangIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "augmented" => Ok(Self::Augmented),
            other => Err(LangIdError::Config(format!(
                "unknown model variant {other:?} (expected \"original\" or \"augmented\")"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_files() {
        assert_eq!(ModelVariant::Original.file_name(), "langdetect_original.bin");
        assert_eq!(
            ModelVariant::Augmented.file_name(),
            "langdetect_augmented.bin"
        );
    }

    #[test]
    fn parse_and_display_agree() {
        for variant in ModelVariant::ALL {
            assert_eq!(variant.to_string().parse::<ModelVariant>().unwrap(), variant);
        }
        assert_eq!(
            " Augmented ".parse::<ModelVariant>().unwrap(),
            ModelVariant::Augmented
        );
    }

    #[test]
    fn unknown_variant_is_a_config_error() {
        let err = "tiny".parse::<ModelVariant>().unwrap_err();
        assert!(matches!(err, LangIdError::Config(_)));
        assert!(err.to_string().contains("tiny"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ModelVariant::Original).unwrap();
        assert_eq!(json, r#""original""#);
        let back: ModelVariant = serde_json::from_str(r#""augmented""#).unwrap();
        assert_eq!(back, ModelVariant::Augmented);
    }
}
