pub mod input;
pub mod prediction;
pub mod variant;

pub use input::TextInput;
pub use prediction::{LABEL_PREFIX, Prediction, Predictions};
pub use variant::ModelVariant;
