pub mod types;
pub mod classification;

pub use types::SiftError;
pub use classification::ErrorClassification;
