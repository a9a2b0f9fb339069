//! Extractors and error translation shared by all HTTP modules

pub mod error;
pub mod extract;
pub mod validated_json;

pub use error::ApiError;
pub use extract::IdPath;
pub use validated_json::ValidatedJson;
