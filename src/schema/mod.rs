// ============================================================================
// Schema Module
// Adapters from schema sources into the numeric schema model
// ============================================================================

mod errors;

#[cfg(feature = "serde")]
pub mod json;

pub use errors::{SchemaError, SchemaResult};

#[cfg(feature = "serde")]
pub use json::from_json;
