// ============================================================================
// Domain Models Module
// Schema model, assertion descriptors and configuration
// ============================================================================

pub mod assertion;
pub mod config;
pub mod schema;

pub use assertion::{Assertion, AssertionDescriptor, PropertyRef};
pub use config::{EmitterConfig, RenderConfig, ZeroBoundPolicy};
pub use schema::{NumericKind, NumericSchema};
