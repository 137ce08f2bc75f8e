// ============================================================================
// Constraint Emitter Library
// Numeric constraint validation emitter for client-SDK generators
// ============================================================================

//! # Constraint Emitter
//!
//! Decides which range and multiple-of checks apply to a numeric schema
//! property and emits them as renderer-agnostic assertion descriptors.
//!
//! ## Features
//!
//! - **Deterministic emission**: checks follow a fixed evaluation order with
//!   `multipleOf` last, so generated code is diff-stable across regenerations
//! - **No redundant checks**: at most one lower and one upper bound
//! - **Explicit presence**: a zero bound is a real bound
//! - **Pluggable rendering** through [`AssertionRenderer`](interfaces::AssertionRenderer)
//! - **JSON Schema adapter** for draft-4 and draft-6+ exclusive bounds (`serde` feature)
//!
//! ## Example
//!
//! ```rust
//! use constraint_emitter::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let schema = NumericSchema::new(NumericKind::Int32)
//!     .with_minimum(Decimal::from(5))
//!     .with_exclusive_minimum(true)
//!     .with_maximum(Decimal::from(10))
//!     .with_exclusive_maximum(true);
//!
//! let emission = emit(&schema, &PropertyRef::new("Count"));
//! assert_eq!(
//!     emission.assertions(),
//!     vec![
//!         Assertion::GreaterThan(Decimal::from(5)),
//!         Assertion::LessThan(Decimal::from(10)),
//!     ]
//! );
//!
//! let code = ClientRuntimeRenderer::default().render_emission(&emission);
//! assert!(code.starts_with("await eventListener.AssertIsGreaterThan(nameof(Count),Count,5);"));
//!
//! assert!(check_emission(&emission, Decimal::from(7)).is_ok());
//! assert!(check_emission(&emission, Decimal::from(10)).is_err());
//! ```

pub mod domain;
pub mod emitter;
pub mod interfaces;
pub mod runtime;
pub mod schema;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Assertion, AssertionDescriptor, EmitterConfig, NumericKind, NumericSchema, PropertyRef,
        RenderConfig, ZeroBoundPolicy,
    };
    pub use crate::emitter::{emit, emit_batch, ConstraintEmitter, Emission};
    pub use crate::interfaces::{
        AssertionRenderer, ClientRuntimeRenderer, EmissionEvent, EmissionHandler,
        LoggingEmissionHandler, NoOpEmissionHandler,
    };
    pub use crate::runtime::{check_emission, ConstraintViolation};
    pub use crate::schema::SchemaError;
}
