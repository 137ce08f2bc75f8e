// ============================================================================
// Emitter Module
// Maps numeric schemas to ordered assertion descriptors
// ============================================================================

mod constraint_emitter;

pub mod batch;

pub use batch::emit_batch;
pub use constraint_emitter::{emit, ConstraintEmitter, Emission, MAX_ASSERTIONS};
