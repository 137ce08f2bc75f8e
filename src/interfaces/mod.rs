// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod renderer;

pub use event_handler::{
    EmissionEvent, EmissionHandler, LoggingEmissionHandler, NoOpEmissionHandler,
};
pub use renderer::{AssertionRenderer, ClientRuntimeRenderer};
