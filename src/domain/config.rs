// ============================================================================
// Emitter and Renderer Configuration
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Zero Bound Policy
// ============================================================================

/// How a bound or divisor equal to zero is treated when deciding presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroBoundPolicy {
    /// Any present value is active, zero included
    #[default]
    Explicit,

    /// Zero is treated as absent
    /// - Matches SDKs generated by the older template-based generator
    /// - Use only to keep regenerated code byte-identical with such SDKs
    Truthy,
}

// ============================================================================
// Emitter Configuration
// ============================================================================

/// Configuration for the constraint emitter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmitterConfig {
    /// Presence rule for zero-valued bounds and divisors
    pub zero_bounds: ZeroBoundPolicy,
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the zero bound policy
    pub fn with_zero_bounds(mut self, policy: ZeroBoundPolicy) -> Self {
        self.zero_bounds = policy;
        self
    }

    /// Preset reproducing the legacy generator's presence checks
    pub fn legacy_compatible() -> Self {
        Self::new().with_zero_bounds(ZeroBoundPolicy::Truthy)
    }
}

// ============================================================================
// Render Configuration
// ============================================================================

/// Configuration for rendering descriptors as client-runtime calls
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Variable holding the validation event listener (e.g., "eventListener")
    pub listener: String,

    /// Prefix each call with `await`
    pub await_calls: bool,

    /// Spaces prepended to every rendered line
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::client_runtime()
    }
}

impl RenderConfig {
    /// Create a new configuration for the given listener variable
    pub fn new(listener: impl Into<String>) -> Self {
        Self {
            listener: listener.into(),
            await_calls: true,
            indent: 0,
        }
    }

    /// Builder method: toggle `await` prefixes
    pub fn with_await(mut self, await_calls: bool) -> Self {
        self.await_calls = await_calls;
        self
    }

    /// Builder method: set line indentation
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listener.is_empty() {
            return Err("Listener name cannot be empty".to_string());
        }

        if !is_identifier(&self.listener) {
            return Err(format!(
                "Listener name '{}' is not a valid identifier",
                self.listener
            ));
        }

        Ok(())
    }

    /// Preset matching the generated client runtime: `await eventListener.AssertIs...`
    pub fn client_runtime() -> Self {
        Self::new("eventListener")
    }
}

// A leading '@' (verbatim identifier) must still be followed by a name
fn is_identifier(name: &str) -> bool {
    let mut chars = name.strip_prefix('@').unwrap_or(name).chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
