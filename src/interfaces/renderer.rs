// ============================================================================
// Assertion Renderer Interface
// Turns assertion descriptors into target-language statements
// ============================================================================

use crate::domain::{Assertion, AssertionDescriptor, RenderConfig};
use crate::emitter::Emission;

/// Maps descriptors to statements in a target language.
///
/// Every assertion variant corresponds to exactly one runtime operation.
/// Rendered statements take the property name, the value expression and the
/// bound or divisor, and fail at runtime with a validation error.
pub trait AssertionRenderer: Send + Sync {
    /// Render a single descriptor as one statement
    fn render(&self, descriptor: &AssertionDescriptor) -> String;

    /// Runtime operation invoked for an assertion
    fn operation_name(&self, assertion: &Assertion) -> &'static str {
        match assertion {
            Assertion::GreaterThanOrEqual(_) => "AssertIsGreaterThanOrEqual",
            Assertion::GreaterThan(_) => "AssertIsGreaterThan",
            Assertion::LessThanOrEqual(_) => "AssertIsLessThanOrEqual",
            Assertion::LessThan(_) => "AssertIsLessThan",
            Assertion::MultipleOf(_) => "AssertIsMultipleOf",
        }
    }

    /// Render a whole emission, one statement per line
    fn render_emission(&self, emission: &Emission) -> String {
        emission
            .iter()
            .map(|descriptor| self.render(descriptor))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders calls against the generated client runtime's event listener:
///
/// ```text
/// await eventListener.AssertIsGreaterThanOrEqual(nameof(Count),Count,5);
/// ```
#[derive(Debug, Clone)]
pub struct ClientRuntimeRenderer {
    config: RenderConfig,
}

impl ClientRuntimeRenderer {
    /// Creates a renderer, validating the configuration first
    pub fn new(config: RenderConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Default for ClientRuntimeRenderer {
    fn default() -> Self {
        Self {
            config: RenderConfig::client_runtime(),
        }
    }
}

impl AssertionRenderer for ClientRuntimeRenderer {
    fn render(&self, descriptor: &AssertionDescriptor) -> String {
        format!(
            "{indent}{prefix}{listener}.{op}(nameof({name}),{expr},{operand});",
            indent = " ".repeat(self.config.indent),
            prefix = if self.config.await_calls { "await " } else { "" },
            listener = self.config.listener,
            op = self.operation_name(&descriptor.assertion),
            name = descriptor.property.name,
            expr = descriptor.property.expression,
            operand = descriptor.assertion.operand(),
        )
    }
}
