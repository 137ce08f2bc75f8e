// ============================================================================
// Runtime Errors
// Error raised when a live value fails an emitted assertion
// ============================================================================

use crate::domain::{Assertion, AssertionDescriptor};
use rust_decimal::Decimal;
use std::fmt;

/// A value that does not satisfy one of its property's constraints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintViolation {
    /// Name of the property that failed validation
    pub property: String,

    /// The check that failed
    pub assertion: Assertion,

    /// Value that was checked
    pub actual: Decimal,
}

impl ConstraintViolation {
    pub fn new(descriptor: &AssertionDescriptor, actual: Decimal) -> Self {
        Self {
            property: descriptor.property.name.clone(),
            assertion: descriptor.assertion,
            actual,
        }
    }

    /// Violated schema keyword (e.g., "minimum", "multipleOf")
    pub fn constraint(&self) -> &'static str {
        self.assertion.keyword()
    }

    /// Bound or divisor of the violated constraint
    pub fn bound(&self) -> Decimal {
        self.assertion.operand()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = match self.assertion {
            Assertion::GreaterThanOrEqual(_) => "greater than or equal to",
            Assertion::GreaterThan(_) => "greater than",
            Assertion::LessThanOrEqual(_) => "less than or equal to",
            Assertion::LessThan(_) => "less than",
            Assertion::MultipleOf(_) => "a multiple of",
        };
        write!(
            f,
            "value of '{}' must be {} {} ({} violated), got {}",
            self.property,
            requirement,
            self.bound(),
            self.constraint(),
            self.actual
        )
    }
}

impl std::error::Error for ConstraintViolation {}

/// Result type alias for runtime checks
pub type RuntimeResult<T> = Result<T, ConstraintViolation>;
