// ============================================================================
// Assertion Descriptors
// Renderer-agnostic output of the constraint emitter
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference to the property under validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyRef {
    /// Declared property name, reported in diagnostics
    pub name: String,

    /// Expression that reads the value in generated code
    pub expression: String,
}

impl PropertyRef {
    /// Reference whose expression is the bare property name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            expression: name.clone(),
            name,
        }
    }

    /// Builder method: read the value through a different expression
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single check on a numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Assertion {
    /// value >= bound (inclusive minimum)
    GreaterThanOrEqual(Decimal),

    /// value > bound (exclusive minimum)
    GreaterThan(Decimal),

    /// value <= bound (inclusive maximum)
    LessThanOrEqual(Decimal),

    /// value < bound (exclusive maximum)
    LessThan(Decimal),

    /// value is an integer multiple of the divisor
    MultipleOf(Decimal),
}

impl Assertion {
    /// The bound or divisor carried by the assertion
    #[inline]
    pub fn operand(&self) -> Decimal {
        match *self {
            Assertion::GreaterThanOrEqual(v)
            | Assertion::GreaterThan(v)
            | Assertion::LessThanOrEqual(v)
            | Assertion::LessThan(v)
            | Assertion::MultipleOf(v) => v,
        }
    }

    /// Schema keyword this assertion enforces
    pub fn keyword(&self) -> &'static str {
        match self {
            Assertion::GreaterThanOrEqual(_) => "minimum",
            Assertion::GreaterThan(_) => "exclusiveMinimum",
            Assertion::LessThanOrEqual(_) => "maximum",
            Assertion::LessThan(_) => "exclusiveMaximum",
            Assertion::MultipleOf(_) => "multipleOf",
        }
    }

    /// Index of the check in the emitter's fixed evaluation order
    pub fn step(&self) -> u8 {
        match self {
            Assertion::GreaterThanOrEqual(_) => 0,
            Assertion::LessThanOrEqual(_) => 1,
            Assertion::GreaterThan(_) => 2,
            Assertion::LessThan(_) => 3,
            Assertion::MultipleOf(_) => 4,
        }
    }

    pub fn is_lower_bound(&self) -> bool {
        matches!(
            self,
            Assertion::GreaterThanOrEqual(_) | Assertion::GreaterThan(_)
        )
    }

    pub fn is_upper_bound(&self) -> bool {
        matches!(self, Assertion::LessThanOrEqual(_) | Assertion::LessThan(_))
    }

    /// Evaluate the check against a live value
    pub fn holds(&self, value: Decimal) -> bool {
        match *self {
            Assertion::GreaterThanOrEqual(bound) => value >= bound,
            Assertion::GreaterThan(bound) => value > bound,
            Assertion::LessThanOrEqual(bound) => value <= bound,
            Assertion::LessThan(bound) => value < bound,
            // Only zero is a multiple of zero
            Assertion::MultipleOf(divisor) if divisor.is_zero() => value.is_zero(),
            Assertion::MultipleOf(divisor) => value
                .checked_rem(divisor)
                .map(|rem| rem.is_zero())
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assertion::GreaterThanOrEqual(v) => write!(f, ">= {}", v),
            Assertion::GreaterThan(v) => write!(f, "> {}", v),
            Assertion::LessThanOrEqual(v) => write!(f, "<= {}", v),
            Assertion::LessThan(v) => write!(f, "< {}", v),
            Assertion::MultipleOf(v) => write!(f, "multiple of {}", v),
        }
    }
}

/// One emitted assertion, bound to the property it validates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssertionDescriptor {
    /// Property being validated
    pub property: PropertyRef,

    /// The check to perform
    pub assertion: Assertion,

    /// Zero-based position within the emission
    pub position: u8,
}

impl AssertionDescriptor {
    pub fn new(property: PropertyRef, assertion: Assertion, position: u8) -> Self {
        Self {
            property,
            assertion,
            position,
        }
    }
}
