// ============================================================================
// Numeric Schema Model
// Constraint values carried from the schema source to the emitter
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Target numeric type declared for a generated property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    /// 32-bit signed integer (`integer` / `int32`)
    Int32,
    /// 64-bit signed integer (`integer` / `int64`)
    Int64,
    /// Single precision float (`number` / `float`)
    Float,
    /// Double precision float (`number` / `double`)
    #[default]
    Double,
    /// Arbitrary precision decimal (`number` / `decimal`)
    Decimal,
}

impl NumericKind {
    /// Type name used in generated declarations
    pub fn declaration(&self) -> &'static str {
        match self {
            NumericKind::Int32 => "int",
            NumericKind::Int64 => "long",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
            NumericKind::Decimal => "decimal",
        }
    }

    /// Whether the kind holds whole numbers only
    pub fn is_integral(&self) -> bool {
        matches!(self, NumericKind::Int32 | NumericKind::Int64)
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.declaration())
    }
}

/// Range and multiple-of constraints of a numeric property.
///
/// Built once per modeled property and read-only afterwards. A bound is
/// active whenever it is `Some`, zero included. Exclusivity flags have no
/// effect without their bound. Nothing here checks that the constraints are
/// consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NumericSchema {
    #[cfg_attr(feature = "serde", serde(default))]
    kind: NumericKind,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    minimum: Option<Decimal>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    maximum: Option<Decimal>,

    #[cfg_attr(feature = "serde", serde(default))]
    exclusive_minimum: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    exclusive_maximum: bool,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    multiple_of: Option<Decimal>,
}

impl NumericSchema {
    /// Create an unconstrained schema of the given kind
    pub fn new(kind: NumericKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    pub fn with_minimum(mut self, minimum: Decimal) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: Decimal) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn with_exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = exclusive;
        self
    }

    pub fn with_exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = exclusive;
        self
    }

    pub fn with_multiple_of(mut self, divisor: Decimal) -> Self {
        self.multiple_of = Some(divisor);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    #[inline]
    pub fn minimum(&self) -> Option<Decimal> {
        self.minimum
    }

    #[inline]
    pub fn maximum(&self) -> Option<Decimal> {
        self.maximum
    }

    #[inline]
    pub fn exclusive_minimum(&self) -> bool {
        self.exclusive_minimum
    }

    #[inline]
    pub fn exclusive_maximum(&self) -> bool {
        self.exclusive_maximum
    }

    #[inline]
    pub fn multiple_of(&self) -> Option<Decimal> {
        self.multiple_of
    }

    /// True when no bound and no divisor is present
    pub fn is_unconstrained(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none() && self.multiple_of.is_none()
    }
}
