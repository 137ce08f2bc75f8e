// ============================================================================
// Runtime Checker
// Evaluates emitted assertions against live values
// ============================================================================

use super::errors::{ConstraintViolation, RuntimeResult};
use crate::domain::AssertionDescriptor;
use crate::emitter::Emission;
use rust_decimal::Decimal;

/// Check a value against every descriptor, in order.
///
/// Stops at the first failing assertion and reports it; later assertions
/// are not evaluated.
pub fn check<'a, I>(descriptors: I, value: Decimal) -> RuntimeResult<()>
where
    I: IntoIterator<Item = &'a AssertionDescriptor>,
{
    match descriptors
        .into_iter()
        .find(|descriptor| !descriptor.assertion.holds(value))
    {
        Some(failed) => {
            tracing::trace!(
                property = %failed.property.name,
                constraint = failed.assertion.keyword(),
                "constraint violated"
            );
            Err(ConstraintViolation::new(failed, value))
        }
        None => Ok(()),
    }
}

/// Check a value against an emission
#[inline]
pub fn check_emission(emission: &Emission, value: Decimal) -> RuntimeResult<()> {
    check(emission, value)
}

/// Check an optional value; absent values pass unless the property is required
pub fn check_optional(
    emission: &Emission,
    value: Option<Decimal>,
    required: bool,
) -> Result<(), CheckError> {
    match value {
        Some(v) => check(emission, v).map_err(CheckError::Violation),
        None if required => Err(CheckError::Missing(emission.property().name.clone())),
        None => Ok(()),
    }
}

/// Failure of an optional-value check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Required property has no value
    Missing(String),
    /// Value present but violates a constraint
    Violation(ConstraintViolation),
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::Missing(property) => write!(f, "required property '{}' is missing", property),
            CheckError::Violation(violation) => write!(f, "{}", violation),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Missing(_) => None,
            CheckError::Violation(violation) => Some(violation),
        }
    }
}
