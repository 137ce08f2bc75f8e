// ============================================================================
// Constraint Emitter
// Decides which range and multiple-of checks apply to a numeric schema
// ============================================================================

use crate::domain::{
    Assertion, AssertionDescriptor, EmitterConfig, NumericSchema, PropertyRef, ZeroBoundPolicy,
};
use arrayvec::ArrayVec;
use rust_decimal::Decimal;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on descriptors per emission: one lower, one upper, one multiple-of
pub const MAX_ASSERTIONS: usize = 3;

/// Ordered assertions emitted for one property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EmissionParts"))]
pub struct Emission {
    property: PropertyRef,
    descriptors: ArrayVec<AssertionDescriptor, MAX_ASSERTIONS>,
}

impl Emission {
    fn new(property: PropertyRef) -> Self {
        Self {
            property,
            descriptors: ArrayVec::new(),
        }
    }

    fn push(&mut self, assertion: Assertion) {
        let position = self.descriptors.len() as u8;
        self.descriptors.push(AssertionDescriptor::new(
            self.property.clone(),
            assertion,
            position,
        ));
    }

    /// Property the emission validates
    pub fn property(&self) -> &PropertyRef {
        &self.property
    }

    /// Descriptors in evaluation order
    pub fn descriptors(&self) -> &[AssertionDescriptor] {
        &self.descriptors
    }

    /// The bare assertions, in evaluation order
    pub fn assertions(&self) -> Vec<Assertion> {
        self.descriptors.iter().map(|d| d.assertion).collect()
    }
}

/// Unchecked wire form of an [`Emission`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct EmissionParts {
    property: PropertyRef,
    descriptors: Vec<AssertionDescriptor>,
}

#[cfg(feature = "serde")]
impl TryFrom<EmissionParts> for Emission {
    type Error = String;

    fn try_from(parts: EmissionParts) -> Result<Self, Self::Error> {
        if parts.descriptors.len() > MAX_ASSERTIONS {
            return Err(format!(
                "emission holds {} descriptors, at most {} allowed",
                parts.descriptors.len(),
                MAX_ASSERTIONS
            ));
        }

        let mut emission = Emission::new(parts.property);
        let mut last_step = None;
        for (index, descriptor) in parts.descriptors.into_iter().enumerate() {
            if descriptor.property != emission.property {
                return Err(format!(
                    "descriptor {} validates '{}', emission is for '{}'",
                    index, descriptor.property, emission.property
                ));
            }
            if descriptor.position as usize != index {
                return Err(format!(
                    "descriptor {} has position {}",
                    index, descriptor.position
                ));
            }

            let assertion = descriptor.assertion;
            if last_step.is_some_and(|step| assertion.step() <= step) {
                return Err(format!("'{}' is out of evaluation order", assertion.keyword()));
            }
            let duplicate_bound = emission.iter().any(|d| {
                (d.assertion.is_lower_bound() && assertion.is_lower_bound())
                    || (d.assertion.is_upper_bound() && assertion.is_upper_bound())
            });
            if duplicate_bound {
                return Err(format!(
                    "'{}' duplicates a bound already in the emission",
                    assertion.keyword()
                ));
            }

            last_step = Some(assertion.step());
            emission.push(assertion);
        }

        Ok(emission)
    }
}

impl Deref for Emission {
    type Target = [AssertionDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.descriptors
    }
}

impl<'a> IntoIterator for &'a Emission {
    type Item = &'a AssertionDescriptor;
    type IntoIter = std::slice::Iter<'a, AssertionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Stateless emitter; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct ConstraintEmitter {
    config: EmitterConfig,
}

impl ConstraintEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Emit the assertions a value of `property` must pass.
    ///
    /// Checks are evaluated in a fixed order: inclusive minimum, inclusive
    /// maximum, exclusive minimum, exclusive maximum, multiple-of. The
    /// exclusivity flags make each inclusive/exclusive pair mutually
    /// exclusive, so at most one lower and one upper bound is emitted and
    /// multiple-of is always last. The bounds are not always lower-first:
    /// an exclusive minimum with an inclusive maximum yields
    /// `[LessThanOrEqual(max), GreaterThan(min)]`.
    pub fn emit(&self, schema: &NumericSchema, property: &PropertyRef) -> Emission {
        let minimum = self.active(schema.minimum());
        let maximum = self.active(schema.maximum());
        let multiple_of = self.active(schema.multiple_of());

        let mut emission = Emission::new(property.clone());

        if let Some(min) = minimum.filter(|_| !schema.exclusive_minimum()) {
            emission.push(Assertion::GreaterThanOrEqual(min));
        }
        if let Some(max) = maximum.filter(|_| !schema.exclusive_maximum()) {
            emission.push(Assertion::LessThanOrEqual(max));
        }
        if let Some(min) = minimum.filter(|_| schema.exclusive_minimum()) {
            emission.push(Assertion::GreaterThan(min));
        }
        if let Some(max) = maximum.filter(|_| schema.exclusive_maximum()) {
            emission.push(Assertion::LessThan(max));
        }
        if let Some(divisor) = multiple_of {
            emission.push(Assertion::MultipleOf(divisor));
        }

        tracing::trace!(
            property = %property.name,
            assertions = emission.len(),
            "emitted numeric constraints"
        );

        emission
    }

    #[inline]
    fn active(&self, value: Option<Decimal>) -> Option<Decimal> {
        match self.config.zero_bounds {
            ZeroBoundPolicy::Explicit => value,
            ZeroBoundPolicy::Truthy => value.filter(|v| !v.is_zero()),
        }
    }
}

/// Emit with the default configuration (zero bounds are active)
pub fn emit(schema: &NumericSchema, property: &PropertyRef) -> Emission {
    ConstraintEmitter::default().emit(schema, property)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn decimal() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..1_000_000, 0u32..4).prop_map(|(n, scale)| Decimal::new(n, scale))
    }

    prop_compose! {
        fn schema()(
            minimum in proptest::option::of(decimal()),
            maximum in proptest::option::of(decimal()),
            exclusive_minimum in any::<bool>(),
            exclusive_maximum in any::<bool>(),
            multiple_of in proptest::option::of(decimal()),
        ) -> NumericSchema {
            let mut schema = NumericSchema::default()
                .with_exclusive_minimum(exclusive_minimum)
                .with_exclusive_maximum(exclusive_maximum);
            if let Some(v) = minimum {
                schema = schema.with_minimum(v);
            }
            if let Some(v) = maximum {
                schema = schema.with_maximum(v);
            }
            if let Some(v) = multiple_of {
                schema = schema.with_multiple_of(v);
            }
            schema
        }
    }

    proptest! {
        #[test]
        fn lower_bound_matches_exclusivity(schema in schema()) {
            let out = emit(&schema, &PropertyRef::new("v")).assertions();
            let inclusive = out.iter().filter(|a| matches!(a, Assertion::GreaterThanOrEqual(_))).count();
            let exclusive = out.iter().filter(|a| matches!(a, Assertion::GreaterThan(_))).count();

            match schema.minimum() {
                Some(min) if schema.exclusive_minimum() => {
                    prop_assert_eq!(exclusive, 1);
                    prop_assert_eq!(inclusive, 0);
                    prop_assert!(out.contains(&Assertion::GreaterThan(min)));
                }
                Some(min) => {
                    prop_assert_eq!(inclusive, 1);
                    prop_assert_eq!(exclusive, 0);
                    prop_assert!(out.contains(&Assertion::GreaterThanOrEqual(min)));
                }
                None => {
                    prop_assert_eq!(inclusive + exclusive, 0);
                }
            }
        }

        #[test]
        fn upper_bound_matches_exclusivity(schema in schema()) {
            let out = emit(&schema, &PropertyRef::new("v")).assertions();
            let inclusive = out.iter().filter(|a| matches!(a, Assertion::LessThanOrEqual(_))).count();
            let exclusive = out.iter().filter(|a| matches!(a, Assertion::LessThan(_))).count();

            match schema.maximum() {
                Some(max) if schema.exclusive_maximum() => {
                    prop_assert_eq!(exclusive, 1);
                    prop_assert_eq!(inclusive, 0);
                    prop_assert!(out.contains(&Assertion::LessThan(max)));
                }
                Some(max) => {
                    prop_assert_eq!(inclusive, 1);
                    prop_assert_eq!(exclusive, 0);
                    prop_assert!(out.contains(&Assertion::LessThanOrEqual(max)));
                }
                None => {
                    prop_assert_eq!(inclusive + exclusive, 0);
                }
            }
        }

        #[test]
        fn multiple_of_is_last(schema in schema()) {
            let out = emit(&schema, &PropertyRef::new("v")).assertions();
            if let Some(divisor) = schema.multiple_of() {
                prop_assert_eq!(out.last(), Some(&Assertion::MultipleOf(divisor)));
            } else {
                prop_assert!(!out.iter().any(|a| matches!(a, Assertion::MultipleOf(_))));
            }
        }

        #[test]
        fn output_is_ordered_and_bounded(schema in schema()) {
            let out = emit(&schema, &PropertyRef::new("v")).assertions();
            prop_assert!(out.len() <= MAX_ASSERTIONS);
            let steps: Vec<u8> = out.iter().map(Assertion::step).collect();
            prop_assert!(steps.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(out.is_empty(), schema.is_unconstrained());
        }

        #[test]
        fn emission_is_deterministic(schema in schema()) {
            let copy = schema.clone();
            let prop = PropertyRef::new("v");
            prop_assert_eq!(emit(&schema, &prop), emit(&copy, &prop));
        }
    }
}
