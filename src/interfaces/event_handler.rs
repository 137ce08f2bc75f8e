// ============================================================================
// Emission Event Handler Interface
// Defines the contract for observing emitted constraints
// ============================================================================

use crate::domain::Assertion;
use crate::emitter::Emission;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events reported while emitting constraints
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmissionEvent {
    /// Assertions were emitted for a property
    PropertyEmitted {
        property: String,
        assertions: Vec<Assertion>,
    },

    /// The property carries no numeric constraints
    PropertyUnconstrained { property: String },
}

impl EmissionEvent {
    pub fn from_emission(emission: &Emission) -> Self {
        let property = emission.property().name.clone();
        if emission.is_empty() {
            EmissionEvent::PropertyUnconstrained { property }
        } else {
            EmissionEvent::PropertyEmitted {
                property,
                assertions: emission.assertions(),
            }
        }
    }
}

/// Event handler trait for processing emission events
/// Implementations can handle logging, metrics, generation reports, etc.
pub trait EmissionHandler: Send + Sync {
    /// Handle an emission event
    fn on_event(&self, event: EmissionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<EmissionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEmissionHandler;

impl EmissionHandler for NoOpEmissionHandler {
    fn on_event(&self, _event: EmissionEvent) {}
}

/// Logging event handler
pub struct LoggingEmissionHandler;

impl EmissionHandler for LoggingEmissionHandler {
    fn on_event(&self, event: EmissionEvent) {
        tracing::debug!("Constraint emitter event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NumericSchema, PropertyRef};
    use crate::emitter::emit;
    use rust_decimal::Decimal;

    #[test]
    fn test_event_from_emission() {
        let schema = NumericSchema::default().with_maximum(Decimal::from(3));
        let event = EmissionEvent::from_emission(&emit(&schema, &PropertyRef::new("size")));
        assert_eq!(
            event,
            EmissionEvent::PropertyEmitted {
                property: "size".to_string(),
                assertions: vec![Assertion::LessThanOrEqual(Decimal::from(3))],
            }
        );

        let event =
            EmissionEvent::from_emission(&emit(&NumericSchema::default(), &PropertyRef::new("x")));
        assert_eq!(
            event,
            EmissionEvent::PropertyUnconstrained {
                property: "x".to_string()
            }
        );
    }

    #[test]
    fn test_handlers_accept_events() {
        let event = EmissionEvent::PropertyUnconstrained {
            property: "x".to_string(),
        };
        NoOpEmissionHandler.on_event(event.clone());
        LoggingEmissionHandler.on_events(vec![event]);
        // Should not panic
    }
}
