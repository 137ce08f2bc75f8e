// ============================================================================
// Batch Emission
// Fans independent schemas across scoped worker threads
// ============================================================================

use super::constraint_emitter::{ConstraintEmitter, Emission};
use crate::domain::{NumericSchema, PropertyRef};
use crate::interfaces::{EmissionEvent, EmissionHandler};
use std::panic::resume_unwind;

/// Emit assertions for many properties at once.
///
/// Each schema is independent, so the input is split into contiguous chunks
/// and emitted on scoped threads. Results come back in input order, and one
/// event per property is reported to `handler` afterwards.
pub fn emit_batch(
    emitter: &ConstraintEmitter,
    items: &[(PropertyRef, NumericSchema)],
    handler: &dyn EmissionHandler,
) -> Vec<Emission> {
    if items.is_empty() {
        return Vec::new();
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(items.len());
    let chunk_size = items.len().div_ceil(workers);

    tracing::debug!(
        properties = items.len(),
        workers,
        "emitting numeric constraints in batch"
    );

    let emissions: Vec<Emission> = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|(property, schema)| emitter.emit(schema, property))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|panic| resume_unwind(panic)))
            .collect()
    })
    .unwrap_or_else(|panic| resume_unwind(panic));

    handler.on_events(emissions.iter().map(EmissionEvent::from_emission).collect());

    emissions
}
