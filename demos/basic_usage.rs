// ============================================================================
// Basic Usage Example
// ============================================================================

use constraint_emitter::prelude::*;
use constraint_emitter::schema::from_json;
use rust_decimal::Decimal;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Constraint Emitter Example ===\n");

    // Schemas as they appear in API descriptions (both exclusive-bound dialects)
    let nodes = vec![
        ("Count", json!({ "type": "integer", "minimum": 5 })),
        (
            "Ratio",
            json!({ "type": "number", "minimum": 0, "exclusiveMinimum": true, "maximum": 1 }),
        ),
        (
            "PageSize",
            json!({ "type": "integer", "format": "int64", "maximum": 100, "multipleOf": 4 }),
        ),
        ("Offset", json!({ "type": "integer", "exclusiveMinimum": -1 })),
        ("Anything", json!({ "type": "number" })),
    ];

    let mut items = Vec::new();
    for (name, node) in &nodes {
        match from_json(node) {
            Ok(schema) => items.push((PropertyRef::new(*name), schema)),
            Err(err) => println!("Skipping {}: {}", name, err),
        }
    }

    // Emit all properties at once
    let emitter = ConstraintEmitter::default();
    let emissions = emit_batch(&emitter, &items, &LoggingEmissionHandler);

    // Render as client-runtime calls
    let renderer = ClientRuntimeRenderer::default();
    for ((_, schema), emission) in items.iter().zip(&emissions) {
        println!(
            "\n// {} {} ({} checks)",
            schema.kind(),
            emission.property(),
            emission.len()
        );
        let code = renderer.render_emission(emission);
        if !code.is_empty() {
            println!("{}", code);
        }
    }

    // Evaluate the same checks against live values
    println!("\n=== Runtime Checks ===");
    let page_size = &emissions[2];
    for value in [Decimal::from(64), Decimal::from(66), Decimal::from(104)] {
        match check_emission(page_size, value) {
            Ok(()) => println!("  {} = {} accepted", page_size.property(), value),
            Err(violation) => println!("  rejected: {}", violation),
        }
    }

    // Legacy policy drops zero bounds
    println!("\n=== Zero Bound Policies ===");
    let ratio = &items[1];
    let legacy = ConstraintEmitter::new(EmitterConfig::legacy_compatible());
    println!(
        "  explicit: {} checks, legacy: {} checks",
        emitter.emit(&ratio.1, &ratio.0).len(),
        legacy.emit(&ratio.1, &ratio.0).len()
    );
}
