use serde_yaml::{Mapping, Value};
use tracing::{info, warn};

use crate::tree::{NodeKind, kind_of};

/// Keys whose values carry example data. Matching is exact; keys merely
/// containing "example" are not markers.
pub const EXAMPLE_MARKERS: [&str; 3] = ["example", "examples", "x-example"];

pub fn is_example_marker(key: &str) -> bool {
    EXAMPLE_MARKERS.contains(&key)
}

/// Observational event emitted during extraction. Carries no control-flow
/// meaning; extraction always continues over siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    ExampleFound { key: String },
    UnexpectedShape { key: String, kind: NodeKind },
}

/// Receiver for extraction diagnostics. Injected so callers (and tests) can
/// observe what was found or skipped without capturing output streams.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`. The CLI default.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::ExampleFound { key } => info!("found example at key {key}"),
            Diagnostic::UnexpectedShape { key, kind } => {
                warn!("unexpected {kind} value for key {key}")
            }
        }
    }
}

/// Accumulates diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Diagnostic>,
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.events.push(diagnostic);
    }
}

/// Walk `tree` depth-first and collect every sub-tree found under an example
/// marker, preserving the mapping keys (and synthesized `key[index]` keys for
/// sequence elements) leading to it. The input is never mutated; the result
/// is empty when no examples exist anywhere.
///
/// Marker values that are mappings or string/integer/boolean scalars are
/// copied verbatim. Intermediate mappings that contribute nothing are omitted
/// so the result stays sparse. Floats, nulls, and tagged values are skipped
/// with an `UnexpectedShape` diagnostic wherever they appear.
pub fn extract_examples(tree: &Mapping, sink: &mut dyn DiagnosticSink) -> Mapping {
    let mut out = Mapping::new();
    for (key, value) in tree {
        let name = match key.as_str() {
            Some(name) => name,
            None => {
                // Keys are strings after normalization; anything else cannot
                // participate in matching.
                sink.emit(Diagnostic::UnexpectedShape {
                    key: format!("<{} key>", kind_of(key)),
                    kind: kind_of(value),
                });
                continue;
            }
        };
        match value {
            Value::Mapping(child) => {
                if is_example_marker(name) {
                    sink.emit(Diagnostic::ExampleFound {
                        key: name.to_string(),
                    });
                    out.insert(key.clone(), value.clone());
                } else {
                    let nested = extract_examples(child, sink);
                    if !nested.is_empty() {
                        out.insert(key.clone(), Value::Mapping(nested));
                    }
                }
            }
            Value::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let Value::Mapping(element) = item {
                        let nested = extract_examples(element, sink);
                        if !nested.is_empty() {
                            out.insert(
                                Value::String(format!("{name}[{index}]")),
                                Value::Mapping(nested),
                            );
                        }
                    }
                }
            }
            Value::String(_) | Value::Bool(_) => {
                if is_example_marker(name) {
                    sink.emit(Diagnostic::ExampleFound {
                        key: name.to_string(),
                    });
                    out.insert(key.clone(), value.clone());
                }
            }
            Value::Number(number) => {
                if number.is_f64() {
                    sink.emit(Diagnostic::UnexpectedShape {
                        key: name.to_string(),
                        kind: NodeKind::Float,
                    });
                } else if is_example_marker(name) {
                    sink.emit(Diagnostic::ExampleFound {
                        key: name.to_string(),
                    });
                    out.insert(key.clone(), value.clone());
                }
            }
            Value::Null | Value::Tagged(_) => {
                sink.emit(Diagnostic::UnexpectedShape {
                    key: name.to_string(),
                    kind: kind_of(value),
                });
            }
        }
    }
    out
}
