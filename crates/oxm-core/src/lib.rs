//! oxm-core: example extraction and merge for OpenAPI documents
//!
//! This crate focuses on a small, well-factored surface:
//! - Generic document tree over `serde_yaml::Value`, with key normalization
//! - Example extractor (marker keys `example`/`examples`/`x-example`) with
//!   an injectable diagnostic sink
//! - Path matcher and recursive in-place merger under a missing-key policy
//! - YAML/JSON document loading and YAML serialization for CLI use
//!
pub mod error;
pub mod extract;
pub mod merge;
pub mod tree;
pub mod yaml;

pub use error::DocumentError;
pub use extract::{
    Diagnostic, DiagnosticSink, EXAMPLE_MARKERS, RecordingSink, TracingSink, extract_examples,
    is_example_marker,
};
pub use merge::{DEFAULT_ROOT_KEY, MergeOptions, match_paths, merge_into_root, merge_mappings};
pub use tree::{NodeKind, kind_of, normalize_keys};
pub use yaml::{backup_file, document_to_string, load_document, save_document};
