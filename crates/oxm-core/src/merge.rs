use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Top-level key under which endpoint paths live in an API description.
pub const DEFAULT_ROOT_KEY: &str = "paths";

/// Merge policy. `add_missing` gates insertion of example keys absent from
/// the original document; `root_key` names the top-level mapping under which
/// path matching happens, for documents that deviate from the usual layout.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub add_missing: bool,
    pub root_key: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            add_missing: false,
            root_key: DEFAULT_ROOT_KEY.to_string(),
        }
    }
}

/// Keys of `example_paths` that also exist in `original_paths`, in example
/// iteration order. Example-only keys are dropped: there is nowhere to merge
/// them into. One level deep; the recursive merge establishes deeper
/// correspondence.
pub fn match_paths(original_paths: &Mapping, example_paths: &Mapping) -> Vec<Value> {
    let mut matched = Vec::new();
    for (key, _) in example_paths {
        if original_paths.contains_key(key) {
            matched.push(key.clone());
        }
    }
    matched
}

/// Entry point: match path items under `opts.root_key` in both documents and
/// recursively merge each matched pair. A document without that mapping (or
/// with a non-mapping value there) yields a no-op.
pub fn merge_into_root(original: &mut Mapping, examples: &Mapping, opts: &MergeOptions) {
    let root_key = Value::String(opts.root_key.clone());
    let Some(example_paths) = examples.get(&root_key).and_then(Value::as_mapping) else {
        debug!("no {} mapping in extracted examples, nothing to merge", opts.root_key);
        return;
    };
    let Some(original_paths) = original.get_mut(&root_key).and_then(Value::as_mapping_mut) else {
        debug!("no {} mapping in original document, nothing to merge", opts.root_key);
        return;
    };
    for key in match_paths(original_paths, example_paths) {
        let Some(example_item) = example_paths.get(&key).and_then(Value::as_mapping) else {
            continue;
        };
        let Some(original_item) = original_paths.get_mut(&key).and_then(Value::as_mapping_mut)
        else {
            continue;
        };
        merge_mappings(original_item, example_item, opts.add_missing);
    }
}

/// Recursively merge example values into `original`, in place.
///
/// Per example key: matching mappings recurse; a sequence in the original
/// receives the example mapping broadcast into every mapping element; any
/// other existing value (scalar or type mismatch) is overwritten. Absent keys
/// are inserted only when `add_missing` is set. Re-running the same merge is
/// a no-op either way.
///
/// The broadcast applies one example payload to all elements of a sequence
/// uniformly; the `key[index]` form synthesized during extraction is not
/// replayed positionally here, so those keys match or miss like any other
/// key. Index-aligned sequence merging is a known, deliberate limitation.
pub fn merge_mappings(original: &mut Mapping, examples: &Mapping, add_missing: bool) {
    for (key, value) in examples {
        if !original.contains_key(key) {
            if add_missing {
                original.insert(key.clone(), value.clone());
            }
            continue;
        }
        let Some(existing) = original.get_mut(key) else {
            continue;
        };
        match (existing, value) {
            (Value::Mapping(original_child), Value::Mapping(example_child)) => {
                merge_mappings(original_child, example_child, add_missing);
            }
            (Value::Sequence(items), Value::Mapping(example_child)) => {
                for item in items.iter_mut() {
                    if let Value::Mapping(element) = item {
                        merge_mappings(element, example_child, add_missing);
                    }
                }
            }
            (Value::Sequence(_), _) => {
                // a non-mapping payload has nothing to broadcast
            }
            (slot, _) => *slot = value.clone(),
        }
    }
}
