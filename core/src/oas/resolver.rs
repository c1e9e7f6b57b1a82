#![deny(missing_docs)]

//! # Resolver Module
//!
//! Follows a single in-document `$ref` pointer to the node it names.
//!
//! Resolution is permissive: when any segment of the pointer is missing, the original
//! (unresolved) node is returned instead of an error. No cycle detection happens here;
//! the schema normalizer keeps its own stack of active pointers.

use crate::oas::node::ref_pointer;
use crate::oas::ref_utils::{local_pointer, pointer_segments};
use serde_json::Value;

/// Resolves `node` against `root` if it carries a `$ref`; otherwise returns it unchanged.
///
/// # Arguments
///
/// * `node` - The node that may be a reference object.
/// * `root` - The whole document.
pub fn resolve_ref<'a>(node: &'a Value, root: &'a Value) -> &'a Value {
    let Some(pointer) = ref_pointer(node) else {
        return node;
    };

    match lookup_pointer(pointer, root) {
        Some(target) => target,
        None => {
            tracing::debug!(pointer, "unresolved reference, keeping original node");
            node
        }
    }
}

/// Walks `root` segment by segment along a `$ref` string.
///
/// Returns `None` if the pointer is external, if a segment is missing, or if the
/// target is an explicit `null`.
pub fn lookup_pointer<'a>(ref_str: &str, root: &'a Value) -> Option<&'a Value> {
    let pointer = local_pointer(ref_str)?;

    let mut current = root;
    for segment in pointer_segments(pointer) {
        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    if current.is_null() {
        None
    } else {
        Some(current)
    }
}
