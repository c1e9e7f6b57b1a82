#![deny(missing_docs)]

//! # Schema Normalization
//!
//! Converts raw schema nodes into canonical `SchemaObject`s with every `$ref` expanded.
//!
//! Expansion keeps a stack of the pointers currently being expanded. Meeting a pointer
//! that is already on the stack means the schema graph is cyclic; the recursion stops
//! there and a `circular` placeholder is emitted instead. Chains deeper than
//! `MAX_REF_DEPTH` are cut the same way.

use crate::oas::models::SchemaObject;
use crate::oas::node::{
    field, number_field, object_field, ref_pointer, str_field, string_field, string_list,
};
use crate::oas::ref_utils::ref_display_name;
use crate::oas::resolver::lookup_pointer;
use indexmap::IndexMap;
use serde_json::Value;

/// Longest chain of nested `$ref` expansions followed before the chain is cut.
pub const MAX_REF_DEPTH: usize = 64;

/// Normalizes a schema node against `root`.
pub fn normalize_schema(node: &Value, root: &Value) -> SchemaObject {
    SchemaNormalizer::new(root).normalize(node)
}

/// Recursive normalizer carrying the active reference stack.
#[derive(Debug)]
pub struct SchemaNormalizer<'a> {
    root: &'a Value,
    active: Vec<String>,
}

impl<'a> SchemaNormalizer<'a> {
    /// Creates a normalizer for a document.
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            active: Vec::new(),
        }
    }

    /// Normalizes one schema node.
    pub fn normalize(&mut self, node: &Value) -> SchemaObject {
        match ref_pointer(node) {
            Some(pointer) => self.normalize_reference(pointer, node),
            None => self.normalize_inline(node),
        }
    }

    fn normalize_reference(&mut self, pointer: &str, node: &Value) -> SchemaObject {
        let root = self.root;
        let Some(target) = lookup_pointer(pointer, root) else {
            // Fall back to the reference node itself; its `$ref` is dropped.
            tracing::debug!(pointer, "unresolved schema reference");
            return self.normalize_inline(node);
        };

        if self.active.iter().any(|p| p == pointer) {
            tracing::warn!(
                pointer,
                schema = %ref_display_name(pointer),
                "reference cycle detected, emitting placeholder"
            );
            return SchemaObject {
                circular: true,
                ..descriptive_fields(target)
            };
        }

        if self.active.len() >= MAX_REF_DEPTH {
            tracing::warn!(
                pointer,
                depth = self.active.len(),
                "reference chain too deep, emitting placeholder"
            );
            return SchemaObject {
                circular: true,
                ..descriptive_fields(target)
            };
        }

        self.active.push(pointer.to_owned());
        let schema = self.normalize(target);
        self.active.pop();
        schema
    }

    fn normalize_inline(&mut self, node: &Value) -> SchemaObject {
        if !node.is_object() {
            return SchemaObject::default();
        }

        let mut schema = descriptive_fields(node);

        if let Some(items) = field(node, "items") {
            schema.items = Some(Box::new(self.normalize(items)));
        }

        if let Some(properties) = object_field(node, "properties") {
            let mut normalized = IndexMap::with_capacity(properties.len());
            for (name, prop) in properties {
                normalized.insert(name.clone(), self.normalize(prop));
            }
            schema.properties = Some(normalized);
        }

        schema.required = string_list(node, "required");
        schema
    }
}

/// Copies the scalar descriptive fields and `enum` of a schema node.
fn descriptive_fields(node: &Value) -> SchemaObject {
    let (schema_type, type_allows_null) = schema_type(node);
    let nullable = match field(node, "nullable").and_then(Value::as_bool) {
        Some(flag) => Some(flag),
        None if type_allows_null => Some(true),
        None => None,
    };

    SchemaObject {
        schema_type,
        format: string_field(node, "format"),
        description: string_field(node, "description"),
        nullable,
        default: field(node, "default").cloned(),
        example: field(node, "example").cloned(),
        minimum: number_field(node, "minimum"),
        maximum: number_field(node, "maximum"),
        enum_values: field(node, "enum").and_then(Value::as_array).cloned(),
        ..SchemaObject::default()
    }
}

/// Reads `type`, accepting the 3.1 array form (`["string", "null"]`).
///
/// Returns the first non-null type and whether `null` was listed.
fn schema_type(node: &Value) -> (Option<String>, bool) {
    if let Some(single) = str_field(node, "type") {
        return (Some(single.to_owned()), false);
    }
    let Some(types) = field(node, "type").and_then(Value::as_array) else {
        return (None, false);
    };
    let names: Vec<&str> = types.iter().filter_map(Value::as_str).collect();
    let primary = names.iter().find(|t| **t != "null").map(|t| (*t).to_owned());
    (primary, names.contains(&"null"))
}
