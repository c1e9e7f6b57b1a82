#![deny(missing_docs)]

//! # Tag Grouping
//!
//! Partitions endpoints into sidebar groups following the document's tag order.
//!
//! An endpoint is grouped under its first tag only. Untagged endpoints land in `default`.

use crate::oas::models::{ParsedEndpoint, ParsedSpec, SpecTag};
use indexmap::IndexMap;
use serde::Serialize;

/// Group name for endpoints that declare no tags.
pub const DEFAULT_TAG: &str = "default";

/// One sidebar group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup<'a> {
    /// The declared tag, or a synthesized one without description.
    pub tag: SpecTag,
    /// Endpoints whose first tag is `tag.name`, in extraction order.
    pub endpoints: Vec<&'a ParsedEndpoint>,
}

/// Groups endpoints by their first tag.
///
/// Declared tags come first in declaration order, then tags only referenced by
/// endpoints in first-encounter order. Groups without endpoints are omitted.
pub fn group_endpoints_by_tag<'a>(
    endpoints: &'a [ParsedEndpoint],
    declared: &[SpecTag],
) -> Vec<TagGroup<'a>> {
    let mut by_tag: IndexMap<&str, Vec<&'a ParsedEndpoint>> = IndexMap::new();
    for endpoint in endpoints {
        let name = endpoint.tags.first().map_or(DEFAULT_TAG, String::as_str);
        by_tag.entry(name).or_default().push(endpoint);
    }

    let mut groups = Vec::with_capacity(by_tag.len());
    for tag in declared {
        if let Some(matched) = by_tag.shift_remove(tag.name.as_str()) {
            groups.push(TagGroup {
                tag: tag.clone(),
                endpoints: matched,
            });
        }
    }

    groups.extend(by_tag.into_iter().map(|(name, matched)| TagGroup {
        tag: SpecTag {
            name: name.to_string(),
            description: None,
        },
        endpoints: matched,
    }));

    groups
}

/// Keeps endpoints whose path, summary or operationId contains `query` (case-insensitive).
///
/// Groups left empty are dropped. A blank query returns the groups unchanged.
pub fn filter_groups<'a>(groups: &[TagGroup<'a>], query: &str) -> Vec<TagGroup<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return groups.to_vec();
    }

    groups
        .iter()
        .filter_map(|group| {
            let endpoints: Vec<&'a ParsedEndpoint> = group
                .endpoints
                .iter()
                .copied()
                .filter(|ep| matches_query(ep, &needle))
                .collect();
            (!endpoints.is_empty()).then(|| TagGroup {
                tag: group.tag.clone(),
                endpoints,
            })
        })
        .collect()
}

fn matches_query(endpoint: &ParsedEndpoint, needle: &str) -> bool {
    endpoint.path.to_lowercase().contains(needle)
        || endpoint
            .summary
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
        || endpoint.operation_id.to_lowercase().contains(needle)
}

impl ParsedSpec {
    /// Groups this spec's endpoints by tag.
    pub fn tag_groups(&self) -> Vec<TagGroup<'_>> {
        group_endpoints_by_tag(&self.endpoints, &self.tags)
    }
}
