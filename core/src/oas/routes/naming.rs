#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derives operation identifiers when `operationId` is missing, and keeps them unique.

use crate::oas::models::HttpMethod;
use std::collections::HashSet;

/// Derives an operationId from the HTTP Method and URL path.
///
/// Every character of the path that is not an ASCII letter or digit becomes `_`,
/// so the result depends on (method, path) alone.
///
/// e.g. `GET /users/{id}` -> `get__users__id_`
pub fn derive_operation_id(method: HttpMethod, path: &str) -> String {
    let clean_path: String = path
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_{}", method.key(), clean_path)
}

/// Tracks the operationIds handed out for one document.
#[derive(Debug, Default)]
pub struct OperationIds {
    seen: HashSet<String>,
}

impl OperationIds {
    /// Returns `candidate` if unused, otherwise the first free `candidate_N` (N >= 2).
    pub fn claim(&mut self, candidate: String) -> String {
        if self.seen.insert(candidate.clone()) {
            return candidate;
        }

        let mut n = 2usize;
        loop {
            let next = format!("{}_{}", candidate, n);
            if self.seen.insert(next.clone()) {
                tracing::warn!(
                    operation_id = %candidate,
                    renamed = %next,
                    "duplicate operationId"
                );
                return next;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_operation_id() {
        assert_eq!(derive_operation_id(HttpMethod::Get, "/users"), "get__users");
        assert_eq!(
            derive_operation_id(HttpMethod::Post, "/users/{id}/activate"),
            "post__users__id__activate"
        );
        assert_eq!(
            derive_operation_id(HttpMethod::Get, "/wallets/{address}/portfolio"),
            "get__wallets__address__portfolio"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive_operation_id(HttpMethod::Delete, "/a-b/{c.d}");
        let b = derive_operation_id(HttpMethod::Delete, "/a-b/{c.d}");
        assert_eq!(a, b);
        assert_eq!(a, "delete__a_b__c_d_");
    }

    #[test]
    fn test_claim_suffixes_duplicates() {
        let mut ids = OperationIds::default();
        assert_eq!(ids.claim("listUsers".into()), "listUsers");
        assert_eq!(ids.claim("listUsers".into()), "listUsers_2");
        assert_eq!(ids.claim("listUsers".into()), "listUsers_3");
        assert_eq!(ids.claim("listUsers_2".into()), "listUsers_2_2");
    }
}
