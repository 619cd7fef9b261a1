//! Scope key derivation
//!
//! Maps a (scope type, name) pair to the canonical partition key used by
//! the aggregation store. Counts are kept separately per scope: the local
//! node, or a specific `namespace/pod`.

/// Node scope type as it appears in queries
pub const NODE: &str = "node";

/// Pod scope type as it appears in queries
pub const POD: &str = "pod";

pub(crate) const NODE_PREFIX: &str = "node:";
pub(crate) const POD_PREFIX: &str = "pod:";

/// Resolve a scope type and name to a canonical store key.
///
/// - `node` with an empty name resolves to the local node key. An explicit
///   name resolves to `node:<name>`; the store only ever writes under the
///   local node, so foreign node queries read back empty.
/// - `pod` requires a non-empty `namespace/pod` composite name.
/// - Anything else is invalid and yields `None`.
pub(crate) fn resolve(scope_type: &str, name: &str, node_key: &str) -> Option<String> {
    match scope_type {
        NODE => {
            if name.is_empty() {
                Some(node_key.to_string())
            } else {
                Some(format!("{NODE_PREFIX}{name}"))
            }
        }
        POD => {
            if name.is_empty() {
                None
            } else {
                Some(format!("{POD_PREFIX}{name}"))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_scope_defaults_to_local_key() {
        assert_eq!(
            resolve(NODE, "", "node:worker-1"),
            Some("node:worker-1".to_string())
        );
    }

    #[test]
    fn test_node_scope_with_explicit_name() {
        assert_eq!(
            resolve(NODE, "worker-2", "node:worker-1"),
            Some("node:worker-2".to_string())
        );
    }

    #[test]
    fn test_pod_scope_requires_name() {
        assert_eq!(
            resolve(POD, "default/test-pod", "node:worker-1"),
            Some("pod:default/test-pod".to_string())
        );
        assert_eq!(resolve(POD, "", "node:worker-1"), None);
    }

    #[test]
    fn test_unknown_scope_type_is_invalid() {
        assert_eq!(resolve("container", "c1", "node:worker-1"), None);
        assert_eq!(resolve("", "", "node:worker-1"), None);
    }
}
