//! Aggregation store
//!
//! Accumulates folded kernel stacks from probe events into per-scope,
//! per-event-type counters and renders them in the collapsed stack format
//! (`"<frame1;frame2;...> <count>"` per line) consumed by flamegraph
//! tooling.
//!
//! One synchronous reader/writer lock guards the whole table: writes hold
//! it for a single counter increment or deletion, reads hold it for the
//! duration of rendering a scope. Memory is unbounded; entries accumulate
//! until an explicit reset.

pub mod scope;

use std::collections::HashMap;

use log::debug;
use parking_lot::RwLock;
use serde::Serialize;

use crate::types::Event;
use crate::utils::get_node_name;

type ScopeData = HashMap<String, HashMap<String, u64>>;

/// Thread-safe folded-stack counter table.
///
/// Constructed once per process (or once per test) and shared by the
/// flame sink and the read endpoint via `Arc`. The local node key is
/// resolved once at construction and fixed for the store's lifetime.
pub struct FlameAggregator {
    // data[scope_key][event_type][folded] = count
    data: RwLock<HashMap<String, ScopeData>>,
    // cached node scope key
    node_scope: String,
}

/// Counters reported by `GET /api/flamegraph/stats`
#[derive(Debug, Serialize)]
pub struct StoreStats {
    /// Scopes with at least one recorded stack
    pub scope_count: usize,
    /// (scope, event type) buckets
    pub event_type_count: usize,
    /// Distinct folded stacks across all buckets
    pub stack_count: usize,
    /// Total samples recorded since the last reset
    pub sample_count: u64,
}

impl FlameAggregator {
    /// Create a new aggregator keyed to the local node name
    pub fn new() -> Self {
        Self::with_node_name(&get_node_name())
    }

    /// Create a new aggregator with an explicit node name.
    ///
    /// Tests construct a fresh instance this way to stay independent of
    /// the host's resolved name and of each other.
    pub fn with_node_name(node_name: &str) -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            node_scope: format!("{}{}", scope::NODE_PREFIX, node_name),
        }
    }

    fn add(&self, scope_key: &str, event_type: &str, folded: &str) {
        if folded.is_empty() {
            return;
        }
        let mut data = self.data.write();
        let counter = data
            .entry(scope_key.to_string())
            .or_default()
            .entry(event_type.to_string())
            .or_default()
            .entry(folded.to_string())
            .or_insert(0);
        *counter += 1;
    }

    fn reset_key(&self, scope_key: &str, event_type: &str) {
        let mut data = self.data.write();
        if event_type.is_empty() {
            data.remove(scope_key);
            return;
        }
        if let Some(scope_data) = data.get_mut(scope_key) {
            scope_data.remove(event_type);
            if scope_data.is_empty() {
                data.remove(scope_key);
            }
        }
    }

    /// Remove recorded stacks for a scope.
    ///
    /// An empty `event_type` removes the whole scope bucket; otherwise
    /// only that event type is removed, and the scope entry is pruned if
    /// it becomes empty. An invalid scope is a no-op.
    pub fn reset(&self, scope_type: &str, name: &str, event_type: &str) {
        let Some(scope_key) = scope::resolve(scope_type, name, &self.node_scope) else {
            return;
        };
        debug!("reset scope={} event_type={:?}", scope_key, event_type);
        self.reset_key(&scope_key, event_type);
    }

    /// Render folded stack lines for a scope and optional event type.
    ///
    /// `scope_type` is `"node"` or `"pod"`; `name` is empty for the local
    /// node, `"namespace/pod"` for pod scope. An empty `event_type`
    /// renders the union across all event types, keeping identical stack
    /// text under different event types as separate lines. Lines are
    /// sorted lexicographically and joined with `\n` (no trailing
    /// newline). Invalid or absent scopes render as an empty string.
    pub fn get_collapsed(&self, scope_type: &str, name: &str, event_type: &str) -> String {
        let Some(scope_key) = scope::resolve(scope_type, name, &self.node_scope) else {
            return String::new();
        };

        let data = self.data.read();
        let Some(scope_data) = data.get(&scope_key) else {
            return String::new();
        };

        let mut lines: Vec<String> = Vec::new();
        if !event_type.is_empty() {
            if let Some(stacks) = scope_data.get(event_type) {
                for (folded, count) in stacks {
                    lines.push(format!("{folded} {count}"));
                }
            }
        } else {
            for stacks in scope_data.values() {
                for (folded, count) in stacks {
                    lines.push(format!("{folded} {count}"));
                }
            }
        }

        lines.sort();
        lines.join("\n")
    }

    /// Ingest an event, recording its folded stack per relevant scope.
    ///
    /// The stack always lands under the local node scope. It additionally
    /// lands under `pod:<namespace>/<pod>` for each endpoint side (src,
    /// dst) whose type label is `pod` and whose namespace and pod labels
    /// are both present and non-empty — so a single event can feed up to
    /// three scope buckets. Empty or all-whitespace messages are ignored.
    pub fn add_event(&self, event: &Event) {
        let Some(folded) = fold_message(&event.message) else {
            return;
        };

        self.add(&self.node_scope, &event.event_type, &folded);

        for side in ["src", "dst"] {
            if event.label(&format!("{side}_type")) != Some(scope::POD) {
                continue;
            }
            let namespace = event.label(&format!("{side}_namespace")).unwrap_or("");
            let pod = event.label(&format!("{side}_pod")).unwrap_or("");
            if !namespace.is_empty() && !pod.is_empty() {
                let key = format!("{}{}/{}", scope::POD_PREFIX, namespace, pod);
                self.add(&key, &event.event_type, &folded);
            }
        }
    }

    /// Snapshot table-size counters for the stats endpoint
    pub fn stats(&self) -> StoreStats {
        let data = self.data.read();

        let mut stats = StoreStats {
            scope_count: data.len(),
            event_type_count: 0,
            stack_count: 0,
            sample_count: 0,
        };
        for scope_data in data.values() {
            stats.event_type_count += scope_data.len();
            for stacks in scope_data.values() {
                stats.stack_count += stacks.len();
                stats.sample_count += stacks.values().sum::<u64>();
            }
        }
        stats
    }
}

impl Default for FlameAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a multi-line stack message into a single semicolon-joined stack.
///
/// Lines are trimmed and empty lines dropped; frame order is preserved
/// (top frame first). Returns `None` when nothing survives trimming.
fn fold_message(message: &str) -> Option<String> {
    let frames: Vec<&str> = message
        .lines()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    if frames.is_empty() {
        None
    } else {
        Some(frames.join(";"))
    }
}
