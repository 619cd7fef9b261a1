//! Flamegraph endpoint - collapsed stack text for a scope

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::aggregator::scope;
use crate::api::state::AppState;

/// Query parameters for the collapsed-stack read.
///
/// Everything defaults to empty: a missing or unrecognized scope degrades
/// to an empty 200 body, never an error status.
#[derive(Debug, Deserialize)]
pub struct FlameParams {
    /// Scope type: "node" or "pod"
    #[serde(default)]
    pub scope: String,
    /// Exact event type filter; empty means all event types
    #[serde(default)]
    pub event: String,
    /// Pod namespace (pod scope only)
    #[serde(default)]
    pub namespace: String,
    /// Pod name (pod scope only)
    #[serde(default)]
    pub pod: String,
    /// Explicit node name (node scope only); empty means the local node
    #[serde(default)]
    pub name: String,
    /// "1" or case-insensitive "true" clears the read data afterwards
    #[serde(default)]
    pub reset: String,
}

impl FlameParams {
    /// Scope name as understood by the store: `namespace/pod` for pod
    /// scope (only when both parts are present), the explicit node name
    /// otherwise.
    fn scope_name(&self) -> String {
        match self.scope.as_str() {
            scope::POD => {
                if !self.namespace.is_empty() && !self.pod.is_empty() {
                    format!("{}/{}", self.namespace, self.pod)
                } else {
                    String::new()
                }
            }
            scope::NODE => self.name.clone(),
            _ => String::new(),
        }
    }

    fn reset_requested(&self) -> bool {
        self.reset == "1" || self.reset.eq_ignore_ascii_case("true")
    }
}

/// GET /api/flamegraph - Collapsed stacks for a scope
///
/// Renders `"<folded-stack> <count>"` lines, lexicographically sorted,
/// as plain text. With `reset`, the read scope/event-type is cleared
/// after the response text is produced; the read and the reset take
/// separate locks, so a concurrent add landing between the two is
/// cleared without ever being observed.
pub async fn get_collapsed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FlameParams>,
) -> impl IntoResponse {
    let name = params.scope_name();

    let collapsed = state.store.get_collapsed(&params.scope, &name, &params.event);

    if params.reset_requested() {
        state.store.reset(&params.scope, &name, &params.event);
    }

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        collapsed,
    )
}

/// GET /api/flamegraph/stats - Store size counters
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.stats())
}
