//! Shared application state

use std::sync::Arc;

use crate::aggregator::FlameAggregator;

/// State shared by all HTTP handlers
pub struct AppState {
    /// The aggregation store, shared with the flame sink
    pub store: Arc<FlameAggregator>,
}

impl AppState {
    /// Create a new AppState over the given store
    pub fn new(store: Arc<FlameAggregator>) -> Self {
        Self { store }
    }
}
