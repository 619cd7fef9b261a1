//! REST endpoints
//!
//! - `GET /api/flamegraph` - Collapsed stacks for a scope, optional reset
//! - `GET /api/flamegraph/stats` - Store size counters

pub mod flamegraph;
