//! Event sinks
//!
//! The generic event-sink capability: probes hand every event to one or
//! more sinks selected by name. The flame sink feeds the aggregation
//! store; the stderr sink dumps events as JSON lines for debugging.

mod flame;
mod stderr;

pub use flame::FlameSink;
pub use stderr::StderrSink;

use std::sync::Arc;

use crate::aggregator::FlameAggregator;
use crate::types::Event;

/// Result type for sink operations
pub type SinkResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Name token of the flame sink
pub const FLAME: &str = "flame";

/// Name token of the stderr sink
pub const STDERR: &str = "stderr";

/// An event sink
pub trait Sink: Send + Sync {
    /// Consume one event. Malformed events degrade to a no-op, never an
    /// error.
    fn write(&self, event: &Event) -> SinkResult<()>;

    /// Stable name token used by sink selection
    fn name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink").field("name", &self.name()).finish()
    }
}

/// Create a sink by name.
///
/// The flame sink shares the given store with the read endpoint. An
/// unrecognized name is the only error this subsystem produces.
pub fn create_sink(name: &str, store: Arc<FlameAggregator>) -> SinkResult<Box<dyn Sink>> {
    match name {
        FLAME => Ok(Box::new(FlameSink::new(store))),
        STDERR => Ok(Box::new(StderrSink::new())),
        _ => Err(format!("unknown sink type {name}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Arc<FlameAggregator> {
        Arc::new(FlameAggregator::with_node_name("test-node"))
    }

    #[test]
    fn test_create_known_sinks() {
        let flame = create_sink(FLAME, test_store()).unwrap();
        assert_eq!(flame.name(), "flame");

        let stderr = create_sink(STDERR, test_store()).unwrap();
        assert_eq!(stderr.name(), "stderr");
    }

    #[test]
    fn test_create_unknown_sink_fails() {
        let err = create_sink("loki", test_store()).unwrap_err();
        assert_eq!(err.to_string(), "unknown sink type loki");
    }
}
