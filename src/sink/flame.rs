//! Flame sink - feeds the aggregation store

use std::sync::Arc;

use super::{Sink, SinkResult, FLAME};
use crate::aggregator::FlameAggregator;
use crate::types::Event;

/// Sink adapter over a shared [`FlameAggregator`].
///
/// `write` forwards every event to the store and never fails; absence of
/// usable data (empty message, missing labels) is not an error.
pub struct FlameSink {
    store: Arc<FlameAggregator>,
}

impl FlameSink {
    /// Create a flame sink backed by the given store
    pub fn new(store: Arc<FlameAggregator>) -> Self {
        Self { store }
    }
}

impl Sink for FlameSink {
    fn write(&self, event: &Event) -> SinkResult<()> {
        self.store.add_event(event);
        Ok(())
    }

    fn name(&self) -> &'static str {
        FLAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_forwards_to_store() {
        let store = Arc::new(FlameAggregator::with_node_name("test-node"));
        let sink = FlameSink::new(store.clone());

        sink.write(&Event::new("PacketLoss", "a+0x1\nb+0x2")).unwrap();

        assert_eq!(store.get_collapsed("node", "", "PacketLoss"), "a+0x1;b+0x2 1");
    }

    #[test]
    fn test_write_never_fails_on_empty_message() {
        let store = Arc::new(FlameAggregator::with_node_name("test-node"));
        let sink = FlameSink::new(store.clone());

        assert!(sink.write(&Event::new("PacketLoss", "")).is_ok());
        assert_eq!(store.get_collapsed("node", "", ""), "");
    }
}
