//! Flame Scope
//!
//! Aggregates kernel call stacks carried by network-observability events
//! into per-scope folded-stack counters and serves them in the collapsed
//! stack format consumed by flamegraph tooling.
//!
//! # Modules
//!
//! - `types`: Event and label shapes consumed from the probing subsystem
//! - `aggregator`: Thread-safe scope → event-type → folded-stack counters
//! - `sink`: Event-sink capability and the flame sink adapter
//! - `api`: Axum router and the collapsed-stack read endpoint
//! - `utils`: Node name resolution
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use flame_scope::aggregator::FlameAggregator;
//! use flame_scope::sink::{create_sink, FLAME};
//! use flame_scope::types::Event;
//!
//! fn main() {
//!     let store = Arc::new(FlameAggregator::new());
//!     let sink = create_sink(FLAME, store.clone()).unwrap();
//!
//!     let event = Event::new("PacketLoss", "kfree_skb+0x100\nip_forward+0x300");
//!     sink.write(&event).unwrap();
//!
//!     println!("{}", store.get_collapsed("node", "", ""));
//! }
//! ```

pub mod aggregator;
pub mod api;
pub mod sink;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use aggregator::{FlameAggregator, StoreStats};
pub use sink::{create_sink, FlameSink, Sink, SinkResult, StderrSink};
pub use types::{Event, Label};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
