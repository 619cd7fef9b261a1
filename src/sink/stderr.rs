//! Stderr sink - dumps events as JSON lines

use super::{Sink, SinkResult, STDERR};
use crate::types::Event;

/// Debug sink that serializes each event to one JSON line on stderr
#[derive(Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a stderr sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write(&self, event: &Event) -> SinkResult<()> {
        let line = serde_json::to_string(event)?;
        eprintln!("{line}");
        Ok(())
    }

    fn name(&self) -> &'static str {
        STDERR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_succeeds() {
        let sink = StderrSink::new();
        let event = Event::new("PacketLoss", "a+0x1").with_label("src_type", "pod");
        assert!(sink.write(&event).is_ok());
    }
}
