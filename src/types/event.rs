//! Probe event types
//!
//! Events arrive from the probing subsystem with a type tag, a multi-line
//! kernel stack trace in `message` (one frame per line, already formatted
//! as `symbol+offset`), and an ordered list of labels describing the
//! event's network endpoints.

use serde::{Deserialize, Serialize};

/// A single (name, value) label attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    /// Create a new label
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An event emitted by a probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event type tag, e.g. "PacketLoss" or "TCPRetrans"
    #[serde(rename = "type")]
    pub event_type: String,

    /// Multi-line stack trace, one frame per line
    pub message: String,

    /// Endpoint labels in probe order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Event {
    /// Create a new event with no labels
    pub fn new(event_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            message: message.into(),
            labels: Vec::new(),
        }
    }

    /// Append a label (builder style)
    pub fn with_label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push(Label::new(name, value));
        self
    }

    /// Look up a label value by name (first match wins)
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        let event = Event::new("PacketLoss", "kfree_skb+0x100")
            .with_label("src_type", "pod")
            .with_label("src_namespace", "default");

        assert_eq!(event.label("src_type"), Some("pod"));
        assert_eq!(event.label("src_namespace"), Some("default"));
        assert_eq!(event.label("dst_type"), None);
    }

    #[test]
    fn test_label_lookup_first_match_wins() {
        let event = Event::new("PacketLoss", "kfree_skb+0x100")
            .with_label("side", "src")
            .with_label("side", "dst");

        assert_eq!(event.label("side"), Some("src"));
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::new("TCPRetrans", "tcp_retransmit_skb+0x40")
            .with_label("dst_type", "pod");

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"TCPRetrans\""));
        assert!(json.contains("\"dst_type\""));

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_event_without_labels_skips_field() {
        let event = Event::new("PacketLoss", "kfree_skb+0x100");
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("labels"));

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert!(parsed.labels.is_empty());
    }
}
