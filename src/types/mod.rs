//! Data types for the flame aggregation service
//!
//! This module contains the event shape consumed from the probing subsystem.

mod event;

pub use event::{Event, Label};
