//! Utility functions

pub mod node;

pub use node::get_node_name;
