//! HTTP API for reading collapsed stacks

pub mod http;
pub mod rest;
pub mod state;
