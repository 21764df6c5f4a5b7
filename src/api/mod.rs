//! API Client
//!
//! HTTP access to the runtime configuration document.

pub mod client;

pub use client::{fetch_runtime_config, HttpConfigSource};
