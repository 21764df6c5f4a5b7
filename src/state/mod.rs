//! State Management
//!
//! Application-wide reactive state handed to views through context.

pub mod runtime;

pub use runtime::{provide_runtime_store, RuntimeStore};
