//! Core types and trait definitions for the roster user registry.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! All other crates depend on it.

pub mod error;
pub mod registry;
pub mod store;
pub mod user;

pub use error::{Error, Result};
pub use registry::UserRegistry;
