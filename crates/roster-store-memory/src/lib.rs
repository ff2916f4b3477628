//! In-process backend for the roster user store.
//!
//! Holds a single [`roster_core::UserRegistry`] behind an async
//! reader/writer lock. All state is lost when the process exits.

mod store;

pub use store::MemoryStore;
