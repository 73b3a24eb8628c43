//! Client-side access to the coordination service's hierarchical namespace.
//!
//! Defines the read-only client seam the rest of the crate talks to, an
//! in-memory implementation of it, and node-path helpers.

pub mod base;
pub mod memory;
pub mod paths;

pub use base::{CoordinationClient, CoordinationError};
pub use memory::MemoryCoordinationClient;
