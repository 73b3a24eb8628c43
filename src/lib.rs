//! Uncached, read-only access to table lifecycle state recorded in a
//! hierarchical coordination service.
//!
//! The cluster's primary coordinator keeps an in-memory view of every table's
//! lifecycle state. Components that must not depend on that view being correct
//! or reachable use this crate instead: every query is a fresh round trip to
//! the coordination service, so the answer is authoritative at read time. This
//! crate only reads and interprets state records; writing them is owned by the
//! primary coordinator.

pub mod config;
pub mod coordination;
pub mod state;
