use std::future::Future;
use thiserror::Error;

/// Errors raised by the coordination service client layer.
///
/// These originate below this crate (connectivity, sessions, wire protocol)
/// and are propagated to callers unchanged, never reinterpreted. Retry and
/// timeout policy belongs to the client implementation, not to the readers
/// built on top of it.
#[derive(Debug, Error)]
pub enum CoordinationError {
    #[error("connection to coordination service lost: {0}")]
    ConnectionLoss(String),

    #[error("coordination service session expired")]
    SessionExpired,

    #[error("coordination service operation timed out: {0}")]
    OperationTimeout(String),

    #[error("coordination service protocol error: {0}")]
    Protocol(String),
}

/// Read-only view of the coordination service's hierarchical namespace.
///
/// Implementations wrap a live connection handle that is owned and
/// lifecycle-managed by the caller; this crate only borrows it per call and
/// never closes it. Both operations are the non-watching variants: they
/// observe a snapshot at read time and register no callbacks.
pub trait CoordinationClient {
    /// Returns the payload stored at `path`, or [`None`] if no node exists
    /// there.
    fn read_node(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, CoordinationError>> + Send;

    /// Returns the names of the direct children of the node at `path`.
    ///
    /// A missing node and a childless node both yield an empty list.
    fn list_children(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Vec<String>, CoordinationError>> + Send;
}
