//! Read-only queries over table lifecycle state.
//!
//! Every query here is a fresh round trip to the coordination service; nothing
//! is cached locally. Callers that cannot rely on the primary coordinator's
//! in-memory view use these functions to observe the authoritative state at
//! read time. All functions are stateless and safe to call concurrently.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::coordination::base::{CoordinationClient, CoordinationError};
use crate::coordination::paths::join_node;
use crate::state::table::{TableState, TableStateRecord};

/// Errors surfaced by the table state queries.
#[derive(Debug, Error)]
pub enum TableStateError {
    /// Failure in the client layer, propagated unchanged.
    #[error("coordination service error: {0}")]
    Coordination(#[from] CoordinationError),

    /// The node holds a non-empty payload that does not decode as a table
    /// state record. Distinct from an absent record: the data is present and
    /// malformed, and must never be read as "no state".
    #[error("inconsistent table state data at {node}: {source}")]
    DataInconsistency {
        node: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves the current lifecycle state of the table named `table_id`.
///
/// Performs a single non-watching read of the table's node under
/// `tables_node`. Returns [`None`] when no node exists or its payload is
/// empty, meaning no state was ever recorded for the table.
pub async fn read_table_state<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
    table_id: &str,
) -> Result<Option<TableState>, TableStateError> {
    let node = join_node(tables_node, table_id);

    let Some(payload) = client.read_node(&node).await? else {
        return Ok(None);
    };
    if payload.is_empty() {
        return Ok(None);
    }

    let record = TableStateRecord::decode(&payload)
        .map_err(|source| TableStateError::DataInconsistency { node, source })?;

    Ok(Some(record.state))
}

/// Returns `true` iff the table's recorded state is [`TableState::Enabled`].
pub async fn is_enabled_table<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
    table_id: &str,
) -> Result<bool, TableStateError> {
    let state = read_table_state(client, tables_node, table_id).await?;

    Ok(is_table_state(TableState::Enabled, state))
}

/// Returns `true` iff the table's recorded state is [`TableState::Disabled`].
pub async fn is_disabled_table<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
    table_id: &str,
) -> Result<bool, TableStateError> {
    let state = read_table_state(client, tables_node, table_id).await?;

    Ok(is_table_state(TableState::Disabled, state))
}

/// Returns `true` iff the table's recorded state is [`TableState::Disabling`]
/// or [`TableState::Disabled`].
pub async fn is_disabling_or_disabled_table<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
    table_id: &str,
) -> Result<bool, TableStateError> {
    let state = read_table_state(client, tables_node, table_id).await?;

    Ok(is_table_state(TableState::Disabling, state)
        || is_table_state(TableState::Disabled, state))
}

/// Collects the identifiers of every table whose recorded state is one of
/// `states`.
///
/// One listing call plus one read per child, performed sequentially. The
/// collection is all-or-nothing: a failure on any child aborts the whole
/// query, so callers cannot silently miss tables behind one corrupted record.
/// Tables with no recorded state never match.
pub async fn tables_in_states<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
    states: &[TableState],
) -> Result<HashSet<String>, TableStateError> {
    let children = client.list_children(tables_node).await?;
    debug!(children = children.len(), "scanning table state nodes");

    let mut matching = HashSet::new();
    for child in children {
        let state = read_table_state(client, tables_node, &child).await?;
        if states
            .iter()
            .any(|expected| is_table_state(*expected, state))
        {
            matching.insert(child);
        }
    }

    Ok(matching)
}

/// Collects every table currently recorded as [`TableState::Disabled`].
pub async fn disabled_tables<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
) -> Result<HashSet<String>, TableStateError> {
    tables_in_states(client, tables_node, &[TableState::Disabled]).await
}

/// Collects every table currently recorded as [`TableState::Disabled`] or
/// [`TableState::Disabling`].
pub async fn disabled_or_disabling_tables<C: CoordinationClient>(
    client: &C,
    tables_node: &str,
) -> Result<HashSet<String>, TableStateError> {
    tables_in_states(
        client,
        tables_node,
        &[TableState::Disabled, TableState::Disabling],
    )
    .await
}

/// Returns `true` iff a recorded state is present and equals `expected`.
///
/// An absent state never matches any expected state. This is the single
/// tie-break rule shared by all the boolean queries above.
fn is_table_state(expected: TableState, actual: Option<TableState>) -> bool {
    actual == Some(expected)
}
