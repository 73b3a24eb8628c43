use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a table, as recorded in the coordination service.
///
/// The set is closed: a payload carrying any other value fails to decode and
/// surfaces as a data inconsistency, it never maps to a default state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableState {
    /// The table is online and serving.
    Enabled,

    /// The table is fully offline.
    Disabled,

    /// Set by the primary coordinator while it brings the table online.
    Enabling,

    /// Set by the primary coordinator while it takes the table offline.
    Disabling,
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
            Self::Enabling => write!(f, "enabling"),
            Self::Disabling => write!(f, "disabling"),
        }
    }
}

/// Persisted representation of a table's lifecycle state.
///
/// Written by the primary coordinator when a table transitions phases; this
/// crate only ever decodes it. An absent or empty payload means the state was
/// never recorded, which is distinct from every [`TableState`] value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableStateRecord {
    pub state: TableState,
}

impl TableStateRecord {
    pub fn new(state: TableState) -> Self {
        Self { state }
    }

    /// Decodes a record from a non-empty node payload.
    pub fn decode(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    /// Encodes the record for storage in a node payload.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_encoding_uses_wire_names() {
        let payload = TableStateRecord::new(TableState::Disabling).encode().unwrap();
        assert_eq!(payload, br#"{"state":"DISABLING"}"#);
    }

    #[test]
    fn test_record_decodes_wire_names() {
        let record = TableStateRecord::decode(br#"{"state":"ENABLED"}"#).unwrap();
        assert_eq!(record.state, TableState::Enabled);
    }

    #[test]
    fn test_unknown_state_fails_to_decode() {
        let result = TableStateRecord::decode(br#"{"state":"ARCHIVED"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_payload_fails_to_decode() {
        let result = TableStateRecord::decode(b"not a record");
        assert!(result.is_err());
    }
}
