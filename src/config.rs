use serde::{Deserialize, Serialize};

use crate::coordination::paths::join_node;

/// Name of the child node under which per-table state records live.
const TABLES_CHILD: &str = "table";

fn default_base_node() -> String {
    "/cluster".to_string()
}

/// Configuration options for the coordination service namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinationConfig {
    /// Root node under which the cluster keeps its metadata.
    #[serde(default = "default_base_node")]
    pub base_node: String,
}

impl CoordinationConfig {
    /// Returns the node under which per-table state records are stored.
    pub fn tables_node(&self) -> String {
        join_node(&self.base_node, TABLES_CHILD)
    }
}

impl Default for CoordinationConfig {
    fn default() -> Self {
        Self {
            base_node: default_base_node(),
        }
    }
}
