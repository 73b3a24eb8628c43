use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::coordination::base::{CoordinationClient, CoordinationError};
use crate::coordination::paths::join_node;

#[derive(Debug)]
struct Inner {
    nodes: BTreeMap<String, Vec<u8>>,
}

/// In-memory implementation of [`CoordinationClient`] backed by a map from
/// node path to payload.
///
/// Used by tests and by embedded setups that have no external coordination
/// service to talk to. The write methods stand in for the writer-side
/// coordinator, which owns all mutation in a real deployment.
#[derive(Debug, Clone)]
pub struct MemoryCoordinationClient {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryCoordinationClient {
    pub fn new() -> Self {
        let inner = Inner {
            nodes: BTreeMap::new(),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Creates or replaces the node at `path` with `payload`.
    pub async fn set_node(&self, path: &str, payload: Vec<u8>) {
        let mut inner = self.inner.lock().await;
        inner.nodes.insert(path.to_string(), payload);
    }

    /// Creates or replaces a child of `parent` named `child` with `payload`.
    pub async fn set_child(&self, parent: &str, child: &str, payload: Vec<u8>) {
        self.set_node(&join_node(parent, child), payload).await;
    }

    /// Removes the node at `path`, if present.
    pub async fn remove_node(&self, path: &str) {
        let mut inner = self.inner.lock().await;
        inner.nodes.remove(path);
    }
}

impl Default for MemoryCoordinationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinationClient for MemoryCoordinationClient {
    async fn read_node(&self, path: &str) -> Result<Option<Vec<u8>>, CoordinationError> {
        let inner = self.inner.lock().await;

        Ok(inner.nodes.get(path).cloned())
    }

    async fn list_children(&self, path: &str) -> Result<Vec<String>, CoordinationError> {
        let inner = self.inner.lock().await;

        let prefix = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };

        let children = inner
            .nodes
            .keys()
            .filter_map(|node| {
                let rest = node.strip_prefix(&prefix)?;
                (!rest.is_empty() && !rest.contains('/')).then(|| rest.to_string())
            })
            .collect();

        Ok(children)
    }
}
