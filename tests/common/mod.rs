use std::sync::{Arc, Once};

use table_state::coordination::{CoordinationClient, CoordinationError};
use tracing_subscriber::EnvFilter;

static INIT_TEST_TRACING: Once = Once::new();

/// Call this function once at the beginning of a test and then set the
/// ENABLE_TRACING environment variable to 1 to view tracing in the terminal:
///
/// ENABLE_TRACING=1 cargo test <test_name>
pub fn init_test_tracing() {
    INIT_TEST_TRACING.call_once(|| {
        if std::env::var("ENABLE_TRACING").is_ok() {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into());
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    });
}

#[derive(Debug, Clone)]
pub enum FaultType {
    ConnectionLoss,
    SessionExpired,
}

#[derive(Debug, Clone, Default)]
pub struct FaultConfig {
    pub read_node: Option<FaultType>,
    pub list_children: Option<FaultType>,
}

/// Wraps a [`CoordinationClient`] and injects failures on configured
/// operations, standing in for a flaky or partitioned coordination service.
#[derive(Debug, Clone)]
pub struct FaultInjectingClient<C>
where
    C: Clone,
{
    inner: C,
    config: Arc<FaultConfig>,
}

impl<C> FaultInjectingClient<C>
where
    C: Clone,
{
    pub fn wrap(inner: C, config: FaultConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    fn trigger_fault(&self, fault: &Option<FaultType>) -> Result<(), CoordinationError> {
        if let Some(fault_type) = fault {
            return Err(match fault_type {
                FaultType::ConnectionLoss => {
                    CoordinationError::ConnectionLoss("fault injection".to_string())
                }
                FaultType::SessionExpired => CoordinationError::SessionExpired,
            });
        }

        Ok(())
    }
}

impl<C> CoordinationClient for FaultInjectingClient<C>
where
    C: CoordinationClient + Clone + Send + Sync,
{
    async fn read_node(&self, path: &str) -> Result<Option<Vec<u8>>, CoordinationError> {
        self.trigger_fault(&self.config.read_node)?;
        self.inner.read_node(path).await
    }

    async fn list_children(&self, path: &str) -> Result<Vec<String>, CoordinationError> {
        self.trigger_fault(&self.config.list_children)?;
        self.inner.list_children(path).await
    }
}
