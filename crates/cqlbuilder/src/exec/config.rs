use crate::builder::BatchType;
use serde::{Deserialize, Serialize};

/// Configuration for [`SessionExecManager`](super::SessionExecManager).
///
/// Deserializable so it can live in the application's own config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Force a batch type for every batch. `None` uses the batch's own type (default).
    pub batch_type: Option<BatchType>,
    /// Emit a `tracing` event per executed statement.
    pub log_statements: bool,
    /// Truncate logged CQL (in bytes). `None` means no truncation.
    pub max_cql_length: Option<usize>,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecConfig {
    /// Create a new configuration with defaults (logging on, 200 byte CQL in logs).
    pub const fn new() -> Self {
        Self {
            batch_type: None,
            log_statements: true,
            max_cql_length: Some(200),
        }
    }

    /// Submit every batch as `batch_type`, whatever the batch itself says.
    pub fn with_batch_type(mut self, batch_type: BatchType) -> Self {
        self.batch_type = Some(batch_type);
        self
    }

    pub fn with_log_statements(mut self, enabled: bool) -> Self {
        self.log_statements = enabled;
        self
    }

    /// Set maximum CQL length to log.
    pub fn with_max_cql_length(mut self, len: usize) -> Self {
        self.max_cql_length = Some(len);
        self
    }

    /// Disable CQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_cql_length = None;
        self
    }

    pub(crate) fn resolve_batch_type(&self, requested: BatchType) -> BatchType {
        self.batch_type.unwrap_or(requested)
    }
}
