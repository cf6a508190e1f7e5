//! `tracing` events for executed statements.
//!
//! Everything here compiles to nothing without the `tracing` feature.

use super::config::ExecConfig;
use crate::builder::BatchType;
use crate::error::CqlError;
use crate::statement::Statement;
use std::time::Duration;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_cql_bytes(cql: &str, max_bytes: usize) -> &str {
    if cql.len() <= max_bytes {
        return cql;
    }
    let mut end = max_bytes;
    while end > 0 && !cql.is_char_boundary(end) {
        end -= 1;
    }
    &cql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn display_cql(config: &ExecConfig, cql: &str) -> String {
    match config.max_cql_length {
        Some(max) if cql.len() > max => format!("{}...", truncate_cql_bytes(cql, max)),
        _ => cql.to_string(),
    }
}

/// A statement is about to be sent.
pub(crate) fn statement(config: &ExecConfig, op: &'static str, statement: &Statement) {
    #[cfg(feature = "tracing")]
    if config.log_statements {
        tracing::debug!(
            target: "cqlbuilder.cql",
            op,
            value_count = statement.values.len(),
            cql = %display_cql(config, &statement.cql),
        );
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (config, op, statement);
}

/// A batch is about to be sent.
pub(crate) fn batch(
    config: &ExecConfig,
    op: &'static str,
    batch_type: BatchType,
    statements: &[Statement],
) {
    #[cfg(feature = "tracing")]
    if config.log_statements {
        tracing::debug!(
            target: "cqlbuilder.cql",
            op,
            batch_type = ?batch_type,
            statement_count = statements.len(),
            first_cql = %statements.first().map(|s| display_cql(config, &s.cql)).unwrap_or_default(),
        );
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (config, op, batch_type, statements);
}

/// The builder could not be rendered; nothing was sent.
pub(crate) fn render_failed(op: &'static str, err: &CqlError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(target: "cqlbuilder.cql", op, error = %err, "statement render failed");
    #[cfg(not(feature = "tracing"))]
    let _ = (op, err);
}

/// The session answered.
pub(crate) fn finished<T>(
    config: &ExecConfig,
    op: &'static str,
    elapsed: Duration,
    result: &Result<T, CqlError>,
) {
    #[cfg(feature = "tracing")]
    if config.log_statements {
        match result {
            Ok(_) => tracing::debug!(
                target: "cqlbuilder.cql",
                op,
                elapsed_us = elapsed.as_micros() as u64,
                "ok"
            ),
            Err(err) => tracing::debug!(
                target: "cqlbuilder.cql",
                op,
                elapsed_us = elapsed.as_micros() as u64,
                error = %err,
                "session error"
            ),
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (config, op, elapsed, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundary() {
        assert_eq!(truncate_cql_bytes("SELECT é", 8), "SELECT ");
        assert_eq!(truncate_cql_bytes("SELECT a", 100), "SELECT a");
    }

    #[test]
    fn test_display_cql() {
        let config = ExecConfig::new().with_max_cql_length(6);
        assert_eq!(display_cql(&config, "SELECT a FROM t"), "SELECT...");
        assert_eq!(display_cql(&config.no_truncate(), "SELECT a FROM t"), "SELECT a FROM t");
    }

    #[cfg(feature = "tracing")]
    mod events {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_statement_event_carries_cql_and_value_count() {
            let stmt = Statement::new("SELECT a FROM t WHERE k=?", vec![1.into()]);
            statement(&ExecConfig::new(), "exec", &stmt);
            assert!(logs_contain("cql=SELECT a FROM t WHERE k=?"));
            assert!(logs_contain("value_count=1"));
        }

        #[traced_test]
        #[test]
        fn test_log_statements_off_is_silent() {
            let config = ExecConfig::new().with_log_statements(false);
            let stmt = Statement::new("SELECT quiet FROM t WHERE k=?", vec![1.into()]);
            statement(&config, "exec", &stmt);
            batch(&config, "exec_batch", BatchType::Logged, std::slice::from_ref(&stmt));
            finished(&config, "exec", Duration::from_micros(5), &Ok::<(), CqlError>(()));
            assert!(!logs_contain("SELECT quiet"));
            assert!(!logs_contain("elapsed_us"));
        }

        #[traced_test]
        #[test]
        fn test_session_outcome_is_timed() {
            let err: Result<(), CqlError> = Err(CqlError::session("timeout"));
            finished(&ExecConfig::new(), "iter", Duration::from_micros(42), &err);
            assert!(logs_contain("elapsed_us=42"));
            assert!(logs_contain("session error"));
        }

        #[traced_test]
        #[test]
        fn test_render_failure_is_warned() {
            render_failed("exec", &CqlError::EmptyCondition);
            assert!(logs_contain("WARN"));
            assert!(logs_contain("statement render failed"));
            assert!(logs_contain("Need at least one condition"));
        }
    }
}
