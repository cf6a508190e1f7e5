//! Execution adapter.
//!
//! Every operation renders first and then forwards `(cql, values)` to a
//! [`CqlSession`]. Render errors are returned before the session is touched, and
//! session errors come back unchanged: nothing here retries, translates, or swallows.
//!
//! The free functions use the default [`ExecConfig`]; [`SessionExecManager`] bundles a
//! session with its own config behind the mockable [`ExecManager`] trait.
//!
//! ```ignore
//! use cqlbuilder::{exec, insert, start_batch};
//!
//! exec::exec(&insert("k.t1").set_value("c1", key).set_value("c2", "C2"), &session).await?;
//!
//! let mut batch = start_batch();
//! for i in 0..10 {
//!     batch.push(insert("k.t1").set_value("c1", Uuid::new_v4()).set_value("c2", i.to_string()));
//! }
//! exec::exec_batch(&batch, &session).await?;
//! ```

mod config;
mod logging;

pub use config::ExecConfig;

use crate::builder::{BatchBuilder, CqlBuilder};
use crate::error::{CqlError, CqlResult};
use crate::row::{FromRow, Row};
use crate::session::CqlSession;
use crate::statement::Statement;
use std::time::Instant;

const DEFAULT_CONFIG: ExecConfig = ExecConfig::new();

/// Outcome of a conditional (lightweight transaction) statement or batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CasResult {
    /// Whether the server applied the write.
    pub applied: bool,
    /// Rows returned alongside the flag. When not applied these carry the current
    /// values of the conditioned columns.
    pub rows: Vec<Row>,
}

impl CasResult {
    /// Read the `[applied]` flag from the first returned row.
    pub fn from_rows(rows: Vec<Row>) -> CqlResult<Self> {
        let first = rows
            .first()
            .ok_or_else(|| CqlError::not_found("conditional statement returned no rows"))?;
        let applied = first.applied()?;
        Ok(Self { applied, rows })
    }

    /// The first returned row, typically the current values when not applied.
    pub fn current(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Map the first returned row to `T`.
    pub fn current_as<T: FromRow>(&self) -> CqlResult<Option<T>> {
        self.current().map(T::from_row).transpose()
    }
}

fn render<B: CqlBuilder + ?Sized>(
    builder: &B,
    config: &ExecConfig,
    op: &'static str,
) -> CqlResult<Statement> {
    match builder.to_query() {
        Ok(statement) => {
            logging::statement(config, op, &statement);
            Ok(statement)
        }
        Err(err) => {
            logging::render_failed(op, &err);
            Err(err)
        }
    }
}

fn render_batch(batch: &BatchBuilder, op: &'static str) -> CqlResult<Vec<Statement>> {
    batch.to_statements().inspect_err(|err| logging::render_failed(op, err))
}

async fn exec_with<B, S>(builder: &B, session: &S, config: &ExecConfig) -> CqlResult<()>
where
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    let statement = render(builder, config, "exec")?;
    let start = Instant::now();
    let result = session.execute(&statement).await;
    logging::finished(config, "exec", start.elapsed(), &result);
    result
}

async fn exec_batch_with<S: CqlSession>(
    batch: &BatchBuilder,
    session: &S,
    config: &ExecConfig,
) -> CqlResult<Vec<Row>> {
    let statements = render_batch(batch, "exec_batch")?;
    let batch_type = config.resolve_batch_type(batch.kind());
    logging::batch(config, "exec_batch", batch_type, &statements);
    let start = Instant::now();
    let result = session.batch(batch_type, &statements).await;
    logging::finished(config, "exec_batch", start.elapsed(), &result);
    result
}

async fn query_with<B, S>(
    builder: &B,
    session: &S,
    config: &ExecConfig,
    op: &'static str,
) -> CqlResult<Vec<Row>>
where
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    let statement = render(builder, config, op)?;
    let start = Instant::now();
    let result = session.query(&statement).await;
    logging::finished(config, op, start.elapsed(), &result);
    result
}

async fn exec_scan_with<T, B, S>(builder: &B, session: &S, config: &ExecConfig) -> CqlResult<T>
where
    T: FromRow,
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    let rows = query_with(builder, session, config, "exec_scan").await?;
    let row = rows
        .first()
        .ok_or_else(|| CqlError::not_found("query returned no rows"))?;
    T::from_row(row)
}

async fn iter_with<B, S>(builder: &B, session: &S, config: &ExecConfig) -> CqlResult<S::RowStream>
where
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    let statement = render(builder, config, "iter")?;
    let start = Instant::now();
    let result = session.query_iter(&statement).await;
    logging::finished(config, "iter", start.elapsed(), &result);
    result
}

/// Execute a single statement.
pub async fn exec<B, S>(builder: &B, session: &S) -> CqlResult<()>
where
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    exec_with(builder, session, &DEFAULT_CONFIG).await
}

/// Execute a batch, members in insertion order.
pub async fn exec_batch<S: CqlSession>(batch: &BatchBuilder, session: &S) -> CqlResult<()> {
    exec_batch_with(batch, session, &DEFAULT_CONFIG).await.map(|_| ())
}

/// Execute a conditional statement and read its `[applied]` flag.
pub async fn exec_cas<B, S>(builder: &B, session: &S) -> CqlResult<CasResult>
where
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    let rows = query_with(builder, session, &DEFAULT_CONFIG, "exec_cas").await?;
    CasResult::from_rows(rows)
}

/// Execute a conditional batch and read its `[applied]` flag.
pub async fn exec_batch_cas<S: CqlSession>(
    batch: &BatchBuilder,
    session: &S,
) -> CqlResult<CasResult> {
    let rows = exec_batch_with(batch, session, &DEFAULT_CONFIG).await?;
    CasResult::from_rows(rows)
}

/// Run a query and map the first row to `T`.
///
/// Returns [`CqlError::NotFound`] when the query produced no rows.
pub async fn exec_scan<T, B, S>(builder: &B, session: &S) -> CqlResult<T>
where
    T: FromRow,
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    exec_scan_with(builder, session, &DEFAULT_CONFIG).await
}

/// Run a query and return the session's streaming cursor.
pub async fn iter<B, S>(builder: &B, session: &S) -> CqlResult<S::RowStream>
where
    B: CqlBuilder + ?Sized,
    S: CqlSession,
{
    iter_with(builder, session, &DEFAULT_CONFIG).await
}

/// The execution operations, as a trait so callers can substitute a mock.
pub trait ExecManager: Send + Sync {
    /// Cursor type returned by [`ExecManager::iter`].
    type RowStream;

    /// Execute a single statement.
    fn exec<B: CqlBuilder + ?Sized>(
        &self,
        builder: &B,
    ) -> impl std::future::Future<Output = CqlResult<()>> + Send;

    /// Execute a batch.
    fn exec_batch(
        &self,
        batch: &BatchBuilder,
    ) -> impl std::future::Future<Output = CqlResult<()>> + Send;

    /// Execute a conditional statement.
    fn exec_cas<B: CqlBuilder + ?Sized>(
        &self,
        builder: &B,
    ) -> impl std::future::Future<Output = CqlResult<CasResult>> + Send;

    /// Execute a conditional batch.
    fn exec_batch_cas(
        &self,
        batch: &BatchBuilder,
    ) -> impl std::future::Future<Output = CqlResult<CasResult>> + Send;

    /// Run a query and map the first row.
    fn exec_scan<T: FromRow, B: CqlBuilder + ?Sized>(
        &self,
        builder: &B,
    ) -> impl std::future::Future<Output = CqlResult<T>> + Send;

    /// Run a query and return a cursor.
    fn iter<B: CqlBuilder + ?Sized>(
        &self,
        builder: &B,
    ) -> impl std::future::Future<Output = CqlResult<Self::RowStream>> + Send;
}

/// [`ExecManager`] backed by a [`CqlSession`].
#[derive(Debug, Clone)]
pub struct SessionExecManager<S> {
    session: S,
    config: ExecConfig,
}

impl<S: CqlSession> SessionExecManager<S> {
    pub fn new(session: S) -> Self {
        Self::with_config(session, ExecConfig::default())
    }

    pub fn with_config(session: S, config: ExecConfig) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    pub fn into_session(self) -> S {
        self.session
    }
}

impl<S: CqlSession> ExecManager for SessionExecManager<S> {
    type RowStream = S::RowStream;

    async fn exec<B: CqlBuilder + ?Sized>(&self, builder: &B) -> CqlResult<()> {
        exec_with(builder, &self.session, &self.config).await
    }

    async fn exec_batch(&self, batch: &BatchBuilder) -> CqlResult<()> {
        exec_batch_with(batch, &self.session, &self.config)
            .await
            .map(|_| ())
    }

    async fn exec_cas<B: CqlBuilder + ?Sized>(&self, builder: &B) -> CqlResult<CasResult> {
        let rows = query_with(builder, &self.session, &self.config, "exec_cas").await?;
        CasResult::from_rows(rows)
    }

    async fn exec_batch_cas(&self, batch: &BatchBuilder) -> CqlResult<CasResult> {
        let rows = exec_batch_with(batch, &self.session, &self.config).await?;
        CasResult::from_rows(rows)
    }

    async fn exec_scan<T: FromRow, B: CqlBuilder + ?Sized>(&self, builder: &B) -> CqlResult<T> {
        exec_scan_with(builder, &self.session, &self.config).await
    }

    async fn iter<B: CqlBuilder + ?Sized>(&self, builder: &B) -> CqlResult<Self::RowStream> {
        iter_with(builder, &self.session, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::APPLIED_COLUMN;

    #[test]
    fn test_cas_result_from_rows() {
        let rows = vec![Row::new().with(APPLIED_COLUMN, false).with("version", 3)];
        let cas = CasResult::from_rows(rows).unwrap();
        assert!(!cas.applied);
        assert_eq!(cas.current().unwrap().try_get::<i32>("version").unwrap(), 3);
    }

    #[test]
    fn test_cas_result_requires_a_row() {
        let err = CasResult::from_rows(Vec::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cas_result_requires_applied_column() {
        let err = CasResult::from_rows(vec![Row::new().with("c1", "x")]).unwrap_err();
        assert!(matches!(err, CqlError::Decode { .. }));
    }

    #[cfg(feature = "tracing")]
    mod events {
        use super::*;
        use crate::builder::{BatchType, select};
        use crate::condition::eq;
        use futures_util::stream;
        use tracing_test::traced_test;

        struct EmptySession;

        impl CqlSession for EmptySession {
            type RowStream = stream::Empty<CqlResult<Row>>;

            async fn execute(&self, _: &Statement) -> CqlResult<()> {
                Ok(())
            }

            async fn query(&self, _: &Statement) -> CqlResult<Vec<Row>> {
                Ok(Vec::new())
            }

            async fn query_iter(&self, _: &Statement) -> CqlResult<Self::RowStream> {
                Ok(stream::empty())
            }

            async fn batch(&self, _: BatchType, _: &[Statement]) -> CqlResult<Vec<Row>> {
                Ok(Vec::new())
            }
        }

        #[tokio::test]
        #[traced_test]
        async fn test_iter_logs_session_outcome() {
            let builder = select("t").add_column("a").where_(eq("k", 1));
            assert!(iter(&builder, &EmptySession).await.is_ok());
            assert!(logs_contain("cql=SELECT a FROM t WHERE k=?"));
            assert!(logs_contain("elapsed_us"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_quiet_manager_logs_nothing() {
            let manager = SessionExecManager::with_config(
                EmptySession,
                ExecConfig::new().with_log_statements(false),
            );
            let builder = select("t").add_column("hushed").where_(eq("k", 1));
            assert!(manager.iter(&builder).await.is_ok());
            assert!(!logs_contain("hushed"));
            assert!(!logs_contain("elapsed_us"));
        }
    }
}
