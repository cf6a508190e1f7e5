//! Driver session trait.
//!
//! cqlbuilder never talks to the network. A [`CqlSession`] wraps whatever driver the
//! application uses (scylla, cassandra-cpp, a test double) and receives rendered
//! [`Statement`]s. Connection management, retries, paging, consistency levels and
//! timeouts are all the implementation's business.

use crate::builder::BatchType;
use crate::error::CqlResult;
use crate::row::Row;
use crate::statement::Statement;
use futures_core::Stream;

/// The execution contract a driver session must provide.
///
/// Errors from the driver should be wrapped with [`CqlError::session`](crate::CqlError::session);
/// the execution helpers hand them back to the caller untouched.
///
/// # Example
///
/// ```ignore
/// struct ScyllaSession(scylla::Session);
///
/// impl CqlSession for ScyllaSession {
///     type RowStream = BoxStream<'static, CqlResult<Row>>;
///
///     async fn execute(&self, statement: &Statement) -> CqlResult<()> {
///         self.0
///             .query_unpaged(statement.cql(), to_scylla_values(statement.values()))
///             .await
///             .map(|_| ())
///             .map_err(CqlError::session)
///     }
///     // ...
/// }
/// ```
pub trait CqlSession: Send + Sync {
    /// Cursor type returned by [`CqlSession::query_iter`].
    type RowStream: Stream<Item = CqlResult<Row>> + Send + Unpin;

    /// Execute a statement, discarding any rows.
    fn execute(
        &self,
        statement: &Statement,
    ) -> impl std::future::Future<Output = CqlResult<()>> + Send;

    /// Execute a statement and return all rows.
    ///
    /// For conditional statements the server's `[applied]` column is part of the rows.
    fn query(
        &self,
        statement: &Statement,
    ) -> impl std::future::Future<Output = CqlResult<Vec<Row>>> + Send;

    /// Execute a statement and return a streaming cursor over the rows.
    fn query_iter(
        &self,
        statement: &Statement,
    ) -> impl std::future::Future<Output = CqlResult<Self::RowStream>> + Send;

    /// Submit `statements`, in order, as one batch of the given type.
    ///
    /// Returns the rows the server sent back (non-empty only for conditional batches).
    fn batch(
        &self,
        batch_type: BatchType,
        statements: &[Statement],
    ) -> impl std::future::Future<Output = CqlResult<Vec<Row>>> + Send;
}
