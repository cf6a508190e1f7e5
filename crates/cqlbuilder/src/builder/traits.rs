use crate::error::CqlResult;
use crate::exec::{self, CasResult};
use crate::row::FromRow;
use crate::session::CqlSession;
use crate::statement::Statement;

/// Base trait for statement builders.
///
/// `to_query` is a pure projection of the builder's state: calling it twice on an
/// unmodified builder returns equal statements. Render errors are returned, never
/// deferred to execution.
pub trait CqlBuilder: Send + Sync {
    /// Render the CQL text and its ordered bind values.
    fn to_query(&self) -> CqlResult<Statement>;

    /// Debug helper.
    fn to_cql(&self) -> CqlResult<String> {
        self.to_query().map(|stmt| stmt.cql)
    }

    /// Execute the statement.
    fn execute<S: CqlSession>(
        &self,
        session: &S,
    ) -> impl std::future::Future<Output = CqlResult<()>> + Send
    where
        Self: Sized,
    {
        exec::exec(self, session)
    }

    /// Execute as a lightweight transaction and report whether it was applied.
    fn execute_cas<S: CqlSession>(
        &self,
        session: &S,
    ) -> impl std::future::Future<Output = CqlResult<CasResult>> + Send
    where
        Self: Sized,
    {
        exec::exec_cas(self, session)
    }

    /// Execute and map the first row to `T`.
    fn fetch_one<T: FromRow, S: CqlSession>(
        &self,
        session: &S,
    ) -> impl std::future::Future<Output = CqlResult<T>> + Send
    where
        Self: Sized,
    {
        exec::exec_scan(self, session)
    }

    /// Execute and return a cursor over the result rows.
    fn fetch_iter<S: CqlSession>(
        &self,
        session: &S,
    ) -> impl std::future::Future<Output = CqlResult<S::RowStream>> + Send
    where
        Self: Sized,
    {
        exec::iter(self, session)
    }
}

impl<B: CqlBuilder + ?Sized> CqlBuilder for Box<B> {
    fn to_query(&self) -> CqlResult<Statement> {
        (**self).to_query()
    }
}
