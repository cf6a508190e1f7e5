use super::traits::CqlBuilder;
use crate::error::CqlResult;
use crate::exec::{self, CasResult};
use crate::session::CqlSession;
use crate::statement::Statement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of batch submitted to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchType {
    /// Atomic batch, written to the batch log first.
    #[default]
    Logged,
    Unlogged,
    /// Batch of counter updates.
    Counter,
}

/// An ordered group of statements executed as one batch.
///
/// The batch renders nothing of its own: each member is rendered in insertion order
/// when the batch is executed.
#[derive(Default)]
pub struct BatchBuilder {
    builders: Vec<Box<dyn CqlBuilder>>,
    batch_type: BatchType,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement builder.
    #[allow(clippy::should_implement_trait)]
    pub fn add<B: CqlBuilder + 'static>(mut self, builder: B) -> Self {
        self.builders.push(Box::new(builder));
        self
    }

    /// Append a statement builder without consuming the batch (useful in loops).
    pub fn push<B: CqlBuilder + 'static>(&mut self, builder: B) -> &mut Self {
        self.builders.push(Box::new(builder));
        self
    }

    pub fn batch_type(mut self, batch_type: BatchType) -> Self {
        self.batch_type = batch_type;
        self
    }

    pub fn kind(&self) -> BatchType {
        self.batch_type
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Render every member in order, stopping at the first render error.
    pub fn to_statements(&self) -> CqlResult<Vec<Statement>> {
        self.builders.iter().map(|b| b.to_query()).collect()
    }

    /// Execute the batch.
    pub fn execute<S: CqlSession>(
        &self,
        session: &S,
    ) -> impl std::future::Future<Output = CqlResult<()>> + Send {
        exec::exec_batch(self, session)
    }

    /// Execute a conditional batch and report whether it was applied.
    pub fn execute_cas<S: CqlSession>(
        &self,
        session: &S,
    ) -> impl std::future::Future<Output = CqlResult<CasResult>> + Send {
        exec::exec_batch_cas(self, session)
    }
}

impl fmt::Debug for BatchBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchBuilder")
            .field("batch_type", &self.batch_type)
            .field("len", &self.builders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{DeleteBuilder, InsertBuilder, UpdateBuilder};
    use crate::condition::eq;
    use crate::error::CqlError;
    use crate::value::CqlValue;

    #[test]
    fn test_batch_keeps_order() {
        let batch = BatchBuilder::new()
            .add(InsertBuilder::new("t").set_value("a", 1))
            .add(UpdateBuilder::new("t").set_value("b", 2).where_(eq("a", 1)))
            .add(DeleteBuilder::new("t").where_(eq("a", 3)));

        let statements = batch.to_statements().unwrap();
        let cql: Vec<&str> = statements.iter().map(|s| s.cql()).collect();
        assert_eq!(
            cql,
            vec![
                "INSERT INTO t(a) VALUES(?)",
                "UPDATE t SET b=? WHERE a=?",
                "DELETE FROM t WHERE a=?",
            ]
        );
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.kind(), BatchType::Logged);
    }

    #[test]
    fn test_batch_stops_at_first_render_error() {
        let batch = BatchBuilder::new()
            .add(InsertBuilder::new("t").set_value("a", 1))
            .add(UpdateBuilder::new("t").set_value("b", 2))
            .add(InsertBuilder::new(""));
        assert!(matches!(batch.to_statements(), Err(CqlError::EmptyCondition)));
    }

    #[test]
    fn test_batch_push_in_loop() {
        let mut batch = BatchBuilder::new().batch_type(BatchType::Unlogged);
        for i in 0..10 {
            batch.push(InsertBuilder::new("k.t1").set_value("c1", i.to_string()));
        }
        assert_eq!(batch.len(), 10);
        assert_eq!(batch.kind(), BatchType::Unlogged);
        assert_eq!(batch.to_statements().unwrap()[9].values[0], CqlValue::from("9"));
    }
}
