//! # cqlbuilder
//!
//! A fluent builder for CQL (Cassandra Query Language) statements.
//!
//! ## Features
//!
//! - **Aligned binds**: every builder renders CQL text with `?` placeholders plus the
//!   values for them, in the same left-to-right order
//! - **Safe defaults**: UPDATE, DELETE and SELECT require a WHERE clause
//! - **Lightweight transactions**: `IF EXISTS`, `IF NOT EXISTS` and `IF col=?`
//!   conditions, with the `[applied]` flag read back for you
//! - **Batches**: logged, unlogged and counter batches of any builders
//! - **Driver agnostic**: execution goes through the small [`CqlSession`] trait
//!
//! ## Builders
//!
//! ```ignore
//! use cqlbuilder::{delete, eq, exists, in_list, insert, select, update, CqlBuilder};
//!
//! // INSERT INTO test(col1,col2) VALUES(?,?) USING TTL ?
//! insert("test")
//!     .set_value("col1", "test")
//!     .set_value("col2", 4123)
//!     .set_ttl(100)
//!     .execute(&session)
//!     .await?;
//!
//! // UPDATE test SET col1=? WHERE col3=? IF version=?
//! let cas = update("test")
//!     .set_value("col1", 123)
//!     .where_(eq("col3", 456))
//!     .if_(eq("version", 7))
//!     .execute_cas(&session)
//!     .await?;
//!
//! // DELETE col1 FROM test WHERE col3=? IF EXISTS
//! delete("test")
//!     .delete_column("col1")
//!     .where_(eq("col3", "value3"))
//!     .if_(exists())
//!     .execute(&session)
//!     .await?;
//!
//! // SELECT Col1 FROM Test WHERE Col2 in ? LIMIT 10
//! let stmt = select("Test")
//!     .add_column("Col1")
//!     .where_(in_list("Col2", vec![123, 456]))
//!     .set_limit(10)
//!     .to_query()?;
//! ```

pub mod builder;
pub mod condition;
pub mod error;
pub mod exec;
mod keyword;
pub mod prelude;
pub mod row;
pub mod session;
pub mod statement;
pub mod value;

pub use builder::{
    BatchBuilder, BatchType, CqlBuilder, DeleteBuilder, InsertBuilder, SelectBuilder,
    UpdateBuilder, delete, insert, select, start_batch, update,
};
pub use condition::{
    Condition, ConditionList, compose, eq, exists, gt, gte, in_list, lt, lte, ne,
};
pub use error::{CqlError, CqlResult};
pub use exec::{CasResult, ExecConfig, ExecManager, SessionExecManager};
pub use row::{APPLIED_COLUMN, FromRow, Row};
pub use session::CqlSession;
pub use statement::Statement;
pub use value::{CqlValue, FromCqlValue};
