//! Statement builders.
//!
//! Each builder accumulates a table name, columns/values and condition lists, and
//! renders them on demand through [`CqlBuilder::to_query`].
//!
//! ## Design
//!
//! - Rendering validates: a missing table, missing columns or a missing WHERE clause
//!   is an error, never a silently broken statement.
//! - Values are collected in the same left-to-right order as the `?` placeholders.
//! - Builders are owned values; every setter takes and returns `self`.

pub mod batch;
pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;

pub use batch::{BatchBuilder, BatchType};
pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use traits::CqlBuilder;
pub use update::UpdateBuilder;

/// Create an INSERT builder for the given table.
///
/// # Example
/// ```ignore
/// let stmt = cqlbuilder::insert("users")
///     .set_value("id", user_id)
///     .set_value("name", "alice")
///     .if_not_exists(true)
///     .to_query()?;
/// ```
pub fn insert(table: &str) -> InsertBuilder {
    InsertBuilder::new(table)
}

/// Create an UPDATE builder for the given table.
///
/// # Example
/// ```ignore
/// let stmt = cqlbuilder::update("users")
///     .set_value("name", "bob")
///     .where_(cqlbuilder::eq("id", user_id))
///     .to_query()?;
/// ```
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Create a SELECT builder for the given table.
pub fn select(table: &str) -> SelectBuilder {
    SelectBuilder::new(table)
}

/// Start an empty logged batch.
pub fn start_batch() -> BatchBuilder {
    BatchBuilder::new()
}
