//! Row mapping traits and utilities

use crate::error::{CqlError, CqlResult};
use crate::value::{CqlValue, FromCqlValue};

/// Column the server adds to the result of a conditional (CAS) statement.
pub const APPLIED_COLUMN: &str = "[applied]";

/// A result row as handed back by a [`CqlSession`](crate::CqlSession).
///
/// Columns keep the order the driver reported them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, CqlValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column (builder style, mainly for session implementations and tests).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<CqlValue>) {
        self.columns.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Raw value of a column, if present.
    pub fn get(&self, column: &str) -> Option<&CqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Typed access to a column, returning `CqlError::Decode` on failure.
    pub fn try_get<T: FromCqlValue>(&self, column: &str) -> CqlResult<T> {
        let value = self
            .get(column)
            .cloned()
            .ok_or_else(|| CqlError::decode(column, "no such column"))?;
        T::from_cql(value, column)
    }

    /// Iterate `(name, value)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &CqlValue)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Read the `[applied]` flag of a CAS result row.
    pub fn applied(&self) -> CqlResult<bool> {
        self.try_get(APPLIED_COLUMN)
    }
}

/// Trait for converting a result row into a Rust type.
///
/// # Example
///
/// ```ignore
/// use cqlbuilder::{CqlResult, FromRow, Row};
///
/// struct Todo {
///     id: String,
///     title: Option<String>,
/// }
///
/// impl FromRow for Todo {
///     fn from_row(row: &Row) -> CqlResult<Self> {
///         Ok(Todo {
///             id: row.try_get("c1")?,
///             title: row.try_get("c2")?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Convert a result row into Self
    fn from_row(row: &Row) -> CqlResult<Self>;
}

impl FromRow for Row {
    fn from_row(row: &Row) -> CqlResult<Self> {
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_get_by_name() {
        let row = Row::new().with("c1", "abc").with("c2", 2);
        assert_eq!(row.try_get::<String>("c1").unwrap(), "abc");
        assert_eq!(row.try_get::<i32>("c2").unwrap(), 2);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_try_get_missing_column() {
        let row = Row::new().with("c1", "abc");
        let err = row.try_get::<String>("nope").unwrap_err();
        assert!(matches!(err, CqlError::Decode { ref column, .. } if column == "nope"));
    }

    #[test]
    fn test_applied_flag() {
        let row = Row::new().with(APPLIED_COLUMN, false).with("c2", "def");
        assert!(!row.applied().unwrap());
        assert!(Row::new().with(APPLIED_COLUMN, 1).applied().is_err());
    }
}
