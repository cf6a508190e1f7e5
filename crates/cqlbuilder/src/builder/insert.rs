use super::traits::CqlBuilder;
use crate::error::{CqlError, CqlResult};
use crate::keyword::{COMMA, IF_NOT_EXISTS, INSERT_INTO, LEFT_PAR, PLACEHOLDER, RIGHT_PAR, USING_TTL, VALUES};
use crate::statement::Statement;
use crate::value::CqlValue;

/// INSERT builder.
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    /// Table name
    table: String,
    /// Column names, parallel to `values`
    columns: Vec<String>,
    /// Bound values
    values: Vec<CqlValue>,
    /// Append `IF NOT EXISTS`
    if_not_exists: bool,
    /// TTL in seconds, only rendered when > 0
    ttl: i32,
}

impl InsertBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    /// Set a column value.
    ///
    /// Setting the same column twice appends a second pair instead of replacing the
    /// first one; the server rejects the duplicate when the statement runs.
    pub fn set_value(mut self, column: &str, value: impl Into<CqlValue>) -> Self {
        self.columns.push(column.to_string());
        self.values.push(value.into());
        self
    }

    /// Set an optional column value (None => skip).
    pub fn set_value_opt<T: Into<CqlValue>>(self, column: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set_value(column, v),
            None => self,
        }
    }

    /// Set the TTL in seconds. Values <= 0 disable the `USING TTL` clause.
    pub fn set_ttl(mut self, seconds: i32) -> Self {
        self.ttl = seconds;
        self
    }

    /// Toggle `IF NOT EXISTS`.
    pub fn if_not_exists(mut self, enabled: bool) -> Self {
        self.if_not_exists = enabled;
        self
    }

    fn validate(&self) -> CqlResult<()> {
        if self.table.is_empty() {
            return Err(CqlError::EmptyTable);
        }
        if self.columns.is_empty() {
            return Err(CqlError::EmptyColumn);
        }
        if self.columns.iter().any(|c| c.is_empty()) {
            return Err(CqlError::InvalidColumnName);
        }
        Ok(())
    }
}

impl CqlBuilder for InsertBuilder {
    // INSERT INTO t(c1,c2) VALUES(?,?) IF NOT EXISTS USING TTL ?
    fn to_query(&self) -> CqlResult<Statement> {
        self.validate()?;

        let mut cql = String::with_capacity(32 + self.table.len() + self.columns.len() * 12);
        let mut placeholders = String::with_capacity(2 + self.columns.len() * 2);

        cql.push_str(INSERT_INTO);
        cql.push_str(&self.table);
        cql.push_str(LEFT_PAR);
        placeholders.push_str(LEFT_PAR);
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                cql.push_str(COMMA);
                placeholders.push_str(COMMA);
            }
            cql.push_str(column);
            placeholders.push_str(PLACEHOLDER);
        }
        cql.push_str(RIGHT_PAR);
        placeholders.push_str(RIGHT_PAR);

        cql.push_str(VALUES);
        cql.push_str(&placeholders);

        let mut values = Vec::with_capacity(self.values.len() + 1);
        values.extend(self.values.iter().cloned());

        if self.if_not_exists {
            cql.push_str(IF_NOT_EXISTS);
        }

        if self.ttl > 0 {
            cql.push_str(USING_TTL);
            values.push(CqlValue::Int(self.ttl));
        }

        Ok(Statement::new(cql, values))
    }
}
