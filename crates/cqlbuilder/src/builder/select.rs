use super::traits::CqlBuilder;
use crate::condition::{Condition, ConditionList};
use crate::error::{CqlError, CqlResult};
use crate::keyword::{ALLOW_FILTERING, COMMA, FROM, LIMIT, SELECT, WHERE};
use crate::statement::Statement;

/// SELECT builder.
///
/// Only WHERE conditions bind values; LIMIT is rendered inline.
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    table: String,
    columns: Vec<String>,
    where_conditions: ConditionList,
    /// Only rendered when > 0
    limit: i32,
    allow_filtering: bool,
}

impl SelectBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    /// Add a column to the selection list.
    pub fn add_column(mut self, column: &str) -> Self {
        self.columns.push(column.to_string());
        self
    }

    /// Add several columns, in order.
    pub fn add_columns(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| c.to_string()));
        self
    }

    /// Add a WHERE condition.
    pub fn where_(mut self, condition: Condition) -> Self {
        self.where_conditions.push(condition);
        self
    }

    /// Set `LIMIT n`. Values <= 0 leave the clause out.
    pub fn set_limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    /// Toggle `ALLOW FILTERING`.
    pub fn set_allow_filtering(mut self, allow: bool) -> Self {
        self.allow_filtering = allow;
        self
    }

    fn validate(&self) -> CqlResult<()> {
        if self.table.is_empty() {
            return Err(CqlError::EmptyTable);
        }
        if self.columns.is_empty() {
            return Err(CqlError::EmptyColumn);
        }
        if self.where_conditions.is_empty() {
            return Err(CqlError::EmptyCondition);
        }
        if self.columns.iter().any(|c| c.is_empty()) {
            return Err(CqlError::InvalidColumnName);
        }
        Ok(())
    }
}

impl CqlBuilder for SelectBuilder {
    // SELECT col1,col2,Col3 FROM test WHERE Col4=? AND Col5=? LIMIT 100
    fn to_query(&self) -> CqlResult<Statement> {
        self.validate()?;

        let mut cql = String::with_capacity(48 + self.table.len() + self.columns.len() * 12);
        let mut values = Vec::with_capacity(self.where_conditions.len());

        cql.push_str(SELECT);
        cql.push_str(&self.columns.join(COMMA));
        cql.push_str(FROM);
        cql.push_str(&self.table);

        self.where_conditions.write_clause(WHERE, &mut cql, &mut values);

        if self.limit > 0 {
            cql.push_str(LIMIT);
            cql.push_str(&self.limit.to_string());
        }

        if self.allow_filtering {
            cql.push_str(ALLOW_FILTERING);
        }

        Ok(Statement::new(cql, values))
    }
}
