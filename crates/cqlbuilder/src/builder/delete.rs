use super::traits::CqlBuilder;
use crate::condition::{Condition, ConditionList};
use crate::error::{CqlError, CqlResult};
use crate::keyword::{COMMA, DELETE, FROM, IF, WHERE};
use crate::statement::Statement;

/// DELETE builder.
///
/// With no columns the whole row is deleted. A WHERE condition is always required.
// TODO: support `USING TIMESTAMP` for deletes.
#[derive(Debug, Clone, Default)]
pub struct DeleteBuilder {
    table: String,
    columns: Vec<String>,
    where_conditions: ConditionList,
    if_conditions: ConditionList,
}

impl DeleteBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    /// Delete a single column instead of the whole row.
    pub fn delete_column(mut self, column: &str) -> Self {
        self.columns.push(column.to_string());
        self
    }

    /// Add a WHERE condition.
    pub fn where_(mut self, condition: Condition) -> Self {
        self.where_conditions.push(condition);
        self
    }

    /// Add an IF condition.
    pub fn if_(mut self, condition: Condition) -> Self {
        self.if_conditions.push(condition);
        self
    }

    fn validate(&self) -> CqlResult<()> {
        if self.table.is_empty() {
            return Err(CqlError::EmptyTable);
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

impl CqlBuilder for DeleteBuilder {
    // DELETE firstname,lastname FROM cyclist_name WHERE id=? IF EXISTS AND version=?
    fn to_query(&self) -> CqlResult<Statement> {
        self.validate()?;

        let mut cql = String::with_capacity(48 + self.table.len() + self.columns.len() * 12);
        let mut values = Vec::with_capacity(self.where_conditions.len() + self.if_conditions.len());

        cql.push_str(DELETE);
        if !self.columns.is_empty() {
            cql.push(' ');
            cql.push_str(&self.columns.join(COMMA));
        }
        cql.push_str(FROM);
        cql.push_str(&self.table);

        self.where_conditions.write_clause(WHERE, &mut cql, &mut values);
        self.if_conditions.write_clause(IF, &mut cql, &mut values);

        Ok(Statement::new(cql, values))
    }
}
