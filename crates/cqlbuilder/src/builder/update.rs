use super::traits::CqlBuilder;
use crate::condition::{Condition, ConditionList};
use crate::error::{CqlError, CqlResult};
use crate::keyword::{ASSIGN, IF, LIST_SEP, SET, UPDATE, WHERE};
use crate::statement::Statement;
use crate::value::CqlValue;

/// UPDATE builder.
///
/// Rendering requires at least one SET pair and one WHERE condition; CQL has no
/// "update every row" form.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    table: String,
    columns: Vec<String>,
    values: Vec<CqlValue>,
    where_conditions: ConditionList,
    if_conditions: ConditionList,
}

impl UpdateBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    /// Set a column value. Repeated columns are appended, not replaced.
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

    /// Add a WHERE condition.
    pub fn where_(mut self, condition: Condition) -> Self {
        self.where_conditions.push(condition);
        self
    }

    /// Add an IF condition (turns the statement into a lightweight transaction).
    pub fn if_(mut self, condition: Condition) -> Self {
        self.if_conditions.push(condition);
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

impl CqlBuilder for UpdateBuilder {
    // UPDATE t SET c1=?, c2=? WHERE k=? IF EXISTS
    fn to_query(&self) -> CqlResult<Statement> {
        self.validate()?;

        let mut cql = String::with_capacity(48 + self.table.len() + self.columns.len() * 12);
        let mut values = Vec::with_capacity(
            self.values.len() + self.where_conditions.len() + self.if_conditions.len(),
        );

        cql.push_str(UPDATE);
        cql.push_str(&self.table);
        cql.push_str(SET);
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                cql.push_str(LIST_SEP);
            }
            cql.push_str(column);
            cql.push_str(ASSIGN);
        }
        values.extend(self.values.iter().cloned());

        self.where_conditions.write_clause(WHERE, &mut cql, &mut values);
        self.if_conditions.write_clause(IF, &mut cql, &mut values);

        Ok(Statement::new(cql, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{eq, exists};

    #[test]
    fn test_update() {
        let stmt = UpdateBuilder::new("test")
            .set_value("col1", 123)
            .set_value("col2", "test")
            .where_(eq("col3", 456))
            .where_(eq("col4", "thisthevalue"))
            .to_query()
            .unwrap();
        assert_eq!(stmt.cql, "UPDATE test SET col1=?, col2=? WHERE col3=? AND col4=?");
        assert_eq!(
            stmt.values,
            vec![
                CqlValue::Int(123),
                CqlValue::from("test"),
                CqlValue::Int(456),
                CqlValue::from("thisthevalue"),
            ]
        );
    }

    #[test]
    fn test_update_if_exists() {
        let stmt = UpdateBuilder::new("test")
            .set_value("col1", 123)
            .set_value("col2", "test")
            .where_(eq("col3", 456))
            .where_(eq("col4", "thisthevalue"))
            .if_(exists())
            .to_query()
            .unwrap();
        assert_eq!(
            stmt.cql,
            "UPDATE test SET col1=?, col2=? WHERE col3=? AND col4=? IF EXISTS"
        );
        assert_eq!(stmt.values.len(), 4);
    }

    #[test]
    fn test_update_if_condition_values_last() {
        let stmt = UpdateBuilder::new("test")
            .set_value("col1", 123)
            .set_value("col2", "test")
            .where_(eq("col3", 456))
            .where_(eq("col4", "thisthevalue"))
            .if_(eq("Version", 7))
            .to_query()
            .unwrap();
        assert_eq!(
            stmt.cql,
            "UPDATE test SET col1=?, col2=? WHERE col3=? AND col4=? IF Version=?"
        );
        assert_eq!(stmt.values.len(), 5);
        assert_eq!(stmt.values[4], CqlValue::Int(7));
    }

    #[test]
    fn test_update_without_where() {
        let res = UpdateBuilder::new("test")
            .set_value("col1", 123)
            .set_value("col2", "test")
            .to_query();
        assert!(matches!(res, Err(CqlError::EmptyCondition)));
    }

    #[test]
    fn test_update_validation_order() {
        assert!(matches!(
            UpdateBuilder::new("").to_query(),
            Err(CqlError::EmptyTable)
        ));
        assert!(matches!(
            UpdateBuilder::new("t").where_(eq("k", 1)).to_query(),
            Err(CqlError::EmptyColumn)
        ));
        assert!(matches!(
            UpdateBuilder::new("t").set_value("", 1).where_(eq("k", 1)).to_query(),
            Err(CqlError::InvalidColumnName)
        ));
    }
}
