//! Condition nodes for WHERE and IF clauses.
//!
//! A [`Condition`] renders itself as a `(fragment, values)` pair; a [`ConditionList`]
//! joins several of them with `AND` and flattens their values in the same order, so the
//! `?` placeholders and the bound values always line up.
//!
//! # Example
//! ```ignore
//! use cqlbuilder::{delete, eq, exists};
//!
//! let stmt = delete("test")
//!     .where_(eq("col3", "value3"))
//!     .if_(exists())
//!     .if_(eq("version", 123))
//!     .to_query()?;
//! // DELETE FROM test WHERE col3=? IF EXISTS AND version=?
//! ```

use crate::keyword::{AND, EXISTS, IN, PLACEHOLDER};
use crate::value::CqlValue;

/// A single predicate in a WHERE or IF clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Comparison: `column<op>?`. Equality is `op = "="`.
    Compare {
        column: String,
        op: &'static str,
        value: CqlValue,
    },
    /// Inclusion: `column in ?`.
    ///
    /// The whole collection is bound as one parameter rather than expanded into
    /// `(?, ?, ...)`; the driver serializes it as a list argument.
    In { column: String, values: CqlValue },
    /// `EXISTS`, for `IF EXISTS` on UPDATE/DELETE.
    Exists,
}

impl Condition {
    fn compare(column: impl Into<String>, op: &'static str, value: impl Into<CqlValue>) -> Self {
        Condition::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// `column=?`
    pub fn eq(column: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        Self::compare(column, "=", value)
    }

    /// `column!=?` (only meaningful in IF clauses)
    pub fn ne(column: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        Self::compare(column, "!=", value)
    }

    /// `column>?`
    pub fn gt(column: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        Self::compare(column, ">", value)
    }

    /// `column>=?`
    pub fn gte(column: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        Self::compare(column, ">=", value)
    }

    /// `column<?`
    pub fn lt(column: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        Self::compare(column, "<", value)
    }

    /// `column<=?`
    pub fn lte(column: impl Into<String>, value: impl Into<CqlValue>) -> Self {
        Self::compare(column, "<=", value)
    }

    /// `column in ?`, binding `values` as a single list parameter.
    pub fn in_list<T: Into<CqlValue>>(column: impl Into<String>, values: Vec<T>) -> Self {
        Condition::In {
            column: column.into(),
            values: CqlValue::from(values),
        }
    }

    pub fn exists() -> Self {
        Condition::Exists
    }

    /// Render to a text fragment and the values it binds, in placeholder order.
    pub fn render(&self) -> (String, Vec<CqlValue>) {
        let mut text = String::new();
        let mut values = Vec::new();
        self.write_to(&mut text, &mut values);
        (text, values)
    }

    fn write_to(&self, text: &mut String, values: &mut Vec<CqlValue>) {
        match self {
            Condition::Compare { column, op, value } => {
                text.push_str(column);
                text.push_str(op);
                text.push_str(PLACEHOLDER);
                values.push(value.clone());
            }
            Condition::In { column, values: list } => {
                text.push_str(column);
                text.push_str(IN);
                text.push_str(PLACEHOLDER);
                values.push(list.clone());
            }
            Condition::Exists => text.push_str(EXISTS),
        }
    }
}

/// Create an equality condition: `column=?`
pub fn eq(column: impl Into<String>, value: impl Into<CqlValue>) -> Condition {
    Condition::eq(column, value)
}

/// Create an inequality condition: `column!=?`
pub fn ne(column: impl Into<String>, value: impl Into<CqlValue>) -> Condition {
    Condition::ne(column, value)
}

/// Create a greater-than condition: `column>?`
pub fn gt(column: impl Into<String>, value: impl Into<CqlValue>) -> Condition {
    Condition::gt(column, value)
}

/// Create a greater-than-or-equal condition: `column>=?`
pub fn gte(column: impl Into<String>, value: impl Into<CqlValue>) -> Condition {
    Condition::gte(column, value)
}

/// Create a less-than condition: `column<?`
pub fn lt(column: impl Into<String>, value: impl Into<CqlValue>) -> Condition {
    Condition::lt(column, value)
}

/// Create a less-than-or-equal condition: `column<=?`
pub fn lte(column: impl Into<String>, value: impl Into<CqlValue>) -> Condition {
    Condition::lte(column, value)
}

/// Create an inclusion condition: `column in ?`
pub fn in_list<T: Into<CqlValue>>(column: impl Into<String>, values: Vec<T>) -> Condition {
    Condition::in_list(column, values)
}

/// Create an `EXISTS` condition for IF clauses.
pub fn exists() -> Condition {
    Condition::Exists
}

/// Join conditions with `AND`, concatenating their values in order.
///
/// Empty input gives empty text and no values.
pub fn compose(conditions: &[Condition]) -> (String, Vec<CqlValue>) {
    let mut text = String::new();
    let mut values = Vec::with_capacity(conditions.len());
    write_conditions(conditions, &mut text, &mut values);
    (text, values)
}

fn write_conditions(conditions: &[Condition], text: &mut String, values: &mut Vec<CqlValue>) {
    for (i, condition) in conditions.iter().enumerate() {
        if i > 0 {
            text.push_str(AND);
        }
        condition.write_to(text, values);
    }
}

/// An ordered list of conditions rendered as one `AND` clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionList {
    conditions: Vec<Condition>,
}

impl ConditionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn as_slice(&self) -> &[Condition] {
        &self.conditions
    }

    /// Append `<keyword><clause>` to `text` and the clause values to `values`.
    ///
    /// Writes nothing for an empty list.
    pub(crate) fn write_clause(&self, keyword: &str, text: &mut String, values: &mut Vec<CqlValue>) {
        if self.conditions.is_empty() {
            return;
        }
        text.push_str(keyword);
        write_conditions(&self.conditions, text, values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_fragment() {
        let (text, values) = eq("col1", "v").render();
        assert_eq!(text, "col1=?");
        assert_eq!(values, vec![CqlValue::from("v")]);
    }

    #[test]
    fn test_in_binds_single_collection() {
        let (text, values) = in_list("Col2", vec![123, 456]).render();
        assert_eq!(text, "Col2 in ?");
        assert_eq!(values, vec![CqlValue::from(vec![123, 456])]);
    }

    #[test]
    fn test_exists_has_no_values() {
        let (text, values) = exists().render();
        assert_eq!(text, "EXISTS");
        assert!(values.is_empty());
    }

    #[test]
    fn test_range_operators() {
        assert_eq!(gt("a", 1).render().0, "a>?");
        assert_eq!(gte("a", 1).render().0, "a>=?");
        assert_eq!(lt("a", 1).render().0, "a<?");
        assert_eq!(lte("a", 1).render().0, "a<=?");
        assert_eq!(ne("a", 1).render().0, "a!=?");
    }

    #[test]
    fn test_compose_separators_and_order() {
        let conditions = vec![exists(), eq("version", 123), in_list("k", vec!["a", "b"])];
        let (text, values) = compose(&conditions);
        assert_eq!(text, "EXISTS AND version=? AND k in ?");
        assert_eq!(text.matches(" AND ").count(), conditions.len() - 1);
        assert_eq!(
            values,
            vec![CqlValue::Int(123), CqlValue::from(vec!["a", "b"])]
        );
    }

    #[test]
    fn test_compose_empty() {
        let (text, values) = compose(&[]);
        assert!(text.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn test_condition_list_skips_empty_clause() {
        let mut text = String::from("SELECT a FROM t");
        let mut values = Vec::new();
        ConditionList::new().write_clause(" WHERE ", &mut text, &mut values);
        assert_eq!(text, "SELECT a FROM t");

        let mut list = ConditionList::new();
        list.push(eq("a", 1));
        list.write_clause(" WHERE ", &mut text, &mut values);
        assert_eq!(text, "SELECT a FROM t WHERE a=?");
        assert_eq!(values, vec![CqlValue::Int(1)]);
    }
}
