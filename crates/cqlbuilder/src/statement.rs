//! Rendered statements.

use crate::keyword::PLACEHOLDER;
use crate::value::CqlValue;
use serde::Serialize;

/// The result of rendering a builder: CQL text plus the values for its `?` placeholders.
///
/// `values[i]` binds to the `i`-th `?` in `cql`, counting left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub cql: String,
    pub values: Vec<CqlValue>,
}

impl Statement {
    pub fn new(cql: impl Into<String>, values: Vec<CqlValue>) -> Self {
        Self {
            cql: cql.into(),
            values,
        }
    }

    pub fn cql(&self) -> &str {
        &self.cql
    }

    pub fn values(&self) -> &[CqlValue] {
        &self.values
    }

    /// Number of `?` placeholders in the text.
    pub fn placeholder_count(&self) -> usize {
        self.cql.matches(PLACEHOLDER).count()
    }

    pub fn into_parts(self) -> (String, Vec<CqlValue>) {
        (self.cql, self.values)
    }
}
