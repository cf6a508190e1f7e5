//! CQL keywords and separators used while rendering statements.

pub(crate) const COMMA: &str = ",";
pub(crate) const LIST_SEP: &str = ", ";
pub(crate) const LEFT_PAR: &str = "(";
pub(crate) const RIGHT_PAR: &str = ")";
pub(crate) const PLACEHOLDER: &str = "?";
pub(crate) const ASSIGN: &str = "=?";

pub(crate) const INSERT_INTO: &str = "INSERT INTO ";
pub(crate) const VALUES: &str = " VALUES";
pub(crate) const UPDATE: &str = "UPDATE ";
pub(crate) const SET: &str = " SET ";
pub(crate) const DELETE: &str = "DELETE";
pub(crate) const SELECT: &str = "SELECT ";
pub(crate) const FROM: &str = " FROM ";
pub(crate) const WHERE: &str = " WHERE ";
pub(crate) const IF: &str = " IF ";
pub(crate) const AND: &str = " AND ";
pub(crate) const IN: &str = " in ";
pub(crate) const EXISTS: &str = "EXISTS";
pub(crate) const IF_NOT_EXISTS: &str = " IF NOT EXISTS";
pub(crate) const USING_TTL: &str = " USING TTL ?";
pub(crate) const LIMIT: &str = " LIMIT ";
pub(crate) const ALLOW_FILTERING: &str = " ALLOW FILTERING";
