//! Convenient imports for typical `cqlbuilder` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! examples can start with:
//!
//! ```ignore
//! use cqlbuilder::prelude::*;
//! ```

pub use crate::{
    BatchType, Condition, CqlBuilder, CqlError, CqlResult, CqlSession, CqlValue, ExecManager,
    FromRow, Row, Statement, delete, eq, exists, in_list, insert, select, start_batch, update,
};
