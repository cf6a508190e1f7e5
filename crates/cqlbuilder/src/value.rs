//! Bound value storage for CQL statements.
//!
//! [`CqlValue`] is what ends up behind each `?` placeholder. Conversions from Rust
//! types only wrap the value: nothing is coerced, parsed, or widened, so a `4123i32`
//! stays an `Int` and a `&str` stays `Text`.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use uuid::Uuid;

use crate::error::{CqlError, CqlResult};

/// A driver-native CQL value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CqlValue {
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Blob(Bytes),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
    /// `list<T>`; also used for the single bound argument of an `IN ?` predicate.
    List(Vec<CqlValue>),
    Set(Vec<CqlValue>),
    Map(Vec<(CqlValue, CqlValue)>),
}

impl CqlValue {
    /// Short CQL type name, used in decode error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CqlValue::Null => "null",
            CqlValue::Boolean(_) => "boolean",
            CqlValue::TinyInt(_) => "tinyint",
            CqlValue::SmallInt(_) => "smallint",
            CqlValue::Int(_) => "int",
            CqlValue::BigInt(_) => "bigint",
            CqlValue::Float(_) => "float",
            CqlValue::Double(_) => "double",
            CqlValue::Text(_) => "text",
            CqlValue::Blob(_) => "blob",
            CqlValue::Uuid(_) => "uuid",
            CqlValue::Timestamp(_) => "timestamp",
            #[cfg(feature = "rust_decimal")]
            CqlValue::Decimal(_) => "decimal",
            CqlValue::List(_) => "list",
            CqlValue::Set(_) => "set",
            CqlValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CqlValue::Null)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for CqlValue {
                fn from(v: $ty) -> Self {
                    CqlValue::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Boolean,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Float,
    f64 => Double,
    String => Text,
    Bytes => Blob,
    Uuid => Uuid,
    DateTime<Utc> => Timestamp,
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for CqlValue {
    fn from(v: rust_decimal::Decimal) -> Self {
        CqlValue::Decimal(v)
    }
}

impl From<&str> for CqlValue {
    fn from(v: &str) -> Self {
        CqlValue::Text(v.to_string())
    }
}

impl From<&String> for CqlValue {
    fn from(v: &String) -> Self {
        CqlValue::Text(v.clone())
    }
}

// None binds as NULL
impl<T: Into<CqlValue>> From<Option<T>> for CqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CqlValue::Null, Into::into)
    }
}

impl<T: Into<CqlValue>> From<Vec<T>> for CqlValue {
    fn from(v: Vec<T>) -> Self {
        CqlValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CqlValue>> From<BTreeSet<T>> for CqlValue {
    fn from(v: BTreeSet<T>) -> Self {
        CqlValue::Set(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CqlValue>, S> From<HashSet<T, S>> for CqlValue {
    fn from(v: HashSet<T, S>) -> Self {
        CqlValue::Set(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<CqlValue>, V: Into<CqlValue>> From<BTreeMap<K, V>> for CqlValue {
    fn from(v: BTreeMap<K, V>) -> Self {
        CqlValue::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<CqlValue>, V: Into<CqlValue>, S> From<HashMap<K, V, S>> for CqlValue {
    fn from(v: HashMap<K, V, S>) -> Self {
        CqlValue::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Conversion out of a [`CqlValue`], used when reading rows.
///
/// Like the `From` side, this never coerces: reading an `Int` column as `i64` fails.
pub trait FromCqlValue: Sized {
    /// Convert an owned value; `column` is only used for error messages.
    fn from_cql(value: CqlValue, column: &str) -> CqlResult<Self>;
}

fn mismatch(column: &str, expected: &str, got: &CqlValue) -> CqlError {
    CqlError::decode(
        column,
        format!("expected {}, got {}", expected, got.type_name()),
    )
}

macro_rules! impl_from_cql_scalar {
    ($($ty:ty => $variant:ident : $name:literal),* $(,)?) => {
        $(
            impl FromCqlValue for $ty {
                fn from_cql(value: CqlValue, column: &str) -> CqlResult<Self> {
                    match value {
                        CqlValue::$variant(v) => Ok(v),
                        other => Err(mismatch(column, $name, &other)),
                    }
                }
            }
        )*
    };
}

impl_from_cql_scalar! {
    bool => Boolean: "boolean",
    i8 => TinyInt: "tinyint",
    i16 => SmallInt: "smallint",
    i32 => Int: "int",
    i64 => BigInt: "bigint",
    f32 => Float: "float",
    f64 => Double: "double",
    String => Text: "text",
    Bytes => Blob: "blob",
    Uuid => Uuid: "uuid",
    DateTime<Utc> => Timestamp: "timestamp",
}

#[cfg(feature = "rust_decimal")]
impl_from_cql_scalar! {
    rust_decimal::Decimal => Decimal: "decimal",
}

impl FromCqlValue for CqlValue {
    fn from_cql(value: CqlValue, _column: &str) -> CqlResult<Self> {
        Ok(value)
    }
}

impl<T: FromCqlValue> FromCqlValue for Option<T> {
    fn from_cql(value: CqlValue, column: &str) -> CqlResult<Self> {
        match value {
            CqlValue::Null => Ok(None),
            other => T::from_cql(other, column).map(Some),
        }
    }
}

// Lists and sets both read into a Vec; element order is whatever the driver returned.
impl<T: FromCqlValue> FromCqlValue for Vec<T> {
    fn from_cql(value: CqlValue, column: &str) -> CqlResult<Self> {
        match value {
            CqlValue::List(items) | CqlValue::Set(items) => items
                .into_iter()
                .map(|item| T::from_cql(item, column))
                .collect(),
            other => Err(mismatch(column, "list or set", &other)),
        }
    }
}

impl<K: FromCqlValue + Ord, V: FromCqlValue> FromCqlValue for BTreeMap<K, V> {
    fn from_cql(value: CqlValue, column: &str) -> CqlResult<Self> {
        match value {
            CqlValue::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((K::from_cql(k, column)?, V::from_cql(v, column)?)))
                .collect(),
            other => Err(mismatch(column, "map", &other)),
        }
    }
}
