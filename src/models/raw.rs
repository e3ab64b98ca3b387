//! Untyped records as they come out of storage
//!
//! Nothing about a raw record is trusted. Any field may hold a value of the
//! wrong type or no value at all; the normalizer decides what survives.

use chrono::NaiveDate;
use std::fmt;

/// A single untyped storage value
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// SQL NULL or a missing field
    Null,
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Real(f64),
    /// Text value, not yet interpreted
    Text(String),
    /// A native date value from a store that has one
    Date(NaiveDate),
}

impl RawValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Real(r) => write!(f, "{}", r),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for RawValue {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// A `(date, type, category, amount)` record as read by `fetch_all`
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: RawValue,
    pub kind: RawValue,
    pub category: RawValue,
    pub amount: RawValue,
}

impl RawRecord {
    /// Build a raw record from anything convertible into raw values
    pub fn new(
        date: impl Into<RawValue>,
        kind: impl Into<RawValue>,
        category: impl Into<RawValue>,
        amount: impl Into<RawValue>,
    ) -> Self {
        Self {
            date: date.into(),
            kind: kind.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }
}
