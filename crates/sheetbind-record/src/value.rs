//! Field values and the record trait

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{BindError, BindResult};
use crate::schema::{FieldBinding, FieldKind};

/// A typed field value moving between a worksheet cell and a record field.
///
/// Variants mirror [`FieldKind`] one to one.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// Two-place decimal
    Decimal2(Decimal),
    /// 64-bit float
    Float64(f64),
    /// UTF-8 text
    Text(String),
    /// Date/time
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// The kind this value belongs to
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int32(_) => FieldKind::Int32,
            FieldValue::Int64(_) => FieldKind::Int64,
            FieldValue::Decimal2(_) => FieldKind::Decimal2,
            FieldValue::Float64(_) => FieldKind::Float64,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::DateTime(_) => FieldKind::DateTime,
        }
    }

    /// Build the [`BindError::ValueMismatch`] for assigning this value to
    /// `field` - the catch-all arm of a record's `set` implementation
    pub fn mismatch(self, field: &str) -> BindError {
        BindError::ValueMismatch {
            field: field.to_string(),
            kind: self.kind(),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int32(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int64(v)
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        FieldValue::Decimal2(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float64(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(v: NaiveDateTime) -> Self {
        FieldValue::DateTime(v)
    }
}

/// An application value type the row mapper can populate and read back.
///
/// The mapper never constructs a record from scratch: the read path clones a
/// caller-supplied prototype per row (`Clone` is the value-copy replacing a
/// deep reflective clone), then assigns mapped fields through [`Record::set`].
/// Fields outside the mapping keep their prototype values.
pub trait Record: Clone {
    /// The type's declared field-to-column bindings.
    ///
    /// Types without a spreadsheet layout of their own return an empty slice
    /// and rely on callers passing an explicit [`crate::ColumnMap`].
    fn bindings() -> &'static [FieldBinding]
    where
        Self: Sized;

    /// Read a field's current value by name
    fn get(&self, field: &str) -> Option<FieldValue>;

    /// Assign a value into a field by name
    fn set(&mut self, field: &str, value: FieldValue) -> BindResult<()>;
}
