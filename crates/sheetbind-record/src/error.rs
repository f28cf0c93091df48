//! Binding error types

use thiserror::Error;

use crate::schema::FieldKind;

/// Result type for binding operations
pub type BindResult<T> = std::result::Result<T, BindError>;

/// Errors that can occur while mapping rows to records
#[derive(Debug, Error)]
pub enum BindError {
    /// Start row outside the readable range
    #[error("start row {0} out of bounds (valid: 1..={1})")]
    StartRowOutOfBounds(u32, u32),

    /// A cell's text cannot be coerced into the target field kind
    #[error("cannot coerce {value:?} into {kind} field at row {row}, column {column}")]
    Parse {
        /// 1-based row of the offending cell
        row: u32,
        /// 1-based column of the offending cell
        column: u32,
        /// Target field kind
        kind: FieldKind,
        /// Rendered cell text that failed to parse
        value: String,
    },

    /// The record type does not expose the referenced field
    #[error("record has no field named {0:?}")]
    UnknownField(String),

    /// A field exists but cannot hold the given value kind
    #[error("field {field:?} cannot hold a {kind} value")]
    ValueMismatch {
        /// Field name as referenced by the mapping
        field: String,
        /// Kind of the rejected value
        kind: FieldKind,
    },

    /// Document model error
    #[error("document error: {0}")]
    Core(#[from] sheetbind_core::Error),
}
