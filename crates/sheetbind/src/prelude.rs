//! Prelude module - common imports for sheetbind users
//!
//! ```rust
//! use sheetbind::prelude::*;
//! ```

pub use crate::{
    // Binding errors
    BindError,
    BindResult,
    CellError,
    // Cell types
    CellValue,
    // Schema types
    ColumnMap,
    // Error types
    Error,
    FieldBinding,
    FieldKind,
    FieldValue,
    // Record types
    Record,
    Result,
    // Mapper types
    RowReader,
    RowWriter,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    Worksheet,
    // I/O types
    XlsxReader,
    XlsxWriter,
};
