//! # sheetbind
//!
//! A Rust library for mapping spreadsheet rows to application-defined record
//! types and back.
//!
//! Record types declare which field sits in which column; sheetbind reads a
//! contiguous row range into cloned, populated records and lays record slices
//! out as consecutive rows, coercing every cell through a closed set of field
//! kinds (i32, i64, two-place decimal, f64, text, datetime).
//!
//! ## Example
//!
//! ```rust
//! use sheetbind::prelude::*;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Goods {
//!     name: String,
//!     count: i32,
//! }
//!
//! impl Record for Goods {
//!     fn bindings() -> &'static [FieldBinding] {
//!         const BINDINGS: &[FieldBinding] = &[
//!             FieldBinding::new(1, "name", FieldKind::Text),
//!             FieldBinding::new(2, "count", FieldKind::Int32),
//!         ];
//!         BINDINGS
//!     }
//!
//!     fn get(&self, field: &str) -> Option<FieldValue> {
//!         match field {
//!             "name" => Some(FieldValue::Text(self.name.clone())),
//!             "count" => Some(FieldValue::Int32(self.count)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set(&mut self, field: &str, value: FieldValue) -> BindResult<()> {
//!         match (field, value) {
//!             ("name", FieldValue::Text(v)) => self.name = v,
//!             ("count", FieldValue::Int32(v)) => self.count = v,
//!             (field, value) => return Err(value.mismatch(field)),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! let goods = vec![Goods { name: "bolt".into(), count: 40 }];
//! RowWriter::new(sheet).write_records(0, &goods, &["name", "count"]).unwrap();
//!
//! let read = RowReader::new(sheet).read_records(1, &Goods::default()).unwrap();
//! assert_eq!(read, goods);
//! ```

pub mod prelude;

// Re-export core types
pub use sheetbind_core::{
    CellError,
    // Cell types
    CellValue,
    // Error types
    Error,
    Result,
    // Main types
    Workbook,
    Worksheet,
    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export binding types
pub use sheetbind_record::{
    BindError, BindResult, ColumnEntry, ColumnMap, ColumnMapBuilder, FieldBinding, FieldKind,
    FieldValue, Record, RowReader, RowWriter, DATE_TIME_FORMAT,
};

// Re-export I/O types
pub use sheetbind_xlsx::{SheetFormat, XlsxError, XlsxReader, XlsxWriter};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        XlsxReader::read_file(path).map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match SheetFormat::from_path(path) {
            SheetFormat::Package => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            SheetFormat::Binary => Err(Error::other(format!(
                "Legacy binary containers are read-only: {}",
                path.display()
            ))),
        }
    }
}
