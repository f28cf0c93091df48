//! # sheetbind-core
//!
//! The tabular document model that the sheetbind record mapper runs against.
//!
//! This crate provides the fundamental types:
//! - [`CellValue`] - a cell's raw value together with its type tag (text,
//!   boolean, numeric, date, formula, error, blank)
//! - [`Worksheet`] - a sparse grid of cells with row-range bookkeeping
//! - [`Workbook`] - the document container
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::{Workbook, CellValue};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value_at(0, 0, "Hello").unwrap();
//! sheet.set_cell_value_at(0, 1, 42.0).unwrap();
//! assert_eq!(sheet.row_len(), 1);
//! ```

pub mod cell;
pub mod error;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellError, CellStorage, CellValue};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
