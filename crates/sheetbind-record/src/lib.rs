//! # sheetbind-record
//!
//! The binding engine between worksheet rows and application record types.
//!
//! Record types declare which field sits in which column via [`FieldBinding`]s;
//! [`ColumnMap`] turns those declarations (or an explicit builder call chain)
//! into an ordered column-to-field table. [`RowReader`] materializes a row
//! range as cloned, populated records; [`RowWriter`] lays a record slice out
//! as consecutive rows.
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::Workbook;
//! use sheetbind_record::{
//!     BindResult, FieldBinding, FieldKind, FieldValue, Record, RowReader, RowWriter,
//! };
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Item {
//!     name: String,
//!     count: i32,
//! }
//!
//! impl Record for Item {
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
//! let items = vec![Item { name: "bolt".into(), count: 40 }];
//! RowWriter::new(sheet).write_records(0, &items, &["name", "count"]).unwrap();
//!
//! let read = RowReader::new(sheet)
//!     .read_records(1, &Item::default())
//!     .unwrap();
//! assert_eq!(read, items);
//! ```

mod convert;
mod error;
mod reader;
mod schema;
mod value;
mod writer;

pub use convert::DATE_TIME_FORMAT;
pub use error::{BindError, BindResult};
pub use reader::RowReader;
pub use schema::{ColumnEntry, ColumnMap, ColumnMapBuilder, FieldBinding, FieldKind};
pub use value::{FieldValue, Record};
pub use writer::RowWriter;
