//! Row mapper, read path

use sheetbind_core::Worksheet;

use crate::convert;
use crate::error::{BindError, BindResult};
use crate::schema::ColumnMap;
use crate::value::Record;

/// Reads a contiguous row range into cloned, populated records.
///
/// The batch contract is all-or-nothing: any cell that fails to coerce (or a
/// field the record rejects) aborts the whole call with an error naming the
/// 1-based row and column. Callers never observe a partial batch.
pub struct RowReader<'a> {
    sheet: &'a Worksheet,
}

impl<'a> RowReader<'a> {
    /// Create a reader over a worksheet
    pub fn new(sheet: &'a Worksheet) -> Self {
        Self { sheet }
    }

    /// Read every row from `start_row` (1-based) to the end of the sheet,
    /// resolving the column map from the prototype's declared bindings.
    pub fn read_records<T: Record>(&self, start_row: u32, prototype: &T) -> BindResult<Vec<T>> {
        let map = ColumnMap::resolve::<T>();
        self.read_records_with(start_row, prototype, &map)
    }

    /// Read every row from `start_row` (1-based) to the end of the sheet
    /// using an explicit column map.
    ///
    /// `start_row` may be at most `row_len() + 1`; the boundary value reads
    /// zero rows, so `start_row == 1` on an empty sheet yields an empty batch
    /// rather than an error.
    pub fn read_records_with<T: Record>(
        &self,
        start_row: u32,
        prototype: &T,
        map: &ColumnMap,
    ) -> BindResult<Vec<T>> {
        let row_len = self.sheet.row_len();
        if start_row == 0 || start_row > row_len + 1 {
            return Err(BindError::StartRowOutOfBounds(start_row, row_len + 1));
        }

        let mut records = Vec::with_capacity((row_len - (start_row - 1)) as usize);
        for row in (start_row - 1)..row_len {
            let mut record = prototype.clone();
            for entry in map.iter() {
                let cell = self.sheet.get_value_at(row, entry.column);
                let text = convert::render_cell(&cell);
                let value = match convert::parse_field(entry.kind, &text) {
                    Some(value) => value,
                    None => {
                        return Err(BindError::Parse {
                            row: row + 1,
                            column: u32::from(entry.column) + 1,
                            kind: entry.kind,
                            value: text,
                        })
                    }
                };
                record.set(&entry.name, value)?;
            }
            records.push(record);
        }
        Ok(records)
    }
}
