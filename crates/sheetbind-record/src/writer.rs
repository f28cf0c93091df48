//! Row mapper, write path

use sheetbind_core::Worksheet;

use crate::convert;
use crate::error::{BindError, BindResult};
use crate::value::Record;

/// Lays a record slice out as consecutive worksheet rows.
///
/// Failures propagate immediately; rows already written stay written (no
/// rollback).
pub struct RowWriter<'a> {
    sheet: &'a mut Worksheet,
}

impl<'a> RowWriter<'a> {
    /// Create a writer over a worksheet
    pub fn new(sheet: &'a mut Worksheet) -> Self {
        Self { sheet }
    }

    /// Write one row per record starting at `start_row` (0-based), strictly
    /// ascending with no gaps.
    ///
    /// `columns` names the output columns left to right: cell `(row, i)`
    /// receives the value of the field `columns[i]`, in its native cell
    /// representation. A name the record does not expose fails with
    /// [`BindError::UnknownField`].
    pub fn write_records<T: Record>(
        &mut self,
        start_row: u32,
        records: &[T],
        columns: &[&str],
    ) -> BindResult<()> {
        let mut row = start_row;
        for record in records {
            for (col, field) in columns.iter().enumerate() {
                let value = record
                    .get(field)
                    .ok_or_else(|| BindError::UnknownField((*field).to_string()))?;
                self.sheet
                    .set_cell_value_at(row, col as u16, convert::cell_from_field(value))?;
            }
            row += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldBinding, FieldKind};
    use crate::value::FieldValue;
    use pretty_assertions::assert_eq;
    use sheetbind_core::{CellValue, Worksheet};

    #[derive(Debug, Clone, Default)]
    struct Score {
        player: String,
        points: i64,
    }

    impl Record for Score {
        fn bindings() -> &'static [FieldBinding] {
            const BINDINGS: &[FieldBinding] = &[
                FieldBinding::new(1, "player", FieldKind::Text),
                FieldBinding::new(2, "points", FieldKind::Int64),
            ];
            BINDINGS
        }

        fn get(&self, field: &str) -> Option<FieldValue> {
            match field {
                "player" => Some(FieldValue::Text(self.player.clone())),
                "points" => Some(FieldValue::Int64(self.points)),
                _ => None,
            }
        }

        fn set(&mut self, field: &str, value: FieldValue) -> BindResult<()> {
            match (field, value) {
                ("player", FieldValue::Text(v)) => self.player = v,
                ("points", FieldValue::Int64(v)) => self.points = v,
                (field, value) => return Err(value.mismatch(field)),
            }
            Ok(())
        }
    }

    #[test]
    fn test_writes_consecutive_rows_from_start() {
        let mut sheet = Worksheet::new("Sheet1");
        let scores = vec![
            Score { player: "ada".into(), points: 10 },
            Score { player: "bob".into(), points: 20 },
        ];

        RowWriter::new(&mut sheet)
            .write_records(2, &scores, &["player", "points"])
            .unwrap();

        assert_eq!(sheet.get_value_at(2, 0), CellValue::string("ada"));
        assert_eq!(sheet.get_value_at(2, 1), CellValue::Number(10.0));
        assert_eq!(sheet.get_value_at(3, 0), CellValue::string("bob"));
        assert_eq!(sheet.get_value_at(3, 1), CellValue::Number(20.0));
        // No gap rows, nothing before the start row
        assert_eq!(sheet.row_len(), 4);
        assert_eq!(sheet.cells_in_row(0), 0);
        assert_eq!(sheet.cells_in_row(1), 0);
    }

    #[test]
    fn test_column_order_follows_name_list() {
        let mut sheet = Worksheet::new("Sheet1");
        let scores = vec![Score { player: "ada".into(), points: 10 }];

        RowWriter::new(&mut sheet)
            .write_records(0, &scores, &["points", "player"])
            .unwrap();

        assert_eq!(sheet.get_value_at(0, 0), CellValue::Number(10.0));
        assert_eq!(sheet.get_value_at(0, 1), CellValue::string("ada"));
    }

    #[test]
    fn test_unknown_field_propagates_without_rollback() {
        let mut sheet = Worksheet::new("Sheet1");
        let scores = vec![Score { player: "ada".into(), points: 10 }];

        let err = RowWriter::new(&mut sheet)
            .write_records(0, &scores, &["player", "missing"])
            .unwrap_err();
        assert!(matches!(err, BindError::UnknownField(ref f) if f == "missing"));

        // The cell written before the failure is still there
        assert_eq!(sheet.get_value_at(0, 0), CellValue::string("ada"));
    }

    #[test]
    fn test_empty_record_slice_writes_nothing() {
        let mut sheet = Worksheet::new("Sheet1");
        RowWriter::new(&mut sheet)
            .write_records(0, &Vec::<Score>::new(), &["player"])
            .unwrap();
        assert!(sheet.is_empty());
    }
}
