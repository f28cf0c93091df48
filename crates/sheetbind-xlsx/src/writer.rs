//! Container writer (umya-spreadsheet backed)

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{XlsxError, XlsxResult};
use sheetbind_core::{CellValue, Workbook};

/// Number format applied to date cells so readers tag them as dates again
const DATE_FORMAT_CODE: &str = "yyyy-mm-dd hh:mm:ss";

/// Spreadsheet container writer (zip-based package only)
pub struct XlsxWriter;

impl XlsxWriter {
    /// Persist a workbook to a zip-based package file
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let book = Self::to_umya(workbook)?;
        umya_spreadsheet::writer::xlsx::write(&book, path)
            .map_err(|e| XlsxError::Write(e.to_string()))
    }

    fn to_umya(workbook: &Workbook) -> XlsxResult<umya_spreadsheet::Spreadsheet> {
        let mut book = umya_spreadsheet::new_file_empty_worksheet();

        for sheet in workbook.worksheets() {
            let target = book
                .new_sheet(sheet.name())
                .map_err(|e| XlsxError::Write(e.to_string()))?;

            for (row, col, value) in sheet.iter_cells() {
                // umya addresses cells as 1-based (column, row)
                let coordinate = (u32::from(col) + 1, row + 1);
                match value {
                    CellValue::Empty => {}
                    CellValue::Boolean(b) => {
                        target.get_cell_mut(coordinate).set_value_bool(*b);
                    }
                    CellValue::Number(n) => {
                        target.get_cell_mut(coordinate).set_value_number(*n);
                    }
                    CellValue::String(s) => {
                        target.get_cell_mut(coordinate).set_value_string(s);
                    }
                    CellValue::DateTime(dt) => {
                        target
                            .get_cell_mut(coordinate)
                            .set_value_number(excel_serial(*dt));
                        target
                            .get_style_mut(coordinate)
                            .get_number_format_mut()
                            .set_format_code(DATE_FORMAT_CODE);
                    }
                    CellValue::Error(e) => {
                        target.get_cell_mut(coordinate).set_value_string(e.as_str());
                    }
                    CellValue::Formula { text, .. } => {
                        target
                            .get_cell_mut(coordinate)
                            .set_formula(text.trim_start_matches('='));
                    }
                }
            }
        }

        Ok(book)
    }
}

/// Days (with a fractional time part) since the 1900 date system epoch
fn excel_serial(dt: NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let delta = dt.signed_duration_since(epoch);
    delta.num_seconds() as f64 / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_excel_serial_known_values() {
        // The 1899-12-30 epoch absorbs the 1900 leap-year bug, so dates
        // before 1900-03-01 sit one day high
        assert_eq!(excel_serial(dt(1899, 12, 31, 0, 0, 0)), 1.0);
        assert_eq!(excel_serial(dt(1900, 1, 1, 0, 0, 0)), 2.0);
        assert_eq!(excel_serial(dt(1900, 1, 1, 12, 0, 0)), 2.5);
    }

    #[test]
    fn test_excel_serial_modern_date() {
        let serial = excel_serial(dt(2024, 1, 15, 0, 0, 0));
        assert_eq!(serial, 45306.0);
    }
}
