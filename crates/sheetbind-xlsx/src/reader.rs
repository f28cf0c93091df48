//! Container reader (calamine backed)

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use calamine::{Data, DataType, Reader, Xls, Xlsx};

use crate::error::XlsxResult;
use sheetbind_core::{CellError, CellValue, Workbook, Worksheet, MAX_COLS, MAX_ROWS};

/// Container family, selected by filename suffix.
///
/// Legacy binary suffixes pick the BIFF reader; everything else defaults to
/// the zip-based package reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Legacy binary container (`.xls`, `.et`)
    Binary,
    /// Zip-based package (`.xlsx`, `.xlsm`, and the default for anything else)
    Package,
}

impl SheetFormat {
    /// Pick the format for a path by its suffix
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xls") | Some("et") => SheetFormat::Binary,
            _ => SheetFormat::Package,
        }
    }
}

/// Spreadsheet container reader
pub struct XlsxReader;

impl XlsxReader {
    /// Load a workbook from a file, selecting the container format by suffix
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let format = SheetFormat::from_path(&path);
        let file = BufReader::new(File::open(path)?);
        Self::read(file, format)
    }

    /// Load a workbook from a byte stream with an explicit container format
    pub fn read<RS: Read + Seek>(reader: RS, format: SheetFormat) -> XlsxResult<Workbook> {
        match format {
            SheetFormat::Binary => Self::load(Xls::new(reader).map_err(calamine::Error::from)?),
            SheetFormat::Package => Self::load(Xlsx::new(reader).map_err(calamine::Error::from)?),
        }
    }

    fn load<RS, R>(mut source: R) -> XlsxResult<Workbook>
    where
        RS: Read + Seek,
        R: Reader<RS>,
        calamine::Error: From<R::Error>,
    {
        let mut workbook = Workbook::empty();
        let names = source.sheet_names().to_owned();
        for name in names {
            let range = source.worksheet_range(&name).map_err(calamine::Error::from)?;
            let mut sheet = Worksheet::new(&name);

            if let Some((start_row, start_col)) = range.start() {
                for (r, row) in range.rows().enumerate() {
                    let row_idx = start_row + r as u32;
                    for (c, cell) in row.iter().enumerate() {
                        let value = convert_cell(cell);
                        if value.is_empty() {
                            continue;
                        }
                        let col_idx = start_col + c as u32;
                        if row_idx >= MAX_ROWS || col_idx >= u32::from(MAX_COLS) {
                            log::warn!(
                                "skipping cell ({row_idx}, {col_idx}) in sheet {name:?}: outside sheet limits"
                            );
                            continue;
                        }
                        sheet.set_cell_value_at(row_idx, col_idx as u16, value)?;
                    }
                }
            }

            workbook.add_existing_worksheet(sheet)?;
        }
        Ok(workbook)
    }
}

/// Translate a calamine cell into the core cell model
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::string(s.as_str()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match data.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::string(data.to_string()),
        },
        Data::DurationIso(s) => CellValue::string(s.as_str()),
        Data::Error(e) => CellValue::Error(convert_error(e.clone())),
    }
}

fn convert_error(error: calamine::CellErrorType) -> CellError {
    use calamine::CellErrorType;

    match error {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::Na,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        CellErrorType::GettingData => CellError::GettingData,
    }
}
