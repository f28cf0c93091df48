//! Cell/field coercion tables
//!
//! Both directions of the mapper funnel through here: a cell is first
//! rendered to text by its raw type tag, then parsed into the target field
//! kind; a field value maps straight to its native cell representation.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use sheetbind_core::CellValue;

use crate::schema::FieldKind;
use crate::value::FieldValue;

/// The fixed date/time pattern used on both paths
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendered text of error cells
const ERROR_SENTINEL: &str = "ERROR";

/// Render a cell to its text representation according to its raw type tag.
///
/// - text: trimmed
/// - boolean: `true` / `false`
/// - formula: the trimmed formula source, never a cached result
/// - date: [`DATE_TIME_FORMAT`]
/// - numeric: at most two fractional digits, no trailing zeros
/// - blank (or absent cell): empty string
/// - error: the `ERROR` sentinel
pub(crate) fn render_cell(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Boolean(b) => b.to_string(),
        CellValue::Number(n) => render_number(*n),
        CellValue::String(s) => s.trim().to_string(),
        CellValue::DateTime(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        CellValue::Error(_) => ERROR_SENTINEL.to_string(),
        CellValue::Formula { text, .. } => text.trim().to_string(),
    }
}

/// Format a number with at most two fractional digits and no trailing zeros
fn render_number(n: f64) -> String {
    let mut s = format!("{:.2}", n);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Parse rendered cell text into the given field kind.
///
/// Returns `None` when the text does not parse; the caller owns turning that
/// into a positioned [`crate::BindError::Parse`].
pub(crate) fn parse_field(kind: FieldKind, text: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::Int32 => text.parse::<i32>().ok().map(FieldValue::Int32),
        FieldKind::Int64 => text.parse::<i64>().ok().map(FieldValue::Int64),
        FieldKind::Decimal2 => text
            .parse::<Decimal>()
            .ok()
            .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            .map(FieldValue::Decimal2),
        FieldKind::Float64 => text.parse::<f64>().ok().map(FieldValue::Float64),
        FieldKind::Text => Some(FieldValue::Text(text.to_string())),
        FieldKind::DateTime => NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
            .ok()
            .map(FieldValue::DateTime),
    }
}

/// The native cell representation of a field value.
///
/// Every kind has one: integers, floats and decimals become numeric cells,
/// text becomes a text cell, dates become date cells. Nothing is skipped.
pub(crate) fn cell_from_field(value: FieldValue) -> CellValue {
    match value {
        FieldValue::Int32(v) => CellValue::Number(v as f64),
        FieldValue::Int64(v) => CellValue::Number(v as f64),
        FieldValue::Decimal2(v) => CellValue::Number(v.to_f64().unwrap_or_default()),
        FieldValue::Float64(v) => CellValue::Number(v),
        FieldValue::Text(v) => CellValue::String(v),
        FieldValue::DateTime(v) => CellValue::DateTime(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use sheetbind_core::CellError;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_render_number_trims_trailing_zeros() {
        assert_eq!(render_number(3.0), "3");
        assert_eq!(render_number(3.1), "3.1");
        assert_eq!(render_number(3.14159), "3.14");
        assert_eq!(render_number(-100.5), "-100.5");
        assert_eq!(render_number(0.0), "0");
    }

    #[test]
    fn test_render_cell_by_tag() {
        assert_eq!(render_cell(&CellValue::Empty), "");
        assert_eq!(render_cell(&CellValue::Boolean(true)), "true");
        assert_eq!(render_cell(&CellValue::string("  padded  ")), "padded");
        assert_eq!(render_cell(&CellValue::Error(CellError::Div0)), "ERROR");
        assert_eq!(
            render_cell(&CellValue::DateTime(dt(2024, 1, 15, 0, 0, 0))),
            "2024-01-15 00:00:00"
        );
    }

    #[test]
    fn test_render_formula_uses_source_not_cached_result() {
        let formula = CellValue::Formula {
            text: " =A1+A2 ".to_string(),
            cached_value: Some(Box::new(CellValue::Number(7.0))),
        };
        assert_eq!(render_cell(&formula), "=A1+A2");
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_field(FieldKind::Int32, "42"), Some(FieldValue::Int32(42)));
        assert_eq!(
            parse_field(FieldKind::Int64, "9223372036854775807"),
            Some(FieldValue::Int64(i64::MAX))
        );
        assert_eq!(parse_field(FieldKind::Int32, "4.2"), None);
        assert_eq!(parse_field(FieldKind::Int32, ""), None);
        assert_eq!(parse_field(FieldKind::Int32, "ERROR"), None);
    }

    #[test]
    fn test_parse_decimal_rounds_half_up_to_two_places() {
        assert_eq!(
            parse_field(FieldKind::Decimal2, "12.345"),
            Some(FieldValue::Decimal2("12.35".parse().unwrap()))
        );
        assert_eq!(
            parse_field(FieldKind::Decimal2, "12.344"),
            Some(FieldValue::Decimal2("12.34".parse().unwrap()))
        );
    }

    #[test]
    fn test_parse_datetime_fixed_pattern() {
        assert_eq!(
            parse_field(FieldKind::DateTime, "2024-01-15 00:00:00"),
            Some(FieldValue::DateTime(dt(2024, 1, 15, 0, 0, 0)))
        );
        assert_eq!(parse_field(FieldKind::DateTime, "2024-01-15"), None);
        assert_eq!(parse_field(FieldKind::DateTime, ""), None);
    }

    #[test]
    fn test_parse_text_keeps_blank_as_empty_string() {
        assert_eq!(parse_field(FieldKind::Text, ""), Some(FieldValue::Text(String::new())));
    }

    #[test]
    fn test_cell_from_field_covers_every_kind() {
        assert_eq!(cell_from_field(FieldValue::Int32(7)), CellValue::Number(7.0));
        assert_eq!(cell_from_field(FieldValue::Int64(-3)), CellValue::Number(-3.0));
        assert_eq!(cell_from_field(FieldValue::Float64(2.5)), CellValue::Number(2.5));
        assert_eq!(
            cell_from_field(FieldValue::Decimal2("12.35".parse().unwrap())),
            CellValue::Number(12.35)
        );
        assert_eq!(
            cell_from_field(FieldValue::Text("x".into())),
            CellValue::String("x".into())
        );
        let stamp = dt(2024, 1, 15, 8, 30, 0);
        assert_eq!(
            cell_from_field(FieldValue::DateTime(stamp)),
            CellValue::DateTime(stamp)
        );
    }

    #[test]
    fn test_date_text_roundtrip() {
        let stamp = dt(2024, 1, 15, 0, 0, 0);
        let text = render_cell(&CellValue::DateTime(stamp));
        assert_eq!(
            parse_field(FieldKind::DateTime, &text),
            Some(FieldValue::DateTime(stamp))
        );
    }
}
