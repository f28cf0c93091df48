//! End-to-end tests for container round-trips (write -> save -> open -> read)

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use sheetbind::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Order {
    item: String,
    price: Decimal,
    quantity: i64,
    placed_at: Option<NaiveDateTime>,
}

impl Record for Order {
    fn bindings() -> &'static [FieldBinding] {
        const BINDINGS: &[FieldBinding] = &[
            FieldBinding::new(1, "item", FieldKind::Text),
            FieldBinding::new(2, "price", FieldKind::Decimal2),
            FieldBinding::new(3, "quantity", FieldKind::Int64),
            FieldBinding::new(4, "placed_at", FieldKind::DateTime),
        ];
        BINDINGS
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "item" => Some(FieldValue::Text(self.item.clone())),
            "price" => Some(FieldValue::Decimal2(self.price)),
            "quantity" => Some(FieldValue::Int64(self.quantity)),
            "placed_at" => self.placed_at.map(FieldValue::DateTime),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> BindResult<()> {
        match (field, value) {
            ("item", FieldValue::Text(v)) => self.item = v,
            ("price", FieldValue::Decimal2(v)) => self.price = v,
            ("quantity", FieldValue::Int64(v)) => self.quantity = v,
            ("placed_at", FieldValue::DateTime(v)) => self.placed_at = Some(v),
            (field, value) => return Err(value.mismatch(field)),
        }
        Ok(())
    }
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_records_survive_a_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.xlsx");

    let orders = vec![
        Order {
            item: "anvil".into(),
            price: "129.95".parse().unwrap(),
            quantity: 2,
            placed_at: Some(dt(2024, 1, 15, 8, 30, 0)),
        },
        Order {
            item: "rope".into(),
            price: "8.50".parse().unwrap(),
            quantity: 30,
            placed_at: Some(dt(2024, 2, 1, 12, 0, 0)),
        },
    ];

    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut(0).unwrap();
    RowWriter::new(sheet)
        .write_records(0, &orders, &["item", "price", "quantity", "placed_at"])
        .unwrap();
    workbook.save(&path).unwrap();

    let reopened = Workbook::open(&path).unwrap();
    let sheet = reopened.worksheet_by_name("Sheet1").unwrap();
    let read = RowReader::new(sheet)
        .read_records(1, &Order::default())
        .unwrap();
    assert_eq!(read, orders);
}

#[test]
fn test_plain_cells_survive_a_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cells.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut(0).unwrap();
    sheet.set_cell_value_at(0, 0, "Hello, World!").unwrap();
    sheet.set_cell_value_at(0, 1, 42.0).unwrap();
    sheet.set_cell_value_at(1, 0, true).unwrap();
    workbook.save(&path).unwrap();

    let reopened = Workbook::open(&path).unwrap();
    let sheet = reopened.worksheet_by_name("Sheet1").unwrap();
    assert_eq!(
        sheet.get_value_at(0, 0).as_string(),
        Some("Hello, World!")
    );
    assert_eq!(sheet.get_value_at(0, 1).as_number(), Some(42.0));
    assert_eq!(sheet.get_value_at(1, 0).as_bool(), Some(true));
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.xlsx");
    assert!(Workbook::open(&path).is_err());
}

#[test]
fn test_open_unrecognized_container_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.xlsx");
    std::fs::write(&path, b"not a zip archive").unwrap();
    assert!(Workbook::open(&path).is_err());
}

#[test]
fn test_save_to_legacy_binary_suffix_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.xls");
    let workbook = Workbook::new();
    assert!(workbook.save(&path).is_err());
}
