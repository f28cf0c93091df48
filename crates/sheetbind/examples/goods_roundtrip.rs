//! Example: write a goods list to an xlsx file and read it back

use rust_decimal::Decimal;
use sheetbind::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Goods {
    name: String,
    price: Decimal,
    count: i32,
}

impl Record for Goods {
    fn bindings() -> &'static [FieldBinding] {
        const BINDINGS: &[FieldBinding] = &[
            FieldBinding::new(1, "name", FieldKind::Text),
            FieldBinding::new(2, "price", FieldKind::Decimal2),
            FieldBinding::new(3, "count", FieldKind::Int32),
        ];
        BINDINGS
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "price" => Some(FieldValue::Decimal2(self.price)),
            "count" => Some(FieldValue::Int32(self.count)),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> BindResult<()> {
        match (field, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("price", FieldValue::Decimal2(v)) => self.price = v,
            ("count", FieldValue::Int32(v)) => self.count = v,
            (field, value) => return Err(value.mismatch(field)),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let goods = vec![
        Goods { name: "Apples".into(), price: "3.50".parse().unwrap(), count: 120 },
        Goods { name: "Bananas".into(), price: "2.25".parse().unwrap(), count: 80 },
        Goods { name: "Cherries".into(), price: "9.99".parse().unwrap(), count: 15 },
    ];

    // Write one row per record under a header row
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut(0).unwrap();
    sheet.set_cell_value_at(0, 0, "Name")?;
    sheet.set_cell_value_at(0, 1, "Price")?;
    sheet.set_cell_value_at(0, 2, "Count")?;
    RowWriter::new(sheet)
        .write_records(1, &goods, &["name", "price", "count"])
        .map_err(|e| Error::other(e.to_string()))?;

    let path = std::env::temp_dir().join("goods.xlsx");
    workbook.save(&path)?;
    println!("Created {}", path.display());

    // Read the rows below the header back into records
    let reopened = Workbook::open(&path)?;
    let sheet = reopened.worksheet(0).unwrap();
    let read = RowReader::new(sheet)
        .read_records(2, &Goods::default())
        .map_err(|e| Error::other(e.to_string()))?;

    println!("Read {} records:", read.len());
    for goods in &read {
        println!("  {:<10} {:>8} {:>6}", goods.name, goods.price.to_string(), goods.count);
    }

    Ok(())
}
