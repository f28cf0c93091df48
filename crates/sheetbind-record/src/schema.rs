//! Column schema: field kinds, bindings, and the correspondence map

use std::collections::BTreeMap;
use std::fmt;

/// The closed set of field kinds a record can bind to a column.
///
/// Each kind has exactly one parse function and one cell representation in
/// [`crate::convert`]; dispatch is always a match on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Fixed-point decimal, two fractional digits, half-up rounding
    Decimal2,
    /// 64-bit float
    Float64,
    /// UTF-8 text
    Text,
    /// Date/time with the fixed `%Y-%m-%d %H:%M:%S` pattern
    DateTime,
}

impl FieldKind {
    /// Short name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Int32 => "i32",
            FieldKind::Int64 => "i64",
            FieldKind::Decimal2 => "decimal",
            FieldKind::Float64 => "f64",
            FieldKind::Text => "text",
            FieldKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single field-to-column declaration on a record type.
///
/// `order` is the user-facing 1-based sort key (the column marker); the
/// actual 0-based column index is the binding's rank once all of a type's
/// keys are sorted. Keys need not be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    /// Ordering key, 1-based by convention
    pub order: u32,
    /// Field name the mapper reads/writes through [`crate::Record`]
    pub name: &'static str,
    /// Declared field kind
    pub kind: FieldKind,
}

impl FieldBinding {
    /// Create a new field binding
    pub const fn new(order: u32, name: &'static str, kind: FieldKind) -> Self {
        Self { order, name, kind }
    }
}

/// One resolved column of a [`ColumnMap`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    /// The declaration's ordering key
    pub order: u32,
    /// 0-based worksheet column index (the entry's rank in the map)
    pub column: u16,
    /// Field name
    pub name: String,
    /// Declared field kind
    pub kind: FieldKind,
}

/// Ordered correspondence between worksheet columns and record fields.
///
/// Entries are sorted ascending by ordering key; each entry's column index is
/// its rank, so column indices are always unique, contiguous and 0-based.
/// A map is immutable once built and holds no cross-call state: resolve (or
/// build) one per call site, or cache it yourself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    entries: Vec<ColumnEntry>,
}

impl ColumnMap {
    /// Resolve the map from a record type's declared bindings.
    ///
    /// Deterministic for a given type: keys sort ascending, duplicate keys
    /// collapse to the last declaration. A type with no bindings yields an
    /// empty map.
    pub fn resolve<T: crate::Record>() -> Self {
        Self::from_bindings(T::bindings())
    }

    /// Build the map from an explicit binding slice
    pub fn from_bindings(bindings: &[FieldBinding]) -> Self {
        let mut by_order: BTreeMap<u32, (&str, FieldKind)> = BTreeMap::new();
        for binding in bindings {
            // Last declaration wins on duplicate ordering keys
            by_order.insert(binding.order, (binding.name, binding.kind));
        }

        let entries = by_order
            .into_iter()
            .enumerate()
            .map(|(rank, (order, (name, kind)))| ColumnEntry {
                order,
                column: rank as u16,
                name: name.to_string(),
                kind,
            })
            .collect();

        Self { entries }
    }

    /// Start building a map by hand
    pub fn builder() -> ColumnMapBuilder {
        ColumnMapBuilder::default()
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no columns
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in column order
    pub fn iter(&self) -> impl Iterator<Item = &ColumnEntry> {
        self.entries.iter()
    }

    /// Get the entry for a 0-based column index
    pub fn entry_at(&self, column: u16) -> Option<&ColumnEntry> {
        self.entries.get(column as usize)
    }
}

/// Builder for explicit [`ColumnMap`]s, for callers whose record types carry
/// no bindings (or whose spreadsheet layout differs from the declared one)
#[derive(Debug, Default)]
pub struct ColumnMapBuilder {
    bindings: Vec<FieldBinding>,
}

impl ColumnMapBuilder {
    /// Declare a field at the given ordering key
    pub fn field(mut self, order: u32, name: &'static str, kind: FieldKind) -> Self {
        self.bindings.push(FieldBinding::new(order, name, kind));
        self
    }

    /// Finish the map: sort by key, collapse duplicates last-wins
    pub fn build(self) -> ColumnMap {
        ColumnMap::from_bindings(&self.bindings)
    }
}
