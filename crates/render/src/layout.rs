//! Declarative description of the item table.

use invoicer_invoicing::LineItem;

/// Horizontal placement of text inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One fixed-width table column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub header: String,
    pub width_mm: f32,
    /// Alignment of body cells. Header cells are always centred.
    pub align: Align,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, width_mm: f32, align: Align) -> Self {
        Self {
            header: header.into(),
            width_mm,
            align,
        }
    }
}

/// Bordered table with fixed column widths and row height.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub row_height_mm: f32,
}

impl TableSpec {
    /// Columns of the invoice item table, in print order.
    pub fn line_items() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new("Item nº", 30.0, Align::Center),
                ColumnSpec::new("Description", 80.0, Align::Left),
                ColumnSpec::new("Quantity", 20.0, Align::Center),
                ColumnSpec::new("Unit Price", 30.0, Align::Center),
                ColumnSpec::new("Total", 30.0, Align::Center),
            ],
            row_height_mm: 10.0,
        }
    }

    pub fn width_mm(&self) -> f32 {
        self.columns.iter().map(|c| c.width_mm).sum()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.clone()).collect()
    }
}

/// Cell texts of one item row, matching [`TableSpec::line_items`].
pub fn item_row(item: &LineItem, currency_symbol: &str) -> Vec<String> {
    vec![
        item.item_no().to_string(),
        item.description().to_string(),
        item.quantity().to_string(),
        item.unit_price().format_with(currency_symbol),
        item.subtotal().format_with(currency_symbol),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_table_matches_printable_width() {
        let table = TableSpec::line_items();
        assert_eq!(table.width_mm(), 190.0);
        assert_eq!(
            table.headers(),
            vec!["Item nº", "Description", "Quantity", "Unit Price", "Total"]
        );
        assert_eq!(table.columns[1].align, Align::Left);
        assert!(table
            .columns
            .iter()
            .enumerate()
            .all(|(i, c)| i == 1 || c.align == Align::Center));
    }

    #[test]
    fn item_row_formats_prices() {
        let item = LineItem::parse("1", "Widget", "3", "9.99").unwrap();
        assert_eq!(item_row(&item, "$").join(" | "), "1 | Widget | 3 | $9.99 | $29.97");
    }
}
