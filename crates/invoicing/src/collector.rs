//! Input collector: the ordered, append-only list of confirmed line items.

use chrono::NaiveDate;

use invoicer_core::{DomainResult, Money};

use crate::invoice::{sum_subtotals, Invoice, InvoiceDetails};
use crate::line_item::LineItem;

/// Accumulates line items for one session.
///
/// There is no "generated" state: after [`Collector::generate`] more items may
/// be added and the invoice generated again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collector {
    items: Vec<LineItem>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and append one line item.
    ///
    /// On error nothing is appended.
    pub fn add_item(
        &mut self,
        item_no: &str,
        description: &str,
        quantity_text: &str,
        unit_price_text: &str,
    ) -> DomainResult<&LineItem> {
        let item = LineItem::parse(item_no, description, quantity_text, unit_price_text)?;
        tracing::info!(
            item_no = item.item_no(),
            quantity = item.quantity(),
            unit_price = %item.unit_price(),
            "line item added"
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Accumulated items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the subtotals added so far.
    pub fn running_total(&self) -> DomainResult<Money> {
        sum_subtotals(&self.items)
    }

    /// Snapshot the collected items into an [`Invoice`] dated `date`.
    ///
    /// Fails with `MissingField` when any detail is empty or no item was added.
    pub fn generate(&self, details: &InvoiceDetails, date: NaiveDate) -> DomainResult<Invoice> {
        Invoice::issue(details, &self.items, date)
    }
}
