//! Invoicing domain module.
//!
//! This crate holds the input collector and the invoice snapshot it produces,
//! implemented purely as deterministic domain logic (no IO, no UI, no PDF).

pub mod collector;
pub mod invoice;
pub mod line_item;

pub use collector::Collector;
pub use invoice::{output_file_name, Invoice, InvoiceDetails, InvoiceMetadata};
pub use line_item::LineItem;
