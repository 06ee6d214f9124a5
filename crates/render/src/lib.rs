//! `invoicer-render` — turns an [`Invoice`](invoicer_invoicing::Invoice) into a
//! paginated PDF.
//!
//! Rendering is split in two passes:
//! - **compose**: a pure layout pass that places fixed-size cells on pages
//!   (header, metadata, party block, item table, total, footer);
//! - **backend**: paints the composed pages into a document format.
//!
//! Only [`InvoiceRenderer::write_to_dir`] touches the file system.

pub mod backend;
pub mod canvas;
pub mod compose;
pub mod config;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod renderer;
pub mod winansi;

pub use backend::{DocumentInfo, PdfBackend, RenderBackend};
pub use compose::{compose, ComposedPage, PlacedCell};
pub use config::{PageGeometry, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use layout::{item_row, Align, ColumnSpec, TableSpec};
pub use metrics::FontFace;
pub use renderer::InvoiceRenderer;
