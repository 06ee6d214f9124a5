//! Invoice renderer: compose, paint, write.

use std::path::{Path, PathBuf};

use invoicer_invoicing::Invoice;

use crate::backend::{DocumentInfo, PdfBackend, RenderBackend};
use crate::compose::{compose, ComposedPage};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};

/// Renders invoices with a fixed layout.
///
/// The renderer trusts its input: the collector has already checked that the
/// invoice has details and items.
#[derive(Debug, Clone)]
pub struct InvoiceRenderer<B = PdfBackend> {
    config: RenderConfig,
    backend: B,
}

impl InvoiceRenderer<PdfBackend> {
    /// PDF renderer for `config`.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        Self::with_backend(config, PdfBackend)
    }
}

impl<B: RenderBackend> InvoiceRenderer<B> {
    pub fn with_backend(config: RenderConfig, backend: B) -> RenderResult<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Layout pass only.
    pub fn compose(&self, invoice: &Invoice) -> Vec<ComposedPage> {
        compose(invoice, &self.config)
    }

    /// Render `invoice` to document bytes without touching the file system.
    pub fn render(&self, invoice: &Invoice) -> RenderResult<Vec<u8>> {
        let pages = self.compose(invoice);
        let info = DocumentInfo {
            title: format!("Invoice {}", invoice.metadata().customer_ref),
            created: invoice.metadata().date,
        };
        self.backend.render_pages(&pages, &info, &self.config)
    }

    /// Render and write `invoice` into `dir`, named after its customer
    /// reference. An existing file of the same name is overwritten.
    pub fn write_to_dir(&self, invoice: &Invoice, dir: &Path) -> RenderResult<PathBuf> {
        let bytes = self.render(invoice)?;
        let path = dir.join(invoice.file_name());
        std::fs::write(&path, &bytes).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            items = invoice.items().len(),
            total = %invoice.total(),
            bytes = bytes.len(),
            "invoice written"
        );
        Ok(path)
    }
}
