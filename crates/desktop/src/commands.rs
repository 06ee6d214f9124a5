//! Action handlers for the two form buttons.
//!
//! Handlers receive the form state explicitly and return a [`Notification`]
//! on success. [`AppState::dispatch`] is the action boundary: every error is
//! turned into an error notification there and the session keeps going.

use std::path::Path;

use chrono::{Local, NaiveDate};
use invoicer_core::DomainError;
use invoicer_invoicing::Collector;
use invoicer_render::{InvoiceRenderer, PdfBackend, RenderBackend, RenderConfig, RenderError, RenderResult};
use thiserror::Error;

use crate::config::DesktopConfig;
use crate::form::FormState;
use crate::notify::Notification;

/// Shown when generation is attempted with incomplete input.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields and add at least one item!";

/// The form's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddItem,
    GenerateInvoice,
}

/// Why an action failed.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ActionError {
    /// Message shown to the user.
    pub fn to_notification(&self) -> Notification {
        match self {
            ActionError::Domain(DomainError::Validation(msg)) => {
                Notification::error(format!("Item not added: {msg}"))
            }
            ActionError::Domain(DomainError::MissingField(missing)) => {
                Notification::error(format!("{MISSING_FIELDS_MESSAGE} (missing: {missing})"))
            }
            ActionError::Domain(err @ DomainError::InvariantViolation(_)) => {
                Notification::error(format!("Invoice not generated: {err}"))
            }
            ActionError::Render(err) => Notification::error(format!("Invoice not generated: {err}")),
        }
    }
}

/// "Add Item": parse the item fields into the collector, then clear them.
///
/// On error neither the collector nor the form changes.
pub fn add_item(form: &mut FormState, collector: &mut Collector) -> Result<Notification, ActionError> {
    let fields = &form.item;
    collector.add_item(
        &fields.item_no,
        &fields.description,
        &fields.quantity,
        &fields.unit_price,
    )?;
    form.item.clear();
    Ok(Notification::success("Item added successfully!"))
}

/// "Generate Invoice": snapshot the collector and write the document into
/// `output_dir`.
pub fn generate_invoice<B: RenderBackend>(
    form: &FormState,
    collector: &Collector,
    renderer: &InvoiceRenderer<B>,
    output_dir: &Path,
    date: NaiveDate,
) -> Result<Notification, ActionError> {
    let invoice = collector.generate(&form.details(), date)?;
    let path = renderer.write_to_dir(&invoice, output_dir)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| invoice.file_name());
    Ok(Notification::success(format!("Invoice generated: {name}")))
}

/// Everything one session owns.
#[derive(Debug)]
pub struct AppState<B = PdfBackend> {
    pub form: FormState,
    collector: Collector,
    renderer: InvoiceRenderer<B>,
    config: DesktopConfig,
}

impl AppState<PdfBackend> {
    /// Session writing PDFs with the default layout.
    pub fn new(config: DesktopConfig) -> RenderResult<Self> {
        Ok(Self::with_renderer(
            config,
            InvoiceRenderer::new(RenderConfig::default())?,
        ))
    }
}

impl<B: RenderBackend> AppState<B> {
    pub fn with_renderer(config: DesktopConfig, renderer: InvoiceRenderer<B>) -> Self {
        Self {
            form: FormState::default(),
            collector: Collector::new(),
            renderer,
            config,
        }
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    pub fn renderer(&self) -> &InvoiceRenderer<B> {
        &self.renderer
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Run `action` dated today.
    pub fn dispatch(&mut self, action: Action) -> Notification {
        self.dispatch_on(action, Local::now().date_naive())
    }

    /// Run `action`, using `date` as the invoice date.
    pub fn dispatch_on(&mut self, action: Action, date: NaiveDate) -> Notification {
        let result = match action {
            Action::AddItem => add_item(&mut self.form, &mut self.collector),
            Action::GenerateInvoice => generate_invoice(
                &self.form,
                &self.collector,
                &self.renderer,
                &self.config.output_dir,
                date,
            ),
        };

        match result {
            Ok(notification) => notification,
            Err(err) => {
                tracing::warn!(?action, error = %err, "action rejected");
                err.to_notification()
            }
        }
    }
}
