//! `invoicer-desktop`
//!
//! **Responsibility:** the presentation-event layer around the invoicing
//! domain.
//!
//! This crate provides:
//! - Explicit form state (no ambient widget lookups)
//! - Action handlers that turn form state into collector/renderer calls
//! - User-facing notifications for every action outcome
//! - A line-oriented console front end driving the handlers
//!
//! All domain rules live in `invoicer-invoicing`; this crate is a **thin shell**.

pub mod commands;
pub mod config;
pub mod console;
pub mod form;
pub mod notify;

pub use commands::{Action, ActionError, AppState};
pub use config::DesktopConfig;
pub use form::{Field, FormState, ItemFields};
pub use notify::{Level, Notification};
