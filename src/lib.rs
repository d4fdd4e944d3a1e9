//! toastbox library - toast notifications and confirmation dialogs for ratatui
//!
//! Create one `ToastProvider` per UI session, hand `Notifier`s to the code
//! that needs to talk to the user, render the provider after the rest of the
//! UI and forward terminal events to it first.

pub mod app;
pub mod config;
pub mod confirm;
pub mod error;
pub mod layout;
pub mod provider;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod toast;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use confirm::{ConfirmFuture, ConfirmOptions};
pub use error::ToastError;
pub use provider::{Notifier, ToastProvider};
pub use toast::{ToastEntry, ToastId, ToastKind, ToastRequest};
