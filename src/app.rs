//! Demo application
//!
//! A small host UI that exercises the toast provider: number keys raise
//! toasts, `d` and `q` go through confirmation dialogs.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, PendingAction};
