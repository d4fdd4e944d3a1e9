//! Toast module for toastbox
//!
//! Provides the single-toast component: its data, its auto-dismiss timer and
//! its rendering. Queueing lives in the provider.

mod dismiss_timer;
mod toast_render;
mod toast_state;

pub use dismiss_timer::DismissTimer;
pub use toast_render::{CLOSE_ICON, render_toast, toast_height, toast_width};
pub use toast_state::{Toast, ToastEntry, ToastId, ToastIdGenerator, ToastKind, ToastRequest};
