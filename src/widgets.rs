//! Reusable rendering helpers shared by toasts, dialogs and the demo app

pub mod popup;
pub mod text_wrap;
