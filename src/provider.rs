//! Toast provider module for toastbox
//!
//! The provider is the single owner of the toast queue and the confirmation
//! dialog. Hosts render it after their own UI, forward terminal events to it,
//! and call `tick()` from their loop so toast timers can fire.

mod provider_events;
mod provider_render;
mod provider_state;

pub use provider_state::{Notifier, ToastProvider};
