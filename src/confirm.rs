//! Confirmation dialog module for toastbox
//!
//! Modal yes/no prompts whose answers are delivered through `ConfirmFuture`.

mod confirm_events;
mod confirm_render;
mod confirm_state;

pub use confirm_events::answer_for_key;
pub use confirm_render::{ConfirmRegions, render_confirm};
pub use confirm_state::{ConfirmFuture, ConfirmOptions, ConfirmPhase, ConfirmRequest, ConfirmState};
