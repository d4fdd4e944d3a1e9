//! Provider rendering
//!
//! Draws the toast stack in its configured corner and, on top of it, the
//! confirmation dialog when one is pending. Call after rendering the host UI
//! so the overlays appear above it.

use ratatui::{Frame, layout::Rect};

use super::provider_state::{ProviderState, ToastProvider};
use crate::config::ToastConfig;
use crate::confirm::render_confirm;
use crate::layout::ToastRegion;
use crate::toast::{Toast, render_toast, toast_height, toast_width};
use crate::widgets::popup;

/// Distance kept between the toast stack and the frame edges
const MARGIN_X: u16 = 2;
const MARGIN_Y: u16 = 1;

impl ToastProvider {
    /// Render the toast stack and any pending dialog
    pub fn render(&self, frame: &mut Frame) {
        self.state.borrow_mut().render(frame);
    }
}

impl ProviderState {
    fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let stack_area = popup::inset_rect(frame.area(), MARGIN_X, MARGIN_Y);
        for (toast, area) in stack_layout(&self.toasts, &self.config.toast, stack_area) {
            let close = render_toast(frame, toast.entry(), area);
            self.regions.toasts.push(ToastRegion {
                id: toast.id(),
                area,
                close,
            });
        }

        if let Some(options) = self.confirm.active() {
            self.regions.backdrop = Some(frame.area());
            self.regions.confirm = render_confirm(frame, options, &self.config.confirm);
        }
    }
}

/// Positions for the toasts that fit in `area`, oldest first
///
/// Newest toasts win when space runs out; the rest stay queued but undrawn.
/// Top to bottom the stack is always in append order.
fn stack_layout<'a>(toasts: &'a [Toast], config: &ToastConfig, area: Rect) -> Vec<(&'a Toast, Rect)> {
    let (min_width, max_width) = config.width_bounds();
    let max_width = max_width.min(area.width);
    let min_width = min_width.min(max_width);

    let mut sized = Vec::new();
    let mut used = 0u16;
    for toast in toasts.iter().rev() {
        let width = toast_width(toast.entry(), min_width, max_width);
        let height = toast_height(toast.entry(), width);
        if used.saturating_add(height) > area.height {
            break;
        }
        used += height;
        sized.push((toast, width, height));
    }
    sized.reverse();

    let position = config.position;
    let mut placed = Vec::with_capacity(sized.len());
    let mut offset = 0u16;
    if position.is_bottom() {
        for &(toast, width, height) in sized.iter().rev() {
            placed.push((toast, popup::corner_popup(area, position, width, height, offset)));
            offset += height;
        }
        placed.reverse();
    } else {
        for &(toast, width, height) in &sized {
            placed.push((toast, popup::corner_popup(area, position, width, height, offset)));
            offset += height;
        }
    }
    placed
}

#[cfg(test)]
#[path = "provider_render_tests.rs"]
mod provider_render_tests;
