//! Provider event handling
//!
//! Hosts forward terminal events here before their own handling. While a
//! dialog is pending every key and click is consumed, so the host never sees
//! input meant for the modal.

use ratatui::crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::provider_state::ToastProvider;
use crate::confirm::answer_for_key;
use crate::layout::{Region, region_at};

impl ToastProvider {
    /// Handle a terminal event
    ///
    /// # Returns
    /// `true` if the event was consumed by a toast or the dialog
    pub fn handle_event(&self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => false,
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.confirm.is_pending() {
            return false;
        }

        if let Some(answer) = answer_for_key(key) {
            state.answer_confirm(answer);
        }
        true
    }

    pub fn handle_mouse(&self, mouse: MouseEvent) -> bool {
        let mut state = self.state.borrow_mut();
        let modal = state.confirm.is_pending();

        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return modal || state.regions.backdrop.is_some();
        }

        // Dialog not drawn yet: nothing to hit, but nothing underneath is reachable either
        if modal && state.regions.backdrop.is_none() {
            return true;
        }

        match region_at(&state.regions, mouse.column, mouse.row) {
            Some(Region::ConfirmAccept) => {
                state.answer_confirm(true);
                true
            }
            Some(Region::ConfirmCancel | Region::Backdrop) => {
                state.answer_confirm(false);
                true
            }
            Some(Region::ToastClose(id)) => {
                state.remove_toast(id);
                true
            }
            Some(Region::ConfirmPanel | Region::Toast(_)) => true,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "provider_events_tests.rs"]
mod provider_events_tests;
