use crate::confirm::{ConfirmFuture, ConfirmOptions};
use crate::provider::Notifier;
use crate::toast::ToastRequest;

/// Items the demo starts with
pub const INITIAL_ITEMS: usize = 3;

/// What an outstanding confirmation does once answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteItem,
    Quit,
}

/// Application state
///
/// The app never reaches for a global; every toast and dialog goes through
/// the `Notifier` it was constructed with.
pub struct App {
    notifier: Notifier,
    pending: Vec<(PendingAction, ConfirmFuture)>,
    items: usize,
    should_quit: bool,
    status: String,
}

impl App {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            pending: Vec::new(),
            items: INITIAL_ITEMS,
            should_quit: false,
            status: String::from("Ready"),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Confirmations asked for but not yet applied
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast, falling back to the status line if the provider is gone
    pub fn notify(&mut self, request: ToastRequest) {
        if let Err(e) = self.notifier.show_toast(request) {
            self.status = e.to_string();
        }
    }

    /// Ask the user before running `action`
    pub fn ask(&mut self, action: PendingAction) {
        let options = match action {
            PendingAction::DeleteItem => {
                if self.items == 0 {
                    self.notify(ToastRequest::warning("Nothing left to delete"));
                    return;
                }
                ConfirmOptions::new("Delete?")
                    .message(format!("Item #{} will be removed.", self.items))
                    .confirm_text("Delete")
            }
            PendingAction::Quit => ConfirmOptions::new("Quit toastbox?")
                .confirm_text("Quit")
                .cancel_text("Stay"),
        };

        match self.notifier.show_confirm(options) {
            Ok(answer) => self.pending.push((action, answer)),
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Apply every confirmation answered since the last call
    pub fn poll_confirms(&mut self) {
        let mut answered = Vec::new();
        self.pending
            .retain_mut(|(action, answer)| match answer.try_answer() {
                Some(confirmed) => {
                    answered.push((*action, confirmed));
                    false
                }
                None => true,
            });

        for (action, confirmed) in answered {
            self.apply(action, confirmed);
        }
    }

    fn apply(&mut self, action: PendingAction, confirmed: bool) {
        #[cfg(debug_assertions)]
        log::debug!("{:?} answered: {}", action, confirmed);

        match (action, confirmed) {
            (PendingAction::DeleteItem, true) => {
                self.items = self.items.saturating_sub(1);
                self.status = format!("Deleted, {} left", self.items);
                self.notify(
                    ToastRequest::success("Deleted")
                        .message(format!("{} items remaining", self.items)),
                );
            }
            (PendingAction::DeleteItem, false) => {
                self.status = String::from("Delete cancelled");
                self.notify(ToastRequest::info("Kept"));
            }
            (PendingAction::Quit, true) => self.quit(),
            (PendingAction::Quit, false) => {
                self.status = String::from("Still here");
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
