use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use super::app_state::{App, PendingAction};
use crate::error::ToastError;
use crate::provider::ToastProvider;
use crate::toast::ToastRequest;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Wait for the next event, then let timers fire and answers land
    pub fn handle_events(&mut self, provider: &ToastProvider) -> Result<(), ToastError> {
        let timeout = poll_timeout(provider.next_deadline(), Instant::now());
        if event::poll(timeout)? {
            let event = event::read()?;
            self.handle_event(provider, &event);
        }

        provider.tick();
        self.poll_confirms();
        Ok(())
    }

    /// The provider sees every event first; the app only gets what it leaves
    pub fn handle_event(&mut self, provider: &ToastProvider, event: &Event) {
        if provider.handle_event(event) {
            return;
        }

        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_event(*key);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('1') => {
                self.notify(ToastRequest::success("Saved").message("All changes written"))
            }
            KeyCode::Char('2') => {
                self.notify(ToastRequest::error("Upload failed").message("Connection reset by peer"))
            }
            KeyCode::Char('3') => self.notify(
                ToastRequest::warning("Disk almost full").message("Less than 1 GB remaining"),
            ),
            KeyCode::Char('4') => self.notify(ToastRequest::info("Sync started")),
            KeyCode::Char('p') => self.notify(
                ToastRequest::info("Pinned")
                    .message("Click ✕ to dismiss")
                    .persistent(),
            ),
            KeyCode::Char('d') => self.ask(PendingAction::DeleteItem),
            KeyCode::Char('q') => self.ask(PendingAction::Quit),
            _ => {}
        }
    }
}

/// Sleep no longer than the next toast deadline, and never past the poll cap
pub(crate) fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline
        .map(|deadline| deadline.saturating_duration_since(now))
        .map_or(EVENT_POLL_TIMEOUT, |remaining| remaining.min(EVENT_POLL_TIMEOUT))
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
