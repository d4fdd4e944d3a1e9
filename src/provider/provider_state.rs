//! Provider state: the toast queue and the confirmation dialog
//!
//! `ToastProvider` owns the state. Code that needs to notify the user gets a
//! `Notifier` passed to it explicitly; a notifier only holds a weak reference,
//! so using it after the provider is gone fails instead of keeping stale
//! state alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::confirm::{ConfirmFuture, ConfirmOptions, ConfirmState};
use crate::error::ToastError;
use crate::layout::LayoutRegions;
use crate::toast::{Toast, ToastEntry, ToastId, ToastIdGenerator, ToastRequest};

pub(super) struct ProviderState {
    pub(super) toasts: Vec<Toast>,
    ids: ToastIdGenerator,
    pub(super) confirm: ConfirmState,
    pub(super) config: Config,
    pub(super) regions: LayoutRegions,
}

impl ProviderState {
    fn new(config: Config) -> Self {
        Self {
            toasts: Vec::new(),
            ids: ToastIdGenerator::new(),
            confirm: ConfirmState::new(),
            config,
            regions: LayoutRegions::new(),
        }
    }

    fn show_toast(&mut self, request: ToastRequest, now: Instant) -> ToastId {
        let id = self.ids.next_id();
        let entry = ToastEntry::from_request(id, request, self.config.toast.default_duration());

        #[cfg(debug_assertions)]
        log::debug!(
            "Toast {} shown: {:?} {:?} ({:?})",
            id,
            entry.kind,
            entry.title,
            entry.duration
        );

        self.toasts.push(Toast::mount(entry, now));
        id
    }

    pub(super) fn remove_toast(&mut self, id: ToastId) -> bool {
        let Some(index) = self.toasts.iter().position(|toast| toast.id() == id) else {
            return false;
        };

        let closed = self.toasts.remove(index).close();
        self.regions.toasts.retain(|region| region.id != closed);

        #[cfg(debug_assertions)]
        log::debug!("Toast {} removed", closed);

        true
    }

    fn set_toast_duration(&mut self, id: ToastId, duration: Duration, now: Instant) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id() == id) else {
            return false;
        };

        #[cfg(debug_assertions)]
        log::debug!("Toast {} duration changed to {:?}", id, duration);

        toast.set_duration(duration, now);
        true
    }

    fn tick(&mut self, now: Instant) -> usize {
        let expired: Vec<ToastId> = self
            .toasts
            .iter_mut()
            .filter_map(|toast| toast.tick(now))
            .collect();

        for id in &expired {
            self.remove_toast(*id);
        }

        if self.confirm.discard_abandoned() {
            self.clear_dialog_regions();
        }

        expired.len()
    }

    /// Settles the dialog on screen; its regions are stale afterwards
    pub(super) fn answer_confirm(&mut self, answer: bool) -> bool {
        let settled = self.confirm.settle(answer);
        if settled {
            self.clear_dialog_regions();
        }
        settled
    }

    fn clear_dialog_regions(&mut self) {
        self.regions.confirm = None;
        self.regions.backdrop = None;
    }
}

/// Owner of the toast queue and confirmation dialog for one UI session
pub struct ToastProvider {
    pub(super) state: Rc<RefCell<ProviderState>>,
}

impl ToastProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            state: Rc::new(RefCell::new(ProviderState::new(config.clone()))),
        }
    }

    /// Handle for code that needs to show toasts or ask for confirmation
    pub fn notifier(&self) -> Notifier {
        Notifier {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Appends a toast and arms its timer from now
    pub fn show_toast(&self, request: ToastRequest) -> ToastId {
        self.show_toast_at(request, Instant::now())
    }

    /// Appends a toast whose timer starts at `now`
    ///
    /// For hosts that drive their own clock; pair with [`Self::tick_at`].
    pub fn show_toast_at(&self, request: ToastRequest, now: Instant) -> ToastId {
        self.state.borrow_mut().show_toast(request, now)
    }

    /// Opens a confirmation dialog, queued behind any dialog already open
    pub fn show_confirm(&self, options: ConfirmOptions) -> ConfirmFuture {
        self.state.borrow_mut().confirm.request(options)
    }

    /// Removes the toast with `id`; removing an absent id is a no-op
    pub fn remove_toast(&self, id: ToastId) -> bool {
        self.state.borrow_mut().remove_toast(id)
    }

    /// Changes a toast's lifetime, restarting its timer from now
    ///
    /// A zero duration makes the toast persistent. Returns false for an
    /// absent id.
    pub fn set_toast_duration(&self, id: ToastId, duration: Duration) -> bool {
        self.set_toast_duration_at(id, duration, Instant::now())
    }

    pub fn set_toast_duration_at(&self, id: ToastId, duration: Duration, now: Instant) -> bool {
        self.state
            .borrow_mut()
            .set_toast_duration(id, duration, now)
    }

    pub fn clear_toasts(&self) {
        let mut state = self.state.borrow_mut();
        state.toasts.clear();
        state.regions.toasts.clear();
    }

    /// Removes every toast whose timer has expired
    ///
    /// # Returns
    /// Number of toasts removed
    pub fn tick(&self) -> usize {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&self, now: Instant) -> usize {
        self.state.borrow_mut().tick(now)
    }

    /// Earliest pending auto-dismiss deadline, for sizing the event poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state
            .borrow()
            .toasts
            .iter()
            .filter_map(Toast::deadline)
            .min()
    }

    /// Snapshot of the queue in display order (oldest first)
    pub fn toasts(&self) -> Vec<ToastEntry> {
        self.state
            .borrow()
            .toasts
            .iter()
            .map(|toast| toast.entry().clone())
            .collect()
    }

    pub fn toast_count(&self) -> usize {
        self.state.borrow().toasts.len()
    }

    pub fn is_confirm_pending(&self) -> bool {
        self.state.borrow().confirm.is_pending()
    }

    /// Options of the dialog currently on screen
    pub fn pending_confirm(&self) -> Option<ConfirmOptions> {
        self.state.borrow().confirm.active().cloned()
    }

    pub fn queued_confirm_count(&self) -> usize {
        self.state.borrow().confirm.queued_count()
    }

    /// Answers the dialog on screen as if its button had been clicked
    pub fn answer_confirm(&self, answer: bool) -> bool {
        self.state.borrow_mut().answer_confirm(answer)
    }

    /// Regions recorded by the last render
    pub fn regions(&self) -> LayoutRegions {
        self.state.borrow().regions.clone()
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Cloneable handle to a `ToastProvider`
///
/// Every call fails with [`ToastError::ProviderUnavailable`] when the
/// provider no longer exists (or never did), before touching any state.
#[derive(Clone, Debug)]
pub struct Notifier {
    state: Weak<RefCell<ProviderState>>,
}

impl Notifier {
    /// A notifier that belongs to no provider
    pub fn detached() -> Self {
        Self { state: Weak::new() }
    }

    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn provider(&self) -> Result<Rc<RefCell<ProviderState>>, ToastError> {
        self.state.upgrade().ok_or(ToastError::ProviderUnavailable)
    }

    pub fn show_toast(&self, request: ToastRequest) -> Result<ToastId, ToastError> {
        let state = self.provider()?;
        let id = state.borrow_mut().show_toast(request, Instant::now());
        Ok(id)
    }

    pub fn show_confirm(&self, options: ConfirmOptions) -> Result<ConfirmFuture, ToastError> {
        let state = self.provider()?;
        let future = state.borrow_mut().confirm.request(options);
        Ok(future)
    }
}

#[cfg(test)]
#[path = "provider_state_tests.rs"]
mod provider_state_tests;
