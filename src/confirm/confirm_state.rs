//! Confirmation dialog state
//!
//! A `ConfirmRequest` pairs the dialog options with the sending half of a
//! one-shot channel; the caller keeps the receiving half as a `ConfirmFuture`.
//! `ConfirmState` shows one request at a time and queues the rest in arrival
//! order, so every caller is eventually answered.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// What to ask and how to label the buttons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Confirm label, falling back to `default` when unset or empty
    pub fn confirm_label<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty_or(self.confirm_text.as_deref(), default)
    }

    /// Cancel label, falling back to `default` when unset or empty
    pub fn cancel_label<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty_or(self.cancel_text.as_deref(), default)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => default,
    }
}

/// The caller's side of a confirmation: resolves to the user's answer
///
/// Resolves to `false` if the request is dropped unanswered (for example
/// when the provider goes away). Hosts without an async executor can poll
/// it with [`ConfirmFuture::try_answer`].
#[derive(Debug)]
pub struct ConfirmFuture {
    receiver: oneshot::Receiver<bool>,
    answer: Option<bool>,
}

impl ConfirmFuture {
    /// Answer if one is available, without blocking
    pub fn try_answer(&mut self) -> Option<bool> {
        if self.answer.is_some() {
            return self.answer;
        }
        match self.receiver.try_recv() {
            Ok(answer) => self.answer = Some(answer),
            Err(TryRecvError::Closed) => self.answer = Some(false),
            Err(TryRecvError::Empty) => {}
        }
        self.answer
    }
}

impl Future for ConfirmFuture {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let this = self.get_mut();
        if let Some(answer) = this.answer {
            return Poll::Ready(answer);
        }
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(result) => {
                let answer = result.unwrap_or(false);
                this.answer = Some(answer);
                Poll::Ready(answer)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// A confirmation waiting for (or showing) its answer
#[derive(Debug)]
pub struct ConfirmRequest {
    options: ConfirmOptions,
    settle: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    pub fn new(options: ConfirmOptions) -> (Self, ConfirmFuture) {
        let (settle, receiver) = oneshot::channel();
        let request = Self { options, settle };
        let future = ConfirmFuture {
            receiver,
            answer: None,
        };
        (request, future)
    }

    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }

    /// True once the caller has dropped its future
    pub fn is_abandoned(&self) -> bool {
        self.settle.is_closed()
    }

    /// Delivers the answer; consuming `self` makes a second settle impossible
    ///
    /// Returns false if nobody was listening any more.
    pub fn settle(self, answer: bool) -> bool {
        self.settle.send(answer).is_ok()
    }
}

/// Dialog state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPhase {
    Idle,
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmState {
    active: Option<ConfirmRequest>,
    waiting: VecDeque<ConfirmRequest>,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ConfirmPhase {
        if self.active.is_some() {
            ConfirmPhase::Pending
        } else {
            ConfirmPhase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == ConfirmPhase::Pending
    }

    /// Options of the request currently on screen
    pub fn active(&self) -> Option<&ConfirmOptions> {
        self.active.as_ref().map(ConfirmRequest::options)
    }

    /// Requests queued behind the one on screen
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    /// Opens a dialog, or queues it behind the one already open
    pub fn request(&mut self, options: ConfirmOptions) -> ConfirmFuture {
        let (request, future) = ConfirmRequest::new(options);

        #[cfg(debug_assertions)]
        log::debug!(
            "Confirm requested: {:?} (pending: {})",
            request.options().title,
            self.is_pending()
        );

        if self.active.is_none() {
            self.active = Some(request);
        } else {
            self.waiting.push_back(request);
        }
        future
    }

    /// Answers the dialog on screen and shows the next queued one
    ///
    /// Returns false when idle (nothing to settle).
    pub fn settle(&mut self, answer: bool) -> bool {
        let Some(request) = self.active.take() else {
            return false;
        };

        #[cfg(debug_assertions)]
        log::debug!("Confirm settled with {}", answer);

        if !request.settle(answer) {
            #[cfg(debug_assertions)]
            log::debug!("Confirm caller stopped waiting before the answer");
        }

        self.promote_next();
        true
    }

    /// Drops requests whose callers stopped waiting
    ///
    /// Returns true if the dialog on screen changed.
    pub fn discard_abandoned(&mut self) -> bool {
        self.waiting.retain(|request| !request.is_abandoned());

        if self.active.as_ref().is_some_and(ConfirmRequest::is_abandoned) {
            self.active = None;
            self.promote_next();
            return true;
        }
        false
    }

    fn promote_next(&mut self) {
        while let Some(next) = self.waiting.pop_front() {
            if next.is_abandoned() {
                continue;
            }
            self.active = Some(next);
            break;
        }
    }
}

#[cfg(test)]
#[path = "confirm_state_tests.rs"]
mod confirm_state_tests;
