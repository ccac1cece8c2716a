// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Visibility;
use tokio::sync::watch;

/// Errors from driving a [`LifecycleHost`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// The host has reached `Destroyed`; no further transitions are accepted.
    #[error("lifecycle host is destroyed")]
    Terminated,
    /// `Initialized` is an entry state and cannot be re-entered.
    #[error("cannot re-enter the initialized state")]
    Reentry,
}

/// Owner of a host screen's visibility state.
///
/// The host publishes every transition over a `watch` channel. Collection
/// tasks obtain a receiver via [`watch`](LifecycleHost::watch) and park on
/// it while the host is below their threshold, consuming no CPU. The
/// platform driver (or a test) is the only writer.
///
/// `Destroyed` is terminal: once entered, every later
/// [`transition_to`](LifecycleHost::transition_to) fails with
/// [`LifecycleError::Terminated`]. Dropping the host has the same effect
/// on watchers as destroying it: their channel closes.
#[derive(Debug)]
pub struct LifecycleHost {
    state: watch::Sender<Visibility>,
}

impl LifecycleHost {
    /// Creates a host in the `Initialized` state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(Visibility::Initialized)
    }

    /// Creates a host already in `initial`.
    #[must_use]
    pub fn with_state(initial: Visibility) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// The current visibility state.
    #[must_use]
    pub fn current(&self) -> Visibility {
        *self.state.borrow()
    }

    /// Returns `true` once the host has reached its terminal state.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.current().is_destroyed()
    }

    /// Moves the host to `next`, notifying all watchers.
    ///
    /// Transitioning to the current state is a plain re-notification, not
    /// an error: `Started → Resumed → Started` sequences pass through the
    /// same states repeatedly by design of the platform lifecycle.
    ///
    /// # Errors
    ///
    /// - [`LifecycleError::Terminated`] once the host is destroyed.
    /// - [`LifecycleError::Reentry`] when `next` is `Initialized` and the
    ///   host has already left it.
    pub fn transition_to(&self, next: Visibility) -> Result<(), LifecycleError> {
        let current = self.current();
        if current.is_destroyed() {
            return Err(LifecycleError::Terminated);
        }
        if next == Visibility::Initialized && current != Visibility::Initialized {
            return Err(LifecycleError::Reentry);
        }
        self.state.send_replace(next);
        Ok(())
    }

    /// Moves the host to its terminal state.
    ///
    /// Idempotent. Watchers observe exactly one `Destroyed` value per
    /// wakeup regardless of how many times this is called.
    pub fn destroy(&self) {
        self.state.send_if_modified(|state| {
            if state.is_destroyed() {
                false
            } else {
                *state = Visibility::Destroyed;
                true
            }
        });
    }

    /// A receiver observing every visibility transition.
    ///
    /// New receivers see the current state immediately via `borrow` and
    /// wake on every subsequent transition.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Visibility> {
        self.state.subscribe()
    }
}

impl Default for LifecycleHost {
    fn default() -> Self {
        Self::new()
    }
}
