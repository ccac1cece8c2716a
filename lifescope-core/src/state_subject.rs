// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{StreamItem, SubjectError};
use async_channel::Sender;
use futures::stream::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

type SubjectStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send>>;

struct SubjectState<T> {
    closed: bool,
    current: T,
    senders: Vec<Sender<StreamItem<T>>>,
}

/// An observable state cell that replays its current value.
///
/// `StateSubject` holds exactly one value at a time. A new subscriber
/// immediately receives the value current at subscription time, then every
/// later [`set`](StateSubject::set), so a screen entering its visible
/// window renders state without waiting for the next mutation.
///
/// Late values overwrite earlier ones for future subscribers; existing
/// subscribers see every `set` in order.
pub struct StateSubject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> StateSubject<T> {
    /// Creates a subject holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                current: initial,
                senders: Vec::new(),
            })),
        }
    }

    /// A clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Subscribe and receive the current value followed by every update.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        // Replay the current value so the subscriber starts rendered.
        let _ = tx.try_send(StreamItem::Value(state.current.clone()));
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Replace the current value and fan it out to all subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn set(&self, value: T) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        state.current = value.clone();
        let item = StreamItem::Value(value);

        let mut next_senders = Vec::with_capacity(state.senders.len());
        for tx in state.senders.drain(..) {
            if tx.try_send(item.clone()).is_ok() {
                next_senders.push(tx);
            }
        }
        state.senders = next_senders;
        Ok(())
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing, `set()` and `subscribe()` return
    /// `SubjectError::Closed`. Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of currently active subscribers.
    ///
    /// Updated lazily: dropped subscribers are removed on the next
    /// `set()`, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Default + 'static> Default for StateSubject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + 'static> Clone for StateSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
