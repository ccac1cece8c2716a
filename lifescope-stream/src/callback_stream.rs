// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from callback-registration APIs to lazy, cancellable streams.

use async_channel::Receiver;
use futures::Stream;
use lifescope_core::{Result, ScopeError, StreamItem};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Adapts a callback-registration API into a cancellable stream.
///
/// `register` is invoked immediately with a [`CallbackSink`] the external
/// service can push values through. It returns the deregistration hook,
/// which the stream guarantees to run exactly once on every exit path:
/// the stream being dropped mid-collection, the stream being polled to
/// completion, or error termination.
///
/// If `register` itself fails, the stream yields that error once and
/// ends; no deregistration hook exists, so none runs.
///
/// Callers that resubscribe (one subscription per visibility window)
/// construct a fresh stream each time, so `register` runs once per
/// subscription.
///
/// # Example
///
/// ```
/// use lifescope_stream::callback_stream;
///
/// # fn demo() {
/// let stream = callback_stream::<i32, _, _>(|sink| {
///     sink.send(1);
///     sink.send(2);
///     Ok(move || drop(sink))
/// });
/// # let _ = stream;
/// # }
/// ```
pub fn callback_stream<T, R, C>(register: R) -> CallbackStream<T>
where
    R: FnOnce(CallbackSink<T>) -> Result<C>,
    C: FnOnce() + Send + 'static,
{
    let (tx, rx) = async_channel::unbounded();
    let sink = CallbackSink { tx: tx.clone() };

    match register(sink) {
        Ok(deregister) => {
            // Only the registered callback keeps the channel open now;
            // when the service drops its sink, the stream completes.
            drop(tx);
            CallbackStream {
                items: rx,
                cleanup: Some(CleanupGuard::new(deregister)),
            }
        }
        Err(error) => {
            let _ = tx.try_send(StreamItem::Error(error));
            tx.close();
            CallbackStream {
                items: rx,
                cleanup: None,
            }
        }
    }
}

/// Handle the external service pushes values through.
///
/// Clonable; all clones feed the same stream. Values arrive downstream in
/// send order.
pub struct CallbackSink<T> {
    tx: async_channel::Sender<StreamItem<T>>,
}

impl<T> CallbackSink<T> {
    /// Forward a value downstream.
    ///
    /// Returns `false` once the stream side has gone away (cancelled or
    /// closed); the value is dropped in that case.
    pub fn send(&self, value: T) -> bool {
        self.tx.try_send(StreamItem::Value(value)).is_ok()
    }

    /// Terminate the stream with `error`.
    ///
    /// Values already buffered are still delivered before the error.
    pub fn close_with(&self, error: ScopeError) {
        let _ = self.tx.try_send(StreamItem::Error(error));
        self.tx.close();
    }

    /// Complete the stream without an error.
    pub fn complete(&self) {
        self.tx.close();
    }

    /// Returns `true` once the stream side has gone away.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T> Clone for CallbackSink<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

struct CleanupGuard {
    hook: Option<Box<dyn FnOnce() + Send>>,
}

impl CleanupGuard {
    fn new(hook: impl FnOnce() + Send + 'static) -> Self {
        Self {
            hook: Some(Box::new(hook)),
        }
    }

    fn run(&mut self) {
        if let Some(hook) = self.hook.take() {
            hook();
        }
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.run();
    }
}

/// Stream returned by [`callback_stream`].
///
/// Dropping it at any point deregisters the underlying callback.
#[pin_project]
pub struct CallbackStream<T> {
    #[pin]
    items: Receiver<StreamItem<T>>,
    cleanup: Option<CleanupGuard>,
}

impl<T> CallbackStream<T> {
    /// A stream that completes immediately without emitting.
    ///
    /// Used where a subscription legitimately produces nothing, e.g. a
    /// capability check failing without being an error.
    #[must_use]
    pub fn empty() -> Self {
        let (tx, rx) = async_channel::unbounded();
        drop(tx);
        Self {
            items: rx,
            cleanup: None,
        }
    }

    /// A stream that yields `error` once, then completes.
    #[must_use]
    pub fn failed(error: ScopeError) -> Self {
        let (tx, rx) = async_channel::unbounded();
        let _ = tx.try_send(StreamItem::Error(error));
        tx.close();
        Self {
            items: rx,
            cleanup: None,
        }
    }
}

impl<T> Stream for CallbackStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        match this.items.poll_next(cx) {
            Poll::Ready(None) => {
                // Upstream closed on its own; deregister now instead of
                // waiting for the stream value to be dropped.
                if let Some(guard) = this.cleanup.as_mut() {
                    guard.run();
                }
                Poll::Ready(None)
            }
            other => other,
        }
    }
}
