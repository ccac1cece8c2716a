// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub(crate) mod implementation;

use crate::collect_scoped::implementation::collect_scoped_impl;
use async_trait::async_trait;
use futures::stream::Stream;
use lifescope_core::{
    CancellationToken, LifecycleHost, Result, ScopeError, StreamItem, Visibility,
};
use std::future::Future;
use tokio::task::JoinHandle;

/// Options controlling a scoped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Minimum visibility state during which the subscription is held.
    pub threshold: Visibility,
}

impl CollectOptions {
    /// Collect while the host is at or above `threshold`.
    #[must_use]
    pub const fn at_least(threshold: Visibility) -> Self {
        Self { threshold }
    }
}

impl Default for CollectOptions {
    /// Collect while the host is visible (`Started` or above).
    fn default() -> Self {
        Self {
            threshold: Visibility::Started,
        }
    }
}

/// Extension trait binding stream subscriptions to a host's visibility
/// window.
#[async_trait]
pub trait CollectScopedExt {
    /// Collects a stream into `on_next` only while this host is at or
    /// above `options.threshold`.
    ///
    /// # Behavior
    ///
    /// - Parks (consuming no CPU) while the host is below the threshold.
    /// - Each time the host enters the window, calls `make_stream` for a
    ///   fresh subscription and forwards every `StreamItem::Value` to
    ///   `on_next`, in emission order, awaiting each delivery before
    ///   pulling the next value.
    /// - Each time the host drops below the threshold, the current
    ///   subscription is dropped (running its cleanup) before the task
    ///   parks again.
    /// - If the upstream ends or yields `StreamItem::Error`, the
    ///   subscription is over; a fresh one is only created after the host
    ///   leaves and re-enters the window. The error is logged, not
    ///   returned.
    /// - When the host is destroyed (or dropped), or the cancellation
    ///   token fires, the task ends permanently with `Ok(())`.
    ///
    /// An `Err` from `on_next` is routed to `on_error` and that value is
    /// dropped; the subscription keeps running. Per-value failures never
    /// terminate the stream.
    ///
    /// # Arguments
    ///
    /// * `options` - Threshold selection; `CollectOptions::default()` is
    ///   "while visible".
    /// * `make_stream` - Called once per visibility window to open a
    ///   fresh subscription.
    /// * `on_next` - Async observer invoked per emitted value.
    /// * `on_error` - Sink for observer failures.
    /// * `cancellation_token` - Optional token ending the collection
    ///   permanently. If `None`, a token that never fires is used.
    ///
    /// # Errors
    ///
    /// Returns an error only for unusable options (a `Destroyed`
    /// threshold). Host destruction is a normal exit, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use lifescope_core::{LifecycleHost, StateSubject};
    /// use lifescope_exec::{CollectOptions, CollectScopedExt};
    ///
    /// # async fn example() -> lifescope_core::Result<()> {
    /// let host = LifecycleHost::new();
    /// let greetings = StateSubject::new("Hello".to_string());
    ///
    /// host.collect_scoped(
    ///     CollectOptions::default(),
    ///     move || greetings.subscribe().expect("subject is open"),
    ///     |text| async move {
    ///         println!("{text}");
    ///         Ok::<(), std::convert::Infallible>(())
    ///     },
    ///     |error| eprintln!("{error}"),
    ///     None,
    /// )
    /// .await
    /// # }
    /// ```
    async fn collect_scoped<T, S, M, F, Fut, E, OnError>(
        &self,
        options: CollectOptions,
        make_stream: M,
        on_next: F,
        on_error: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        T: Send + 'static,
        S: Stream<Item = StreamItem<T>> + Unpin + Send + 'static,
        M: FnMut() -> S + Send + 'static,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: Send + 'static,
        OnError: FnMut(E) + Send + 'static;
}

#[async_trait]
impl CollectScopedExt for LifecycleHost {
    async fn collect_scoped<T, S, M, F, Fut, E, OnError>(
        &self,
        options: CollectOptions,
        make_stream: M,
        on_next: F,
        on_error: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        T: Send + 'static,
        S: Stream<Item = StreamItem<T>> + Unpin + Send + 'static,
        M: FnMut() -> S + Send + 'static,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: Send + 'static,
        OnError: FnMut(E) + Send + 'static,
    {
        collect_scoped_impl(
            self.watch(),
            options.threshold,
            make_stream,
            on_next,
            on_error,
            cancellation_token,
        )
        .await
    }
}

/// Handle to a collection task spawned with [`spawn_collect_scoped`].
///
/// Cancelling tears down the active subscription (running its cleanup)
/// and ends the task permanently; the host destroying itself does the
/// same without the handle's involvement.
#[derive(Debug)]
pub struct CollectionHandle {
    token: CancellationToken,
    join: JoinHandle<Result<()>>,
}

impl CollectionHandle {
    /// Ends the collection permanently. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A clone of the task's cancellation token.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Returns `true` once the task has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the task to end and returns its outcome.
    ///
    /// # Errors
    ///
    /// Propagates the collection's own error, or a stream error if the
    /// task panicked.
    pub async fn join(self) -> Result<()> {
        match self.join.await {
            Ok(result) => result,
            Err(e) => Err(ScopeError::stream_error(format!(
                "collection task failed: {e}"
            ))),
        }
    }
}

/// Spawns a scoped collection as a background task on the tokio runtime.
///
/// The task lives as long as the host does: it parks below the threshold,
/// collects inside it, and ends for good when the host is destroyed or
/// the returned handle is cancelled.
pub fn spawn_collect_scoped<T, S, M, F, Fut, E, OnError>(
    host: &LifecycleHost,
    options: CollectOptions,
    make_stream: M,
    on_next: F,
    on_error: OnError,
) -> CollectionHandle
where
    T: Send + 'static,
    S: Stream<Item = StreamItem<T>> + Unpin + Send + 'static,
    M: FnMut() -> S + Send + 'static,
    F: FnMut(T) -> Fut + Send + 'static,
    Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: Send + 'static,
    OnError: FnMut(E) + Send + 'static,
{
    let token = CancellationToken::new();
    let join = tokio::spawn(collect_scoped_impl(
        host.watch(),
        options.threshold,
        make_stream,
        on_next,
        on_error,
        Some(token.clone()),
    ));
    CollectionHandle { token, join }
}
