// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use lifescope_core::{CancellationToken, Result, ScopeError, StreamItem, Visibility};
use std::future::Future;
use tokio::sync::watch;
use tracing::{debug, warn};

enum WindowEnd {
    /// Host dropped below the threshold; eligible for the next window.
    BelowThreshold,
    /// Upstream ended or failed; wait out the current window first.
    Upstream,
    /// Host destroyed, channel gone, or token cancelled.
    Terminal,
}

// Shared collection loop behind the extension trait and the spawn entry.
pub(crate) async fn collect_scoped_impl<T, S, M, F, Fut, E, OnError>(
    mut visibility: watch::Receiver<Visibility>,
    threshold: Visibility,
    mut make_stream: M,
    mut on_next: F,
    mut on_error: OnError,
    cancellation_token: Option<CancellationToken>,
) -> Result<()>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    M: FnMut() -> S,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = std::result::Result<(), E>>,
    OnError: FnMut(E),
{
    if threshold.is_destroyed() {
        return Err(ScopeError::stream_error(
            "collection threshold cannot be the destroyed state",
        ));
    }

    let cancellation_token = cancellation_token.unwrap_or_default();

    loop {
        // Park until the host is at or above the threshold.
        loop {
            let state = *visibility.borrow_and_update();
            if state.is_destroyed() {
                return Ok(());
            }
            if state.is_at_least(threshold) {
                break;
            }
            tokio::select! {
                () = cancellation_token.cancelled() => return Ok(()),
                changed = visibility.changed() => {
                    // A closed channel means the host itself is gone.
                    if changed.is_err() {
                        return Ok(());
                    }
                }
            }
        }

        debug!(%threshold, "visibility window opened, subscribing");
        let mut stream = make_stream();

        let window_end = 'window: loop {
            tokio::select! {
                // The visibility arms are polled first so a drop below
                // the threshold always wins over a ready value.
                biased;
                () = cancellation_token.cancelled() => break 'window WindowEnd::Terminal,
                changed = visibility.changed() => {
                    if changed.is_err() {
                        break 'window WindowEnd::Terminal;
                    }
                    let state = *visibility.borrow_and_update();
                    if state.is_destroyed() {
                        break 'window WindowEnd::Terminal;
                    }
                    if !state.is_at_least(threshold) {
                        break 'window WindowEnd::BelowThreshold;
                    }
                    // Transitions that stay at or above the threshold keep
                    // the subscription alive.
                }
                item = stream.next() => match item {
                    Some(StreamItem::Value(value)) => {
                        if let Err(error) = on_next(value).await {
                            on_error(error);
                        }
                    }
                    Some(StreamItem::Error(error)) => {
                        warn!(%error, "upstream stream failed, ending subscription");
                        break 'window WindowEnd::Upstream;
                    }
                    None => break 'window WindowEnd::Upstream,
                },
            }
        };

        // Dropping the subscription runs its cleanup before we park again.
        drop(stream);
        debug!("visibility window closed, unsubscribed");

        match window_end {
            WindowEnd::Terminal => return Ok(()),
            WindowEnd::BelowThreshold => {}
            WindowEnd::Upstream => {
                // No resubscription within the same window: the stream
                // instance is done, so wait for the host to leave the
                // window before becoming eligible again.
                loop {
                    let state = *visibility.borrow_and_update();
                    if state.is_destroyed() {
                        return Ok(());
                    }
                    if !state.is_at_least(threshold) {
                        break;
                    }
                    tokio::select! {
                        () = cancellation_token.cancelled() => return Ok(()),
                        changed = visibility.changed() => {
                            if changed.is_err() {
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}
