// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fakes for the lifescope workspace.
//!
//! This crate provides the pieces tests (and the demo binary) need to
//! drive lifecycle-scoped collection without a real platform behind it:
//!
//! - [`test_channel`] / [`test_channel_with_errors`] - push-style stream
//!   sources for feeding the collection adapter.
//! - [`FakeLocationService`] - a recording stand-in for the vendor
//!   location API (registration counters, failure injection, manual fix
//!   emission).
//! - [`FakePermissionGate`] - a recording permission boundary that can
//!   grant, deny, and simulate the user accepting the request dialog.
//! - [`helpers`] - timeout-based assertion utilities.
//!
//! Designed for development and testing only, not for production code.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fake_location;
pub mod fake_permissions;
pub mod helpers;

use futures::{Stream, StreamExt};
use lifescope_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

// Re-export commonly used test utilities
pub use fake_location::FakeLocationService;
pub use fake_permissions::FakePermissionGate;
pub use helpers::{assert_no_item, wait_until};

/// Creates a test channel that automatically wraps values in
/// `StreamItem::Value`.
///
/// Tests send plain values; the stream side receives `StreamItem<T>`, the
/// shape the collection adapter consumes.
///
/// # Example
///
/// ```rust
/// use lifescope_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send("hello").unwrap();
///
/// let item = stream.next().await.unwrap().unwrap();
/// assert_eq!(item, "hello");
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` directly, for
/// testing error propagation.
///
/// # Example
///
/// ```rust
/// use lifescope_test_utils::test_channel_with_errors;
/// use lifescope_core::{ScopeError, StreamItem};
///
/// let (tx, _stream) = test_channel_with_errors::<i32>();
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(ScopeError::stream_error("test error"))).unwrap();
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
