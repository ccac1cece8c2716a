// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience conversions from channel receivers into item streams.

use futures::{Stream, StreamExt};
use lifescope_core::StreamItem;
use std::pin::Pin;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Extension trait converting channel receivers into `StreamItem` streams.
///
/// Each received value is wrapped in `StreamItem::Value`; the stream
/// completes when all senders are gone.
pub trait IntoScopedStream<T> {
    /// Converts this receiver into a collectible stream.
    fn into_scoped_stream(self) -> Pin<Box<dyn Stream<Item = StreamItem<T>> + Send>>;
}

impl<T: Send + 'static> IntoScopedStream<T> for UnboundedReceiver<T> {
    fn into_scoped_stream(self) -> Pin<Box<dyn Stream<Item = StreamItem<T>> + Send>> {
        Box::pin(UnboundedReceiverStream::new(self).map(StreamItem::Value))
    }
}

impl<T: Send + 'static> IntoScopedStream<T> for async_channel::Receiver<T> {
    fn into_scoped_stream(self) -> Pin<Box<dyn Stream<Item = StreamItem<T>> + Send>> {
        Box::pin(self.map(StreamItem::Value))
    }
}
