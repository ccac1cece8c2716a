// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{LocationBatch, LocationRequest};
use lifescope_core::ScopeError;
use std::fmt;
use std::sync::Arc;

/// Opaque token identifying one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wraps a raw id assigned by the service.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Callback handle the service delivers batches through.
///
/// Clonable; the service holds one for the lifetime of a registration and
/// drops it on deregistration.
#[derive(Clone)]
pub struct LocationSink {
    deliver: Arc<dyn Fn(LocationBatch) + Send + Sync>,
}

impl LocationSink {
    /// Wraps a delivery callback.
    pub fn new(deliver: impl Fn(LocationBatch) + Send + Sync + 'static) -> Self {
        Self {
            deliver: Arc::new(deliver),
        }
    }

    /// Hands one delivery to the listener.
    pub fn deliver(&self, batch: LocationBatch) {
        (self.deliver)(batch);
    }
}

impl fmt::Debug for LocationSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LocationSink")
    }
}

/// Failures surfaced by the location service boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The service rejected the registration.
    #[error("location service rejected the request: {context}")]
    Rejected {
        /// Description of the rejection.
        context: String,
    },
    /// The service is not available on this device.
    #[error("location service is unavailable")]
    Unavailable,
}

impl LocationError {
    /// Create a rejection error with the given context.
    pub fn rejected(context: impl Into<String>) -> Self {
        Self::Rejected {
            context: context.into(),
        }
    }
}

impl From<LocationError> for ScopeError {
    fn from(err: LocationError) -> Self {
        ScopeError::registration(err.to_string())
    }
}

/// Vendor location API, treated as a black box.
///
/// `request_updates` registers a listener under a fresh [`ListenerId`]
/// and starts delivering batches through the sink; `remove_updates` stops
/// delivery and drops the sink. Implementations must tolerate
/// `remove_updates` for ids they no longer know.
pub trait LocationService: Send + Sync {
    /// Registers `listener` for updates shaped by `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`LocationError`] when the service cannot accept the
    /// registration; no listener is retained in that case.
    fn request_updates(
        &self,
        request: &LocationRequest,
        listener: LocationSink,
    ) -> Result<ListenerId, LocationError>;

    /// Deregisters a listener. Unknown ids are ignored.
    fn remove_updates(&self, listener: ListenerId);
}
