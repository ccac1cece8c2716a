// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lifescope_location::{
    ListenerId, LocationBatch, LocationError, LocationFix, LocationRequest, LocationService,
    LocationSink,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Recording stand-in for the vendor location service.
///
/// Tracks registrations and removals, can be told to fail the next
/// registration, and lets tests push fixes to every active listener.
#[derive(Default)]
pub struct FakeLocationService {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    active: HashMap<ListenerId, LocationSink>,
    registrations: usize,
    removals: usize,
    fail_next: Option<LocationError>,
    last_request: Option<LocationRequest>,
}

impl FakeLocationService {
    /// A service with no listeners and no scripted failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `request_updates` call fail with `error`.
    pub fn fail_next_registration(&self, error: LocationError) {
        self.inner.lock().fail_next = Some(error);
    }

    /// Delivers a single-fix batch to every active listener.
    pub fn emit(&self, fix: LocationFix) {
        self.emit_batch(LocationBatch::single(fix));
    }

    /// Delivers `batch` to every active listener.
    pub fn emit_batch(&self, batch: LocationBatch) {
        // Deliver outside the lock; a listener may call back into us.
        let sinks: Vec<LocationSink> = self.inner.lock().active.values().cloned().collect();
        for sink in sinks {
            sink.deliver(batch.clone());
        }
    }

    /// Number of successful registrations so far.
    #[must_use]
    pub fn registrations(&self) -> usize {
        self.inner.lock().registrations
    }

    /// Number of deregistrations so far.
    #[must_use]
    pub fn removals(&self) -> usize {
        self.inner.lock().removals
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn active_listeners(&self) -> usize {
        self.inner.lock().active.len()
    }

    /// The request used by the most recent successful registration.
    #[must_use]
    pub fn last_request(&self) -> Option<LocationRequest> {
        self.inner.lock().last_request.clone()
    }
}

impl LocationService for FakeLocationService {
    fn request_updates(
        &self,
        request: &LocationRequest,
        listener: LocationSink,
    ) -> Result<ListenerId, LocationError> {
        let mut inner = self.inner.lock();
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }
        let id = ListenerId::new(inner.next_id);
        inner.next_id += 1;
        inner.registrations += 1;
        inner.last_request = Some(request.clone());
        inner.active.insert(id, listener);
        Ok(id)
    }

    fn remove_updates(&self, listener: ListenerId) {
        let mut inner = self.inner.lock();
        if inner.active.remove(&listener).is_some() {
            inner.removals += 1;
        }
    }
}
