// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    LocationFix, LocationRequest, LocationService, LocationSink, PermissionGate,
    REQUIRED_CAPABILITIES,
};
use lifescope_stream::{callback_stream, CallbackStream};
use std::sync::Arc;
use tracing::debug;

/// Opens a stream of location fixes, gated on the required capabilities.
///
/// # Behavior
///
/// - With every capability in [`REQUIRED_CAPABILITIES`] granted: registers
///   a listener with `service` and forwards the newest fix of every
///   delivered batch, in arrival order. Batches without a usable fix are
///   logged and dropped; they never terminate the stream.
/// - Registration failing synchronously closes the stream immediately
///   with that error. No listener was retained, so nothing is
///   deregistered.
/// - With a capability missing: fires `permissions.request` exactly once
///   and completes empty: nothing is emitted and nothing registers. A later
///   subscription (the next visibility window) re-checks the grant, so
///   resuming after a grant is the caller's lifecycle loop's job.
///
/// Dropping the stream, however it ends, deregisters the listener
/// exactly once.
pub fn location_updates(
    service: Arc<dyn LocationService>,
    permissions: &dyn PermissionGate,
    request: LocationRequest,
) -> CallbackStream<LocationFix> {
    let granted = REQUIRED_CAPABILITIES
        .iter()
        .all(|&capability| permissions.is_granted(capability));
    if !granted {
        debug!("location capabilities missing, requesting grant");
        permissions.request(&REQUIRED_CAPABILITIES);
        return CallbackStream::empty();
    }

    callback_stream(move |sink| {
        let listener = LocationSink::new(move |batch| match batch.last() {
            Some(fix) => {
                if !sink.send(fix) {
                    debug!("location fix dropped, collector gone");
                }
            }
            None => debug!("empty location batch dropped"),
        });

        let id = service.request_updates(&request, listener)?;
        let service = Arc::clone(&service);
        Ok(move || service.remove_updates(id))
    })
}
