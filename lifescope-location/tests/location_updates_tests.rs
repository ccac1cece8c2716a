// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::StreamExt;
use lifescope_core::{ScopeError, StreamItem};
use lifescope_location::{
    location_updates, Capability, LocationBatch, LocationError, LocationFix, LocationRequest,
    LocationService, LocationSink, Priority, REQUIRED_CAPABILITIES,
};
use lifescope_test_utils::{assert_no_item, FakeLocationService, FakePermissionGate};
use std::sync::Arc;

fn zurich() -> LocationFix {
    LocationFix::new(47.3769, 8.5417, 12.0)
}

fn berlin() -> LocationFix {
    LocationFix::new(52.5200, 13.4050, 25.0)
}

#[tokio::test]
async fn test_fixes_are_forwarded_in_arrival_order() {
    // Arrange
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();

    let mut stream = Box::pin(location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    ));
    assert_eq!(service.registrations(), 1);

    // Act
    service.emit(zurich());
    service.emit(berlin());

    // Assert
    assert_eq!(stream.next().await.unwrap().unwrap(), zurich());
    assert_eq!(stream.next().await.unwrap().unwrap(), berlin());
}

#[tokio::test]
async fn test_only_newest_fix_of_a_batch_is_forwarded() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();

    let mut stream = Box::pin(location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    ));

    service.emit_batch(LocationBatch::new(vec![berlin(), zurich()]));

    assert_eq!(stream.next().await.unwrap().unwrap(), zurich());
    assert_no_item(&mut stream, 20).await;
}

#[tokio::test]
async fn test_empty_batches_are_dropped_not_fatal() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();

    let mut stream = Box::pin(location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    ));

    service.emit_batch(LocationBatch::empty());
    service.emit(zurich());

    // The empty delivery vanishes; the stream keeps going.
    assert_eq!(stream.next().await.unwrap().unwrap(), zurich());
}

#[tokio::test]
async fn test_denied_permission_requests_grant_once_and_completes_empty() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::denying_all();

    let mut stream = Box::pin(location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    ));

    // No registration was attempted; the grant flow was kicked exactly once.
    assert_eq!(service.registrations(), 0);
    assert_eq!(permissions.request_count(), 1);
    assert_eq!(permissions.requested()[0], REQUIRED_CAPABILITIES.to_vec());

    // No values, no error: the stream just completes.
    assert!(stream.next().await.is_none());
    assert_eq!(service.removals(), 0);
}

#[tokio::test]
async fn test_partial_grant_counts_as_denied() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::denying_all();
    permissions.grant(Capability::CoarseLocation);

    let mut stream = Box::pin(location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    ));

    assert_eq!(service.registrations(), 0);
    assert_eq!(permissions.request_count(), 1);
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_registration_failure_closes_stream_without_deregistration() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();
    service.fail_next_registration(LocationError::rejected("no providers"));

    let mut stream = Box::pin(location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    ));

    let first = stream.next().await.unwrap();
    assert!(matches!(
        first,
        StreamItem::Error(ScopeError::Registration { .. })
    ));
    assert!(stream.next().await.is_none());

    // Registration never succeeded, so nothing is deregistered.
    drop(stream);
    assert_eq!(service.removals(), 0);
}

#[tokio::test]
async fn test_dropping_stream_deregisters_exactly_once() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();

    let stream = location_updates(
        service.clone(),
        &permissions,
        LocationRequest::default(),
    );
    assert_eq!(service.active_listeners(), 1);

    drop(stream);

    assert_eq!(service.removals(), 1);
    assert_eq!(service.active_listeners(), 0);
}

#[tokio::test]
async fn test_each_subscription_registers_fresh() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();

    let first = location_updates(service.clone(), &permissions, LocationRequest::default());
    drop(first);
    let second = location_updates(service.clone(), &permissions, LocationRequest::default());
    drop(second);

    assert_eq!(service.registrations(), 2);
    assert_eq!(service.removals(), 2);
}

#[tokio::test]
async fn test_request_configuration_reaches_the_service() {
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::granting_all();
    let request = LocationRequest::builder()
        .priority(Priority::BalancedPower)
        .max_updates(5)
        .build();

    let _stream = location_updates(service.clone(), &permissions, request.clone());

    assert_eq!(service.last_request(), Some(request));
}

#[tokio::test]
async fn test_grant_on_request_lets_a_later_subscription_register() {
    // The adapter resubscribes per visibility window; this is the
    // second-window view after the user accepted the dialog.
    let service = Arc::new(FakeLocationService::new());
    let permissions = FakePermissionGate::denying_all();
    permissions.grant_on_request();

    let mut denied =
        Box::pin(location_updates(service.clone(), &permissions, LocationRequest::default()));
    assert!(denied.next().await.is_none());
    assert_eq!(service.registrations(), 0);

    let mut granted =
        Box::pin(location_updates(service.clone(), &permissions, LocationRequest::default()));
    assert_eq!(service.registrations(), 1);
    assert_eq!(permissions.request_count(), 1);

    service.emit(zurich());
    assert_eq!(granted.next().await.unwrap().unwrap(), zurich());
}

/// Minimal service used to check delivery after deregistration.
struct HoldingService {
    inner: parking_lot::Mutex<Option<LocationSink>>,
}

impl LocationService for HoldingService {
    fn request_updates(
        &self,
        _request: &LocationRequest,
        listener: LocationSink,
    ) -> Result<lifescope_location::ListenerId, LocationError> {
        *self.inner.lock() = Some(listener);
        Ok(lifescope_location::ListenerId::new(0))
    }

    fn remove_updates(&self, _listener: lifescope_location::ListenerId) {
        // Deliberately keeps the sink: a sloppy service may still call a
        // deregistered listener.
    }
}

#[tokio::test]
async fn test_late_deliveries_after_cancellation_are_dropped() {
    let service = Arc::new(HoldingService {
        inner: parking_lot::Mutex::new(None),
    });
    let permissions = FakePermissionGate::granting_all();

    let stream = location_updates(service.clone(), &permissions, LocationRequest::default());
    let sink = service.inner.lock().clone().unwrap();
    drop(stream);

    // Delivery lands in a closed bridge; nothing panics, nothing leaks.
    sink.deliver(LocationBatch::single(zurich()));
}
