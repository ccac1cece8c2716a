// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use lifescope_core::{ScopeError, StreamItem};

#[test]
fn test_value_predicates() {
    let item: StreamItem<i32> = StreamItem::Value(5);
    assert!(item.is_value());
    assert!(!item.is_error());
    assert_eq!(item.ok(), Some(5));
}

#[test]
fn test_error_predicates() {
    let item: StreamItem<i32> = StreamItem::Error(ScopeError::stream_error("boom"));
    assert!(item.is_error());
    assert!(item.clone().ok().is_none());
    assert!(item.err().is_some());
}

#[test]
fn test_map_preserves_errors() {
    let value: StreamItem<i32> = StreamItem::Value(2);
    assert_eq!(value.map(|v| v * 10), StreamItem::Value(20));

    let error: StreamItem<i32> = StreamItem::Error(ScopeError::registration("denied"));
    assert!(error.map(|v| v * 10).is_error());
}

#[test]
fn test_errors_never_compare_equal() {
    let a: StreamItem<i32> = StreamItem::Error(ScopeError::stream_error("x"));
    let b: StreamItem<i32> = StreamItem::Error(ScopeError::stream_error("x"));
    assert_ne!(a, b);
}

#[test]
fn test_round_trips_through_result() {
    let item = StreamItem::from(Ok::<_, ScopeError>(3));
    assert_eq!(item, StreamItem::Value(3));

    let result: Result<i32, ScopeError> = StreamItem::Value(3).into();
    assert_eq!(result.unwrap(), 3);

    let result: Result<i32, ScopeError> =
        StreamItem::Error(ScopeError::stream_error("closed")).into();
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "called `StreamItem::unwrap()` on an `Error` value")]
fn test_unwrap_panics_on_error() {
    let item: StreamItem<i32> = StreamItem::Error(ScopeError::stream_error("boom"));
    let _ = item.unwrap();
}
