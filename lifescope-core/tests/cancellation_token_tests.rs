// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the cooperative CancellationToken.

use futures::FutureExt;
use lifescope_core::CancellationToken;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_sets_flag() {
    let token = CancellationToken::new();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::new();
    token.cancel();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token1 = CancellationToken::new();
    let token2 = token1.clone();

    token2.cancel();

    assert!(token1.is_cancelled());
    assert!(token2.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_resolves_immediately_if_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    token.cancelled().await;
}

#[tokio::test]
async fn test_cancelled_waits_until_cancel() {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    let handle = tokio::spawn(async move {
        token_clone.cancelled().await;
        true
    });

    // Give the spawned task time to start waiting
    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    assert!(handle.await.unwrap());
}

#[tokio::test]
async fn test_pending_before_cancel() {
    let token = CancellationToken::new();

    assert!(token.cancelled().now_or_never().is_none());

    token.cancel();
    assert!(token.cancelled().now_or_never().is_some());
}

#[tokio::test]
async fn test_all_waiters_are_woken() {
    let token = CancellationToken::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let token = token.clone();
            tokio::spawn(async move {
                token.cancelled().await;
            })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    for handle in handles {
        handle.await.unwrap();
    }
}
