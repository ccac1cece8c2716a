// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use lifescope_core::{LifecycleError, LifecycleHost, Visibility};

#[test]
fn test_new_host_starts_initialized() {
    let host = LifecycleHost::new();
    assert_eq!(host.current(), Visibility::Initialized);
    assert!(!host.is_destroyed());
}

#[test]
fn test_transitions_update_current_state() {
    let host = LifecycleHost::new();

    host.transition_to(Visibility::Created).unwrap();
    host.transition_to(Visibility::Started).unwrap();
    host.transition_to(Visibility::Resumed).unwrap();
    assert_eq!(host.current(), Visibility::Resumed);

    host.transition_to(Visibility::Started).unwrap();
    assert_eq!(host.current(), Visibility::Started);
}

#[test]
fn test_destroy_is_terminal() {
    let host = LifecycleHost::with_state(Visibility::Started);
    host.destroy();

    assert!(host.is_destroyed());
    assert_eq!(
        host.transition_to(Visibility::Started),
        Err(LifecycleError::Terminated)
    );

    // Idempotent
    host.destroy();
    assert!(host.is_destroyed());
}

#[test]
fn test_initialized_cannot_be_reentered() {
    let host = LifecycleHost::new();
    host.transition_to(Visibility::Created).unwrap();

    assert_eq!(
        host.transition_to(Visibility::Initialized),
        Err(LifecycleError::Reentry)
    );
}

#[tokio::test]
async fn test_watchers_observe_transitions() -> anyhow::Result<()> {
    // Arrange
    let host = LifecycleHost::new();
    let mut watcher = host.watch();
    assert_eq!(*watcher.borrow(), Visibility::Initialized);

    // Act
    host.transition_to(Visibility::Started)?;

    // Assert
    watcher.changed().await?;
    assert_eq!(*watcher.borrow_and_update(), Visibility::Started);

    host.destroy();
    watcher.changed().await?;
    assert!(watcher.borrow_and_update().is_destroyed());
    Ok(())
}

#[tokio::test]
async fn test_watcher_channel_closes_when_host_dropped() {
    let host = LifecycleHost::with_state(Visibility::Resumed);
    let mut watcher = host.watch();

    drop(host);

    assert!(watcher.changed().await.is_err());
}
