// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::StreamExt;
use lifescope_core::{StateSubject, StreamItem, SubjectError};

#[tokio::test]
async fn test_subscriber_receives_current_value_first() -> anyhow::Result<()> {
    // Arrange
    let subject = StateSubject::new("Hello".to_string());

    // Act
    let mut stream = subject.subscribe()?;

    // Assert
    let first = stream.next().await.expect("replayed value");
    assert_eq!(first, StreamItem::Value("Hello".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_updates_are_delivered_in_order() -> anyhow::Result<()> {
    let subject = StateSubject::new(0);
    let mut stream = subject.subscribe()?;

    subject.set(1)?;
    subject.set(2)?;

    assert_eq!(stream.next().await.unwrap().unwrap(), 0);
    assert_eq!(stream.next().await.unwrap().unwrap(), 1);
    assert_eq!(stream.next().await.unwrap().unwrap(), 2);
    Ok(())
}

#[tokio::test]
async fn test_late_subscriber_sees_latest_value_only() -> anyhow::Result<()> {
    let subject = StateSubject::new("a".to_string());
    subject.set("b".to_string())?;
    subject.set("c".to_string())?;

    let mut stream = subject.subscribe()?;

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first, "c");
    Ok(())
}

#[tokio::test]
async fn test_all_subscribers_receive_updates() -> anyhow::Result<()> {
    let subject = StateSubject::new(0);
    let mut first = subject.subscribe()?;
    let mut second = subject.subscribe()?;
    assert_eq!(subject.subscriber_count(), 2);

    subject.set(7)?;

    assert_eq!(first.next().await.unwrap().unwrap(), 0);
    assert_eq!(first.next().await.unwrap().unwrap(), 7);
    assert_eq!(second.next().await.unwrap().unwrap(), 0);
    assert_eq!(second.next().await.unwrap().unwrap(), 7);
    Ok(())
}

#[tokio::test]
async fn test_close_completes_subscriber_streams() -> anyhow::Result<()> {
    let subject = StateSubject::new(1);
    let mut stream = subject.subscribe()?;

    subject.close();

    // The replayed value is still buffered, then the stream ends.
    assert_eq!(stream.next().await.unwrap().unwrap(), 1);
    assert!(stream.next().await.is_none());

    assert!(subject.is_closed());
    assert_eq!(subject.set(2), Err(SubjectError::Closed));
    assert!(subject.subscribe().is_err());
    Ok(())
}

#[test]
fn test_get_returns_latest_value() {
    let subject = StateSubject::new(10);
    subject.set(20).unwrap();
    assert_eq!(subject.get(), 20);
}

#[test]
fn test_clones_share_state() {
    let subject = StateSubject::new(1);
    let other = subject.clone();

    other.set(5).unwrap();

    assert_eq!(subject.get(), 5);
    other.close();
    assert!(subject.is_closed());
}
