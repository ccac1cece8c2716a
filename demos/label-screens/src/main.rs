// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Label Screens Demo
//!
//! Walks the two screens through a scripted visibility lifecycle:
//! - Greeting screen: an observable state cell collected into a label.
//! - Location screen: a permission-gated fake GPS bridged into a label.
//!
//! Both collections run only while their host is inside the visible
//! window; hiding a screen tears the subscription down, returning
//! resubscribes, destroying ends it for good.

use anyhow::Result;
use lifescope_core::{LifecycleHost, StateSubject, Visibility};
use lifescope_exec::{spawn_collect_scoped, CollectOptions};
use lifescope_location::{location_updates, LocationFix, LocationRequest};
use lifescope_test_utils::{FakeLocationService, FakePermissionGate};
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

/// In-process stand-in for a screen's text label.
#[derive(Clone, Default)]
struct Label {
    text: Arc<Mutex<String>>,
}

impl Label {
    fn set(&self, text: impl Into<String>) {
        *self.text.lock().unwrap() = text.into();
    }

    fn get(&self) -> String {
        self.text.lock().unwrap().clone()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    greeting_screen().await?;
    location_screen().await?;
    Ok(())
}

async fn greeting_screen() -> Result<()> {
    println!("== greeting screen ==");
    let host = LifecycleHost::new();
    let label = Label::default();
    let greetings = StateSubject::new("Hello".to_string());

    let handle = spawn_collect_scoped(
        &host,
        CollectOptions::default(),
        {
            let greetings = greetings.clone();
            move || greetings.subscribe().expect("subject is open")
        },
        {
            let label = label.clone();
            move |text: String| {
                let label = label.clone();
                async move {
                    label.set(text);
                    Ok::<(), Infallible>(())
                }
            }
        },
        |error: Infallible| match error {},
    );

    host.transition_to(Visibility::Created)?;
    host.transition_to(Visibility::Started)?;
    sleep(Duration::from_millis(50)).await;
    println!("label after entering the window: {:?}", label.get());

    greetings.set("Hello again".to_string())?;
    sleep(Duration::from_millis(50)).await;
    println!("label after an update:           {:?}", label.get());

    // Hidden: updates no longer reach the label.
    host.transition_to(Visibility::Created)?;
    sleep(Duration::from_millis(50)).await;
    greetings.set("set while hidden".to_string())?;
    sleep(Duration::from_millis(50)).await;
    println!("label while hidden:              {:?}", label.get());

    // Returning replays the latest state immediately.
    host.transition_to(Visibility::Started)?;
    sleep(Duration::from_millis(50)).await;
    println!("label after returning:           {:?}", label.get());

    host.destroy();
    handle.join().await?;
    Ok(())
}

async fn location_screen() -> Result<()> {
    println!("\n== location screen ==");
    let host = LifecycleHost::new();
    let label = Label::default();
    let service = Arc::new(FakeLocationService::new());
    let permissions = Arc::new(FakePermissionGate::denying_all());
    // The user will accept the dialog when it shows up.
    permissions.grant_on_request();

    let handle = spawn_collect_scoped(
        &host,
        CollectOptions::default(),
        {
            let service = service.clone();
            let permissions = permissions.clone();
            move || {
                Box::pin(location_updates(
                    service.clone(),
                    permissions.as_ref(),
                    LocationRequest::default(),
                ))
            }
        },
        {
            let label = label.clone();
            move |fix: LocationFix| {
                let label = label.clone();
                async move {
                    label.set(fix.to_string());
                    Ok::<(), Infallible>(())
                }
            }
        },
        |error: Infallible| match error {},
    );

    // First window: no grant yet, so the grant flow fires and nothing
    // streams.
    host.transition_to(Visibility::Started)?;
    sleep(Duration::from_millis(50)).await;
    println!(
        "registrations after denied window: {}",
        service.registrations()
    );
    println!(
        "permission requests fired:         {}",
        permissions.request_count()
    );

    // The dialog was accepted; re-entering the window registers for real.
    host.transition_to(Visibility::Created)?;
    sleep(Duration::from_millis(50)).await;
    host.transition_to(Visibility::Started)?;
    sleep(Duration::from_millis(50)).await;
    service.emit(LocationFix::new(47.3769, 8.5417, 12.0));
    sleep(Duration::from_millis(50)).await;
    println!("label with a fix:                  {}", label.get());

    // Hidden: the listener is deregistered.
    host.transition_to(Visibility::Created)?;
    sleep(Duration::from_millis(50)).await;
    println!(
        "active listeners while hidden:     {}",
        service.active_listeners()
    );

    host.destroy();
    handle.join().await?;
    Ok(())
}
