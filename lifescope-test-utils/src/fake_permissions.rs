// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lifescope_location::{Capability, PermissionGate};
use parking_lot::Mutex;
use std::collections::HashSet;

/// Recording stand-in for the permission boundary.
///
/// Starts with nothing granted. Tests choose the grant set up front, or
/// enable [`grant_on_request`](FakePermissionGate::grant_on_request) to
/// simulate the user accepting the dialog.
#[derive(Default)]
pub struct FakePermissionGate {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    granted: HashSet<Capability>,
    requests: Vec<Vec<Capability>>,
    grant_on_request: bool,
}

impl FakePermissionGate {
    /// A gate with every location capability granted.
    #[must_use]
    pub fn granting_all() -> Self {
        let gate = Self::default();
        gate.grant(Capability::FineLocation);
        gate.grant(Capability::CoarseLocation);
        gate
    }

    /// A gate with nothing granted.
    #[must_use]
    pub fn denying_all() -> Self {
        Self::default()
    }

    /// Grants a single capability.
    pub fn grant(&self, capability: Capability) {
        self.inner.lock().granted.insert(capability);
    }

    /// Future `request` calls grant what they ask for, as if the user
    /// accepted the dialog.
    pub fn grant_on_request(&self) {
        self.inner.lock().grant_on_request = true;
    }

    /// Number of `request` calls observed.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.inner.lock().requests.len()
    }

    /// Every capability set passed to `request`, in call order.
    #[must_use]
    pub fn requested(&self) -> Vec<Vec<Capability>> {
        self.inner.lock().requests.clone()
    }
}

impl PermissionGate for FakePermissionGate {
    fn is_granted(&self, capability: Capability) -> bool {
        self.inner.lock().granted.contains(&capability)
    }

    fn request(&self, capabilities: &[Capability]) {
        let mut inner = self.inner.lock();
        inner.requests.push(capabilities.to_vec());
        if inner.grant_on_request {
            inner.granted.extend(capabilities.iter().copied());
        }
    }
}
