// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Capabilities involved in streaming location updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Precise positioning.
    FineLocation,
    /// City-block positioning.
    CoarseLocation,
}

/// Streaming requires every capability in this set.
pub const REQUIRED_CAPABILITIES: [Capability; 2] =
    [Capability::CoarseLocation, Capability::FineLocation];

/// Permission boundary, treated as a black box.
///
/// The grant check is synchronous. The request is fire-and-forget; its
/// outcome is not observed here, a later subscription simply re-checks
/// the grant.
pub trait PermissionGate: Send + Sync {
    /// Returns `true` when `capability` is currently granted.
    fn is_granted(&self, capability: Capability) -> bool;

    /// Asks the external UI flow to obtain `capabilities`.
    fn request(&self, capabilities: &[Capability]);
}
