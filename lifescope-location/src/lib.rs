// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fix;
pub mod permissions;
pub mod request;
pub mod service;
pub mod updates;

pub use self::fix::{LocationBatch, LocationFix};
pub use self::permissions::{Capability, PermissionGate, REQUIRED_CAPABILITIES};
pub use self::request::{LocationRequest, LocationRequestBuilder, Priority};
pub use self::service::{ListenerId, LocationError, LocationService, LocationSink};
pub use self::updates::location_updates;
