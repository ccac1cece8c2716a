// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

/// A single position fix delivered by the location service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    /// Latitude in degrees, WGS84.
    pub latitude: f64,
    /// Longitude in degrees, WGS84.
    pub longitude: f64,
    /// Estimated accuracy radius in meters.
    pub accuracy_m: f32,
}

impl LocationFix {
    /// Creates a fix from raw coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, accuracy_m: f32) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m,
        }
    }
}

impl fmt::Display for LocationFix {
    /// The label text form: `"47.37910,8.52990 ±12m"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.5},{:.5} ±{:.0}m",
            self.latitude, self.longitude, self.accuracy_m
        )
    }
}

/// One delivery from the location service.
///
/// A delivery may carry several fixes; consumers usually only care about
/// the newest one. A batch may also be empty: the service reported an
/// update without producing a usable fix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationBatch {
    fixes: Vec<LocationFix>,
}

impl LocationBatch {
    /// A batch carrying the given fixes, oldest first.
    #[must_use]
    pub fn new(fixes: Vec<LocationFix>) -> Self {
        Self { fixes }
    }

    /// A batch carrying exactly one fix.
    #[must_use]
    pub fn single(fix: LocationFix) -> Self {
        Self { fixes: vec![fix] }
    }

    /// A delivery without a usable fix.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The newest fix in the batch, if any.
    #[must_use]
    pub fn last(&self) -> Option<LocationFix> {
        self.fixes.last().copied()
    }

    /// Returns `true` when the delivery carried no fix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Number of fixes in the delivery.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixes.len()
    }
}
