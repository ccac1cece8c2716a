// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Power/accuracy tradeoff requested from the location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Most accurate fixes the device can produce.
    HighAccuracy,
    /// Coarser fixes at lower power cost.
    BalancedPower,
    /// City-block accuracy.
    LowPower,
    /// Only fixes other clients already paid for.
    Passive,
}

/// Configuration handed to the location service when registering a
/// listener.
///
/// # Example
///
/// ```
/// use lifescope_location::{LocationRequest, Priority};
/// use std::time::Duration;
///
/// let request = LocationRequest::builder()
///     .priority(Priority::HighAccuracy)
///     .interval(Duration::ZERO)
///     .max_updates(100)
///     .build();
/// assert_eq!(request.max_updates(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRequest {
    priority: Priority,
    interval: Duration,
    min_update_interval: Duration,
    max_updates: u32,
}

impl LocationRequest {
    /// Starts a builder with the defaults: high accuracy, zero intervals,
    /// at most 100 updates per registration.
    #[must_use]
    pub fn builder() -> LocationRequestBuilder {
        LocationRequestBuilder::default()
    }

    /// Requested power/accuracy tradeoff.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Desired interval between updates.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Fastest delivery interval the listener can absorb.
    #[must_use]
    pub const fn min_update_interval(&self) -> Duration {
        self.min_update_interval
    }

    /// Updates delivered before the service stops on its own.
    #[must_use]
    pub const fn max_updates(&self) -> u32 {
        self.max_updates
    }
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`LocationRequest`].
#[derive(Debug, Clone)]
pub struct LocationRequestBuilder {
    priority: Priority,
    interval: Duration,
    min_update_interval: Duration,
    max_updates: u32,
}

impl Default for LocationRequestBuilder {
    fn default() -> Self {
        Self {
            priority: Priority::HighAccuracy,
            interval: Duration::ZERO,
            min_update_interval: Duration::ZERO,
            max_updates: 100,
        }
    }
}

impl LocationRequestBuilder {
    /// Sets the power/accuracy tradeoff.
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the desired interval between updates.
    #[must_use]
    pub const fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the fastest delivery interval the listener can absorb.
    #[must_use]
    pub const fn min_update_interval(mut self, interval: Duration) -> Self {
        self.min_update_interval = interval;
        self
    }

    /// Sets how many updates the service delivers before stopping.
    #[must_use]
    pub const fn max_updates(mut self, max_updates: u32) -> Self {
        self.max_updates = max_updates;
        self
    }

    /// Finalizes the request.
    #[must_use]
    pub const fn build(self) -> LocationRequest {
        LocationRequest {
            priority: self.priority,
            interval: self.interval,
            min_update_interval: self.min_update_interval,
            max_updates: self.max_updates,
        }
    }
}
