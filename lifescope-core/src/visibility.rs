// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

/// Position of a host screen in its show/hide/destroy lifecycle.
///
/// States are totally ordered: `Destroyed < Initialized < Created <
/// Started < Resumed`. The ordering is what makes threshold checks like
/// [`is_at_least`](Visibility::is_at_least) meaningful: a host that is
/// `Resumed` is also at least `Started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    /// Terminal state. The host will never become visible again.
    Destroyed,
    /// Constructed, not yet part of the visible lifecycle.
    Initialized,
    /// Created but not visible.
    Created,
    /// Visible, possibly obscured or not in the foreground.
    Started,
    /// Visible and in the foreground.
    Resumed,
}

impl Visibility {
    /// Returns `true` if this state is at or above `threshold`.
    ///
    /// Thresholds are live states; passing `Destroyed` as a threshold is
    /// meaningless and collection entry points reject it.
    #[must_use]
    pub fn is_at_least(self, threshold: Visibility) -> bool {
        self >= threshold
    }

    /// Returns `true` for the terminal state.
    #[must_use]
    pub const fn is_destroyed(self) -> bool {
        matches!(self, Visibility::Destroyed)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Destroyed => "destroyed",
            Visibility::Initialized => "initialized",
            Visibility::Created => "created",
            Visibility::Started => "started",
            Visibility::Resumed => "resumed",
        };
        f.write_str(name)
    }
}
