// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker identity.

use core::fmt;

/// Identifies an orbiting marker within a [`FrameUpdater`].
///
/// The value is assigned when the rig is built and carried through trace
/// events and presenters unchanged.
///
/// [`FrameUpdater`]: crate::updater::FrameUpdater
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MarkerId(pub u32);

impl MarkerId {
    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarkerId({})", self.0)
    }
}
