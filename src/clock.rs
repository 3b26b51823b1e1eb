// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Logical clock source.
//!
//! The host supplies a monotonically non-decreasing "current height" which
//! the tracker stamps onto every accepted entry. [`AtomicClock`] is a plain
//! counter implementation suitable for single-process hosts and tests.

use crate::base::BlockHeight;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the logical clock value captured at acceptance time.
///
/// Implementations must be monotonically non-decreasing across calls.
pub trait BlockClock: Send + Sync {
    fn height(&self) -> BlockHeight;
}

/// Monotonic counter clock backed by an `AtomicU64`.
#[derive(Debug, Default)]
pub struct AtomicClock {
    height: AtomicU64,
}

impl AtomicClock {
    pub fn new(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Advances the clock by one and returns the new height.
    pub fn tick(&self) -> BlockHeight {
        BlockHeight(self.height.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl BlockClock for AtomicClock {
    fn height(&self) -> BlockHeight {
        BlockHeight(self.height.load(Ordering::Relaxed))
    }
}
