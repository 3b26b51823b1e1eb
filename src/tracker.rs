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

//! Revenue tracking engine.
//!
//! The [`RevenueTracker`] is the single mutating entry point and the only
//! place business rules are enforced. [`record`](RevenueTracker::record)
//! checks the caller against the configured owner, then appends to the entry
//! store and updates the per-film aggregate in one critical section. Reads
//! (`entry`, `film_total`) take the shared lock and never fail; absence is a
//! value, not an error.
//!
//! # Invariants
//!
//! - Entry ids form the gap-free sequence 1, 2, 3, ... and are never reused.
//! - A film's total always equals the exact sum of `amount` over its stored
//!   entries; no reader can observe one write without the other.
//! - Entries are never mutated or removed once accepted.

use crate::aggregate::{FilmRevenue, RevenueAggregator};
use crate::base::{EntryId, FilmId, Principal};
use crate::clock::BlockClock;
use crate::entry::{RevenueEntry, RevenueEvent};
use crate::error::RevenueError;
use crate::store::EntryStore;
use parking_lot::RwLock;
use std::sync::Arc;

/// Both stores live under one lock so the append-and-aggregate dual write is
/// indivisible from any reader's perspective.
#[derive(Debug, Default)]
struct TrackerState {
    entries: EntryStore,
    totals: RevenueAggregator,
}

/// Append-only revenue ledger with a single privileged writer.
///
/// The owner identity and clock source are fixed at construction; there is
/// no way to change the owner afterwards.
pub struct RevenueTracker {
    owner: Principal,
    clock: Arc<dyn BlockClock>,
    state: RwLock<TrackerState>,
}

impl RevenueTracker {
    /// Creates an empty tracker writable only by `owner`.
    pub fn new(owner: Principal, clock: Arc<dyn BlockClock>) -> Self {
        Self {
            owner,
            clock,
            state: RwLock::new(TrackerState::default()),
        }
    }

    /// The single principal authorized to record entries.
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Records a revenue event, returning the assigned entry id.
    ///
    /// The entry timestamp is the clock height at acceptance; callers cannot
    /// set it. The append and the aggregate update happen under one write
    /// lock, so the entry/total consistency invariant holds at every
    /// externally observable point.
    ///
    /// # Errors
    ///
    /// - [`RevenueError::Unauthorized`] - caller is not the owner. No state
    ///   change occurs.
    ///
    /// Invalid channels cannot reach this method: [`RevenueEvent`] carries a
    /// [`Channel`](crate::Channel), and raw codes are rejected at the
    /// boundary by [`Channel::from_code`](crate::Channel::from_code).
    pub fn record(
        &self,
        caller: &Principal,
        event: RevenueEvent,
    ) -> Result<EntryId, RevenueError> {
        if *caller != self.owner {
            return Err(RevenueError::Unauthorized);
        }

        let timestamp = self.clock.height();
        let amount = event.amount;
        let film_id = event.film_id;

        let mut state = self.state.write();
        let entry_id = state.entries.append(timestamp, event);
        state.totals.add_revenue(film_id, amount);
        Ok(entry_id)
    }

    /// Retrieves an entry by id.
    ///
    /// Returns `None` for ids never assigned.
    pub fn entry(&self, entry_id: EntryId) -> Option<Arc<RevenueEntry>> {
        self.state.read().entries.get(entry_id)
    }

    /// Cumulative revenue for a film; 0 if none has been recorded.
    pub fn film_total(&self, film_id: FilmId) -> u64 {
        self.state.read().totals.total(film_id)
    }

    /// Number of entries accepted so far (equals the highest assigned id).
    pub fn entry_count(&self) -> u64 {
        self.state.read().entries.len()
    }

    /// Snapshot of all per-film aggregates, sorted by film id.
    ///
    /// Useful for generating output reports of ledger state.
    pub fn film_totals(&self) -> Vec<FilmRevenue> {
        self.state.read().totals.snapshot()
    }
}
