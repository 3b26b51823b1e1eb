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

//! Append-only ledger store.
//!
//! Owns the sequential entry id counter and the id-to-entry map. Entries are
//! never mutated or deleted once written. The store is not internally
//! synchronized; [`RevenueTracker`](crate::RevenueTracker) guards it together
//! with the aggregator under one lock so the append-and-aggregate effect
//! stays indivisible.

use crate::base::{BlockHeight, EntryId};
use crate::entry::{RevenueEntry, RevenueEvent};
use std::collections::HashMap;
use std::sync::Arc;

/// Sequential, append-only store of revenue entries.
#[derive(Debug, Default)]
pub struct EntryStore {
    /// Id of the most recently appended entry; 0 before the first append.
    last_id: u64,
    /// Entries indexed by id. `Arc` lets lookups hand out the record without
    /// cloning the description.
    entries: HashMap<EntryId, Arc<RevenueEntry>>,
}

impl EntryStore {
    /// Creates an empty store; the first appended entry receives id 1.
    pub fn new() -> Self {
        Self {
            last_id: 0,
            entries: HashMap::new(),
        }
    }

    /// Appends an accepted event, allocating the next sequential id.
    ///
    /// Validation happens upstream; given a well-formed event this never
    /// fails. Returns the assigned id.
    pub fn append(&mut self, timestamp: BlockHeight, event: RevenueEvent) -> EntryId {
        self.last_id += 1;
        let entry_id = EntryId(self.last_id);
        let entry = RevenueEntry::from_event(entry_id, timestamp, event);
        self.entries.insert(entry_id, Arc::new(entry));
        entry_id
    }

    /// Looks up an entry by id.
    ///
    /// Returns `None` for ids never assigned; absence is not an error.
    pub fn get(&self, entry_id: EntryId) -> Option<Arc<RevenueEntry>> {
        self.entries.get(&entry_id).cloned()
    }

    /// Number of entries appended so far.
    pub fn len(&self) -> u64 {
        self.last_id
    }

    pub fn is_empty(&self) -> bool {
        self.last_id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FilmId, TerritoryId};
    use crate::channel::Channel;

    fn event(film: u64, amount: u64) -> RevenueEvent {
        RevenueEvent {
            film_id: FilmId(film),
            territory_id: TerritoryId(1),
            channel: Channel::Theatrical,
            amount,
            description: String::new(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increment() {
        let mut store = EntryStore::new();
        assert!(store.is_empty());

        let first = store.append(BlockHeight(100), event(1, 1000));
        let second = store.append(BlockHeight(100), event(1, 500));
        let third = store.append(BlockHeight(101), event(2, 250));

        assert_eq!(first, EntryId(1));
        assert_eq!(second, EntryId(2));
        assert_eq!(third, EntryId(3));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn get_returns_stored_entry() {
        let mut store = EntryStore::new();
        let id = store.append(BlockHeight(42), event(7, 900));

        let entry = store.get(id).unwrap();
        assert_eq!(entry.film_id, FilmId(7));
        assert_eq!(entry.amount, 900);
        assert_eq!(entry.timestamp, BlockHeight(42));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = EntryStore::new();
        assert!(store.get(EntryId(1)).is_none());

        let mut store = store;
        store.append(BlockHeight(1), event(1, 1));
        assert!(store.get(EntryId(2)).is_none());
        assert!(store.get(EntryId(0)).is_none());
    }
}
