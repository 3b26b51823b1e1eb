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

//! Property-based tests for the revenue tracker.
//!
//! These tests verify invariants that should hold for any sequence of
//! recorded events.

use proptest::prelude::*;
use revenue_ledger_rs::{
    AtomicClock, Channel, EntryId, FilmId, Principal, RevenueError, RevenueEvent, RevenueTracker,
    TerritoryId,
};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Generate one revenue event over a small film/territory space so films
/// collide often.
fn arb_event() -> impl Strategy<Value = RevenueEvent> {
    (1u64..=5, 1u32..=3, 1u32..=6, 0u64..=1_000_000, ".{0,24}").prop_map(
        |(film, territory, code, amount, description)| RevenueEvent {
            film_id: FilmId(film),
            territory_id: TerritoryId(territory),
            channel: Channel::from_code(code).unwrap(),
            amount,
            description,
        },
    )
}

fn make_tracker() -> (RevenueTracker, Principal) {
    let owner = Principal::new("owner");
    let tracker = RevenueTracker::new(owner.clone(), Arc::new(AtomicClock::new(1)));
    (tracker, owner)
}

// =============================================================================
// Ledger Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Successful records receive the ids 1, 2, 3, ... with no gaps or
    /// repeats, and every assigned id resolves to its entry.
    #[test]
    fn entry_ids_are_sequential(
        events in prop::collection::vec(arb_event(), 1..20),
    ) {
        let (tracker, owner) = make_tracker();

        for (i, event) in events.iter().enumerate() {
            let id = tracker.record(&owner, event.clone()).unwrap();
            prop_assert_eq!(id, EntryId(i as u64 + 1));
        }

        prop_assert_eq!(tracker.entry_count(), events.len() as u64);
        for i in 1..=events.len() as u64 {
            prop_assert!(tracker.entry(EntryId(i)).is_some());
        }
        prop_assert!(tracker.entry(EntryId(events.len() as u64 + 1)).is_none());
    }

    /// Each film's total equals the sum of amounts over its entries, and
    /// films never recorded total zero.
    #[test]
    fn film_totals_equal_entry_sums(
        events in prop::collection::vec(arb_event(), 0..30),
    ) {
        let (tracker, owner) = make_tracker();
        let mut expected: HashMap<u64, u64> = HashMap::new();

        for event in &events {
            *expected.entry(event.film_id.0).or_insert(0) += event.amount;
            tracker.record(&owner, event.clone()).unwrap();
        }

        for film in 1u64..=6 {
            let want = expected.get(&film).copied().unwrap_or(0);
            prop_assert_eq!(tracker.film_total(FilmId(film)), want);
        }
    }

    /// Stored entries keep the submitted fields verbatim.
    #[test]
    fn entries_are_stored_verbatim(event in arb_event()) {
        let (tracker, owner) = make_tracker();

        let id = tracker.record(&owner, event.clone()).unwrap();
        let stored = tracker.entry(id).unwrap();

        prop_assert_eq!(stored.film_id, event.film_id);
        prop_assert_eq!(stored.territory_id, event.territory_id);
        prop_assert_eq!(stored.channel, event.channel);
        prop_assert_eq!(stored.amount, event.amount);
        prop_assert_eq!(&stored.description, &event.description);
    }
}

// =============================================================================
// Rejection Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Calls from any non-owner principal are rejected and leave the entry
    /// count and all totals unchanged.
    #[test]
    fn non_owner_calls_never_mutate(
        accepted in prop::collection::vec(arb_event(), 0..10),
        rejected in prop::collection::vec(arb_event(), 1..10),
        intruder in "[a-z]{1,12}",
    ) {
        prop_assume!(intruder != "owner");

        let (tracker, owner) = make_tracker();
        for event in &accepted {
            tracker.record(&owner, event.clone()).unwrap();
        }

        let count_before = tracker.entry_count();
        let totals_before: Vec<_> = tracker.film_totals();

        let caller = Principal::new(intruder);
        for event in &rejected {
            let result = tracker.record(&caller, event.clone());
            prop_assert_eq!(result, Err(RevenueError::Unauthorized));
        }

        prop_assert_eq!(tracker.entry_count(), count_before);
        prop_assert_eq!(tracker.film_totals(), totals_before);
    }

    /// Codes outside 1..=6 never produce a channel; codes inside always do.
    #[test]
    fn channel_codes_partition_cleanly(code in 0u32..=10_000) {
        match Channel::from_code(code) {
            Ok(channel) => {
                prop_assert!((1..=6).contains(&code));
                prop_assert_eq!(channel.code(), code);
            }
            Err(err) => {
                prop_assert!(!(1..=6).contains(&code));
                prop_assert_eq!(err, RevenueError::InvalidChannel(code));
            }
        }
    }
}
