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

//! # Revenue Ledger
//!
//! This library provides an append-only ledger for film revenue events with
//! a running total per film. A single configured owner records entries;
//! reads are public and never fail.
//!
//! ## Core Components
//!
//! - [`RevenueTracker`]: Central gate enforcing ownership and the atomic
//!   append-and-aggregate write
//! - [`EntryStore`]: Sequential, append-only entry storage
//! - [`RevenueAggregator`]: Per-film running totals
//! - [`Channel`]: Closed set of distribution channels (the only validated
//!   field)
//! - [`RevenueError`]: The two rejection reasons (`Unauthorized`,
//!   `InvalidChannel`)
//!
//! ## Example
//!
//! ```
//! use revenue_ledger_rs::{
//!     AtomicClock, Channel, FilmId, Principal, RevenueEvent, RevenueTracker, TerritoryId,
//! };
//! use std::sync::Arc;
//!
//! let owner = Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
//! let tracker = RevenueTracker::new(owner.clone(), Arc::new(AtomicClock::new(100)));
//!
//! // Record opening weekend box office for film 1 in territory 2.
//! let event = RevenueEvent {
//!     film_id: FilmId(1),
//!     territory_id: TerritoryId(2),
//!     channel: Channel::Theatrical,
//!     amount: 1000,
//!     description: "Opening weekend box office".to_string(),
//! };
//! let entry_id = tracker.record(&owner, event).unwrap();
//!
//! assert_eq!(entry_id.0, 1);
//! assert_eq!(tracker.film_total(FilmId(1)), 1000);
//! ```
//!
//! ## Thread Safety
//!
//! Writers serialize on an internal lock that covers both the entry store
//! and the aggregator, so a reader can never observe an entry without its
//! contribution to the film total. Reads run concurrently with each other.

pub mod aggregate;
mod base;
mod channel;
mod clock;
mod entry;
pub mod error;
pub mod store;
mod tracker;

pub use aggregate::{FilmRevenue, RevenueAggregator};
pub use base::{BlockHeight, EntryId, FilmId, Principal, TerritoryId};
pub use channel::Channel;
pub use clock::{AtomicClock, BlockClock};
pub use entry::{RevenueEntry, RevenueEvent};
pub use error::RevenueError;
pub use store::EntryStore;
pub use tracker::RevenueTracker;
