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

//! Revenue entry records.
//!
//! A [`RevenueEvent`] is what the owner submits; a [`RevenueEntry`] is what
//! the ledger stores once the event is accepted: the same fields plus the
//! assigned entry id and the clock height captured at acceptance. Entries are
//! immutable once written.

use crate::base::{BlockHeight, EntryId, FilmId, TerritoryId};
use crate::channel::Channel;
use serde::{Deserialize, Serialize};

/// A revenue event as submitted by the owner.
///
/// Only `channel` is validated (by construction of the [`Channel`] type);
/// film, territory, amount, and description are recorded as supplied.
/// `amount` is in the smallest currency unit; zero is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEvent {
    pub film_id: FilmId,
    pub territory_id: TerritoryId,
    pub channel: Channel,
    pub amount: u64,
    pub description: String,
}

/// An accepted, immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub entry_id: EntryId,
    pub film_id: FilmId,
    pub territory_id: TerritoryId,
    pub channel: Channel,
    pub amount: u64,
    /// Clock height at acceptance time; never caller-supplied.
    pub timestamp: BlockHeight,
    pub description: String,
}

impl RevenueEntry {
    /// Materializes an accepted event into a stored entry.
    pub(crate) fn from_event(entry_id: EntryId, timestamp: BlockHeight, event: RevenueEvent) -> Self {
        Self {
            entry_id,
            film_id: event.film_id,
            territory_id: event.territory_id,
            channel: event.channel,
            amount: event.amount,
            timestamp,
            description: event.description,
        }
    }
}
