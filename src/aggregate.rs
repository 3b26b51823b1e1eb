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

//! Per-film revenue aggregation.
//!
//! Maintains one running total per film, created lazily on the first entry
//! and never deleted. A film with no recorded entries reports a total of
//! zero; absence is indistinguishable from "no revenue yet".

use crate::base::FilmId;
use serde::Serialize;
use std::collections::HashMap;

/// Serializable per-film aggregate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilmRevenue {
    pub film_id: FilmId,
    pub total_revenue: u64,
}

/// Running revenue totals keyed by film.
///
/// Not internally synchronized; guarded by the tracker lock alongside the
/// entry store.
#[derive(Debug, Default)]
pub struct RevenueAggregator {
    totals: HashMap<FilmId, u64>,
}

impl RevenueAggregator {
    pub fn new() -> Self {
        Self {
            totals: HashMap::new(),
        }
    }

    /// Adds `amount` to the film's total and returns the new total.
    ///
    /// The per-film record is created at zero on first use. Saturates at
    /// `u64::MAX` so the operation keeps its never-fails contract.
    pub fn add_revenue(&mut self, film_id: FilmId, amount: u64) -> u64 {
        let total = self.totals.entry(film_id).or_insert(0);
        *total = total.saturating_add(amount);
        *total
    }

    /// Current total for a film; 0 if nothing has been recorded.
    pub fn total(&self, film_id: FilmId) -> u64 {
        self.totals.get(&film_id).copied().unwrap_or(0)
    }

    /// Snapshot of all per-film aggregates, sorted by film id.
    pub fn snapshot(&self) -> Vec<FilmRevenue> {
        let mut films: Vec<FilmRevenue> = self
            .totals
            .iter()
            .map(|(&film_id, &total_revenue)| FilmRevenue {
                film_id,
                total_revenue,
            })
            .collect();
        films.sort_by_key(|f| f.film_id);
        films
    }
}
