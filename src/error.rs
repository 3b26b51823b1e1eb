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

//! Error types for revenue recording.
//!
//! Both errors are detected before any state mutation and surfaced verbatim
//! to the caller; there is no internal retry. Read operations never fail --
//! unknown ids and films produce an explicit absence value instead.

use thiserror::Error;

/// Revenue recording errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevenueError {
    /// Caller is not the configured ledger owner
    #[error("caller is not the ledger owner")]
    Unauthorized,

    /// Channel code outside the closed enumeration (1..=6)
    #[error("unknown channel code {0}")]
    InvalidChannel(u32),
}
