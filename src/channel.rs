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

//! Distribution channel enumeration.
//!
//! The channel set is fixed and closed. Raw wire codes (1..=6) enter the
//! system only through [`Channel::from_code`], which is the sole source of
//! [`RevenueError::InvalidChannel`]; everywhere past that boundary the
//! type system guarantees a valid channel.

use crate::error::RevenueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distribution medium through which revenue was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Theatrical,
    Streaming,
    Vod,
    Dvd,
    Tv,
    Other,
}

impl Channel {
    /// All channels in wire-code order.
    pub const ALL: [Channel; 6] = [
        Channel::Theatrical,
        Channel::Streaming,
        Channel::Vod,
        Channel::Dvd,
        Channel::Tv,
        Channel::Other,
    ];

    /// Returns the numeric wire code (1..=6).
    pub fn code(self) -> u32 {
        match self {
            Channel::Theatrical => 1,
            Channel::Streaming => 2,
            Channel::Vod => 3,
            Channel::Dvd => 4,
            Channel::Tv => 5,
            Channel::Other => 6,
        }
    }

    /// Converts a numeric wire code into a channel.
    ///
    /// # Errors
    ///
    /// Returns [`RevenueError::InvalidChannel`] for any code outside 1..=6.
    pub fn from_code(code: u32) -> Result<Self, RevenueError> {
        match code {
            1 => Ok(Channel::Theatrical),
            2 => Ok(Channel::Streaming),
            3 => Ok(Channel::Vod),
            4 => Ok(Channel::Dvd),
            5 => Ok(Channel::Tv),
            6 => Ok(Channel::Other),
            other => Err(RevenueError::InvalidChannel(other)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Theatrical => "theatrical",
            Channel::Streaming => "streaming",
            Channel::Vod => "vod",
            Channel::Dvd => "dvd",
            Channel::Tv => "tv",
            Channel::Other => "other",
        };
        f.write_str(name)
    }
}
