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

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use revenue_ledger_rs::{
    AtomicClock, Channel, FilmId, Principal, RevenueEvent, RevenueTracker, TerritoryId,
};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

/// Revenue Ledger - Process revenue event CSV files
///
/// Reads revenue events from a CSV file and outputs per-film totals to
/// stdout. The local process acts as the ledger owner, so every well-formed
/// event is accepted.
#[derive(Parser, Debug)]
#[command(name = "revenue-ledger-rs")]
#[command(about = "A revenue ledger that aggregates film revenue CSVs", long_about = None)]
struct Args {
    /// Path to CSV file with revenue events
    ///
    /// Expected format: film,territory,channel,amount,description
    /// Example: cargo run -- events.csv > totals.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Starting logical clock height stamped on accepted entries
    #[arg(long, default_value_t = 1)]
    height: u64,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Open input file
    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    // Process events from CSV
    let tracker = match process_events(BufReader::new(file), args.height) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("Error processing events: {}", e);
            process::exit(1);
        }
    };

    // Write results to stdout
    if let Err(e) = write_totals(&tracker, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Raw CSV record matching the input format.
///
/// Fields: `film, territory, channel, amount, description`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    film: u64,
    territory: u32,
    channel: u32,
    #[serde(deserialize_with = "csv::invalid_option")]
    amount: Option<u64>,
    #[serde(default)]
    description: String,
}

impl CsvRecord {
    /// Converts a CSV record to a revenue event.
    ///
    /// Returns `None` for unknown channel codes or a missing amount.
    fn into_event(self) -> Option<RevenueEvent> {
        let channel = Channel::from_code(self.channel).ok()?;
        let amount = self.amount?;

        Some(RevenueEvent {
            film_id: FilmId(self.film),
            territory_id: TerritoryId(self.territory),
            channel,
            amount,
            description: self.description,
        })
    }
}

/// Process revenue events from a CSV reader.
///
/// This function uses streaming parsing to handle arbitrarily large CSV
/// files without loading the entire file into memory. Malformed rows and
/// invalid events are silently skipped.
///
/// # CSV Format
///
/// Expected columns: `film, territory, channel, amount, description`
/// - `film`: Film ID (u64)
/// - `territory`: Territory ID (u32)
/// - `channel`: Channel code (1=theatrical, 2=streaming, 3=vod, 4=dvd, 5=tv, 6=other)
/// - `amount`: Revenue in the smallest currency unit (u64)
/// - `description`: Free-text annotation (may be empty)
///
/// # Example
///
/// ```csv
/// film,territory,channel,amount,description
/// 1,2,1,1000,Opening weekend box office
/// 1,3,2,500,Streaming revenue
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
/// Individual event errors are logged in debug mode but don't stop
/// processing.
pub fn process_events<R: Read>(reader: R, height: u64) -> Result<RevenueTracker, csv::Error> {
    let owner = Principal::new("local");
    let tracker = RevenueTracker::new(owner.clone(), Arc::new(AtomicClock::new(height)));

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " 1000 "
        .flexible(true) // Allow missing description field
        .has_headers(true) // Skip first row as header
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => {
                // Convert CSV record to a revenue event
                let Some(event) = record.into_event() else {
                    #[cfg(debug_assertions)]
                    eprintln!("Skipping invalid revenue record");
                    continue;
                };

                // The CLI runs as the owner, so record can only fail if the
                // tracker were handed another caller; surface it in debug.
                if let Err(e) = tracker.record(&owner, event) {
                    #[cfg(debug_assertions)]
                    eprintln!("Skipping event: {}", e);
                }
            }
            Err(e) => {
                // Skip malformed rows
                #[cfg(debug_assertions)]
                eprintln!("Skipping malformed row: {}", e);
                continue;
            }
        }
    }

    Ok(tracker)
}

/// Write per-film totals to a CSV writer
///
/// Outputs one row per film that has at least one recorded entry, sorted by
/// film id.
///
/// # CSV Format
///
/// Columns: `film_id, total_revenue`
///
/// # Example
///
/// ```csv
/// film_id,total_revenue
/// 1,1500
/// 2,250
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_totals<W: Write>(tracker: &RevenueTracker, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    // Take one sorted snapshot and serialize each aggregate record
    for film in tracker.film_totals() {
        wtr.serialize(&film)?;
    }

    // Flush to ensure all data is written
    wtr.flush()?;
    Ok(())
}
