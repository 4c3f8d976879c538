// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::trip::Trip;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("trip", sub)) => {
            let path = sub.get_one::<String>("path").unwrap().trim();
            app.trip = load_trip(Path::new(path))?;
            tracing::info!(path, "trip imported");
            println!(
                "Imported trip to {} ({} participants, {} expenses) from {}",
                app.trip.details().destination,
                app.trip.participants().len(),
                app.trip.expenses().len(),
                path
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Reads a trip written by `export trip` and re-checks its invariants.
pub fn load_trip(path: &Path) -> Result<Trip> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Open trip file {}", path.display()))?;
    let trip: Trip = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid trip file {}", path.display()))?;
    trip.check()
        .with_context(|| format!("Rejected trip file {}", path.display()))?;
    Ok(trip)
}
