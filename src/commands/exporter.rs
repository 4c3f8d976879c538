// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::cli::ExportFormat;
use crate::utils::join_names;
use anyhow::{Context, Result};
use serde_json::json;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("trip", sub)) => export_trip(app, sub),
        Some(("expenses", sub)) => export_expenses(app, sub),
        _ => Ok(()),
    }
}

fn export_trip(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap().trim();
    std::fs::write(out, serde_json::to_string_pretty(&app.trip)?)
        .with_context(|| format!("Write {}", out))?;
    tracing::info!(path = out, "trip exported");
    println!("Exported trip to {}", out);
    Ok(())
}

fn export_expenses(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = *sub.get_one::<ExportFormat>("format").unwrap();
    let out = sub.get_one::<String>("out").unwrap().trim();
    let trip = &app.trip;

    match fmt {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Open {}", out))?;
            wtr.write_record(["id", "description", "amount", "paid_by", "split_between"])?;
            for e in trip.expenses() {
                wtr.write_record([
                    e.id.to_string(),
                    e.description.clone(),
                    e.amount.to_string(),
                    trip.participant_name(e.paid_by).to_string(),
                    join_names(trip, &e.split_between, ";"),
                ])?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => {
            let items: Vec<_> = trip
                .expenses()
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id,
                        "description": e.description,
                        "amount": e.amount.to_string(),
                        "paid_by": trip.participant_name(e.paid_by),
                        "split_between": e.split_between.iter().map(|p| trip.participant_name(*p)).collect::<Vec<_>>(),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    tracing::info!(path = out, format = ?fmt, "expenses exported");
    println!("Exported expenses to {}", out);
    Ok(())
}
