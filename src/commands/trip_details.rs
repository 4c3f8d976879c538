// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{fmt_date, maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, bail};
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(app, sub)?,
        Some(("set", sub)) => set(app, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TripOverview {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub participants: usize,
}

pub fn overview(app: &App) -> TripOverview {
    let d = app.trip.details();
    TripOverview {
        destination: d.destination.clone(),
        start_date: fmt_date(d.start_date),
        end_date: fmt_date(d.end_date),
        participants: app.trip.participants().len(),
    }
}

fn show(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    if app.session.role().is_none() {
        bail!("Not logged in; use 'login <name>'");
    }
    let o = overview(app);
    if !maybe_print_json(sub.get_flag("json"), &o)? {
        println!(
            "{}",
            pretty_table(
                &["Destination", "From", "To", "Participants"],
                vec![vec![
                    o.destination,
                    o.start_date,
                    o.end_date,
                    o.participants.to_string(),
                ]],
            )
        );
    }
    Ok(())
}

fn set(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    let destination = sub.get_one::<String>("destination");
    let start = sub.get_one::<String>("start").map(|s| parse_date(s)).transpose()?;
    let end = sub.get_one::<String>("end").map(|s| parse_date(s)).transpose()?;
    if destination.is_none() && start.is_none() && end.is_none() {
        bail!("Nothing to update; pass --destination, --start or --end");
    }

    // Dates are validated before anything is written so a bad range leaves
    // the destination untouched too.
    let details = app.trip.details();
    let start = start.or(details.start_date);
    let end = end.or(details.end_date);
    let mut next = app.trip.clone();
    if let Some(dest) = destination {
        next.set_destination(dest)?;
    }
    next.set_dates(start, end)?;
    app.trip = next;

    let d = app.trip.details();
    println!(
        "Trip to {} from {} to {}",
        d.destination,
        fmt_date(d.start_date),
        fmt_date(d.end_date)
    );
    Ok(())
}
