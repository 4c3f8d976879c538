// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ParticipantId;
use crate::trip::Trip;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Two decimals, half away from zero, behind the currency prefix: `$12.50`.
pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", symbol, rounded)
}

pub fn fmt_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}

/// Maps roster names to ids, failing on the first unknown name.
pub fn resolve_names<'a, I>(trip: &Trip, names: I) -> Result<Vec<ParticipantId>>
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(|n| trip.resolve_participant(n).map_err(anyhow::Error::from))
        .collect()
}

pub fn join_names(trip: &Trip, ids: &[ParticipantId], sep: &str) -> String {
    ids.iter()
        .map(|id| trip.participant_name(*id))
        .collect::<Vec<_>>()
        .join(sep)
}
