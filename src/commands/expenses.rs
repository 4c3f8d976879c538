// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::ledger::share_of;
use crate::models::NewExpense;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table, resolve_names};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("rm", sub)) => {
            let id = app.trip.resolve_expense(sub.get_one::<String>("id").unwrap())?;
            let removed = app.trip.remove_expense(id)?;
            println!(
                "Removed expense '{}' ({})",
                removed.description,
                app.money(&removed.amount)
            );
        }
        Some(("list", sub)) => list(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let paid_by = app
        .trip
        .resolve_participant(sub.get_one::<String>("paid-by").unwrap())?;
    let split_between = resolve_names(&app.trip, sub.get_many::<String>("split").unwrap())?;

    let id = app.trip.add_expense(NewExpense {
        description: description.clone(),
        amount,
        paid_by,
        split_between,
    })?;
    println!(
        "Recorded expense {} '{}' of {} paid by {}",
        id.short(),
        description.trim(),
        app.money(&amount),
        app.trip.participant_name(paid_by)
    );
    Ok(())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(app);
    if !maybe_print_json(sub.get_flag("json"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.description.clone(),
                    app.money(&r.amount),
                    r.paid_by.clone(),
                    r.split_between.join(", "),
                    app.money(&r.share),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Description", "Amount", "Paid by", "Split between", "Share"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub paid_by: String,
    pub split_between: Vec<String>,
    pub share: Decimal,
}

pub fn query_rows(app: &App) -> Vec<ExpenseRow> {
    let trip = &app.trip;
    trip.expenses()
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.short(),
            description: e.description.clone(),
            amount: e.amount,
            paid_by: trip.participant_name(e.paid_by).to_string(),
            split_between: e
                .split_between
                .iter()
                .map(|id| trip.participant_name(*id).to_string())
                .collect(),
            share: share_of(e).unwrap_or(Decimal::ZERO),
        })
        .collect()
}
