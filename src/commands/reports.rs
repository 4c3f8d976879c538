// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::ledger::balances;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("balances", sub)) => {
            let data = balance_rows(app);
            if !maybe_print_json(sub.get_flag("json"), &data)? {
                let rows = data
                    .iter()
                    .map(|r| {
                        vec![
                            r.name.clone(),
                            app.money(&r.owed),
                            app.money(&r.contributed),
                            app.money(&r.payments),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Participant", "Owed", "Contributed", "Payments"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

/// Ledger totals per participant. `payments` is the sum of recorded direct
/// payments, shown alongside and not netted.
#[derive(Debug, Serialize)]
pub struct BalanceRow {
    pub name: String,
    pub owed: Decimal,
    pub contributed: Decimal,
    pub payments: Decimal,
}

pub fn balance_rows(app: &App) -> Vec<BalanceRow> {
    let trip = &app.trip;
    balances(trip.participants(), trip.expenses())
        .into_iter()
        .map(|(id, b)| BalanceRow {
            name: trip.participant_name(id).to_string(),
            owed: b.owed,
            contributed: b.contributed,
            payments: trip
                .payments()
                .iter()
                .filter(|p| p.paid_by == id)
                .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.amount)),
        })
        .collect()
}
