// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::NewPayment;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("rm", sub)) => {
            let id = app.trip.resolve_payment(sub.get_one::<String>("id").unwrap())?;
            let removed = app.trip.remove_payment(id)?;
            println!(
                "Removed payment of {} by {}",
                app.money(&removed.amount),
                app.trip.participant_name(removed.paid_by)
            );
        }
        Some(("list", sub)) => {
            let data = query_rows(app);
            if !maybe_print_json(sub.get_flag("json"), &data)? {
                let rows = data
                    .iter()
                    .map(|r| {
                        vec![
                            r.id.clone(),
                            r.date.clone(),
                            r.paid_by.clone(),
                            app.money(&r.amount),
                            r.method.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Date", "Paid by", "Amount", "Method"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let paid_by = app
        .trip
        .resolve_participant(sub.get_one::<String>("paid-by").unwrap())?;
    let method = sub.get_one::<String>("method").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    let id = app.trip.add_payment(NewPayment {
        amount,
        paid_by,
        payment_method: method.clone(),
        date,
    })?;
    println!(
        "Recorded payment {} of {} by {} via {} on {}",
        id.short(),
        app.money(&amount),
        app.trip.participant_name(paid_by),
        method.trim(),
        date
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PaymentRow {
    pub id: String,
    pub date: String,
    pub paid_by: String,
    pub amount: Decimal,
    pub method: String,
}

pub fn query_rows(app: &App) -> Vec<PaymentRow> {
    app.trip
        .payments()
        .iter()
        .map(|p| PaymentRow {
            id: p.id.short(),
            date: p.date.to_string(),
            paid_by: app.trip.participant_name(p.paid_by).to_string(),
            amount: p.amount,
            method: p.payment_method.clone(),
        })
        .collect()
}
