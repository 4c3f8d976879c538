// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The participant's own dashboard: balance, shared expenses, tasks.

use crate::app::App;
use crate::summary::member_summary;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    let me = app.require_member()?;
    match m.subcommand() {
        Some(("balance", sub)) => {
            let s = member_summary(&app.trip, me);
            if !maybe_print_json(sub.get_flag("json"), &s.balance)? {
                println!("Money owed:    {}", app.money(&s.balance.owed));
                println!("Payments made: {}", app.money(&s.balance.contributed));
            }
        }
        Some(("expenses", sub)) => {
            let s = member_summary(&app.trip, me);
            if !maybe_print_json(sub.get_flag("json"), &s.expenses)? {
                let rows = s
                    .expenses
                    .iter()
                    .map(|l| vec![l.id.short(), l.description.clone(), app.money(&l.share)])
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Shared expense", "Your share"], rows)
                );
            }
        }
        Some(("tasks", sub)) => {
            let s = member_summary(&app.trip, me);
            if !maybe_print_json(sub.get_flag("json"), &s.tasks)? {
                let rows = s
                    .tasks
                    .iter()
                    .map(|l| {
                        let mark = if l.completed { "[x]" } else { "[ ]" };
                        vec![l.id.short(), mark.to_string(), l.description.clone()]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Done", "Task"], rows));
            }
        }
        Some(("toggle", sub)) => {
            let id = app.trip.resolve_task(sub.get_one::<String>("id").unwrap())?;
            let done = app.trip.toggle_task_completion(id, me)?;
            println!(
                "Task {} marked {}",
                id.short(),
                if done { "done" } else { "pending" }
            );
        }
        _ => {}
    }
    Ok(())
}
