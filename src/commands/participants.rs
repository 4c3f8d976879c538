// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            app.trip.add_participant(name)?;
            println!("Added participant '{}'", name.trim());
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let id = app.trip.resolve_participant(name)?;
            let removed = app.trip.remove_participant(id)?;
            println!("Removed participant '{}'", removed.name);
        }
        Some(("rename", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let new_name = sub.get_one::<String>("new_name").unwrap();
            let id = app.trip.resolve_participant(name)?;
            app.trip.rename_participant(id, new_name)?;
            println!("Renamed '{}' to '{}'", name.trim(), new_name.trim());
        }
        Some(("list", sub)) => {
            let rows = query_rows(app);
            if !maybe_print_json(sub.get_flag("json"), &rows)? {
                let data = rows
                    .into_iter()
                    .map(|r| vec![r.id, r.name, r.expenses.to_string(), r.tasks.to_string()])
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Name", "Expenses", "Tasks"], data)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ParticipantRow {
    pub id: String,
    pub name: String,
    pub expenses: usize,
    pub tasks: usize,
}

pub fn query_rows(app: &App) -> Vec<ParticipantRow> {
    let trip = &app.trip;
    trip.participants()
        .iter()
        .map(|p| ParticipantRow {
            id: p.id.short(),
            name: p.name.clone(),
            expenses: trip.expenses().iter().filter(|e| e.involves(p.id)).count(),
            tasks: trip.tasks().iter().filter(|t| t.is_assigned(p.id)).count(),
        })
        .collect()
}
