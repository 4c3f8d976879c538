// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::NewTask;
use crate::utils::{join_names, maybe_print_json, pretty_table, resolve_names};
use anyhow::Result;
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    app.require_admin()?;
    match m.subcommand() {
        Some(("add", sub)) => {
            let description = sub.get_one::<String>("description").unwrap();
            let assigned_to =
                resolve_names(&app.trip, sub.get_many::<String>("assign").unwrap())?;
            let id = app.trip.add_task(NewTask {
                description: description.clone(),
                assigned_to,
            })?;
            println!("Added task {} '{}'", id.short(), description.trim());
        }
        Some(("rm", sub)) => {
            let id = app.trip.resolve_task(sub.get_one::<String>("id").unwrap())?;
            let removed = app.trip.remove_task(id)?;
            println!("Removed task '{}'", removed.description);
        }
        Some(("list", sub)) => {
            let data = query_rows(app);
            if !maybe_print_json(sub.get_flag("json"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|r| vec![r.id, r.description, r.assigned_to, r.completed_by])
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Task", "Assigned to", "Done by"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub description: String,
    pub assigned_to: String,
    pub completed_by: String,
}

pub fn query_rows(app: &App) -> Vec<TaskRow> {
    app.trip
        .tasks()
        .iter()
        .map(|t| TaskRow {
            id: t.id.short(),
            description: t.description.clone(),
            assigned_to: join_names(&app.trip, &t.assigned_to, ", "),
            completed_by: join_names(&app.trip, &t.completed_by, ", "),
        })
        .collect()
}
