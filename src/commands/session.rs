// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::session::Role;
use anyhow::Result;

pub fn login(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let prev = app.session.username().map(str::to_string);
    let role = app.login(name)?;
    if let Some(prev) = prev {
        println!("Logged out {}", prev);
    }
    match role {
        Role::Admin => println!("Welcome, admin. Trip to {}", destination(app)),
        Role::Member(id) => println!(
            "Welcome, {}. Trip to {}",
            app.trip.participant_name(id),
            destination(app)
        ),
    }
    Ok(())
}

pub fn logout(app: &mut App) -> Result<()> {
    match app.session.logout() {
        Some(name) => println!("Logged out {}", name),
        None => println!("Not logged in"),
    }
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    match app.session.role() {
        Some(Role::Admin) => println!("{} (admin)", app.session.username().unwrap_or_default()),
        Some(Role::Member(id)) => println!("{} (participant)", app.trip.participant_name(id)),
        None => println!("Not logged in"),
    }
    Ok(())
}

fn destination(app: &App) -> &str {
    let d = app.trip.details().destination.as_str();
    if d.is_empty() { "(unset)" } else { d }
}
