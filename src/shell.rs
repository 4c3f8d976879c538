// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented front end. Every input line is one event: it is parsed,
//! run to completion against the in-memory [`App`], and its result printed.

use crate::app::App;
use crate::session::Role;
use crate::{cli, commands};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    println!("tripclip: type 'help' for commands, 'login <name>' to start");
    loop {
        print!("{}", prompt(app));
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        match execute(app, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => report_rejection(&line, &err),
        }
    }
    Ok(())
}

/// Prints a rejected command's reason to stderr; the log event is debug only.
pub fn report_rejection(line: &str, err: &anyhow::Error) {
    tracing::debug!(command = line.trim(), "rejected: {err:#}");
    eprintln!("error: {err:#}");
}

pub fn prompt(app: &App) -> String {
    match app.session.role() {
        Some(Role::Admin) => "admin> ".to_string(),
        Some(Role::Member(id)) => format!("{}> ", app.trip.participant_name(id)),
        None => "tripclip> ".to_string(),
    }
}

/// Tokenizes with shell quoting and runs one command line.
pub fn execute(app: &mut App, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }
    let mut words = shlex::split(line).context("Unbalanced quotes")?;
    words.insert(0, "tripclip".to_string());
    let matches = match cli::build_cli().try_get_matches_from(words) {
        Ok(m) => m,
        Err(e) => {
            e.print()?;
            if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                tracing::debug!(kind = ?e.kind(), "unparsed command");
            }
            return Ok(Flow::Continue);
        }
    };
    dispatch(app, &matches)
}

pub fn dispatch(app: &mut App, matches: &clap::ArgMatches) -> Result<Flow> {
    match matches.subcommand() {
        Some(("login", sub)) => commands::session::login(app, sub)?,
        Some(("logout", _)) => commands::session::logout(app)?,
        Some(("whoami", _)) => commands::session::whoami(app)?,
        Some(("quit", _)) => return Ok(Flow::Quit),
        Some(("trip", sub)) => commands::trip_details::handle(app, sub)?,
        Some(("participant", sub)) => commands::participants::handle(app, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(app, sub)?,
        Some(("payment", sub)) => commands::payments::handle(app, sub)?,
        Some(("task", sub)) => commands::tasks::handle(app, sub)?,
        Some(("report", sub)) => commands::reports::handle(app, sub)?,
        Some(("me", sub)) => commands::member::handle(app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(app, sub)?,
        Some(("import", sub)) => commands::importer::handle(app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(Flow::Continue)
}
