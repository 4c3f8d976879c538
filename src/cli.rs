// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, ValueEnum, value_parser};

/// File layout for `export expenses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Process arguments, parsed once at startup.
pub fn build_app() -> Command {
    Command::new("tripclip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Group trip planner: participants, shared expenses, payments, and tasks")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Settings file (TOML); defaults to the platform config dir"),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .action(ArgAction::SetTrue)
                .help("Start with the sample Paris trip loaded"),
        )
        .arg(Arg::new("currency").long("currency").help("Currency prefix for amounts"))
        .arg(Arg::new("admin").long("admin").help("Login name granted the admin view"))
        .arg(Arg::new("log-level").long("log-level").help("Log filter when RUST_LOG is unset"))
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

fn names_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .required(true)
        .num_args(1..)
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help(help)
}

/// Commands accepted by the interactive shell, one line at a time.
pub fn build_cli() -> Command {
    Command::new("tripclip")
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("login")
                .about("Start a session as the admin or as a participant")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(Command::new("logout").about("End the current session"))
        .subcommand(Command::new("whoami").about("Show the current session"))
        .subcommand(
            Command::new("quit")
                .visible_alias("exit")
                .about("Leave the shell; the trip is discarded"),
        )
        .subcommand(
            Command::new("trip")
                .about("Trip details")
                .subcommand_required(true)
                .subcommand(Command::new("show").arg(json_flag()))
                .subcommand(
                    Command::new("set")
                        .about("Update destination and dates (admin)")
                        .arg(Arg::new("destination").long("destination"))
                        .arg(Arg::new("start").long("start").help("YYYY-MM-DD"))
                        .arg(Arg::new("end").long("end").help("YYYY-MM-DD")),
                ),
        )
        .subcommand(
            Command::new("participant")
                .about("Manage the roster (admin)")
                .subcommand_required(true)
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true)))
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("new_name").required(true)),
                )
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("expense")
                .about("Shared expenses (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("paid-by").long("paid-by").required(true))
                        .arg(names_arg(
                            "split",
                            "split",
                            "Participants sharing the cost, comma separated",
                        )),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("payment")
                .about("Direct payments (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("paid-by").long("paid-by").required(true))
                        .arg(Arg::new("method").long("method").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        ),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("task")
                .about("Trip tasks (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(names_arg(
                            "assign",
                            "assign",
                            "Participants responsible, comma separated",
                        )),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views (admin)")
                .subcommand_required(true)
                .subcommand(Command::new("balances").arg(json_flag())),
        )
        .subcommand(
            Command::new("me")
                .about("Your own balance and tasks (participant)")
                .subcommand_required(true)
                .subcommand(Command::new("balance").arg(json_flag()))
                .subcommand(Command::new("expenses").arg(json_flag()))
                .subcommand(Command::new("tasks").arg(json_flag()))
                .subcommand(Command::new("toggle").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("export")
                .about("Write the in-memory trip to a file (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("trip").arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_parser(value_parser!(ExportFormat)),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the in-memory trip from a JSON export (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("trip").arg(Arg::new("path").long("path").required(true)),
                ),
        )
}
