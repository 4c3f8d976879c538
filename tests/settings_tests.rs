// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::fs;
use tempfile::tempdir;
use tripclip::{cli, settings, utils};

#[test]
fn config_file_then_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tripclip.toml");
    fs::write(
        &path,
        "admin_username = \"lead\"\ncurrency_symbol = \"£\"\ndemo = true\n",
    )
    .unwrap();

    let matches = cli::build_app().get_matches_from([
        "tripclip",
        "--config",
        path.to_str().unwrap(),
        "--currency",
        " € ",
    ]);
    let s = settings::load(&matches).unwrap();
    assert_eq!(s.admin_username, "lead");
    assert_eq!(s.currency_symbol, "€");
    assert!(s.demo);
    assert_eq!(s.log_level, "warn");
}

#[test]
fn env_layer_sits_between_file_and_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tripclip.toml");
    fs::write(&path, "admin_username = \"lead\"\ncurrency_symbol = \"£\"\n").unwrap();
    let env: config::Map<String, String> = [
        ("TRIPCLIP_ADMIN_USERNAME", "captain"),
        ("TRIPCLIP_CURRENCY_SYMBOL", "¥"),
        ("TRIPCLIP_DEMO", "true"),
        ("OTHER_LOG_LEVEL", "trace"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let matches =
        cli::build_app().get_matches_from(["tripclip", "--config", path.to_str().unwrap()]);
    let s = settings::load_with_env(&matches, Some(env.clone())).unwrap();
    assert_eq!(s.admin_username, "captain");
    assert_eq!(s.currency_symbol, "¥");
    assert!(s.demo);
    assert_eq!(s.log_level, "warn");

    let matches = cli::build_app().get_matches_from([
        "tripclip",
        "--config",
        path.to_str().unwrap(),
        "--currency",
        "€",
    ]);
    let s = settings::load_with_env(&matches, Some(env)).unwrap();
    assert_eq!(s.currency_symbol, "€");
    assert_eq!(s.admin_username, "captain");
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let matches =
        cli::build_app().get_matches_from(["tripclip", "--config", missing.to_str().unwrap()]);
    assert!(settings::load(&matches).is_err());
}

#[test]
fn money_renders_two_decimals() {
    assert_eq!(utils::fmt_money(&Decimal::from(200), "$"), "$200.00");
    assert_eq!(utils::fmt_money(&Decimal::new(2005, 3), "$"), "$2.01");
    let third = Decimal::from(100) / Decimal::from(3);
    assert_eq!(utils::fmt_money(&third, "€"), "€33.33");
}

#[test]
fn parse_helpers_trim_input() {
    assert_eq!(utils::parse_decimal(" 12.50 ").unwrap(), Decimal::new(1250, 2));
    assert!(utils::parse_decimal("twelve").is_err());
    assert_eq!(utils::parse_date(" 2023-09-01 ").unwrap().to_string(), "2023-09-01");
    assert!(utils::parse_date("09/01/2023").is_err());
}
