// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tripclip::app::App;
use tripclip::commands::importer::load_trip;
use tripclip::settings::Settings;
use tripclip::shell::execute;
use tripclip::trip::Trip;

fn admin_app() -> App {
    let mut app = App::new(Settings::default(), Trip::demo());
    execute(&mut app, "login admin").unwrap();
    app
}

#[test]
fn export_trip_round_trips_through_import() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("trip.json");
    let mut app = admin_app();
    execute(
        &mut app,
        "payment add --amount 12.5 --paid-by Bob --method Card --date 2023-09-04",
    )
    .unwrap();
    execute(&mut app, &format!("export trip --out '{}'", out.display())).unwrap();

    let loaded = load_trip(&out).unwrap();
    assert_eq!(loaded, app.trip);

    let mut fresh = App::new(Settings::default(), Trip::default());
    execute(&mut fresh, "login admin").unwrap();
    execute(&mut fresh, &format!("import trip --path '{}'", out.display())).unwrap();
    assert_eq!(fresh.trip, app.trip);
    assert_eq!(fresh.trip.payments().len(), 1);
}

#[test]
fn export_expenses_csv_uses_names() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.csv");
    let mut app = admin_app();
    execute(
        &mut app,
        &format!("export expenses --format csv --out '{}'", out.display()),
    )
    .unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["id", "description", "amount", "paid_by", "split_between"]
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[2][1], "Museum Tickets");
    assert_eq!(&records[2][2], "60");
    assert_eq!(&records[2][3], "Charlie");
    assert_eq!(&records[2][4], "Alice;Bob;Charlie");
}

#[test]
fn export_expenses_json() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.json");
    let mut app = admin_app();
    execute(
        &mut app,
        &format!("export expenses --format json --out '{}'", out.display()),
    )
    .unwrap();

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["description"], "Hotel Booking");
    assert_eq!(items[0]["amount"], "800");
    assert_eq!(items[0]["paid_by"], "Alice");
    assert_eq!(items[0]["split_between"].as_array().unwrap().len(), 4);
}

#[test]
fn import_rejects_invalid_file() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let mut app = admin_app();
    let before = app.trip.clone();
    let err = execute(&mut app, &format!("import trip --path '{}'", bad.display())).unwrap_err();
    assert!(err.to_string().contains("Invalid trip file"));
    assert_eq!(app.trip, before);
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.xml");
    let mut app = admin_app();
    execute(
        &mut app,
        &format!("export expenses --format xml --out '{}'", out.display()),
    )
    .unwrap();
    assert!(!out.exists());

    execute(&mut app, &format!("export expenses --out '{}'", out.display())).unwrap();
    let mut rdr = csv::Reader::from_path(&out).unwrap();
    assert_eq!(rdr.records().count(), 3);
}
