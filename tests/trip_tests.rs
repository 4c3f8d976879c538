// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use tripclip::error::TripError;
use tripclip::ledger::compute_balance;
use tripclip::models::{NewExpense, NewPayment, NewTask, ParticipantId};
use tripclip::summary::{expenses_for, member_summary, tasks_for};
use tripclip::trip::{MAX_AMOUNT, REMOVED_PARTICIPANT, Trip};

fn setup() -> (Trip, [ParticipantId; 3]) {
    let mut trip = Trip::default();
    let a = trip.add_participant("Alice").unwrap();
    let b = trip.add_participant("Bob").unwrap();
    let c = trip.add_participant("Charlie").unwrap();
    (trip, [a, b, c])
}

fn dinner(paid_by: ParticipantId, split: Vec<ParticipantId>) -> NewExpense {
    NewExpense {
        description: "Dinner".into(),
        amount: Decimal::from(90),
        paid_by,
        split_between: split,
    }
}

#[test]
fn participant_names_are_trimmed_and_unique() {
    let (mut trip, _) = setup();
    assert_eq!(
        trip.add_participant(" Alice "),
        Err(TripError::DuplicateParticipant("Alice".into()))
    );
    assert_eq!(trip.add_participant("   "), Err(TripError::EmptyField("Participant name")));
    let d = trip.add_participant("  David ").unwrap();
    assert_eq!(trip.participant_name(d), "David");
    assert_eq!(trip.participants().len(), 4);
}

#[test]
fn rename_keeps_identity() {
    let (mut trip, [a, b, _]) = setup();
    trip.add_expense(dinner(a, vec![a, b])).unwrap();
    let before = compute_balance(b, trip.expenses());

    trip.rename_participant(b, "Robert").unwrap();
    assert_eq!(trip.participant_name(b), "Robert");
    assert!(trip.participant_by_name("Bob").is_none());
    assert_eq!(compute_balance(b, trip.expenses()), before);

    assert_eq!(
        trip.rename_participant(b, "Alice"),
        Err(TripError::DuplicateParticipant("Alice".into()))
    );
    // Renaming to the current name is allowed.
    trip.rename_participant(b, "Robert").unwrap();
}

#[test]
fn add_expense_validates_and_leaves_trip_unchanged() {
    let (mut trip, [a, b, _]) = setup();
    let stranger = ParticipantId::new();
    let before = trip.clone();

    let mut bad = dinner(a, vec![a, b]);
    bad.description = " ".into();
    assert_eq!(trip.add_expense(bad), Err(TripError::EmptyField("Description")));

    let mut bad = dinner(a, vec![a, b]);
    bad.amount = Decimal::ZERO;
    assert!(matches!(trip.add_expense(bad), Err(TripError::InvalidAmount(_))));

    let mut bad = dinner(a, vec![a, b]);
    bad.amount = Decimal::from(-5);
    assert!(matches!(trip.add_expense(bad), Err(TripError::InvalidAmount(_))));

    assert!(matches!(
        trip.add_expense(dinner(stranger, vec![a])),
        Err(TripError::UnknownParticipant(_))
    ));
    assert!(matches!(
        trip.add_expense(dinner(a, vec![a, stranger])),
        Err(TripError::UnknownParticipant(_))
    ));
    assert_eq!(
        trip.add_expense(dinner(a, vec![])),
        Err(TripError::EmptySelection("Split"))
    );

    assert_eq!(trip, before);
}

#[test]
fn split_is_deduplicated_in_order() {
    let (mut trip, [a, b, c]) = setup();
    trip.add_expense(dinner(a, vec![c, a, c, b, a])).unwrap();
    assert_eq!(trip.expenses()[0].split_between, vec![c, a, b]);
    assert_eq!(compute_balance(b, trip.expenses()).owed, Decimal::from(30));
}

#[test]
fn removing_participant_keeps_history() {
    let (mut trip, [a, b, c]) = setup();
    trip.add_expense(dinner(a, vec![a, b, c])).unwrap();
    let alice_before = compute_balance(a, trip.expenses());

    let removed = trip.remove_participant(c).unwrap();
    assert_eq!(removed.name, "Charlie");
    assert_eq!(trip.participant_name(c), REMOVED_PARTICIPANT);
    assert_eq!(trip.expenses().len(), 1);
    assert_eq!(compute_balance(a, trip.expenses()), alice_before);

    // New entries can no longer reference the removed participant.
    assert!(matches!(
        trip.add_expense(dinner(a, vec![a, c])),
        Err(TripError::UnknownParticipant(_))
    ));
    assert!(matches!(
        trip.remove_participant(c),
        Err(TripError::UnknownParticipant(_))
    ));
}

#[test]
fn toggle_twice_restores_state() {
    let (mut trip, [a, b, _]) = setup();
    let t = trip
        .add_task(NewTask {
            description: "Book train".into(),
            assigned_to: vec![a, b],
        })
        .unwrap();

    assert!(trip.toggle_task_completion(t, b).unwrap());
    assert!(trip.tasks()[0].is_completed_by(b));
    assert!(!trip.toggle_task_completion(t, b).unwrap());
    assert!(trip.tasks()[0].completed_by.is_empty());

    // Each participant has their own state.
    trip.toggle_task_completion(t, a).unwrap();
    assert!(trip.tasks()[0].is_completed_by(a));
    assert!(!trip.tasks()[0].is_completed_by(b));
}

#[test]
fn toggle_unknown_task_fails() {
    let (mut trip, [a, ..]) = setup();
    let missing = tripclip::models::TaskId::new();
    assert!(matches!(
        trip.toggle_task_completion(missing, a),
        Err(TripError::TaskNotFound(_))
    ));
}

#[test]
fn task_needs_description_and_assignment() {
    let (mut trip, [a, ..]) = setup();
    assert_eq!(
        trip.add_task(NewTask {
            description: "Pack".into(),
            assigned_to: vec![],
        }),
        Err(TripError::EmptySelection("Assignment"))
    );
    assert_eq!(
        trip.add_task(NewTask {
            description: "".into(),
            assigned_to: vec![a],
        }),
        Err(TripError::EmptyField("Description"))
    );
    assert!(trip.tasks().is_empty());
}

#[test]
fn payments_validate_and_do_not_touch_ledger() {
    let (mut trip, [a, b, _]) = setup();
    trip.add_expense(dinner(a, vec![a, b])).unwrap();
    let before = compute_balance(b, trip.expenses());
    let date = NaiveDate::from_ymd_opt(2023, 9, 3).unwrap();

    let id = trip
        .add_payment(NewPayment {
            amount: Decimal::from(45),
            paid_by: b,
            payment_method: "Cash".into(),
            date,
        })
        .unwrap();
    assert_eq!(compute_balance(b, trip.expenses()), before);

    assert_eq!(
        trip.add_payment(NewPayment {
            amount: Decimal::from(1),
            paid_by: b,
            payment_method: " ".into(),
            date,
        }),
        Err(TripError::EmptyField("Payment method"))
    );
    trip.remove_payment(id).unwrap();
    assert!(trip.payments().is_empty());
    assert!(matches!(trip.remove_payment(id), Err(TripError::PaymentNotFound(_))));
}

#[test]
fn dates_must_be_ordered() {
    let mut trip = Trip::default();
    let start = NaiveDate::from_ymd_opt(2023, 9, 7).unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
    assert_eq!(
        trip.set_dates(Some(start), Some(end)),
        Err(TripError::InvalidDateRange { start, end })
    );
    trip.set_dates(Some(end), Some(start)).unwrap();
    trip.set_dates(None, Some(start)).unwrap();
    assert_eq!(trip.details().start_date, None);
    assert_eq!(trip.set_destination("  "), Err(TripError::EmptyField("Destination")));
}

#[test]
fn summary_filters_preserve_order() {
    let trip = Trip::demo();
    let david = trip.resolve_participant("David").unwrap();
    let bob = trip.resolve_participant("Bob").unwrap();

    let mine: Vec<&str> = expenses_for(david, trip.expenses())
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(mine, ["Hotel Booking", "Group Dinner"]);

    let tasks: Vec<&str> = tasks_for(bob, trip.tasks())
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(tasks, ["Pack suitcase", "Exchange currency"]);

    let s = member_summary(&trip, bob);
    assert_eq!(s.name, "Bob");
    assert_eq!(s.balance.owed, Decimal::from(220));
    assert_eq!(s.balance.contributed, Decimal::from(90));
    assert_eq!(s.expenses.len(), 3);
    assert_eq!(s.expenses[2].share, Decimal::from(20));
    assert!(!s.tasks[0].completed);
    assert!(s.tasks[1].completed);
}

#[test]
fn id_prefix_resolution() {
    let a = "00000000-0000-0000-0000-00000000000a";
    let trip: Trip = serde_json::from_value(json!({
        "details": { "destination": "Rome", "start_date": null, "end_date": null },
        "participants": [{ "id": a, "name": "Alice" }],
        "expenses": [
            { "id": "abcd1111-0000-0000-0000-000000000000", "description": "Taxi",
              "amount": "12.50", "paid_by": a, "split_between": [a] },
            { "id": "abcd2222-0000-0000-0000-000000000000", "description": "Pizza",
              "amount": "30", "paid_by": a, "split_between": [a] }
        ],
        "payments": [],
        "tasks": []
    }))
    .unwrap();
    trip.check().unwrap();

    assert_eq!(
        trip.resolve_expense("abcd"),
        Err(TripError::AmbiguousId("abcd".into(), "expense"))
    );
    let pizza = trip.resolve_expense("ABCD2").unwrap();
    assert_eq!(pizza.short(), "abcd2222");
    assert!(matches!(trip.resolve_expense("ffff"), Err(TripError::ExpenseNotFound(_))));
    assert!(matches!(trip.resolve_expense(""), Err(TripError::ExpenseNotFound(_))));
}

#[test]
fn check_rejects_broken_snapshot() {
    let a = "00000000-0000-0000-0000-00000000000a";
    let trip: Trip = serde_json::from_value(json!({
        "details": { "destination": "Rome", "start_date": null, "end_date": null },
        "participants": [{ "id": a, "name": "Alice" }],
        "expenses": [
            { "id": "abcd1111-0000-0000-0000-000000000000", "description": "Taxi",
              "amount": "-3", "paid_by": a, "split_between": [a] }
        ],
        "payments": [],
        "tasks": []
    }))
    .unwrap();
    assert!(matches!(trip.check(), Err(TripError::InvalidAmount(_))));
}

#[test]
fn amounts_above_limit_are_rejected() {
    let (mut trip, [a, b, _]) = setup();
    let before = trip.clone();

    let mut big = dinner(a, vec![a, b]);
    big.amount = Decimal::MAX;
    assert_eq!(
        trip.add_expense(big),
        Err(TripError::AmountTooLarge(Decimal::MAX, MAX_AMOUNT))
    );
    let over = MAX_AMOUNT + Decimal::ONE;
    let date = NaiveDate::from_ymd_opt(2023, 9, 2).unwrap();
    assert!(matches!(
        trip.add_payment(NewPayment {
            amount: over,
            paid_by: b,
            payment_method: "Cash".into(),
            date,
        }),
        Err(TripError::AmountTooLarge(..))
    ));
    assert_eq!(trip, before);

    let mut at_limit = dinner(a, vec![a, b]);
    at_limit.amount = MAX_AMOUNT;
    trip.add_expense(at_limit).unwrap();
}

fn snapshot(expenses: serde_json::Value, tasks: serde_json::Value) -> Trip {
    let a = "00000000-0000-0000-0000-00000000000a";
    let b = "00000000-0000-0000-0000-00000000000b";
    serde_json::from_value(json!({
        "details": { "destination": "Rome", "start_date": null, "end_date": null },
        "participants": [{ "id": a, "name": "Alice" }, { "id": b, "name": "Bob" }],
        "expenses": expenses,
        "payments": [],
        "tasks": tasks
    }))
    .unwrap()
}

#[test]
fn check_rejects_oversized_amount() {
    let a = "00000000-0000-0000-0000-00000000000a";
    let trip = snapshot(
        json!([{ "id": "abcd1111-0000-0000-0000-000000000000", "description": "Villa",
                 "amount": "1000000000001", "paid_by": a, "split_between": [a] }]),
        json!([]),
    );
    assert!(matches!(trip.check(), Err(TripError::AmountTooLarge(..))));
}

#[test]
fn check_rejects_repeated_split_and_assignment() {
    let a = "00000000-0000-0000-0000-00000000000a";
    let b = "00000000-0000-0000-0000-00000000000b";
    let trip = snapshot(
        json!([{ "id": "abcd1111-0000-0000-0000-000000000000", "description": "Taxi",
                 "amount": "90", "paid_by": a, "split_between": [a, a, b] }]),
        json!([]),
    );
    assert_eq!(
        trip.check(),
        Err(TripError::RepeatedMember(a.to_string(), "Split"))
    );

    let trip = snapshot(
        json!([]),
        json!([{ "id": "abcd3333-0000-0000-0000-000000000000", "description": "Pack",
                 "assigned_to": [b, b], "completed_by": [] }]),
    );
    assert_eq!(
        trip.check(),
        Err(TripError::RepeatedMember(b.to_string(), "Assignment"))
    );
}

#[test]
fn check_rejects_shared_entity_ids() {
    let a = "00000000-0000-0000-0000-00000000000a";
    let id = "abcd1111-0000-0000-0000-000000000000";
    let trip = snapshot(
        json!([
            { "id": id, "description": "Taxi", "amount": "10", "paid_by": a, "split_between": [a] },
            { "id": id, "description": "Lunch", "amount": "20", "paid_by": a, "split_between": [a] }
        ]),
        json!([]),
    );
    assert_eq!(
        trip.check(),
        Err(TripError::DuplicateId(id.to_string(), "expense"))
    );
}
