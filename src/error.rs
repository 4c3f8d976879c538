// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Validation failures raised by [`Trip`](crate::trip::Trip) mutators.
//!
//! A command that fails leaves the trip untouched; the variant only says why.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("Invalid amount {0}: must be greater than zero")]
    InvalidAmount(Decimal),
    #[error("Amount {0} is above the limit of {1}")]
    AmountTooLarge(Decimal, Decimal),
    #[error("Unknown participant '{0}'")]
    UnknownParticipant(String),
    #[error("Participant '{0}' already exists")]
    DuplicateParticipant(String),
    #[error("{0} needs at least one participant")]
    EmptySelection(&'static str),
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("Expense '{0}' not found")]
    ExpenseNotFound(String),
    #[error("Payment '{0}' not found")]
    PaymentNotFound(String),
    #[error("Task '{0}' not found")]
    TaskNotFound(String),
    #[error("Id prefix '{0}' matches more than one {1}")]
    AmbiguousId(String, &'static str),
    #[error("Duplicate {1} id {0}")]
    DuplicateId(String, &'static str),
    #[error("{1} lists participant {0} more than once")]
    RepeatedMember(String, &'static str),
}
