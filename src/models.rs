// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Leading 8 hex digits, as shown in listings.
            pub fn short(&self) -> String {
                let mut s = self.0.simple().to_string();
                s.truncate(8);
                s
            }

            pub(crate) fn matches_prefix(&self, prefix: &str) -> bool {
                let wanted: String = prefix
                    .trim()
                    .chars()
                    .filter(|c| *c != '-')
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                !wanted.is_empty() && self.0.simple().to_string().starts_with(&wanted)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Stable participant identity; the display name can change freely.
    ParticipantId
);
entity_id!(ExpenseId);
entity_id!(PaymentId);
entity_id!(TaskId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Decimal,
    pub paid_by: ParticipantId,
    pub split_between: Vec<ParticipantId>,
}

impl Expense {
    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.split_between.contains(&participant)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Decimal,
    pub paid_by: ParticipantId,
    pub payment_method: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub assigned_to: Vec<ParticipantId>,
    pub completed_by: Vec<ParticipantId>,
}

impl Task {
    pub fn is_assigned(&self, participant: ParticipantId) -> bool {
        self.assigned_to.contains(&participant)
    }

    pub fn is_completed_by(&self, participant: ParticipantId) -> bool {
        self.completed_by.contains(&participant)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

// Form payloads: everything except the generated id.

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub paid_by: ParticipantId,
    pub split_between: Vec<ParticipantId>,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub amount: Decimal,
    pub paid_by: ParticipantId,
    pub payment_method: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub description: String,
    pub assigned_to: Vec<ParticipantId>,
}
