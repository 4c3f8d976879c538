// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-participant balance over the shared expense list.
//!
//! Each expense is split equally among its `split_between` group. For one
//! participant the engine keeps two independent totals:
//!
//! - `owed`: shares of expenses somebody else fronted,
//! - `contributed`: what the participant fronted beyond their own share.
//!
//! Payments are not netted here and the two totals are never offset
//! against each other. Totals saturate at `Decimal::MAX` instead of
//! overflowing.

use crate::models::{Expense, Participant, ParticipantId};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub owed: Decimal,
    pub contributed: Decimal,
}

/// Equal share of one split member, `None` when the split group is empty.
pub fn share_of(expense: &Expense) -> Option<Decimal> {
    let n = expense.split_between.len();
    if n == 0 {
        return None;
    }
    Some(expense.amount / Decimal::from(n))
}

pub fn compute_balance(participant: ParticipantId, expenses: &[Expense]) -> Balance {
    let mut balance = Balance::default();
    for expense in expenses {
        if !expense.involves(participant) {
            continue;
        }
        let Some(share) = share_of(expense) else {
            continue;
        };
        if expense.paid_by == participant {
            balance.contributed = balance.contributed.saturating_add(expense.amount - share);
        } else {
            balance.owed = balance.owed.saturating_add(share);
        }
    }
    balance
}

/// One balance per roster entry, in roster order.
pub fn balances(
    participants: &[Participant],
    expenses: &[Expense],
) -> Vec<(ParticipantId, Balance)> {
    participants
        .iter()
        .map(|p| (p.id, compute_balance(p.id, expenses)))
        .collect()
}
