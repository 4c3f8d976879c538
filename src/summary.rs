// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{Balance, compute_balance, share_of};
use crate::models::{Expense, ExpenseId, ParticipantId, Task, TaskId};
use crate::trip::Trip;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn expenses_for(participant: ParticipantId, expenses: &[Expense]) -> Vec<&Expense> {
    expenses.iter().filter(|e| e.involves(participant)).collect()
}

pub fn tasks_for(participant: ParticipantId, tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_assigned(participant)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseLine {
    pub id: ExpenseId,
    pub description: String,
    pub share: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskLine {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

/// Everything the member dashboard shows for one participant.
#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub participant: ParticipantId,
    pub name: String,
    pub balance: Balance,
    pub expenses: Vec<ExpenseLine>,
    pub tasks: Vec<TaskLine>,
}

pub fn member_summary(trip: &Trip, participant: ParticipantId) -> MemberSummary {
    let expenses = expenses_for(participant, trip.expenses())
        .into_iter()
        .map(|e| ExpenseLine {
            id: e.id,
            description: e.description.clone(),
            share: share_of(e).unwrap_or(Decimal::ZERO),
        })
        .collect();
    let tasks = tasks_for(participant, trip.tasks())
        .into_iter()
        .map(|t| TaskLine {
            id: t.id,
            description: t.description.clone(),
            completed: t.is_completed_by(participant),
        })
        .collect();
    MemberSummary {
        participant,
        name: trip.participant_name(participant).to_string(),
        balance: compute_balance(participant, trip.expenses()),
        expenses,
        tasks,
    }
}
