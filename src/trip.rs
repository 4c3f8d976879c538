// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The trip aggregate.
//!
//! [`Trip`] owns every collection of a single trip and is the only place
//! they are mutated. Each mutator validates its input first and either
//! applies the whole change or returns a [`TripError`] with the trip left
//! as it was.

use crate::error::TripError;
use crate::models::{
    Expense, ExpenseId, NewExpense, NewPayment, NewTask, Participant, ParticipantId, Payment,
    PaymentId, Task, TaskId, TripDetails,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const REMOVED_PARTICIPANT: &str = "(removed)";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    details: TripDetails,
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
    payments: Vec<Payment>,
    tasks: Vec<Task>,
}

fn require_text(value: &str, field: &'static str) -> Result<String, TripError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(TripError::EmptyField(field));
    }
    Ok(v.to_string())
}

/// Largest accepted expense or payment amount, 10^12.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

fn require_positive(amount: Decimal) -> Result<Decimal, TripError> {
    if amount <= Decimal::ZERO {
        return Err(TripError::InvalidAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(TripError::AmountTooLarge(amount, MAX_AMOUNT));
    }
    Ok(amount)
}

fn require_distinct<T: PartialEq + ToString>(
    ids: &[T],
    what: &'static str,
) -> Result<(), TripError> {
    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(TripError::RepeatedMember(id.to_string(), what));
        }
    }
    Ok(())
}

fn require_unique_ids<T, I>(
    items: &[T],
    id_of: impl Fn(&T) -> I,
    kind: &'static str,
) -> Result<(), TripError>
where
    I: PartialEq + ToString,
{
    for (i, item) in items.iter().enumerate() {
        let id = id_of(item);
        if items[..i].iter().any(|other| id_of(other) == id) {
            return Err(TripError::DuplicateId(id.to_string(), kind));
        }
    }
    Ok(())
}

fn check_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), TripError> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(TripError::InvalidDateRange { start, end });
        }
    }
    Ok(())
}

fn resolve_prefix<T, I>(
    items: &[T],
    prefix: &str,
    id_of: impl Fn(&T) -> I,
    matches: impl Fn(&I, &str) -> bool,
    kind: &'static str,
) -> Result<Option<I>, TripError> {
    let mut found = None;
    for item in items {
        let id = id_of(item);
        if matches(&id, prefix) {
            if found.is_some() {
                return Err(TripError::AmbiguousId(prefix.trim().to_string(), kind));
            }
            found = Some(id);
        }
    }
    Ok(found)
}

impl Trip {
    pub fn details(&self) -> &TripDetails {
        &self.details
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    // Details

    pub fn set_destination(&mut self, destination: &str) -> Result<(), TripError> {
        self.details.destination = require_text(destination, "Destination")?;
        tracing::debug!(destination = %self.details.destination, "destination updated");
        Ok(())
    }

    pub fn set_dates(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), TripError> {
        check_range(start, end)?;
        self.details.start_date = start;
        self.details.end_date = end;
        tracing::debug!(?start, ?end, "trip dates updated");
        Ok(())
    }

    // Participants

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        let name = name.trim();
        self.participants.iter().find(|p| p.name == name)
    }

    /// Display name, or a placeholder once the participant left the roster.
    pub fn participant_name(&self, id: ParticipantId) -> &str {
        self.participant(id)
            .map(|p| p.name.as_str())
            .unwrap_or(REMOVED_PARTICIPANT)
    }

    pub fn is_participant(&self, id: ParticipantId) -> bool {
        self.participant(id).is_some()
    }

    fn require_unique_name(
        &self,
        name: &str,
        except: Option<ParticipantId>,
    ) -> Result<(), TripError> {
        match self.participant_by_name(name) {
            Some(p) if Some(p.id) != except => {
                Err(TripError::DuplicateParticipant(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn require_member(&self, id: ParticipantId) -> Result<ParticipantId, TripError> {
        if self.is_participant(id) {
            Ok(id)
        } else {
            Err(TripError::UnknownParticipant(id.to_string()))
        }
    }

    /// De-duplicates in first-seen order and checks every id is on the roster.
    fn select_members(
        &self,
        ids: &[ParticipantId],
        what: &'static str,
    ) -> Result<Vec<ParticipantId>, TripError> {
        let mut out: Vec<ParticipantId> = Vec::with_capacity(ids.len());
        for id in ids {
            self.require_member(*id)?;
            if !out.contains(id) {
                out.push(*id);
            }
        }
        if out.is_empty() {
            return Err(TripError::EmptySelection(what));
        }
        Ok(out)
    }

    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId, TripError> {
        let name = require_text(name, "Participant name")?;
        self.require_unique_name(&name, None)?;
        let id = ParticipantId::new();
        tracing::debug!(%id, %name, "participant added");
        self.participants.push(Participant { id, name });
        Ok(id)
    }

    pub fn rename_participant(&mut self, id: ParticipantId, name: &str) -> Result<(), TripError> {
        let name = require_text(name, "Participant name")?;
        self.require_unique_name(&name, Some(id))?;
        let p = self
            .participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| TripError::UnknownParticipant(id.to_string()))?;
        tracing::debug!(%id, from = %p.name, to = %name, "participant renamed");
        p.name = name;
        Ok(())
    }

    /// Drops the participant from the roster. Expenses, payments and tasks
    /// that reference them are kept as history.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant, TripError> {
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TripError::UnknownParticipant(id.to_string()))?;
        let removed = self.participants.remove(idx);
        tracing::debug!(%id, name = %removed.name, "participant removed");
        Ok(removed)
    }

    // Expenses

    pub fn add_expense(&mut self, new: NewExpense) -> Result<ExpenseId, TripError> {
        let description = require_text(&new.description, "Description")?;
        let amount = require_positive(new.amount)?;
        let paid_by = self.require_member(new.paid_by)?;
        let split_between = self.select_members(&new.split_between, "Split")?;
        let id = ExpenseId::new();
        tracing::debug!(%id, %amount, split = split_between.len(), "expense added");
        self.expenses.push(Expense {
            id,
            description,
            amount,
            paid_by,
            split_between,
        });
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<Expense, TripError> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| TripError::ExpenseNotFound(id.to_string()))?;
        tracing::debug!(%id, "expense removed");
        Ok(self.expenses.remove(idx))
    }

    // Payments

    pub fn add_payment(&mut self, new: NewPayment) -> Result<PaymentId, TripError> {
        let amount = require_positive(new.amount)?;
        let paid_by = self.require_member(new.paid_by)?;
        let payment_method = require_text(&new.payment_method, "Payment method")?;
        let id = PaymentId::new();
        tracing::debug!(%id, %amount, "payment recorded");
        self.payments.push(Payment {
            id,
            amount,
            paid_by,
            payment_method,
            date: new.date,
        });
        Ok(id)
    }

    pub fn remove_payment(&mut self, id: PaymentId) -> Result<Payment, TripError> {
        let idx = self
            .payments
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TripError::PaymentNotFound(id.to_string()))?;
        tracing::debug!(%id, "payment removed");
        Ok(self.payments.remove(idx))
    }

    // Tasks

    pub fn add_task(&mut self, new: NewTask) -> Result<TaskId, TripError> {
        let description = require_text(&new.description, "Description")?;
        let assigned_to = self.select_members(&new.assigned_to, "Assignment")?;
        let id = TaskId::new();
        tracing::debug!(%id, assigned = assigned_to.len(), "task added");
        self.tasks.push(Task {
            id,
            description,
            assigned_to,
            completed_by: Vec::new(),
        });
        Ok(id)
    }

    pub fn remove_task(&mut self, id: TaskId) -> Result<Task, TripError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TripError::TaskNotFound(id.to_string()))?;
        tracing::debug!(%id, "task removed");
        Ok(self.tasks.remove(idx))
    }

    /// Flips `participant` in the task's `completed_by` list and returns the
    /// new state. Assignment is not checked.
    pub fn toggle_task_completion(
        &mut self,
        task: TaskId,
        participant: ParticipantId,
    ) -> Result<bool, TripError> {
        let t = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task)
            .ok_or_else(|| TripError::TaskNotFound(task.to_string()))?;
        let completed = if let Some(idx) = t.completed_by.iter().position(|p| *p == participant) {
            t.completed_by.remove(idx);
            false
        } else {
            t.completed_by.push(participant);
            true
        };
        tracing::debug!(%task, %participant, completed, "task toggled");
        Ok(completed)
    }

    // Id lookup by prefix, as typed in the shell.

    pub fn resolve_expense(&self, prefix: &str) -> Result<ExpenseId, TripError> {
        resolve_prefix(&self.expenses, prefix, |e| e.id, |id, p| id.matches_prefix(p), "expense")?
            .ok_or_else(|| TripError::ExpenseNotFound(prefix.trim().to_string()))
    }

    pub fn resolve_payment(&self, prefix: &str) -> Result<PaymentId, TripError> {
        resolve_prefix(&self.payments, prefix, |p| p.id, |id, p| id.matches_prefix(p), "payment")?
            .ok_or_else(|| TripError::PaymentNotFound(prefix.trim().to_string()))
    }

    pub fn resolve_task(&self, prefix: &str) -> Result<TaskId, TripError> {
        resolve_prefix(&self.tasks, prefix, |t| t.id, |id, p| id.matches_prefix(p), "task")?
            .ok_or_else(|| TripError::TaskNotFound(prefix.trim().to_string()))
    }

    pub fn resolve_participant(&self, name: &str) -> Result<ParticipantId, TripError> {
        self.participant_by_name(name)
            .map(|p| p.id)
            .ok_or_else(|| TripError::UnknownParticipant(name.trim().to_string()))
    }

    /// Re-checks the insert-time invariants on a trip that did not come
    /// through the mutators (e.g. a loaded snapshot). References to
    /// participants no longer on the roster are accepted.
    pub fn check(&self) -> Result<(), TripError> {
        check_range(self.details.start_date, self.details.end_date)?;
        for (i, p) in self.participants.iter().enumerate() {
            require_text(&p.name, "Participant name")?;
            if self.participants[..i].iter().any(|q| q.name == p.name || q.id == p.id) {
                return Err(TripError::DuplicateParticipant(p.name.clone()));
            }
        }
        for e in &self.expenses {
            require_text(&e.description, "Description")?;
            require_positive(e.amount)?;
            if e.split_between.is_empty() {
                return Err(TripError::EmptySelection("Split"));
            }
            require_distinct(&e.split_between, "Split")?;
        }
        require_unique_ids(&self.expenses, |e| e.id, "expense")?;
        for p in &self.payments {
            require_positive(p.amount)?;
            require_text(&p.payment_method, "Payment method")?;
        }
        require_unique_ids(&self.payments, |p| p.id, "payment")?;
        for t in &self.tasks {
            require_text(&t.description, "Description")?;
            if t.assigned_to.is_empty() {
                return Err(TripError::EmptySelection("Assignment"));
            }
            require_distinct(&t.assigned_to, "Assignment")?;
            require_distinct(&t.completed_by, "Completion list")?;
        }
        require_unique_ids(&self.tasks, |t| t.id, "task")?;
        Ok(())
    }

    /// A seeded Paris trip with four travellers and a few expenses.
    pub fn demo() -> Self {
        let names = ["Alice", "Bob", "Charlie", "David"];
        let participants: Vec<Participant> = names
            .iter()
            .map(|n| Participant {
                id: ParticipantId::new(),
                name: n.to_string(),
            })
            .collect();
        let [alice, bob, charlie, david] = [0, 1, 2, 3].map(|i| participants[i].id);
        let everyone = vec![alice, bob, charlie, david];

        let expense = |description: &str,
                       amount: i64,
                       paid_by: ParticipantId,
                       split_between: Vec<ParticipantId>| Expense {
            id: ExpenseId::new(),
            description: description.to_string(),
            amount: Decimal::new(amount, 0),
            paid_by,
            split_between,
        };
        let task = |description: &str,
                    assigned_to: Vec<ParticipantId>,
                    completed_by: Vec<ParticipantId>| Task {
            id: TaskId::new(),
            description: description.to_string(),
            assigned_to,
            completed_by,
        };

        Self {
            details: TripDetails {
                destination: "Paris, France".to_string(),
                start_date: NaiveDate::from_ymd_opt(2023, 9, 1),
                end_date: NaiveDate::from_ymd_opt(2023, 9, 7),
            },
            expenses: vec![
                expense("Hotel Booking", 800, alice, everyone.clone()),
                expense("Group Dinner", 120, bob, everyone.clone()),
                expense("Museum Tickets", 60, charlie, vec![alice, bob, charlie]),
            ],
            payments: Vec::new(),
            tasks: vec![
                task("Pack suitcase", everyone, Vec::new()),
                task("Book airport transfer", vec![alice], vec![alice]),
                task("Exchange currency", vec![bob, charlie], vec![bob]),
            ],
            participants,
        }
    }
}
