// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Login gate.
//!
//! Deciding who is an admin is delegated to a [`RoleResolver`]; the crate
//! ships [`AdminNameResolver`], which treats one configured login name as
//! the admin and every roster name as a member.

use crate::error::TripError;
use crate::models::ParticipantId;
use crate::trip::Trip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Member(ParticipantId),
}

pub trait RoleResolver {
    fn resolve(&self, trip: &Trip, username: &str) -> Result<Role, TripError>;
}

#[derive(Debug, Clone)]
pub struct AdminNameResolver {
    admin_username: String,
}

impl AdminNameResolver {
    pub fn new(admin_username: impl Into<String>) -> Self {
        Self {
            admin_username: admin_username.into(),
        }
    }
}

impl Default for AdminNameResolver {
    fn default() -> Self {
        Self::new("admin")
    }
}

impl RoleResolver for AdminNameResolver {
    fn resolve(&self, trip: &Trip, username: &str) -> Result<Role, TripError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(TripError::EmptyField("Username"));
        }
        if username == self.admin_username {
            return Ok(Role::Admin);
        }
        trip.resolve_participant(username).map(Role::Member)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<(String, Role)>,
}

impl Session {
    pub fn login(
        &mut self,
        resolver: &dyn RoleResolver,
        trip: &Trip,
        username: &str,
    ) -> Result<Role, TripError> {
        let role = resolver.resolve(trip, username)?;
        tracing::info!(username = username.trim(), ?role, "logged in");
        self.current = Some((username.trim().to_string(), role));
        Ok(role)
    }

    /// Returns the name that was logged in, if any.
    pub fn logout(&mut self) -> Option<String> {
        let prev = self.current.take().map(|(name, _)| name);
        if let Some(name) = &prev {
            tracing::info!(username = %name, "logged out");
        }
        prev
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|(_, role)| *role)
    }

    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|(name, _)| name.as_str())
    }
}
