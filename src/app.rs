// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ParticipantId;
use crate::session::{AdminNameResolver, Role, RoleResolver, Session};
use crate::settings::Settings;
use crate::trip::Trip;
use anyhow::{Result, bail};

/// Process-local state behind the shell: one trip and who is looking at it.
pub struct App {
    pub trip: Trip,
    pub session: Session,
    pub settings: Settings,
    resolver: Box<dyn RoleResolver>,
}

impl App {
    pub fn new(settings: Settings, trip: Trip) -> Self {
        let resolver = Box::new(AdminNameResolver::new(settings.admin_username.clone()));
        Self::with_resolver(settings, trip, resolver)
    }

    pub fn with_resolver(settings: Settings, trip: Trip, resolver: Box<dyn RoleResolver>) -> Self {
        Self {
            trip,
            session: Session::default(),
            settings,
            resolver,
        }
    }

    pub fn login(&mut self, username: &str) -> Result<Role> {
        Ok(self
            .session
            .login(self.resolver.as_ref(), &self.trip, username)?)
    }

    pub fn require_admin(&self) -> Result<()> {
        match self.session.role() {
            Some(Role::Admin) => Ok(()),
            Some(Role::Member(_)) => bail!("This command is only available to the admin"),
            None => bail!("Not logged in; use 'login <name>'"),
        }
    }

    pub fn require_member(&self) -> Result<ParticipantId> {
        match self.session.role() {
            Some(Role::Member(id)) => Ok(id),
            Some(Role::Admin) => bail!("The admin has no personal view; log in as a participant"),
            None => bail!("Not logged in; use 'login <name>'"),
        }
    }

    pub fn money(&self, d: &rust_decimal::Decimal) -> String {
        crate::utils::fmt_money(d, &self.settings.currency_symbol)
    }
}
