// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tripclip::error::TripError;
use tripclip::session::{AdminNameResolver, Role, RoleResolver, Session};
use tripclip::trip::Trip;

#[test]
fn resolver_maps_admin_member_and_unknown() {
    let trip = Trip::demo();
    let resolver = AdminNameResolver::default();
    assert_eq!(resolver.resolve(&trip, "admin"), Ok(Role::Admin));
    let alice = trip.resolve_participant("Alice").unwrap();
    assert_eq!(resolver.resolve(&trip, " Alice "), Ok(Role::Member(alice)));
    assert_eq!(
        resolver.resolve(&trip, "Mallory"),
        Err(TripError::UnknownParticipant("Mallory".into()))
    );
    assert_eq!(resolver.resolve(&trip, ""), Err(TripError::EmptyField("Username")));
}

#[test]
fn admin_name_is_configurable() {
    let trip = Trip::demo();
    let resolver = AdminNameResolver::new("organizer");
    assert_eq!(resolver.resolve(&trip, "organizer"), Ok(Role::Admin));
    assert!(resolver.resolve(&trip, "admin").is_err());
}

struct EveryoneIsAdmin;

impl RoleResolver for EveryoneIsAdmin {
    fn resolve(&self, _trip: &Trip, _username: &str) -> Result<Role, TripError> {
        Ok(Role::Admin)
    }
}

#[test]
fn session_login_logout() {
    let trip = Trip::demo();
    let mut session = Session::default();
    assert!(session.role().is_none());

    session.login(&EveryoneIsAdmin, &trip, " anyone ").unwrap();
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.username(), Some("anyone"));

    assert_eq!(session.logout(), Some("anyone".to_string()));
    assert!(session.role().is_none());
    assert_eq!(session.logout(), None);
}

#[test]
fn failed_login_keeps_previous_session() {
    let trip = Trip::demo();
    let resolver = AdminNameResolver::default();
    let mut session = Session::default();
    session.login(&resolver, &trip, "Bob").unwrap();
    assert!(session.login(&resolver, &trip, "Nobody").is_err());
    assert_eq!(session.username(), Some("Bob"));
}
