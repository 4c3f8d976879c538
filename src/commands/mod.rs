// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod session;
pub mod trip_details;
pub mod participants;
pub mod expenses;
pub mod payments;
pub mod tasks;
pub mod reports;
pub mod member;
pub mod exporter;
pub mod importer;
