// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::deployment_mode::{DeploymentMode, Environment};
use crate::server_group::ServerGroup;

/// Implicit lower bound on the count of a used group.
///
/// Production requires fault tolerance for more groups than development does.
pub fn minimum_count(group: ServerGroup, mode: DeploymentMode, env: Environment) -> i32 {
    match (env, group) {
        (_, ServerGroup::Single) => {
            if mode == DeploymentMode::ActiveFailover {
                2
            } else {
                1
            }
        }
        (Environment::Production, ServerGroup::Agents) => 3,
        (
            Environment::Production,
            ServerGroup::DBServers
            | ServerGroup::Coordinators
            | ServerGroup::SyncMasters
            | ServerGroup::SyncWorkers,
        ) => 2,
        (Environment::Development, ServerGroup::DBServers) => 2,
        _ => 1,
    }
}
