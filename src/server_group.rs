// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a group of servers plays in a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema)]
pub enum ServerGroup {
    Single,
    Agents,
    DBServers,
    Coordinators,
    SyncMasters,
    SyncWorkers,
}

impl ServerGroup {
    pub const ALL: [ServerGroup; 6] = [
        ServerGroup::Single,
        ServerGroup::Agents,
        ServerGroup::DBServers,
        ServerGroup::Coordinators,
        ServerGroup::SyncMasters,
        ServerGroup::SyncWorkers,
    ];

    /// Name of the field holding this group in a deployment spec.
    pub fn as_field(&self) -> &'static str {
        match self {
            ServerGroup::Single => "single",
            ServerGroup::Agents => "agents",
            ServerGroup::DBServers => "dbservers",
            ServerGroup::Coordinators => "coordinators",
            ServerGroup::SyncMasters => "syncmasters",
            ServerGroup::SyncWorkers => "syncworkers",
        }
    }

    /// Servers of this group run an arangod process.
    pub fn is_arangod(&self) -> bool {
        matches!(
            self,
            ServerGroup::Single
                | ServerGroup::Agents
                | ServerGroup::DBServers
                | ServerGroup::Coordinators
        )
    }

    /// Servers of this group run an arangosync process.
    pub fn is_arangosync(&self) -> bool {
        matches!(self, ServerGroup::SyncMasters | ServerGroup::SyncWorkers)
    }
}

impl fmt::Display for ServerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_field())
    }
}
