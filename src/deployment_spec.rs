// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::deployment_mode::{DeploymentMode, Environment};
use crate::error::Error;
use crate::server_group::ServerGroup;
use crate::server_group_spec::ServerGroupSpec;
use crate::validation::Validator;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(group = "database.arangodb.com", version = "v1alpha", kind = "ArangoDeployment")]
#[kube(shortname = "arangodb", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DeploymentMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub sync: SyncSpec,
    #[serde(default)]
    pub single: ServerGroupSpec,
    #[serde(default)]
    pub agents: ServerGroupSpec,
    #[serde(default)]
    pub dbservers: ServerGroupSpec,
    #[serde(default)]
    pub coordinators: ServerGroupSpec,
    #[serde(default)]
    pub syncmasters: ServerGroupSpec,
    #[serde(default)]
    pub syncworkers: ServerGroupSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct SyncSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl SyncSpec {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}

impl DeploymentSpec {
    pub fn mode(&self) -> DeploymentMode {
        self.mode.unwrap_or_default()
    }

    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_default()
    }

    pub fn group_spec(&self, group: ServerGroup) -> &ServerGroupSpec {
        match group {
            ServerGroup::Single => &self.single,
            ServerGroup::Agents => &self.agents,
            ServerGroup::DBServers => &self.dbservers,
            ServerGroup::Coordinators => &self.coordinators,
            ServerGroup::SyncMasters => &self.syncmasters,
            ServerGroup::SyncWorkers => &self.syncworkers,
        }
    }

    pub fn group_spec_mut(&mut self, group: ServerGroup) -> &mut ServerGroupSpec {
        match group {
            ServerGroup::Single => &mut self.single,
            ServerGroup::Agents => &mut self.agents,
            ServerGroup::DBServers => &mut self.dbservers,
            ServerGroup::Coordinators => &mut self.coordinators,
            ServerGroup::SyncMasters => &mut self.syncmasters,
            ServerGroup::SyncWorkers => &mut self.syncworkers,
        }
    }

    /// Whether the deployment mode instantiates servers of the given group.
    pub fn is_group_used(&self, group: ServerGroup) -> bool {
        let mode = self.mode();
        match group {
            ServerGroup::Single => {
                matches!(mode, DeploymentMode::Single | DeploymentMode::ActiveFailover)
            }
            ServerGroup::Agents => {
                matches!(mode, DeploymentMode::ActiveFailover | DeploymentMode::Cluster)
            }
            ServerGroup::DBServers | ServerGroup::Coordinators => mode == DeploymentMode::Cluster,
            ServerGroup::SyncMasters | ServerGroup::SyncWorkers => {
                mode == DeploymentMode::Cluster && self.sync.is_enabled()
            }
        }
    }

    /// Fill in missing defaults for the deployment and all of its groups.
    pub fn set_defaults(&mut self) {
        self.mode.get_or_insert_with(DeploymentMode::default);
        self.environment.get_or_insert_with(Environment::default);
        let mode = self.mode();
        for group in ServerGroup::ALL {
            let used = self.is_group_used(group);
            self.group_spec_mut(group).set_defaults(group, used, mode);
        }
    }

    /// Fill unset fields with the values of the given template deployment.
    pub fn set_defaults_from(&mut self, source: &DeploymentSpec) {
        if self.mode.is_none() {
            self.mode = source.mode;
        }
        if self.environment.is_none() {
            self.environment = source.environment;
        }
        if self.sync.enabled.is_none() {
            self.sync.enabled = source.sync.enabled;
        }
        for group in ServerGroup::ALL {
            self.group_spec_mut(group)
                .set_defaults_from(source.group_spec(group));
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.validate_with(&Validator::default())
    }

    /// Validate every group in a fixed order, stopping at the first violation.
    pub fn validate_with(&self, validator: &Validator<'_>) -> Result<(), Error> {
        let (mode, env) = (self.mode(), self.environment());
        for group in ServerGroup::ALL {
            validator
                .validate(self.group_spec(group), group, self.is_group_used(group), mode, env)
                .map_err(|source| Error::InvalidGroup { group, source })?;
        }
        Ok(())
    }

    /// Replace all immutable fields of `target` with the values of this
    /// (current) spec. Returns the paths of the fields that were reset.
    pub fn reset_immutable_fields(&self, field_prefix: &str, target: &mut DeploymentSpec) -> Vec<String> {
        let mut reset_fields = Vec::new();
        if self.mode() != target.mode() {
            target.mode = self.mode;
            let field = format!("{}.mode", field_prefix);
            info!("Reset immutable field {} to {}", field, self.mode());
            reset_fields.push(field);
        }
        for group in ServerGroup::ALL {
            let prefix = format!("{}.{}", field_prefix, group.as_field());
            reset_fields.extend(self.group_spec(group).reset_immutable_fields(
                group,
                &prefix,
                target.group_spec_mut(group),
            ));
        }
        reset_fields
    }
}
