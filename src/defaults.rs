// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::deployment_mode::DeploymentMode;
use crate::server_group::ServerGroup;
use crate::server_group_spec::ServerGroupSpec;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;
use tracing::debug;

pub const STORAGE_RESOURCE: &str = "storage";
pub const DEFAULT_STORAGE_REQUEST: &str = "8Gi";

impl ServerGroupSpec {
    /// Fill in missing built-in defaults.
    pub fn set_defaults(&mut self, group: ServerGroup, used: bool, mode: DeploymentMode) {
        if self.count() == 0 && used {
            let count = match group {
                ServerGroup::Single if mode == DeploymentMode::Single => 1,
                ServerGroup::Single => 2,
                _ => 3,
            };
            debug!("Defaulting {} count to {}", group, count);
            self.count = Some(count);
        } else if self.count() > 0 && !used {
            // Stale sizing of a group that is no longer part of the topology.
            debug!("Clearing count of unused group {}", group);
            self.count = None;
            self.min_count = None;
            self.max_count = None;
        }

        let has_storage = self
            .resources
            .requests
            .as_ref()
            .is_some_and(|requests| requests.contains_key(STORAGE_RESOURCE));
        if !has_storage
            && matches!(
                group,
                ServerGroup::Single | ServerGroup::Agents | ServerGroup::DBServers
            )
        {
            self.resources.requests.get_or_insert_with(BTreeMap::new).insert(
                STORAGE_RESOURCE.to_string(),
                Quantity(DEFAULT_STORAGE_REQUEST.to_string()),
            );
        }
    }

    /// Fill unset fields with the values of the given template spec.
    pub fn set_defaults_from(&mut self, source: &ServerGroupSpec) {
        if self.count.is_none() {
            self.count = source.count;
        }
        if self.min_count.is_none() {
            self.min_count = source.min_count;
        }
        if self.max_count.is_none() {
            self.max_count = source.max_count;
        }
        if self.args.is_none() {
            self.args = source.args.clone();
        }
        if self.storage_class_name.is_none() {
            self.storage_class_name = source.storage_class_name.clone();
        }
        if self.tolerations.is_none() {
            self.tolerations = source.tolerations.clone();
        }
        if self.service_account_name.is_none() {
            self.service_account_name = source.service_account_name.clone();
        }
        if self.node_selector.is_none() {
            self.node_selector = source.node_selector.clone();
        }
        merge_missing(&mut self.resources.limits, source.resources.limits.as_ref());
        merge_missing(&mut self.resources.requests, source.resources.requests.as_ref());
    }
}

/// Copy every entry of `source` whose key is absent from `target`. Existing
/// entries of `target` are left alone. `target` is only created when there is
/// something to copy.
pub fn merge_missing<K, V>(target: &mut Option<BTreeMap<K, V>>, source: Option<&BTreeMap<K, V>>)
where
    K: Ord + Clone,
    V: Clone,
{
    let Some(source) = source else {
        return;
    };
    for (key, value) in source {
        target
            .get_or_insert_with(BTreeMap::new)
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
}
