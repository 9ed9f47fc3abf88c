// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use k8s_openapi::api::core::v1 as corev1;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Specification shared by all servers of one group (e.g. all agents).
///
/// Every optional field distinguishes "unset" (`None`) from an explicit value,
/// which is what lets a group spec inherit from a template and lets defaults
/// only fill what the user left out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerGroupSpec {
    /// Requested number of servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Lower limit for count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<i32>,
    /// Upper limit for count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i32>,
    /// Additional command line arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Storage class used for the volumes of the servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_resources")]
    pub resources: corev1::ResourceRequirements,
    /// Tolerations added to the pods of this group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<corev1::Toleration>>,
    /// Service account used by the pods of this group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
}

impl ServerGroupSpec {
    /// Count, or 0 when unset.
    pub fn count(&self) -> i32 {
        self.count.unwrap_or(0)
    }

    /// MinCount, or 1 when unset.
    pub fn min_count(&self) -> i32 {
        self.min_count.unwrap_or(1)
    }

    /// MaxCount, or unbounded when unset.
    pub fn max_count(&self) -> i32 {
        self.max_count.unwrap_or(i32::MAX)
    }

    pub fn args(&self) -> &[String] {
        self.args.as_deref().unwrap_or_default()
    }

    pub fn storage_class_name(&self) -> &str {
        self.storage_class_name.as_deref().unwrap_or_default()
    }

    pub fn service_account_name(&self) -> &str {
        self.service_account_name.as_deref().unwrap_or_default()
    }

    pub fn node_selector(&self) -> Option<&BTreeMap<String, String>> {
        self.node_selector.as_ref()
    }
}

fn is_unset_resources(resources: &corev1::ResourceRequirements) -> bool {
    *resources == corev1::ResourceRequirements::default()
}
