// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::count_policy::minimum_count;
use crate::deployment_mode::{DeploymentMode, Environment};
use crate::error::ValidationError;
use crate::options::{CriticalOptions, ARANGOD_CRITICAL_OPTIONS, ARANGOSYNC_CRITICAL_OPTIONS};
use crate::resource_name::{KubernetesNameValidator, ResourceNameValidator};
use crate::server_group::ServerGroup;
use crate::server_group_spec::ServerGroupSpec;

static KUBERNETES_NAMES: KubernetesNameValidator = KubernetesNameValidator;

/// Checks group specs against the count policy, the name syntax and the
/// critical option tables. The classifiers are injected so they can be
/// replaced in tests or by callers with their own option tables.
#[derive(Clone, Copy)]
pub struct Validator<'a> {
    arangod_options: &'a dyn CriticalOptions,
    arangosync_options: &'a dyn CriticalOptions,
    names: &'a dyn ResourceNameValidator,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Validator {
            arangod_options: &ARANGOD_CRITICAL_OPTIONS,
            arangosync_options: &ARANGOSYNC_CRITICAL_OPTIONS,
            names: &KUBERNETES_NAMES,
        }
    }
}

impl<'a> Validator<'a> {
    pub fn new(
        arangod_options: &'a dyn CriticalOptions,
        arangosync_options: &'a dyn CriticalOptions,
        names: &'a dyn ResourceNameValidator,
    ) -> Self {
        Validator {
            arangod_options,
            arangosync_options,
            names,
        }
    }

    /// Validate the given group spec. Returns the first violation found.
    pub fn validate(
        &self,
        spec: &ServerGroupSpec,
        group: ServerGroup,
        used: bool,
        mode: DeploymentMode,
        env: Environment,
    ) -> Result<(), ValidationError> {
        if !used {
            if spec.count() != 0 {
                return Err(ValidationError::CountForUnusedGroup(spec.count()));
            }
            return Ok(());
        }

        let (count, min, max) = (spec.count(), spec.min_count(), spec.max_count());
        if min > max {
            return Err(ValidationError::MinCountAboveMaxCount { min, max });
        }
        if count < min {
            return Err(ValidationError::CountBelowMinCount { count, min });
        }
        if count > max {
            return Err(ValidationError::CountAboveMaxCount { count, max });
        }
        let minimum = minimum_count(group, mode, env);
        if count < minimum {
            return Err(ValidationError::CountBelowPolicyMinimum { count, minimum });
        }
        if count > 1 && group == ServerGroup::Single && mode == DeploymentMode::Single {
            return Err(ValidationError::SingleCountAboveOne { count });
        }

        self.validate_optional_name("serviceAccountName", spec.service_account_name())?;
        self.validate_optional_name("storageClassName", spec.storage_class_name())?;
        self.validate_args(spec.args(), group)
    }

    fn validate_optional_name(&self, field: &'static str, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Ok(());
        }
        self.names
            .validate_resource_name(name)
            .map_err(|source| ValidationError::InvalidName { field, source })
    }

    fn validate_args(&self, args: &[String], group: ServerGroup) -> Result<(), ValidationError> {
        let options = if group.is_arangod() {
            self.arangod_options
        } else if group.is_arangosync() {
            self.arangosync_options
        } else {
            return Ok(());
        };
        for arg in args {
            let key = arg.split_once('=').map_or(arg.as_str(), |(key, _)| key).trim();
            if options.is_critical_option(key) {
                return Err(ValidationError::CriticalOption(key.to_string()));
            }
        }
        Ok(())
    }
}

impl ServerGroupSpec {
    /// Validate this spec with the built-in option tables and name syntax.
    pub fn validate(
        &self,
        group: ServerGroup,
        used: bool,
        mode: DeploymentMode,
        env: Environment,
    ) -> Result<(), ValidationError> {
        Validator::default().validate(self, group, used, mode, env)
    }
}
