// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::deployment_mode::{DeploymentMode, Environment};
use crate::error::{ResourceNameError, ValidationError, ValidationErrorKind};
use crate::options::{CriticalOptionSet, CriticalOptions};
use crate::resource_name::{KubernetesNameValidator, ResourceNameValidator};
use crate::server_group::ServerGroup;
use crate::server_group_spec::ServerGroupSpec;
use crate::validation::Validator;

fn spec_with_count(count: i32) -> ServerGroupSpec {
    ServerGroupSpec {
        count: Some(count),
        ..ServerGroupSpec::default()
    }
}

fn validate(
    spec: &ServerGroupSpec,
    group: ServerGroup,
    mode: DeploymentMode,
    env: Environment,
) -> Result<(), ValidationError> {
    spec.validate(group, true, mode, env)
}

struct AcceptAllNames;

impl ResourceNameValidator for AcceptAllNames {
    fn validate_resource_name(&self, _name: &str) -> Result<(), ResourceNameError> {
        Ok(())
    }
}

struct PrefixOptions(&'static str);

impl CriticalOptions for PrefixOptions {
    fn is_critical_option(&self, key: &str) -> bool {
        key.starts_with(self.0)
    }
}

#[test]
pub fn test_defaulted_agents_accepted_in_production() {
    let mut spec = ServerGroupSpec::default();
    spec.set_defaults(ServerGroup::Agents, true, DeploymentMode::Cluster);
    assert_eq!(spec.count, Some(3));
    assert_eq!(
        validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Production),
        Ok(())
    );
}

#[test]
pub fn test_agents_below_policy_minimum() {
    let mut spec = ServerGroupSpec::default();
    spec.set_defaults(ServerGroup::Agents, true, DeploymentMode::Cluster);
    spec.count = Some(2);
    let err = validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Production)
        .unwrap_err();
    assert_eq!(err, ValidationError::CountBelowPolicyMinimum { count: 2, minimum: 3 });
    assert_eq!(err.kind(), ValidationErrorKind::Policy);
    let msg = err.to_string();
    assert!(msg.contains("2") && msg.contains(">= 3"));
    assert!(msg.contains("implicit minimum"));
}

#[test]
pub fn test_single_server_limited_to_one() {
    let mut spec = spec_with_count(2);
    spec.max_count = Some(10);
    let err = validate(&spec, ServerGroup::Single, DeploymentMode::Single, Environment::Development)
        .unwrap_err();
    assert_eq!(err, ValidationError::SingleCountAboveOne { count: 2 });
    assert_eq!(err.kind(), ValidationErrorKind::Policy);

    assert_eq!(
        validate(&spec, ServerGroup::Single, DeploymentMode::ActiveFailover, Environment::Development),
        Ok(())
    );
}

#[test]
pub fn test_unused_group_requires_zero_count() {
    let spec = spec_with_count(5);
    let err = spec
        .validate(ServerGroup::Coordinators, false, DeploymentMode::Single, Environment::Production)
        .unwrap_err();
    assert_eq!(err, ValidationError::CountForUnusedGroup(5));
    assert_eq!(err.kind(), ValidationErrorKind::CountMismatch);

    assert_eq!(
        spec_with_count(0).validate(
            ServerGroup::Coordinators,
            false,
            DeploymentMode::Single,
            Environment::Production
        ),
        Ok(())
    );
    assert_eq!(
        ServerGroupSpec::default().validate(
            ServerGroup::Coordinators,
            false,
            DeploymentMode::Single,
            Environment::Production
        ),
        Ok(())
    );
}

#[test]
pub fn test_unused_group_skips_other_checks() {
    let spec = ServerGroupSpec {
        min_count: Some(5),
        max_count: Some(1),
        args: Some(vec!["database.directory=/tmp".to_string()]),
        ..ServerGroupSpec::default()
    };
    assert_eq!(
        spec.validate(ServerGroup::DBServers, false, DeploymentMode::Single, Environment::Production),
        Ok(())
    );
}

#[test]
pub fn test_critical_arangod_option() {
    let mut spec = spec_with_count(3);
    spec.args = Some(vec![
        "--log.level=debug".to_string(),
        "database.auto-upgrade=true".to_string(),
    ]);
    let err = validate(&spec, ServerGroup::DBServers, DeploymentMode::Cluster, Environment::Production)
        .unwrap_err();
    assert_eq!(err, ValidationError::CriticalOption("database.auto-upgrade".to_string()));
    assert_eq!(err.kind(), ValidationErrorKind::CriticalOption);
    assert!(err.to_string().contains("'database.auto-upgrade'"));
}

#[test]
pub fn test_critical_option_key_is_trimmed_and_dashed() {
    let mut spec = spec_with_count(3);
    spec.args = Some(vec![" --server.endpoint = tcp://[::]:8529".to_string()]);
    let err = validate(&spec, ServerGroup::Coordinators, DeploymentMode::Cluster, Environment::Development)
        .unwrap_err();
    assert_eq!(err, ValidationError::CriticalOption("--server.endpoint".to_string()));

    spec.args = Some(vec!["--agency.supervision".to_string()]);
    let err = validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Development)
        .unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::CriticalOption);
}

#[test]
pub fn test_option_tables_follow_process_family() {
    let mut spec = spec_with_count(2);
    spec.args = Some(vec!["database.directory=/data".to_string()]);
    assert_eq!(
        validate(&spec, ServerGroup::SyncMasters, DeploymentMode::Cluster, Environment::Production),
        Ok(())
    );

    spec.args = Some(vec!["mq.type=direct".to_string()]);
    assert_eq!(
        validate(&spec, ServerGroup::SyncWorkers, DeploymentMode::Cluster, Environment::Production),
        Err(ValidationError::CriticalOption("mq.type".to_string()))
    );
    assert_eq!(
        validate(&spec, ServerGroup::DBServers, DeploymentMode::Cluster, Environment::Production),
        Ok(())
    );
}

#[test]
pub fn test_count_range_checks() {
    let mut spec = spec_with_count(4);
    spec.min_count = Some(5);
    spec.max_count = Some(3);
    let err = validate(&spec, ServerGroup::Coordinators, DeploymentMode::Cluster, Environment::Development)
        .unwrap_err();
    assert_eq!(err, ValidationError::MinCountAboveMaxCount { min: 5, max: 3 });
    assert_eq!(err.kind(), ValidationErrorKind::Range);

    let mut spec = spec_with_count(2);
    spec.min_count = Some(3);
    let err = validate(&spec, ServerGroup::Coordinators, DeploymentMode::Cluster, Environment::Development)
        .unwrap_err();
    assert_eq!(err, ValidationError::CountBelowMinCount { count: 2, min: 3 });
    assert!(!err.to_string().contains("implicit minimum"));

    let mut spec = spec_with_count(5);
    spec.max_count = Some(4);
    let err = validate(&spec, ServerGroup::Coordinators, DeploymentMode::Cluster, Environment::Development)
        .unwrap_err();
    assert_eq!(err, ValidationError::CountAboveMaxCount { count: 5, max: 4 });
    assert_eq!(err.kind(), ValidationErrorKind::Range);
}

#[test]
pub fn test_unset_count_below_default_min_count() {
    let err = validate(
        &ServerGroupSpec::default(),
        ServerGroup::Coordinators,
        DeploymentMode::Cluster,
        Environment::Development,
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::CountBelowMinCount { count: 0, min: 1 });
}

#[test]
pub fn test_invalid_names() {
    let mut spec = spec_with_count(3);
    spec.service_account_name = Some("Arango_SA".to_string());
    let err = validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Production)
        .unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::Name);
    assert!(err.to_string().starts_with("Invalid serviceAccountName"));

    let mut spec = spec_with_count(3);
    spec.storage_class_name = Some("-fast".to_string());
    let err = validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Production)
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidName {
            field: "storageClassName",
            source: ResourceNameError::InvalidFormat("-fast".to_string()),
        }
    );

    let mut spec = spec_with_count(3);
    spec.service_account_name = Some(String::new());
    spec.storage_class_name = Some("fast-ssd".to_string());
    assert_eq!(
        validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Production),
        Ok(())
    );
}

#[test]
pub fn test_first_violation_wins() {
    let spec = ServerGroupSpec {
        count: Some(1),
        min_count: Some(4),
        max_count: Some(2),
        service_account_name: Some("BAD".to_string()),
        args: Some(vec!["agency.size=5".to_string()]),
        ..ServerGroupSpec::default()
    };
    let err = validate(&spec, ServerGroup::Agents, DeploymentMode::Cluster, Environment::Production)
        .unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::Range);
}

#[test]
pub fn test_injected_classifiers() {
    let deny_log = PrefixOptions("log.");
    let no_sync_options = CriticalOptionSet::new(&[]);
    let validator = Validator::new(&deny_log, &no_sync_options, &AcceptAllNames);

    let mut spec = spec_with_count(3);
    spec.service_account_name = Some("Not A Valid Name".to_string());
    spec.args = Some(vec!["database.auto-upgrade=true".to_string()]);
    assert_eq!(
        validator.validate(&spec, ServerGroup::DBServers, true, DeploymentMode::Cluster, Environment::Production),
        Ok(())
    );

    spec.args = Some(vec!["log.level=trace".to_string()]);
    assert_eq!(
        validator.validate(&spec, ServerGroup::DBServers, true, DeploymentMode::Cluster, Environment::Production),
        Err(ValidationError::CriticalOption("log.level".to_string()))
    );

    let strict_names = KubernetesNameValidator;
    let validator = Validator::new(&deny_log, &no_sync_options, &strict_names);
    spec.args = None;
    assert_eq!(
        validator
            .validate(&spec, ServerGroup::DBServers, true, DeploymentMode::Cluster, Environment::Production)
            .unwrap_err()
            .kind(),
        ValidationErrorKind::Name
    );
}

#[test]
pub fn test_defaults_then_validate_is_stable() {
    for group in ServerGroup::ALL {
        let mut spec = ServerGroupSpec::default();
        spec.set_defaults(group, true, DeploymentMode::Cluster);
        assert_eq!(
            validate(&spec, group, DeploymentMode::Cluster, Environment::Production),
            Ok(())
        );
        let defaulted = spec.clone();
        spec.set_defaults(group, true, DeploymentMode::Cluster);
        assert_eq!(spec, defaulted);
        assert_eq!(
            validate(&spec, group, DeploymentMode::Cluster, Environment::Production),
            Ok(())
        );
    }
}
