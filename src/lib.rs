// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
pub mod admission;
pub mod config;
pub mod count_policy;
pub mod defaults;
pub mod deployment_mode;
pub mod deployment_spec;
pub mod error;
pub mod immutable;
pub mod options;
pub mod resource_name;
pub mod server_group;
pub mod server_group_spec;
pub mod validation;


pub use deployment_mode::{DeploymentMode, Environment};
pub use deployment_spec::{ArangoDeployment, DeploymentSpec, SyncSpec};
pub use error::{Error, ResourceNameError, ValidationError, ValidationErrorKind};
pub use server_group::ServerGroup;
pub use server_group_spec::ServerGroupSpec;
pub use validation::Validator;
