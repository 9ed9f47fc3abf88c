// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::error::ResourceNameError;

pub const MAX_RESOURCE_NAME_LEN: usize = 253;

/// Syntax check for names that refer to other Kubernetes resources
/// (service accounts, storage classes).
pub trait ResourceNameValidator: Send + Sync {
    fn validate_resource_name(&self, name: &str) -> Result<(), ResourceNameError>;
}

/// Accepts lowercase alphanumerics and `-`, starting and ending with an
/// alphanumeric character.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubernetesNameValidator;

impl ResourceNameValidator for KubernetesNameValidator {
    fn validate_resource_name(&self, name: &str) -> Result<(), ResourceNameError> {
        if name.len() > MAX_RESOURCE_NAME_LEN {
            return Err(ResourceNameError::TooLong {
                name: name.to_string(),
                len: name.len(),
                max: MAX_RESOURCE_NAME_LEN,
            });
        }
        if name.to_lowercase() != name {
            return Err(ResourceNameError::NotLowercase(name.to_string()));
        }
        let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
        let well_formed = match (name.chars().next(), name.chars().last()) {
            (Some(first), Some(last)) => {
                is_alnum(first) && is_alnum(last) && name.chars().all(|c| is_alnum(c) || c == '-')
            }
            _ => false,
        };
        if !well_formed {
            return Err(ResourceNameError::InvalidFormat(name.to_string()));
        }
        Ok(())
    }
}
