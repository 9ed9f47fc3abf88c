// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::server_group::ServerGroup;
use thiserror::Error;

/// Coarse classification of a rejected group spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Range,
    Policy,
    Name,
    CriticalOption,
    CountMismatch,
}

/// Reason a group spec was rejected. Every variant describes an invalid desired
/// state, never a transient fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid min/maxCount. Min ({min}) bigger than Max ({max})")]
    MinCountAboveMaxCount { min: i32, max: i32 },

    #[error("Invalid count value {count}. Expected >= {min}")]
    CountBelowMinCount { count: i32, min: i32 },

    #[error("Invalid count value {count}. Expected <= {max}")]
    CountAboveMaxCount { count: i32, max: i32 },

    #[error("Invalid count value {count}. Expected >= {minimum} (implicit minimum; by deployment mode)")]
    CountBelowPolicyMinimum { count: i32, minimum: i32 },

    #[error("Invalid count value {count}. Expected 1")]
    SingleCountAboveOne { count: i32 },

    #[error("Invalid {field}: {source}")]
    InvalidName {
        field: &'static str,
        #[source]
        source: ResourceNameError,
    },

    #[error("Critical option '{0}' cannot be overridden")]
    CriticalOption(String),

    #[error("Invalid count value {0} for un-used group. Expected 0")]
    CountForUnusedGroup(i32),
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MinCountAboveMaxCount { .. }
            | ValidationError::CountBelowMinCount { .. }
            | ValidationError::CountAboveMaxCount { .. } => ValidationErrorKind::Range,
            ValidationError::CountBelowPolicyMinimum { .. }
            | ValidationError::SingleCountAboveOne { .. } => ValidationErrorKind::Policy,
            ValidationError::InvalidName { .. } => ValidationErrorKind::Name,
            ValidationError::CriticalOption(_) => ValidationErrorKind::CriticalOption,
            ValidationError::CountForUnusedGroup(_) => ValidationErrorKind::CountMismatch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceNameError {
    #[error("Name '{name}' is too long ({len} > {max})")]
    TooLong { name: String, len: usize, max: usize },

    #[error("Name '{0}' is not lowercase")]
    NotLowercase(String),

    #[error("Name '{0}' does not match '[a-z0-9]([-a-z0-9]*[a-z0-9])?'")]
    InvalidFormat(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {group} spec: {source}")]
    InvalidGroup {
        group: ServerGroup,
        #[source]
        source: ValidationError,
    },

    #[error("Missing 'spec' field in the object")]
    MissingSpec,

    #[error("Failed to parse deployment spec: {0}")]
    ParseSpecFailed(#[from] serde_json::Error),

    #[error("Invalid configuration {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
}

impl Error {
    /// The group-level rejection behind this error, if any.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Error::InvalidGroup { source, .. } => Some(source),
            _ => None,
        }
    }
}
