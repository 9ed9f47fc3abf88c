// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::error::Error;
use std::env;
use std::path::PathBuf;

pub const CERT_PATH_VAR: &str = "WEBHOOK_CERT_PATH";
pub const KEY_PATH_VAR: &str = "WEBHOOK_KEY_PATH";
pub const PORT_VAR: &str = "WEBHOOK_PORT";

/// Settings of the admission webhook server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub port: u16,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        WebhookConfig {
            cert_path: PathBuf::from("/certs/tls.crt"),
            key_path: PathBuf::from("/certs/tls.key"),
            port: 8443,
        }
    }
}

impl WebhookConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from a variable lookup, keeping the default for every
    /// variable that is not set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = WebhookConfig::default();
        if let Some(path) = lookup(CERT_PATH_VAR) {
            config.cert_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(KEY_PATH_VAR) {
            config.key_path = PathBuf::from(path);
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|err: std::num::ParseIntError| {
                Error::InvalidConfig {
                    key: PORT_VAR,
                    reason: format!("'{}': {}", port, err),
                }
            })?;
        }
        Ok(config)
    }
}
