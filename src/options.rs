// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT

/// Classifies command line option keys the operator manages itself and
/// therefore forbids users from overriding.
pub trait CriticalOptions: Send + Sync {
    fn is_critical_option(&self, key: &str) -> bool;
}

/// A fixed table of critical option keys. A leading `--` on the queried key is
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct CriticalOptionSet {
    keys: &'static [&'static str],
}

impl CriticalOptionSet {
    pub const fn new(keys: &'static [&'static str]) -> Self {
        CriticalOptionSet { keys }
    }

    pub fn keys(&self) -> &'static [&'static str] {
        self.keys
    }
}

impl CriticalOptions for CriticalOptionSet {
    fn is_critical_option(&self, key: &str) -> bool {
        let key = key.strip_prefix("--").unwrap_or(key);
        self.keys.iter().any(|k| *k == key)
    }
}

pub static ARANGOD_CRITICAL_OPTIONS: CriticalOptionSet = CriticalOptionSet::new(&[
    "agency.activate",
    "agency.disaster-recovery-id",
    "agency.endpoint",
    "agency.my-address",
    "agency.size",
    "agency.supervision",
    "cluster.agency-endpoint",
    "cluster.my-address",
    "cluster.my-role",
    "database.directory",
    "database.auto-upgrade",
    "foxx.queues",
    "server.endpoint",
    "server.authentication",
    "server.jwt-secret",
    "server.storage-engine",
    "ssl.cafile",
    "ssl.keyfile",
    "ssl.ecdh-curve",
]);

pub static ARANGOSYNC_CRITICAL_OPTIONS: CriticalOptionSet = CriticalOptionSet::new(&[
    "cluster.endpoint",
    "cluster.jwt-secret",
    "master.endpoint",
    "master.jwt-secret",
    "mq.type",
    "server.client-cafile",
    "server.endpoint",
    "server.keyfile",
    "server.port",
]);
