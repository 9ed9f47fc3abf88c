// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::server_group::ServerGroup;
use crate::server_group_spec::ServerGroupSpec;
use tracing::info;

impl ServerGroupSpec {
    /// Replace all immutable fields of `target` with the values of this
    /// (current) spec. Returns the paths of the fields that were reset.
    ///
    /// Agents form a fixed size consensus group, so their count can only be
    /// changed by a dedicated scaling procedure.
    pub fn reset_immutable_fields(
        &self,
        group: ServerGroup,
        field_prefix: &str,
        target: &mut ServerGroupSpec,
    ) -> Vec<String> {
        let mut reset_fields = Vec::new();
        if group == ServerGroup::Agents && self.count() != target.count() {
            target.count = self.count;
            let field = format!("{}.count", field_prefix);
            info!("Reset immutable field {} to {}", field, self.count());
            reset_fields.push(field);
        }
        reset_fields
    }
}
