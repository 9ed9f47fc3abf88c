// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use crate::deployment_spec::DeploymentSpec;
use crate::error::Error;
use tracing::*;

/// Field path prefix under which reset fields are reported.
pub const SPEC_FIELD_PREFIX: &str = "spec";

/// Parse the `spec` of an ArangoDeployment object body.
pub fn parse_spec(object: &serde_json::Value) -> Result<DeploymentSpec, Error> {
    let spec = object.get("spec").ok_or(Error::MissingSpec)?;
    Ok(serde_json::from_value(spec.clone())?)
}

/// Review a create (`old_object == None`) or update of an ArangoDeployment.
///
/// On update, the old spec is defaulted to the state it was accepted in, the
/// new spec inherits its unset fields from it, and immutable fields of the new
/// spec are restored from it. The result is then defaulted and validated.
/// Returns the paths of the immutable fields the update tried to change.
pub fn review(
    old_object: Option<&serde_json::Value>,
    object: &serde_json::Value,
) -> Result<Vec<String>, Error> {
    let mut desired = parse_spec(object)?;
    let reset_fields = match old_object {
        Some(old_object) => {
            let mut current = parse_spec(old_object)?;
            current.set_defaults();
            desired.set_defaults_from(&current);
            current.reset_immutable_fields(SPEC_FIELD_PREFIX, &mut desired)
        }
        None => Vec::new(),
    };
    if !reset_fields.is_empty() {
        warn!(
            "changes to immutable fields will be reverted: {}",
            reset_fields.join(", ")
        );
    }
    desired.set_defaults();
    desired.validate()?;
    Ok(reset_fields)
}
