// Copyright 2022 VMware, Inc.
// SPDX-License-Identifier: MIT
use anyhow::Result;
use kube::core::{
    admission::{AdmissionRequest, AdmissionResponse, AdmissionReview},
    DynamicObject, ResourceExt,
};
use server_group_policy::admission::review;
use server_group_policy::config::WebhookConfig;
use std::convert::Infallible;
use tracing::*;
use warp::{reply, Filter, Reply};

pub async fn validate_handler(
    body: AdmissionReview<DynamicObject>,
) -> Result<impl Reply, Infallible> {
    let req: AdmissionRequest<_> = match body.try_into() {
        Ok(req) => req,
        Err(err) => {
            error!("invalid request: {}", err.to_string());
            return Ok(reply::json(
                &AdmissionResponse::invalid(err.to_string()).into_review(),
            ));
        }
    };

    let mut res = AdmissionResponse::from(&req);
    if let Some(obj) = &req.object {
        let name = obj.name_any();
        let old_data = req.old_object.as_ref().map(|old| &old.data);
        res = match review(old_data, &obj.data) {
            Ok(reset_fields) => {
                if !reset_fields.is_empty() {
                    // Validating only; the reconciler restores these fields.
                    warn!(
                        "immutable field changes detected on {}, reconciler will revert: {}",
                        name,
                        reset_fields.join(", ")
                    );
                }
                info!("accepted: {:?} on resource {}", req.operation, name);
                res
            }
            Err(err) => {
                warn!("denied: {:?} on {} ({})", req.operation, name, err);
                res.deny(err.to_string())
            }
        };
    };
    Ok(reply::json(&res.into_review()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = WebhookConfig::from_env()?;
    info!("starting admission controller on port {}", config.port);

    let routes = warp::path("validate")
        .and(warp::body::json())
        .and_then(validate_handler)
        .with(warp::trace::request());

    warp::serve(warp::post().and(routes))
        .tls()
        .cert_path(&config.cert_path)
        .key_path(&config.key_path)
        .run(([0, 0, 0, 0], config.port))
        .await;
    Ok(())
}
