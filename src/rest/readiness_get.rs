// userd
// Copyright 2025 The userd Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API backing the Kubernetes readiness probe.

use crate::driver::Driver;
use crate::rest::EmptyBody;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

/// Message returned by the readiness probe.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ReadinessResponse {
    /// `READY` when the service can serve traffic, `NOT_READY` otherwise.
    status: String,

    /// State of the database connection.
    db: String,

    /// Cause of the failure when the service is not ready.
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// API handler.
///
/// Issues a lightweight query to ensure database connectivity, as a service that cannot reach
/// its database cannot answer any user request.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> impl IntoResponse {
    match driver.ping().await {
        Ok(()) => (
            http::StatusCode::OK,
            Json(ReadinessResponse {
                status: "READY".to_owned(),
                db: "CONNECTED".to_owned(),
                reason: None,
            }),
        ),
        Err(e) => (
            http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "NOT_READY".to_owned(),
                db: "DISCONNECTED".to_owned(),
                reason: Some(e.to_string()),
            }),
        ),
    }
}
