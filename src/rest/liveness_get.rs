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

//! API backing the Kubernetes liveness probe.
//!
//! Liveness only claims that the process is running and able to answer; it deliberately does
//! not look at the database, which is the readiness probe's job.

use crate::rest::EmptyBody;
use axum::Json;
use axum::response::IntoResponse;
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

/// Message returned by the liveness probe.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct LivenessResponse {
    /// Always `ALIVE` while the process is running.
    status: String,
}

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> impl IntoResponse {
    Json(LivenessResponse { status: "ALIVE".to_owned() })
}
