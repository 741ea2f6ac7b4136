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

//! API to create a user.

use crate::driver::Driver;
use crate::model::UserName;
use crate::rest::RestResult;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
#[cfg(test)]
use serde::Serialize;
use serde::Deserialize;

/// Payload of a user-creation request.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct CreateUserRequest {
    /// Requested name for the new user.
    name: String,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<CreateUserRequest>,
) -> RestResult<impl IntoResponse> {
    let name = UserName::new(request.name)?;
    let user = driver.create_user(name).await?;

    let headers = [(http::header::LOCATION, format!("/users/{}", user.id().as_i32()))];
    Ok((http::StatusCode::CREATED, headers, Json(user)))
}
