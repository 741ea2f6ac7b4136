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

//! API to rename an existing user.

use crate::driver::Driver;
use crate::model::{UserId, UserName};
use crate::rest::RestResult;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
#[cfg(test)]
use serde::Serialize;
use serde::Deserialize;

/// Payload of a user-update request.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct UpdateUserRequest {
    /// New name for the user.
    name: String,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> RestResult<impl IntoResponse> {
    let id = UserId::parse(&id)?;
    let name = UserName::new(request.name)?;
    let user = driver.update_user(id, name).await?;
    Ok(Json(user))
}
