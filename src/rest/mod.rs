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

//! Entry point to the REST server.
//!
//! Every API is put in its own `.rs` file, using a name like `<entity>_<method>.rs`.  This may
//! seem overkill, but putting every API in its own file makes it easy to ensure all the
//! integration tests for the given API truly belong to that API.
//!
//! More specifically, the `tests` module within an API defines a `route` method that returns
//! the HTTP method and the API path under test.  All integration tests within the module then
//! rely on `route` to obtain this information, ensuring that they all test the desired API.

use crate::driver::{Driver, DriverError};
use crate::model::ModelError;
use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::body::HttpBody;
use axum::extract::{FromRef, FromRequest, MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use log::info;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::time::Instant;

mod health_get;
mod liveness_get;
mod prometheus_get;
mod readiness_get;
#[cfg(test)]
mod testutils;
mod user_delete;
mod user_get;
mod user_put;
mod users_get;
mod users_post;

/// Frontend errors.  These are the errors that are visible to the user on failed requests.
#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum RestError {
    /// Indicates that a request tried to create an entity that already exists.
    #[error("{0}")]
    Conflict(String),

    /// Catch-all error type for all unexpected errors.
    #[error("{0}")]
    InternalError(String),

    /// Indicates an error in the contents of the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Indicates that a requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Indicates that a request that should have empty content did not.
    #[error("Content should be empty")]
    PayloadNotEmpty,

    /// Indicates that the service cannot currently talk to its database.
    #[error("{0}")]
    Unavailable(String),
}

impl From<DriverError> for RestError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::AlreadyExists(_) => RestError::Conflict(e.to_string()),
            DriverError::BackendError(_) => RestError::InternalError(e.to_string()),
            DriverError::InvalidInput(_) => RestError::InvalidRequest(e.to_string()),
            DriverError::NotFound(_) => RestError::NotFound(e.to_string()),
            DriverError::Unavailable(_) => RestError::Unavailable(e.to_string()),
        }
    }
}

impl From<ModelError> for RestError {
    fn from(e: ModelError) -> Self {
        RestError::InvalidRequest(e.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match self {
            RestError::Conflict(_) => http::StatusCode::CONFLICT,
            RestError::InternalError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
            RestError::InvalidRequest(_) => http::StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => http::StatusCode::NOT_FOUND,
            RestError::PayloadNotEmpty => http::StatusCode::PAYLOAD_TOO_LARGE,
            RestError::Unavailable(_) => http::StatusCode::SERVICE_UNAVAILABLE,
        };

        let response = ErrorResponse { message: self.to_string() };

        (status, Json(response)).into_response()
    }
}

/// Result type for this module.
pub(crate) type RestResult<T> = Result<T, RestError>;

/// Representation of the details of an error response.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ErrorResponse {
    /// Textual representation of the error message.
    pub(crate) message: String,
}

/// A request body extractor that forbids any content.
///
/// Any API that doesn't expect a body should use this to ensure we don't get garbage data that
/// we don't care about.  This future-proofs the service.
pub(crate) struct EmptyBody {}

#[async_trait]
impl<S> FromRequest<S> for EmptyBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        if req.into_body().is_end_stream() {
            Ok(EmptyBody {})
        } else {
            Err(RestError::PayloadNotEmpty)
        }
    }
}

/// State shared by all request handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    /// The driver that backs all user operations.
    driver: Driver,

    /// Handle to the installed metrics recorder, used to render Prometheus scrapes.
    metrics: PrometheusHandle,
}

impl FromRef<AppState> for Driver {
    fn from_ref(state: &AppState) -> Driver {
        state.driver.clone()
    }
}

impl FromRef<AppState> for PrometheusHandle {
    fn from_ref(state: &AppState) -> PrometheusHandle {
        state.metrics.clone()
    }
}

/// Name of the counter that tracks finished HTTP requests.
const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Name of the histogram that tracks HTTP request latency.
const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Logs every request and records its outcome and latency in the metrics recorder.
///
/// Metrics are labelled with the matched route, not the raw path, to keep their cardinality
/// bounded.
async fn instrument(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.extensions().get::<MatchedPath>() {
        Some(path) => path.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed = start.elapsed();

    let status = response.status().as_u16();
    info!("{} {} -> {} ({}ms)", method, path, status, elapsed.as_millis());

    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.to_string(),
        "path" => path.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "method" => method.to_string(),
        "path" => path
    )
    .record(elapsed.as_secs_f64());

    response
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver, metrics: PrometheusHandle) -> Router {
    let state = AppState { driver, metrics };

    use axum::routing::get;
    Router::new()
        .route("/users", get(users_get::handler).post(users_post::handler))
        .route(
            "/users/:id",
            get(user_get::handler).put(user_put::handler).delete(user_delete::handler),
        )
        .route("/health", get(health_get::handler))
        .route("/liveness", get(liveness_get::handler))
        .route("/readiness", get(readiness_get::handler))
        .route("/prometheus", get(prometheus_get::handler))
        .layer(middleware::from_fn(instrument))
        .with_state(state)
}
