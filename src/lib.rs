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

//! Minimal user CRUD web service.
//!
//! The service exposes a REST API over a single `users` table plus the usual
//! Kubernetes-style health endpoints and a Prometheus scrape endpoint.  The
//! code is structured as the following layers, from bottom to top:
//!
//! 1.  `model`: High-level data types that represent concepts in the domain of
//!     the application, validated at construction time.  There is no logic in
//!     here beyond that validation.
//!
//! 2.  `db`: The persistence layer.  Provides an abstraction over the
//!     supported database systems and one free function per domain operation,
//!     each issuing database-specific SQL.
//!
//! 3.  `driver`: The business logic layer.  The `Driver` type coordinates
//!     access to the database and exposes one-shot operations.
//!
//! 4.  `rest`: The HTTP layer, offering the REST APIs.  Every API lives in its
//!     own file and is backed by the `Driver`.
//!
//! 5.  `main`: The app launcher.  Its sole purpose is to gather configuration
//!     data from environment variables and call `serve` to start the
//!     application.
//!
//! There are result and error types in every layer, such as `DbResult` and
//! `DbError`.  Errors transparently float to the top of the app using the `?`
//! operator and are translated to HTTP status codes once returned from the
//! REST layer.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use crate::db::Db;
use crate::driver::Driver;
use log::info;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

pub mod db;
pub mod env;
pub(crate) mod driver;
pub(crate) mod model;
mod rest;
use rest::app;

/// Instantiates all resources to serve the application on `bind_addr`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would
/// force us to expose many crate-internal types to the public, which in turn
/// would make dead code detection harder.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db: Box<dyn Db + Send + Sync>,
) -> Result<(), Box<dyn Error>> {
    let driver = Driver::new(Arc::from(db));
    let metrics = PrometheusBuilder::new().install_recorder()?;
    let app = app(driver, metrics);

    let listener = tokio::net::TcpListener::bind(bind_addr.into()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
