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

//! Test utilities for the business layer.

use crate::db::{self, Db, Executor, sqlite};
use crate::driver::Driver;
use crate::model::{User, UserName};
use std::sync::Arc;

/// State of a running test, holding the driver under test and a side door into its database.
pub(crate) struct TestContext {
    /// The database the driver is backed by.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver against an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::from(sqlite::testutils::setup().await);
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Returns the database backing the driver under test.
    pub(crate) fn db(&self) -> &Arc<dyn Db + Send + Sync> {
        &self.db
    }

    /// Returns a clone of the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Obtains a direct executor against the backing database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Inserts a user named `name` directly into the database, bypassing the driver.
    pub(crate) async fn create_user(&self, name: &str) -> User {
        db::create_user(&mut self.ex().await, &UserName::new(name).unwrap()).await.unwrap()
    }
}
