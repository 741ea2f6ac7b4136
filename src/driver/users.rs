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

//! Operations on the collection of users.

use crate::db;
use crate::driver::{Driver, DriverResult};
use crate::model::User;

impl Driver {
    /// Gets all existing users, ordered by id.
    pub(crate) async fn list_users(self) -> DriverResult<Vec<User>> {
        let users = db::list_users(&mut self.db.ex().await?).await?;
        Ok(users)
    }
}
