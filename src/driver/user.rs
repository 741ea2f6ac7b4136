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

//! Operations on one user.

use crate::db;
use crate::driver::{Driver, DriverResult};
use crate::model::{User, UserId, UserName};

impl Driver {
    /// Creates a new user named `name` and returns it with its newly-assigned id.
    pub(crate) async fn create_user(self, name: UserName) -> DriverResult<User> {
        let user = db::create_user(&mut self.db.ex().await?, &name).await?;
        Ok(user)
    }

    /// Gets the user with the given `id`.
    pub(crate) async fn get_user(self, id: UserId) -> DriverResult<User> {
        let user = db::get_user(&mut self.db.ex().await?, id).await?;
        Ok(user)
    }

    /// Renames the user with the given `id` to `name` and returns the updated entity.
    pub(crate) async fn update_user(self, id: UserId, name: UserName) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;
        db::update_user(tx.ex(), id, &name).await?;
        let user = db::get_user(tx.ex(), id).await?;
        tx.commit().await?;
        Ok(user)
    }

    /// Deletes the user with the given `id`.
    pub(crate) async fn delete_user(self, id: UserId) -> DriverResult<()> {
        db::delete_user(&mut self.db.ex().await?, id).await?;
        Ok(())
    }
}
