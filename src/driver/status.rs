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

//! Operations that report on the status of the service.

use crate::db;
use crate::driver::{Driver, DriverResult};

impl Driver {
    /// Verifies that the backing database is reachable and answering queries.
    pub(crate) async fn ping(self) -> DriverResult<()> {
        db::ping(&mut self.db.ex().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_ping_ok() {
        let context = TestContext::setup().await;

        context.driver().ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_ping_fails_once_closed() {
        let context = TestContext::setup().await;

        context.db().close().await;

        context.driver().ping().await.unwrap_err();
    }
}
