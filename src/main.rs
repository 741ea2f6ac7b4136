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

//! Entry point to the user service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use std::net::Ipv4Addr;
use userd::db::postgres::{PostgresDb, PostgresOptions};
use userd::db::{self, Db, sqlite};
use userd::env::get_optional_var;
use userd::serve;

#[tokio::main]
async fn main() {
    env_logger::init();

    let port = get_optional_var::<u16>("USERD", "PORT").unwrap().unwrap_or(3000);
    let addr = (Ipv4Addr::UNSPECIFIED, port);

    let db: Box<dyn Db + Send + Sync> =
        match get_optional_var::<String>("USERD", "DB").unwrap().as_deref() {
            Some("postgres") => {
                let opts = PostgresOptions::from_env("PGSQL_PROD").unwrap();
                Box::from(PostgresDb::connect(opts).unwrap())
            }
            Some("sqlite") | None => {
                let uri = get_optional_var::<String>("USERD", "SQLITE_URI")
                    .unwrap()
                    .unwrap_or_else(|| ":memory:".to_owned());
                Box::from(sqlite::connect(&uri).await.unwrap())
            }
            Some(other) => panic!("Unknown USERD_DB value '{}'", other),
        };
    db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
    db::seed_users(&mut db.ex().await.unwrap()).await.unwrap();

    serve(addr, db).await.unwrap()
}
