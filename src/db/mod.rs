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

//! Generic abstraction to access different database systems, and the persistence operations of
//! the service expressed in terms of it.
//!
//! The facilities in this module provide an abstraction over different database systems.  The
//! PostgreSQL backend is for production use and the SQLite backend serves local runs and unit
//! tests.  Every domain operation is a free function that takes an `Executor` and issues
//! database-specific SQL for each backend.

use crate::model::{ModelError, User, UserId, UserName};
use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;

pub mod postgres;
pub mod sqlite;

/// Database errors.  Any unexpected errors that come from the database are classified as
/// `BackendError`, but errors we know about have more specific types.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DbError {
    /// Indicates that a request to create an entry failed because it already exists.
    #[error("Already exists")]
    AlreadyExists,

    /// Catch-all error type for unexpected database errors.
    #[error("Database error: {0}")]
    BackendError(String),

    /// Indicates a failure processing the data that already exists in the database.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    /// Indicates that a requested entry does not exist.
    #[error("Entity not found")]
    NotFound,

    /// Indicates that the database is not available (maybe because of too many active concurrent
    /// connections).
    #[error("Unavailable")]
    Unavailable,
}

impl From<ModelError> for DbError {
    fn from(e: ModelError) -> Self {
        DbError::DataIntegrityError(e.to_string())
    }
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// A database executor that can talk to multiple database implementations.
///
/// Users of this type are forced to destructure it and issue different queries for each
/// database, which is what allows each backend to carry its own SQL dialect.
///
/// Note that this can wrap an executor that talks directly to the pool or to an open
/// transaction.
pub enum Executor {
    /// A PostgreSQL executor.
    Postgres(postgres::PostgresExecutor),

    /// A SQLite executor.
    Sqlite(sqlite::SqliteExecutor),
}

/// A wrapper for a database executor backed by an open transaction.
pub struct TxExecutor(Executor);

impl TxExecutor {
    /// Returns the executor wrapped by this transaction.
    ///
    /// This would be better called `executor` but this method is used so frequently that it
    /// makes call sites too verbose.
    pub fn ex(&mut self) -> &mut Executor {
        &mut self.0
    }

    /// Commits the transaction.
    pub async fn commit(self) -> DbResult<()> {
        match self.0 {
            Executor::Postgres(e) => e.commit().await,
            Executor::Sqlite(e) => e.commit().await,
        }
    }
}

/// Abstraction over the database connection.
#[async_trait]
pub trait Db {
    /// Obtains an executor for direct access to the pool.
    ///
    /// This would be better called `executor` but this method is used so frequently that it
    /// makes call sites too verbose.
    async fn ex(&self) -> DbResult<Executor>;

    /// Begins a transaction.
    ///
    /// It is the responsibility of the caller to call `commit` on the returned executor.
    /// Otherwise the transaction is rolled back on drop.
    async fn begin(&self) -> DbResult<TxExecutor>;

    /// Closes the connection pool.
    async fn close(&self);
}

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

impl TryFrom<PgRow> for User {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;

        Ok(User::new(UserId::new(id)?, UserName::new(name)?))
    }
}

impl TryFrom<SqliteRow> for User {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;

        Ok(User::new(UserId::try_from(id)?, UserName::new(name)?))
    }
}

/// Creates a new user with `name` and returns it with its newly-assigned id.
pub(crate) async fn create_user(ex: &mut Executor, name: &UserName) -> DbResult<User> {
    let id = match ex {
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO users (name) VALUES ($1) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
            UserId::new(id)?
        }

        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO users (name) VALUES (?) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
            UserId::try_from(id)?
        }
    };

    Ok(User::new(id, name.clone()))
}

/// Gets the user with the given `id`.
pub(crate) async fn get_user(ex: &mut Executor, id: UserId) -> DbResult<User> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = "SELECT id, name FROM users WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            User::try_from(row)
        }

        Executor::Sqlite(ex) => {
            let query_str = "SELECT id, name FROM users WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            User::try_from(row)
        }
    }
}

/// Gets all existing users, ordered by id.
pub(crate) async fn list_users(ex: &mut Executor) -> DbResult<Vec<User>> {
    let query_str = "SELECT id, name FROM users ORDER BY id";
    match ex {
        Executor::Postgres(ex) => {
            let rows = sqlx::query(query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(User::try_from).collect()
        }

        Executor::Sqlite(ex) => {
            let rows = sqlx::query(query_str)
                .fetch_all(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(User::try_from).collect()
        }
    }
}

/// Renames the user with the given `id` to `name`.
pub(crate) async fn update_user(ex: &mut Executor, id: UserId, name: &UserName) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let query_str = "UPDATE users SET name = $1 WHERE id = $2";
            let done = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let query_str = "UPDATE users SET name = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Update affected more than one row".to_owned())),
    }
}

/// Deletes the user with the given `id`.
pub(crate) async fn delete_user(ex: &mut Executor, id: UserId) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM users WHERE id = $1";
            let done = sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM users WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Delete affected more than one row".to_owned())),
    }
}

/// Counts the users that currently exist.
pub(crate) async fn count_users(ex: &mut Executor) -> DbResult<i64> {
    let query_str = "SELECT COUNT(*) AS count FROM users";
    let row_count = match ex {
        Executor::Postgres(ex) => {
            let row = sqlx::query(query_str)
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i64, _>("count").map_err(postgres::map_sqlx_error)?
        }

        Executor::Sqlite(ex) => {
            let row = sqlx::query(query_str)
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get::<i64, _>("count").map_err(sqlite::map_sqlx_error)?
        }
    };
    Ok(row_count)
}

/// Issues a trivial query to verify that the database is reachable and answering.
pub(crate) async fn ping(ex: &mut Executor) -> DbResult<()> {
    let query_str = "SELECT 1";
    match ex {
        Executor::Postgres(ex) => {
            sqlx::query(query_str)
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
        }

        Executor::Sqlite(ex) => {
            sqlx::query(query_str)
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
        }
    }
    Ok(())
}

/// Populates an empty database with a couple of sample users.  Does nothing if any user exists
/// already.
pub async fn seed_users(ex: &mut Executor) -> DbResult<()> {
    if count_users(ex).await? > 0 {
        return Ok(());
    }

    for name in ["Alice", "Bob"] {
        let name = UserName::new(name)?;
        create_user(ex, &name).await?;
    }
    Ok(())
}
