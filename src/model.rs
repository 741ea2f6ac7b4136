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

//! High-level data types.

use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize, de::Visitor};

/// Maximum length of a user name as specified in the schema.
pub(crate) const USERS_MAX_NAME_LENGTH: usize = 100;

/// Errors caused by invalid values when constructing model types.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct ModelError(pub(crate) String);

/// Result type for this module.
pub(crate) type ModelResult<T> = Result<T, ModelError>;

/// Identifier of a user as assigned by the database.  Guaranteed to be positive.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "i64")]
pub(crate) struct UserId(i32);

impl UserId {
    /// Creates a new user id from `id`, making sure it is positive.
    pub(crate) fn new(id: i32) -> ModelResult<Self> {
        if id <= 0 {
            return Err(ModelError(format!("User id {} must be positive", id)));
        }
        Ok(Self(id))
    }

    /// Creates a new user id from an untrusted string `s`, as found in request paths.
    pub(crate) fn parse(s: &str) -> ModelResult<Self> {
        match s.parse::<i32>() {
            Ok(id) => UserId::new(id),
            Err(_) => Err(ModelError(format!("Invalid user id '{}'", s))),
        }
    }

    /// Returns the id as an `i32`.
    pub(crate) fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns the id as an `i64` for the database backends that only deal in wide integers.
    pub(crate) fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = ModelError;

    fn try_from(id: i64) -> ModelResult<Self> {
        match i32::try_from(id) {
            Ok(id) => UserId::new(id),
            Err(_) => Err(ModelError(format!("User id {} cannot be represented", id))),
        }
    }
}

/// Represents a valid (but maybe non-existent) user name.
///
/// User names are free-form short strings.  Leading and trailing whitespace carries no meaning
/// and is stripped on construction.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct UserName(String);

impl UserName {
    /// Creates a new user name from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();
        let s = s.trim();

        if s.is_empty() {
            return Err(ModelError("User name cannot be blank".to_owned()));
        }
        if s.len() > USERS_MAX_NAME_LENGTH {
            return Err(ModelError("User name is too long".to_owned()));
        }
        if s.chars().all(|ch| ch.is_ascii_digit()) {
            // A purely numeric name would be ambiguous with an id.
            return Err(ModelError(format!("User name '{}' cannot be all digits", s)));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns a string view of the user name.
    pub(crate) fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A deserialization visitor for a `UserName`.
struct UserNameVisitor;

impl Visitor<'_> for UserNameVisitor {
    type Value = UserName;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        UserName::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        UserName::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for UserName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(UserNameVisitor)
    }
}

/// A user as stored in the database.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct User {
    /// The user's unique, immutable identifier.
    #[serde(rename = "userId")]
    id: UserId,

    /// The user's current name.
    name: UserName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    #[test]
    fn test_user_id_new_ok() {
        assert_eq!(1, UserId::new(1).unwrap().as_i32());
        assert_eq!(i32::MAX, UserId::new(i32::MAX).unwrap().as_i32());
    }

    #[test]
    fn test_user_id_new_not_positive() {
        assert_eq!(
            ModelError("User id 0 must be positive".to_owned()),
            UserId::new(0).unwrap_err()
        );
        assert_eq!(
            ModelError("User id -5 must be positive".to_owned()),
            UserId::new(-5).unwrap_err()
        );
    }

    #[test]
    fn test_user_id_parse_ok() {
        assert_eq!(UserId::new(42).unwrap(), UserId::parse("42").unwrap());
    }

    #[test]
    fn test_user_id_parse_garbage() {
        assert_eq!(
            ModelError("Invalid user id 'abc'".to_owned()),
            UserId::parse("abc").unwrap_err()
        );
        assert_eq!(
            ModelError("Invalid user id ''".to_owned()),
            UserId::parse("").unwrap_err()
        );
    }

    #[test]
    fn test_user_id_parse_out_of_range() {
        assert_eq!(
            ModelError("Invalid user id '4294967296'".to_owned()),
            UserId::parse("4294967296").unwrap_err()
        );
    }

    #[test]
    fn test_user_id_try_from_i64() {
        assert_eq!(UserId::new(3).unwrap(), UserId::try_from(3i64).unwrap());
        assert_eq!(
            ModelError(format!("User id {} cannot be represented", i64::MAX)),
            UserId::try_from(i64::MAX).unwrap_err()
        );
        assert_eq!(
            ModelError("User id 0 must be positive".to_owned()),
            UserId::try_from(0i64).unwrap_err()
        );
    }

    #[test]
    fn test_user_id_serde() {
        assert_eq!("7", serde_json::to_string(&UserId::new(7).unwrap()).unwrap());
        assert_eq!(UserId::new(7).unwrap(), serde_json::from_str::<UserId>("7").unwrap());
        assert!(serde_json::from_str::<UserId>("0").is_err());
    }

    #[test]
    fn test_user_name_ok() {
        assert_eq!("Alice", UserName::new("Alice").unwrap().as_str());
        assert_eq!("Alice", UserName::new("  Alice\t").unwrap().as_str());
        assert_eq!("agent 007", UserName::new("agent 007").unwrap().as_str());
    }

    #[test]
    fn test_user_name_blank() {
        assert_eq!(
            ModelError("User name cannot be blank".to_owned()),
            UserName::new("").unwrap_err()
        );
        assert_eq!(
            ModelError("User name cannot be blank".to_owned()),
            UserName::new("   \t ").unwrap_err()
        );
    }

    #[test]
    fn test_user_name_too_long() {
        let name = "x".repeat(USERS_MAX_NAME_LENGTH);
        assert_eq!(&name, UserName::new(name.clone()).unwrap().as_str());

        let name = "x".repeat(USERS_MAX_NAME_LENGTH + 1);
        assert_eq!(
            ModelError("User name is too long".to_owned()),
            UserName::new(name).unwrap_err()
        );
    }

    #[test]
    fn test_user_name_all_digits() {
        assert_eq!(
            ModelError("User name '1234' cannot be all digits".to_owned()),
            UserName::new("1234").unwrap_err()
        );
        assert_eq!("user1234", UserName::new("user1234").unwrap().as_str());
    }

    #[test]
    fn test_user_name_serde() {
        assert_tokens(&UserName::new("Alice").unwrap(), &[Token::Str("Alice")]);

        assert_de_tokens_error::<UserName>(
            &[Token::Str("   ")],
            "User name cannot be blank",
        );
    }

    #[test]
    fn test_user_json_wire_format() {
        let user = User::new(UserId::new(1).unwrap(), UserName::new("Alice").unwrap());
        assert_eq!(r#"{"userId":1,"name":"Alice"}"#, serde_json::to_string(&user).unwrap());

        let user = serde_json::from_str::<User>(r#"{"userId":2,"name":"Bob"}"#).unwrap();
        assert_eq!(User::new(UserId::new(2).unwrap(), UserName::new("Bob").unwrap()), user);
    }
}
