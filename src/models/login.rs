use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// URI match strategy of a login URI. Server-defined integer, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UriMatch(pub u8);

/// A URI a login applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUri {
    /// Match strategy, `None` means the vault default
    #[serde(default, rename = "match")]
    pub r#match: Option<UriMatch>,
    /// The URI itself
    #[serde(default)]
    pub uri: Option<String>,
}

/// Login payload of an item
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Login {
    /// URIs this login applies to
    #[serde(default, deserialize_with = "null_as_default")]
    pub uris: Vec<LoginUri>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub username: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub password: Option<String>,
    /// One-time password seed
    #[serde(default)]
    pub totp: Option<String>,
    /// Date and time the password was last changed.
    #[serde(default, rename = "passwordRevisionDate")]
    pub password_revision_date: Option<DateTime<Utc>>,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("uris", &self.uris)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("totp", &self.totp.as_ref().map(|_| "[redacted]"))
            .field("password_revision_date", &self.password_revision_date)
            .finish()
    }
}
