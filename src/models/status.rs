use chrono::{DateTime, Utc};

use serde::Deserialize;

/// Lock state reported by the vault server
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    /// No account is logged in
    Unauthenticated,
    /// Logged in, vault locked
    Locked,
    /// Logged in, vault unlocked
    Unlocked,
}

/// Defines the status reported by `GET /status`
#[derive(Debug, Deserialize, PartialEq)]
pub struct ServerStatus {
    /// The Bitwarden server the CLI is configured against.
    #[serde(rename = "serverUrl")]
    pub server_url: Option<String>,
    /// Date and time of the last sync with that server.
    #[serde(rename = "lastSync")]
    pub last_sync: Option<DateTime<Utc>>,
    /// Email of the logged in account.
    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,
    /// UUID of the logged in account.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// Current lock state.
    pub status: LockStatus,
}

#[derive(Deserialize)]
pub(crate) struct StatusTemplate {
    pub(crate) template: ServerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_status_template() {
        let status: StatusTemplate = serde_json::from_str(
            r#"{"object":"template","template":{"serverUrl":"https://bitwarden.example.com","lastSync":"2020-06-16T06:33:51.419Z","userEmail":"user@example.com","userId":"00000000-0000-0000-0000-000000000000","status":"locked"}}"#,
        )
        .unwrap();

        assert_eq!(status.template.status, LockStatus::Locked);
        assert_eq!(
            status.template.user_email.as_deref(),
            Some("user@example.com")
        );
        assert!(status.template.last_sync.is_some());
    }

    #[test]
    fn missing_optional_values_decode_as_none() {
        let status: ServerStatus =
            serde_json::from_str(r#"{"serverUrl":null,"status":"unauthenticated"}"#).unwrap();

        assert_eq!(status.status, LockStatus::Unauthenticated);
        assert!(status.server_url.is_none());
        assert!(status.last_sync.is_none());
    }
}
