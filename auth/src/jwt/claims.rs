use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token claim set.
///
/// Only the registered claims the service relies on are modelled. `sub` stays
/// optional on the wire so a verifier can tell a token without a subject apart
/// from a token with a bad signature.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims for `subject` expiring `ttl_minutes` from now.
    pub fn for_subject(subject: impl ToString, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            sub: Some(subject.to_string()),
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Non-empty subject, if any.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Check if token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp <= current_timestamp)
    }
}
