//! Token store

use chrono::{DateTime, Utc};

use crate::auth::AccessToken;

/// Holds the bearer token for the running session. No token, or an expired
/// one, means the user has to authorize again.
#[derive(Clone, Debug, Default)]
pub struct Session {
    token: Option<AccessToken>,
}

impl Session {
    pub fn set_token(&mut self, token: AccessToken) {
        self.token = Some(token);
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    /// The token, if it is still usable at `now`.
    pub fn token(&self, now: DateTime<Utc>) -> Option<&AccessToken> {
        self.token.as_ref().filter(|t| !t.is_expired(now))
    }

    pub fn is_authorized(&self, now: DateTime<Utc>) -> bool {
        self.token(now).is_some()
    }

    /// Drop the token if it has run out. Returns whether one was dropped.
    pub fn clear_if_expired(&mut self, now: DateTime<Utc>) -> bool {
        let expired = self.token.as_ref().is_some_and(|t| t.is_expired(now));
        if expired {
            self.clear();
        }
        expired
    }
}
