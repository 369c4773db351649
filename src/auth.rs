//! Access token handling for the implicit-grant flow.
//!
//! The accounts service redirects back with the token in the URL fragment
//! (`#access_token=...&token_type=Bearer&expires_in=3600`). The fragment is
//! consumed once, then cleared.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rspotify::Token;

use crate::config::AuthSettings;

/// Bearer token for the Web API. Empty secrets are never constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return None;
        }
        Some(Self {
            secret,
            expires_at: None,
        })
    }

    pub fn with_expiry(mut self, expires_in: Duration, now: DateTime<Utc>) -> Self {
        self.expires_at = Some(now + expires_in);
        self
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// Token in the shape the rspotify client expects. Refreshing is not
    /// possible with an implicit grant, so there is no refresh token.
    pub fn to_rspotify_token(&self) -> Token {
        let expires_in = self
            .expires_at
            .map(|exp| exp - Utc::now())
            .unwrap_or_else(|| Duration::seconds(3600));
        Token {
            access_token: self.secret.clone(),
            expires_in,
            expires_at: self.expires_at,
            scopes: HashSet::new(),
            refresh_token: None,
        }
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Decoded fragment parameters. A key that occurs several times collects
/// several values; a key without `=` records `None`.
pub type FragmentParams = HashMap<String, Vec<Option<String>>>;

#[derive(Debug, PartialEq, Eq)]
pub enum TokenLookup {
    Found(AccessToken),
    /// `access_token` appeared more than once
    Multiple,
    Missing,
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

pub fn parse_fragment(fragment: &str) -> FragmentParams {
    let mut params = FragmentParams::new();
    let trimmed = fragment.trim_start_matches(['#', '?']);

    for pair in trimmed.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), Some(decode_component(v))),
            None => (decode_component(pair), None),
        };
        params.entry(key).or_default().push(value);
    }

    params
}

/// Text after the first `#`, or the whole input when it carries no `#`.
pub fn fragment_of(location: &str) -> &str {
    match location.split_once('#') {
        Some((_, fragment)) => fragment,
        None => location,
    }
}

fn clear_fragment(location: &mut String) {
    match location.find('#') {
        Some(idx) => location.truncate(idx),
        None => location.clear(),
    }
}

fn single_value<'a>(params: &'a FragmentParams, key: &str) -> Option<&'a str> {
    match params.get(key).map(Vec::as_slice) {
        Some([Some(value)]) => Some(value.as_str()),
        _ => None,
    }
}

pub fn lookup_token(params: &FragmentParams, now: DateTime<Utc>) -> TokenLookup {
    let Some(values) = params.get("access_token") else {
        return TokenLookup::Missing;
    };
    if values.len() > 1 {
        return TokenLookup::Multiple;
    }

    let Some(token) = single_value(params, "access_token").and_then(AccessToken::new) else {
        return TokenLookup::Missing;
    };

    match single_value(params, "expires_in").and_then(|v| v.parse::<i64>().ok()) {
        Some(secs) => TokenLookup::Found(token.with_expiry(Duration::seconds(secs), now)),
        None => TokenLookup::Found(token),
    }
}

/// Consume the fragment of `location`: the fragment is cleared whatever it
/// contained, and a token comes back only when exactly one was present.
pub fn bootstrap(location: &mut String, now: DateTime<Utc>) -> Option<AccessToken> {
    let params = parse_fragment(fragment_of(location));
    clear_fragment(location);

    match lookup_token(&params, now) {
        TokenLookup::Found(token) => {
            tracing::info!(expires_at = ?token.expires_at(), "Access token taken from redirect fragment");
            Some(token)
        }
        TokenLookup::Multiple => {
            tracing::warn!("Redirect fragment carries several access tokens, ignoring it");
            None
        }
        TokenLookup::Missing => {
            tracing::debug!("No access token in redirect fragment");
            None
        }
    }
}

/// Implicit-grant authorize URL; the browser comes back to `redirect_uri`
/// with the token in the fragment.
pub fn authorize_url(settings: &AuthSettings) -> String {
    let scope = settings.scopes.join(" ");
    format!(
        "{}?client_id={}&response_type=token&redirect_uri={}&scope={}",
        settings.authorize_endpoint,
        urlencoding::encode(&settings.client_id),
        urlencoding::encode(&settings.redirect_uri),
        urlencoding::encode(&scope),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_secret_is_no_token() {
        assert!(AccessToken::new("").is_none());
        assert!(AccessToken::new("abc").is_some());
    }

    #[test]
    fn debug_output_hides_secret() {
        let token = AccessToken::new("very-secret").unwrap();
        let printed = format!("{:?}", token);
        assert!(!printed.contains("very-secret"));
    }

    #[test]
    fn parse_fragment_decodes_and_groups_repeated_keys() {
        let params = parse_fragment("#access_token=a%2Fb&state=x+y&access_token=c&flag");
        assert_eq!(
            params["access_token"],
            vec![Some("a/b".to_string()), Some("c".to_string())]
        );
        assert_eq!(params["state"], vec![Some("x y".to_string())]);
        assert_eq!(params["flag"], vec![None]);
    }

    #[test]
    fn lookup_finds_single_token_with_expiry() {
        let params = parse_fragment("access_token=BQD&token_type=Bearer&expires_in=3600");
        match lookup_token(&params, now()) {
            TokenLookup::Found(token) => {
                assert_eq!(token.secret(), "BQD");
                assert_eq!(token.expires_at(), Some(now() + Duration::seconds(3600)));
            }
            other => panic!("expected a token, got {:?}", other),
        }
    }

    #[test]
    fn repeated_access_token_is_rejected() {
        let params = parse_fragment("access_token=one&access_token=two");
        assert_eq!(lookup_token(&params, now()), TokenLookup::Multiple);

        let mut location = "http://127.0.0.1:8898/callback#access_token=one&access_token=two".to_string();
        assert!(bootstrap(&mut location, now()).is_none());
        assert_eq!(location, "http://127.0.0.1:8898/callback");
    }

    #[test]
    fn empty_or_valueless_token_is_missing() {
        assert_eq!(lookup_token(&parse_fragment("access_token="), now()), TokenLookup::Missing);
        assert_eq!(lookup_token(&parse_fragment("access_token"), now()), TokenLookup::Missing);
        assert_eq!(lookup_token(&parse_fragment("error=access_denied"), now()), TokenLookup::Missing);
    }

    #[test]
    fn bootstrap_clears_fragment_of_full_url() {
        let mut location =
            "http://127.0.0.1:8898/callback#access_token=tok&expires_in=60".to_string();
        let token = bootstrap(&mut location, now()).unwrap();
        assert_eq!(token.secret(), "tok");
        assert_eq!(location, "http://127.0.0.1:8898/callback");
        assert!(!token.is_expired(now()));
        assert!(token.is_expired(now() + Duration::seconds(61)));
    }

    #[test]
    fn bootstrap_accepts_bare_fragment_and_empties_it() {
        let mut location = "access_token=tok".to_string();
        let token = bootstrap(&mut location, now()).unwrap();
        assert_eq!(token.secret(), "tok");
        assert!(token.expires_at().is_none());
        assert!(location.is_empty());
    }

    #[test]
    fn authorize_url_requests_token_response() {
        let settings = AuthSettings {
            client_id: "cid".to_string(),
            redirect_uri: "http://localhost/cb".to_string(),
            authorize_endpoint: "https://accounts.example.com/authorize".to_string(),
            scopes: vec!["a-b".to_string(), "c".to_string()],
        };
        assert_eq!(
            authorize_url(&settings),
            "https://accounts.example.com/authorize?client_id=cid&response_type=token\
             &redirect_uri=http%3A%2F%2Flocalhost%2Fcb&scope=a-b%20c"
        );
    }
}
