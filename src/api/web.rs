//! Web API over HTTP

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::json;

use super::{MusicApi, SearchResponse};
use crate::auth::AccessToken;
use crate::config::ApiSettings;
use crate::log_api_request;

#[derive(Clone)]
pub struct WebApi {
    http: Client,
    base_url: String,
}

impl WebApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("spotideck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl MusicApi for WebApi {
    async fn search(&self, token: &AccessToken, query: &str, limit: u32) -> Result<SearchResponse> {
        log_api_request!("search", query, limit);
        let limit = limit.to_string();
        let response = self
            .http
            .get(self.url("/search"))
            .bearer_auth(token.secret())
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<SearchResponse>().await?)
    }

    async fn get_track(&self, token: &AccessToken, id: &str) -> Result<StatusCode> {
        log_api_request!("get_track", id);
        let path = format!("/tracks/{}", urlencoding::encode(id));
        let response = self
            .http
            .get(self.url(&path))
            .bearer_auth(token.secret())
            .send()
            .await?;
        Ok(response.status())
    }

    async fn add_to_queue(&self, token: &AccessToken, uri: &str) -> Result<StatusCode> {
        log_api_request!("add_to_queue", uri);
        let response = self
            .http
            .post(self.url("/me/player/queue"))
            .bearer_auth(token.secret())
            .query(&[("uri", uri)])
            .header(reqwest::header::CONTENT_LENGTH, 0u64)
            .send()
            .await?;
        Ok(response.status())
    }

    async fn play_track(&self, token: &AccessToken, uri: &str) -> Result<StatusCode> {
        log_api_request!("play_track", uri);
        let response = self
            .http
            .put(self.url("/me/player/play"))
            .bearer_auth(token.secret())
            .json(&json!({ "uris": [uri] }))
            .send()
            .await?;
        Ok(response.status())
    }
}
