//! Remote music API seam
//!
//! `MusicApi` is everything the pipelines need from the streaming service.
//! The token is passed to every call; nothing here holds session state.
//!
//! - `models`: response payloads and the queue item
//! - `web`: HTTP implementation against the Web API

mod models;
mod web;

use std::future::Future;

use anyhow::Result;
use reqwest::StatusCode;

use crate::auth::AccessToken;

pub use models::{Album, Artist, Item, Page, QueueItem, SearchResponse};
pub use web::WebApi;

pub trait MusicApi: Send + Sync + 'static {
    /// Track search. `tracks` is absent when the service answered without a
    /// track collection.
    fn search(
        &self,
        token: &AccessToken,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<SearchResponse>> + Send;

    /// Existence check; 200 means the track is there and accessible.
    fn get_track(
        &self,
        token: &AccessToken,
        id: &str,
    ) -> impl Future<Output = Result<StatusCode>> + Send;

    /// Append to the active device's queue; 204 means accepted.
    fn add_to_queue(
        &self,
        token: &AccessToken,
        uri: &str,
    ) -> impl Future<Output = Result<StatusCode>> + Send;

    fn play_track(
        &self,
        token: &AccessToken,
        uri: &str,
    ) -> impl Future<Output = Result<StatusCode>> + Send;
}

#[cfg(test)]
pub(crate) mod fake;
