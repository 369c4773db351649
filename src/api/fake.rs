//! Scripted `MusicApi` used by tests; records every call in order.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::StatusCode;

use super::{MusicApi, SearchResponse};
use crate::auth::AccessToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Search(String),
    GetTrack(String),
    AddToQueue(String),
    PlayTrack(String),
}

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    get_track: Mutex<VecDeque<Result<StatusCode>>>,
    add_to_queue: Mutex<VecDeque<Result<StatusCode>>>,
    search: Mutex<VecDeque<SearchResponse>>,
    latency: Duration,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps this long before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn push_get_track(&self, status: StatusCode) {
        self.get_track.lock().unwrap().push_back(Ok(status));
    }

    pub fn push_get_track_error(&self) {
        self.get_track
            .lock()
            .unwrap()
            .push_back(Err(anyhow!("connection reset")));
    }

    pub fn push_add_to_queue(&self, status: StatusCode) {
        self.add_to_queue.lock().unwrap().push_back(Ok(status));
    }

    pub fn push_search(&self, response: SearchResponse) {
        self.search.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl MusicApi for FakeApi {
    async fn search(&self, _token: &AccessToken, query: &str, _limit: u32) -> Result<SearchResponse> {
        self.record(Call::Search(query.to_string()));
        self.delay().await;
        Ok(self.search.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn get_track(&self, _token: &AccessToken, id: &str) -> Result<StatusCode> {
        self.record(Call::GetTrack(id.to_string()));
        self.delay().await;
        self.get_track
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(StatusCode::NOT_FOUND))
    }

    async fn add_to_queue(&self, _token: &AccessToken, uri: &str) -> Result<StatusCode> {
        self.record(Call::AddToQueue(uri.to_string()));
        self.delay().await;
        self.add_to_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(StatusCode::NOT_FOUND))
    }

    async fn play_track(&self, _token: &AccessToken, uri: &str) -> Result<StatusCode> {
        self.record(Call::PlayTrack(uri.to_string()));
        self.delay().await;
        Ok(StatusCode::NO_CONTENT)
    }
}
