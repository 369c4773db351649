//! Fire-and-forget playback calls
//!
//! "Play now" and direct "add to queue" go straight to the remote API. The
//! caller gets control back immediately; nothing is confirmed locally and
//! failures only reach the log.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::MusicApi;
use crate::auth::AccessToken;
use crate::log_api_result;

pub struct PlaybackTrigger<A> {
    api: Arc<A>,
}

impl<A> Clone for PlaybackTrigger<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<A: MusicApi> PlaybackTrigger<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub fn play_now(&self, token: &AccessToken, uri: &str) -> JoinHandle<()> {
        let api = self.api.clone();
        let token = token.clone();
        let uri = uri.to_string();
        tokio::spawn(async move {
            let result = api.play_track(&token, &uri).await;
            log_api_result!("play_track", result);
            if let Ok(status) = result {
                tracing::debug!(track_uri = %uri, %status, "Play request answered");
            }
        })
    }

    pub fn enqueue(&self, token: &AccessToken, uri: &str) -> JoinHandle<()> {
        let api = self.api.clone();
        let token = token.clone();
        let uri = uri.to_string();
        tokio::spawn(async move {
            let result = api.add_to_queue(&token, &uri).await;
            log_api_result!("add_to_queue", result);
            if let Ok(status) = result {
                tracing::debug!(track_uri = %uri, %status, "Queue request answered");
            }
        })
    }
}
