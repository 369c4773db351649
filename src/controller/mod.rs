//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! feeds the search and queue pipelines and drives library calls.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Debounced search dispatch
//! - `tracks`: Play/queue actions on the focused track
//! - `library`: Authorization, playlists, now playing and transport

mod input;
mod library;
mod search;
mod tracks;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::api::{MusicApi, QueueItem};
use crate::config::Settings;
use crate::model::AppModel;
use crate::playback::PlaybackTrigger;
use crate::queue::QueuePipeline;

pub struct AppController<A> {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) api: Arc<A>,
    pub(crate) queue: QueuePipeline,
    confirmed: Arc<Mutex<UnboundedReceiver<QueueItem>>>,
    pub(crate) playback: PlaybackTrigger<A>,
    pub(crate) settings: Arc<Settings>,
}

impl<A> Clone for AppController<A> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            api: self.api.clone(),
            queue: self.queue.clone(),
            confirmed: self.confirmed.clone(),
            playback: self.playback.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<A: MusicApi> AppController<A> {
    /// Must be called inside a tokio runtime: the queue pipeline starts here.
    pub fn new(model: Arc<Mutex<AppModel>>, api: Arc<A>, settings: Arc<Settings>) -> Self {
        let (queue, confirmed) = QueuePipeline::spawn(api.clone(), settings.queue.throttle_window());
        Self {
            model,
            playback: PlaybackTrigger::new(api.clone()),
            api,
            queue,
            confirmed: Arc::new(Mutex::new(confirmed)),
            settings,
        }
    }

    /// One pass of the event loop: retire an expired token, fold queue
    /// confirmations into the model and send the debounced search if it is due.
    pub async fn tick(&self) -> Option<JoinHandle<()>> {
        if self.model.lock().await.expire_session(Utc::now()) {
            tracing::info!("Access token expired, back to authorize view");
        }
        self.drain_confirmations().await;
        self.poll_search(Instant::now()).await
    }

    async fn drain_confirmations(&self) {
        let mut confirmed = self.confirmed.lock().await;
        let mut model = self.model.lock().await;
        loop {
            match confirmed.try_recv() {
                Ok(item) => model.confirm_queued(item),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Queue pipeline is gone, confirmations stopped");
                    break;
                }
            }
        }
    }
}
