//! Play and queue actions on the focused track

use chrono::Utc;

use super::AppController;
use crate::api::{MusicApi, QueueItem};
use crate::queue::QueueIntent;

impl<A: MusicApi> AppController<A> {
    /// Route the focused track through the queue pipeline. It only shows up in
    /// the queue pane once the remote side confirms it.
    pub async fn queue_focused_track(&self) {
        let model = self.model.lock().await;
        let Some(token) = model.token(Utc::now()) else {
            return;
        };
        let Some(item) = model.focused_track().map(QueueItem::from) else {
            return;
        };
        drop(model);

        tracing::debug!(track_id = %item.id, "Submitting queue intent");
        if !self.queue.submit(QueueIntent { item, token }) {
            tracing::warn!("Queue pipeline is not running, intent lost");
        }
    }

    pub async fn play_focused_track(&self) {
        let model = self.model.lock().await;
        if let (Some(token), Some(track)) = (model.token(Utc::now()), model.focused_track()) {
            tracing::debug!(track_uri = %track.uri, "Play now");
            self.playback.play_now(&token, &track.uri);
        }
    }

    /// Direct add, skipping the pipeline; nothing is recorded locally.
    pub async fn enqueue_focused_track(&self) {
        let model = self.model.lock().await;
        if let (Some(token), Some(track)) = (model.token(Utc::now()), model.focused_track()) {
            tracing::debug!(track_uri = %track.uri, "Quick enqueue");
            self.playback.enqueue(&token, &track.uri);
        }
    }
}
