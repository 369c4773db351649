use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

use super::throttle::Throttle;
use crate::api::{MusicApi, QueueItem};
use crate::auth::AccessToken;

/// Request to add a track to the playback queue, before the remote side
/// has confirmed it.
#[derive(Clone, Debug)]
pub struct QueueIntent {
    pub item: QueueItem,
    pub token: AccessToken,
}

/// Intake handle of a running pipeline. Dropping it stops intake; chains
/// already in flight still run to completion.
/// An intent with the instant it was submitted; the throttle judges that
/// instant, not when the intake task gets to it.
struct Stamped {
    at: Instant,
    intent: QueueIntent,
}

#[derive(Clone)]
pub struct QueuePipeline {
    intents: UnboundedSender<Stamped>,
}

impl QueuePipeline {
    /// Start the intake task. Confirmed items arrive on the returned receiver,
    /// in completion order, which need not be submission order.
    pub fn spawn<A: MusicApi>(api: Arc<A>, window: Duration) -> (Self, UnboundedReceiver<QueueItem>) {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (confirmed_tx, confirmed_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_intake(api, window, intent_rx, confirmed_tx));

        (Self { intents: intent_tx }, confirmed_rx)
    }

    /// Returns false once the intake task is gone.
    pub fn submit(&self, intent: QueueIntent) -> bool {
        self.submit_at(intent, Instant::now())
    }

    pub(crate) fn submit_at(&self, intent: QueueIntent, at: Instant) -> bool {
        self.intents.send(Stamped { at, intent }).is_ok()
    }
}

async fn run_intake<A: MusicApi>(
    api: Arc<A>,
    window: Duration,
    mut intents: UnboundedReceiver<Stamped>,
    confirmed: UnboundedSender<QueueItem>,
) {
    let mut throttle = Throttle::new(window);
    tracing::debug!(window_ms = window.as_millis() as u64, "Queue pipeline started");

    while let Some(Stamped { at, intent }) = intents.recv().await {
        if !throttle.try_acquire(at) {
            tracing::debug!(
                track_id = %intent.item.id,
                reopens_in_ms = ?throttle.reopens_at(at).map(|t| (t - at).as_millis()),
                "Queue intent dropped by throttle"
            );
            continue;
        }

        let api = api.clone();
        let confirmed = confirmed.clone();
        tokio::spawn(async move {
            if let Some(item) = confirm_intent(api.as_ref(), &intent).await {
                if confirmed.send(item).is_err() {
                    tracing::debug!("Queue confirmation dropped, nobody is listening");
                }
            }
        });
    }

    tracing::debug!("Queue pipeline stopped");
}

/// Existence check, then the add call. The item comes back only when the
/// first answers exactly 200 and the second exactly 204; anything else,
/// transport errors included, discards the intent.
pub async fn confirm_intent<A: MusicApi>(api: &A, intent: &QueueIntent) -> Option<QueueItem> {
    let QueueIntent { item, token } = intent;

    match api.get_track(token, &item.id).await {
        Ok(StatusCode::OK) => {}
        Ok(status) => {
            tracing::debug!(track_id = %item.id, %status, "Track lookup rejected, intent discarded");
            return None;
        }
        Err(e) => {
            tracing::debug!(track_id = %item.id, error = %e, "Track lookup failed, intent discarded");
            return None;
        }
    }

    match api.add_to_queue(token, &item.uri).await {
        Ok(StatusCode::NO_CONTENT) => {
            tracing::info!(track_uri = %item.uri, "Track queued");
            Some(item.clone())
        }
        Ok(status) => {
            tracing::debug!(track_uri = %item.uri, %status, "Queue add rejected, intent discarded");
            None
        }
        Err(e) => {
            tracing::debug!(track_uri = %item.uri, error = %e, "Queue add failed, intent discarded");
            None
        }
    }
}
