//! Debounced search dispatch

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::AppController;
use crate::api::MusicApi;
use crate::auth::AccessToken;
use crate::log_api_result;

impl<A: MusicApi> AppController<A> {
    /// Send the search whose debounce window has run out, if any.
    pub(crate) async fn poll_search(&self, now: Instant) -> Option<JoinHandle<()>> {
        let (query, token) = {
            let mut model = self.model.lock().await;
            let query = model.search.due_query(now)?;
            let token = model.token(Utc::now())?;
            (query, token)
        };
        Some(self.spawn_search(token, query))
    }

    fn spawn_search(&self, token: AccessToken, query: String) -> JoinHandle<()> {
        let api = self.api.clone();
        let model = self.model.clone();
        let limit = self.settings.api.search_limit;

        tokio::spawn(async move {
            let result = api.search(&token, &query, limit).await;
            log_api_result!("search", result);

            if let Ok(response) = result {
                let mut model = model.lock().await;
                if model.search.apply_response(response) {
                    tracing::info!(
                        query = %query,
                        shown = model.search.results().len(),
                        total = model.search.total(),
                        "Search results updated"
                    );
                } else {
                    tracing::debug!(query = %query, "Search response ignored");
                }
            }
        })
    }
}
