//! Authorization, playlists, now playing and transport

use chrono::Utc;

use super::AppController;
use crate::api::MusicApi;
use crate::auth::{self, AccessToken};
use crate::model::{PlaylistDetail, SpotifyClient};

impl<A: MusicApi> AppController<A> {
    /// Read a token out of a redirect location and make it the session token.
    /// The fragment of `location` is consumed either way.
    pub async fn authorize_with(&self, location: &mut String) -> Option<AccessToken> {
        let token = auth::bootstrap(location, Utc::now())?;
        self.model.lock().await.authorize(token.clone());
        Some(token)
    }

    /// Enter on the authorize view.
    pub async fn submit_authorize_input(&self) {
        let mut location = std::mem::take(&mut self.model.lock().await.ui.authorize_input);

        match self.authorize_with(&mut location).await {
            Some(token) => self.connect_library(&token).await,
            None => {
                let mut model = self.model.lock().await;
                model.ui.authorize_hint =
                    Some("No single access_token found in that URL, try again".to_string());
            }
        }
    }

    /// Bind the library client to the session token and load playlists.
    pub async fn connect_library(&self, token: &AccessToken) {
        match SpotifyClient::from_token(token).await {
            Ok(client) => {
                self.model.lock().await.set_spotify_client(client);
                self.load_playlists().await;
                self.refresh_now_playing().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to set up library client"),
        }
    }

    pub async fn load_playlists(&self) {
        let Some(spotify) = self.model.lock().await.spotify_client() else {
            return;
        };

        match spotify.user_playlists(self.settings.ui.playlist_limit).await {
            Ok(playlists) => self.model.lock().await.set_playlists(playlists),
            Err(e) => tracing::error!(error = %e, "Failed to load playlists"),
        }
    }

    pub async fn open_selected_playlist(&self) {
        let model = self.model.lock().await;
        let (Some(spotify), Some(playlist)) = (model.spotify_client(), model.selected_playlist().cloned())
        else {
            return;
        };
        drop(model);

        match spotify
            .playlist_tracks(&playlist.id, self.settings.ui.playlist_limit)
            .await
        {
            Ok(tracks) => {
                tracing::info!(playlist = %playlist.name, count = tracks.len(), "Opened playlist");
                self.model.lock().await.show_playlist(PlaylistDetail {
                    id: playlist.id,
                    name: playlist.name,
                    tracks,
                });
            }
            Err(e) => tracing::error!(error = %e, playlist_id = %playlist.id, "Failed to load playlist tracks"),
        }
    }

    pub async fn refresh_now_playing(&self) {
        let Some(spotify) = self.model.lock().await.spotify_client() else {
            return;
        };

        match spotify.now_playing().await {
            Ok(now_playing) => self.model.lock().await.now_playing = now_playing,
            Err(e) => tracing::warn!(error = %e, "Failed to refresh now playing"),
        }
    }

    pub async fn toggle_playback(&self) {
        let model = self.model.lock().await;
        let is_playing = model.now_playing.is_playing;
        let Some(spotify) = model.spotify_client() else {
            return;
        };
        drop(model);

        tracing::debug!(is_playing, "Toggling playback");
        let result = if is_playing {
            spotify.pause().await
        } else {
            spotify.play().await
        };

        match result {
            Ok(()) => {
                self.model.lock().await.now_playing.is_playing = !is_playing;
                tracing::info!(action = if is_playing { "paused" } else { "resumed" }, "Playback toggled");
            }
            Err(e) => tracing::error!(error = %e, "Toggle playback failed"),
        }
    }

    pub async fn next_track(&self) {
        let Some(spotify) = self.model.lock().await.spotify_client() else {
            return;
        };
        match spotify.next_track().await {
            Ok(()) => tracing::info!("Skipped to next track"),
            Err(e) => tracing::error!(error = %e, "Next track failed"),
        }
    }

    pub async fn previous_track(&self) {
        let Some(spotify) = self.model.lock().await.spotify_client() else {
            return;
        };
        match spotify.previous_track().await {
            Ok(()) => tracing::info!("Went to previous track"),
            Err(e) => tracing::error!(error = %e, "Previous track failed"),
        }
    }
}
