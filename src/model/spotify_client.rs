//! Library access through rspotify: playlists, current playback and transport

use std::sync::Arc;

use anyhow::{Result, anyhow};
use futures::{StreamExt, TryStreamExt};
use rspotify::{
    model::{FullTrack, PlayableItem, PlaylistId},
    prelude::*,
    AuthCodeSpotify, Config,
};

use super::playback::NowPlaying;
use super::types::PlaylistItem;
use crate::api::{Album, Artist, Item};
use crate::auth::AccessToken;

/// Spotify client bound to the session token. Implicit-grant tokens cannot be
/// refreshed, so the client never tries.
#[derive(Clone)]
pub struct SpotifyClient {
    client: Arc<AuthCodeSpotify>,
}

impl SpotifyClient {
    pub async fn from_token(token: &AccessToken) -> Result<Self> {
        let spotify = AuthCodeSpotify::with_config(
            Default::default(),
            Default::default(),
            Config {
                token_cached: false,
                token_refreshing: false,
                ..Default::default()
            },
        );

        *spotify
            .token
            .lock()
            .await
            .map_err(|_| anyhow!("rspotify token lock unavailable"))? = Some(token.to_rspotify_token());
        tracing::debug!("rspotify client initialized");

        Ok(Self {
            client: Arc::new(spotify),
        })
    }

    pub async fn user_playlists(&self, limit: u32) -> Result<Vec<PlaylistItem>> {
        let playlists: Vec<_> = self
            .client
            .current_user_playlists()
            .take(limit as usize)
            .try_collect()
            .await?;

        let playlists: Vec<PlaylistItem> = playlists
            .into_iter()
            .map(|playlist| PlaylistItem {
                id: playlist.id.id().to_string(),
                name: playlist.name,
            })
            .collect();

        tracing::info!(count = playlists.len(), "Loaded user playlists");
        Ok(playlists)
    }

    pub async fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<Item>> {
        let id = PlaylistId::from_id(playlist_id)?;
        let entries: Vec<_> = self
            .client
            .playlist_items(id, None, None)
            .take(limit as usize)
            .try_collect()
            .await?;

        let tracks: Vec<Item> = entries
            .iter()
            .filter_map(|entry| match &entry.track {
                Some(PlayableItem::Track(track)) => Some(item_from_track(track)),
                _ => None,
            })
            .collect();

        tracing::debug!(playlist_id, count = tracks.len(), "Loaded playlist tracks");
        Ok(tracks)
    }

    pub async fn now_playing(&self) -> Result<NowPlaying> {
        tracing::trace!("Fetching current playback state");
        let playback = self.client.current_playback(None, None::<Vec<_>>).await?;
        Ok(playback
            .as_ref()
            .map(NowPlaying::from_playback)
            .unwrap_or_default())
    }

    pub async fn play(&self) -> Result<()> {
        tracing::debug!("API: resume_playback");
        self.client.resume_playback(None, None).await?;
        Ok(())
    }

    pub async fn pause(&self) -> Result<()> {
        tracing::debug!("API: pause_playback");
        self.client.pause_playback(None).await?;
        Ok(())
    }

    pub async fn next_track(&self) -> Result<()> {
        tracing::debug!("API: next_track");
        self.client.next_track(None).await?;
        Ok(())
    }

    pub async fn previous_track(&self) -> Result<()> {
        tracing::debug!("API: previous_track");
        self.client.previous_track(None).await?;
        Ok(())
    }
}

fn item_from_track(track: &FullTrack) -> Item {
    let id = track
        .id
        .as_ref()
        .map(|id| id.id().to_string())
        .unwrap_or_default();
    Item {
        uri: format!("spotify:track:{}", id),
        id,
        name: track.name.clone(),
        artists: track
            .artists
            .iter()
            .map(|a| Artist { name: a.name.clone() })
            .collect(),
        album: Album {
            name: track.album.name.clone(),
        },
        duration_ms: track.duration.num_milliseconds() as u32,
    }
}
