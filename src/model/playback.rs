//! Now-playing state

use std::time::Instant;

use rspotify::model::{CurrentPlaybackContext, PlayableItem};
use rspotify::prelude::Id;

/// What the active device is playing, as of the last refresh
#[derive(Clone, Debug)]
pub struct NowPlaying {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub uri: String,
    pub duration_ms: u32,
    pub progress_ms: u32,
    pub is_playing: bool,
    pub device_name: Option<String>,
    pub fetched_at: Instant,
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self {
            name: "No track playing".to_string(),
            artist: String::new(),
            album: String::new(),
            uri: String::new(),
            duration_ms: 0,
            progress_ms: 0,
            is_playing: false,
            device_name: None,
            fetched_at: Instant::now(),
        }
    }
}

impl NowPlaying {
    pub fn from_playback(playback: &CurrentPlaybackContext) -> Self {
        let progress_ms = playback
            .progress
            .map(|d| d.num_milliseconds() as u32)
            .unwrap_or(0);
        let device_name = Some(playback.device.name.clone());

        let base = match &playback.item {
            Some(PlayableItem::Track(track)) => Self {
                name: track.name.clone(),
                artist: track
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                album: track.album.name.clone(),
                uri: track
                    .id
                    .as_ref()
                    .map(|id| format!("spotify:track:{}", id.id()))
                    .unwrap_or_default(),
                duration_ms: track.duration.num_milliseconds() as u32,
                ..Self::default()
            },
            Some(PlayableItem::Episode(episode)) => Self {
                name: episode.name.clone(),
                artist: episode.show.name.clone(),
                album: "Podcast".to_string(),
                uri: format!("spotify:episode:{}", episode.id.id()),
                duration_ms: episode.duration.num_milliseconds() as u32,
                ..Self::default()
            },
            _ => Self::default(),
        };

        Self {
            progress_ms,
            is_playing: playback.is_playing,
            device_name,
            ..base
        }
    }

    pub fn has_track(&self) -> bool {
        !self.uri.is_empty()
    }

    /// Progress extrapolated from the last refresh, so the bar moves between polls.
    pub fn position_ms(&self, now: Instant) -> u32 {
        if self.is_playing && self.duration_ms > 0 {
            let elapsed = now.saturating_duration_since(self.fetched_at).as_millis() as u32;
            self.progress_ms.saturating_add(elapsed).min(self.duration_ms)
        } else {
            self.progress_ms.min(self.duration_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn position_advances_only_while_playing() {
        let fetched_at = Instant::now();
        let mut np = NowPlaying {
            name: "Song".into(),
            uri: "spotify:track:x".into(),
            duration_ms: 10_000,
            progress_ms: 4_000,
            is_playing: true,
            fetched_at,
            ..NowPlaying::default()
        };

        assert_eq!(np.position_ms(fetched_at + Duration::from_millis(1500)), 5_500);
        assert_eq!(np.position_ms(fetched_at + Duration::from_secs(60)), 10_000);

        np.is_playing = false;
        assert_eq!(np.position_ms(fetched_at + Duration::from_millis(1500)), 4_000);
    }

    #[test]
    fn default_has_no_track() {
        let np = NowPlaying::default();
        assert!(!np.has_track());
        assert_eq!(np.name, "No track playing");
    }
}
