//! Main application model with state management

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use super::content::PlaylistDetail;
use super::playback::NowPlaying;
use super::session::Session;
use super::spotify_client::SpotifyClient;
use super::types::{ActiveSection, PlaylistItem, UiState};
use crate::api::{Item, QueueItem};
use crate::auth::AccessToken;
use crate::config::SearchSettings;
use crate::search::SearchBox;

/// Main application model containing all state
pub struct AppModel {
    pub spotify: Option<SpotifyClient>,
    pub session: Session,
    pub search: SearchBox,
    pub queue: Vec<QueueItem>,
    pub now_playing: NowPlaying,
    pub playlists: Vec<PlaylistItem>,
    pub open_playlist: Option<PlaylistDetail>,
    pub ui: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(search: &SearchSettings) -> Self {
        Self {
            spotify: None,
            session: Session::default(),
            search: SearchBox::new(search),
            queue: Vec::new(),
            now_playing: NowPlaying::default(),
            playlists: Vec::new(),
            open_playlist: None,
            ui: UiState::default(),
            should_quit: false,
        }
    }

    pub fn set_spotify_client(&mut self, client: SpotifyClient) {
        self.spotify = Some(client);
    }

    pub fn spotify_client(&self) -> Option<SpotifyClient> {
        self.spotify.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub fn token(&self, now: DateTime<Utc>) -> Option<AccessToken> {
        self.session.token(now).cloned()
    }

    pub fn is_authorized(&self, now: DateTime<Utc>) -> bool {
        self.session.is_authorized(now)
    }

    pub fn authorize(&mut self, token: AccessToken) {
        self.session.set_token(token);
        self.ui.authorize_input.clear();
        self.ui.authorize_hint = None;
        self.ui.active_section = ActiveSection::Search;
    }

    /// Fall back to the authorize view once the token runs out.
    pub fn expire_session(&mut self, now: DateTime<Utc>) -> bool {
        if !self.session.clear_if_expired(now) {
            return false;
        }
        self.spotify = None;
        self.ui.authorize_hint = Some("Session expired, authorize again".to_string());
        true
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.search.input(text, now);
        self.clamp_result_selection();
    }

    pub fn search_push_char(&mut self, c: char, now: Instant) {
        self.search.push_char(c, now);
        self.clamp_result_selection();
    }

    pub fn search_pop_char(&mut self, now: Instant) {
        self.search.pop_char(now);
        self.clamp_result_selection();
    }

    fn clamp_result_selection(&mut self) {
        let len = self.search.results().len();
        if self.ui.result_selected >= len {
            self.ui.result_selected = len.saturating_sub(1);
        }
    }

    pub fn selected_result(&self) -> Option<&Item> {
        self.search.results().get(self.ui.result_selected)
    }

    // ========================================================================
    // Queue
    // ========================================================================

    /// Fold a remotely confirmed item into the visible queue.
    pub fn confirm_queued(&mut self, item: QueueItem) {
        self.queue.push(item);
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    pub fn set_playlists(&mut self, playlists: Vec<PlaylistItem>) {
        self.playlists = playlists;
        if self.ui.playlist_selected >= self.playlists.len() {
            self.ui.playlist_selected = self.playlists.len().saturating_sub(1);
        }
    }

    pub fn selected_playlist(&self) -> Option<&PlaylistItem> {
        self.playlists.get(self.ui.playlist_selected)
    }

    pub fn show_playlist(&mut self, detail: PlaylistDetail) {
        self.open_playlist = Some(detail);
        self.ui.playlist_track_selected = 0;
    }

    /// Back to the playlist list, with the closed playlist selected even if
    /// the list was reloaded while it was open.
    pub fn close_playlist(&mut self) {
        let Some(detail) = self.open_playlist.take() else {
            return;
        };
        if let Some(index) = self.playlists.iter().position(|p| p.id == detail.id) {
            self.ui.playlist_selected = index;
        }
    }

    pub fn selected_playlist_track(&self) -> Option<&Item> {
        self.open_playlist
            .as_ref()
            .and_then(|p| p.tracks.get(self.ui.playlist_track_selected))
    }

    /// The track the current focus points at, for play and queue actions.
    pub fn focused_track(&self) -> Option<&Item> {
        match self.ui.active_section {
            ActiveSection::Results => self.selected_result(),
            ActiveSection::Playlists => self.selected_playlist_track(),
            _ => None,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn cycle_section_forward(&mut self) {
        self.ui.active_section = self.ui.active_section.next();
    }

    pub fn cycle_section_backward(&mut self) {
        self.ui.active_section = self.ui.active_section.prev();
    }

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui.active_section = section;
    }

    fn selection_cursor(&mut self) -> Option<(&mut usize, usize)> {
        let playlist_open = self.open_playlist.as_ref().map(|p| p.tracks.len());
        let ui = &mut self.ui;
        match ui.active_section {
            ActiveSection::Results => Some((&mut ui.result_selected, self.search.results().len())),
            ActiveSection::Playlists => match playlist_open {
                Some(len) => Some((&mut ui.playlist_track_selected, len)),
                None => Some((&mut ui.playlist_selected, self.playlists.len())),
            },
            ActiveSection::Queue => Some((&mut ui.queue_selected, self.queue.len())),
            ActiveSection::Search => None,
        }
    }

    pub fn move_selection_up(&mut self) {
        if let Some((cursor, _)) = self.selection_cursor() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn move_selection_down(&mut self) {
        if let Some((cursor, len)) = self.selection_cursor() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Page, SearchResponse};

    fn model() -> AppModel {
        AppModel::new(&SearchSettings::default())
    }

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            uri: format!("spotify:track:{}", id),
            name: id.to_uppercase(),
            ..Default::default()
        }
    }

    #[test]
    fn authorize_resets_input_and_focus() {
        let mut m = model();
        m.ui.authorize_input = "garbage".into();
        m.ui.active_section = ActiveSection::Queue;

        m.authorize(AccessToken::new("tok").unwrap());

        assert!(m.is_authorized(Utc::now()));
        assert!(m.ui.authorize_input.is_empty());
        assert_eq!(m.ui.active_section, ActiveSection::Search);
    }

    #[test]
    fn expired_session_returns_to_authorize() {
        let now = Utc::now();
        let mut m = model();
        m.authorize(
            AccessToken::new("tok")
                .unwrap()
                .with_expiry(chrono::Duration::seconds(30), now),
        );
        assert!(!m.expire_session(now));

        assert!(m.expire_session(now + chrono::Duration::seconds(30)));
        assert!(!m.is_authorized(now));
        assert!(m.ui.authorize_hint.is_some());
    }

    #[test]
    fn closing_a_playlist_reselects_it_after_reload() {
        let mut m = model();
        m.set_playlists(vec![
            PlaylistItem { id: "p1".into(), name: "One".into() },
            PlaylistItem { id: "p2".into(), name: "Two".into() },
        ]);
        m.set_active_section(ActiveSection::Playlists);
        m.move_selection_down();
        m.show_playlist(PlaylistDetail {
            id: "p2".into(),
            name: "Two".into(),
            tracks: vec![item("a")],
        });

        m.set_playlists(vec![
            PlaylistItem { id: "p0".into(), name: "Zero".into() },
            PlaylistItem { id: "p1".into(), name: "One".into() },
            PlaylistItem { id: "p2".into(), name: "Two".into() },
        ]);
        m.close_playlist();

        assert!(m.open_playlist.is_none());
        assert_eq!(m.selected_playlist().map(|p| p.id.as_str()), Some("p2"));
    }

    #[test]
    fn confirmed_items_append_in_arrival_order() {
        let mut m = model();
        m.confirm_queued(QueueItem::new("b", "spotify:track:b"));
        m.confirm_queued(QueueItem::new("a", "spotify:track:a"));
        let ids: Vec<_> = m.queue.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn selection_is_clamped_when_results_are_cleared() {
        let now = Instant::now();
        let mut m = model();
        m.search_input("abc", now);
        m.search.apply_response(SearchResponse {
            tracks: Some(Page {
                items: vec![item("x"), item("y"), item("z")],
                total: 3,
            }),
        });
        m.set_active_section(ActiveSection::Results);
        m.move_selection_down();
        m.move_selection_down();
        m.move_selection_down();
        assert_eq!(m.ui.result_selected, 2);
        assert_eq!(m.focused_track().map(|t| t.id.as_str()), Some("z"));

        m.search_input("", now);
        assert_eq!(m.ui.result_selected, 0);
        assert!(m.focused_track().is_none());
    }

    #[test]
    fn playlist_navigation_switches_between_list_and_tracks() {
        let mut m = model();
        m.set_playlists(vec![
            PlaylistItem { id: "p1".into(), name: "One".into() },
            PlaylistItem { id: "p2".into(), name: "Two".into() },
        ]);
        m.set_active_section(ActiveSection::Playlists);
        m.move_selection_down();
        assert_eq!(m.selected_playlist().map(|p| p.id.as_str()), Some("p2"));
        assert!(m.focused_track().is_none());

        m.show_playlist(PlaylistDetail {
            id: "p2".into(),
            name: "Two".into(),
            tracks: vec![item("a"), item("b")],
        });
        m.move_selection_down();
        assert_eq!(m.focused_track().map(|t| t.id.as_str()), Some("b"));
        m.move_selection_up();
        m.move_selection_up();
        assert_eq!(m.focused_track().map(|t| t.id.as_str()), Some("a"));

        m.close_playlist();
        assert_eq!(m.ui.playlist_selected, 1);
    }
}
