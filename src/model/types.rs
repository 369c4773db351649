//! Core type definitions for the application

/// Which pane of the player view has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
    Playlists,
    Queue,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Playlists,
            ActiveSection::Playlists => ActiveSection::Queue,
            ActiveSection::Queue => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Queue,
            ActiveSection::Results => ActiveSection::Search,
            ActiveSection::Playlists => ActiveSection::Results,
            ActiveSection::Queue => ActiveSection::Playlists,
        }
    }
}

/// A user's playlist (for sidebar display)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistItem {
    pub id: String,
    pub name: String,
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub result_selected: usize,
    pub playlist_selected: usize,
    pub playlist_track_selected: usize,
    pub queue_selected: usize,
    /// What the user pasted into the authorize view
    pub authorize_input: String,
    pub authorize_hint: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            result_selected: 0,
            playlist_selected: 0,
            playlist_track_selected: 0,
            queue_selected: 0,
            authorize_input: String::new(),
            authorize_hint: None,
        }
    }
}
