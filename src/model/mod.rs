//! Model module - Application state and data types
//!
//! - `types`: focus and UI state
//! - `session`: the token store
//! - `playback`: now-playing state
//! - `content`: opened playlist contents
//! - `spotify_client`: rspotify wrapper for library and transport calls
//! - `app_model`: the application model with its state transitions

mod types;
mod session;
mod playback;
mod content;
mod spotify_client;
mod app_model;

pub use types::{ActiveSection, UiState};
pub use playback::NowPlaying;
pub use content::PlaylistDetail;
pub use spotify_client::SpotifyClient;
pub use app_model::AppModel;
