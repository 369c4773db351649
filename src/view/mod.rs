//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `authorize`: The view shown until a token is present
//! - `layout`: Player grid and search input
//! - `content`: Results, playlists and queue lists
//! - `progress`: Now playing pane

mod authorize;
mod content;
mod layout;
mod progress;
mod utils;

use chrono::Utc;
use ratatui::Frame;

use crate::model::AppModel;

pub struct AppView;

impl AppView {
    /// Root shell: the authorize view without a valid token, the player otherwise.
    pub fn render(frame: &mut Frame, model: &AppModel, authorize_url: &str) {
        let area = frame.area();
        if model.is_authorized(Utc::now()) {
            layout::render_player(frame, area, model);
        } else {
            authorize::render_authorize(frame, area, &model.ui, authorize_url);
        }
    }
}
