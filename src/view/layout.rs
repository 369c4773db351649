//! Player grid and the search input

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::{content, progress, utils::pane_block};
use crate::model::{ActiveSection, AppModel};

/// Now playing and playlists on the left, queue and search on the right.
pub fn render_player(frame: &mut Frame, area: Rect, model: &AppModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Now playing
            Constraint::Min(0),    // Playlists
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Queue
            Constraint::Length(3),      // Search input
            Constraint::Min(0),         // Results
        ])
        .split(columns[1]);

    progress::render_now_playing(frame, left[0], &model.now_playing);
    content::render_playlists(frame, left[1], model);
    content::render_queue(frame, right[0], model);
    render_search_input(frame, right[1], model);
    content::render_results(frame, right[2], model);

    let hints = Paragraph::new(" Tab: switch pane  Enter: play  a: queue  A: quick add  Space: play/pause  n/p: skip  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, rows[1]);
}

fn render_search_input(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui.active_section == ActiveSection::Search;

    let (text, style) = if model.search.text().is_empty() {
        ("Type to search...", Style::default().fg(Color::DarkGray))
    } else if is_focused {
        (model.search.text(), Style::default().fg(Color::Green))
    } else {
        (model.search.text(), Style::default().fg(Color::White))
    };

    let title = if model.search.has_pending_search() {
        " Search … "
    } else {
        " Search "
    };
    let search = Paragraph::new(text).style(style).block(pane_block(title, is_focused));
    frame.render_widget(search, area);
}
