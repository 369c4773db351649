//! List panes: search results, playlists and the confirmed queue

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::ListItem,
    Frame,
};

use super::utils::{
    calculate_num_width, format_duration, pane_block, render_scrollable_list, row_style, truncate_string,
};
use crate::api::Item;
use crate::model::{ActiveSection, AppModel};

pub fn render_results(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui.active_section == ActiveSection::Results;
    let results = model.search.results();

    let mut block = pane_block(" Results ", is_focused);
    if let Some(summary) = model.search.summary() {
        block = block.title_bottom(Line::from(format!(" {} ", summary)).right_aligned());
    }

    if results.is_empty() {
        let hint = if model.search.text().is_empty() {
            "Type in search to find music"
        } else {
            "No results"
        };
        let items = vec![ListItem::new(hint).style(Style::default().fg(Color::DarkGray))];
        render_scrollable_list(frame, area, items, None, block);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;
    let items = track_rows(
        results,
        model.ui.result_selected,
        is_focused,
        now_playing_uri(model),
        content_width,
    );
    render_scrollable_list(frame, area, items, Some(model.ui.result_selected), block);
}

pub fn render_playlists(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui.active_section == ActiveSection::Playlists;

    if let Some(detail) = &model.open_playlist {
        let title = format!(" {} ", detail.name);
        let block = pane_block(&title, is_focused);
        let content_width = area.width.saturating_sub(4) as usize;
        let items = track_rows(
            &detail.tracks,
            model.ui.playlist_track_selected,
            is_focused,
            now_playing_uri(model),
            content_width,
        );
        render_scrollable_list(frame, area, items, Some(model.ui.playlist_track_selected), block);
        return;
    }

    let items: Vec<ListItem> = model
        .playlists
        .iter()
        .enumerate()
        .map(|(i, playlist)| {
            ListItem::new(playlist.name.as_str()).style(row_style(i == model.ui.playlist_selected, is_focused))
        })
        .collect();

    render_scrollable_list(
        frame,
        area,
        items,
        Some(model.ui.playlist_selected),
        pane_block(" Playlists ", is_focused),
    );
}

pub fn render_queue(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui.active_section == ActiveSection::Queue;
    let block = pane_block(" Queue ", is_focused);

    if model.queue.is_empty() {
        let items = vec![ListItem::new("Queue is empty").style(Style::default().fg(Color::DarkGray))];
        render_scrollable_list(frame, area, items, None, block);
        return;
    }

    let num_width = calculate_num_width(model.queue.len());
    let items: Vec<ListItem> = model
        .queue
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let label = if entry.title.is_empty() { &entry.uri } else { &entry.title };
            ListItem::new(format!("{:>num_width$}  {}", i + 1, label))
                .style(row_style(i == model.ui.queue_selected, is_focused))
        })
        .collect();

    render_scrollable_list(frame, area, items, Some(model.ui.queue_selected), block);
}

fn now_playing_uri(model: &AppModel) -> Option<&str> {
    model
        .now_playing
        .has_track()
        .then_some(model.now_playing.uri.as_str())
}

fn track_rows<'a>(
    tracks: &'a [Item],
    selected_index: usize,
    is_focused: bool,
    current_playing_uri: Option<&str>,
    content_width: usize,
) -> Vec<ListItem<'a>> {
    // " {num}  {title}  {artist}  {album}  {duration}"
    let num_width = calculate_num_width(tracks.len());
    let duration_width = 6;
    let remaining = content_width.saturating_sub(num_width + 2 + 2 + 2 + 2 + duration_width);
    let title_width = (remaining * 40) / 100;
    let artist_width = (remaining * 30) / 100;
    let album_width = remaining.saturating_sub(title_width + artist_width);

    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let mut style = row_style(i == selected_index, is_focused);
            if current_playing_uri == Some(track.uri.as_str()) {
                style = style.fg(Color::Cyan).add_modifier(Modifier::ITALIC);
            }
            ListItem::new(format!(
                "{:>num_width$}  {}  {}  {}  {:>duration_width$}",
                i + 1,
                truncate_string(&track.name, title_width),
                truncate_string(&track.artist_names(), artist_width),
                truncate_string(&track.album.name, album_width),
                format_duration(track.duration_ms),
            ))
            .style(style)
        })
        .collect()
}
