//! Now playing pane with progress gauge

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::utils::format_duration;
use crate::model::NowPlaying;

pub fn render_now_playing(frame: &mut Frame, area: Rect, now_playing: &NowPlaying) {
    let status_text = if !now_playing.has_track() {
        format!(" {}", now_playing.name)
    } else if now_playing.is_playing {
        format!(" ▶ {}", now_playing.name)
    } else {
        format!("⏸  {}", now_playing.name)
    };

    let device = now_playing.device_name.as_deref().unwrap_or("No device");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Now Playing ")
        .title_bottom(Line::from(format!(" {} ", device)).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title, artist/album
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

    let mut lines = vec![Line::from(status_text)];
    if now_playing.has_track() {
        lines.push(
            Line::from(format!("   {} ({})", now_playing.artist, now_playing.album))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let progress_ms = now_playing.position_ms(Instant::now());
    let time_str = format!(
        "{} / {}",
        format_duration(progress_ms),
        format_duration(now_playing.duration_ms)
    );
    let progress_ratio = if now_playing.duration_ms > 0 {
        (progress_ms as f64 / now_playing.duration_ms as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress_ratio)
        .label(time_str);
    frame.render_widget(gauge, chunks[1]);
}
