//! Authorize view, shown while there is no usable token

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::UiState;

pub fn render_authorize(frame: &mut Frame, area: Rect, ui_state: &UiState, authorize_url: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Instructions + URL
            Constraint::Length(3), // Redirect input
            Constraint::Length(1), // Hint
        ])
        .split(area);

    let instructions = vec![
        Line::from("Open this URL in a browser and sign in:").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(authorize_url).style(Style::default().fg(Color::Cyan)),
        Line::from(""),
        Line::from("Then paste the URL you were redirected to below and press Enter."),
    ];
    let intro = Paragraph::new(instructions).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Authorize ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(intro, chunks[0]);

    let input = Paragraph::new(ui_state.authorize_input.as_str())
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Redirect URL ")
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(input, chunks[1]);

    if let Some(hint) = &ui_state.authorize_hint {
        let hint = Paragraph::new(format!(" {}", hint)).style(Style::default().fg(Color::Red));
        frame.render_widget(hint, chunks[2]);
    }
}
