//! Key event handling

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::time::Instant;

use super::AppController;
use crate::api::MusicApi;
use crate::model::ActiveSection;

impl<A: MusicApi> AppController<A> {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        // Ctrl-Q quits from anywhere; other control chords are not text
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            model.set_should_quit(true);
            return Ok(());
        }

        // Authorize view
        if !model.is_authorized(Utc::now()) {
            match key.code {
                KeyCode::Enter => {
                    drop(model);
                    self.submit_authorize_input().await;
                }
                KeyCode::Esc => model.ui.authorize_input.clear(),
                KeyCode::Backspace => {
                    model.ui.authorize_input.pop();
                }
                KeyCode::Char(c) if !ctrl => model.ui.authorize_input.push(c),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::BackTab => {
                model.cycle_section_backward();
                return Ok(());
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward();
                } else {
                    model.cycle_section_forward();
                }
                return Ok(());
            }
            _ => {}
        }

        let section = model.ui.active_section;

        // Search box takes every printable key
        if section == ActiveSection::Search {
            match key.code {
                KeyCode::Char(c) if !ctrl => model.search_push_char(c, Instant::now()),
                KeyCode::Backspace => model.search_pop_char(Instant::now()),
                KeyCode::Esc => model.search_input("", Instant::now()),
                KeyCode::Down | KeyCode::Enter => model.set_active_section(ActiveSection::Results),
                _ => {}
            }
            return Ok(());
        }

        if ctrl {
            return Ok(());
        }

        match key.code {
            KeyCode::Up => model.move_selection_up(),
            KeyCode::Down => model.move_selection_down(),
            KeyCode::Enter => {
                let opens_playlist = section == ActiveSection::Playlists && model.open_playlist.is_none();
                drop(model);
                if opens_playlist {
                    self.open_selected_playlist().await;
                } else {
                    self.play_focused_track().await;
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                if section == ActiveSection::Playlists {
                    model.close_playlist();
                }
            }
            KeyCode::Char('/') => model.set_active_section(ActiveSection::Search),
            KeyCode::Char('a') => {
                drop(model);
                self.queue_focused_track().await;
            }
            KeyCode::Char('A') => {
                drop(model);
                self.enqueue_focused_track().await;
            }
            KeyCode::Char(' ') => {
                drop(model);
                self.toggle_playback().await;
            }
            KeyCode::Char('n') => {
                drop(model);
                self.next_track().await;
            }
            KeyCode::Char('p') => {
                drop(model);
                self.previous_track().await;
            }
            KeyCode::Char('q') => model.set_should_quit(true),
            _ => {}
        }

        Ok(())
    }
}
