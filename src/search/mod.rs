//! Search box state
//!
//! Keystrokes are debounced into remote searches; clearing the box cancels
//! the pending search and empties the results on the spot.

mod debounce;

use tokio::time::Instant;

use crate::api::{Item, SearchResponse};
use crate::config::SearchSettings;

pub use debounce::Debouncer;

#[derive(Debug)]
pub struct SearchBox {
    text: String,
    debouncer: Debouncer<String>,
    results: Vec<Item>,
    total: u32,
}

impl SearchBox {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            text: String::new(),
            debouncer: Debouncer::new(settings.debounce(), settings.max_wait()),
            results: Vec::new(),
            total: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn results(&self) -> &[Item] {
        &self.results
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        if self.text.is_empty() {
            self.debouncer.cancel();
            self.results.clear();
            self.total = 0;
        } else {
            self.debouncer.call(self.text.clone(), now);
        }
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut text = std::mem::take(&mut self.text);
        text.push(c);
        self.input(text, now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        let mut text = std::mem::take(&mut self.text);
        text.pop();
        self.input(text, now);
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// The query to send now, if the debounce window has run out.
    pub fn due_query(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Replace results with a response. Responses without a track collection,
    /// or landing after the box was cleared, are ignored.
    pub fn apply_response(&mut self, response: SearchResponse) -> bool {
        if self.text.is_empty() {
            return false;
        }
        match response.tracks {
            Some(page) => {
                self.results = page.items;
                self.total = page.total;
                true
            }
            None => false,
        }
    }

    /// "N result(s)" line, shown only while there is something to show.
    pub fn summary(&self) -> Option<String> {
        if self.text.is_empty() || self.results.is_empty() {
            None
        } else {
            Some(format!("{} result(s)", self.total))
        }
    }
}

#[cfg(test)]
mod tests;
