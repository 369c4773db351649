use std::time::Duration;

use tokio::time::Instant;

use super::*;
use crate::api::{Item, Page, SearchResponse};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn search_box() -> SearchBox {
    SearchBox::new(&SearchSettings::default())
}

fn response(names: &[&str], total: u32) -> SearchResponse {
    let items = names
        .iter()
        .map(|name| Item {
            id: name.to_string(),
            uri: format!("spotify:track:{}", name),
            name: name.to_string(),
            ..Default::default()
        })
        .collect();
    SearchResponse {
        tracks: Some(Page { items, total }),
    }
}

#[test]
fn debouncer_waits_for_quiet_period() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));

    d.call("a", t0);
    assert_eq!(d.poll(t0 + ms(799)), None);
    assert_eq!(d.poll(t0 + ms(800)), Some("a"));
    assert!(!d.is_pending());
    assert_eq!(d.poll(t0 + ms(5000)), None);
}

#[test]
fn debouncer_keeps_latest_value_and_restarts_wait() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));

    d.call("a", t0);
    d.call("ab", t0 + ms(100));
    assert_eq!(d.deadline(), Some(t0 + ms(900)));
    assert_eq!(d.poll(t0 + ms(850)), None);
    assert_eq!(d.poll(t0 + ms(900)), Some("ab"));
}

#[test]
fn debouncer_max_wait_caps_a_long_burst() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));

    // keystrokes every 300ms never leave an 800ms gap
    for step in 0..4u64 {
        d.call(step, t0 + ms(step * 300));
    }
    assert_eq!(d.deadline(), Some(t0 + ms(1000)));
    assert_eq!(d.poll(t0 + ms(999)), None);
    assert_eq!(d.poll(t0 + ms(1000)), Some(3));

    // typing goes on; the quiet period is still the nearer deadline
    d.call(4, t0 + ms(1100));
    assert_eq!(d.deadline(), Some(t0 + ms(1900)));
}

#[test]
fn ceiling_counts_from_last_release_while_typing_continues() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));

    for step in 0..10u64 {
        d.call(step, t0 + ms(step * 100));
    }
    assert_eq!(d.poll(t0 + ms(1000)), Some(9));

    // no gap after the release: the next ceiling is 1000ms after it
    for step in 11..20u64 {
        d.call(step, t0 + ms(step * 100));
    }
    assert_eq!(d.deadline(), Some(t0 + ms(2000)));
    assert_eq!(d.poll(t0 + ms(1999)), None);
    assert_eq!(d.poll(t0 + ms(2000)), Some(19));
}

#[test]
fn ceiling_restarts_after_a_quiet_gap() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));

    d.call("a", t0);
    assert_eq!(d.poll(t0 + ms(800)), Some("a"));

    d.call("b", t0 + ms(2000));
    for step in 1..5u64 {
        d.call("b", t0 + ms(2000 + step * 300));
    }
    assert_eq!(d.deadline(), Some(t0 + ms(3000)));
}

#[test]
fn cancel_forgets_the_previous_burst() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));

    d.call("a", t0);
    d.call("ab", t0 + ms(700));
    assert_eq!(d.poll(t0 + ms(1000)), Some("ab"));

    d.cancel();
    d.call("x", t0 + ms(1100));
    assert_eq!(d.deadline(), Some(t0 + ms(1900)));
    d.call("xy", t0 + ms(1800));
    assert_eq!(d.deadline(), Some(t0 + ms(2100)));
}

#[test]
fn debouncer_cancel_drops_pending_value() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(800), ms(1000));
    d.call("a", t0);
    d.cancel();
    assert_eq!(d.poll(t0 + ms(2000)), None);
    assert_eq!(d.deadline(), None);
}

#[test]
fn typing_then_clearing_sends_nothing() {
    let t0 = Instant::now();
    let mut sb = search_box();

    sb.push_char('a', t0);
    sb.push_char('b', t0 + ms(100));
    sb.push_char('c', t0 + ms(200));
    sb.input("", t0 + ms(500));

    assert_eq!(sb.due_query(t0 + ms(3000)), None);
    assert!(sb.results().is_empty());
    assert_eq!(sb.total(), 0);
}

#[test]
fn typed_query_becomes_due_after_debounce() {
    let t0 = Instant::now();
    let mut sb = search_box();

    sb.push_char('a', t0);
    sb.push_char('b', t0 + ms(100));
    sb.push_char('c', t0 + ms(200));

    assert_eq!(sb.due_query(t0 + ms(900)), None);
    assert_eq!(sb.due_query(t0 + ms(1000)), Some("abc".to_string()));
    assert!(!sb.has_pending_search());
}

#[test]
fn clearing_resets_results_synchronously() {
    let t0 = Instant::now();
    let mut sb = search_box();
    sb.input("abc", t0);
    assert!(sb.apply_response(response(&["x", "y"], 42)));
    assert_eq!(sb.total(), 42);
    assert_eq!(sb.summary().as_deref(), Some("42 result(s)"));

    sb.pop_char(t0 + ms(10));
    sb.pop_char(t0 + ms(20));
    sb.pop_char(t0 + ms(30));

    assert_eq!(sb.text(), "");
    assert!(sb.results().is_empty());
    assert_eq!(sb.total(), 0);
    assert_eq!(sb.summary(), None);
    assert!(!sb.has_pending_search());
}

#[test]
fn response_replaces_results_wholesale() {
    let t0 = Instant::now();
    let mut sb = search_box();
    sb.input("abc", t0);

    sb.apply_response(response(&["x", "y", "z"], 3));
    sb.apply_response(response(&["w"], 1));

    let ids: Vec<_> = sb.results().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["w"]);
    assert_eq!(sb.total(), 1);
}

#[test]
fn response_without_tracks_is_ignored() {
    let t0 = Instant::now();
    let mut sb = search_box();
    sb.input("abc", t0);
    sb.apply_response(response(&["x"], 1));

    assert!(!sb.apply_response(SearchResponse { tracks: None }));
    assert_eq!(sb.results().len(), 1);
    assert_eq!(sb.total(), 1);
}

#[test]
fn late_response_after_clear_is_ignored() {
    let t0 = Instant::now();
    let mut sb = search_box();
    sb.input("abc", t0);
    sb.input("", t0 + ms(900));

    assert!(!sb.apply_response(response(&["x"], 1)));
    assert!(sb.results().is_empty());
}
