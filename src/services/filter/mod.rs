//! Search filtering of the visible events.
//!
//! Filtering happens when a layout is built; the canonical event list is
//! never modified.

use crate::models::event::Event;
use crate::models::search::SearchToken;

/// Visible subset of `events` for the active search, order preserved.
///
/// Without a token (or with an empty one) every event is visible. Otherwise an
/// event is visible when its group label or its user is exactly equal to the
/// token's; a token field that is unset never matches.
pub fn filter_events(events: &[Event], token: Option<&SearchToken>) -> Vec<Event> {
    match token.filter(|t| !t.is_empty()) {
        None => events.to_vec(),
        Some(token) => events.iter().filter(|e| token.matches(e)).cloned().collect(),
    }
}

/// Borrowing variant of [`filter_events`]
pub fn visible<'a>(
    events: &'a [Event],
    token: Option<&'a SearchToken>,
) -> impl Iterator<Item = &'a Event> + 'a {
    let token = token.filter(|t| !t.is_empty());
    events
        .iter()
        .filter(move |e| token.map_or(true, |t| t.matches(e)))
}
