use crate::models::event::Event;

/// Timeline ordering: descending by the raw start-hour string, stable for
/// equal values, events without a start hour last.
///
/// The comparison is lexicographic on the label text, not on the time of
/// day, so "09:00 AM" sorts after "13:00 PM" only because '1' > '0'.
pub fn sort_timeline(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.start_hour.cmp(&a.start_hour));
    sorted
}
