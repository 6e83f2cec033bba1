//! Toolbar search options.
//!
//! Builds the option list shown by the search box (grouped by group label)
//! and resolves what the user typed or picked back to an event.

use crate::models::event::Event;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOption {
    /// Display label: `"<group> | (<start> - <end>)"`
    pub label: String,
    pub event: Event,
}

impl SearchOption {
    pub fn from_event(event: &Event) -> Self {
        let label = format!(
            "{} | ({} - {})",
            event.group_label.as_deref().unwrap_or(""),
            event.start_hour.as_deref().unwrap_or(""),
            event.end_hour.as_deref().unwrap_or("")
        );
        Self {
            label,
            event: event.clone(),
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.event.group_label.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    options: Vec<SearchOption>,
}

impl SearchIndex {
    /// Options sorted by group label (stable, ungrouped events first)
    pub fn new(events: &[Event]) -> Self {
        let mut options: Vec<SearchOption> = events.iter().map(SearchOption::from_event).collect();
        options.sort_by(|a, b| a.group().cmp(&b.group()));
        Self { options }
    }

    pub fn options(&self) -> &[SearchOption] {
        &self.options
    }

    /// Distinct group labels in option order
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for group in self.options.iter().filter_map(SearchOption::group) {
            if groups.last() != Some(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// Resolve search box input: exact option label first, then exact group
    /// label. Empty input resolves to nothing.
    pub fn resolve(&self, input: &str) -> Option<&Event> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|option| option.label == input)
            .or_else(|| self.options.iter().find(|option| option.group() == Some(input)))
            .map(|option| &option.event)
    }
}
