// Event module
// Host-owned scheduler event as exchanged with the embedding application

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::date::{parse_hour_label, parse_iso_date};

/// Scheduler event.
///
/// The host application owns the event list; the scheduler only rewrites
/// `date`, `start_hour` and `end_hour` when an event is dragged to another
/// bucket. Dates and hours are kept as the host supplied them so that
/// malformed values can be skipped instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// ISO calendar date (`yyyy-MM-dd`)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<String>,
    /// Opaque rendering payload, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<serde_json::Value>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use rust_scheduler::models::event::Event;
    ///
    /// let event = Event::new("evt-1", "Consultation", "2022-05-05").unwrap();
    /// assert_eq!(event.start_hour, None);
    /// ```
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            label: label.into(),
            group_label: None,
            user: None,
            color: None,
            date: date.into(),
            start_hour: None,
            end_hour: None,
            icon: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if parse_iso_date(&self.date).is_err() {
            return Err(format!("Event date '{}' is not a yyyy-MM-dd date", self.date));
        }

        for hour in [&self.start_hour, &self.end_hour].into_iter().flatten() {
            if parse_hour_label(hour).is_err() {
                return Err(format!("Event hour '{}' is not a time of day", hour));
            }
        }

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Parsed calendar date, `None` when the host supplied garbage
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date).ok()
    }

    pub fn parsed_start(&self) -> Option<NaiveTime> {
        self.start_hour.as_deref().and_then(|h| parse_hour_label(h).ok())
    }

    pub fn parsed_end(&self) -> Option<NaiveTime> {
        self.end_hour.as_deref().and_then(|h| parse_hour_label(h).ok())
    }

    /// Duration in minutes between start and end hour, when both parse
    pub fn duration_minutes(&self) -> Option<i64> {
        Some((self.parsed_end()? - self.parsed_start()?).num_minutes())
    }

    /// True when both events occupy the same time slot (id and hours equal)
    pub fn same_slot_as(&self, other: &Event) -> bool {
        self.id == other.id && self.start_hour == other.start_hour && self.end_hour == other.end_hour
    }

    /// Same slot on the same date. Ids alone are not unique in host data.
    pub fn same_entry_as(&self, other: &Event) -> bool {
        self.same_slot_as(other) && self.date == other.date
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    label: Option<String>,
    group_label: Option<String>,
    user: Option<String>,
    color: Option<String>,
    date: Option<String>,
    start_hour: Option<String>,
    end_hour: Option<String>,
    icon: Option<serde_json::Value>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn group_label(mut self, group_label: impl Into<String>) -> Self {
        self.group_label = Some(group_label.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set start and end hour labels ("09:00 AM", "10:00 AM")
    pub fn hours(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_hour = Some(start.into());
        self.end_hour = Some(end.into());
        self
    }

    pub fn start_hour(mut self, start: impl Into<String>) -> Self {
        self.start_hour = Some(start.into());
        self
    }

    pub fn icon(mut self, icon: serde_json::Value) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let date = self.date.ok_or("Event date is required")?;

        let event = Event {
            id,
            label: self.label.unwrap_or_default(),
            group_label: self.group_label,
            user: self.user,
            color: self.color,
            date,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            icon: self.icon,
        };

        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_event_success() {
        let event = Event::new("1", "Consultation", "2022-05-05").unwrap();
        assert_eq!(event.label, "Consultation");
        assert_eq!(event.parsed_date(), NaiveDate::from_ymd_opt(2022, 5, 5));
        assert!(event.group_label.is_none());
    }

    #[test]
    fn test_new_event_empty_id() {
        let result = Event::new("  ", "Consultation", "2022-05-05");
        assert_eq!(result.unwrap_err(), "Event id cannot be empty");
    }

    #[test]
    fn test_new_event_invalid_date() {
        assert!(Event::new("1", "Consultation", "2022-13-01").is_err());
    }

    #[test]
    fn test_builder_with_hours() {
        let event = Event::builder()
            .id("1")
            .label("Surgery")
            .group_label("Dr Shaun Murphy")
            .user("Dr Shaun Murphy")
            .color("#f28f6a")
            .date("2022-05-05")
            .hours("09:00 AM", "10:30 AM")
            .build()
            .unwrap();

        assert_eq!(event.duration_minutes(), Some(90));
        assert_eq!(event.user.as_deref(), Some("Dr Shaun Murphy"));
    }

    #[test]
    fn test_builder_rejects_bad_hour() {
        let result = Event::builder()
            .id("1")
            .date("2022-05-05")
            .hours("soon", "10:00 AM")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_bad_color() {
        let result = Event::builder().id("1").date("2022-05-05").color("red").build();
        assert_eq!(
            result.unwrap_err(),
            "Color must be in hex format (#RRGGBB or #RGB)"
        );
    }

    #[test]
    fn test_builder_requires_id_and_date() {
        assert_eq!(
            Event::builder().date("2022-05-05").build().unwrap_err(),
            "Event id is required"
        );
        assert_eq!(
            Event::builder().id("1").build().unwrap_err(),
            "Event date is required"
        );
    }

    #[test]
    fn test_same_slot_as() {
        let a = Event::builder()
            .id("1")
            .date("2022-05-05")
            .hours("09:00 AM", "10:00 AM")
            .build()
            .unwrap();
        let mut b = a.clone();
        b.date = "2022-05-06".to_string();
        assert!(a.same_slot_as(&b));

        b.end_hour = Some("11:00 AM".to_string());
        assert!(!a.same_slot_as(&b));
    }

    #[test]
    fn test_deserialize_host_json() {
        let json = r##"{
            "id": "event-1",
            "label": "Medical consultation",
            "groupLabel": "Dr Shaun Murphy",
            "user": "Dr Shaun Murphy",
            "color": "#f28f6a",
            "startHour": "04:00 AM",
            "endHour": "05:00 AM",
            "date": "2022-05-05",
            "icon": {"name": "schedule"}
        }"##;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.group_label.as_deref(), Some("Dr Shaun Murphy"));
        assert_eq!(event.start_hour.as_deref(), Some("04:00 AM"));
        assert!(event.icon.is_some());

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["groupLabel"], "Dr Shaun Murphy");
    }

    #[test]
    fn test_deserialize_keeps_malformed_date() {
        let event: Event =
            serde_json::from_str(r#"{"id": "x", "label": "x", "date": "someday"}"#).unwrap();
        assert!(event.parsed_date().is_none());
        assert!(event.validate().is_err());
    }
}
