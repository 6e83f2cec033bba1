// Test fixtures - reusable test data
// Provides consistent events and dates across the integration and property tests

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_scheduler::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday May 5, 2022
    pub fn may_5_2022() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 5, 5).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn timed(id: &str, group: &str, date: &str, start: &str, end: &str) -> Event {
        Event::builder()
            .id(id)
            .label(format!("Appointment {}", id))
            .group_label(group)
            .user(group)
            .color("#f28f6a")
            .date(date)
            .hours(start, end)
            .build()
            .unwrap()
    }

    /// Clinic schedule: two events share "Dr Shaun Murphy"
    pub fn clinic() -> Vec<Event> {
        vec![
            timed("event-1", "Dr Shaun Murphy", "2022-05-04", "04:00 AM", "05:00 AM"),
            timed("event-2", "Dr Claire Brawn", "2022-05-05", "09:00 AM", "10:00 AM"),
            timed("event-3", "Dr Shaun Murphy", "2022-05-10", "13:00 PM", "14:00 PM"),
            timed("event-4", "Dr Menlendez Hary", "2022-05-18", "08:00 AM", "09:30 AM"),
        ]
    }

    /// The same schedule as the host application sends it
    pub fn clinic_json() -> &'static str {
        r##"[
            {"id": "event-1", "label": "Appointment event-1", "groupLabel": "Dr Shaun Murphy",
             "user": "Dr Shaun Murphy", "color": "#f28f6a", "date": "2022-05-04",
             "startHour": "04:00 AM", "endHour": "05:00 AM"},
            {"id": "event-2", "label": "Appointment event-2", "groupLabel": "Dr Claire Brawn",
             "user": "Dr Claire Brawn", "color": "#f28f6a", "date": "2022-05-05",
             "startHour": "09:00 AM", "endHour": "10:00 AM"},
            {"id": "event-3", "label": "Appointment event-3", "groupLabel": "Dr Shaun Murphy",
             "user": "Dr Shaun Murphy", "color": "#f28f6a", "date": "2022-05-10",
             "startHour": "13:00 PM", "endHour": "14:00 PM"},
            {"id": "event-4", "label": "Appointment event-4", "groupLabel": "Dr Menlendez Hary",
             "user": "Dr Menlendez Hary", "color": "#f28f6a", "date": "2022-05-18",
             "startHour": "08:00 AM", "endHour": "09:30 AM"}
        ]"##
    }
}
