use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::{index_by_date, HOURS_PER_DAY};
use crate::models::event::Event;
use crate::models::grid::{Bucket, Column, Grid, Row};
use crate::models::locale::LocaleFormat;
use crate::models::settings::WeekStart;
use crate::models::view::ViewMode;
use crate::utils::date::{format_iso_date, get_week_start, hour_label};

pub(super) fn build_week(
    locale: &LocaleFormat,
    week_start: WeekStart,
    reference: NaiveDate,
    events: &[Event],
) -> Grid {
    let first = get_week_start(reference, week_start.first_day_of_week());
    let dates: Vec<NaiveDate> = (0..7).map(|offset| first + Duration::days(offset)).collect();
    build(locale, ViewMode::Week, &dates, events)
}

pub(super) fn build_day(locale: &LocaleFormat, reference: NaiveDate, events: &[Event]) -> Grid {
    build(locale, ViewMode::Day, &[reference], events)
}

/// One row per hour; an event belongs to the bucket whose date equals the
/// event date and whose row label equals the upper-cased start hour.
///
/// Rows run from `00:00 AM` to `23:00 PM`. There is no closing `24:00` row:
/// it would repeat midnight and could not be dropped onto as a start time.
fn build(locale: &LocaleFormat, mode: ViewMode, dates: &[NaiveDate], events: &[Event]) -> Grid {
    let by_date = index_by_date(events);
    let mut by_slot: HashMap<(NaiveDate, String), Vec<&Event>> = HashMap::new();
    for (date, day_events) in by_date {
        for event in day_events {
            if let Some(start) = event.start_hour.as_deref() {
                by_slot
                    .entry((date, start.to_uppercase()))
                    .or_default()
                    .push(event);
            }
        }
    }

    let rows = (0..HOURS_PER_DAY)
        .map(|hour| {
            let label = hour_label(hour);
            let buckets = dates
                .iter()
                .map(|&date| {
                    let events = by_slot
                        .get(&(date, label.clone()))
                        .map(|found| found.iter().map(|e| (*e).clone()).collect())
                        .unwrap_or_default();
                    Bucket {
                        id: format!("{}_{:02}", format_iso_date(date), hour),
                        date,
                        day: date.day(),
                        label: Some(label.clone()),
                        in_current_month: true,
                        events,
                    }
                })
                .collect();
            Row {
                id: hour.to_string(),
                label: Some(label),
                buckets,
            }
        })
        .collect();

    let columns = dates
        .iter()
        .map(|&date| Column {
            header: format!(
                "{} {}/{}",
                locale.weekday_short(date.weekday()),
                date.month(),
                date.day()
            ),
            date: Some(date),
        })
        .collect();

    Grid {
        mode,
        columns,
        rows,
        search: None,
    }
}
