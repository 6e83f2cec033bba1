//! Grid construction for every view mode.
//!
//! Builders are pure: the same reference date, week start and events always
//! produce the same grid. Events whose date (or, in hourly grids, start hour)
//! cannot be parsed are left out of every bucket instead of failing the build.

mod hourly;
mod month;
mod timeline;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::grid::{Grid, Layout};
use crate::models::locale::LocaleFormat;
use crate::models::settings::WeekStart;
use crate::models::view::ViewMode;
use crate::utils::date::parse_iso_date;

pub use timeline::sort_timeline;

/// Number of hour rows in week and day grids, midnight through 23:00
pub const HOURS_PER_DAY: u32 = 24;

/// Days per month-grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Grid builder bound to a locale (for column headers) and a week start.
pub struct GridBuilder<'a> {
    locale: &'a LocaleFormat,
    week_start: WeekStart,
}

impl<'a> GridBuilder<'a> {
    pub fn new(locale: &'a LocaleFormat, week_start: WeekStart) -> Self {
        Self { locale, week_start }
    }

    /// Build the layout for `mode`. Timeline mode returns the events sorted
    /// for display; the caller is expected to have filtered them already.
    pub fn build(&self, mode: ViewMode, reference: NaiveDate, events: &[Event]) -> Layout {
        match mode {
            ViewMode::Month => Layout::Grid(self.month(reference, events)),
            ViewMode::Week => Layout::Grid(self.week(reference, events)),
            ViewMode::Day => Layout::Grid(self.day(reference, events)),
            ViewMode::Timeline => Layout::Timeline(sort_timeline(events)),
        }
    }

    pub fn month(&self, reference: NaiveDate, events: &[Event]) -> Grid {
        month::build(self.locale, self.week_start, reference, events)
    }

    pub fn week(&self, reference: NaiveDate, events: &[Event]) -> Grid {
        hourly::build_week(self.locale, self.week_start, reference, events)
    }

    pub fn day(&self, reference: NaiveDate, events: &[Event]) -> Grid {
        hourly::build_day(self.locale, reference, events)
    }
}

/// Month grid with English column headers
pub fn build_month_grid(reference: NaiveDate, events: &[Event], week_start: WeekStart) -> Grid {
    GridBuilder::new(&LocaleFormat::default(), week_start).month(reference, events)
}

/// Week grid (24 hour rows x 7 days) with English column headers
pub fn build_week_grid(reference: NaiveDate, events: &[Event], week_start: WeekStart) -> Grid {
    GridBuilder::new(&LocaleFormat::default(), week_start).week(reference, events)
}

/// Day grid (24 hour rows x 1 day) with English column headers
pub fn build_day_grid(reference: NaiveDate, events: &[Event]) -> Grid {
    GridBuilder::new(&LocaleFormat::default(), WeekStart::default()).day(reference, events)
}

/// Group events by parsed date, preserving input order within each date.
fn index_by_date(events: &[Event]) -> HashMap<NaiveDate, Vec<&Event>> {
    let mut index: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
    for event in events {
        match parse_iso_date(&event.date) {
            Ok(date) => index.entry(date).or_default().push(event),
            Err(err) => log::debug!("Skipping event '{}': {}", event.id, err),
        }
    }
    index
}
