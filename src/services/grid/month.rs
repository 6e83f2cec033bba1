use chrono::{Datelike, Duration, NaiveDate};

use super::{index_by_date, DAYS_PER_WEEK};
use crate::models::event::Event;
use crate::models::grid::{Bucket, Column, Grid, Row};
use crate::models::locale::LocaleFormat;
use crate::models::settings::WeekStart;
use crate::models::view::ViewMode;
use crate::utils::date::{days_in_month, first_of_month, format_iso_date, get_week_start};

/// Month grid: whole weeks covering the reference month, padded with filler
/// days from the previous and next months so every row has seven buckets.
pub(super) fn build(
    locale: &LocaleFormat,
    week_start: WeekStart,
    reference: NaiveDate,
    events: &[Event],
) -> Grid {
    let first = first_of_month(reference);
    let grid_start = get_week_start(first, week_start.first_day_of_week());
    let leading = (first - grid_start).num_days() as usize;
    let month_days = days_in_month(first.year(), first.month()) as usize;
    let row_count = (leading + month_days).div_ceil(DAYS_PER_WEEK);

    let index = index_by_date(events);

    let rows = (0..row_count)
        .map(|row_index| {
            let buckets = (0..DAYS_PER_WEEK)
                .map(|column| {
                    let offset = (row_index * DAYS_PER_WEEK + column) as i64;
                    let date = grid_start + Duration::days(offset);
                    Bucket {
                        id: format_iso_date(date),
                        date,
                        day: date.day(),
                        label: None,
                        in_current_month: date.month() == first.month()
                            && date.year() == first.year(),
                        events: index
                            .get(&date)
                            .map(|found| found.iter().map(|e| (*e).clone()).collect())
                            .unwrap_or_default(),
                    }
                })
                .collect();
            Row {
                id: row_index.to_string(),
                label: None,
                buckets,
            }
        })
        .collect();

    let columns = locale
        .weekday_headers(week_start)
        .into_iter()
        .map(|header| Column { header, date: None })
        .collect();

    Grid {
        mode: ViewMode::Month,
        columns,
        rows,
        search: None,
    }
}
