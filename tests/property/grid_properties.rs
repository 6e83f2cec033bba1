// Property-based tests for grid construction and drag-and-drop transfers
// Checks the grid invariants over random months, week starts and events

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use rust_scheduler::models::event::Event;
use rust_scheduler::services::grid::{build_month_grid, build_week_grid, sort_timeline};
use rust_scheduler::services::transfer::DragTransferController;
use rust_scheduler::utils::date::{days_in_month, format_iso_date, hour_label};
use rust_scheduler::WeekStart;

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Monday), Just(WeekStart::Sunday)]
}

fn month_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: month grids are whole weeks covering the month exactly once
    #[test]
    fn prop_month_rows_are_full_weeks(reference in month_date(), start in week_start()) {
        let grid = build_month_grid(reference, &[], start);

        prop_assert!(grid.rows.iter().all(|row| row.buckets.len() == 7));

        let month_dates: Vec<NaiveDate> = grid
            .buckets()
            .filter(|b| b.in_current_month)
            .map(|b| b.date)
            .collect();
        let unique: HashSet<NaiveDate> = month_dates.iter().copied().collect();
        prop_assert_eq!(month_dates.len(), unique.len());
        prop_assert_eq!(
            month_dates.len() as u32,
            days_in_month(reference.year(), reference.month())
        );

        // Filler never takes a full row
        let first_row_fillers = grid.rows[0].buckets.iter().filter(|b| !b.in_current_month).count();
        prop_assert!(first_row_fillers < 7);
        let last_row_fillers = grid.rows.last().unwrap().buckets.iter().filter(|b| !b.in_current_month).count();
        prop_assert!(last_row_fillers < 7);
    }

    /// Property: every in-month event lands in exactly one bucket with its date
    #[test]
    fn prop_month_events_land_once(reference in month_date(), start in week_start(), days in prop::collection::vec(1..=28u32, 0..20)) {
        let events: Vec<Event> = days
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let date = NaiveDate::from_ymd_opt(reference.year(), reference.month(), *day).unwrap();
                Event::new(format!("e{}", i), "event", format_iso_date(date)).unwrap()
            })
            .collect();
        let grid = build_month_grid(reference, &events, start);

        for event in &events {
            let holders: Vec<_> = grid.buckets_containing(&event.id).collect();
            prop_assert_eq!(holders.len(), 1);
            prop_assert_eq!(format_iso_date(holders[0].date), event.date.clone());
        }
    }

    /// Property: building twice gives the same grid
    #[test]
    fn prop_grid_build_is_idempotent(reference in month_date(), start in week_start()) {
        let events = fixtures::events::clinic();
        prop_assert_eq!(
            build_month_grid(reference, &events, start),
            build_month_grid(reference, &events, start)
        );
        prop_assert_eq!(
            build_week_grid(reference, &events, start),
            build_week_grid(reference, &events, start)
        );
    }

    /// Property: a week drop keeps the event length whatever the target hour
    #[test]
    fn prop_week_drop_preserves_duration(start_hour in 0..20u32, length in 1..4u32, target_hour in 0..20u32, target_day in 0..7usize) {
        prop_assume!(target_hour != start_hour || target_day != 3);
        let start = hour_label(start_hour);
        let end = hour_label(start_hour + length);
        // Thursday of the May 2 2022 week
        let event = fixtures::events::timed("drag", "Dr Shaun Murphy", "2022-05-05", &start, &end);
        let mut grid = build_week_grid(fixtures::dates::may_5_2022(), std::slice::from_ref(&event), WeekStart::Monday);

        let source_id = grid.buckets_containing("drag").next().unwrap().id.clone();
        let source = grid.locate(&source_id).unwrap();
        let target_id = grid.rows[target_hour as usize].buckets[target_day].id.clone();
        let target = grid.locate(&target_id).unwrap();

        let mut controller = DragTransferController::new();
        controller.start_drag(event.clone(), source);
        controller.hover_enter(target);
        let moved = controller.drop(&mut grid).committed().cloned().unwrap();

        prop_assert_eq!(moved.start_hour.clone(), Some(hour_label(target_hour)));
        prop_assert_eq!(moved.end_hour.clone(), Some(hour_label(target_hour + length)));
        prop_assert_eq!(moved.duration_minutes(), event.duration_minutes());
        prop_assert_eq!(grid.buckets_containing("drag").count(), 1);
    }

    /// Property: timeline order is non-increasing by start-hour text
    #[test]
    fn prop_timeline_descending(hours in prop::collection::vec(0..24u32, 0..30)) {
        let events: Vec<Event> = hours
            .iter()
            .enumerate()
            .map(|(i, h)| fixtures::events::timed(&i.to_string(), "g", "2022-05-05", &hour_label(*h), &hour_label(*h)))
            .collect();
        let sorted = sort_timeline(&events);
        prop_assert_eq!(sorted.len(), events.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].start_hour >= pair[1].start_hour);
        }
    }
}
