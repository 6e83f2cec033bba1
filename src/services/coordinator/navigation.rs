use chrono::{Duration, NaiveDate};

use super::{SchedulerListener, ViewModeCoordinator};
use crate::models::view::{NavigationDirection, ViewMode};
use crate::utils::date::shift_months;

impl<L: SchedulerListener> ViewModeCoordinator<L> {
    /// Previous / next by one unit of the active mode, or back to today
    pub fn navigate(&mut self, direction: NavigationDirection) {
        let target = match direction {
            NavigationDirection::Today => self.today,
            NavigationDirection::Prev => step_date(self.mode(), self.reference_date, -1),
            NavigationDirection::Next => step_date(self.mode(), self.reference_date, 1),
        };
        log::info!("Navigating {:?} to {}", direction, target);
        self.set_reference_date(target);
    }
}

/// Move `date` by `steps` units of the mode's granularity. Timeline pages by
/// month, like month view.
pub fn step_date(mode: ViewMode, date: NaiveDate, steps: i32) -> NaiveDate {
    match mode {
        ViewMode::Day => date + Duration::days(steps as i64),
        ViewMode::Week => date + Duration::weeks(steps as i64),
        ViewMode::Month | ViewMode::Timeline => shift_months(date, steps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::SchedulerConfig;
    use crate::services::coordinator::NoopListener;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewMode::Day, date(2022, 5, 6) ; "day")]
    #[test_case(ViewMode::Week, date(2022, 5, 12) ; "week")]
    #[test_case(ViewMode::Month, date(2022, 6, 5) ; "month")]
    #[test_case(ViewMode::Timeline, date(2022, 6, 5) ; "timeline")]
    fn test_step_forward(mode: ViewMode, expected: NaiveDate) {
        assert_eq!(step_date(mode, date(2022, 5, 5), 1), expected);
    }

    #[test]
    fn test_month_step_clamps_to_short_month() {
        assert_eq!(step_date(ViewMode::Month, date(2022, 3, 31), -1), date(2022, 2, 28));
    }

    #[test]
    fn test_navigate_prev_next_today() {
        let config = SchedulerConfig {
            mode: ViewMode::Week,
            ..SchedulerConfig::default()
        };
        let mut coordinator =
            ViewModeCoordinator::new(config, Vec::new(), date(2022, 5, 5), NoopListener);
        coordinator.set_today(date(2023, 1, 2));

        coordinator.navigate(NavigationDirection::Next);
        assert_eq!(coordinator.reference_date(), date(2022, 5, 12));

        coordinator.navigate(NavigationDirection::Prev);
        coordinator.navigate(NavigationDirection::Prev);
        assert_eq!(coordinator.reference_date(), date(2022, 4, 28));

        coordinator.navigate(NavigationDirection::Today);
        assert_eq!(coordinator.reference_date(), date(2023, 1, 2));
        let grid = coordinator.layout().as_grid().unwrap();
        assert_eq!(grid.columns[0].date, Some(date(2023, 1, 2)));
    }
}
