// View module
// Scheduler view modes and toolbar navigation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
    Timeline,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Month,
        ViewMode::Week,
        ViewMode::Day,
        ViewMode::Timeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
            ViewMode::Timeline => "timeline",
        }
    }

    /// Whether the mode buckets events by hour rows
    pub fn is_hourly(&self) -> bool {
        matches!(self, ViewMode::Week | ViewMode::Day)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            "timeline" => Ok(ViewMode::Timeline),
            other => Err(format!("Unknown view mode '{}'", other)),
        }
    }
}

/// Toolbar navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Prev,
    Next,
    Today,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_round_trip_through_str() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.as_str().parse::<ViewMode>(), Ok(mode));
        }
        assert_eq!("WEEK".parse::<ViewMode>(), Ok(ViewMode::Week));
        assert!("year".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_hourly_modes() {
        assert!(ViewMode::Week.is_hourly());
        assert!(ViewMode::Day.is_hourly());
        assert!(!ViewMode::Month.is_hourly());
        assert!(!ViewMode::Timeline.is_hourly());
    }
}
