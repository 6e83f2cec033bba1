// Locale module
// Formatting rules for month/day names, date patterns and toolbar labels

use serde::{Deserialize, Serialize};

/// Toolbar strings; any missing entry falls back to English
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleLabels {
    pub search: String,
    pub today: String,
    pub day: String,
    pub week: String,
    pub month: String,
    pub timeline: String,
}

impl Default for LocaleLabels {
    fn default() -> Self {
        Self {
            search: "Search...".to_string(),
            today: "Today".to_string(),
            day: "Day".to_string(),
            week: "Week".to_string(),
            month: "Month".to_string(),
            timeline: "Timeline".to_string(),
        }
    }
}

/// Formatting table for one locale tag.
///
/// Patterns use `{weekday}`, `{day}`, `{month}` and `{year}` placeholders.
/// Weekday arrays are Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleFormat {
    pub tag: String,
    pub month_names: [String; 12],
    pub weekday_names: [String; 7],
    pub weekday_short: [String; 7],
    pub month_title_pattern: String,
    pub long_date_pattern: String,
    pub labels: LocaleLabels,
}

fn owned<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(str::to_string)
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self {
            tag: "en".to_string(),
            month_names: owned([
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            weekday_names: owned([
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            weekday_short: owned(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            month_title_pattern: "{month} {year}".to_string(),
            long_date_pattern: "{month} {day}, {year}".to_string(),
            labels: LocaleLabels::default(),
        }
    }
}

impl LocaleFormat {
    /// Build a table from string literals (used for the built-in locales)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        tag: &str,
        month_names: [&str; 12],
        weekday_names: [&str; 7],
        weekday_short: [&str; 7],
        month_title_pattern: &str,
        long_date_pattern: &str,
        labels: [&str; 6],
    ) -> Self {
        let [search, today, day, week, month, timeline] = labels.map(str::to_string);
        Self {
            tag: tag.to_string(),
            month_names: owned(month_names),
            weekday_names: owned(weekday_names),
            weekday_short: owned(weekday_short),
            month_title_pattern: month_title_pattern.to_string(),
            long_date_pattern: long_date_pattern.to_string(),
            labels: LocaleLabels {
                search,
                today,
                day,
                week,
                month,
                timeline,
            },
        }
    }
}
