// Settings module
// Scheduler configuration supplied by the host (or loaded from TOML)

use serde::{Deserialize, Serialize};

use crate::models::locale::LocaleFormat;
use crate::models::view::ViewMode;

/// First day of the week in month and week grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// 0 = Sunday, 1 = Monday
    pub fn first_day_of_week(&self) -> u8 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

/// Toolbar toggles; rendering concerns that pass through untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarOptions {
    pub show_search_bar: bool,
    pub show_switch_mode_buttons: bool,
    pub show_date_picker: bool,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            show_search_bar: true,
            show_switch_mode_buttons: true,
            show_date_picker: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub mode: ViewMode,
    pub week_start: WeekStart,
    /// Locale tag ("en", "fr", "ko", ...)
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    pub legacy_style: bool,
    /// Extra locale tables, overriding built-ins with the same tag
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locales: Vec<LocaleFormat>,
    pub toolbar: ToolbarOptions,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            mode: ViewMode::Month,
            week_start: WeekStart::Monday,
            locale: "en".to_string(),
            min_width: None,
            max_height: None,
            legacy_style: false,
            locales: Vec::new(),
            toolbar: ToolbarOptions::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.locale.trim().is_empty() {
            return Err("Locale tag cannot be empty".to_string());
        }
        if let (Some(min_width), Some(max_height)) = (self.min_width, self.max_height) {
            if min_width == 0 || max_height == 0 {
                return Err("Dimensions must be positive".to_string());
            }
        }
        for locale in &self.locales {
            if locale.tag.trim().is_empty() {
                return Err("Configured locale is missing its tag".to_string());
            }
        }
        Ok(())
    }
}
