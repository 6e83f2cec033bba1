//! Locale tables.
//!
//! Maps a locale tag to its [`LocaleFormat`]. The table is plain data handed
//! to the coordinator through configuration; there is no process-wide
//! locale state. Unknown tags resolve to English.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::locale::LocaleFormat;
use crate::models::settings::WeekStart;
use crate::models::view::ViewMode;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone)]
pub struct LocaleTable {
    formats: HashMap<String, LocaleFormat>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocaleTable {
    /// Table holding the built-in locales (en, fr, de, es, ko)
    pub fn builtin() -> Self {
        let mut formats = HashMap::new();
        for format in builtin_formats() {
            formats.insert(format.tag.clone(), format);
        }
        Self { formats }
    }

    /// Built-in locales plus configured ones; a configured tag replaces
    /// the built-in table with the same tag.
    pub fn with_overrides(overrides: &[LocaleFormat]) -> Self {
        let mut table = Self::builtin();
        for format in overrides {
            table.insert(format.clone());
        }
        table
    }

    pub fn insert(&mut self, mut format: LocaleFormat) {
        format.tag = normalize_tag(&format.tag);
        self.formats.insert(format.tag.clone(), format);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Resolve a tag, falling back to the primary subtag and then English.
    pub fn resolve(&self, tag: &str) -> &LocaleFormat {
        if let Some(format) = self.lookup(tag) {
            return format;
        }
        log::warn!("Unknown locale '{}', falling back to '{}'", tag, DEFAULT_LOCALE);
        match self.formats.get(DEFAULT_LOCALE) {
            Some(format) => format,
            None => fallback_format(),
        }
    }

    fn lookup(&self, tag: &str) -> Option<&LocaleFormat> {
        let tag = normalize_tag(tag);
        self.formats.get(&tag).or_else(|| {
            let primary = tag.split(['-', '_']).next()?;
            self.formats.get(primary)
        })
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

fn fallback_format() -> &'static LocaleFormat {
    static FALLBACK: std::sync::OnceLock<LocaleFormat> = std::sync::OnceLock::new();
    FALLBACK.get_or_init(LocaleFormat::default)
}

impl LocaleFormat {
    /// Month name for a 1-based month number
    pub fn month_name(&self, month: u32) -> &str {
        self.month_names
            .get(month.saturating_sub(1) as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &str {
        &self.weekday_names[weekday.num_days_from_sunday() as usize]
    }

    pub fn weekday_short(&self, weekday: Weekday) -> &str {
        &self.weekday_short[weekday.num_days_from_sunday() as usize]
    }

    /// Full weekday names in column order for the given week start
    pub fn weekday_headers(&self, week_start: WeekStart) -> Vec<String> {
        let first = week_start.first_day_of_week() as usize;
        (0..7)
            .map(|offset| self.weekday_names[(first + offset) % 7].clone())
            .collect()
    }

    /// Toolbar title for month mode ("May 2022")
    pub fn format_month_title(&self, date: NaiveDate) -> String {
        self.fill(&self.month_title_pattern, date)
    }

    /// Long date for day/week/timeline headers ("May 5, 2022")
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        self.fill(&self.long_date_pattern, date)
    }

    pub fn mode_label(&self, mode: ViewMode) -> &str {
        match mode {
            ViewMode::Month => &self.labels.month,
            ViewMode::Week => &self.labels.week,
            ViewMode::Day => &self.labels.day,
            ViewMode::Timeline => &self.labels.timeline,
        }
    }

    fn fill(&self, pattern: &str, date: NaiveDate) -> String {
        pattern
            .replace("{weekday}", self.weekday_name(date.weekday()))
            .replace("{day}", &date.day().to_string())
            .replace("{month}", self.month_name(date.month()))
            .replace("{year}", &date.year().to_string())
    }
}

fn builtin_formats() -> Vec<LocaleFormat> {
    vec![
        LocaleFormat::default(),
        LocaleFormat::from_parts(
            "fr",
            [
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ],
            ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
            ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
            "{month} {year}",
            "{day} {month} {year}",
            ["Rechercher...", "Aujourd'hui", "Jour", "Semaine", "Mois", "Chronologie"],
        ),
        LocaleFormat::from_parts(
            "de",
            [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
            ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
            ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
            "{month} {year}",
            "{day}. {month} {year}",
            ["Suchen...", "Heute", "Tag", "Woche", "Monat", "Zeitleiste"],
        ),
        LocaleFormat::from_parts(
            "es",
            [
                "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
                "septiembre", "octubre", "noviembre", "diciembre",
            ],
            ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
            ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
            "{month} de {year}",
            "{day} de {month} de {year}",
            ["Buscar...", "Hoy", "Día", "Semana", "Mes", "Cronología"],
        ),
        LocaleFormat::from_parts(
            "ko",
            [
                "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월",
                "12월",
            ],
            ["일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일"],
            ["일", "월", "화", "수", "목", "금", "토"],
            "{year}년 {month}",
            "{year}년 {month} {day}일",
            ["검색...", "오늘", "일", "주", "월", "타임라인"],
        ),
    ]
}
