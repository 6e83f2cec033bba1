//! View mode coordination.
//!
//! [`ViewModeCoordinator`] owns the view state (mode, reference date, locale,
//! week start, search) together with the host's event list, and rebuilds the
//! layout synchronously whenever any of them changes. Drag gestures from the
//! rendering layer are routed through its single [`DragTransferController`];
//! a committed drop updates the event list first, then rebuilds, then tells
//! the host.

mod listener;
mod navigation;

use chrono::{Local, NaiveDate};

use crate::models::event::Event;
use crate::models::grid::{BucketRef, Layout};
use crate::models::locale::LocaleFormat;
use crate::models::search::SearchToken;
use crate::models::settings::{SchedulerConfig, WeekStart};
use crate::models::view::ViewMode;
use crate::services::filter::filter_events;
use crate::services::grid::GridBuilder;
use crate::services::locale::LocaleTable;
use crate::services::search::SearchIndex;
use crate::services::transfer::{DragState, DragTransferController, TransferOutcome};

pub use listener::{NoopListener, SchedulerListener};
pub use navigation::step_date;

pub struct ViewModeCoordinator<L: SchedulerListener = NoopListener> {
    config: SchedulerConfig,
    locales: LocaleTable,
    reference_date: NaiveDate,
    today: NaiveDate,
    events: Vec<Event>,
    search: Option<SearchToken>,
    layout: Layout,
    drag: DragTransferController,
    listener: L,
}

impl<L: SchedulerListener> ViewModeCoordinator<L> {
    pub fn new(
        config: SchedulerConfig,
        events: Vec<Event>,
        reference_date: NaiveDate,
        listener: L,
    ) -> Self {
        let locales = LocaleTable::with_overrides(&config.locales);
        let mut coordinator = Self {
            config,
            locales,
            reference_date,
            today: Local::now().date_naive(),
            events,
            search: None,
            layout: Layout::Timeline(Vec::new()),
            drag: DragTransferController::new(),
            listener,
        };
        coordinator.rebuild();
        coordinator
    }

    pub fn mode(&self) -> ViewMode {
        self.config.mode
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn week_start(&self) -> WeekStart {
        self.config.week_start
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn locale(&self) -> &LocaleFormat {
        self.locales.resolve(&self.config.locale)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn search_token(&self) -> Option<&SearchToken> {
        self.search.as_ref()
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Date used by the "today" navigation button
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Toolbar title: month name in month mode, long date otherwise
    pub fn title(&self) -> String {
        let locale = self.locale();
        match self.config.mode {
            ViewMode::Month => locale.format_month_title(self.reference_date),
            _ => locale.format_long_date(self.reference_date),
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.config.mode == mode {
            return;
        }
        log::info!("Switching view mode {} -> {}", self.config.mode, mode);
        self.config.mode = mode;
        self.listener.on_mode_changed(mode);
        self.rebuild();
    }

    pub fn set_reference_date(&mut self, date: NaiveDate) {
        if self.reference_date == date {
            return;
        }
        self.reference_date = date;
        self.listener.on_date_range_changed(date);
        self.rebuild();
    }

    pub fn set_locale(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if self.config.locale == tag {
            return;
        }
        if !self.locales.contains(&tag) {
            log::warn!("Locale '{}' has no table, English formatting will be used", tag);
        }
        self.config.locale = tag;
        self.rebuild();
    }

    pub fn set_week_start(&mut self, week_start: WeekStart) {
        if self.config.week_start == week_start {
            return;
        }
        self.config.week_start = week_start;
        self.rebuild();
    }

    /// Replace the host's event list
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.rebuild();
    }

    /// Adopt host-controlled mode/date when they differ from ours. The host
    /// already knows these values, so nothing is echoed back.
    pub fn sync_host(&mut self, mode: Option<ViewMode>, date: Option<NaiveDate>) {
        let mut changed = false;
        if let Some(mode) = mode.filter(|m| *m != self.config.mode) {
            self.config.mode = mode;
            changed = true;
        }
        if let Some(date) = date.filter(|d| *d != self.reference_date) {
            self.reference_date = date;
            changed = true;
        }
        if changed {
            log::debug!(
                "Reconciled to host state {} {}",
                self.config.mode,
                self.reference_date
            );
            self.rebuild();
        }
    }

    /// Search options for the toolbar search box
    pub fn search_options(&self) -> SearchIndex {
        SearchIndex::new(&self.events)
    }

    /// Handle search box input. A match narrows the view to the matched
    /// event's group/user and jumps to its date; no match clears the filter.
    pub fn search(&mut self, input: &str) -> Option<Event> {
        let matched = self.search_options().resolve(input).cloned();
        self.search = matched.as_ref().map(SearchToken::from_event);
        self.listener.on_search_result(matched.as_ref());

        match matched.as_ref().and_then(Event::parsed_date) {
            Some(date) if date != self.reference_date => self.set_reference_date(date),
            _ => self.rebuild(),
        }
        matched
    }

    /// Set or clear the search filter directly
    pub fn set_search_token(&mut self, token: Option<SearchToken>) {
        self.search = token.filter(|t| !t.is_empty());
        self.rebuild();
    }

    /// Click on a cell (or, with `bucket_id` of `None`, on an hour label).
    ///
    /// In month view only empty days are reported. Returns whether the host
    /// was notified.
    pub fn select_cell(&mut self, row_index: usize, bucket_id: Option<&str>) -> bool {
        let Some(grid) = self.layout.as_grid() else {
            return false;
        };
        let Some(row) = grid.rows.get(row_index) else {
            return false;
        };
        let bucket = match bucket_id {
            Some(id) => match row.bucket(id) {
                Some(bucket) => Some(bucket),
                None => return false,
            },
            None => None,
        };

        let report = match grid.mode {
            ViewMode::Month => bucket.is_some_and(|b| b.is_empty()),
            _ => true,
        };
        if report {
            self.listener.on_cell_selected(row, bucket);
        }
        report
    }

    /// Click on an event
    pub fn select_event(&mut self, event_id: &str) -> bool {
        match self.events.iter().find(|e| e.id == event_id) {
            Some(event) => {
                self.listener.on_task_selected(event);
                true
            }
            None => false,
        }
    }

    /// Pick up `event_id` from `source`. Fails when the layout is not a grid
    /// or the event is not shown in that bucket.
    pub fn start_drag(&mut self, event_id: &str, source: BucketRef) -> bool {
        let event = self.layout.as_grid().and_then(|grid| {
            let bucket = grid.bucket(&source)?;
            grid.visible(bucket).find(|e| e.id == event_id).cloned()
        });
        match event {
            Some(event) => {
                self.drag.start_drag(event, source);
                true
            }
            None => false,
        }
    }

    pub fn hover_enter(&mut self, target: BucketRef) -> bool {
        self.drag.hover_enter(target)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Drop the dragged event on the hovered bucket.
    ///
    /// On success the canonical event list is updated and the layout rebuilt
    /// before the host is notified. Rejected drops change nothing.
    pub fn drop(&mut self) -> Option<Event> {
        let picked = match self.drag.state() {
            DragState::Dragging { source } | DragState::Hovering { source, .. } => {
                Some(source.event.clone())
            }
            DragState::Idle => None,
        };
        let outcome = match self.layout.as_grid_mut() {
            Some(grid) => self.drag.drop(grid),
            None => {
                self.drag.cancel();
                return None;
            }
        };

        let TransferOutcome::Committed(moved) = outcome else {
            return None;
        };

        let stored = match picked.as_ref() {
            Some(picked) => self.events.iter_mut().find(|e| e.same_entry_as(picked)),
            None => None,
        };
        if let Some(event) = stored {
            event.date = moved.date.clone();
            event.start_hour = moved.start_hour.clone();
            event.end_hour = moved.end_hour.clone();
        }
        self.rebuild();
        self.listener.on_events_changed(&moved);
        Some(moved)
    }

    fn rebuild(&mut self) {
        if self.drag.is_active() {
            log::debug!("Layout rebuilt during a drag, cancelling it");
            self.drag.cancel();
        }
        let locale = self.locales.resolve(&self.config.locale);
        let builder = GridBuilder::new(locale, self.config.week_start);
        // Grids keep hidden events in their buckets for the drop checks and
        // apply the search when read; the timeline is filtered up front.
        let mut layout = match self.config.mode {
            ViewMode::Timeline => builder.build(
                ViewMode::Timeline,
                self.reference_date,
                &filter_events(&self.events, self.search.as_ref()),
            ),
            mode => builder.build(mode, self.reference_date, &self.events),
        };
        if let Some(grid) = layout.as_grid_mut() {
            grid.search = self.search.clone();
        }
        self.layout = layout;
        self.listener.on_layout_changed(&self.layout);
    }
}
