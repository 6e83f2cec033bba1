use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::grid::{Bucket, Layout, Row};
use crate::models::view::ViewMode;

/// Notifications from the scheduler to the embedding host.
///
/// Every method has an empty default so hosts only implement what they use.
pub trait SchedulerListener {
    /// An event was moved by drag and drop
    fn on_events_changed(&mut self, _event: &Event) {}

    /// A cell was clicked. `bucket` is `None` for a click on an hour label.
    fn on_cell_selected(&mut self, _row: &Row, _bucket: Option<&Bucket>) {}

    fn on_task_selected(&mut self, _event: &Event) {}

    /// Search input changed; carries the matched event, if any
    fn on_search_result(&mut self, _event: Option<&Event>) {}

    fn on_mode_changed(&mut self, _mode: ViewMode) {}

    fn on_date_range_changed(&mut self, _reference: NaiveDate) {}

    /// The layout was rebuilt and should be rendered again
    fn on_layout_changed(&mut self, _layout: &Layout) {}
}

/// Listener that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl SchedulerListener for NoopListener {}
