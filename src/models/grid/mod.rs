//! Grid data structures produced by the grid builders.
//!
//! A [`Grid`] is an ordered list of [`Row`]s, each an ordered list of
//! [`Bucket`]s. Month grids have one row per week with seven day buckets;
//! week and day grids have one row per hour with seven or one bucket.
//! Grids are rebuilt from the event list on every change and are only
//! mutated in place by a committed drag-and-drop transfer.
//!
//! Buckets always hold every event of their date/slot. The active search is
//! carried on the grid and only narrows what [`Grid::visible`] yields, so
//! drop checks still see events the search hides.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::search::SearchToken;
use crate::models::view::ViewMode;

/// A single cell: one day (month view) or one hour slot of a day (week/day view).
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub id: String,
    pub date: NaiveDate,
    /// Day of month shown in the cell
    pub day: u32,
    pub label: Option<String>,
    /// False for filler days borrowed from the adjacent months
    pub in_current_month: bool,
    pub events: Vec<Event>,
}

impl Bucket {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find_event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Event for the same entry as `event` (see [`Event::same_entry_as`])
    pub fn find_entry(&self, event: &Event) -> Option<&Event> {
        self.events.iter().find(|e| e.same_entry_as(event))
    }

    /// Remove the entry matching `event`, returning it when present
    pub fn take_entry(&mut self, event: &Event) -> Option<Event> {
        let index = self.events.iter().position(|e| e.same_entry_as(event))?;
        Some(self.events.remove(index))
    }

    /// Remove the event with `event_id`, returning it when present
    pub fn take_event(&mut self, event_id: &str) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == event_id)?;
        Some(self.events.remove(index))
    }
}

/// One week (month view) or one hour line (week/day view)
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    /// Hour label for time rows ("09:00 AM"); `None` for month weeks
    pub label: Option<String>,
    pub buckets: Vec<Bucket>,
}

impl Row {
    pub fn bucket(&self, bucket_id: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.id == bucket_id)
    }

    pub fn bucket_mut(&mut self, bucket_id: &str) -> Option<&mut Bucket> {
        self.buckets.iter_mut().find(|b| b.id == bucket_id)
    }

    /// Number of events on this line across all its buckets
    pub fn event_count(&self) -> usize {
        self.buckets.iter().map(|b| b.events.len()).sum()
    }
}

/// Header cell data for a grid column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    /// Date of the column for week/day grids
    pub date: Option<NaiveDate>,
}

/// Address of a bucket inside a grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketRef {
    pub row_index: usize,
    pub bucket_id: String,
}

impl BucketRef {
    pub fn new(row_index: usize, bucket_id: impl Into<String>) -> Self {
        Self {
            row_index,
            bucket_id: bucket_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub mode: ViewMode,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Search narrowing what is shown; `None` shows everything
    pub search: Option<SearchToken>,
}

impl Grid {
    pub fn bucket(&self, at: &BucketRef) -> Option<&Bucket> {
        self.rows.get(at.row_index)?.bucket(&at.bucket_id)
    }

    pub fn bucket_mut(&mut self, at: &BucketRef) -> Option<&mut Bucket> {
        self.rows.get_mut(at.row_index)?.bucket_mut(&at.bucket_id)
    }

    /// Locate a bucket by id anywhere in the grid
    pub fn locate(&self, bucket_id: &str) -> Option<BucketRef> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.bucket(bucket_id)
                .map(|_| BucketRef::new(row_index, bucket_id))
        })
    }

    pub fn buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.rows.iter().flat_map(|row| row.buckets.iter())
    }

    /// Events of `bucket` that the active search lets through, in order
    pub fn visible<'a>(&'a self, bucket: &'a Bucket) -> impl Iterator<Item = &'a Event> + 'a {
        bucket.events.iter().filter(move |e| self.is_visible(e))
    }

    pub fn is_visible(&self, event: &Event) -> bool {
        match self.search.as_ref().filter(|t| !t.is_empty()) {
            Some(token) => token.matches(event),
            None => true,
        }
    }

    /// All buckets holding an event with `event_id`
    pub fn buckets_containing<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a Bucket> {
        self.buckets().filter(move |b| b.find_event(event_id).is_some())
    }
}

/// What the rendering layer displays for the active mode
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    Grid(Grid),
    /// Timeline mode: sorted, filtered events with no bucketing
    Timeline(Vec<Event>),
}

impl Layout {
    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            Layout::Grid(grid) => Some(grid),
            Layout::Timeline(_) => None,
        }
    }

    pub fn as_grid_mut(&mut self) -> Option<&mut Grid> {
        match self {
            Layout::Grid(grid) => Some(grid),
            Layout::Timeline(_) => None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            Layout::Grid(grid) => grid.mode,
            Layout::Timeline(_) => ViewMode::Timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(id: &str, events: Vec<Event>) -> Bucket {
        Bucket {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2022, 5, 5).unwrap(),
            day: 5,
            label: None,
            in_current_month: true,
            events,
        }
    }

    #[test]
    fn test_take_event_removes_only_match() {
        let a = Event::new("a", "A", "2022-05-05").unwrap();
        let b = Event::new("b", "B", "2022-05-05").unwrap();
        let mut cell = bucket("2022-05-05", vec![a.clone(), b.clone()]);

        assert_eq!(cell.take_event("a"), Some(a));
        assert_eq!(cell.events, vec![b]);
        assert_eq!(cell.take_event("missing"), None);
    }

    #[test]
    fn test_grid_locate_and_count() {
        let a = Event::new("a", "A", "2022-05-05").unwrap();
        let grid = Grid {
            mode: ViewMode::Month,
            columns: Vec::new(),
            rows: vec![
                Row {
                    id: "0".into(),
                    label: None,
                    buckets: vec![bucket("x", Vec::new())],
                },
                Row {
                    id: "1".into(),
                    label: None,
                    buckets: vec![bucket("y", vec![a])],
                },
            ],
            search: None,
        };

        assert_eq!(grid.locate("y"), Some(BucketRef::new(1, "y")));
        assert_eq!(grid.locate("z"), None);
        assert_eq!(grid.rows[1].event_count(), 1);
        assert_eq!(grid.buckets_containing("a").count(), 1);
        assert!(grid.bucket(&BucketRef::new(0, "y")).is_none());
    }

    #[test]
    fn test_take_entry_picks_matching_slot() {
        let early = Event::builder()
            .id("1")
            .label("Early")
            .date("2022-05-05")
            .hours("09:00 AM", "10:00 AM")
            .build()
            .unwrap();
        let mut late = early.clone();
        late.label = "Late".into();
        late.start_hour = Some("11:00 AM".into());
        late.end_hour = Some("12:00 PM".into());
        let mut cell = bucket("2022-05-05", vec![early.clone(), late.clone()]);

        assert_eq!(cell.take_entry(&late), Some(late));
        assert_eq!(cell.events, vec![early]);
    }

    #[test]
    fn test_visible_keeps_hidden_events_in_bucket() {
        let mut shown = Event::new("a", "A", "2022-05-05").unwrap();
        shown.group_label = Some("X".into());
        let mut hidden = Event::new("b", "B", "2022-05-05").unwrap();
        hidden.group_label = Some("Y".into());
        let grid = Grid {
            mode: ViewMode::Month,
            columns: Vec::new(),
            rows: vec![Row {
                id: "0".into(),
                label: None,
                buckets: vec![bucket("2022-05-05", vec![shown, hidden])],
            }],
            search: Some(SearchToken::group("X")),
        };

        let cell = &grid.rows[0].buckets[0];
        let ids: Vec<&str> = grid.visible(cell).map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        assert_eq!(cell.events.len(), 2);
    }
}
