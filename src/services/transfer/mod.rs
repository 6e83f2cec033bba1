//! Drag-and-drop rescheduling.
//!
//! A single [`DragTransferController`] holds the state of the one drag gesture
//! that can be in progress. Dropping commits the transfer into the grid
//! all-or-nothing: either the event is moved and rewritten, or nothing changes.
//!
//! ```text
//! Idle --start_drag--> Dragging --hover_enter--> Hovering --drop--> Idle
//!                         |                          |
//!                         +--------- cancel ---------+--> Idle
//! ```

use chrono::NaiveTime;

use crate::models::event::Event;
use crate::models::grid::{Bucket, BucketRef, Grid};
use crate::utils::date::{format_hour_label, format_iso_date, parse_hour_label};

/// Where a drag started: the event as it was picked up and its bucket
#[derive(Debug, Clone, PartialEq)]
pub struct DragSource {
    pub event: Event,
    pub bucket: BucketRef,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: DragSource,
    },
    Hovering {
        source: DragSource,
        target: BucketRef,
    },
}

/// Why a drop did not move anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRejection {
    /// Drop without an active drag
    NotDragging,
    /// Drop before any bucket was hovered
    NoTarget,
    SameBucket,
    SourceMissing,
    TargetMissing,
    /// Target already holds the event (or an identical slot)
    Conflict,
    UnparseableTime,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    Committed(Event),
    Rejected(TransferRejection),
}

impl TransferOutcome {
    pub fn committed(&self) -> Option<&Event> {
        match self {
            TransferOutcome::Committed(event) => Some(event),
            TransferOutcome::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DragTransferController {
    state: DragState,
}

impl DragTransferController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Begin dragging `event` out of `source`. A drag already in progress is
    /// replaced.
    pub fn start_drag(&mut self, event: Event, source: BucketRef) {
        if self.is_active() {
            log::debug!("Replacing unfinished drag with '{}'", event.id);
        }
        self.state = DragState::Dragging {
            source: DragSource {
                event,
                bucket: source,
            },
        };
    }

    /// Record the bucket under the pointer. Returns false when no drag is
    /// active.
    pub fn hover_enter(&mut self, target: BucketRef) -> bool {
        self.state = match std::mem::take(&mut self.state) {
            DragState::Idle => return false,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => {
                DragState::Hovering { source, target }
            }
        };
        true
    }

    /// Abandon the drag without touching the grid
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Finish the gesture and commit the transfer into `grid`.
    ///
    /// The controller is always back to idle afterwards. Rejections leave the
    /// grid untouched.
    pub fn drop(&mut self, grid: &mut Grid) -> TransferOutcome {
        let outcome = match std::mem::take(&mut self.state) {
            DragState::Idle => Err(TransferRejection::NotDragging),
            DragState::Dragging { .. } => Err(TransferRejection::NoTarget),
            DragState::Hovering { source, target } => commit(grid, &source, &target),
        };

        match outcome {
            Ok(event) => {
                log::debug!("Moved event '{}' to {} {:?}", event.id, event.date, event.start_hour);
                TransferOutcome::Committed(event)
            }
            Err(reason) => {
                log::debug!("Drop rejected: {:?}", reason);
                TransferOutcome::Rejected(reason)
            }
        }
    }
}

fn commit(
    grid: &mut Grid,
    source: &DragSource,
    target: &BucketRef,
) -> Result<Event, TransferRejection> {
    if source.bucket == *target {
        return Err(TransferRejection::SameBucket);
    }

    let current = grid
        .bucket(&source.bucket)
        .and_then(|bucket| bucket.find_entry(&source.event))
        .ok_or(TransferRejection::SourceMissing)?;
    let destination = grid.bucket(target).ok_or(TransferRejection::TargetMissing)?;

    let moved = if grid.mode.is_hourly() {
        reschedule_to_slot(current, destination)?
    } else {
        reschedule_to_day(current, destination)?
    };

    // Validation is complete; from here on the move cannot fail
    if let Some(bucket) = grid.bucket_mut(&source.bucket) {
        bucket.take_entry(&source.event);
    }
    if let Some(bucket) = grid.bucket_mut(target) {
        bucket.events.push(moved.clone());
    }
    Ok(moved)
}

/// Month view: only the date changes
fn reschedule_to_day(event: &Event, destination: &Bucket) -> Result<Event, TransferRejection> {
    let taken = destination.events.iter().any(|other| {
        other.id == event.id || (other.label == event.label && other.start_hour == event.start_hour)
    });
    if taken {
        return Err(TransferRejection::Conflict);
    }

    let mut moved = event.clone();
    moved.date = format_iso_date(destination.date);
    Ok(moved)
}

/// Week/day view: the event starts at the destination row's hour and keeps
/// its original length.
fn reschedule_to_slot(event: &Event, destination: &Bucket) -> Result<Event, TransferRejection> {
    if destination.events.iter().any(|other| other.same_slot_as(event)) {
        return Err(TransferRejection::Conflict);
    }

    let label = destination
        .label
        .as_deref()
        .map(str::to_uppercase)
        .ok_or(TransferRejection::UnparseableTime)?;
    let new_start = parse_hour_label(&label).map_err(|_| TransferRejection::UnparseableTime)?;
    let end = event.parsed_end().ok_or(TransferRejection::UnparseableTime)?;
    // Without a readable start the length is measured from the start of the day
    let start = event.parsed_start().unwrap_or(NaiveTime::MIN);
    let duration = end - start;

    let new_end = destination.date.and_time(new_start) + duration;

    let mut moved = event.clone();
    moved.date = format_iso_date(destination.date);
    moved.start_hour = Some(label);
    moved.end_hour = Some(format_hour_label(new_end.time()));
    Ok(moved)
}
