// Rust Scheduler Library
// Calendar grid construction, drag-and-drop rescheduling and view coordination

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::Event;
pub use models::grid::{Bucket, BucketRef, Grid, Layout, Row};
pub use models::settings::{SchedulerConfig, WeekStart};
pub use models::view::{NavigationDirection, ViewMode};
pub use services::coordinator::{NoopListener, SchedulerListener, ViewModeCoordinator};
