//! Scheduler configuration persistence (TOML).

mod service;

pub use service::ConfigService;
