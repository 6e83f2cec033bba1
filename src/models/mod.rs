// Module exports for models

pub mod event;
pub mod grid;
pub mod locale;
pub mod search;
pub mod settings;
pub mod view;
