// Service module exports

pub mod coordinator;
pub mod filter;
pub mod grid;
pub mod locale;
pub mod search;
pub mod settings;
pub mod transfer;
