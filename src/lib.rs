pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod input;
pub mod model;
pub mod ticker;
pub mod ui;
