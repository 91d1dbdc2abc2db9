pub mod asset;
pub mod bot;
pub mod portfolio;
pub mod signal;
