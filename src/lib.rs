pub mod assist;
pub mod config;
pub mod media;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
