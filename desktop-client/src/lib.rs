pub mod app;
pub mod colors;
pub mod config;
pub mod launcher;
pub mod ui;
