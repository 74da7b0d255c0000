pub mod app;
pub mod config;
pub mod data;
pub mod processing;
pub mod state;
pub mod ui;
