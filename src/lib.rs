pub mod annotate;
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod stress;
pub mod ui;
