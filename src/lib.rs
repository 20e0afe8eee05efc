pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod headless;
pub mod ui;
