pub mod cli;
pub mod config;
pub mod logging;
pub mod plain;
pub mod posts;
pub mod ui;
