pub mod catalog;
pub mod config;
pub mod logging;
pub mod nav;
pub mod plain;
pub mod ui;
