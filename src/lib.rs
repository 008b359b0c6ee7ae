pub mod cache;
pub mod cli;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod prefetch;
pub mod records;
pub mod shutdown;
pub mod source;
pub mod ui;
