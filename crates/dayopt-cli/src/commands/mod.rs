pub mod config;
pub mod optimize;
pub mod task;
pub mod what_if;
