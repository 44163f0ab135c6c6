pub mod config;
pub mod format;
pub mod health;
pub mod ranking;
pub mod report;
pub mod system;
