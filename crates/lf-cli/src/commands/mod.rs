pub mod chart;
pub mod config;
pub mod dispatch;
pub mod init;
pub mod list;
pub mod report;
pub mod search;
pub mod shared;
pub mod stats;
