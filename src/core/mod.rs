pub mod backup;
pub mod checkin;
pub mod config;
pub mod log;
