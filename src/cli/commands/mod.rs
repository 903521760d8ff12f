pub mod backup;
pub mod checkin;
pub mod config;
pub mod db;
pub mod export;
pub mod guest;
pub mod init;
pub mod kiosk;
pub mod list;
pub mod log;
pub mod roster;
