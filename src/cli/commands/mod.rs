pub mod add;
pub mod approval;
pub mod config;
pub mod db;
pub mod export;
pub mod holiday;
pub mod init;
pub mod list;
pub mod log;
pub mod settings;
