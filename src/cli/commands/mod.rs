pub mod add;
pub mod auth;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod places;
pub mod zip;
