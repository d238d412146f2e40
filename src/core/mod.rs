pub mod auth;
pub mod entry;
pub mod form;
pub mod import;
pub mod init;
pub mod journal;
pub mod list;
pub mod log;
pub mod place;
pub mod user_id;
pub mod zip;
