pub mod entry;
pub mod identity;
pub mod place;
pub mod zip;
