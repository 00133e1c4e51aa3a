pub mod entry;
pub mod timestamp;
pub mod user;
