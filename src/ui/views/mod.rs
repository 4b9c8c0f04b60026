pub mod clean;
pub mod deploy;
pub mod list;
pub mod verify;
