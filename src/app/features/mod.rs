pub mod directory;
pub mod navigation;
pub mod search;
pub mod ui;

pub use directory::handle_command;
