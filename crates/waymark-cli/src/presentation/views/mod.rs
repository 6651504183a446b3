pub mod mission;
pub mod system;
pub mod tui;
