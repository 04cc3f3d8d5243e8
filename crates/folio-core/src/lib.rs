pub mod actions;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod palette;
pub mod persistence;
pub mod reducer;
pub mod router;
pub mod state;
pub mod theme;
pub mod timers;
pub mod tooltip;

pub use actions::*;
pub use error::FolioError;
pub use reducer::*;
pub use state::*;

pub use persistence::*;
