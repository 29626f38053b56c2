// ABOUTME: Application state and event handling for the booking wizard TUI

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, Screen};
