// Menu module for Penalty Keeper
// Handles the main menu, the player-name prompt and the instructions screen

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, MenuAction};
pub use render::render_menu;
pub use state::{AppState, MenuState};
