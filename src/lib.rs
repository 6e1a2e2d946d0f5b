//! Penalty Keeper: a terminal goalkeeper shootout.
//!
//! The game logic in [`game`] runs on a 1280×800 virtual field in fixed
//! 50 ms ticks and knows nothing about the terminal; [`ui`], [`menu`] and
//! [`game_modes`] draw it with ratatui and feed it crossterm key presses.

pub mod config;
pub mod debug;
pub mod game;
pub mod game_modes;
pub mod leaderboard;
pub mod menu;
pub mod ui;
