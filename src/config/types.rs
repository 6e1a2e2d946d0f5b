// Penalty Keeper configuration types
// All settings default to the classic game's values

use serde::{Deserialize, Serialize};

use crate::game::ball::DEFAULT_BALL_SPEED;
use crate::game::goalkeeper::DEFAULT_KEEPER_SPEED;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
}

/// Each action accepts a list of keys ("Left", "Up", "Space", "Esc" or single characters)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Goalkeeper steps
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,

    // Dives
    pub dive_up_left: Vec<String>,
    pub dive_up_right: Vec<String>,
    pub dive_down_left: Vec<String>,
    pub dive_down_right: Vec<String>,

    // Game controls
    pub shoot: Vec<String>,
    pub replay: Vec<String>,
    pub menu: Vec<String>,
    pub quit: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: keys(&["Left", "A"]),
            move_right: keys(&["Right", "D"]),
            move_up: keys(&["Up", "W"]),
            move_down: keys(&["Down", "S"]),
            dive_up_left: keys(&["Q"]),
            dive_up_right: keys(&["E"]),
            dive_down_left: keys(&["Z"]),
            dive_down_right: keys(&["C"]),
            shoot: keys(&["Space"]),
            replay: keys(&["R"]),
            menu: keys(&["M"]),
            quit: keys(&["Esc"]),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Ball travel per tick in virtual units
    pub ball_speed: i32,

    // Goalkeeper step per key press in virtual units
    pub keeper_speed: i32,

    // Simulation tick length in milliseconds
    pub tick_ms: u64,

    // Saves (win) or goals (loss) that end a match
    pub target_score: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ball_speed: DEFAULT_BALL_SPEED,
            keeper_speed: DEFAULT_KEEPER_SPEED,
            tick_ms: 50,
            target_score: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second for redraws
    pub target_fps: u64,

    // Ring the terminal bell on saves and goals
    pub sound_bell: bool,

    // Colors (RGB values 0-255)
    pub pitch_color: [u8; 3],
    pub keeper_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub goal_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            sound_bell: true,
            pitch_color: [10, 60, 20],     // Dark green
            keeper_color: [255, 200, 0],   // Yellow kit
            ball_color: [255, 255, 255],   // White
            goal_color: [200, 200, 200],   // Light gray posts
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    // Leaderboard file, relative paths resolve against the working directory
    pub path: String,

    // Entries shown in the HUD panel
    pub shown_entries: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            path: "leaderboard.txt".to_string(),
            shown_entries: 5,
        }
    }
}
