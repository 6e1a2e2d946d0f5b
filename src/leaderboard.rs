// Persistent name → wins leaderboard stored as `name,wins` lines

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub wins: u32,
}

impl PlayerScore {
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Leaderboard entries, always sorted by wins (highest first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<PlayerScore>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in the given order, then sort
    pub fn from_entries(entries: Vec<PlayerScore>) -> Self {
        let mut board = Self { entries };
        board.sort();
        board
    }

    pub fn entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PlayerScore> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn top(&self, count: usize) -> &[PlayerScore] {
        &self.entries[..count.min(self.entries.len())]
    }

    /// Parse the file format. Any malformed line rejects the whole input.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != 2 {
                bail!(
                    "line {}: expected `name,wins`, found {:?}",
                    line_number,
                    line
                );
            }

            let wins = parts[1]
                .trim()
                .parse::<u32>()
                .with_context(|| format!("line {}: invalid win count {:?}", line_number, parts[1]))?;
            entries.push(PlayerScore::new(parts[0], wins));
        }

        Ok(Self::from_entries(entries))
    }

    /// Read the leaderboard file. A missing file is an empty leaderboard.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                Self::parse(&contents).with_context(|| format!("parsing {}", path.display()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    pub fn to_file_contents(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(out, "{},{}", entry.name, entry.wins);
        }
        out
    }

    /// Overwrite the file with every entry in ranked order
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_file_contents())
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Add `wins` to the player's entry (creating it if needed) and re-rank
    pub fn record_wins(&mut self, name: &str, wins: u32) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.wins = entry.wins.saturating_add(wins),
            None => self.entries.push(PlayerScore::new(name, wins)),
        }
        self.sort();
    }

    // Stable, so equal win counts keep their insertion order
    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.wins.cmp(&a.wins));
    }
}

/// Load, merge and save in one step
pub fn record_session_wins(path: &Path, name: &str, wins: u32) -> Result<Leaderboard> {
    let mut board = Leaderboard::load(path)?;
    board.record_wins(name, wins);
    board.save(path)?;
    Ok(board)
}

/// Trim a typed name; blank input plays as the default name.
/// Commas are dropped since they would corrupt the file format.
pub fn normalize_player_name(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
