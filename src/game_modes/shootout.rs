use std::io;
use std::time::Instant;

use ratatui::Terminal;
use tracing::info;

use crate::config::Config;
use crate::game::{poll_input, GameEvent, GameSession, InputAction, KeyMap, Phase};
use crate::ui::{self, OverlayMessage};

use super::common::{frame_duration, limit_frame_rate, play_cue};

/// How the player left the shootout screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionExit {
    Menu,
    Quit,
}

/// Run shootouts for one player until they go back to the menu or quit
pub fn run_shootout<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    player_name: &str,
) -> Result<SessionExit, io::Error> {
    let keymap = KeyMap::from_config(&config.keybindings);
    let mut session = GameSession::from_config(config, player_name);
    let budget = frame_duration(config.display.target_fps);

    info!(player = %session.player_name, "shootout started");

    let mut last_frame = Instant::now();
    let mut leaderboard_note: Option<&'static str> = None;

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;

        for action in poll_input(&keymap)? {
            match action {
                InputAction::Quit => return Ok(SessionExit::Quit),
                InputAction::Menu => {
                    if matches!(session.phase(), Phase::MatchOver(_)) {
                        return Ok(SessionExit::Menu);
                    }
                }
                _ => {
                    let events = session.handle_action(action);
                    react(&events, config, &mut leaderboard_note);
                }
            }
        }

        let events = session.advance(dt);
        react(&events, config, &mut leaderboard_note);

        let overlay = match session.phase() {
            Phase::Resolved(outcome) => Some(OverlayMessage::shot(outcome)),
            Phase::MatchOver(result) => Some(OverlayMessage::match_over(result, leaderboard_note)),
            Phase::Idle | Phase::BallInFlight => None,
        };

        let snapshot = session.snapshot(config.leaderboard.shown_entries);
        terminal.draw(|f| ui::render(f, &snapshot, &config.display, overlay.as_ref()))?;

        limit_frame_rate(now, budget);
    }
}

fn react(events: &[GameEvent], config: &Config, leaderboard_note: &mut Option<&'static str>) {
    for event in events {
        match event {
            GameEvent::ShotStarted { .. } => *leaderboard_note = None,
            GameEvent::ShotResolved { outcome } => {
                play_cue(outcome.cue(), config.display.sound_bell)
            }
            GameEvent::LeaderboardSaved => *leaderboard_note = Some("Leaderboard updated"),
            GameEvent::LeaderboardError(_) => {
                *leaderboard_note = Some("Leaderboard could not be saved")
            }
            GameEvent::MatchWon | GameEvent::MatchLost => {}
        }
    }
}
