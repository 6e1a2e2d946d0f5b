use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, warn};

use super::ball::{Ball, MIN_BALL_SPEED};
use super::geometry::Rect;
use super::goalkeeper::Goalkeeper;
use super::input::InputAction;
use crate::config::Config;
use crate::leaderboard::{self, Leaderboard, PlayerScore};

/// Where the shootout currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to call the next shot
    Idle,
    /// Ball travelling toward its target; the keeper may react
    BallInFlight,
    /// Last shot decided, next round already set up; behaves like `Idle`
    /// but keeps the result on screen until the next shot
    Resolved(ShotOutcome),
    /// Someone reached the target score; ticks are stopped
    MatchOver(MatchResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Save,
    Goal,
}

impl ShotOutcome {
    pub fn cue(&self) -> SoundCue {
        match self {
            ShotOutcome::Save => SoundCue::Cheer,
            ShotOutcome::Goal => SoundCue::Boo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Cheer,
    Boo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Won,
    Lost,
}

/// Things that happened during `advance` or `handle_action`, for the frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ShotStarted { target: (i32, i32) },
    ShotResolved { outcome: ShotOutcome },
    MatchWon,
    MatchLost,
    LeaderboardSaved,
    LeaderboardError(String),
}

/// Read-only view of a session for the renderer
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub ball: Rect,
    pub keeper: Rect,
    pub keeper_sprite: Rect,
    pub keeper_rotation: f64,
    pub saves: u32,
    pub goals: u32,
    pub wins: u32,
    pub losses: u32,
    pub target_score: u32,
    pub phase: Phase,
    pub player_name: String,
    pub leaderboard: Vec<PlayerScore>,
}

/// One player's run of matches: ball, keeper, counters and the leaderboard link
pub struct GameSession<R: Rng = StdRng> {
    pub ball: Ball,
    pub keeper: Goalkeeper,
    pub saves: u32,
    pub goals: u32,
    pub wins: u32,
    pub losses: u32,
    pub player_name: String,
    phase: Phase,
    rng: R,
    tick: Duration,
    accumulator: Duration,
    target_score: u32,
    ball_speed: i32,
    keeper_speed: i32,
    leaderboard_path: Option<PathBuf>,
    leaderboard: Leaderboard,
    unsaved_wins: u32,
}

impl GameSession<StdRng> {
    /// Session with OS-seeded shot placement, persisting to the configured leaderboard
    pub fn from_config(config: &Config, player_name: &str) -> Self {
        let mut session = Self::new(config, player_name, StdRng::from_entropy());
        session.set_leaderboard_path(Some(PathBuf::from(&config.leaderboard.path)));
        session
    }
}

impl<R: Rng> GameSession<R> {
    /// Session without a leaderboard file; call `set_leaderboard_path` to persist
    pub fn new(config: &Config, player_name: &str, rng: R) -> Self {
        let physics = &config.physics;
        let ball_speed = physics.ball_speed.max(MIN_BALL_SPEED);
        let keeper_speed = physics.keeper_speed.max(0);
        if ball_speed != physics.ball_speed || keeper_speed != physics.keeper_speed {
            warn!(
                ball_speed = physics.ball_speed,
                keeper_speed = physics.keeper_speed,
                "speeds out of range, using ball {} and keeper {}",
                ball_speed,
                keeper_speed
            );
        }

        Self {
            ball: Ball::new(ball_speed),
            keeper: Goalkeeper::spawn(keeper_speed),
            saves: 0,
            goals: 0,
            wins: 0,
            losses: 0,
            player_name: leaderboard::normalize_player_name(player_name),
            phase: Phase::Idle,
            rng,
            tick: Duration::from_millis(physics.tick_ms.max(1)),
            accumulator: Duration::ZERO,
            target_score: physics.target_score.max(1),
            ball_speed,
            keeper_speed,
            leaderboard_path: None,
            leaderboard: Leaderboard::new(),
            unsaved_wins: 0,
        }
    }

    /// Point the session at a leaderboard file and load it for display
    pub fn set_leaderboard_path(&mut self, path: Option<PathBuf>) {
        self.leaderboard_path = path;
        self.refresh_leaderboard();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Result to show in the shot dialog, if one is pending
    pub fn last_outcome(&self) -> Option<ShotOutcome> {
        match self.phase {
            Phase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Copy out what the renderer needs, with the top `shown_entries` leaderboard rows
    pub fn snapshot(&self, shown_entries: usize) -> Snapshot {
        Snapshot {
            ball: self.ball.bounds(),
            keeper: self.keeper.bounds(),
            keeper_sprite: self.keeper.sprite_bounds(),
            keeper_rotation: self.keeper.rotation,
            saves: self.saves,
            goals: self.goals,
            wins: self.wins,
            losses: self.losses,
            target_score: self.target_score,
            phase: self.phase,
            player_name: self.player_name.clone(),
            leaderboard: self.leaderboard().top(shown_entries).to_vec(),
        }
    }

    /// Re-read the leaderboard file. Failures are logged and show as an empty board.
    pub fn refresh_leaderboard(&mut self) {
        let Some(path) = self.leaderboard_path.as_ref() else {
            return;
        };
        self.leaderboard = match Leaderboard::load(path) {
            Ok(board) => board,
            Err(e) => {
                error!("failed to load leaderboard: {:#}", e);
                Leaderboard::new()
            }
        };
    }

    /// Feed player input. Movement and dives only count while the ball is in flight.
    pub fn handle_action(&mut self, action: InputAction) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match action {
            InputAction::Shoot => self.start_shot(&mut events),
            InputAction::Replay => {
                if matches!(self.phase, Phase::MatchOver(_)) {
                    self.restart();
                }
            }
            InputAction::Menu | InputAction::Quit => {}
            movement => {
                if self.ball.is_moving() {
                    self.apply_keeper_action(movement);
                }
            }
        }

        events
    }

    fn apply_keeper_action(&mut self, action: InputAction) {
        match action {
            InputAction::MoveLeft => self.keeper.move_left(),
            InputAction::MoveRight => self.keeper.move_right(),
            InputAction::MoveUp => self.keeper.move_up(),
            InputAction::MoveDown => self.keeper.move_down(),
            InputAction::Dive(direction) => {
                debug!(?direction, code = direction.code(), "keeper dives");
                self.keeper.dive(direction);
            }
            _ => {}
        }
    }

    fn start_shot(&mut self, events: &mut Vec<GameEvent>) {
        if !matches!(self.phase, Phase::Idle | Phase::Resolved(_)) {
            return;
        }
        if self.ball.start_shot(&mut self.rng) {
            self.phase = Phase::BallInFlight;
            self.accumulator = Duration::ZERO;
            let target = (self.ball.target_x, self.ball.target_y);
            debug!(?target, "shot started");
            events.push(GameEvent::ShotStarted { target });
        }
    }

    /// Run as many fixed ticks as `dt` covers. Time outside a shot is discarded.
    pub fn advance(&mut self, dt: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.phase != Phase::BallInFlight {
            self.accumulator = Duration::ZERO;
            return events;
        }

        self.accumulator += dt;
        while self.accumulator >= self.tick && self.phase == Phase::BallInFlight {
            self.accumulator -= self.tick;
            self.step(&mut events);
        }

        if self.phase != Phase::BallInFlight {
            self.accumulator = Duration::ZERO;
        }

        events
    }

    /// Exactly one simulation tick
    pub fn step(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != Phase::BallInFlight {
            return;
        }
        if self.ball.update() {
            self.resolve_shot(events);
        }
    }

    fn resolve_shot(&mut self, events: &mut Vec<GameEvent>) {
        let outcome = if self.keeper.is_touching(&self.ball.collision_bounds()) {
            self.saves += 1;
            ShotOutcome::Save
        } else {
            self.goals += 1;
            ShotOutcome::Goal
        };

        info!(
            ?outcome,
            saves = self.saves,
            goals = self.goals,
            "shot resolved"
        );
        events.push(GameEvent::ShotResolved { outcome });

        if self.saves >= self.target_score {
            self.wins += 1;
            self.unsaved_wins += 1;
            self.phase = Phase::MatchOver(MatchResult::Won);
            info!(player = %self.player_name, wins = self.wins, "match won");
            events.push(GameEvent::MatchWon);
            self.persist_wins(events);
        } else if self.goals >= self.target_score {
            self.losses += 1;
            self.phase = Phase::MatchOver(MatchResult::Lost);
            info!(player = %self.player_name, losses = self.losses, "match lost");
            events.push(GameEvent::MatchLost);
            self.refresh_leaderboard();
        } else {
            self.next_round();
            self.phase = Phase::Resolved(outcome);
        }
    }

    // Merge wins not yet written; on failure they stay pending for the next win
    fn persist_wins(&mut self, events: &mut Vec<GameEvent>) {
        let Some(path) = self.leaderboard_path.as_ref() else {
            return;
        };

        match leaderboard::record_session_wins(path, &self.player_name, self.unsaved_wins) {
            Ok(board) => {
                self.leaderboard = board;
                self.unsaved_wins = 0;
                events.push(GameEvent::LeaderboardSaved);
            }
            Err(e) => {
                error!("failed to save leaderboard: {:#}", e);
                events.push(GameEvent::LeaderboardError(format!("{:#}", e)));
            }
        }
    }

    /// Ball back on the spot and a brand-new keeper (any dive pose is dropped)
    fn next_round(&mut self) {
        self.ball.reset();
        self.keeper = Goalkeeper::spawn(self.keeper_speed);
    }

    /// Play again after a match: counters for the match reset, wins/losses stay
    pub fn restart(&mut self) {
        self.saves = 0;
        self.goals = 0;
        self.ball = Ball::new(self.ball_speed);
        self.next_round();
        self.accumulator = Duration::ZERO;
        self.phase = Phase::Idle;
        debug!("match restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ball::BALL_SIZE;
    use crate::game::goalkeeper::{DiveDirection, KEEPER_HEIGHT, KEEPER_WIDTH};
    use std::fs;

    const TICK: Duration = Duration::from_millis(50);

    fn session() -> GameSession<StdRng> {
        GameSession::new(&Config::default(), "Tester", StdRng::seed_from_u64(3))
    }

    /// Put the keeper's hitbox right on top of where the ball will land
    fn cover_target<R: Rng>(session: &mut GameSession<R>) {
        let center_x = session.ball.target_x + BALL_SIZE / 2;
        let center_y = session.ball.target_y + BALL_SIZE / 2;
        session.keeper.x = center_x - KEEPER_WIDTH / 2;
        session.keeper.y = center_y - KEEPER_HEIGHT / 2;
    }

    fn leave_goal_open<R: Rng>(session: &mut GameSession<R>) {
        session.keeper.x = 0;
        session.keeper.y = 0;
    }

    fn play_shot<R: Rng>(session: &mut GameSession<R>, save: bool) -> Vec<GameEvent> {
        let mut events = session.handle_action(InputAction::Shoot);
        assert_eq!(session.phase(), Phase::BallInFlight);
        if save {
            cover_target(session);
        } else {
            leave_goal_open(session);
        }
        for _ in 0..100 {
            events.extend(session.advance(TICK));
            if session.phase() != Phase::BallInFlight {
                return events;
            }
        }
        panic!("shot never resolved");
    }

    #[test]
    fn test_idle_ticks_do_nothing() {
        let mut session = session();
        assert!(session.advance(Duration::from_secs(5)).is_empty());
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.ball.is_moving());
    }

    #[test]
    fn test_shot_starts_only_once() {
        let mut session = session();
        let events = session.handle_action(InputAction::Shoot);
        assert!(matches!(events[0], GameEvent::ShotStarted { .. }));

        let target = (session.ball.target_x, session.ball.target_y);
        assert!(session.handle_action(InputAction::Shoot).is_empty());
        assert_eq!((session.ball.target_x, session.ball.target_y), target);
    }

    #[test]
    fn test_partial_ticks_accumulate() {
        let mut session = session();
        session.handle_action(InputAction::Shoot);
        let start = (session.ball.x, session.ball.y);

        session.advance(Duration::from_millis(30));
        assert_eq!((session.ball.x, session.ball.y), start);

        session.advance(Duration::from_millis(30));
        assert_ne!((session.ball.x, session.ball.y), start);
    }

    #[test]
    fn test_keeper_ignores_input_while_idle() {
        let mut session = session();
        let before = (session.keeper.x, session.keeper.y);
        session.handle_action(InputAction::MoveLeft);
        session.handle_action(InputAction::Dive(DiveDirection::UpLeft));
        assert_eq!((session.keeper.x, session.keeper.y), before);
        assert_eq!(session.keeper.rotation, 0.0);

        session.handle_action(InputAction::Shoot);
        session.handle_action(InputAction::MoveLeft);
        assert_eq!(session.keeper.x, before.0 - 22);
    }

    #[test]
    fn test_save_and_goal_are_counted() {
        let mut session = session();

        let events = play_shot(&mut session, true);
        assert!(events.contains(&GameEvent::ShotResolved {
            outcome: ShotOutcome::Save
        }));
        assert_eq!(session.phase(), Phase::Resolved(ShotOutcome::Save));
        assert_eq!(session.last_outcome().map(|o| o.cue()), Some(SoundCue::Cheer));

        let events = play_shot(&mut session, false);
        assert!(events.contains(&GameEvent::ShotResolved {
            outcome: ShotOutcome::Goal
        }));
        assert_eq!((session.saves, session.goals), (1, 1));
    }

    #[test]
    fn test_round_resets_ball_and_keeper() {
        let mut session = session();
        session.handle_action(InputAction::Shoot);
        session.handle_action(InputAction::Dive(DiveDirection::DownRight));
        assert_eq!(session.keeper.rotation, 90.0);

        while session.phase() == Phase::BallInFlight {
            session.advance(TICK);
        }

        assert!(!session.ball.is_moving());
        assert_eq!(session.ball.bounds().x, crate::game::ball::BALL_START_X);
        assert_eq!(session.keeper.rotation, 0.0);
        assert_eq!(
            (session.keeper.x, session.keeper.y),
            (
                crate::game::goalkeeper::KEEPER_SPAWN_X,
                crate::game::goalkeeper::KEEPER_SPAWN_Y
            )
        );
    }

    #[test]
    fn test_five_saves_win_and_update_leaderboard() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.txt");
        fs::write(&path, "Rival,3\nTester,2\n").unwrap();

        let mut session = session();
        session.set_leaderboard_path(Some(path.clone()));

        let mut events = Vec::new();
        for _ in 0..5 {
            events.extend(play_shot(&mut session, true));
        }

        assert_eq!(session.phase(), Phase::MatchOver(MatchResult::Won));
        assert_eq!((session.saves, session.goals, session.wins), (5, 0, 1));
        assert!(events.contains(&GameEvent::MatchWon));
        assert!(events.contains(&GameEvent::LeaderboardSaved));

        assert_eq!(fs::read_to_string(&path).unwrap(), "Rival,3\nTester,3\n");
        assert_eq!(session.leaderboard().get("Tester").map(|s| s.wins), Some(3));

        // Timer stopped: extra time and shots are ignored until replay
        assert!(session.advance(Duration::from_secs(1)).is_empty());
        assert!(session.handle_action(InputAction::Shoot).is_empty());
    }

    #[test]
    fn test_win_creates_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.txt");

        let mut session = session();
        session.set_leaderboard_path(Some(path.clone()));
        for _ in 0..5 {
            play_shot(&mut session, true);
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "Tester,1\n");
    }

    #[test]
    fn test_five_goals_lose_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.txt");

        let mut session = session();
        session.set_leaderboard_path(Some(path.clone()));

        let mut events = Vec::new();
        for _ in 0..5 {
            events.extend(play_shot(&mut session, false));
        }

        assert_eq!(session.phase(), Phase::MatchOver(MatchResult::Lost));
        assert_eq!(session.losses, 1);
        assert!(events.contains(&GameEvent::MatchLost));
        assert!(!path.exists());
    }

    #[test]
    fn test_replay_keeps_session_record() {
        let mut session = session();
        for _ in 0..5 {
            play_shot(&mut session, false);
        }
        session.handle_action(InputAction::Replay);

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!((session.saves, session.goals), (0, 0));
        assert_eq!(session.losses, 1);

        for _ in 0..5 {
            play_shot(&mut session, true);
        }
        assert_eq!((session.wins, session.losses), (1, 1));
    }

    #[test]
    fn test_second_win_adds_one_more() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.txt");

        let mut session = session();
        session.set_leaderboard_path(Some(path.clone()));
        for _ in 0..2 {
            for _ in 0..5 {
                play_shot(&mut session, true);
            }
            session.handle_action(InputAction::Replay);
        }

        assert_eq!(session.wins, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Tester,2\n");
    }

    #[test]
    fn test_unreadable_leaderboard_reports_error_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.txt");
        fs::write(&path, "garbage line\n").unwrap();

        let mut session = session();
        session.set_leaderboard_path(Some(path.clone()));
        assert!(session.leaderboard().is_empty());

        let mut events = Vec::new();
        for _ in 0..5 {
            events.extend(play_shot(&mut session, true));
        }

        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::LeaderboardError(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage line\n");
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.txt");
        fs::write(&path, "a,9\nb,8\nc,7\n").unwrap();

        let mut session = session();
        session.set_leaderboard_path(Some(path));
        session.handle_action(InputAction::Shoot);
        session.advance(TICK);

        let snapshot = session.snapshot(2);
        assert_eq!(snapshot.ball, session.ball.bounds());
        assert_eq!(snapshot.phase, Phase::BallInFlight);
        assert_eq!(snapshot.leaderboard.len(), 2);
        assert_eq!(snapshot.player_name, "Tester");
    }

    fn finish_slow_shot<R: Rng>(session: &mut GameSession<R>) {
        session.handle_action(InputAction::Shoot);
        leave_goal_open(session);
        for _ in 0..5000 {
            session.advance(TICK);
            if session.phase() != Phase::BallInFlight {
                return;
            }
        }
        panic!("slow shot never resolved");
    }

    #[test]
    fn test_stalled_speeds_are_clamped() {
        let mut config = Config::default();
        config.physics.ball_speed = 0;
        config.physics.keeper_speed = -10;
        let mut session = GameSession::new(&config, "Tester", StdRng::seed_from_u64(3));

        assert_eq!(session.ball.speed, MIN_BALL_SPEED);
        assert_eq!(session.keeper.speed, 0);

        // Keeper stands still instead of walking the wrong way
        session.handle_action(InputAction::Shoot);
        session.handle_action(InputAction::MoveLeft);
        assert_eq!(session.keeper.x, crate::game::goalkeeper::KEEPER_SPAWN_X);
        session.keeper.x = 0;
        session.keeper.y = 0;

        for _ in 0..5000 {
            session.advance(TICK);
            if session.phase() != Phase::BallInFlight {
                break;
            }
        }
        assert_eq!(session.phase(), Phase::Resolved(ShotOutcome::Goal));
    }

    #[test]
    fn test_negative_ball_speed_still_finishes_match() {
        let mut config = Config::default();
        config.physics.ball_speed = -24;
        let mut session = GameSession::new(&config, "Tester", StdRng::seed_from_u64(3));

        for _ in 0..5 {
            finish_slow_shot(&mut session);
        }
        assert_eq!(session.phase(), Phase::MatchOver(MatchResult::Lost));

        session.handle_action(InputAction::Replay);
        assert_eq!(session.ball.speed, MIN_BALL_SPEED);
    }

    #[test]
    fn test_replay_ignored_mid_match() {
        let mut session = session();
        play_shot(&mut session, true);
        session.handle_action(InputAction::Replay);
        assert_eq!(session.saves, 1);
    }
}
