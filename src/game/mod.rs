pub mod ball;
pub mod geometry;
pub mod goalkeeper;
pub mod input;
pub mod session;

pub use ball::Ball;
pub use goalkeeper::{DiveDirection, Goalkeeper};
pub use input::{poll_input, InputAction, KeyMap};
pub use session::{GameEvent, GameSession, MatchResult, Phase, ShotOutcome, SoundCue};
