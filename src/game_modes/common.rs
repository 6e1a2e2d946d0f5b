//! Helpers shared by the game loop: frame pacing and sound cues

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::game::SoundCue;

/// Frame budget for a target frame rate (0 is treated as 1 fps)
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis(1000 / target_fps.max(1))
}

/// Sleep off whatever is left of this frame's budget.
///
/// Call at the end of each loop iteration with the `Instant` the frame began.
pub fn limit_frame_rate(frame_start: Instant, budget: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < budget {
        std::thread::sleep(budget - elapsed);
    }
}

/// Fire-and-forget terminal bell: one ring for a cheer, two for a boo.
/// Failures are logged and otherwise ignored.
pub fn play_cue(cue: SoundCue, enabled: bool) {
    if !enabled {
        return;
    }

    let bells = match cue {
        SoundCue::Cheer => "\x07",
        SoundCue::Boo => "\x07\x07",
    };

    let mut stdout = io::stdout();
    if let Err(e) = stdout
        .write_all(bells.as_bytes())
        .and_then(|_| stdout.flush())
    {
        tracing::warn!(?cue, "could not play sound cue: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(50), Duration::from_millis(20));
        assert_eq!(frame_duration(0), Duration::from_millis(1000));
    }

    #[test]
    fn test_limit_frame_rate_waits_out_budget() {
        let start = Instant::now();
        limit_frame_rate(start, Duration::from_millis(15));
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
