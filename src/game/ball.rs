use rand::Rng;

use super::geometry::Rect;

// Virtual field coordinates (1280×800, top-left origin)
pub const BALL_SIZE: i32 = 120;
pub const BALL_START_X: i32 = 580; // Penalty spot, horizontally centered
pub const BALL_START_Y: i32 = 705; // Bottom of the field
pub const DEFAULT_BALL_SPEED: i32 = 24; // Units per tick

// Slowest speed that still moves the dominant axis by a whole unit every tick
pub const MIN_BALL_SPEED: i32 = 2;

/// The eight places a shot can go
pub const SHOT_TARGETS: [(i32, i32); 8] = [
    (310, 260), // Top left corner
    (810, 250), // Top right corner
    (300, 350), // Middle left
    (810, 350), // Middle right
    (300, 450), // Bottom left
    (810, 450), // Bottom right
    (580, 200), // Top middle
    (580, 465), // Bottom middle
];

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub target_x: i32,
    pub target_y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
    moving: bool,
}

impl Ball {
    pub fn new(speed: i32) -> Self {
        Self {
            x: BALL_START_X,
            y: BALL_START_Y,
            target_x: BALL_START_X,
            target_y: BALL_START_Y,
            width: BALL_SIZE,
            height: BALL_SIZE,
            speed,
            moving: false,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Kick the ball toward a uniformly random preset target.
    /// Returns false (and does nothing) if a shot is already in flight.
    pub fn start_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.moving {
            return false;
        }
        let index = rng.gen_range(0..SHOT_TARGETS.len());
        self.start_shot_at(index)
    }

    /// Kick the ball toward `SHOT_TARGETS[index]` (wrapped into range)
    pub fn start_shot_at(&mut self, index: usize) -> bool {
        if self.moving {
            return false;
        }

        let (target_x, target_y) = SHOT_TARGETS[index % SHOT_TARGETS.len()];
        self.x = BALL_START_X;
        self.y = BALL_START_Y;
        self.target_x = target_x;
        self.target_y = target_y;
        self.moving = true;
        true
    }

    /// Advance one tick. Returns true exactly once, on the tick the ball arrives.
    pub fn update(&mut self) -> bool {
        if !self.moving {
            return false;
        }

        let delta_x = self.target_x - self.x;
        let delta_y = self.target_y - self.y;
        let distance = ((delta_x * delta_x + delta_y * delta_y) as f64).sqrt();
        let speed = self.speed as f64;

        if distance > speed {
            // `as i32` truncates toward zero, so a step never exceeds `speed`
            self.x += (delta_x as f64 / distance * speed) as i32;
            self.y += (delta_y as f64 / distance * speed) as i32;
            false
        } else {
            self.x = self.target_x;
            self.y = self.target_y;
            self.moving = false;
            true
        }
    }

    pub fn reset(&mut self) {
        self.x = BALL_START_X;
        self.y = BALL_START_Y;
        self.moving = false;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Centered square covering 55% of the ball's side
    pub fn collision_bounds(&self) -> Rect {
        let size = self.width.min(self.height) * 22 / 40;
        self.bounds().centered(size, size)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(DEFAULT_BALL_SPEED)
    }
}
