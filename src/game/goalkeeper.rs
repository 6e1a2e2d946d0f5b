use anyhow::{bail, Result};

use super::geometry::Rect;

pub const FIELD_WIDTH: i32 = 1280;
pub const FIELD_HEIGHT: i32 = 800;

pub const KEEPER_WIDTH: i32 = 300;
pub const KEEPER_HEIGHT: i32 = 400;
pub const KEEPER_SPAWN_X: i32 = 490;
pub const KEEPER_SPAWN_Y: i32 = 275;
pub const DEFAULT_KEEPER_SPEED: i32 = 22;

// Step moves are only taken while the keeper is inside these limits
const STEP_MIN_X: i32 = 50;
const STEP_MAX_X: i32 = 930;
const STEP_MIN_Y: i32 = 50;
const STEP_MAX_Y: i32 = 400;

/// The four dive directions, named by the corner of the goal they cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiveDirection {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl DiveDirection {
    /// Map an angle code (-45, 45, -135, 135) to a direction
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            -45 => Ok(DiveDirection::UpLeft),
            45 => Ok(DiveDirection::UpRight),
            -135 => Ok(DiveDirection::DownLeft),
            135 => Ok(DiveDirection::DownRight),
            other => bail!("unknown dive direction code {}", other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            DiveDirection::UpLeft => -45,
            DiveDirection::UpRight => 45,
            DiveDirection::DownLeft => -135,
            DiveDirection::DownRight => 135,
        }
    }

    /// Sprite rotation in degrees (clockwise positive)
    pub fn rotation(&self) -> f64 {
        match self {
            DiveDirection::UpLeft => -45.0,
            DiveDirection::UpRight => 45.0,
            DiveDirection::DownLeft => -90.0,
            DiveDirection::DownRight => 90.0,
        }
    }

    /// Displacement applied by the dive
    pub fn offset(&self) -> (i32, i32) {
        match self {
            DiveDirection::UpLeft => (-150, -100),
            DiveDirection::UpRight => (150, -100),
            DiveDirection::DownLeft => (-180, 30),
            DiveDirection::DownRight => (180, 30),
        }
    }

    pub fn all() -> [DiveDirection; 4] {
        [
            DiveDirection::UpLeft,
            DiveDirection::UpRight,
            DiveDirection::DownLeft,
            DiveDirection::DownRight,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Goalkeeper {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
    /// Current sprite rotation in degrees (0 = standing)
    pub rotation: f64,
}

impl Goalkeeper {
    pub fn new(x: i32, y: i32, speed: i32) -> Self {
        Self {
            x,
            y,
            width: KEEPER_WIDTH,
            height: KEEPER_HEIGHT,
            speed,
            rotation: 0.0,
        }
    }

    /// A fresh keeper standing at the spawn point
    pub fn spawn(speed: i32) -> Self {
        Self::new(KEEPER_SPAWN_X, KEEPER_SPAWN_Y, speed)
    }

    pub fn move_left(&mut self) {
        if self.x > STEP_MIN_X {
            self.x -= self.speed;
            self.clamp_to_field();
        }
    }

    pub fn move_right(&mut self) {
        if self.x < STEP_MAX_X {
            self.x += self.speed;
            self.clamp_to_field();
        }
    }

    pub fn move_up(&mut self) {
        if self.y > STEP_MIN_Y {
            self.y -= self.speed;
            self.clamp_to_field();
        }
    }

    pub fn move_down(&mut self) {
        if self.y < STEP_MAX_Y {
            self.y += self.speed;
            self.clamp_to_field();
        }
    }

    /// Throw the keeper toward a corner. The rotation always starts over from
    /// the standing pose, so repeated dives don't stack angles.
    pub fn dive(&mut self, direction: DiveDirection) {
        let (dx, dy) = direction.offset();
        self.rotation = direction.rotation();
        self.x += dx;
        self.y += dy;
        self.clamp_to_field();
    }

    fn clamp_to_field(&mut self) {
        self.x = self.x.clamp(0, FIELD_WIDTH - self.width);
        self.y = self.y.clamp(0, FIELD_HEIGHT - self.height);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Visual footprint of the (possibly rotated) sprite
    pub fn sprite_bounds(&self) -> Rect {
        self.bounds().rotated_bounds(self.rotation)
    }

    /// Centered box covering 47.5% of each side, tighter than the ball's
    pub fn collision_bounds(&self) -> Rect {
        let width = self.width * 19 / 40;
        let height = self.height * 19 / 40;
        self.bounds().centered(width, height)
    }

    pub fn is_touching(&self, ball_box: &Rect) -> bool {
        self.collision_bounds().intersects(ball_box)
    }
}
