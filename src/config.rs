/// Startup configuration.
///
/// Built once before the loop starts and only ever borrowed afterwards.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{GameError, Result};

/// The visible play area in logical pixels. Origin is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn center_x(&self) -> i32 {
        self.width / 2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen: ScreenBounds,
    pub frame_rate: u32,
    pub enemy_period: Duration,
    pub fire_period: Duration,
    /// Enemy speeds are drawn uniformly from this range (px/tick).
    pub enemy_speed: RangeInclusive<i32>,
    /// Magnitude of the hero's horizontal speed while a direction is held.
    pub hero_move_speed: i32,
    /// Distance between the hero's bottom edge and the bottom of the screen.
    pub hero_bottom_margin: i32,
    pub background_speed: i32,
    /// Must be negative: bullets travel upward.
    pub bullet_speed: i32,
    /// Vertical distance between consecutive bullets of one volley.
    pub bullet_gap: i32,
    pub volley_size: usize,
    /// How many ticks a destroyed enemy's wreck stays on screen.
    pub wreck_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenBounds { width: 480, height: 720 },
            frame_rate: 60,
            enemy_period: Duration::from_millis(1000),
            fire_period: Duration::from_millis(500),
            enemy_speed: 1..=3,
            hero_move_speed: 5,
            hero_bottom_margin: 120,
            background_speed: 1,
            bullet_speed: -2,
            bullet_gap: 20,
            volley_size: 3,
            wreck_frames: 30,
        }
    }
}

impl GameConfig {
    /// Target duration of one tick.
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.screen.width <= 0 || self.screen.height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "screen must be non-empty, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if self.frame_rate == 0 {
            return Err(GameError::InvalidConfig("frame rate must be positive".into()));
        }
        if self.enemy_period.is_zero() || self.fire_period.is_zero() {
            return Err(GameError::InvalidConfig("timer periods must be positive".into()));
        }
        if self.enemy_speed.is_empty() || *self.enemy_speed.start() <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "enemy speed range {:?} must be non-empty and positive",
                self.enemy_speed
            )));
        }
        if self.bullet_speed >= 0 {
            return Err(GameError::InvalidConfig("bullet speed must be negative".into()));
        }
        if self.background_speed <= 0 {
            return Err(GameError::InvalidConfig("background speed must be positive".into()));
        }
        Ok(())
    }
}
