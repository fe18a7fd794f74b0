/// Timed entity factories.
///
/// Two periodic timers drive the game: one spawns enemies, the other makes
/// the hero fire a volley. Timers advance from elapsed frame time, never
/// from the input queue.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Entity, Role, Size};

/// Accumulates elapsed time and fires once the period is reached.
///
/// The accumulator resets to zero on firing, so a stalled frame that spans
/// several periods still produces a single firing.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicTimer {
    period: Duration,
    elapsed: Duration,
}

impl PeriodicTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, elapsed: Duration::ZERO }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Add `dt` and report whether the timer fired.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.period {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

/// Which timers fired during one `Spawner::advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Firings {
    pub spawn_enemy: bool,
    pub hero_fire: bool,
}

#[derive(Clone, Debug)]
pub struct Spawner {
    enemy_timer: PeriodicTimer,
    fire_timer: PeriodicTimer,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            enemy_timer: PeriodicTimer::new(config.enemy_period),
            fire_timer: PeriodicTimer::new(config.fire_period),
        }
    }

    pub fn advance(&mut self, dt: Duration) -> Firings {
        Firings {
            spawn_enemy: self.enemy_timer.advance(dt),
            hero_fire: self.fire_timer.advance(dt),
        }
    }
}

// ── Factories ────────────────────────────────────────────────────────────────

/// A new enemy just above the screen at a random column with a random speed.
pub fn spawn_enemy(config: &GameConfig, size: Size, rng: &mut impl Rng) -> Entity {
    let speed = rng.gen_range(config.enemy_speed.clone());
    let max_x = (config.screen.width - size.width).max(0);
    let x = rng.gen_range(0..=max_x);

    let mut enemy = Entity::new(Role::Enemy, size, x, 0, speed);
    enemy.set_bottom(0);
    debug!(x, speed, "enemy spawned");
    enemy
}

/// The hero's volley: `volley_size` bullets stacked upward from the hero's
/// top edge, each `bullet_gap` pixels above the previous one.
pub fn fire_volley(hero: &Entity, config: &GameConfig, size: Size) -> Vec<Entity> {
    let volley: Vec<Entity> = (0..config.volley_size)
        .map(|i| {
            let mut bullet = Entity::new(Role::Bullet, size, 0, 0, config.bullet_speed);
            bullet.set_bottom(hero.top() - i as i32 * config.bullet_gap);
            bullet.set_center_x(hero.center_x());
            bullet
        })
        .collect();
    debug!(count = volley.len(), x = hero.center_x(), "hero fired");
    volley
}

/// The two background tiles, stacked so their scroll is seamless.
pub fn backgrounds(config: &GameConfig, size: Size) -> [Entity; 2] {
    [
        Entity::new(Role::Background, size, 0, 0, config.background_speed),
        Entity::new(Role::Background, size, 0, -size.height, config.background_speed),
    ]
}

/// The hero, horizontally centred and raised off the bottom edge.
pub fn hero(config: &GameConfig, size: Size) -> Entity {
    let mut hero = Entity::new(Role::Hero, size, 0, 0, 0);
    hero.set_center_x(config.screen.center_x());
    hero.set_bottom(config.screen.height - config.hero_bottom_margin);
    hero
}
