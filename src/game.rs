/// The fixed-tick game loop.
///
/// `Game::tick` runs one tick's phases in a fixed order: input and timers,
/// motion, collisions, reaping. `run` wraps it with frame pacing and
/// rendering until the game ends or the player quits.

use std::time::Duration;

use rand::Rng;
use tracing::{info, trace};

use crate::assets::{AssetProvider, SpriteSizes};
use crate::collision::{self, CollisionReport};
use crate::config::GameConfig;
use crate::display::{FrameInfo, RenderSink};
use crate::entities::{Entity, Fate, GameStatus, Role, Size, Wreck};
use crate::error::Result;
use crate::input::{InputSignal, InputSource, Intent};
use crate::pacer::Pace;
use crate::registry::{EntityRegistry, Group};
use crate::spawner::{self, Spawner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    GameOver,
    Quit,
}

pub struct Game<'a, R: Rng> {
    config: &'a GameConfig,
    sprites: SpriteSizes,
    registry: EntityRegistry,
    spawner: Spawner,
    status: GameStatus,
    intent: Intent,
    wrecks: Vec<Wreck>,
    ticks: u64,
    last_collisions: CollisionReport,
    rng: R,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Validate the configuration, resolve sprite sizes and place the
    /// backgrounds and the hero.
    pub fn new<A: AssetProvider + ?Sized>(config: &'a GameConfig, assets: &A, rng: R) -> Result<Self> {
        config.validate()?;
        let sprites = SpriteSizes::load(assets)?;
        let registry = EntityRegistry::new(
            spawner::backgrounds(config, sprites.background),
            spawner::hero(config, sprites.hero),
        );
        Ok(Self {
            config,
            sprites,
            registry,
            spawner: Spawner::new(config),
            status: GameStatus::Playing,
            intent: Intent::Idle,
            wrecks: Vec::new(),
            ticks: 0,
            last_collisions: CollisionReport::default(),
            rng,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Direct registry access for staging scenarios in tests and tools.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub fn wrecks(&self) -> &[Wreck] {
        &self.wrecks
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn last_collisions(&self) -> CollisionReport {
        self.last_collisions
    }

    /// Add one freshly spawned enemy.
    pub fn spawn_enemy(&mut self) {
        let enemy = spawner::spawn_enemy(self.config, self.sprites.enemy, &mut self.rng);
        self.registry.add_enemy(enemy);
    }

    /// Fire a volley from the hero. Does nothing once the hero is gone.
    /// Returns the number of bullets added.
    pub fn fire(&mut self) -> usize {
        if self.status != GameStatus::Playing {
            return 0;
        }
        let Some(hero) = self.registry.hero() else {
            return 0;
        };
        let volley = spawner::fire_volley(hero, self.config, self.sprites.bullet);
        let count = volley.len();
        self.registry.add_bullets(volley);
        count
    }

    /// Run one tick. A finished game is left untouched.
    ///
    /// # Panics
    ///
    /// If the hero is missing while the game is still playing.
    pub fn tick(&mut self, input: &mut impl InputSource, dt: Duration) -> TickOutcome {
        if self.status == GameStatus::GameOver {
            return TickOutcome::GameOver;
        }

        // ── 1. Input and timers ──────────────────────────────────────────────
        input.begin_tick();
        for signal in input.drain() {
            match signal {
                InputSignal::Quit => return TickOutcome::Quit,
                InputSignal::Move(intent) => self.intent = intent,
            }
        }
        let hero_speed = self.intent.speed(self.config.hero_move_speed);
        self.registry
            .hero_mut()
            .expect("hero must be present while playing")
            .speed = hero_speed;

        let firings = self.spawner.advance(dt);
        if firings.spawn_enemy {
            self.spawn_enemy();
        }
        if firings.hero_fire {
            self.fire();
        }

        // ── 2. Motion ────────────────────────────────────────────────────────
        self.registry.update_all(&self.config.screen);
        self.age_wrecks();

        // ── 3. Collisions ────────────────────────────────────────────────────
        self.last_collisions = collision::resolve(&mut self.registry);
        if self.last_collisions.hero_destroyed {
            self.status = GameStatus::GameOver;
        }

        // ── 4. Reap ──────────────────────────────────────────────────────────
        let wrecks = &mut self.wrecks;
        let wreck_size = self.sprites.enemy_wreck;
        let wreck_frames = self.config.wreck_frames;
        self.registry.reap(|entity, fate| {
            if let Some(wreck) = on_remove(entity, fate, wreck_size, wreck_frames) {
                wrecks.push(wreck);
            }
        });

        self.ticks += 1;
        match self.status {
            GameStatus::Playing => TickOutcome::Continue,
            GameStatus::GameOver => {
                info!(ticks = self.ticks, "hero destroyed, game over");
                TickOutcome::GameOver
            }
        }
    }

    /// Hand the current frame to a render sink.
    pub fn render(&self, sink: &mut impl RenderSink) -> Result<()> {
        sink.begin_frame()?;
        for group in Group::ALL {
            sink.draw(group, self.registry.group(group))?;
        }
        sink.draw_wrecks(&self.wrecks)?;
        sink.present(&FrameInfo {
            tick: self.ticks,
            status: self.status,
            enemies: self.registry.enemies().len(),
            bullets: self.registry.bullets().len(),
        })
    }

    fn age_wrecks(&mut self) {
        self.wrecks.retain_mut(|wreck| {
            wreck.frames_left = wreck.frames_left.saturating_sub(1);
            wreck.frames_left > 0
        });
    }
}

/// Removal hook, run once per reaped entity. Enemies shot down leave a
/// wreck behind; anything that simply flew off screen does not.
fn on_remove(entity: &Entity, fate: Fate, wreck_size: Size, frames: u32) -> Option<Wreck> {
    trace!(role = ?entity.role(), ?fate, x = entity.x, y = entity.y, "entity removed");
    match (entity.role(), fate) {
        (Role::Enemy, Fate::Collided) if frames > 0 => Some(Wreck {
            x: entity.center_x() - wreck_size.width / 2,
            y: entity.bottom() - wreck_size.height,
            size: wreck_size,
            frames_left: frames,
        }),
        _ => None,
    }
}

/// Drive `game` until the hero dies or the player quits.
pub fn run<R: Rng>(
    game: &mut Game<'_, R>,
    input: &mut impl InputSource,
    pacer: &mut impl Pace,
    sink: &mut impl RenderSink,
) -> Result<LoopOutcome> {
    info!(
        width = game.config.screen.width,
        height = game.config.screen.height,
        frame_rate = game.config.frame_rate,
        "game started"
    );
    loop {
        let dt = pacer.wait();
        match game.tick(input, dt) {
            TickOutcome::Continue => game.render(sink)?,
            TickOutcome::GameOver => {
                game.render(sink)?;
                return Ok(LoopOutcome::GameOver);
            }
            TickOutcome::Quit => {
                info!(ticks = game.ticks, "player quit");
                return Ok(LoopOutcome::Quit);
            }
        }
    }
}
