/// Vertical-scrolling plane shooter.
///
/// The library holds the whole simulation: entities and their motion, the
/// timed spawner, collision resolution and the fixed-tick loop. Terminal
/// I/O is confined to `display` and the binary.

pub mod assets;
pub mod collision;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod motion;
pub mod pacer;
pub mod registry;
pub mod spawner;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{run, Game, LoopOutcome};
