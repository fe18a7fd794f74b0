/// Collision resolution.
///
/// Runs after every entity has moved for the tick. Bullets against enemies
/// are resolved first; the hero is then checked against whatever enemies
/// survived. When one bullet overlaps several enemies, the first live enemy
/// in group order is the one destroyed.

use tracing::debug;

use crate::entities::{Entity, Fate};
use crate::registry::EntityRegistry;

/// What one resolution pass destroyed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Bullet/enemy pairs eliminated together.
    pub bullet_hits: usize,
    /// Enemies destroyed by ramming the hero.
    pub rammed_enemies: usize,
    pub hero_destroyed: bool,
}

/// Mark every colliding entity as dead.
///
/// # Panics
///
/// If the registry holds no hero. Resolution only runs while playing, and a
/// playing game always has a hero.
pub fn resolve(registry: &mut EntityRegistry) -> CollisionReport {
    let (bullets, enemies, hero) = registry.combatants_mut();
    let hero = hero.expect("collision resolution requires a live hero while playing");

    let bullet_hits = bullets_vs_enemies(bullets, enemies);
    let rammed_enemies = hero_vs_enemies(hero, enemies);

    let report = CollisionReport {
        bullet_hits,
        rammed_enemies,
        hero_destroyed: rammed_enemies > 0,
    };
    if report != CollisionReport::default() {
        debug!(?report, "collisions resolved");
    }
    report
}

fn bullets_vs_enemies(bullets: &mut [Entity], enemies: &mut [Entity]) -> usize {
    let mut hits = 0;
    for bullet in bullets.iter_mut().filter(|b| b.is_alive()) {
        let target = enemies
            .iter_mut()
            .find(|enemy| enemy.is_alive() && bullet.overlaps(enemy));
        if let Some(enemy) = target {
            bullet.kill(Fate::Collided);
            enemy.kill(Fate::Collided);
            hits += 1;
        }
    }
    hits
}

fn hero_vs_enemies(hero: &mut Entity, enemies: &mut [Entity]) -> usize {
    let mut rammed = 0;
    for enemy in enemies.iter_mut().filter(|e| e.is_alive() && hero.overlaps(e)) {
        enemy.kill(Fate::Collided);
        rammed += 1;
    }
    if rammed > 0 {
        hero.kill(Fate::Collided);
    }
    rammed
}
