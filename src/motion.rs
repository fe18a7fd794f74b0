/// Per-role motion rules.
///
/// `update` applies exactly one velocity step to an entity. Out-of-bounds
/// entities are only marked; removal happens in the reap phase.

use crate::config::ScreenBounds;
use crate::entities::{Entity, Fate, Role};

pub fn update(entity: &mut Entity, screen: &ScreenBounds) {
    match entity.role() {
        Role::Background => update_background(entity, screen),
        Role::Enemy => update_enemy(entity, screen),
        Role::Hero => update_hero(entity, screen),
        Role::Bullet => update_bullet(entity),
    }
}

fn fall(entity: &mut Entity) {
    entity.y += entity.speed;
}

fn update_background(entity: &mut Entity, screen: &ScreenBounds) {
    fall(entity);
    // Wrap above the screen rather than to 0 so the pair stays contiguous.
    if entity.top() >= screen.height {
        entity.y = -entity.height();
    }
}

fn update_enemy(entity: &mut Entity, screen: &ScreenBounds) {
    fall(entity);
    if entity.top() >= screen.height {
        entity.kill(Fate::LeftScreen);
    }
}

fn update_hero(entity: &mut Entity, screen: &ScreenBounds) {
    let max_x = (screen.width - entity.width()).max(0);
    entity.x = (entity.x + entity.speed).clamp(0, max_x);
}

fn update_bullet(entity: &mut Entity) {
    fall(entity);
    if entity.bottom() < 0 {
        entity.kill(Fate::LeftScreen);
    }
}
