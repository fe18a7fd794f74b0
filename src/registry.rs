/// Ownership of every live entity, grouped by role.

use crate::config::ScreenBounds;
use crate::entities::{Entity, Fate};
use crate::motion;

/// Entity groups, listed in update and draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Backgrounds,
    Enemies,
    Hero,
    Bullets,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Backgrounds, Group::Enemies, Group::Hero, Group::Bullets];
}

#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    backgrounds: Vec<Entity>,
    enemies: Vec<Entity>,
    hero: Option<Entity>,
    bullets: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new(backgrounds: [Entity; 2], hero: Entity) -> Self {
        Self {
            backgrounds: backgrounds.into(),
            enemies: Vec::new(),
            hero: Some(hero),
            bullets: Vec::new(),
        }
    }

    pub fn add_enemy(&mut self, enemy: Entity) {
        self.enemies.push(enemy);
    }

    pub fn add_bullets(&mut self, bullets: impl IntoIterator<Item = Entity>) {
        self.bullets.extend(bullets);
    }

    pub fn backgrounds(&self) -> &[Entity] {
        &self.backgrounds
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn bullets(&self) -> &[Entity] {
        &self.bullets
    }

    pub fn hero(&self) -> Option<&Entity> {
        self.hero.as_ref()
    }

    pub fn hero_mut(&mut self) -> Option<&mut Entity> {
        self.hero.as_mut()
    }

    /// Mutable access to the three groups collision resolution touches.
    pub fn combatants_mut(&mut self) -> (&mut [Entity], &mut [Entity], Option<&mut Entity>) {
        (self.bullets.as_mut_slice(), self.enemies.as_mut_slice(), self.hero.as_mut())
    }

    /// Entities of one group as a slice.
    pub fn group(&self, group: Group) -> &[Entity] {
        match group {
            Group::Backgrounds => &self.backgrounds,
            Group::Enemies => &self.enemies,
            Group::Hero => self.hero.as_slice(),
            Group::Bullets => &self.bullets,
        }
    }

    pub fn len(&self) -> usize {
        self.backgrounds.len() + self.enemies.len() + self.hero.iter().count() + self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance every live entity by one tick, group by group.
    pub fn update_all(&mut self, screen: &ScreenBounds) {
        let groups = self
            .backgrounds
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .chain(self.hero.iter_mut())
            .chain(self.bullets.iter_mut());
        for entity in groups.filter(|e| e.is_alive()) {
            motion::update(entity, screen);
        }
    }

    /// Remove every marked entity, calling `on_remove` once for each in
    /// group order. Returns how many were removed.
    pub fn reap(&mut self, mut on_remove: impl FnMut(&Entity, Fate)) -> usize {
        let mut removed = reap_group(&mut self.backgrounds, &mut on_remove);
        removed += reap_group(&mut self.enemies, &mut on_remove);

        if let Some(fate) = self.hero.as_ref().and_then(Entity::fate) {
            if let Some(hero) = self.hero.take() {
                on_remove(&hero, fate);
                removed += 1;
            }
        }

        removed + reap_group(&mut self.bullets, &mut on_remove)
    }
}

fn reap_group(group: &mut Vec<Entity>, on_remove: &mut impl FnMut(&Entity, Fate)) -> usize {
    let before = group.len();
    group.retain(|entity| match entity.fate() {
        Some(fate) => {
            on_remove(entity, fate);
            false
        }
        None => true,
    });
    before - group.len()
}
