use plane_shooter::config::ScreenBounds;
use plane_shooter::entities::*;
use plane_shooter::motion::update;

const SCREEN: ScreenBounds = ScreenBounds { width: 480, height: 720 };

fn entity(role: Role, x: i32, y: i32, width: i32, height: i32, speed: i32) -> Entity {
    Entity::new(role, Size { width, height }, x, y, speed)
}

// ── Hero ──────────────────────────────────────────────────────────────────────

#[test]
fn hero_moves_horizontally_only() {
    let mut hero = entity(Role::Hero, 100, 474, 102, 126, 5);
    update(&mut hero, &SCREEN);
    assert_eq!((hero.x, hero.y), (105, 474));

    hero.speed = -5;
    update(&mut hero, &SCREEN);
    assert_eq!((hero.x, hero.y), (100, 474));
}

#[test]
fn hero_is_clamped_not_bounced() {
    let mut hero = entity(Role::Hero, 2, 474, 102, 126, -5);
    update(&mut hero, &SCREEN);
    assert_eq!(hero.x, 0);

    let mut hero = entity(Role::Hero, 376, 474, 102, 126, 5);
    update(&mut hero, &SCREEN);
    assert_eq!(hero.x, 378);
    update(&mut hero, &SCREEN);
    assert_eq!(hero.x, 378);
}

#[test]
fn hero_stays_in_bounds_for_any_start_and_speed() {
    let max_x = SCREEN.width - 102;
    for start in (-50..=SCREEN.width + 50).step_by(7) {
        for speed in [-500, -5, 0, 5, 500] {
            let mut hero = entity(Role::Hero, start, 474, 102, 126, speed);
            update(&mut hero, &SCREEN);
            assert!(
                (0..=max_x).contains(&hero.x),
                "start {start} speed {speed} ended at {}",
                hero.x
            );
        }
    }
}

#[test]
fn hero_is_never_marked_by_motion() {
    let mut hero = entity(Role::Hero, 0, 474, 102, 126, -5);
    update(&mut hero, &SCREEN);
    assert!(hero.is_alive());
}

// ── Background ────────────────────────────────────────────────────────────────

#[test]
fn background_scrolls_down() {
    let mut bg = entity(Role::Background, 0, 0, 480, 720, 1);
    update(&mut bg, &SCREEN);
    assert_eq!(bg.y, 1);
}

#[test]
fn background_wraps_to_minus_height() {
    let mut bg = entity(Role::Background, 0, 719, 480, 700, 1);
    update(&mut bg, &SCREEN);
    assert_eq!(bg.y, -700);
    assert!(bg.is_alive());
}

#[test]
fn background_wraps_after_scrolling_off() {
    let mut bg = entity(Role::Background, 0, -720, 480, 720, 3);
    let mut ticks = 0;
    loop {
        update(&mut bg, &SCREEN);
        ticks += 1;
        if bg.y == -720 || ticks >= 1000 {
            break;
        }
        assert!(bg.y < SCREEN.height);
    }
    assert_eq!(bg.y, -720);
    // 1440 px of travel at 3 px/tick
    assert_eq!(ticks, 480);
}

#[test]
fn background_pair_stays_contiguous() {
    let mut a = entity(Role::Background, 0, 0, 480, 720, 1);
    let mut b = entity(Role::Background, 0, -720, 480, 720, 1);
    for _ in 0..2000 {
        update(&mut a, &SCREEN);
        update(&mut b, &SCREEN);
        assert_eq!((a.y - b.y).abs(), 720);
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_falls_by_speed() {
    let mut enemy = entity(Role::Enemy, 40, -43, 57, 43, 3);
    update(&mut enemy, &SCREEN);
    assert_eq!(enemy.y, -40);
    assert!(enemy.is_alive());
}

#[test]
fn enemy_leaving_bottom_is_marked() {
    let mut enemy = entity(Role::Enemy, 40, 718, 57, 43, 1);
    update(&mut enemy, &SCREEN);
    assert!(enemy.is_alive());
    update(&mut enemy, &SCREEN);
    assert_eq!(enemy.y, 720);
    assert_eq!(enemy.fate(), Some(Fate::LeftScreen));
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_rises() {
    let mut bullet = entity(Role::Bullet, 238, 463, 5, 11, -2);
    update(&mut bullet, &SCREEN);
    assert_eq!(bullet.y, 461);
}

#[test]
fn bullet_leaving_top_is_marked() {
    let mut bullet = entity(Role::Bullet, 238, -10, 5, 11, -2);
    update(&mut bullet, &SCREEN);
    // bottom == -1
    assert_eq!(bullet.fate(), Some(Fate::LeftScreen));

    let mut bullet = entity(Role::Bullet, 238, -9, 5, 11, -2);
    update(&mut bullet, &SCREEN);
    // bottom == 0 is still on screen
    assert!(bullet.is_alive());
}
