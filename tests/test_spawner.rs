use std::time::Duration;

use plane_shooter::config::GameConfig;
use plane_shooter::entities::*;
use plane_shooter::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const ENEMY: Size = Size { width: 57, height: 43 };
const HERO: Size = Size { width: 102, height: 126 };
const BULLET: Size = Size { width: 5, height: 11 };

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

const TICK: Duration = Duration::from_millis(16);

// ── PeriodicTimer ─────────────────────────────────────────────────────────────

#[test]
fn timer_fires_once_per_period_at_fine_cadence() {
    let mut timer = PeriodicTimer::new(Duration::from_millis(1000));
    let fired: Vec<usize> = (1..=200)
        .filter(|_| timer.advance(TICK))
        .collect();
    // 16 ms × 63 = 1008 ms, then the accumulator restarts from zero.
    assert_eq!(fired, vec![63, 126, 189]);
}

#[test]
fn timer_does_not_catch_up_after_a_stall() {
    let mut timer = PeriodicTimer::new(Duration::from_millis(1000));
    assert!(timer.advance(Duration::from_millis(3500)));
    assert_eq!(timer.elapsed(), Duration::ZERO);
    assert!(!timer.advance(TICK));
    assert!(!timer.advance(Duration::from_millis(900)));
    assert!(timer.advance(Duration::from_millis(100)));
}

#[test]
fn timer_fires_exactly_on_the_period() {
    let mut timer = PeriodicTimer::new(Duration::from_millis(500));
    assert!(!timer.advance(Duration::from_millis(499)));
    assert!(timer.advance(Duration::from_millis(1)));
}

#[test]
fn spawner_timers_are_independent() {
    let config = GameConfig::default();
    let mut spawner = Spawner::new(&config);

    let mut enemy_firings = 0;
    let mut fire_firings = 0;
    for _ in 0..126 {
        let firings = spawner.advance(TICK);
        enemy_firings += firings.spawn_enemy as u32;
        fire_firings += firings.hero_fire as u32;
    }
    // 126 ticks ≈ 2016 ms: two enemy periods, and 500 ms needs 32 ticks.
    assert_eq!(enemy_firings, 2);
    assert_eq!(fire_firings, 3);
}

// ── spawn_enemy ───────────────────────────────────────────────────────────────

#[test]
fn enemies_spawn_inside_horizontal_bounds_with_speed_in_range() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    let max_x = config.screen.width - ENEMY.width;

    for _ in 0..500 {
        let enemy = spawn_enemy(&config, ENEMY, &mut rng);
        assert_eq!(enemy.role(), Role::Enemy);
        assert!((0..=max_x).contains(&enemy.x), "x = {}", enemy.x);
        assert!((1..=3).contains(&enemy.speed), "speed = {}", enemy.speed);
        assert_eq!(enemy.bottom(), 0);
        assert_eq!(enemy.size(), ENEMY);
    }
}

#[test]
fn enemy_speeds_cover_the_whole_range() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    let mut seen = [false; 3];
    for _ in 0..200 {
        let enemy = spawn_enemy(&config, ENEMY, &mut rng);
        seen[(enemy.speed - 1) as usize] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn same_seed_spawns_same_enemy() {
    let config = GameConfig::default();
    let a = spawn_enemy(&config, ENEMY, &mut seeded_rng());
    let b = spawn_enemy(&config, ENEMY, &mut seeded_rng());
    assert_eq!(a, b);
}

// ── fire_volley ───────────────────────────────────────────────────────────────

#[test]
fn volley_has_three_gap_spaced_bullets() {
    let config = GameConfig::default();
    let hero = hero(&config, HERO);
    let volley = fire_volley(&hero, &config, BULLET);

    assert_eq!(volley.len(), 3);
    for (i, bullet) in volley.iter().enumerate() {
        assert_eq!(bullet.role(), Role::Bullet);
        assert_eq!(bullet.speed, -2);
        assert_eq!(bullet.bottom(), hero.top() - i as i32 * 20);
        assert_eq!(bullet.center_x(), hero.center_x());
    }
    // Each bullet sits strictly above the previous one.
    assert!(volley.windows(2).all(|w| w[1].bottom() < w[0].bottom()));
}

#[test]
fn volley_follows_configured_gap_and_size() {
    let config = GameConfig { bullet_gap: 7, volley_size: 5, ..GameConfig::default() };
    let hero = hero(&config, HERO);
    let volley = fire_volley(&hero, &config, BULLET);
    let bottoms: Vec<i32> = volley.iter().map(Entity::bottom).collect();
    let top = hero.top();
    assert_eq!(bottoms, vec![top, top - 7, top - 14, top - 21, top - 28]);
}

// ── initial placement ─────────────────────────────────────────────────────────

#[test]
fn hero_starts_centred_above_the_margin() {
    let config = GameConfig::default();
    let hero = hero(&config, HERO);
    assert_eq!(hero.role(), Role::Hero);
    assert_eq!(hero.center_x(), 240);
    assert_eq!(hero.bottom(), 600);
    assert_eq!(hero.speed, 0);
}

#[test]
fn backgrounds_are_stacked_one_height_apart() {
    let config = GameConfig::default();
    let size = Size { width: 480, height: 720 };
    let [a, b] = backgrounds(&config, size);
    assert_eq!(a.y, 0);
    assert_eq!(b.y, -720);
    assert_eq!(a.speed, config.background_speed);
    assert_eq!(b.speed, config.background_speed);
}
