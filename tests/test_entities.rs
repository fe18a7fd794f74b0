use plane_shooter::entities::*;

fn rect(x: i32, y: i32, width: i32, height: i32) -> Entity {
    Entity::new(Role::Enemy, Size { width, height }, x, y, 0)
}

#[test]
fn edges_follow_position_and_size() {
    let e = rect(10, 20, 30, 40);
    assert_eq!(e.left(), 10);
    assert_eq!(e.right(), 40);
    assert_eq!(e.top(), 20);
    assert_eq!(e.bottom(), 60);
    assert_eq!(e.center_x(), 25);
}

#[test]
fn placement_helpers_keep_size() {
    let mut e = rect(0, 0, 6, 11);
    e.set_bottom(0);
    e.set_center_x(100);
    assert_eq!(e.y, -11);
    assert_eq!(e.x, 97);
    assert_eq!(e.size(), Size { width: 6, height: 11 });
}

#[test]
fn overlap_is_strict() {
    let a = rect(0, 0, 10, 10);
    assert!(a.overlaps(&rect(5, 5, 10, 10)));
    assert!(a.overlaps(&rect(2, 2, 2, 2)));
    // Shared edges only
    assert!(!a.overlaps(&rect(10, 0, 10, 10)));
    assert!(!a.overlaps(&rect(0, 10, 10, 10)));
    assert!(!a.overlaps(&rect(50, 50, 10, 10)));
}

#[test]
fn first_fate_wins() {
    let mut e = rect(0, 0, 1, 1);
    assert!(e.is_alive());
    e.kill(Fate::LeftScreen);
    e.kill(Fate::Collided);
    assert!(!e.is_alive());
    assert_eq!(e.fate(), Some(Fate::LeftScreen));
}

#[test]
fn entity_clone_is_independent() {
    let original = rect(1, 2, 3, 4);
    let mut cloned = original.clone();
    cloned.x = 99;
    cloned.kill(Fate::Collided);
    assert_eq!(original.x, 1);
    assert!(original.is_alive());
}
