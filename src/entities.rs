/// Game entity types.
///
/// Every moving object is an `Entity`: an axis-aligned rectangle with a
/// vertical speed and a `Role` that selects its motion rule.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Background,
    Enemy,
    Hero,
    Bullet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why an entity was marked for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    /// Destroyed by an overlap with another entity.
    Collided,
    /// Moved past the edge of the visible area.
    LeftScreen,
}

/// Pixel dimensions of a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Pixels per tick. Vertical for every role except the hero.
    pub speed: i32,
    size: Size,
    role: Role,
    fate: Option<Fate>,
}

impl Entity {
    pub fn new(role: Role, size: Size, x: i32, y: i32, speed: i32) -> Self {
        Self { x, y, speed, size, role, fate: None }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.size.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.size.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.size.width / 2
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.size.height;
    }

    pub fn set_center_x(&mut self, center_x: i32) {
        self.x = center_x - self.size.width / 2;
    }

    pub fn is_alive(&self) -> bool {
        self.fate.is_none()
    }

    pub fn fate(&self) -> Option<Fate> {
        self.fate
    }

    /// Mark the entity for removal. The first fate recorded wins.
    pub fn kill(&mut self, fate: Fate) {
        if self.fate.is_none() {
            self.fate = Some(fate);
        }
    }

    /// Strict bounding-box intersection; rectangles that only share an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Where an enemy was shot down. Purely visual: wrecks never move or collide.
#[derive(Clone, Debug, PartialEq)]
pub struct Wreck {
    pub x: i32,
    pub y: i32,
    pub size: Size,
    /// Ticks left before the wreck disappears.
    pub frames_left: u32,
}
