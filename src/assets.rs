/// Sprite sizes.
///
/// Entities take their size from the sprite that represents them. The
/// simulation only needs pixel dimensions, so providers resolve an `AssetId`
/// to a `Size` once at startup.

use std::path::PathBuf;

use tracing::debug;

use crate::entities::Size;
use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Background,
    Enemy,
    /// Sprite shown where an enemy was shot down.
    EnemyWreck,
    Hero,
    Bullet,
}

impl AssetId {
    pub const ALL: [AssetId; 5] = [
        AssetId::Background,
        AssetId::Enemy,
        AssetId::EnemyWreck,
        AssetId::Hero,
        AssetId::Bullet,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetId::Background => "background.png",
            AssetId::Enemy => "enemy1.png",
            AssetId::EnemyWreck => "enemy1_down1.png",
            AssetId::Hero => "me1.png",
            AssetId::Bullet => "bullet1.png",
        }
    }
}

pub trait AssetProvider {
    fn size_of(&self, id: AssetId) -> Result<Size>;
}

/// Sizes of the stock sprite set, available without touching the disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinAssets;

impl AssetProvider for BuiltinAssets {
    fn size_of(&self, id: AssetId) -> Result<Size> {
        let (width, height) = match id {
            AssetId::Background => (480, 720),
            AssetId::Enemy => (57, 43),
            AssetId::EnemyWreck => (57, 51),
            AssetId::Hero => (102, 126),
            AssetId::Bullet => (5, 11),
        };
        Ok(Size { width, height })
    }
}

/// Reads sprite dimensions from image files in a directory.
#[derive(Clone, Debug)]
pub struct ImageDirAssets {
    root: PathBuf,
}

impl ImageDirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve every known sprite so a missing file fails at startup rather
    /// than at first spawn.
    pub fn preflight(&self) -> Result<()> {
        for id in AssetId::ALL {
            self.size_of(id)?;
        }
        Ok(())
    }
}

impl AssetProvider for ImageDirAssets {
    fn size_of(&self, id: AssetId) -> Result<Size> {
        let path = self.root.join(id.file_name());
        if !path.is_file() {
            return Err(GameError::AssetMissing { id, path });
        }
        let (width, height) = image::image_dimensions(&path)
            .map_err(|source| GameError::AssetUnreadable { id, path: path.clone(), source })?;
        debug!(?id, width, height, "loaded sprite size");
        Ok(Size { width: width as i32, height: height as i32 })
    }
}

/// Every size an entity factory needs, resolved once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSizes {
    pub background: Size,
    pub enemy: Size,
    pub enemy_wreck: Size,
    pub hero: Size,
    pub bullet: Size,
}

impl SpriteSizes {
    pub fn load<A: AssetProvider + ?Sized>(provider: &A) -> Result<Self> {
        Ok(Self {
            background: provider.size_of(AssetId::Background)?,
            enemy: provider.size_of(AssetId::Enemy)?,
            enemy_wreck: provider.size_of(AssetId::EnemyWreck)?,
            hero: provider.size_of(AssetId::Hero)?,
            bullet: provider.size_of(AssetId::Bullet)?,
        })
    }
}
