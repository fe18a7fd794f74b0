/// Startup and I/O errors.
///
/// Nothing inside a tick can fail; every variant here aborts the program
/// before (or while leaving) the game loop.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::assets::AssetId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("asset {id:?} not found at {path}")]
    AssetMissing { id: AssetId, path: PathBuf },

    #[error("asset {id:?} at {path} could not be decoded: {source}")]
    AssetUnreadable {
        id: AssetId,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
