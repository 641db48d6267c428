use core::fmt::{Display, Formatter};

use crate::game::GameState;

/// Failures reported by an [`ImageLoader`](crate::sprites::ImageLoader).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadError {
    FileOpen,
    FileRead,
    FileSeek,
    /// The file does not start with the `BM` signature.
    NotBitmap,
    /// The decoded image does not fit in the destination buffer.
    BufferTooSmall,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::FileOpen => write!(f, "could not open file"),
            LoadError::FileRead => write!(f, "could not read file"),
            LoadError::FileSeek => write!(f, "could not seek in file"),
            LoadError::NotBitmap => write!(f, "not a bitmap"),
            LoadError::BufferTooSmall => write!(f, "image does not fit the destination buffer"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpriteError {
    Load { path: &'static str, error: LoadError },
    /// The loader returned a different byte count than one frame needs.
    FrameSize { path: &'static str, expected: usize, loaded: usize },
    /// Sprite memory cannot hold the requested frames.
    OutOfMemory { requested: usize, available: usize },
}

impl Display for SpriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SpriteError::Load { path, error } => write!(f, "loading {path}: {error}"),
            SpriteError::FrameSize { path, expected, loaded } => {
                write!(f, "loading {path}: expected {expected} bytes, got {loaded}")
            }
            SpriteError::OutOfMemory { requested, available } => write!(
                f,
                "sprite memory exhausted: {requested} pixels requested, {available} available"
            ),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// A framebuffer is not `width * height` pixels long.
    BufferSize { expected: usize, actual: usize },
}

impl Display for VideoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            VideoError::BufferSize { expected, actual } => {
                write!(f, "framebuffer holds {actual} pixels, expected {expected}")
            }
        }
    }
}

/// Errors that stop the frame loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The state machine reached a state it has no rule for.
    IllegalState(GameState),
    InvalidMenuOption(u8),
    QueueFull,
    ObjectsExhausted,
    /// Tried to remove an object that is not in the draw queue.
    NotQueued,
    /// A handle outlived the object it pointed to.
    StaleHandle,
    Sprite(SpriteError),
}

impl GameError {
    /// Numeric code printed on the debug channel when the game halts.
    pub const fn code(&self) -> u32 {
        match self {
            GameError::IllegalState(_) => 1,
            GameError::InvalidMenuOption(_) => 2,
            GameError::QueueFull => 3,
            GameError::ObjectsExhausted => 4,
            GameError::NotQueued => 5,
            GameError::StaleHandle => 6,
            GameError::Sprite(_) => 7,
        }
    }
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::IllegalState(state) => write!(f, "illegal game state {state}"),
            GameError::InvalidMenuOption(option) => write!(f, "menu option {option} has no test"),
            GameError::QueueFull => write!(f, "draw queue is full"),
            GameError::ObjectsExhausted => write!(f, "no free drawable object slots"),
            GameError::NotQueued => write!(f, "object is not in the draw queue"),
            GameError::StaleHandle => write!(f, "handle refers to a destroyed object"),
            GameError::Sprite(e) => write!(f, "{e}"),
        }
    }
}

impl From<SpriteError> for GameError {
    fn from(e: SpriteError) -> Self {
        GameError::Sprite(e)
    }
}

impl core::error::Error for LoadError {}
impl core::error::Error for SpriteError {}
impl core::error::Error for VideoError {}
impl core::error::Error for GameError {}
