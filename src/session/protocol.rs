//! Controller Wire Protocol
//!
//! This module contains the byte-level contract shared with the game
//! server. Every command is a single standalone byte: no framing, no
//! acknowledgement, no checksum. The values are closed and must match
//! the server exactly.

use crate::domain::Direction;

/// Service UUID the server publishes for the controller session.
pub const SERVER_UUID: &str = "2cafd5f6-ea6c-44c4-99bf-5629bdbcab1d";

/// Response byte the server sends during admission when the game it
/// hosts is already full. Reserved: it only ever appears in the
/// handshake, never in the command stream.
pub const GAME_FULL_RESPONSE: u8 = 255;

/// Commands the client can send to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCode {
    /// Directional input: up
    DirUp,
    /// Directional input: down
    DirDown,
    /// Directional input: left
    DirLeft,
    /// Directional input: right
    DirRight,
    /// No directional input active
    DirNeutral,
    /// Toggle pause/resume (discrete action, not a direction)
    PauseResume,
}

impl CommandCode {
    /// Get the wire byte for this command.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::DirUp => 1,
            Self::DirDown => 2,
            Self::DirLeft => 3,
            Self::DirRight => 4,
            Self::DirNeutral => 5,
            Self::PauseResume => 200,
        }
    }
}

impl From<Direction> for CommandCode {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::DirUp,
            Direction::Down => Self::DirDown,
            Direction::Left => Self::DirLeft,
            Direction::Right => Self::DirRight,
            Direction::Neutral => Self::DirNeutral,
        }
    }
}
