//! Admission handshake.
//!
//! Runs once, immediately after the transport connects and before any
//! command traffic: the server answers with a single byte, either the
//! assigned player number or [`GAME_FULL_RESPONSE`].

use crate::session::protocol::GAME_FULL_RESPONSE;
use std::io::{ErrorKind, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandshakeError {
    /// The server rejected the session because its game is at capacity.
    #[error("the game is full")]
    GameFull,
    /// The peer closed the connection before answering.
    #[error("connection closed before the server replied")]
    ClosedByPeer,
    #[error("handshake I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the server's one-byte admission response and return the
/// assigned player number.
pub fn read_admission<R: Read>(stream: &mut R) -> Result<u8, HandshakeError> {
    let mut response = [0u8; 1];
    loop {
        match stream.read(&mut response) {
            Ok(0) => return Err(HandshakeError::ClosedByPeer),
            Ok(_) => break,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }

    if response[0] == GAME_FULL_RESPONSE {
        Err(HandshakeError::GameFull)
    } else {
        Ok(response[0])
    }
}
