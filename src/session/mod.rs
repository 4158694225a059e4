//! Session Module
//!
//! Owns everything on the wire side of the client.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      Session                        │
//! │   (player number + owned command channel, moved     │
//! │    from the connector to whoever plays the game)    │
//! └──────────────────────┬──────────────────────────────┘
//!                        │
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//! ┌────────────┐  ┌─────────────┐  ┌────────────┐
//! │ Connector  │  │  Handshake  │  │  Protocol  │
//! │            │  │             │  │            │
//! │ - worker   │  │ - admission │  │ - UUID     │
//! │   thread   │  │   response  │  │ - command  │
//! │ - dial     │  │ - rejection │  │   bytes    │
//! └────────────┘  └─────────────┘  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`protocol`] - The single-byte wire contract shared with the server
//! - [`channel`] - Best-effort command writes over the open stream
//! - [`handshake`] - One-shot admission read after connecting
//! - [`connector`] - Worker thread performing connect + handshake

pub mod channel;
pub mod connector;
pub mod handshake;
pub mod protocol;

pub use channel::{ChannelError, CommandChannel};
pub use connector::{spawn_connect, ConnectOutcome};
pub use protocol::CommandCode;

use std::io::Write;

/// An admitted play session: the assigned player number plus exclusive
/// ownership of the command channel. Obtained from the connector and
/// passed by value; there is no shared or global session state.
pub struct Session<W: Write> {
    player: u8,
    channel: CommandChannel<W>,
}

impl<W: Write> Session<W> {
    pub fn new(player: u8, stream: W) -> Self {
        Self {
            player,
            channel: CommandChannel::new(stream),
        }
    }

    /// Player number assigned by the server during admission.
    pub fn player(&self) -> u8 {
        self.player
    }

    /// Forward one command to the server, best-effort.
    pub fn send(&mut self, code: CommandCode) -> Result<(), ChannelError> {
        self.channel.send(code)
    }

    /// Close the underlying channel; safe to call more than once.
    pub fn close(&mut self) -> Result<(), ChannelError> {
        self.channel.close()
    }
}
