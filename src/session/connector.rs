//! Connection establishment worker.
//!
//! Connecting and waiting for admission can block indefinitely, so both
//! happen on a dedicated thread. The outcome is delivered exactly once
//! over an mpsc channel: an owned [`Session`] on success, so the live
//! connection is passed explicitly instead of parked in global state.

use crate::session::handshake::{read_admission, HandshakeError};
use crate::session::protocol::SERVER_UUID;
use crate::session::Session;
use std::net::TcpStream;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use tracing::{error, info, warn};

/// Result of one connection attempt.
pub enum ConnectOutcome {
    /// Admitted; the session owns the connected stream.
    Connected(Session<TcpStream>),
    /// The server answered, but its game is already full.
    Rejected,
    /// Connecting or the handshake itself failed.
    Failed(anyhow::Error),
}

/// Spawn the connect worker. The caller keeps the receiving end of
/// `outcome_tx` and blocks (or polls) until the outcome arrives.
pub fn spawn_connect(addr: String, outcome_tx: Sender<ConnectOutcome>) -> JoinHandle<()> {
    thread::Builder::new()
        .name("connect-worker".to_string())
        .spawn(move || {
            let outcome = connect(&addr);
            // The receiver may have given up waiting; nothing to do then.
            let _ = outcome_tx.send(outcome);
        })
        .expect("failed to spawn connect worker")
}

fn connect(addr: &str) -> ConnectOutcome {
    info!(service = SERVER_UUID, "Connecting to {}", addr);

    let mut stream = match TcpStream::connect(addr) {
        Ok(stream) => stream,
        Err(err) => {
            error!("Unable to connect to {}: {}", addr, err);
            return ConnectOutcome::Failed(err.into());
        }
    };

    // Commands are single bytes; do not let the kernel batch them.
    if let Err(err) = stream.set_nodelay(true) {
        warn!("Could not disable Nagle on the command stream: {}", err);
    }

    match read_admission(&mut stream) {
        Ok(player) => {
            info!("Admitted to the game as player {}", player);
            ConnectOutcome::Connected(Session::new(player, stream))
        }
        Err(HandshakeError::GameFull) => {
            warn!("Server rejected the session: game is full");
            ConnectOutcome::Rejected
        }
        Err(err) => {
            error!("Handshake failed: {}", err);
            ConnectOutcome::Failed(err.into())
        }
    }
}
