//! Best-effort command transmission over an established byte stream.

use crate::session::protocol::CommandCode;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ChannelError {
    /// The underlying stream could not accept a write or could not be
    /// closed cleanly.
    #[error("command channel is disconnected")]
    Disconnected,
}

/// Thin session wrapper around a connected, ordered, reliable byte
/// stream. Serializes each [`CommandCode`] as a single byte.
///
/// There is no retry, buffering, or batching: every accepted direction
/// change triggers exactly one write, and a failed write is reported as
/// [`ChannelError::Disconnected`] for the caller to ignore or log.
/// Losing one directional update is acceptable since the next pointer
/// sample supersedes it.
pub struct CommandChannel<W: Write> {
    stream: Option<W>,
}

impl<W: Write> CommandChannel<W> {
    /// Wrap an already-established stream.
    pub fn new(stream: W) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Write exactly one byte to the peer. Never fatal: any I/O failure
    /// (including a channel that was already closed) comes back as
    /// `Disconnected`.
    pub fn send(&mut self, code: CommandCode) -> Result<(), ChannelError> {
        let stream = self.stream.as_mut().ok_or(ChannelError::Disconnected)?;
        stream
            .write_all(&[code.as_byte()])
            .and_then(|()| stream.flush())
            .map_err(|err| {
                debug!("command write failed: {}", err);
                ChannelError::Disconnected
            })
    }

    /// Release the underlying stream. Idempotent: the first call drops
    /// the stream, later calls are no-ops. A flush failure on the first
    /// call is reported but the channel still ends up closed.
    pub fn close(&mut self) -> Result<(), ChannelError> {
        if let Some(mut stream) = self.stream.take() {
            if let Err(err) = stream.flush() {
                debug!("flush on close failed: {}", err);
                return Err(ChannelError::Disconnected);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn send_writes_the_wire_byte() {
        let mut channel = CommandChannel::new(Vec::new());
        channel.send(CommandCode::DirRight).unwrap();
        channel.send(CommandCode::DirNeutral).unwrap();
        channel.send(CommandCode::PauseResume).unwrap();

        let written = channel.stream.take().unwrap();
        assert_eq!(written, vec![4, 5, 200]);
    }

    #[test]
    fn send_after_close_reports_disconnected() {
        let mut channel = CommandChannel::new(Vec::new());
        channel.close().unwrap();
        assert!(matches!(
            channel.send(CommandCode::DirUp),
            Err(ChannelError::Disconnected)
        ));
    }

    #[test]
    fn send_on_broken_stream_reports_disconnected() {
        let mut channel = CommandChannel::new(BrokenPipe);
        assert!(matches!(
            channel.send(CommandCode::DirLeft),
            Err(ChannelError::Disconnected)
        ));
    }

    #[test]
    fn close_is_idempotent() {
        let mut channel = CommandChannel::new(Vec::new());
        assert!(channel.is_open());
        channel.close().unwrap();
        channel.close().unwrap();
        assert!(!channel.is_open());
    }
}
