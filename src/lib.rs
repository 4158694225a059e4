//! Headless client for a point-to-point game controller protocol.
//!
//! The client resolves pointer motion over a pad surface into discrete
//! directional input ([`domain::DirectionResolver`]) and forwards each
//! accepted change as a single command byte over an established,
//! ordered, reliable byte stream ([`session::CommandChannel`]).
//! Connection establishment, including the one-byte admission
//! handshake, runs on a worker thread and hands an owned
//! [`session::Session`] to the caller.

pub mod domain;
pub mod infrastructure;
pub mod session;
