//! Transport-agnostic core for SDP rendezvous
//!
//! Two WebRTC peers behind NATs cannot exchange their session-description
//! handshake directly; this crate brokers it. The [`HandshakeSlot`] holds
//! at most one live offer, parks the offering side until the answering
//! side supplies its half, and hands the answer back. Everything network-
//! facing lives in the transport crates; everything engine-facing (ICE,
//! channels, media) stays behind the [`peer::PeerEngineHooks`] boundary.

pub mod error;
pub mod peer;
pub mod slot;

pub use error::{Error, Result};
pub use peer::{PeerEngineHooks, PeerRole, SessionDescription};
pub use slot::HandshakeSlot;
