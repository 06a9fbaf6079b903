//! Boundary to the external real-time engine
//!
//! The broker never drives ICE, opens channels, or inspects payload bytes;
//! all of that lives in a peer adapter wrapping a native real-time engine.
//! This module only fixes the shape of that boundary: the hook points an
//! adapter registers against, and the opaque session-description value the
//! two sides trade through the rendezvous service.

use async_trait::async_trait;

/// Which half of the handshake a peer produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerRole {
    /// Initiating peer; produces the offer and parks for the answer.
    Offerer,
    /// Responding peer; consumes the offer and produces the answer.
    Answerer,
}

/// An opaque session description as produced by a peer's engine.
///
/// The rendezvous core never parses or validates the SDP text; it is
/// carried through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionDescription {
    /// Role of the peer that produced this description
    pub role: PeerRole,
    /// Raw SDP text, passed through verbatim
    pub sdp: String,
}

impl SessionDescription {
    /// Wrap an engine-produced offer.
    pub fn offer(sdp: impl Into<String>) -> Self {
        Self {
            role: PeerRole::Offerer,
            sdp: sdp.into(),
        }
    }

    /// Wrap an engine-produced answer.
    pub fn answer(sdp: impl Into<String>) -> Self {
        Self {
            role: PeerRole::Answerer,
            sdp: sdp.into(),
        }
    }
}

/// Hook points a peer adapter registers against its real-time engine.
///
/// All hooks default to no-ops so adapters implement only what they need.
/// Payload bytes are opaque to the rendezvous core.
#[async_trait]
pub trait PeerEngineHooks: Send + Sync {
    /// The engine wants a (re)negotiation; the adapter should create a
    /// local description and route it through the rendezvous service.
    async fn on_negotiation_needed(&self) {}

    /// ICE gathering finished; `local` is the complete local description.
    async fn on_ice_gathering_complete(&self, local: SessionDescription) {
        let _ = local;
    }

    /// The remote peer opened a data channel towards us.
    async fn on_data_channel(&self, label: &str) {
        let _ = label;
    }

    /// A channel transitioned to open.
    async fn on_channel_open(&self, label: &str) {
        let _ = label;
    }

    /// A channel transitioned to closed.
    async fn on_channel_close(&self, label: &str) {
        let _ = label;
    }

    /// An opaque payload arrived on an open channel.
    async fn on_channel_message(&self, label: &str, payload: &[u8]) {
        let _ = (label, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingHooks {
        negotiations: AtomicUsize,
        messages: AtomicUsize,
    }

    #[async_trait]
    impl PeerEngineHooks for RecordingHooks {
        async fn on_negotiation_needed(&self) {
            self.negotiations.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_channel_message(&self, _label: &str, _payload: &[u8]) {
            self.messages.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn hooks_dispatch_through_trait_object() {
        let hooks = RecordingHooks::default();
        let dyn_hooks: &dyn PeerEngineHooks = &hooks;

        dyn_hooks.on_negotiation_needed().await;
        dyn_hooks.on_channel_message("video", b"frame").await;
        // Unimplemented hooks fall back to the no-op defaults.
        dyn_hooks.on_channel_open("video").await;

        assert_eq!(hooks.negotiations.load(Ordering::SeqCst), 1);
        assert_eq!(hooks.messages.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn session_description_carries_sdp_verbatim() {
        let offer = SessionDescription::offer("v=0 offerA");
        assert_eq!(offer.role, PeerRole::Offerer);
        assert_eq!(offer.sdp, "v=0 offerA");

        let answer = SessionDescription::answer("v=0 answerB");
        assert_eq!(answer.role, PeerRole::Answerer);
    }
}
