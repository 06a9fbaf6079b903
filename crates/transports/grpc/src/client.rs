//! gRPC client wrapper for peer adapters
//!
//! A peer adapter (offerer or answerer) talks to the rendezvous service
//! through this wrapper: publish an offer and park for the answer, fetch
//! the live offer, or submit an answer. The one-message response streams
//! of the wire protocol are unwrapped into plain strings.

use crate::generated::signaling_client::SignalingClient;
use crate::generated::{SdpAnswer, SdpOffer, WaitForOfferRequest};
use rendezvous_core::{Error, Result};
use tonic::transport::Channel;
use tonic::{Code, Status};
use tracing::debug;

/// Client for the rendezvous signaling service
///
/// ```no_run
/// use rendezvous_grpc::RendezvousClient;
///
/// # tokio_test::block_on(async {
/// let client = RendezvousClient::new("localhost:6556").unwrap();
/// let offer = client.fetch_offer().await.unwrap();
/// // Feed `offer` into the engine, derive the answer, then:
/// client.submit_answer("v=0 answerB").await.unwrap();
/// # });
/// ```
#[derive(Debug)]
pub struct RendezvousClient {
    /// Endpoint URL (e.g., "localhost:6556")
    endpoint: String,

    /// gRPC channel (created lazily)
    channel: tokio::sync::Mutex<Option<Channel>>,
}

impl RendezvousClient {
    /// Create a new client for the given endpoint.
    ///
    /// The connection itself is established lazily on first use.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();

        if endpoint.is_empty() {
            return Err(Error::Transport(
                "signaling endpoint cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            channel: tokio::sync::Mutex::new(None),
        })
    }

    /// Get or create the gRPC channel
    async fn get_channel(&self) -> Result<Channel> {
        let mut guard = self.channel.lock().await;

        if let Some(ref channel) = *guard {
            return Ok(channel.clone());
        }

        // Default to http:// for bare host:port endpoints
        let uri = if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            self.endpoint.clone()
        } else {
            format!("http://{}", self.endpoint)
        };

        let channel = Channel::from_shared(uri)
            .map_err(|e| {
                Error::Transport(format!("Invalid endpoint '{}': {}", self.endpoint, e))
            })?
            .connect()
            .await
            .map_err(|e| {
                Error::Transport(format!("Failed to connect to '{}': {}", self.endpoint, e))
            })?;

        *guard = Some(channel.clone());
        Ok(channel)
    }

    async fn client(&self) -> Result<SignalingClient<Channel>> {
        Ok(SignalingClient::new(self.get_channel().await?))
    }

    /// Publish an offer and park until the answering peer submits its
    /// half; returns the answer SDP exactly as submitted.
    pub async fn publish_offer_and_wait(&self, offer_sdp: &str) -> Result<String> {
        let mut client = self.client().await?;
        debug!(offer_len = offer_sdp.len(), "publishing offer");

        let mut stream = client
            .start_exchange(SdpOffer {
                sdp: offer_sdp.to_owned(),
            })
            .await
            .map_err(error_from_status)?
            .into_inner();

        match stream.message().await.map_err(error_from_status)? {
            Some(answer) => Ok(answer.sdp),
            None => Err(Error::Transport(
                "answer stream closed without a message".to_string(),
            )),
        }
    }

    /// Park until an offer is live on the service, then return it.
    pub async fn fetch_offer(&self) -> Result<String> {
        let mut client = self.client().await?;
        debug!("waiting for a live offer");

        let mut stream = client
            .wait_for_offer(WaitForOfferRequest {})
            .await
            .map_err(error_from_status)?
            .into_inner();

        match stream.message().await.map_err(error_from_status)? {
            Some(offer) => Ok(offer.sdp),
            None => Err(Error::Transport(
                "offer stream closed without a message".to_string(),
            )),
        }
    }

    /// Deliver the answer for the live offer.
    ///
    /// The wire acknowledgment carries a reserved flag with no defined
    /// meaning; it is deliberately not surfaced here.
    pub async fn submit_answer(&self, answer_sdp: &str) -> Result<()> {
        let mut client = self.client().await?;
        debug!(answer_len = answer_sdp.len(), "submitting answer");

        client
            .submit_answer(SdpAnswer {
                sdp: answer_sdp.to_owned(),
            })
            .await
            .map_err(error_from_status)?;

        Ok(())
    }
}

/// Recover the core error taxonomy from a gRPC status.
///
/// Inverse of the service-side mapping; unknown codes degrade to
/// [`Error::Transport`].
fn error_from_status(status: Status) -> Error {
    match status.code() {
        Code::InvalidArgument => Error::InvalidSdp,
        Code::FailedPrecondition => Error::AnswerWithoutOffer,
        Code::AlreadyExists => Error::DuplicateAnswer,
        Code::ResourceExhausted => Error::ExchangeAlreadyInProgress,
        Code::Aborted => Error::ExchangeAbandoned,
        Code::DeadlineExceeded => Error::Timeout,
        Code::Cancelled => Error::Cancelled,
        _ => Error::Transport(status.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_endpoint_is_rejected() {
        assert!(matches!(
            RendezvousClient::new("").unwrap_err(),
            Error::Transport(_)
        ));
    }

    #[test]
    fn status_codes_round_trip_to_core_errors() {
        assert!(matches!(
            error_from_status(Status::failed_precondition("no offer")),
            Error::AnswerWithoutOffer
        ));
        assert!(matches!(
            error_from_status(Status::already_exists("answered")),
            Error::DuplicateAnswer
        ));
        assert!(matches!(
            error_from_status(Status::internal("boom")),
            Error::Transport(_)
        ));
    }
}
