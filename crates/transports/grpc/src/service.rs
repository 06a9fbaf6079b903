//! Signaling service implementation
//!
//! Maps the three RPCs onto the [`HandshakeSlot`]: `StartExchange` parks
//! in `publish_offer`, `WaitForOffer` parks in `wait_for_offer`, and
//! `SubmitAnswer` resolves the parked publisher. Both streaming RPCs
//! carry exactly one message and then complete.
//!
//! Errors never take the service down: each core error maps to a gRPC
//! status for the one caller that violated the state machine or ran past
//! its deadline, and the slot stays consistent for the next exchange.

use crate::config::ServiceConfig;
use crate::generated::signaling_server::Signaling;
use crate::generated::{SdpAnswer, SdpOffer, SubmitAck, WaitForOfferRequest};
use rendezvous_core::{Error, HandshakeSlot};
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::Once;
use tonic::{Request, Response, Status};
use tracing::{info, warn};

/// Signaling rendezvous service implementation
///
/// Owns the single [`HandshakeSlot`] for the process lifetime; RPC
/// handlers reach it through this struct, never through global state.
pub struct SignalingServiceImpl {
    /// The one slot every exchange goes through
    slot: Arc<HandshakeSlot>,

    /// Deadline for a parked StartExchange call
    exchange_timeout: Duration,

    /// Deadline for a parked WaitForOffer call
    offer_wait_timeout: Duration,
}

impl SignalingServiceImpl {
    /// Create the service around an explicitly owned slot.
    pub fn new(slot: Arc<HandshakeSlot>, config: &ServiceConfig) -> Self {
        Self {
            slot,
            exchange_timeout: config.exchange_timeout,
            offer_wait_timeout: config.offer_wait_timeout,
        }
    }

    /// Shared handle to the slot, mainly for tests and observability.
    pub fn slot(&self) -> Arc<HandshakeSlot> {
        Arc::clone(&self.slot)
    }
}

/// Map a core rendezvous error onto the gRPC status vocabulary.
///
/// Each variant gets a distinct code so clients can recover the taxonomy
/// without parsing messages.
pub(crate) fn status_from_error(err: Error) -> Status {
    match err {
        Error::InvalidSdp => Status::invalid_argument(err.to_string()),
        Error::AnswerWithoutOffer => Status::failed_precondition(err.to_string()),
        Error::DuplicateAnswer => Status::already_exists(err.to_string()),
        Error::ExchangeAlreadyInProgress => Status::resource_exhausted(err.to_string()),
        Error::ExchangeAbandoned => Status::aborted(err.to_string()),
        Error::Timeout => Status::deadline_exceeded(err.to_string()),
        Error::Cancelled => Status::cancelled(err.to_string()),
        Error::Transport(_) => Status::unavailable(err.to_string()),
    }
}

#[tonic::async_trait]
impl Signaling for SignalingServiceImpl {
    type StartExchangeStream = Once<Result<SdpAnswer, Status>>;

    async fn start_exchange(
        &self,
        request: Request<SdpOffer>,
    ) -> Result<Response<Self::StartExchangeStream>, Status> {
        let offer = request.into_inner();
        info!(offer_len = offer.sdp.len(), "start_exchange: publishing offer");

        let answer = self
            .slot
            .publish_offer(&offer.sdp, Some(self.exchange_timeout))
            .await
            .map_err(|err| {
                warn!(%err, "start_exchange failed");
                status_from_error(err)
            })?;

        info!(answer_len = answer.len(), "start_exchange: streaming answer back");
        Ok(Response::new(tokio_stream::once(Ok(SdpAnswer {
            sdp: answer,
        }))))
    }

    type WaitForOfferStream = Once<Result<SdpOffer, Status>>;

    async fn wait_for_offer(
        &self,
        _request: Request<WaitForOfferRequest>,
    ) -> Result<Response<Self::WaitForOfferStream>, Status> {
        info!("wait_for_offer: observer parked until an offer is live");

        let offer = tokio::time::timeout(self.offer_wait_timeout, self.slot.wait_for_offer())
            .await
            .map_err(|_| {
                warn!(
                    deadline_secs = self.offer_wait_timeout.as_secs(),
                    "wait_for_offer deadline elapsed with no offer"
                );
                status_from_error(Error::Timeout)
            })?
            .map_err(status_from_error)?;

        info!(offer_len = offer.len(), "wait_for_offer: streaming offer");
        Ok(Response::new(tokio_stream::once(Ok(SdpOffer {
            sdp: offer,
        }))))
    }

    async fn submit_answer(
        &self,
        request: Request<SdpAnswer>,
    ) -> Result<Response<SubmitAck>, Status> {
        let answer = request.into_inner();
        info!(answer_len = answer.sdp.len(), "submit_answer received");

        self.slot.submit_answer(&answer.sdp).map_err(|err| {
            warn!(%err, "submit_answer rejected");
            status_from_error(err)
        })?;

        // `block` is reserved: always true, meaning unspecified by the
        // original protocol, no known consumer.
        Ok(Response::new(SubmitAck { block: true }))
    }
}
