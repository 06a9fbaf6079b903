//! Single-session offer/answer rendezvous slot
//!
//! `HandshakeSlot` is the meeting point between exactly one offer-publisher
//! and one answer-submitter. The publisher parks on a one-shot promise that
//! the submitter resolves; observers watch the live offer through a `watch`
//! channel, so reads never race publication.
//!
//! One exchange at a time:
//! `Idle -> OfferPublished -> AnswerDelivered -> Idle`. The slot resets to
//! `Idle` after every completed (or abandoned, or timed-out) exchange, so a
//! single process can broker any number of sequential exchanges.

use crate::{Error, Result};
use parking_lot::Mutex;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tracing::{debug, warn};

/// Exchange state, advanced under the slot mutex.
enum ExchangeState {
    /// No offer is live; both publish and wait are possible, submit is not.
    Idle,
    /// An offer is visible and its publisher is parked on `answer_tx`.
    OfferPublished {
        answer_tx: oneshot::Sender<String>,
    },
    /// The answer was handed to the publisher, which has not yet reset the
    /// slot. A submit in this window is a duplicate.
    AnswerDelivered,
}

/// Rendezvous point for one offer/answer pair at a time.
///
/// Owned by the service object and shared by reference into each RPC
/// handler; there is no ambient/global slot. All state transitions happen
/// under a short non-async lock, and the offer is observed through a
/// `watch` channel, so concurrent `wait_for_offer` calls can never see a
/// torn or stale value.
///
/// ```
/// use rendezvous_core::HandshakeSlot;
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let slot = Arc::new(HandshakeSlot::new());
/// let offerer = {
///     let slot = Arc::clone(&slot);
///     tokio::spawn(async move { slot.publish_offer("v=0 offerA", None).await })
/// };
///
/// assert_eq!(slot.wait_for_offer().await.unwrap(), "v=0 offerA");
/// slot.submit_answer("v=0 answerB").unwrap();
/// assert_eq!(offerer.await.unwrap().unwrap(), "v=0 answerB");
/// # });
/// ```
pub struct HandshakeSlot {
    state: Mutex<ExchangeState>,
    offer_tx: watch::Sender<Option<String>>,
}

impl HandshakeSlot {
    /// Create an idle slot with no live offer.
    pub fn new() -> Self {
        let (offer_tx, _offer_rx) = watch::channel(None);
        Self {
            state: Mutex::new(ExchangeState::Idle),
            offer_tx,
        }
    }

    /// Publish an offer and park until the answer for it arrives.
    ///
    /// Makes the offer visible to `wait_for_offer` observers, then awaits
    /// the one-shot promise that `submit_answer` resolves. The answer is
    /// returned exactly as submitted. On every exit path, including a
    /// deadline or the future being dropped by a disconnecting caller,
    /// the slot is released back to idle and the live offer is withdrawn.
    ///
    /// Errors:
    /// - [`Error::InvalidSdp`] when `sdp` is empty.
    /// - [`Error::ExchangeAlreadyInProgress`] when another offer is live.
    /// - [`Error::Timeout`] when `deadline` elapses before an answer.
    /// - [`Error::Cancelled`] when the exchange is torn down under us.
    pub async fn publish_offer(&self, sdp: &str, deadline: Option<Duration>) -> Result<String> {
        if sdp.is_empty() {
            return Err(Error::InvalidSdp);
        }

        let answer_rx = {
            let mut state = self.state.lock();
            if !matches!(*state, ExchangeState::Idle) {
                return Err(Error::ExchangeAlreadyInProgress);
            }
            let (answer_tx, answer_rx) = oneshot::channel();
            *state = ExchangeState::OfferPublished { answer_tx };
            answer_rx
        };

        // Releases the slot on every exit path, including cancellation.
        let _release = ReleaseOnDrop { slot: self };

        self.offer_tx.send_replace(Some(sdp.to_owned()));
        debug!(offer_len = sdp.len(), "offer published, awaiting answer");

        let answer = match deadline {
            Some(limit) => tokio::time::timeout(limit, answer_rx)
                .await
                .map_err(|_| {
                    warn!(deadline_secs = limit.as_secs(), "exchange deadline elapsed");
                    Error::Timeout
                })?,
            None => answer_rx.await,
        };

        answer.map_err(|_| Error::Cancelled)
    }

    /// Suspend until an offer is live, then return it.
    ///
    /// Pure observer: does not advance the exchange state. If an offer is
    /// already live the call completes immediately; otherwise it parks on
    /// the offer watch channel until `publish_offer` stores one.
    pub async fn wait_for_offer(&self) -> Result<String> {
        let mut offer_rx = self.offer_tx.subscribe();
        let offer = offer_rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| Error::Cancelled)?;
        Ok(offer.as_deref().unwrap_or_default().to_owned())
    }

    /// Non-blocking snapshot of the live offer, if any.
    pub fn current_offer(&self) -> Option<String> {
        self.offer_tx.borrow().clone()
    }

    /// Deliver the answer for the live offer to its parked publisher.
    ///
    /// Exactly one answer is accepted per offer. Errors:
    /// - [`Error::InvalidSdp`] when `sdp` is empty.
    /// - [`Error::AnswerWithoutOffer`] when the slot is idle.
    /// - [`Error::DuplicateAnswer`] when the live offer was already
    ///   answered; the first answer is never overwritten.
    /// - [`Error::ExchangeAbandoned`] when the publisher disconnected
    ///   mid-handoff; the slot is released so the next exchange is clean.
    pub fn submit_answer(&self, sdp: &str) -> Result<()> {
        if sdp.is_empty() {
            return Err(Error::InvalidSdp);
        }

        let answer_tx = {
            let mut state = self.state.lock();
            match std::mem::replace(&mut *state, ExchangeState::AnswerDelivered) {
                ExchangeState::Idle => {
                    *state = ExchangeState::Idle;
                    return Err(Error::AnswerWithoutOffer);
                }
                ExchangeState::AnswerDelivered => return Err(Error::DuplicateAnswer),
                ExchangeState::OfferPublished { answer_tx } => answer_tx,
            }
        };

        if answer_tx.send(sdp.to_owned()).is_err() {
            warn!("offerer went away before the answer could be handed over");
            self.release();
            return Err(Error::ExchangeAbandoned);
        }

        debug!(answer_len = sdp.len(), "answer handed to parked offerer");
        Ok(())
    }

    /// Reset to idle and withdraw the live offer.
    fn release(&self) {
        let mut state = self.state.lock();
        *state = ExchangeState::Idle;
        self.offer_tx.send_replace(None);
    }
}

impl Default for HandshakeSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the slot when the publisher's future exits, normally or not.
struct ReleaseOnDrop<'a> {
    slot: &'a HandshakeSlot,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.slot.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::task::yield_now;
    use tokio::time::{sleep, timeout};

    const OFFER: &str = "v=0 offerA";
    const ANSWER: &str = "v=0 answerB";

    #[tokio::test]
    async fn round_trip_delivers_answer_to_publisher() {
        let slot = Arc::new(HandshakeSlot::new());

        let publisher = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.publish_offer(OFFER, None).await })
        };
        yield_now().await;

        let observed = slot.wait_for_offer().await.unwrap();
        assert_eq!(observed, OFFER);

        slot.submit_answer(ANSWER).unwrap();

        let answer = timeout(Duration::from_secs(1), publisher)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(answer, ANSWER);
    }

    #[tokio::test]
    async fn answer_without_offer_is_rejected_and_state_unchanged() {
        let slot = HandshakeSlot::new();

        let err = slot.submit_answer(ANSWER).unwrap_err();
        assert!(matches!(err, Error::AnswerWithoutOffer));
        assert!(slot.current_offer().is_none());

        // The rejected answer must not have consumed the slot.
        let err = slot.submit_answer(ANSWER).unwrap_err();
        assert!(matches!(err, Error::AnswerWithoutOffer));
    }

    #[tokio::test]
    async fn second_answer_for_live_offer_is_a_duplicate() {
        // Current-thread runtime: the publisher task is not polled between
        // the two submits, so the slot is still in the delivered state.
        let slot = Arc::new(HandshakeSlot::new());
        let publisher = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.publish_offer(OFFER, None).await })
        };
        yield_now().await;

        slot.submit_answer(ANSWER).unwrap();
        let err = slot.submit_answer("v=0 answerC").unwrap_err();
        assert!(matches!(err, Error::DuplicateAnswer));

        // The first answer survives.
        let answer = publisher.await.unwrap().unwrap();
        assert_eq!(answer, ANSWER);
    }

    #[tokio::test]
    async fn second_offer_while_exchange_live_is_rejected() {
        let slot = Arc::new(HandshakeSlot::new());
        let publisher = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.publish_offer(OFFER, None).await })
        };
        yield_now().await;

        let err = slot.publish_offer("v=0 offerB", None).await.unwrap_err();
        assert!(matches!(err, Error::ExchangeAlreadyInProgress));

        // The live exchange is unharmed.
        assert_eq!(slot.current_offer().as_deref(), Some(OFFER));
        slot.submit_answer(ANSWER).unwrap();
        assert_eq!(publisher.await.unwrap().unwrap(), ANSWER);
    }

    #[tokio::test]
    async fn wait_for_offer_parks_until_publication() {
        let slot = Arc::new(HandshakeSlot::new());

        let observer = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.wait_for_offer().await })
        };
        yield_now().await;
        assert!(!observer.is_finished());

        let publisher = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.publish_offer(OFFER, None).await })
        };
        yield_now().await;

        let observed = timeout(Duration::from_secs(1), observer)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(observed, OFFER);

        slot.submit_answer(ANSWER).unwrap();
        publisher.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_releases_slot_to_idle() {
        let slot = Arc::new(HandshakeSlot::new());

        let err = slot
            .publish_offer(OFFER, Some(Duration::from_secs(5)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout));

        // Slot is idle again: the offer is withdrawn and a fresh exchange
        // is accepted.
        assert!(slot.current_offer().is_none());
        let publisher = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.publish_offer("v=0 offerB", None).await })
        };
        yield_now().await;
        slot.submit_answer(ANSWER).unwrap();
        assert_eq!(publisher.await.unwrap().unwrap(), ANSWER);
    }

    #[tokio::test]
    async fn cancelled_publisher_releases_slot() {
        let slot = Arc::new(HandshakeSlot::new());
        let publisher = {
            let slot = Arc::clone(&slot);
            tokio::spawn(async move { slot.publish_offer(OFFER, None).await })
        };
        yield_now().await;
        assert!(slot.current_offer().is_some());

        publisher.abort();
        let _ = publisher.await;

        assert!(slot.current_offer().is_none());
        let err = slot.submit_answer(ANSWER).unwrap_err();
        assert!(matches!(err, Error::AnswerWithoutOffer));
    }

    #[tokio::test]
    async fn slot_supports_sequential_exchanges() {
        let slot = Arc::new(HandshakeSlot::new());

        for round in 0..3 {
            let offer = format!("v=0 offer{round}");
            let answer = format!("v=0 answer{round}");

            let publisher = {
                let slot = Arc::clone(&slot);
                let offer = offer.clone();
                tokio::spawn(async move { slot.publish_offer(&offer, None).await })
            };
            yield_now().await;

            assert_eq!(slot.wait_for_offer().await.unwrap(), offer);
            slot.submit_answer(&answer).unwrap();
            assert_eq!(publisher.await.unwrap().unwrap(), answer);

            // Fully idle between rounds.
            sleep(Duration::from_millis(1)).await;
            assert!(slot.current_offer().is_none());
        }
    }

    #[tokio::test]
    async fn empty_sdp_is_rejected_on_both_sides() {
        let slot = HandshakeSlot::new();
        assert!(matches!(
            slot.publish_offer("", None).await.unwrap_err(),
            Error::InvalidSdp
        ));
        assert!(matches!(
            slot.submit_answer("").unwrap_err(),
            Error::InvalidSdp
        ));
    }
}
