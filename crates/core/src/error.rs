//! Error types for the rendezvous core

use thiserror::Error;

/// Result type alias for rendezvous operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while brokering an offer/answer exchange.
///
/// None of these terminate the service process: every variant is reported
/// to the immediate caller and leaves the slot in a well-defined state.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport failure between a peer and the broker
    #[error("Transport error: {0}")]
    Transport(String),

    /// Offer or answer SDP was empty
    #[error("Session description must not be empty")]
    InvalidSdp,

    /// An answer arrived while no offer was pending
    #[error("No offer is pending; an answer can only follow an offer")]
    AnswerWithoutOffer,

    /// A second answer arrived for an offer whose answer was already delivered
    #[error("An answer was already delivered for the current offer")]
    DuplicateAnswer,

    /// A second offer arrived while a previous exchange was still live
    #[error("An exchange is already in progress; retry after it completes")]
    ExchangeAlreadyInProgress,

    /// The offering peer went away before the answer could be handed over
    #[error("The offering peer abandoned the exchange before the answer arrived")]
    ExchangeAbandoned,

    /// A blocked call exceeded its deadline; the slot was released to idle
    #[error("Timed out waiting for the exchange to complete")]
    Timeout,

    /// The caller abandoned the call; the slot was released to idle
    #[error("Call was cancelled before the exchange completed")]
    Cancelled,
}

impl Error {
    /// Whether the error is a violation of the exchange state machine
    /// (as opposed to a transport or deadline failure).
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Error::InvalidSdp
                | Error::AnswerWithoutOffer
                | Error::DuplicateAnswer
                | Error::ExchangeAlreadyInProgress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_violations_are_classified() {
        assert!(Error::AnswerWithoutOffer.is_protocol_violation());
        assert!(Error::DuplicateAnswer.is_protocol_violation());
        assert!(Error::ExchangeAlreadyInProgress.is_protocol_violation());
        assert!(Error::InvalidSdp.is_protocol_violation());

        assert!(!Error::Transport("connection reset".into()).is_protocol_violation());
        assert!(!Error::Timeout.is_protocol_violation());
        assert!(!Error::Cancelled.is_protocol_violation());
        assert!(!Error::ExchangeAbandoned.is_protocol_violation());
    }
}
