//! Call boundary for the password-reset request.
//!
//! The hosted reset endpoint is not wired up yet; [`request_reset`] stands
//! in for it with a fixed-latency acknowledgement so the page's submission
//! lifecycle (disable, await, notify, restore) runs against a real await
//! point. Swapping in the real transport only touches this module.

use std::fmt;

use gloo_timers::future::TimeoutFuture;

/// Latency of the stand-in transport.
pub const SIMULATED_LATENCY_MS: u32 = 2_000;

/// Failure surfaced by a reset request.
///
/// The stand-in transport never produces one, but callers already handle
/// it so the error path is in place when a fallible transport lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequestError {
    pub message: String,
}

impl fmt::Display for ResetRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reset request failed: {}", self.message)
    }
}

impl std::error::Error for ResetRequestError {}

/// Ask the backend to mail a reset link to `email`. Always resolves in
/// the current build; the `Err` variant is reserved for the real
/// integration.
pub async fn request_reset(email: &str) -> Result<(), ResetRequestError> {
    tracing::debug!(email, "dispatching password reset request");
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    tracing::info!(email, "password reset request acknowledged");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn err(message: &str) -> ResetRequestError {
        ResetRequestError {
            message: message.to_string(),
        }
    }

    #[test]
    fn error_display_includes_context() {
        assert_eq!(
            err("mail relay unavailable").to_string(),
            "reset request failed: mail relay unavailable"
        );
    }

    #[test]
    fn errors_compare_by_message() {
        assert_eq!(err("x"), err("x"));
        assert_ne!(err("x"), err("y"));
    }
}
