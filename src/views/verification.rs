//! State model for the public verification screen.

use crate::{
    apis::businesses::{BusinessRecord, BusinessesApi},
    Error,
};

/// Screen state of the verification view.
///
/// "Record not found" and transport failures are deliberately conflated into
/// the single [`Invalid`](VerificationState::Invalid) state: the payer-facing
/// message is uniform regardless of cause. The underlying cause is logged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum VerificationState {
    /// A fetch is in flight.
    Loading,
    /// The code resolved to a business record.
    Verified(BusinessRecord),
    /// The link is broken, the merchant no longer exists, or the service
    /// could not be reached.
    Invalid,
}

/// Token identifying one fetch started on a [`VerificationView`].
///
/// Outcomes applied with a token older than the latest fetch are discarded,
/// so an earlier slow response can never overwrite a newer one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FetchToken {
    generation: u64,
}

/// The verification view: owns the screen state and a generation counter
/// guarding against out-of-order responses.
#[derive(Debug)]
pub struct VerificationView {
    state: VerificationState,
    generation: u64,
}

impl VerificationView {
    pub fn new() -> Self {
        Self {
            state: VerificationState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Starts a new fetch: resets the view to `Loading` and invalidates any
    /// token handed out earlier.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.state = VerificationState::Loading;
        FetchToken {
            generation: self.generation,
        }
    }

    /// Applies the outcome of a fetch, unless a newer fetch has started since
    /// the token was issued.
    pub fn apply(&mut self, token: FetchToken, outcome: Result<Option<BusinessRecord>, Error>) {
        if token.generation != self.generation {
            tracing::debug!("Discarding stale verification response");
            return;
        }

        self.state = match outcome {
            Ok(Some(record)) => VerificationState::Verified(record),
            Ok(None) => {
                tracing::warn!("Verification code not known to the service");
                VerificationState::Invalid
            }
            Err(e) => {
                tracing::error!("Business resolution failed: {}", e);
                VerificationState::Invalid
            }
        };
    }

    /// Resolves a verification code with a single fetch and applies the
    /// outcome. No caching, no retry.
    pub async fn load(&mut self, api: &BusinessesApi, code: &str) -> &VerificationState {
        let token = self.begin_fetch();
        let outcome = api.get_by_code(code).await;
        self.apply(token, outcome);
        &self.state
    }
}

impl Default for VerificationView {
    fn default() -> Self {
        Self::new()
    }
}
