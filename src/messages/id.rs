//! Unique-ID allocation for new messages.
//!
//! Ids are 8 characters drawn uniformly from the 62-symbol alphanumeric
//! alphabet. Candidate generation is pure; the allocator drives a bounded
//! retry loop against the store's existence check. At this length a
//! collision is astronomically unlikely, so hitting the retry cap almost
//! certainly means something other than bad luck; the store's primary key
//! remains the real uniqueness guarantee either way.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::ApiError;

use super::store::MessageStore;

/// Length of every message id.
pub const ID_LEN: usize = 8;

/// Retry cap for the allocator. Bounded so a misbehaving store cannot turn
/// allocation into an infinite loop.
const MAX_ATTEMPTS: usize = 20;

/// Generate one candidate id.
pub fn generate_candidate() -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

/// Allocate an id that is not currently in the store.
///
/// Retries up to [`MAX_ATTEMPTS`] times, checking each candidate against the
/// store. A failed existence check aborts allocation immediately; exhausting
/// the cap yields [`ApiError::IdsExhausted`].
pub async fn allocate(store: &MessageStore) -> Result<String, ApiError> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = generate_candidate();
        if !store.id_exists(&candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(id = %candidate, "generated id already taken, retrying");
    }

    Err(ApiError::IdsExhausted)
}
