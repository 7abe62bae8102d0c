//! Dataset fingerprint
//!
//! A SHA256 over the raw dataset bytes, logged at load so two sessions can
//! tell whether they browsed the same catalog.

use sha2::{Digest, Sha256};

/// Compute the SHA256 hex digest of raw dataset bytes
pub fn compute_dataset_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
