//! Deterministic signer addresses for driving the ledger.
//!
//! Signer `i` is the last 20 bytes of `SHA-256("signer:" || i)`. Signer 0 deploys
//! the ledger and owns it unless the configuration names another owner.

use ledger::Address;
use sha2::{Digest, Sha256};

/// Derives the address of signer `index`.
pub fn signer(index: u32) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(b"signer:");
    hasher.update(index.to_be_bytes());
    let digest = hasher.finalize();

    Address::from_slice(&digest[12..])
}

/// Derives the first `count` signers.
pub fn signers(count: u32) -> Vec<Address> {
    (0..count).map(signer).collect()
}
