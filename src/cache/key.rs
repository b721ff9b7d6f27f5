//! Deterministic cache key derivation for route requests

use sha2::{Digest, Sha256};

/// Derives the cache key for an ordered address list and optimize flag.
///
/// The key is the SHA-256 of a canonical rendering of the request: each
/// address on its own line (order-sensitive) followed by the optimize flag.
/// Any change to address text, ordering, or the flag produces a different
/// key, so an optimized and an unoptimized request over the same addresses
/// never share a cache entry.
pub fn cache_key(addresses: &[String], optimize: bool) -> String {
    let mut hasher = Sha256::new();
    for address in addresses {
        hasher.update(address.as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(if optimize { b"optimize:true" as &[u8] } else { b"optimize:false" });
    format!("{:x}", hasher.finalize())
}
