//! Cache module for storing raw API responses to disk
//!
//! This module provides a cache manager that persists Directions API response
//! bodies to the filesystem with a TTL measured in days, plus the deterministic
//! key derivation that addresses a stored response. Expired or unreadable
//! entries are indistinguishable from misses, so a broken cache simply means
//! every request goes to the network.

mod key;
mod manager;

pub use key::cache_key;
pub use manager::CacheManager;
