//! Cache manager for persisting Directions API responses to disk
//!
//! Stores one JSON file per cache key, each wrapping the raw response body
//! with stored/expiry timestamps. Entries past their expiry read as absent.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wrapper struct for a cached response body stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Raw response body as received from the API
    body: String,
    /// When the response was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: DateTime<Utc>,
}

/// Manages reading and writing cached response bodies on disk
///
/// Responses are stored as JSON files in an XDG-compliant cache directory
/// (`~/.cache/optiroute/` on Linux). An entry whose expiry has passed is
/// treated exactly like a missing entry; `put` overwrites unconditionally.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory), in which case callers run uncached.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "optiroute")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Retrieves the cached body for `key`, or `None` on a miss.
    ///
    /// A miss is any of: no file, unreadable file, unparseable entry, or an
    /// entry whose `expires_at` has passed. Callers never need to distinguish
    /// these cases.
    pub fn get(&self, key: &str) -> Option<String> {
        let content = fs::read_to_string(self.cache_path(key)).ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;

        if Utc::now() >= entry.expires_at {
            return None;
        }
        Some(entry.body)
    }

    /// Stores `body` under `key` with an expiry of `ttl_days` from now.
    ///
    /// Any existing entry for the key is overwritten. Returns an error if the
    /// TTL overflows the expiry timestamp, the directory cannot be created,
    /// or the file cannot be written; callers treat all of these as a no-op
    /// rather than a fatal failure.
    pub fn put(&self, key: &str, body: &str, ttl_days: i64) -> std::io::Result<()> {
        let now = Utc::now();
        let expires_at = Duration::try_days(ttl_days)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("cache TTL of {ttl_days} days overflows the expiry timestamp"),
                )
            })?;

        fs::create_dir_all(&self.cache_dir)?;

        let entry = CacheEntry {
            body: body.to_string(),
            cached_at: now,
            expires_at,
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_cache() -> (CacheManager, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = CacheManager::with_dir(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    #[test]
    fn test_put_creates_file_in_cache_directory() {
        let (cache, temp_dir) = create_test_cache();

        cache
            .put("test_key", r#"{"status":"OK"}"#, 30)
            .expect("Put should succeed");

        let expected_path = temp_dir.path().join("test_key.json");
        assert!(expected_path.exists(), "Cache file should exist");

        let content = fs::read_to_string(&expected_path).expect("Should read file");
        assert!(content.contains("cached_at"));
        assert!(content.contains("expires_at"));
    }

    #[test]
    fn test_get_returns_none_for_missing_key() {
        let (cache, _temp_dir) = create_test_cache();
        assert!(cache.get("nonexistent_key").is_none());
    }

    #[test]
    fn test_put_then_get_round_trips_the_body() {
        let (cache, _temp_dir) = create_test_cache();
        let body = r#"{"status":"OK","routes":[{"legs":[]}]}"#;

        cache.put("round_trip", body, 30).expect("Put should succeed");

        assert_eq!(cache.get("round_trip").as_deref(), Some(body));
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let (cache, _temp_dir) = create_test_cache();

        // A zero-day TTL expires immediately (expires_at == now)
        cache.put("expired_key", "stale body", 0).expect("Put should succeed");

        assert!(
            cache.get("expired_key").is_none(),
            "Expired entry must be indistinguishable from a miss"
        );
    }

    #[test]
    fn test_entry_within_ttl_window_is_present() {
        let (cache, temp_dir) = create_test_cache();

        // Hand-write an entry stored 29 days ago with one day left on the clock
        let now = Utc::now();
        let entry = CacheEntry {
            body: "fresh enough".to_string(),
            cached_at: now - Duration::days(29),
            expires_at: now + Duration::days(1),
        };
        let json = serde_json::to_string(&entry).unwrap();
        fs::write(temp_dir.path().join("aged_key.json"), json).unwrap();

        assert_eq!(cache.get("aged_key").as_deref(), Some("fresh enough"));
    }

    #[test]
    fn test_entry_past_thirty_days_is_absent() {
        let (cache, temp_dir) = create_test_cache();

        let now = Utc::now();
        let entry = CacheEntry {
            body: "too old".to_string(),
            cached_at: now - Duration::days(31),
            expires_at: now - Duration::days(1),
        };
        let json = serde_json::to_string(&entry).unwrap();
        fs::write(temp_dir.path().join("old_key.json"), json).unwrap();

        assert!(cache.get("old_key").is_none());
    }

    #[test]
    fn test_corrupt_entry_reads_as_absent() {
        let (cache, temp_dir) = create_test_cache();
        fs::write(temp_dir.path().join("corrupt_key.json"), "not json at all").unwrap();

        assert!(cache.get("corrupt_key").is_none());
    }

    #[test]
    fn test_put_with_overflowing_ttl_fails_without_panicking() {
        let (cache, temp_dir) = create_test_cache();

        let err = cache
            .put("huge_ttl_key", "body", 100_000_000)
            .expect_err("Overflowing TTL should be an error, not a panic");

        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(
            !temp_dir.path().join("huge_ttl_key.json").exists(),
            "No entry should be written for an overflowing TTL"
        );
        assert!(cache.get("huge_ttl_key").is_none());
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let (cache, _temp_dir) = create_test_cache();

        cache.put("overwrite_key", "first", 30).expect("First put should succeed");
        cache.put("overwrite_key", "second", 30).expect("Second put should succeed");

        assert_eq!(cache.get("overwrite_key").as_deref(), Some("second"));
    }

    #[test]
    fn test_put_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested_path = temp_dir.path().join("nested").join("cache").join("dir");
        let cache = CacheManager::with_dir(nested_path.clone());

        cache.put("nested_key", "body", 30).expect("Put should succeed");

        assert!(nested_path.join("nested_key.json").exists(), "Cache file should exist");
    }

    #[test]
    fn test_new_creates_xdg_compliant_path() {
        if let Some(cache) = CacheManager::new() {
            let path_str = cache.cache_dir.to_string_lossy();
            assert!(
                path_str.contains("optiroute"),
                "Cache path should contain project name"
            );
        }
        // Test passes if new() returns None (e.g., no home directory in CI)
    }
}
