//! Address list loading and validation
//!
//! Addresses come either from positional command-line arguments or from a
//! newline-delimited input file. The Directions API accepts at most 25
//! waypoints plus the origin, hence the 26-address ceiling.

use std::fmt::Write as _;
use std::path::Path;

use thiserror::Error;

/// Minimum number of addresses required to build a route
pub const MIN_ADDRESSES: usize = 2;

/// Maximum number of addresses (origin + 25 waypoints)
pub const MAX_ADDRESSES: usize = 26;

/// Errors that can occur while loading or validating the address list
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input file does not exist or could not be read
    #[error("Could not read input file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fewer than the minimum number of addresses were supplied
    #[error("At least {MIN_ADDRESSES} addresses are required (found {0})")]
    TooFew(usize),

    /// More than the maximum number of addresses were supplied
    #[error(
        "No more than {MAX_ADDRESSES} addresses are supported (found {0}). \
         The Directions API allows a maximum of 25 waypoints plus 1 origin"
    )]
    TooMany(usize),

    /// Duplicate addresses after case/whitespace normalization
    #[error("Duplicate addresses found:\n{0}")]
    Duplicates(String),
}

/// Loads the address list, preferring CLI arguments over the input file.
///
/// Two or more positional arguments are used as-is; with no arguments the
/// file at `path` is read, one address per line, blank lines skipped. The
/// resulting list is validated for count and uniqueness with order
/// preserved.
pub fn load_addresses(args: &[String], path: &Path) -> Result<Vec<String>, ValidationError> {
    let addresses = if args.is_empty() {
        read_address_file(path)?
    } else {
        args.to_vec()
    };
    validate(&addresses)?;
    Ok(addresses)
}

/// Reads one address per line from a text file, skipping blank lines
fn read_address_file(path: &Path) -> Result<Vec<String>, ValidationError> {
    let content = std::fs::read_to_string(path).map_err(|source| ValidationError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Checks address count bounds and rejects normalized duplicates
fn validate(addresses: &[String]) -> Result<(), ValidationError> {
    if addresses.len() < MIN_ADDRESSES {
        return Err(ValidationError::TooFew(addresses.len()));
    }
    if addresses.len() > MAX_ADDRESSES {
        return Err(ValidationError::TooMany(addresses.len()));
    }

    // Map normalized address -> 1-based position of its first occurrence
    let mut seen: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    // Normalized addresses whose first occurrence is already in the message
    let mut reported: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut duplicates = String::new();

    for (i, addr) in addresses.iter().enumerate() {
        let normalized = normalize(addr);
        match seen.get(&normalized) {
            Some(&first) => {
                if reported.insert(normalized) {
                    let _ = writeln!(duplicates, "  - Entry {}: {}", first, addresses[first - 1]);
                }
                let _ = writeln!(duplicates, "  - Entry {}: {}", i + 1, addr);
            }
            None => {
                seen.insert(normalized, i + 1);
            }
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Duplicates(
            duplicates.trim_end().to_string(),
        ))
    }
}

/// Lowercases and collapses internal whitespace for duplicate detection
fn normalize(address: &str) -> String {
    address.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}
