//! Dotted-numeric version parsing and ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A version parsed from a dot-separated string of non-negative integers.
///
/// Ordering is component-by-component. Components missing on the shorter
/// side compare as zero, so `"1.2" == "1.2.0"` and `"1.2" < "1.2.1"`.
/// Pre-release and build-metadata suffixes are not modeled; a component
/// that is not a non-negative integer fails to parse.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse a dot-separated version string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::malformed_version(input));
        }

        let components = trimmed
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| Error::malformed_version(input))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { components })
    }

    /// Parsed components, most significant first
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", rendered)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
