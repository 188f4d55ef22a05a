//! Storage paths
//!
//! A [`StoragePath`] is an ordered sequence of opaque name segments,
//! written `/a/b/c`. No percent-encoding or escaping is defined at this
//! layer; segment boundaries are exact.

use std::fmt;
use std::str::FromStr;

/// Ordered opaque segments addressing a stored resource
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoragePath {
    segments: Vec<String>,
}

impl StoragePath {
    /// The empty path
    pub fn root() -> Self {
        StoragePath::default()
    }

    /// Build a path from segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StoragePath {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse from `/`-separated text; empty segments are dropped, so
    /// `/cell/A1`, `cell/A1` and `/cell/A1/` all name the same path
    pub fn parse(text: &str) -> Self {
        StoragePath {
            segments: text
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// The segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The segment at an index, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root (empty) path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new path with one more trailing segment
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        StoragePath { segments }
    }

    /// Whether this path starts with every segment of `prefix`
    pub fn starts_with(&self, prefix: &StoragePath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for StoragePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StoragePath::parse(s))
    }
}
