//! Read-time estimation for document bodies.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::DEFAULT_WORDS_PER_MINUTE;

/// Estimated reading time of a document body
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadTime {
    /// Minutes, rounded up (0 only for a body without words)
    pub minutes: u32,

    /// Whitespace-separated words counted in the body
    pub words: usize,
}

impl ReadTime {
    /// Estimate at the default reading speed
    pub fn estimate(body: &str) -> Self {
        Self::estimate_with(body, DEFAULT_WORDS_PER_MINUTE)
    }

    /// Estimate at `words_per_minute` (values below 1 are treated as 1)
    pub fn estimate_with(body: &str, words_per_minute: u32) -> Self {
        let words = body.split_whitespace().count();
        let wpm = words_per_minute.max(1) as usize;
        let minutes = u32::try_from(words.div_ceil(wpm)).unwrap_or(u32::MAX);

        Self { minutes, words }
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

impl Serialize for ReadTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
