//! The snippet record and the outcomes of storing one

use serde::{Deserialize, Serialize};

/// A named fragment of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub keyword: String,
    pub message: String,
}

impl Snippet {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
        }
    }
}

/// What a put actually did to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// A new row was committed
    Inserted,
    /// The keyword was already taken; the existing row was left untouched
    Conflict,
}

/// Result of a put: the pair that was handed in, plus what happened to it.
///
/// The pair is returned unchanged on conflict too, so callers that only
/// look at `snippet` can't tell the two cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    pub snippet: Snippet,
    pub outcome: PutOutcome,
}

impl PutReceipt {
    pub fn inserted(&self) -> bool {
        self.outcome == PutOutcome::Inserted
    }

    /// Split into the `(name, snippet)` pair
    pub fn into_pair(self) -> (String, String) {
        (self.snippet.keyword, self.snippet.message)
    }
}
