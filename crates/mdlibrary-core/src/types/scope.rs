//! Rate-limit scopes.
//!
//! Every endpoint belongs to exactly one scope, and each scope keeps its own
//! request counts and threshold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named rate-limit bucket corresponding to one operation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateScope {
    /// Listing and filtering revisions.
    List,
    /// Uploading a new revision.
    Create,
    /// Fetching a single revision with rendered HTML.
    Detail,
    /// Patching contents or the deleted flag.
    Update,
    /// Soft-deleting a revision.
    Delete,
    /// Aggregate counts.
    Stats,
    /// Physically removing every revision.
    Clear,
    /// Anything not covered by a dedicated scope.
    Anon,
}

impl RateScope {
    /// All scopes, in declaration order.
    pub const ALL: [RateScope; 8] = [
        Self::List,
        Self::Create,
        Self::Detail,
        Self::Update,
        Self::Delete,
        Self::Stats,
        Self::Clear,
        Self::Anon,
    ];

    /// The configuration key for this scope.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Detail => "detail",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Stats => "stats",
            Self::Clear => "clear",
            Self::Anon => "anon",
        }
    }
}

impl fmt::Display for RateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown rate-limit scope: {s}"))
    }
}
