use core::fmt;

use serde::{Deserialize, Serialize};

/// Time granularity of a request, also used as the upstream truncation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// A single calendar day.
    Day,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
}

impl Granularity {
    /// Derive the granularity from the number of `/` separators in a date token.
    ///
    /// Returns `None` for more than two separators.
    #[must_use]
    pub const fn from_separators(count: usize) -> Option<Self> {
        match count {
            0 => Some(Self::Year),
            1 => Some(Self::Month),
            2 => Some(Self::Day),
            _ => None,
        }
    }

    /// Lower-case truncation unit sent upstream as `time_trunc`.
    #[must_use]
    pub const fn as_trunc(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_trunc())
    }
}
