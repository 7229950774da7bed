use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::Granularity;

/// A date expression found in free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    /// The matched substring, verbatim.
    pub text: String,
    /// Granularity derived from the number of `/` separators.
    pub granularity: Granularity,
}

struct DatePatterns {
    // 8/6/2020, 08/06/2020
    day: Regex,
    // 6/2020, 06/2020
    month: Regex,
    // 2020
    year: Regex,
}

impl DatePatterns {
    fn new() -> Self {
        Self {
            day: Regex::new(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}").expect("static day pattern"),
            month: Regex::new(r"[0-9]{1,2}/[0-9]{4}").expect("static month pattern"),
            year: Regex::new(r"[0-9]{4}").expect("static year pattern"),
        }
    }

    fn in_priority_order(&self) -> [&Regex; 3] {
        [&self.day, &self.month, &self.year]
    }
}

fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(DatePatterns::new)
}

/// Normalize backslash separators (`8\6\2020`) to forward slashes.
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.contains('\\') {
        Cow::Owned(text.replace('\\', "/"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Find the date expression in `text`.
///
/// Patterns are tried in fixed priority: `D/M/YYYY`, then `M/YYYY`, then
/// `YYYY`. The first pattern with a match anywhere in the text wins, so a full
/// day date is always preferred over month or year substrings elsewhere.
/// Returns `None` when no pattern matches; callers then fall back to the latest
/// available date.
#[must_use]
pub fn find_date(text: &str) -> Option<DateToken> {
    let text = normalize(text);
    let found = patterns()
        .in_priority_order()
        .into_iter()
        .find_map(|re| re.find(&text))?;

    let matched = found.as_str();
    let granularity = Granularity::from_separators(matched.matches('/').count())?;
    Some(DateToken {
        text: matched.to_string(),
        granularity,
    })
}
