use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the MixEnergetico workspace.
///
/// The user-facing variants render, through `Display`, exactly the text the bot
/// replies with. Transport-level variants are kept apart so callers can log
/// them distinctly from errors reported by the upstream API.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MixError {
    /// The requested period predates the first year with upstream data.
    #[error("No existen datos antes del {lower_bound}")]
    DateOutOfRange {
        /// Year that was requested.
        year: i32,
        /// First year with data.
        lower_bound: i32,
    },

    /// A date pattern matched but does not name a real calendar period.
    #[error("Fecha no válida: {text}")]
    InvalidDate {
        /// The matched date text.
        text: String,
    },

    /// Upstream reported that no data exists for the exact requested window.
    #[error("No existen datos para {date}")]
    NoDataForWindow {
        /// Date text as requested by the user (or produced by the probe).
        date: String,
        /// Upstream error code carried by the response.
        code: i64,
    },

    /// Any other error reported by the upstream API; `detail` is shown verbatim.
    #[error("{detail}")]
    Upstream {
        /// Upstream error code.
        code: i64,
        /// Upstream-provided detail message.
        detail: String,
    },

    /// Network, HTTP or body decoding failure while talking to a connector.
    #[error("{connector} failed: {msg}")]
    Transport {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("{connector} timed out")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
    },

    /// The latest-available-date probe stepped back past its cap.
    #[error("No existen datos en los últimos {days} días")]
    NoRecentData {
        /// Number of days inspected.
        days: u32,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl MixError {
    /// Helper: build a `DateOutOfRange` error.
    #[must_use]
    pub const fn date_out_of_range(year: i32, lower_bound: i32) -> Self {
        Self::DateOutOfRange { year, lower_bound }
    }

    /// Helper: build an `InvalidDate` error for the matched text.
    pub fn invalid_date(text: impl Into<String>) -> Self {
        Self::InvalidDate { text: text.into() }
    }

    /// Helper: build a `NoDataForWindow` error.
    pub fn no_data(date: impl Into<String>, code: i64) -> Self {
        Self::NoDataForWindow {
            date: date.into(),
            code,
        }
    }

    /// Helper: build an `Upstream` error.
    pub fn upstream(code: i64, detail: impl Into<String>) -> Self {
        Self::Upstream {
            code,
            detail: detail.into(),
        }
    }

    /// Helper: build a `Transport` error with the connector name and message.
    pub fn transport(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
        }
    }

    /// Numeric error code as reported to callers.
    ///
    /// `-1` marks the local lower-bound check; upstream-reported errors carry the
    /// upstream code. Errors that never reached a classified response have none.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::DateOutOfRange { .. } => Some(-1),
            Self::NoDataForWindow { code, .. } | Self::Upstream { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for the "no data for this window" condition the probe steps over.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoDataForWindow { .. })
    }

    /// True for network, timeout and decoding failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ProviderTimeout { .. })
    }
}
