use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::parse::DateToken;
use crate::{Granularity, MixError};

/// Timestamp format of the upstream `start_date`/`end_date` parameters.
pub const API_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format of day labels produced for default (latest available) dates.
pub const DAY_LABEL_FORMAT: &str = "%d/%m/%Y";

/// Immutable, inclusive query window for one request.
///
/// `end` is always the last minute (23:59) of the period that starts at
/// `reference_date`, computed with calendar month/year arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestWindow {
    raw_token: Option<String>,
    label: String,
    granularity: Granularity,
    reference_date: NaiveDate,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl RequestWindow {
    /// Resolve an explicit date token found in the request text.
    ///
    /// # Errors
    /// `InvalidDate` if the token is not a real calendar period, `DateOutOfRange`
    /// if its year is earlier than `lower_bound_year`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "mix::window",
            level = "debug",
            skip(token),
            fields(token = %token.text, granularity = %token.granularity),
            err,
        )
    )]
    pub fn resolve(token: &DateToken, lower_bound_year: i32) -> Result<Self, MixError> {
        let reference = parse_reference(&token.text, token.granularity)?;
        Self::build(
            Some(token.text.clone()),
            token.text.clone(),
            token.granularity,
            reference,
            lower_bound_year,
        )
    }

    /// A day window for a date chosen by the caller (no date in the request).
    ///
    /// The label uses the zero-padded `DD/MM/YYYY` form.
    ///
    /// # Errors
    /// `DateOutOfRange` if `date` is earlier than `lower_bound_year`.
    pub fn for_day(date: NaiveDate, lower_bound_year: i32) -> Result<Self, MixError> {
        let label = date.format(DAY_LABEL_FORMAT).to_string();
        Self::build(None, label, Granularity::Day, date, lower_bound_year)
    }

    fn build(
        raw_token: Option<String>,
        label: String,
        granularity: Granularity,
        reference_date: NaiveDate,
        lower_bound_year: i32,
    ) -> Result<Self, MixError> {
        if reference_date.year() < lower_bound_year {
            return Err(MixError::date_out_of_range(
                reference_date.year(),
                lower_bound_year,
            ));
        }
        let last_day = period_end(reference_date, granularity)
            .ok_or_else(|| MixError::invalid_date(label.clone()))?;
        let last_minute =
            NaiveTime::from_hms_opt(23, 59, 0).ok_or_else(|| MixError::invalid_date(&label))?;

        Ok(Self {
            raw_token,
            label,
            granularity,
            reference_date,
            start: reference_date.and_time(NaiveTime::MIN),
            end: last_day.and_time(last_minute),
        })
    }

    /// The literal date text found in the request, `None` if defaulted.
    #[must_use]
    pub fn raw_token(&self) -> Option<&str> {
        self.raw_token.as_deref()
    }

    /// Date text used in replies and "no data" messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Granularity of the window.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// First day of the period.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Inclusive start, at 00:00.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Inclusive end, at 23:59 of the last day of the period.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// `start` rendered as the upstream `start_date` parameter.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(API_DATE_FORMAT).to_string()
    }

    /// `end` rendered as the upstream `end_date` parameter.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(API_DATE_FORMAT).to_string()
    }
}

/// Parse a date token using the format implied by its granularity
/// (`YYYY`, `M/YYYY`, or `D/M/YYYY`), normalized to the first day of the period.
///
/// # Errors
/// `InvalidDate` if a component is not numeric or the date does not exist.
pub fn parse_reference(text: &str, granularity: Granularity) -> Result<NaiveDate, MixError> {
    let invalid = || MixError::invalid_date(text);
    let parts: Vec<&str> = text.split('/').collect();
    let number = |s: &str| s.parse::<u32>().map_err(|_| invalid());

    let (day, month, year) = match (granularity, parts.as_slice()) {
        (Granularity::Year, [y]) => (1, 1, number(y)?),
        (Granularity::Month, [m, y]) => (1, number(m)?, number(y)?),
        (Granularity::Day, [d, m, y]) => (number(d)?, number(m)?, number(y)?),
        _ => return Err(invalid()),
    };
    let year = i32::try_from(year).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Last calendar day of the period starting at `start`.
fn period_end(start: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
    match granularity {
        Granularity::Day => Some(start),
        Granularity::Month => start
            .with_day(1)?
            .checked_add_months(Months::new(1))?
            .pred_opt(),
        Granularity::Year => NaiveDate::from_ymd_opt(start.year(), 12, 31),
    }
}
