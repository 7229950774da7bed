use chrono::Datelike;
use mix_core::{MixError, RequestWindow};

use crate::Mix;

impl Mix {
    /// Find the latest day for which the primary region has published data.
    ///
    /// Starts at today (per the configured clock) and steps back one day while
    /// the primary region reports "no data". The first day answered with data,
    /// or with any other upstream error, is returned as a `DD/MM/YYYY` day
    /// window; the aggregation that follows surfaces that error again.
    ///
    /// # Errors
    /// `DateOutOfRange` once the probe walks below the lower bound year, and
    /// `NoRecentData` after `probe_max_days` consecutive days without data.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixenergetico::router::probe::latest_available_date",
            skip(self),
            fields(max_days = self.cfg.probe_max_days),
        )
    )]
    pub async fn latest_available_date(&self) -> Result<RequestWindow, MixError> {
        let primary = self.primary_region()?;
        let lower_bound = self.cfg.lower_bound_year;
        let mut day = self.today();

        for _ in 0..self.cfg.probe_max_days {
            let window = RequestWindow::for_day(day, lower_bound)?;
            match self.fetch_region(primary, &window).await {
                Err(e) if e.is_no_data() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(date = %window.label(), "no data yet, stepping back");
                    day = day
                        .pred_opt()
                        .ok_or_else(|| MixError::date_out_of_range(day.year(), lower_bound))?;
                }
                _ => return Ok(window),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(days = self.cfg.probe_max_days, "probe exhausted without data");
        Err(MixError::NoRecentData {
            days: self.cfg.probe_max_days,
        })
    }
}
