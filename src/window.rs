//! Local calendar-day windows
//!
//! A [`DayWindow`] is one calendar day in a fixed UTC offset, expressed as the
//! half-open UTC interval `[local midnight, local midnight + 24h)`. Fixed
//! offsets have no daylight-saving transitions, so every window is exactly
//! 86400 seconds long.

use crate::error::{DaylogError, Result};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    offset: FixedOffset,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// The local day before the one containing `now`
    pub fn previous_day(now: DateTime<Utc>, offset: FixedOffset) -> Result<Self> {
        let today = now.with_timezone(&offset).date_naive();
        let yesterday = today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| DaylogError::Internal(format!("No day before {}", today)))?;
        Self::for_date(yesterday, offset)
    }

    /// The window covering `date` in `offset`
    pub fn for_date(date: NaiveDate, offset: FixedOffset) -> Result<Self> {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| offset.from_local_datetime(&naive).single())
            .ok_or_else(|| DaylogError::Internal(format!("No local midnight for {}", date)))?;

        let start = midnight.with_timezone(&Utc);
        let end = start + TimeDelta::days(1);

        Ok(Self {
            date,
            offset,
            start,
            end,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// `YYYY-MM-DD` in local time
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Lower history bound as a Slack timestamp
    pub fn oldest_ts(&self) -> String {
        format!("{}.000000", self.start.timestamp())
    }

    /// Upper history bound as a Slack timestamp
    pub fn latest_ts(&self) -> String {
        format!("{}.000000", self.end.timestamp())
    }
}
