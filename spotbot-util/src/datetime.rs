use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Duration,
};

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

pub const NAIVE_DATETIME_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Discord renders these in the reader's own timezone and language.
///
/// Note: Doesn't work in embed footers
#[derive(Copy, Clone, Debug)]
pub struct DiscordTimestamp {
    secs: i64,
    style: TimestampStyle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimestampStyle {
    /// e.g. `20/04/2021`
    ShortDate,
    /// e.g. `2 months ago`
    Relative,
}

impl DiscordTimestamp {
    pub fn new(datetime: OffsetDateTime, style: TimestampStyle) -> Self {
        Self {
            secs: datetime.unix_timestamp(),
            style,
        }
    }

    pub fn relative(datetime: OffsetDateTime) -> Self {
        Self::new(datetime, TimestampStyle::Relative)
    }

    pub fn short_date(datetime: OffsetDateTime) -> Self {
        Self::new(datetime, TimestampStyle::ShortDate)
    }
}

impl Display for DiscordTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        // https://discord.com/developers/docs/reference#message-formatting-timestamp-styles
        let style = match self.style {
            TimestampStyle::ShortDate => 'd',
            TimestampStyle::Relative => 'R',
        };

        write!(f, "<t:{}:{style}>", self.secs)
    }
}

/// Rough human readable duration, e.g. `3 hours` or `a few seconds`.
pub struct HumanDuration(pub Duration);

impl Display for HumanDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        const MINUTE: u64 = 60;
        const HOUR: u64 = 60 * MINUTE;
        const DAY: u64 = 24 * HOUR;
        const MONTH: u64 = 30 * DAY;
        const YEAR: u64 = 365 * DAY;

        let secs = self.0.as_secs();

        let (amount, unit) = if secs < 45 {
            return f.write_str("a few seconds");
        } else if secs < 90 {
            return f.write_str("a minute");
        } else if secs < HOUR {
            ((secs + MINUTE / 2) / MINUTE, "minute")
        } else if secs < DAY {
            ((secs + HOUR / 2) / HOUR, "hour")
        } else if secs < MONTH {
            ((secs + DAY / 2) / DAY, "day")
        } else if secs < YEAR {
            ((secs + MONTH / 2) / MONTH, "month")
        } else {
            ((secs + YEAR / 2) / YEAR, "year")
        };

        write!(f, "{amount} {unit}{}", if amount == 1 { "" } else { "s" })
    }
}

/// Parse RDW's `YYYYMMDD` date strings.
pub fn parse_compact_date(date: &str) -> Option<OffsetDateTime> {
    let format = format_description!("[year][month][day]");

    time::Date::parse(date, format)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn timestamp_styles() {
        let datetime = datetime!(2021-04-20 16:20 UTC);

        assert_eq!(
            DiscordTimestamp::relative(datetime).to_string(),
            "<t:1618935600:R>"
        );
        assert_eq!(
            DiscordTimestamp::short_date(datetime).to_string(),
            "<t:1618935600:d>"
        );
    }

    #[test]
    fn human_durations() {
        let fmt = |secs| HumanDuration(Duration::from_secs(secs)).to_string();

        assert_eq!(fmt(10), "a few seconds");
        assert_eq!(fmt(60), "a minute");
        assert_eq!(fmt(5 * 60), "5 minutes");
        assert_eq!(fmt(3600), "1 hour");
        assert_eq!(fmt(3 * 86_400), "3 days");
        assert_eq!(fmt(400 * 86_400), "1 year");
    }

    #[test]
    fn compact_dates() {
        let date = parse_compact_date("20190315").unwrap();
        assert_eq!(date, datetime!(2019-03-15 0:00 UTC));
        assert!(parse_compact_date("2019-03-15").is_none());
    }
}
