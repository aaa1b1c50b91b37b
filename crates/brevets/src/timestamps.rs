//! ISO-8601 parsing and rendering that keeps the caller's UTC offset.

use serde::Serializer;
use time::{
    OffsetDateTime,
    format_description::{
        BorrowedFormatItem,
        well_known::{Iso8601, Rfc3339},
    },
    macros::format_description,
};

use crate::errors::BrevetError;

const WHOLE_SECONDS: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

const MICROSECONDS: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"
);

const NANOSECONDS: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9][offset_hour sign:mandatory]:[offset_minute]"
);

/// Parses an ISO-8601 timestamp that carries a UTC offset.
pub fn parse(input: &str) -> Result<OffsetDateTime, BrevetError> {
    OffsetDateTime::parse(input, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(input, &Iso8601::DEFAULT))
        .map_err(|e| BrevetError::MalformedTimestamp {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Renders a timestamp in its own offset, e.g. `2017-01-01T05:53:00-08:00`.
///
/// UTC is written as `+00:00`. A non-zero sub-second part is written as
/// microseconds, or as nanoseconds when it is finer than a microsecond.
pub fn render(timestamp: OffsetDateTime) -> Result<String, BrevetError> {
    let nanos = timestamp.nanosecond();
    let format = if nanos == 0 {
        WHOLE_SECONDS
    } else if nanos % 1_000 == 0 {
        MICROSECONDS
    } else {
        NANOSECONDS
    };
    Ok(timestamp.format(format)?)
}

/// `serialize_with` helper rendering through [`render`].
pub fn serialize<S: Serializer>(timestamp: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    let rendered = render(*timestamp).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Duration, UtcOffset};

    #[test]
    fn test_round_trip_keeps_offset() {
        let start = parse("2017-01-01T00:00:00-08:00").unwrap();
        assert_eq!(start.offset(), UtcOffset::from_hms(-8, 0, 0).unwrap());

        let later = start + Duration::hours(5) + Duration::minutes(53);
        assert_eq!(render(later).unwrap(), "2017-01-01T05:53:00-08:00");
    }

    #[test]
    fn test_utc_is_not_rendered_as_z() {
        let start = parse("2017-01-01T00:00:00Z").unwrap();
        assert_eq!(render(start).unwrap(), "2017-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_subsecond_rendering() {
        let start = parse("2017-01-01T00:00:00.250-08:00").unwrap();
        assert_eq!(render(start).unwrap(), "2017-01-01T00:00:00.250000-08:00");

        let start = parse("2017-01-01T00:00:00.0000005-08:00").unwrap();
        assert_eq!(render(start).unwrap(), "2017-01-01T00:00:00.000000500-08:00");
    }

    #[test]
    fn test_malformed() {
        let err = parse("January 1st").unwrap_err();
        assert!(matches!(err, BrevetError::MalformedTimestamp { ref input, .. } if input == "January 1st"));
        assert!(parse("2017-01-01T00:00:00").is_err());
    }
}
