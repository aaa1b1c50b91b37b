//! Conversion of fractional-hour offsets to published hour and minute values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::errors::BrevetError;

/// Tie-breaking rule for offsets that land exactly on a half minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinuteRounding {
    /// Ties go to the even minute.
    #[default]
    HalfEven,
    /// Ties go to the next minute.
    HalfUp,
}

impl MinuteRounding {
    pub fn round(self, minutes: f64) -> f64 {
        match self {
            MinuteRounding::HalfEven => minutes.round_ties_even(),
            // Offsets are never negative, so away-from-zero is half-up.
            MinuteRounding::HalfUp => minutes.round(),
        }
    }
}

impl FromStr for MinuteRounding {
    type Err = BrevetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" => Ok(MinuteRounding::HalfEven),
            "half-up" => Ok(MinuteRounding::HalfUp),
            other => Err(BrevetError::Config(format!(
                "unknown minute rounding {other:?} (expected \"half-even\" or \"half-up\")"
            ))),
        }
    }
}

/// Whole hours plus rounded minutes.
///
/// `minutes` may come out as 60 when the fractional part rounds up;
/// [`RoundedOffset::to_duration`] carries it into the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedOffset {
    pub hours: u32,
    pub minutes: u32,
}

impl RoundedOffset {
    pub fn from_hours(offset: f64, rounding: MinuteRounding) -> Self {
        let hours = offset.floor();
        let minutes = rounding.round((offset - hours) * 60.0);
        Self {
            hours: hours as u32,
            minutes: minutes as u32,
        }
    }

    /// Carries a 60-minute value into the hour.
    pub fn normalized(self) -> Self {
        Self {
            hours: self.hours + self.minutes / 60,
            minutes: self.minutes % 60,
        }
    }

    pub fn to_duration(self) -> Duration {
        let Self { hours, minutes } = self.normalized();
        Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_hours() {
        let offset = RoundedOffset::from_hours(8.0, MinuteRounding::HalfEven);
        assert_eq!(offset, RoundedOffset { hours: 8, minutes: 0 });
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        // 200 km at 34 km/h is 5h 52.94m
        let offset = RoundedOffset::from_hours(200.0 / 34.0, MinuteRounding::HalfEven);
        assert_eq!(offset, RoundedOffset { hours: 5, minutes: 53 });

        // 40 km at 34 km/h is 1h 10.59m
        let offset = RoundedOffset::from_hours(40.0 / 34.0, MinuteRounding::HalfUp);
        assert_eq!(offset, RoundedOffset { hours: 1, minutes: 11 });
    }

    #[test]
    fn test_half_minute_ties() {
        assert_eq!(MinuteRounding::HalfEven.round(2.5), 2.0);
        assert_eq!(MinuteRounding::HalfUp.round(2.5), 3.0);
        assert_eq!(MinuteRounding::HalfEven.round(0.5), 0.0);
        assert_eq!(MinuteRounding::HalfUp.round(0.5), 1.0);
        assert_eq!(MinuteRounding::HalfEven.round(59.5), 60.0);
    }

    #[test]
    fn test_sixty_minutes_carry() {
        let offset = RoundedOffset::from_hours(19.999999, MinuteRounding::HalfEven);
        assert_eq!(offset, RoundedOffset { hours: 19, minutes: 60 });
        assert_eq!(offset.normalized(), RoundedOffset { hours: 20, minutes: 0 });
        assert_eq!(offset.to_duration(), Duration::hours(20));
    }

    #[test]
    fn test_parse_rounding() {
        assert_eq!(
            "half-up".parse::<MinuteRounding>().unwrap(),
            MinuteRounding::HalfUp
        );
        assert_eq!(
            " Half-Even ".parse::<MinuteRounding>().unwrap(),
            MinuteRounding::HalfEven
        );
        assert!("bankers".parse::<MinuteRounding>().is_err());
    }
}
