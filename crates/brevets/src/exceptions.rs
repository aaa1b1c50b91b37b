//! RUSA-mandated overrides that supersede the speed table.
//!
//! - The start control closes one hour after it opens.
//! - A 200 km brevet closes 13.5 hours after the start, wherever the
//!   final control actually sits.
//! - A 400 km brevet closes 27 hours after the start.

use time::Duration;

use crate::models::BrevetDistance;

/// A matched override rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    StartControl,
    Brevet200Limit,
    Brevet400Limit,
}

impl Override {
    /// Fixed offset from the start at which the control closes.
    pub fn close_after(self) -> Duration {
        match self {
            Override::StartControl => Duration::hours(1),
            Override::Brevet200Limit => Duration::hours(13) + Duration::minutes(30),
            Override::Brevet400Limit => Duration::hours(27),
        }
    }
}

/// Override for an opening time. Only the start control has one; it opens
/// at the start time itself.
pub fn open_override(control_km: f64) -> Option<Override> {
    (control_km == 0.0).then_some(Override::StartControl)
}

/// Override for a closing time, first matching rule wins.
pub fn close_override(control_km: f64, brevet: BrevetDistance) -> Option<Override> {
    if control_km == 0.0 {
        Some(Override::StartControl)
    } else if control_km >= 200.0 && brevet == BrevetDistance::Km200 {
        Some(Override::Brevet200Limit)
    } else if control_km >= 400.0 && brevet == BrevetDistance::Km400 {
        Some(Override::Brevet400Limit)
    } else {
        None
    }
}
