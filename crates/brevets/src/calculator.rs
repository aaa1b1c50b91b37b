use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::{
    accumulator::accumulate,
    categories::resolve,
    config::CalculatorConfig,
    errors::BrevetError,
    exceptions::{close_override, open_override},
    models::BrevetDistance,
    rounding::RoundedOffset,
    schedule::ControlWindow,
    speed_table::{Bound, SpeedTable},
    timestamps,
};

/// Computes control open and close times for ACP brevets.
#[derive(Debug, Clone)]
pub struct ControlTimeCalculator {
    table: &'static SpeedTable,
    config: CalculatorConfig,
}

impl Default for ControlTimeCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl ControlTimeCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            table: SpeedTable::standard(),
            config,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Time from the start until the control opens.
    pub fn open_offset(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
    ) -> Result<Duration, BrevetError> {
        let control_km = check_control(control_km)?;
        if open_override(control_km).is_some() {
            return Ok(Duration::ZERO);
        }
        Ok(self.general_offset(control_km, brevet, Bound::Fast))
    }

    /// Time from the start until the control closes.
    pub fn close_offset(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
    ) -> Result<Duration, BrevetError> {
        let control_km = check_control(control_km)?;
        if let Some(rule) = close_override(control_km, brevet) {
            debug!(control_km, %brevet, ?rule, "Applied closing override");
            return Ok(rule.close_after());
        }
        Ok(self.general_offset(control_km, brevet, Bound::Slow))
    }

    pub fn open(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
        start: OffsetDateTime,
    ) -> Result<OffsetDateTime, BrevetError> {
        let offset = self.open_offset(control_km, brevet)?;
        start.checked_add(offset).ok_or(BrevetError::OutOfRange)
    }

    pub fn close(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
        start: OffsetDateTime,
    ) -> Result<OffsetDateTime, BrevetError> {
        let offset = self.close_offset(control_km, brevet)?;
        start.checked_add(offset).ok_or(BrevetError::OutOfRange)
    }

    /// Open and close times of a single control.
    pub fn window(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
        start: OffsetDateTime,
    ) -> Result<ControlWindow, BrevetError> {
        Ok(ControlWindow {
            control_km,
            open: self.open(control_km, brevet, start)?,
            close: self.close(control_km, brevet, start)?,
        })
    }

    fn general_offset(&self, control_km: f64, brevet: BrevetDistance, bound: Bound) -> Duration {
        let categories = resolve(control_km, brevet);
        let hours = accumulate(self.table, &categories, bound);
        let rounded = RoundedOffset::from_hours(hours, self.config.minute_rounding);
        debug!(
            control_km,
            %brevet,
            ?bound,
            home = ?categories.home,
            hours,
            rounded_hours = rounded.hours,
            rounded_minutes = rounded.minutes,
            "Computed control offset"
        );
        rounded.to_duration()
    }
}

fn check_control(control_km: f64) -> Result<f64, BrevetError> {
    if control_km.is_finite() && control_km >= 0.0 {
        Ok(control_km)
    } else {
        Err(BrevetError::InvalidDistance(control_km))
    }
}

/// Opening time of a control as an ISO-8601 string in the start's offset.
///
/// The start control returns `brevet_start_time` exactly as given.
pub fn open_time(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &str,
) -> Result<String, BrevetError> {
    let brevet = BrevetDistance::from_km(brevet_dist_km)?;
    let control_km = check_control(control_dist_km)?;
    let start = timestamps::parse(brevet_start_time)?;
    if open_override(control_km).is_some() {
        return Ok(brevet_start_time.to_string());
    }
    let open = ControlTimeCalculator::default().open(control_km, brevet, start)?;
    timestamps::render(open)
}

/// Closing time of a control as an ISO-8601 string in the start's offset.
pub fn close_time(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &str,
) -> Result<String, BrevetError> {
    let brevet = BrevetDistance::from_km(brevet_dist_km)?;
    let control_km = check_control(control_dist_km)?;
    let start = timestamps::parse(brevet_start_time)?;
    let close = ControlTimeCalculator::default().close(control_km, brevet, start)?;
    timestamps::render(close)
}
