//! Open and close times for every control of a brevet.

use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::{
    calculator::ControlTimeCalculator, errors::BrevetError, models::BrevetDistance, timestamps,
};

/// Check-in window of one control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlWindow {
    pub control_km: f64,
    #[serde(serialize_with = "timestamps::serialize")]
    pub open: OffsetDateTime,
    #[serde(serialize_with = "timestamps::serialize")]
    pub close: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSchedule {
    pub brevet: BrevetDistance,
    #[serde(serialize_with = "timestamps::serialize")]
    pub start: OffsetDateTime,
    pub controls: Vec<ControlWindow>,
}

impl ControlSchedule {
    /// Computes windows for `controls`, kept in the given order.
    ///
    /// Fails on the first invalid control distance.
    pub fn build(
        calculator: &ControlTimeCalculator,
        brevet: BrevetDistance,
        start: OffsetDateTime,
        controls: &[f64],
    ) -> Result<Self, BrevetError> {
        let controls = controls
            .iter()
            .map(|&control_km| calculator.window(control_km, brevet, start))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%brevet, controls = controls.len(), "Built control schedule");

        Ok(Self {
            brevet,
            start,
            controls,
        })
    }

    /// Latest closing time across all controls.
    pub fn finish_close(&self) -> Option<OffsetDateTime> {
        self.controls.iter().map(|window| window.close).max()
    }
}
