//! Resolution of the speed categories a control distance spans.

use crate::{models::BrevetDistance, speed_table::Threshold};

static ORDERED: [Threshold; 5] = Threshold::ALL;

/// Speed categories occupied by a control.
#[derive(Debug, Clone, PartialEq)]
pub struct Categories {
    /// Category the control itself falls in.
    pub home: Threshold,
    /// Fully traversed categories below `home`, ascending.
    pub lower: &'static [Threshold],
    /// Control distance clamped to the brevet's nominal length.
    pub distance_km: f64,
}

impl Categories {
    /// Distance travelled inside the home category.
    pub fn remaining_km(&self) -> f64 {
        self.distance_km - self.home.km()
    }
}

/// Resolves the categories for a control on a brevet.
///
/// A control past the nominal length is evaluated as if it sat exactly at
/// the nominal length. A control at or past the nominal length stays in the
/// category below the nominal length, so a 400 km control on a 400 km
/// brevet uses the 200-400 rate for its last stretch.
pub fn resolve(control_km: f64, brevet: BrevetDistance) -> Categories {
    let nominal_km = brevet.km_f64();
    let within = control_km < nominal_km;
    let distance_km = if within { control_km } else { nominal_km };

    let collected = ORDERED
        .iter()
        .take_while(|threshold| {
            if within {
                threshold.km() <= distance_km
            } else {
                threshold.km() < nominal_km
            }
        })
        .count();

    // The start threshold always qualifies for non-negative distances.
    let (home, lower) = match ORDERED[..collected].split_last() {
        Some((home, lower)) => (*home, lower),
        None => (Threshold::Start, &ORDERED[..0]),
    };

    Categories {
        home,
        lower,
        distance_km,
    }
}
