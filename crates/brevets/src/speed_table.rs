//! ACP speed limits by distance threshold.
//!
//! Speeds are dictated by where a control sits on the route. The route is
//! divided into half-open segments starting at each threshold, and every
//! segment has a slow limit (governing closing times) and a fast limit
//! (governing opening times).

use std::sync::LazyLock;

use enum_map::{Enum, EnumMap, enum_map};

/// Which speed limit of a segment applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Bound {
    /// Minimum speed, used for closing times.
    Slow,
    /// Maximum speed, used for opening times.
    Fast,
}

/// Start of a speed category along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Enum)]
pub enum Threshold {
    Start,
    Km200,
    Km400,
    Km600,
    Km1000,
}

impl Threshold {
    /// All thresholds in ascending order of distance.
    pub const ALL: [Threshold; 5] = [
        Threshold::Start,
        Threshold::Km200,
        Threshold::Km400,
        Threshold::Km600,
        Threshold::Km1000,
    ];

    pub const fn km(self) -> f64 {
        match self {
            Threshold::Start => 0.0,
            Threshold::Km200 => 200.0,
            Threshold::Km400 => 400.0,
            Threshold::Km600 => 600.0,
            Threshold::Km1000 => 1000.0,
        }
    }
}

static ACP_SPEEDS: LazyLock<SpeedTable> = LazyLock::new(SpeedTable::acp);

/// Speed limits in km/h keyed by (threshold, bound).
#[derive(Debug, Clone)]
pub struct SpeedTable {
    limits: EnumMap<Threshold, EnumMap<Bound, f64>>,
}

impl SpeedTable {
    /// The published RUSA/ACP table.
    pub fn acp() -> Self {
        let limits = enum_map! {
            Threshold::Start => enum_map! { Bound::Slow => 15.0, Bound::Fast => 34.0 },
            Threshold::Km200 => enum_map! { Bound::Slow => 15.0, Bound::Fast => 32.0 },
            Threshold::Km400 => enum_map! { Bound::Slow => 15.0, Bound::Fast => 30.0 },
            Threshold::Km600 => enum_map! { Bound::Slow => 11.428, Bound::Fast => 28.0 },
            Threshold::Km1000 => enum_map! { Bound::Slow => 13.333, Bound::Fast => 26.0 },
        };
        Self { limits }
    }

    /// Process-wide shared copy of [`SpeedTable::acp`].
    pub fn standard() -> &'static SpeedTable {
        &ACP_SPEEDS
    }

    pub fn speed(&self, threshold: Threshold, bound: Bound) -> f64 {
        self.limits[threshold][bound]
    }
}
