use tracing::trace;

use crate::{
    categories::Categories,
    speed_table::{Bound, SpeedTable, Threshold},
};

/// Sums riding time across speed categories, walking down from the home
/// category towards the start.
#[derive(Debug, Clone)]
pub struct SegmentAccumulator<'a> {
    table: &'a SpeedTable,
    bound: Bound,
    upper_km: f64,
    total_hours: f64,
}

impl<'a> SegmentAccumulator<'a> {
    pub fn new(table: &'a SpeedTable, bound: Bound, home: Threshold) -> Self {
        Self {
            table,
            bound,
            upper_km: home.km(),
            total_hours: 0.0,
        }
    }

    /// Adds the whole category starting at `threshold`, up to the lowest
    /// category already traversed.
    pub fn traverse(&mut self, threshold: Threshold) {
        let speed = self.table.speed(threshold, self.bound);
        let hours = (self.upper_km - threshold.km()) / speed;
        trace!(?threshold, bound = ?self.bound, speed, hours, "Traversed segment");
        self.total_hours += hours;
        self.upper_km = threshold.km();
    }

    /// Adds the partial distance inside the home category and returns the
    /// elapsed fractional hours.
    pub fn finish(mut self, categories: &Categories) -> f64 {
        let speed = self.table.speed(categories.home, self.bound);
        let hours = categories.remaining_km() / speed;
        trace!(home = ?categories.home, bound = ?self.bound, speed, hours, "Home segment");
        self.total_hours += hours;
        self.total_hours
    }
}

/// Elapsed fractional hours from the start to a control.
pub fn accumulate(table: &SpeedTable, categories: &Categories, bound: Bound) -> f64 {
    let mut acc = SegmentAccumulator::new(table, bound, categories.home);
    for &threshold in categories.lower.iter().rev() {
        acc.traverse(threshold);
    }
    acc.finish(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{categories::resolve, models::BrevetDistance};

    fn hours(control_km: f64, brevet: BrevetDistance, bound: Bound) -> f64 {
        accumulate(SpeedTable::standard(), &resolve(control_km, brevet), bound)
    }

    #[test]
    fn test_single_segment() {
        let open = hours(40.0, BrevetDistance::Km200, Bound::Fast);
        assert!((open - 40.0 / 34.0).abs() < 1e-12);

        let close = hours(120.0, BrevetDistance::Km200, Bound::Slow);
        assert!((close - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_each_segment_at_its_own_speed() {
        let open = hours(602.0, BrevetDistance::Km1000, Bound::Fast);
        let expected = 200.0 / 34.0 + 200.0 / 32.0 + 200.0 / 30.0 + 2.0 / 28.0;
        assert!((open - expected).abs() < 1e-9);

        let close = hours(602.0, BrevetDistance::Km1000, Bound::Slow);
        let expected = 600.0 / 15.0 + 2.0 / 11.428;
        assert!((close - expected).abs() < 1e-9);
    }

    #[test]
    fn test_nominal_length_uses_lower_rate() {
        let open = hours(300.0, BrevetDistance::Km300, Bound::Fast);
        let expected = 200.0 / 34.0 + 100.0 / 32.0;
        assert!((open - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance_is_zero_hours() {
        assert_eq!(hours(0.0, BrevetDistance::Km400, Bound::Fast), 0.0);
        assert_eq!(hours(0.0, BrevetDistance::Km400, Bound::Slow), 0.0);
    }

    #[test]
    fn test_monotonic_in_distance() {
        for brevet in BrevetDistance::ALL {
            for bound in [Bound::Fast, Bound::Slow] {
                let mut previous = 0.0;
                for km in 0..=brevet.km() {
                    let current = hours(f64::from(km), brevet, bound);
                    assert!(current >= previous, "{brevet} {bound:?} at {km} km");
                    previous = current;
                }
            }
        }
    }
}
