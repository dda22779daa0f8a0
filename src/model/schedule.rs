use crate::model::limits::HOURS;
use crate::name::HasName;
use serde::{Deserialize, Serialize};

/// A lighting schedule with an applicability window and hourly fractions.
///
/// The applicability window is a begin/end month, day, and day-of-week range;
/// `hourly` holds the fractional lighting output for each hour of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingSchedule {
    pub name: String,
    pub month_begin: i64,
    pub day_begin: i64,
    pub month_end: i64,
    pub day_end: i64,
    pub dow_begin: i64,
    pub dow_end: i64,
    pub hourly: [f64; HOURS],
}

impl HasName for LightingSchedule {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl LightingSchedule {
    /// Fractional lighting output at an hour of the day (wraps past 24).
    pub fn fraction_at(&self, hour: usize) -> f64 {
        self.hourly[hour % HOURS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_at_wraps() {
        let mut hourly = [0.0; HOURS];
        hourly[8] = 0.75;
        let sched = LightingSchedule {
            name: "office".to_string(),
            month_begin: 1,
            day_begin: 1,
            month_end: 12,
            day_end: 31,
            dow_begin: 1,
            dow_end: 7,
            hourly,
        };
        assert_eq!(sched.fraction_at(8), 0.75);
        assert_eq!(sched.fraction_at(8 + 24), 0.75);
        assert_eq!(sched.fraction_at(9), 0.0);
    }
}
