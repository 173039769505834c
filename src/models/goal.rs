use serde::Serialize;

/// Clamp a raw input to a non-negative counter value.
pub fn clamp_count(n: i64) -> u32 {
    n.clamp(0, u32::MAX as i64) as u32
}

/// A daily counter measured against a fixed target (pages, minutes, dhikr).
/// Completion is always derived from the two numbers, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterGoal {
    value: u32,
    target: u32,
}

impl CounterGoal {
    pub fn new(target: u32) -> Self {
        Self {
            value: 0,
            target: target.max(1),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn completed(&self) -> bool {
        self.value >= self.target
    }

    pub fn with_value(self, n: i64) -> Self {
        Self {
            value: clamp_count(n),
            ..self
        }
    }

    /// Uncapped percentage of the target, rounded.
    pub fn percent(&self) -> u32 {
        (self.value as f64 / self.target as f64 * 100.0).round() as u32
    }

    /// Fill ratio for progress bars, capped at 1.0.
    pub fn ratio(&self) -> f64 {
        (self.value as f64 / self.target as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_input_clamps_to_zero() {
        let goal = CounterGoal::new(2).with_value(-7);
        assert_eq!(goal.value(), 0);
        assert!(!goal.completed());
    }

    #[test]
    fn completed_tracks_value_against_target() {
        let goal = CounterGoal::new(30);
        assert!(!goal.with_value(29).completed());
        assert!(goal.with_value(30).completed());
        assert!(goal.with_value(45).completed());
        assert!(!goal.with_value(45).with_value(10).completed());
    }

    #[test]
    fn zero_target_is_raised_to_one() {
        assert_eq!(CounterGoal::new(0).target(), 1);
    }

    #[test]
    fn percent_is_uncapped_but_ratio_is_not() {
        let goal = CounterGoal::new(2).with_value(3);
        assert_eq!(goal.percent(), 150);
        assert_eq!(goal.ratio(), 1.0);
        assert_eq!(CounterGoal::new(30).with_value(10).percent(), 33);
    }

    #[test]
    fn huge_input_saturates() {
        assert_eq!(clamp_count(i64::MAX), u32::MAX);
    }
}
