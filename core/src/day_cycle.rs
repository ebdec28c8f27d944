use crate::types::Timestamp;

/// Alternating day/night phase and the moment the current phase began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCycle {
    pub day_time:  bool,
    pub day_start: Timestamp,
}

impl DayCycle {
    /// A fresh cycle starts in daytime.
    pub fn starting_at(now: Timestamp) -> Self {
        Self { day_time: true, day_start: now }
    }

    pub fn elapsed(&self, now: Timestamp) -> f64 {
        now - self.day_start
    }

    /// True once the current phase has lasted `duration_secs`.
    pub fn is_due(&self, now: Timestamp, duration_secs: f64) -> bool {
        self.elapsed(now) >= duration_secs
    }

    /// Switch phase and restart the phase timer at `now`.
    pub fn flip(&mut self, now: Timestamp) {
        self.day_time = !self.day_time;
        self.day_start = now;
    }

    pub fn label(&self) -> &'static str {
        if self.day_time { "Day" } else { "Night" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_at_exact_duration() {
        let cycle = DayCycle::starting_at(100.0);
        assert!(!cycle.is_due(129.9, 30.0));
        assert!(cycle.is_due(130.0, 30.0));
    }

    #[test]
    fn flip_restarts_timer() {
        let mut cycle = DayCycle::starting_at(100.0);
        cycle.flip(131.0);
        assert!(!cycle.day_time);
        assert_eq!(cycle.label(), "Night");
        assert!(!cycle.is_due(150.0, 30.0));
    }
}
