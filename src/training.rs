//! Per-activity formulas behind one capability trait.
//!
//! Distance and mean speed default to the step-based rule over the shared
//! [`WorkoutRecord`]; every activity must bring its own calorie formula.

use crate::constants::{CM_IN_M, KMH_IN_MSEC, M_IN_KM, MINS_IN_HOUR, running, swimming, walking};
use crate::dlog;
use crate::types::{RunningSession, SwimmingSession, WalkingSession, WorkoutRecord, WorkoutSummary};

pub trait Training {
    fn record(&self) -> &WorkoutRecord;

    /// Kilometers covered.
    fn distance(&self) -> f64 {
        let r = self.record();
        f64::from(r.repetition_count) * r.step_length / M_IN_KM
    }

    /// km/h; 0 for a zero-length session.
    fn mean_speed(&self) -> f64 {
        per_hour(self.distance(), self.record().duration_hours())
    }

    /// Kilocalories burned.
    fn calories(&self) -> f64;

    fn summary(&self) -> WorkoutSummary {
        let r = self.record();
        let summary = WorkoutSummary {
            activity_label: r.activity_label.clone(),
            duration: r.duration,
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.calories(),
        };
        dlog!(
            activity = %summary.activity_label,
            distance_km = summary.distance_km,
            mean_speed_kmh = summary.mean_speed_kmh,
            calories_kcal = summary.calories_kcal,
            "computed summary"
        );
        summary
    }
}

fn per_hour(km: f64, hours: f64) -> f64 {
    if hours == 0.0 {
        return 0.0;
    }
    km / hours
}

impl Training for RunningSession {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories(&self) -> f64 {
        let r = &self.record;
        (running::MEAN_SPEED_MULTIPLIER * self.mean_speed() + running::MEAN_SPEED_SHIFT)
            * r.weight_kg
            / M_IN_KM
            * r.duration_hours()
            * MINS_IN_HOUR
    }
}

impl Training for WalkingSession {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories(&self) -> f64 {
        let height_m = self.height_cm / CM_IN_M;
        if height_m == 0.0 {
            return 0.0;
        }

        let r = &self.record;
        let speed_ms = self.mean_speed() * KMH_IN_MSEC;
        (walking::WEIGHT_MULTIPLIER * r.weight_kg
            + (speed_ms * speed_ms / height_m) * walking::SPEED_HEIGHT_MULTIPLIER * r.weight_kg)
            * r.duration_hours()
            * MINS_IN_HOUR
    }
}

impl Training for SwimmingSession {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn distance(&self) -> f64 {
        self.pool_distance_m() / M_IN_KM
    }

    fn mean_speed(&self) -> f64 {
        per_hour(self.pool_distance_m() / M_IN_KM, self.record.duration_hours())
    }

    fn calories(&self) -> f64 {
        let r = &self.record;
        (self.mean_speed() + swimming::MEAN_SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * r.weight_kg
            * r.duration_hours()
    }
}

/// Render the report for any session.
pub fn read_data(training: &dyn Training) -> String {
    training.summary().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LEN_STEP, SWIMMING_LEN_STEP, labels};
    use chrono::Duration;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn running(minutes: i64) -> RunningSession {
        RunningSession::new(WorkoutRecord::new(
            labels::RUNNING,
            5000,
            LEN_STEP,
            Duration::minutes(minutes),
            85.0,
        ))
    }

    fn walking(minutes: i64, height_cm: f64) -> WalkingSession {
        WalkingSession::new(
            WorkoutRecord::new(labels::WALKING, 20000, LEN_STEP, Duration::minutes(minutes), 85.0),
            height_cm,
        )
    }

    fn swimming(minutes: i64) -> SwimmingSession {
        SwimmingSession::new(
            WorkoutRecord::new(
                labels::SWIMMING,
                2000,
                SWIMMING_LEN_STEP,
                Duration::minutes(minutes),
                85.0,
            ),
            50,
            40,
        )
    }

    #[test]
    fn running_metrics() {
        let s = running(30);
        assert!(close(s.distance(), 3.25));
        assert!(close(s.mean_speed(), 6.5));
        assert!(close(s.calories(), 302.9145));
    }

    #[test]
    fn walking_metrics() {
        let s = walking(225, 185.0);
        assert!(close(s.distance(), 13.0));
        assert!((s.mean_speed() - 3.466_666).abs() < 1e-5);
        assert!((s.calories() - 947.821_314_7).abs() < 1e-6);
    }

    #[test]
    fn swimming_metrics() {
        let s = swimming(90);
        assert!(close(s.distance(), 2.0));
        assert!((s.mean_speed() - 4.0 / 3.0).abs() < 1e-12);
        assert!(close(s.calories(), 620.5));
    }

    #[test]
    fn swimming_distance_ignores_stroke_length() {
        let mut s = swimming(90);
        let before = s.distance();
        s.record.repetition_count = 1;
        s.record.step_length = 100.0;
        assert_eq!(s.distance(), before);
    }

    #[test]
    fn zero_duration_is_not_an_error() {
        assert_eq!(running(0).mean_speed(), 0.0);
        assert_eq!(running(0).calories(), 0.0);
        assert_eq!(swimming(0).mean_speed(), 0.0);
        assert_eq!(swimming(0).calories(), 0.0);
        assert_eq!(walking(0, 185.0).mean_speed(), 0.0);
        assert_eq!(walking(0, 185.0).calories(), 0.0);
        assert!(close(running(0).distance(), 3.25));
    }

    #[test]
    fn zero_height_walking_burns_nothing() {
        assert_eq!(walking(225, 0.0).calories(), 0.0);
        assert_eq!(walking(1, 0.0).calories(), 0.0);
    }

    #[test]
    fn summary_is_idempotent() {
        let s = walking(225, 185.0);
        let a = s.summary();
        let b = s.summary();
        assert_eq!(a.calories_kcal.to_bits(), b.calories_kcal.to_bits());
        assert_eq!(a, b);
        assert_eq!(read_data(&s), read_data(&s));
    }

    #[test]
    fn summary_uses_activity_rules() {
        let s = swimming(90);
        let summary = s.summary();
        assert_eq!(summary.activity_label, "Плавание");
        assert_eq!(summary.duration, Duration::minutes(90));
        assert!(close(summary.distance_km, 2.0));
        assert!(close(summary.calories_kcal, 620.5));
    }
}
