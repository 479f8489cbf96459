use crate::utils::{duration_hours, duration_minutes};
use chrono::Duration;
use std::fmt;

/// Measurements shared by every activity.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub activity_label: String,
    /// Steps or strokes.
    pub repetition_count: u32,
    /// Meters per repetition.
    pub step_length: f64,
    pub duration: Duration,
    pub weight_kg: f64,
}

impl WorkoutRecord {
    pub fn new(
        activity_label: impl Into<String>,
        repetition_count: u32,
        step_length: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Self {
        Self {
            activity_label: activity_label.into(),
            repetition_count,
            step_length,
            duration,
            weight_kg,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.duration)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunningSession {
    pub record: WorkoutRecord,
}

impl RunningSession {
    pub const fn new(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkingSession {
    pub record: WorkoutRecord,
    pub height_cm: f64,
}

impl WalkingSession {
    pub const fn new(record: WorkoutRecord, height_cm: f64) -> Self {
        Self { record, height_cm }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwimmingSession {
    pub record: WorkoutRecord,
    pub pool_length_m: u32,
    pub pool_crossing_count: u32,
}

impl SwimmingSession {
    pub const fn new(record: WorkoutRecord, pool_length_m: u32, pool_crossing_count: u32) -> Self {
        Self {
            record,
            pool_length_m,
            pool_crossing_count,
        }
    }

    /// Meters swum, from pool length and number of crossings.
    pub fn pool_distance_m(&self) -> f64 {
        f64::from(self.pool_length_m) * f64::from(self.pool_crossing_count)
    }
}

/// Derived report for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub activity_label: String,
    pub duration: Duration,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.1} минут\nДистанция: {:.2} км\nСр. скорость: {:.2} км/ч\nПотрачено ккал: {:.2}",
            self.activity_label,
            duration_minutes(self.duration),
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
