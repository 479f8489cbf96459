use crate::constants::{LEN_STEP, SWIMMING_LEN_STEP, labels};
use crate::training::Training;
use crate::types::{RunningSession, SwimmingSession, WalkingSession, WorkoutRecord};
use chrono::Duration;

const WEIGHT_KG: f64 = 85.0;

pub fn swimming() -> SwimmingSession {
    SwimmingSession::new(
        WorkoutRecord::new(
            labels::SWIMMING,
            2000,
            SWIMMING_LEN_STEP,
            Duration::minutes(90),
            WEIGHT_KG,
        ),
        50,
        40,
    )
}

pub fn walking() -> WalkingSession {
    WalkingSession::new(
        WorkoutRecord::new(
            labels::WALKING,
            20000,
            LEN_STEP,
            Duration::hours(3) + Duration::minutes(45),
            WEIGHT_KG,
        ),
        185.0,
    )
}

pub fn running() -> RunningSession {
    RunningSession::new(WorkoutRecord::new(
        labels::RUNNING,
        5000,
        LEN_STEP,
        Duration::minutes(30),
        WEIGHT_KG,
    ))
}

/// Built-in sessions in print order.
pub fn builtin() -> Vec<Box<dyn Training>> {
    vec![Box::new(swimming()), Box::new(walking()), Box::new(running())]
}
