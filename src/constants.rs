//! Unit conversions and formula coefficients.

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MINS_IN_HOUR: f64 = 60.0;
/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;
/// km/h to m/s, rounded the way the walking formula expects.
pub const KMH_IN_MSEC: f64 = 0.278;

/// Average step length for walking and running, meters.
pub const LEN_STEP: f64 = 0.65;
/// Average stroke length for swimming, meters.
pub const SWIMMING_LEN_STEP: f64 = 1.38;

pub mod running {
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

pub mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

pub mod swimming {
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

pub mod labels {
    pub const RUNNING: &str = "Бег";
    pub const WALKING: &str = "Ходьба";
    pub const SWIMMING: &str = "Плавание";
}
