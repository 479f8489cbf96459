use chrono::Duration;
use tracing_subscriber::{EnvFilter, fmt};

const MS_IN_MINUTE: f64 = 60_000.0;
const MS_IN_HOUR: f64 = 3_600_000.0;

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = level_for(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitcalc={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

fn level_for(verbose: u8, quiet: u8) -> &'static str {
    let net = i16::from(verbose) - i16::from(quiet);
    match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Fractional hours, e.g. 90 minutes => 1.5.
#[allow(clippy::cast_precision_loss)]
pub fn duration_hours(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / MS_IN_HOUR
}

/// Fractional minutes, e.g. 90 seconds => 1.5.
#[allow(clippy::cast_precision_loss)]
pub fn duration_minutes(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / MS_IN_MINUTE
}
