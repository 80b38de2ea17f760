// Logging setup and debug-only logging macro

use std::io::Write;

/// Install the `env_logger` backend.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// everything from this crate down to debug level when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "diceware=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Per-entry scan decisions are noisy, keep them out of release builds.

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}
