use env_logger::Builder;
use log::Level;
use std::io::Write;

pub const LOG_ENV: &str = "COLLECTOR_LOG";

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Diagnostics go to stderr; `COLLECTOR_LOG` overrides the `-v` level.
pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_ENV, level_for(verbosity));
    Builder::from_env(env)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31",
                Level::Warn => "33",
                Level::Info => "32",
                Level::Debug => "36",
                Level::Trace => "35",
            };
            writeln!(buf, "\x1B[{}m[{}]\x1B[0m {}", level_color, record.level(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .try_init()
}
