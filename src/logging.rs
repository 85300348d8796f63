//! `create-flask-app` diagnostics
use error::{ErrorKind, Result};
use std::io;
use tracing_subscriber::EnvFilter;

/// The default filter for a `-v` count. `RUST_LOG` takes precedence.
pub fn level_for(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber.
pub fn init(verbosity: u64) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    ::tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ErrorKind::Logging(e.to_string()).into())
}

#[cfg(test)]
mod test {
    use super::level_for;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }
}
