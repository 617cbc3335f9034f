use std::env;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parses `LOG_LEVEL`, falling back to info. The rejected value is returned
/// so it can be reported once the subscriber is up.
fn resolve_level(raw: Option<&str>) -> (LevelFilter, Option<String>) {
    match raw {
        None => (DEFAULT_LEVEL, None),
        Some(raw) => match raw.trim().to_lowercase().parse::<LevelFilter>() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LEVEL, Some(raw.to_string())),
        },
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `LOG_LEVEL`; setting
/// `NO_COLOR` turns off ANSI escapes for log files and journald.
pub fn init_logging() {
    let mut rejected = None;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let (level, invalid) = resolve_level(env::var("LOG_LEVEL").ok().as_deref());
        rejected = invalid;
        EnvFilter::new(format!("homework_status_bot={}", level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .init();

    if let Some(value) = rejected {
        tracing::warn!(value = %value, "Invalid LOG_LEVEL, using info");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_are_accepted() {
        assert_eq!(resolve_level(Some("DEBUG")), (LevelFilter::DEBUG, None));
        assert_eq!(resolve_level(Some(" warn ")), (LevelFilter::WARN, None));
        assert_eq!(resolve_level(None), (LevelFilter::INFO, None));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(
            resolve_level(Some("verbose")),
            (LevelFilter::INFO, Some("verbose".to_string()))
        );
    }
}
