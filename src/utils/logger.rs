use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "pesel_tools";

/// Filter directives for the configured `level`.
///
/// A bare level (`"warn"`) applies to this crate only; anything else is used
/// as a full `EnvFilter` directive list (`"debug,tokio=warn"`). `verbose`
/// raises this crate to `debug` and keeps the other directives.
pub fn filter_directives(verbose: bool, level: &str) -> String {
    let level = level.trim();
    let base = if level.parse::<LevelFilter>().is_ok() {
        format!("{}={}", CRATE_TARGET, level)
    } else {
        level.to_string()
    };

    if !verbose {
        return base;
    }

    let mut directives: Vec<&str> = base
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !d.starts_with(CRATE_TARGET))
        .collect();
    let crate_debug = format!("{}=debug", CRATE_TARGET);
    directives.push(&crate_debug);
    directives.join(",")
}

fn build_filter(verbose: bool, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose, level)))
}

/// Human-readable logs on stderr. `level` applies when `RUST_LOG` is unset.
pub fn init_cli_logger(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_scopes_to_crate() {
        assert_eq!(filter_directives(false, "warn"), "pesel_tools=warn");
        assert_eq!(filter_directives(false, "info"), "pesel_tools=info");
    }

    #[test]
    fn test_full_directive_passes_through() {
        assert_eq!(filter_directives(false, "debug,tokio=warn"), "debug,tokio=warn");
        assert!(EnvFilter::try_new(filter_directives(false, "debug,tokio=warn")).is_ok());
    }

    #[test]
    fn test_verbose_keeps_other_directives() {
        assert_eq!(filter_directives(true, "warn"), "pesel_tools=debug");
        assert_eq!(
            filter_directives(true, "info,tokio=warn,pesel_tools=error"),
            "info,tokio=warn,pesel_tools=debug"
        );
    }
}
