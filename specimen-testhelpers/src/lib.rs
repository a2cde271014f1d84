#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Parses a `SPECIMEN_LOG` directive, falling back to `trace` everywhere.
fn filter_from(directive: Option<&str>) -> Targets {
    directive
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    let directive = std::env::var("SPECIMEN_LOG").ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter_from(directive.as_deref()))
        .try_init()
        .ok();
});

/// Set up a tracing subscriber for tests.
///
/// Safe to call from every test: the subscriber is installed exactly once per
/// process, and a subscriber installed by someone else is left in place.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn setup_is_idempotent() {
        setup();
        setup();
        tracing::trace!("still alive");
    }

    #[test]
    fn bad_directive_falls_back_to_trace() {
        let filter = filter_from(Some("specimen=loud"));
        assert!(filter.would_enable("anything", &Level::TRACE));

        let filter = filter_from(Some("specimen=info"));
        assert!(filter.would_enable("specimen", &Level::INFO));
        assert!(!filter.would_enable("specimen", &Level::DEBUG));
        assert_eq!(
            filter_from(None).default_level(),
            Some(LevelFilter::TRACE)
        );
    }
}
