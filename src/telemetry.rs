//! Tracing setup for hosts and the `render_matrix_chart` binary.
//!
//! Opt-in: nothing is installed unless a host calls [`init_default_tracing`]
//! or [`init_tracing`]. Without a subscriber the presence-check and
//! surface-lookup diagnostics are dropped.

/// Environment variable read for filter directives.
pub const LOG_ENV_VAR: &str = "MATRIX_TREND_CHART_LOG";

/// Quiet for dependencies, chart diagnostics at INFO and above.
pub const DEFAULT_FILTER_DIRECTIVES: &str = "warn,matrix_trend_chart=info";

/// Picks the filter directives: a non-blank override wins, otherwise the default.
#[must_use]
pub fn resolve_filter_directives(override_value: Option<&str>) -> String {
    match override_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => DEFAULT_FILTER_DIRECTIVES.to_owned(),
    }
}

/// Installs a subscriber filtered by `MATRIX_TREND_CHART_LOG`, falling back to
/// [`DEFAULT_FILTER_DIRECTIVES`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    let from_env = std::env::var(LOG_ENV_VAR).ok();
    init_tracing(&resolve_filter_directives(from_env.as_deref()))
}

/// Installs a compact stderr subscriber with the given filter directives.
///
/// Events go to stderr because stdout may carry the emitted chart script.
/// Unparseable directives fall back to [`DEFAULT_FILTER_DIRECTIVES`].
#[must_use]
pub fn init_tracing(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER_DIRECTIVES));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
