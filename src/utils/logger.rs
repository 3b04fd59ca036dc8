use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compact single-line output for host runs.
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(layer)
        .init();
}

/// JSON output for collection by a log daemon on device.
pub fn init_json_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(layer)
        .init();
}

fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "model_override=debug,info"
    } else {
        "model_override=info"
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false), "model_override=info");
        assert!(filter_directive(true).starts_with("model_override=debug"));
    }
}
