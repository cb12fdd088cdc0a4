use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for the embedding process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (typically
/// `Config::rust_log`) applies. Safe to call more than once — later calls are
/// no-ops, so library tests and the embedding surface can both call it.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("info");
        init("debug"); // second call must not panic
    }
}
