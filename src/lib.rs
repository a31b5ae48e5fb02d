pub mod config;
pub mod server;
pub mod validator;

/// Process-level helpers shared by the binary and the tests
pub mod util {
    use tracing_subscriber::EnvFilter;

    /// Install the global tracing subscriber. `RUST_LOG` wins over
    /// `default_filter` when it is set. Records emitted through the `log`
    /// facade (actix's request logger) are forwarded to the subscriber.
    pub fn init_tracing(default_filter: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

}
