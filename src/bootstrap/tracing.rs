use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) {
    // `--verbose` wins over RUST_LOG, which in turn defaults to "info"
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
