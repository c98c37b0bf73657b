use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "store_credit=error,error";
    }
    match verbose {
        0 => "store_credit=warn,warn",
        1 => "store_credit=info,warn",
        _ => "store_credit=debug,info",
    }
}

/// Logs go to stderr so rendered reports on stdout stay machine-readable.
pub fn init_cli_logger(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
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
