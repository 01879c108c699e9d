use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// Respects `RUST_LOG`. Otherwise only warnings are shown, or debug output
/// from this crate when `verbose` is set.
///
/// Call once at the start of `main`. A second call is a no-op.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,concept_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
