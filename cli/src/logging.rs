//! Diagnostic logging to stderr.

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install the global subscriber.
///
/// Defaults to `warn` (`debug` with `verbose`); `RUST_LOG` overrides both.
/// Output goes to stderr so stdout stays clean for ports and JSON.
pub fn setup_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let io_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(io_layer)
        .try_init()?;
    Ok(())
}
