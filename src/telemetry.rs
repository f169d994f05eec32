//! Tracing initialisation for the `rid` binary.
//!
//! Debug diagnostics (resolved repositories, every git command) go to
//! stdout when `-d` is given; otherwise only warnings reach stderr.

use std::io;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Filter used with `-d`: this crate's library and binary only
pub const DEBUG_DIRECTIVES: &str = "goobits_rid=debug,rid=debug";
/// Filter used without `-d`
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// `RUST_LOG` when set, otherwise the directives implied by `debug`
pub fn env_filter(debug: bool) -> EnvFilter {
    let directives = if debug {
        DEBUG_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Plain-text layer for `-d` diagnostics: no timestamps, targets or colors
pub fn diagnostics_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .with_writer(writer)
}

/// Initialise the global tracing subscriber.
///
/// Only the first call takes effect.
pub fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::registry()
            .with(env_filter(true))
            .with(diagnostics_layer(io::stdout))
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter(false))
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .try_init()
            .ok();
    }
}
