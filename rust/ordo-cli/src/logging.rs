use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "ordo_core=info,ordo_cli=info";
const VERBOSE_FILTER: &str = "ordo_core=debug,ordo_cli=debug";

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
///
/// Stdout is reserved for command output.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
