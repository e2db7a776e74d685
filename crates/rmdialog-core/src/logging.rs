use tracing_subscriber::EnvFilter;

/// Directives appended to every filter so dependency chatter stays at `info`.
const QUIET_DEPENDENCIES: &str =
    "wgpu_core=info,wgpu_hal=info,naga=info,winit=info,cosmic_text=info,calloop=info";

/// Build the filter directive string for a default level such as `debug`.
pub fn filter_directives(level: &str) -> String {
    format!("{level},{QUIET_DEPENDENCIES}")
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
