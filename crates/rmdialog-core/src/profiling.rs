//! Profiling utilities based on the `puffin` crate.
//!
//! The scope macros are always available and cost almost nothing while
//! scopes are switched off. The HTTP server that feeds `puffin_viewer` is
//! only compiled in with the `profiling` feature.

pub use puffin::{profile_function, profile_scope};

/// Address the profiler server listens on.
pub const DEFAULT_PROFILER_ADDR: &str = "127.0.0.1:8585";

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Enable puffin scopes and start the HTTP server on `addr`.
///
/// Returns `true` when the server is running after the call.
#[cfg(feature = "profiling")]
pub fn init_profiling(addr: &str) -> bool {
    if PROFILING_SERVER.get().is_some() {
        return true;
    }

    puffin::set_scopes_on(true);

    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", addr);
            let _ = PROFILING_SERVER.set(server);
            true
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
            false
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling(addr: &str) -> bool {
    tracing::warn!(
        "Profiling requested on {} but rmdialog was built without the `profiling` feature",
        addr
    );
    false
}

/// Mark a frame boundary for the profiler.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
