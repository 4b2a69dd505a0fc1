//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for Ctrl-C (SIGINT) and SIGTERM
//! - Translate the first signal into a shutdown broadcast
//! - A handler that fails to register never counts as a signal

use std::future::Future;
use std::io;

use crate::lifecycle::shutdown::Shutdown;

/// Resolve on the first interrupt or termination signal.
pub async fn wait_for_signal() {
    let ctrl_c = registered_signal("Ctrl-C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "SIGTERM handler unavailable, listening for Ctrl-C only"
                );
                ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await;
    }
}

/// Await a signal future; on registration failure log and stay pending.
async fn registered_signal<F>(name: &'static str, signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::warn!(signal = name, error = %e, "Signal handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Spawn a task that triggers `shutdown` on the first signal.
pub fn spawn_signal_listener(shutdown: &Shutdown) -> tokio::task::JoinHandle<()> {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::warn!("Interrupt received, stopping transfer");
        shutdown.trigger();
    })
}
