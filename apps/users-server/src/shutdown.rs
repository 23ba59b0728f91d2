use anyhow::Result;

/// Resolves on Ctrl+C or SIGTERM.
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
            _ = tokio::signal::ctrl_c() => {}, // fallback
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(())
    }
}

/// Shutdown future handed to the HTTP server; never fails.
pub async fn signal() {
    match wait_for_shutdown().await {
        Ok(()) => tracing::info!("shutdown: signal received"),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "shutdown: primary waiter failed; falling back to ctrl_c()"
            );
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}
