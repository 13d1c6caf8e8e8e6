use crate::mail::Notify;
use crate::scanning::scanner::SlotScanner;
use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time;
use tracing::{error, info, warn};

pub struct WatchConfig {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
}

/// Repeats the scan on a fixed interval until slots show up, then notifies
/// once and stops. Scan and delivery failures are logged and do not stop the
/// watch; only the shutdown future or the attempt bound ends it early.
pub struct Watcher<N: Notify> {
    scanner: SlotScanner,
    notifier: N,
    config: WatchConfig,
}

impl<N: Notify> Watcher<N> {
    pub fn new(scanner: SlotScanner, notifier: N, config: WatchConfig) -> Self {
        Watcher {
            scanner,
            notifier,
            config,
        }
    }

    /// Runs until slots are found (returns them), the attempt bound is
    /// exhausted, or `shutdown` completes (both return `None`). The first
    /// scan happens immediately, later ones on the configured interval.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) -> Result<Option<Vec<String>>> {
        tokio::pin!(shutdown);
        let mut ticker = time::interval(self.config.interval);
        let mut attempts = 0u32;

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping watch");
                    return Ok(None);
                }
                _ = ticker.tick() => {}
            }

            attempts += 1;
            match self.scanner.scan().await {
                Ok(slots) if !slots.is_empty() => {
                    if let Err(e) = self.notifier.notify(&slots).await {
                        error!("failed to deliver notification: {e:?}");
                    }
                    return Ok(Some(slots));
                }
                Ok(_) => info!("no open slots yet (attempt {attempts})"),
                Err(e) => error!("scan attempt {attempts} failed: {e:?}"),
            }

            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    warn!("no slots after {attempts} attempts, giving up");
                    return Ok(None);
                }
            }
        }
    }
}
