//! Background purge of expired share links.
//!
//! Expired links already read as not-found; the sweep only reclaims
//! their storage.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use resumehub_core::traits::Clock;

use crate::repositories::ShareRepository;

/// Periodically deletes share links whose expiry has passed.
#[derive(Debug)]
pub struct ExpirySweeper {
    shares: Arc<dyn ShareRepository>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl ExpirySweeper {
    /// Create a sweeper running every `interval`.
    pub fn new(shares: Arc<dyn ShareRepository>, clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self {
            shares,
            clock,
            interval,
        }
    }

    /// Run one purge pass and return the number of removed links.
    pub async fn sweep_once(&self) -> u64 {
        match self.shares.purge_expired(self.clock.now()).await {
            Ok(0) => {
                debug!("No expired share links to purge");
                0
            }
            Ok(removed) => {
                info!(removed, "Purged expired share links");
                removed
            }
            Err(e) => {
                warn!(error = %e, "Expired share purge failed");
                0
            }
        }
    }

    /// Spawn the sweep loop. It stops when `shutdown` flips to `true`.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(interval_seconds = self.interval.as_secs(), "Expiry sweeper started");
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.sweep_once().await;
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("Expiry sweeper stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Utc};
    use resumehub_core::traits::ManualClock;
    use resumehub_entity::share::{NewSharedResume, ResumeSnapshot};

    use super::*;
    use crate::memory::MemoryShareRepository;

    #[tokio::test]
    async fn test_sweep_once_purges_after_expiry() {
        let start = Utc::now();
        let clock = Arc::new(ManualClock::new(start));
        let shares = Arc::new(MemoryShareRepository::new());
        shares
            .insert(
                &NewSharedResume {
                    share_id: "weekly000001".to_string(),
                    resume_data: ResumeSnapshot::from_stored(serde_json::json!({})),
                    title: "CV".to_string(),
                    description: String::new(),
                    expires_at: Some(start + ChronoDuration::days(7)),
                },
                start,
            )
            .await
            .expect("insert");

        let sweeper = ExpirySweeper::new(
            shares.clone(),
            clock.clone(),
            Duration::from_secs(60),
        );
        assert_eq!(sweeper.sweep_once().await, 0);

        clock.advance(ChronoDuration::days(8));
        assert_eq!(sweeper.sweep_once().await, 1);
        assert!(shares.is_empty());
    }

    #[tokio::test]
    async fn test_spawned_sweeper_stops_on_shutdown() {
        let shares = Arc::new(MemoryShareRepository::new());
        let clock = Arc::new(ManualClock::default());
        let (tx, rx) = watch::channel(false);

        let handle = ExpirySweeper::new(shares, clock, Duration::from_secs(3600)).spawn(rx);
        tx.send(true).expect("send");
        handle.await.expect("sweeper task");
    }
}
