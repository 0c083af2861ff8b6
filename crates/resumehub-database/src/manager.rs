//! Process-wide, lazily established store connection.
//!
//! The manager moves through [`ConnectionState`]s. While a connect is in
//! flight every caller awaits the same shared future, so N concurrent
//! first callers cause exactly one connect. A failed attempt leaves the
//! manager in `Failed`; [`ConnectionManager::invalidate`] drops a healthy
//! handle back to `Disconnected`. Either way the next [`ConnectionManager::get`]
//! starts a fresh attempt.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use resumehub_core::error::AppError;
use resumehub_core::result::AppResult;

/// Observable state of a [`ConnectionManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No handle and no attempt in flight.
    Disconnected,
    /// An attempt is in flight; callers join it.
    Connecting,
    /// A healthy handle is cached.
    Connected,
    /// The last attempt failed; the next use retries.
    Failed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

type ConnectFuture<T> = Shared<BoxFuture<'static, Result<T, AppError>>>;
type Connector<T> = Box<dyn Fn() -> BoxFuture<'static, AppResult<T>> + Send + Sync>;

enum Slot<T: Clone> {
    Disconnected,
    Connecting {
        attempt: u64,
        future: ConnectFuture<T>,
    },
    Connected {
        attempt: u64,
        handle: T,
    },
    Failed,
}

/// Shares one connection handle of type `T` across the process.
pub struct ConnectionManager<T: Clone> {
    name: &'static str,
    connector: Connector<T>,
    slot: Mutex<Slot<T>>,
    attempts: AtomicU64,
}

impl<T> ConnectionManager<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a manager that calls `connector` whenever a new handle is needed.
    pub fn new<F>(name: &'static str, connector: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, AppResult<T>> + Send + Sync + 'static,
    {
        Self {
            name,
            connector: Box::new(connector),
            slot: Mutex::new(Slot::Disconnected),
            attempts: AtomicU64::new(0),
        }
    }

    /// Current state.
    pub fn state(&self) -> ConnectionState {
        match &*self.lock() {
            Slot::Disconnected => ConnectionState::Disconnected,
            Slot::Connecting { .. } => ConnectionState::Connecting,
            Slot::Connected { .. } => ConnectionState::Connected,
            Slot::Failed => ConnectionState::Failed,
        }
    }

    /// Number of connect attempts started so far.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Return the cached handle, joining or starting a connect if needed.
    ///
    /// Connect failures surface as `StoreUnavailable`.
    pub async fn get(&self) -> AppResult<T> {
        let (attempt, future) = {
            let mut slot = self.lock();
            match &*slot {
                Slot::Connected { handle, .. } => return Ok(handle.clone()),
                Slot::Connecting { attempt, future } => (*attempt, future.clone()),
                Slot::Disconnected | Slot::Failed => {
                    let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!(store = self.name, attempt, "Starting store connect");
                    let future = (self.connector)().shared();
                    *slot = Slot::Connecting {
                        attempt,
                        future: future.clone(),
                    };
                    (attempt, future)
                }
            }
        };

        let result = future.await;

        {
            let mut slot = self.lock();
            let settles = matches!(&*slot, Slot::Connecting { attempt: current, .. } if *current == attempt);
            if settles {
                *slot = match &result {
                    Ok(handle) => {
                        info!(store = self.name, attempt, "Store connection established");
                        Slot::Connected {
                            attempt,
                            handle: handle.clone(),
                        }
                    }
                    Err(e) => {
                        warn!(store = self.name, attempt, error = %e, "Store connect failed");
                        Slot::Failed
                    }
                };
            }
        }

        result.map_err(|e| {
            AppError::store_unavailable(format!("{} is unavailable: {}", self.name, e.message))
        })
    }

    /// Discard a healthy handle so the next use reconnects.
    ///
    /// Has no effect while a connect is in flight.
    pub fn invalidate(&self) {
        let mut slot = self.lock();
        if let Slot::Connected { attempt, .. } = &*slot {
            warn!(
                store = self.name,
                attempt = *attempt,
                "Discarding unhealthy store connection"
            );
            *slot = Slot::Disconnected;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clone> fmt::Debug for ConnectionManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("name", &self.name)
            .field("attempts", &self.attempts.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    use resumehub_core::error::ErrorKind;

    use super::*;

    fn counting_manager(
        calls: Arc<AtomicU64>,
        fail: Arc<AtomicBool>,
    ) -> ConnectionManager<u64> {
        ConnectionManager::new("test store", move || {
            let calls = Arc::clone(&calls);
            let fail = Arc::clone(&fail);
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if fail.load(Ordering::SeqCst) {
                    Err(AppError::internal("connection refused"))
                } else {
                    Ok(n)
                }
            }
            .boxed()
        })
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_connect() {
        let calls = Arc::new(AtomicU64::new(0));
        let manager = Arc::new(counting_manager(
            Arc::clone(&calls),
            Arc::new(AtomicBool::new(false)),
        ));
        assert_eq!(manager.state(), ConnectionState::Disconnected);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let manager = Arc::clone(&manager);
                tokio::spawn(async move { manager.get().await })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.expect("join").expect("connect"), 1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(manager.attempts(), 1);
        assert_eq!(manager.state(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn test_failure_then_retry_on_next_use() {
        let calls = Arc::new(AtomicU64::new(0));
        let fail = Arc::new(AtomicBool::new(true));
        let manager = counting_manager(Arc::clone(&calls), Arc::clone(&fail));

        let err = manager.get().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);
        assert_eq!(manager.state(), ConnectionState::Failed);

        fail.store(false, Ordering::SeqCst);
        assert_eq!(manager.get().await.expect("reconnect"), 2);
        assert_eq!(manager.state(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reconnect() {
        let calls = Arc::new(AtomicU64::new(0));
        let manager = counting_manager(Arc::clone(&calls), Arc::new(AtomicBool::new(false)));

        assert_eq!(manager.get().await.expect("connect"), 1);
        assert_eq!(manager.get().await.expect("cached"), 1);

        manager.invalidate();
        assert_eq!(manager.state(), ConnectionState::Disconnected);

        assert_eq!(manager.get().await.expect("reconnect"), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
