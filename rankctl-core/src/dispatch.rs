//! Bulk operation dispatch with re-entrancy protection.
//!
//! A [`DispatchFlag`] is the "operation in flight" boolean. Acquiring it
//! returns an RAII [`DispatchGuard`] so the flag drops back to false on
//! every exit path, including panics inside a spawned task. The
//! [`Dispatcher`] wraps the flag together with an event channel: callers
//! hand it a future, it validates the selection, claims the flag
//! synchronously (so a second keypress is refused immediately), and returns
//! a future for the host to spawn or await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{RankError, Result};

/// Shared "a bulk operation is running" flag.
#[derive(Debug, Clone, Default)]
pub struct DispatchFlag {
    running: Arc<AtomicBool>,
}

impl DispatchFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Claim the flag, or fail with `DispatchBusy` if an operation is
    /// already in flight. The returned guard releases the flag on drop.
    pub fn try_begin(&self, operation: &str) -> Result<DispatchGuard> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RankError::dispatch_busy(operation))?;
        Ok(DispatchGuard {
            running: Arc::clone(&self.running),
        })
    }
}

/// RAII guard for [`DispatchFlag`]. Dropping it marks the operation done.
#[derive(Debug)]
pub struct DispatchGuard {
    running: Arc<AtomicBool>,
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Progress notifications emitted around a bulk operation.
///
/// `Completed` optionally carries a detail string (a tool report, a summary
/// line) for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Started {
        operation: String,
        count: usize,
    },
    Completed {
        operation: String,
        count: usize,
        detail: Option<String>,
    },
    Failed {
        operation: String,
        reason: String,
    },
}

#[cfg(feature = "rt")]
pub use runtime::Dispatcher;

#[cfg(feature = "rt")]
mod runtime {
    use std::future::Future;

    use tokio::sync::mpsc;
    use tracing::{info, warn};

    use super::{DispatchEvent, DispatchFlag};
    use crate::error::{RankError, Result};

    /// Glue between a selection, the dispatch flag, and the event channel.
    ///
    /// `dispatch` does the synchronous half (validation and flag claim) and
    /// hands back the asynchronous half as a future. TUI hosts spawn it;
    /// command-line hosts just await it.
    #[derive(Debug, Clone)]
    pub struct Dispatcher {
        flag: DispatchFlag,
        events: mpsc::UnboundedSender<DispatchEvent>,
    }

    impl Dispatcher {
        pub fn new(events: mpsc::UnboundedSender<DispatchEvent>) -> Self {
            Self {
                flag: DispatchFlag::new(),
                events,
            }
        }

        /// Create a dispatcher along with a receiver for its events.
        pub fn channel() -> (Self, mpsc::UnboundedReceiver<DispatchEvent>) {
            let (tx, rx) = mpsc::unbounded_channel();
            (Self::new(tx), rx)
        }

        pub fn is_running(&self) -> bool {
            self.flag.is_running()
        }

        pub fn flag(&self) -> &DispatchFlag {
            &self.flag
        }

        /// Validate and claim the flag, returning the future that runs the
        /// operation. Fails fast with `EmptySelection` when `count` is zero
        /// and `DispatchBusy` when another operation holds the flag, so the
        /// caller can surface the refusal before anything is spawned.
        pub fn dispatch<F>(
            &self,
            operation: &str,
            count: usize,
            fut: F,
        ) -> Result<impl Future<Output = Result<Option<String>>> + Send + 'static>
        where
            F: Future<Output = Result<Option<String>>> + Send + 'static,
        {
            if count == 0 {
                return Err(RankError::empty_selection(operation));
            }
            let guard = self.flag.try_begin(operation)?;
            let events = self.events.clone();
            let operation = operation.to_string();

            Ok(async move {
                let _guard = guard;
                let _ = events.send(DispatchEvent::Started {
                    operation: operation.clone(),
                    count,
                });
                info!("{} started for {} record(s)", operation, count);

                match fut.await {
                    Ok(detail) => {
                        info!("{} completed", operation);
                        let _ = events.send(DispatchEvent::Completed {
                            operation,
                            count,
                            detail: detail.clone(),
                        });
                        Ok(detail)
                    }
                    Err(err) => {
                        warn!("{} failed: {}", operation, err);
                        let _ = events.send(DispatchEvent::Failed {
                            operation,
                            reason: err.to_string(),
                        });
                        Err(err)
                    }
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_flag_on_drop() {
        let flag = DispatchFlag::new();
        assert!(!flag.is_running());

        {
            let _guard = flag.try_begin("submit").unwrap();
            assert!(flag.is_running());
        }
        assert!(!flag.is_running());
    }

    #[test]
    fn test_try_begin_refuses_reentry() {
        let flag = DispatchFlag::new();
        let _guard = flag.try_begin("submit").unwrap();

        let err = flag.try_begin("submit").unwrap_err();
        assert!(matches!(err, RankError::DispatchBusy { .. }));
    }

    #[cfg(feature = "rt")]
    mod dispatcher {
        use std::time::Duration;

        use super::super::*;
        use crate::error::RankError;

        #[tokio::test]
        async fn test_dispatch_rejects_empty_selection() {
            let (dispatcher, _rx) = Dispatcher::channel();
            let result = dispatcher.dispatch("submit", 0, async { Ok(None) });
            assert!(matches!(
                result.map(|_| ()),
                Err(RankError::EmptySelection { .. })
            ));
            assert!(!dispatcher.is_running());
        }

        #[tokio::test]
        async fn test_dispatch_blocks_while_running() {
            let (dispatcher, _rx) = Dispatcher::channel();

            let fut = dispatcher
                .dispatch("submit", 2, async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(None)
                })
                .unwrap();
            assert!(dispatcher.is_running());

            // Second dispatch refused synchronously while the first holds the flag
            let second = dispatcher.dispatch("submit", 2, async { Ok(None) });
            assert!(matches!(
                second.map(|_| ()),
                Err(RankError::DispatchBusy { .. })
            ));

            let handle = tokio::spawn(fut);
            handle.await.unwrap().unwrap();
            assert!(!dispatcher.is_running());

            // Flag released: a new operation may begin
            let fut = dispatcher.dispatch("submit", 1, async { Ok(None) }).unwrap();
            fut.await.unwrap();
        }

        #[tokio::test]
        async fn test_events_arrive_in_order() {
            let (dispatcher, mut rx) = Dispatcher::channel();

            let fut = dispatcher
                .dispatch("submit", 3, async { Ok(Some("3 submitted".to_string())) })
                .unwrap();
            fut.await.unwrap();

            let started = rx.recv().await.unwrap();
            assert_eq!(
                started,
                DispatchEvent::Started {
                    operation: "submit".into(),
                    count: 3
                }
            );

            let completed = rx.recv().await.unwrap();
            assert_eq!(
                completed,
                DispatchEvent::Completed {
                    operation: "submit".into(),
                    count: 3,
                    detail: Some("3 submitted".into()),
                }
            );
        }

        #[tokio::test]
        async fn test_failure_emits_event_and_releases_flag() {
            let (dispatcher, mut rx) = Dispatcher::channel();

            let fut = dispatcher
                .dispatch("moderate", 1, async {
                    Err(RankError::config("gateway unreachable"))
                })
                .unwrap();
            assert!(fut.await.is_err());
            assert!(!dispatcher.is_running());

            let _started = rx.recv().await.unwrap();
            let failed = rx.recv().await.unwrap();
            assert!(matches!(failed, DispatchEvent::Failed { .. }));
        }
    }
}
