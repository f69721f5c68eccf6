//! Trailing-edge debouncing on the Tokio runtime.
//!
//! A [`Debouncer`] wraps an action and a quiet period. Every call to
//! [`Debouncer::trigger`] pushes the scheduled firing back by the full delay,
//! so a burst of calls collapses into a single execution that receives the
//! arguments of the most recent call. With leading-edge mode enabled the very
//! first trigger also runs the action immediately.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Coalesces bursts of [`trigger`](Self::trigger) calls into one delayed
/// action.
///
/// Timers are Tokio tasks, so `trigger` must be called from within a Tokio
/// runtime. The scheduled-task slot is behind a mutex, but the type is meant
/// for a single writer: interleaving triggers from several threads still
/// debounces correctly, it just makes "the most recent arguments" a race.
pub struct Debouncer<T> {
    action: Action<T>,
    delay: Duration,
    leading: bool,
    /// Last scheduled firing. Stays `Some` after it completes, which is what
    /// limits leading-edge execution to the very first trigger.
    scheduled: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + 'static,
{
    /// Wrap `action` so it runs once `delay` has passed without a new trigger.
    pub fn new<F>(action: F, delay: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            leading: false,
            scheduled: Mutex::new(None),
        }
    }

    /// Also run the action immediately on the first trigger.
    pub fn leading(mut self, enabled: bool) -> Self {
        self.leading = enabled;
        self
    }

    /// Quiet period between the last trigger and the trailing firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any scheduled firing and schedule a new one `delay` from now.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn trigger(&self, args: T) {
        let leading_args = {
            let mut scheduled = self.scheduled.lock();
            let first = match scheduled.take() {
                Some(handle) => {
                    handle.abort();
                    false
                }
                None => true,
            };

            let action = Arc::clone(&self.action);
            let delay = self.delay;
            let trailing_args = args.clone();
            *scheduled = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                action(trailing_args);
            }));

            (first && self.leading).then_some(args)
        };

        // Run outside the lock so the action may trigger again.
        if let Some(args) = leading_args {
            (self.action)(args);
        }
    }

    /// Whether a trailing firing is currently scheduled and not yet run.
    pub fn is_pending(&self) -> bool {
        self.scheduled
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.scheduled.get_mut().take() {
            handle.abort();
        }
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("leading", &self.leading)
            .finish_non_exhaustive()
    }
}
