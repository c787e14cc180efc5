//! Interval subscriptions - timers that keep emitting actions
//!
//! Two are registered at startup: the animation tick and the weather
//! refresh. The refresh fires immediately and then on every interval; it is
//! only stopped when the app shuts down.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::action::Action;

/// Identifies a subscription.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SubKey {
    Tick,
    Refresh,
}

pub struct Subscriptions {
    handles: HashMap<SubKey, JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Subscriptions {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            handles: HashMap::new(),
            action_tx,
        }
    }

    /// Emit `action_fn()` every `duration`, starting after the first period.
    pub fn interval<F>(&mut self, key: SubKey, duration: Duration, action_fn: F) -> &mut Self
    where
        F: Fn() -> Action + Send + 'static,
    {
        self.spawn_interval(key, duration, false, action_fn)
    }

    /// Emit `action_fn()` right away, then every `duration`.
    pub fn interval_immediate<F>(
        &mut self,
        key: SubKey,
        duration: Duration,
        action_fn: F,
    ) -> &mut Self
    where
        F: Fn() -> Action + Send + 'static,
    {
        self.spawn_interval(key, duration, true, action_fn)
    }

    fn spawn_interval<F>(
        &mut self,
        key: SubKey,
        duration: Duration,
        immediate: bool,
        action_fn: F,
    ) -> &mut Self
    where
        F: Fn() -> Action + Send + 'static,
    {
        self.cancel(key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(duration);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            if !immediate {
                // The first tick completes immediately
                interval.tick().await;
            }

            loop {
                interval.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });

        self.handles.insert(key, handle);
        self
    }

    pub fn cancel(&mut self, key: SubKey) {
        if let Some(handle) = self.handles.remove(&key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_active(&self, key: SubKey) -> bool {
        self.handles.contains_key(&key)
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
