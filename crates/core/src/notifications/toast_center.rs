use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::{Toast, ToastKind};
use crate::constants::TOAST_TTL;

#[derive(Default)]
struct ToastState {
    toasts: Vec<Toast>,
    timers: HashMap<String, JoinHandle<()>>,
}

fn lock_state(state: &Mutex<ToastState>) -> MutexGuard<'_, ToastState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps the active toasts and expires each one after a fixed time.
///
/// Every toast owns one timer task. Dismissing a toast aborts its timer;
/// timers only hold a weak reference to the state, so dropping the center
/// ends them as well.
pub struct ToastCenter {
    state: Arc<Mutex<ToastState>>,
    ttl: Duration,
}

impl ToastCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastState::default())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Shows a new toast and returns it.
    ///
    /// Outside a Tokio runtime no timer can be armed and the toast stays
    /// until dismissed.
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> Toast {
        let toast = Toast::new(kind, message);
        let mut state = lock_state(&self.state);
        state.toasts.push(toast.clone());

        match Handle::try_current() {
            Ok(runtime) => {
                let timer = runtime.spawn(expire(
                    Arc::downgrade(&self.state),
                    toast.id.clone(),
                    self.ttl,
                ));
                state.timers.insert(toast.id.clone(), timer);
            }
            Err(_) => debug!("No runtime available, toast {} will not expire", toast.id),
        }

        toast
    }

    /// Removes a toast before its timer fires. Returns false if it was
    /// already gone.
    pub fn dismiss(&self, id: &str) -> bool {
        let mut state = lock_state(&self.state);
        if let Some(timer) = state.timers.remove(id) {
            timer.abort();
        }
        let before = state.toasts.len();
        state.toasts.retain(|t| t.id != id);
        state.toasts.len() != before
    }

    /// Active toasts, oldest first.
    pub fn list(&self) -> Vec<Toast> {
        lock_state(&self.state).toasts.clone()
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(TOAST_TTL)
    }
}

impl Drop for ToastCenter {
    fn drop(&mut self) {
        for (_, timer) in lock_state(&self.state).timers.drain() {
            timer.abort();
        }
    }
}

async fn expire(state: Weak<Mutex<ToastState>>, id: String, ttl: Duration) {
    tokio::time::sleep(ttl).await;
    if let Some(state) = state.upgrade() {
        let mut state = lock_state(&state);
        state.timers.remove(&id);
        state.toasts.retain(|t| t.id != id);
        debug!("Toast {} expired", id);
    }
}
