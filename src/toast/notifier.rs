use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};

use crate::toast::queue::{Phase, Toast, ToastQueue, ToastSpec};

const EVENT_CAPACITY: usize = 64;

/// Published on every lifecycle transition so the renderer can follow along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ToastEvent {
    Added { toast: Toast },
    Closing { id: String },
    Removed { id: String },
}

/// Handle to the process-wide toast queue.
///
/// Built once at startup and cloned into whatever needs to raise a toast.
/// Each toast runs its own countdown; once it elapses (or the toast is
/// dismissed) the toast sits in `closing` for `close_delay` so the renderer
/// can animate it out, then it is removed.
#[derive(Clone)]
pub struct Notifier {
    queue: Arc<Mutex<ToastQueue>>,
    events: broadcast::Sender<ToastEvent>,
    default_duration: Duration,
    close_delay: Duration,
}

impl Notifier {
    pub fn new(default_duration: Duration, close_delay: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            queue: Arc::new(Mutex::new(ToastQueue::new())),
            events,
            default_duration,
            close_delay,
        }
    }

    /// Enqueue a toast and start its countdown. Returns the toast id.
    pub async fn notify(&self, spec: ToastSpec) -> String {
        let duration = spec.duration.unwrap_or(self.default_duration);
        let toast = Toast {
            id: uuid::Uuid::now_v7().to_string(),
            title: spec.title,
            description: spec.description,
            variant: spec.variant,
            duration_ms: duration.as_millis() as u64,
            phase: Phase::Visible,
        };
        let id = toast.id.clone();

        self.queue.lock().await.push(toast.clone());
        tracing::debug!("Toast {} raised: {}", id, toast.title);
        let _ = self.events.send(ToastEvent::Added { toast });

        let notifier = self.clone();
        let expiring = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            notifier.dismiss(&expiring).await;
        });

        id
    }

    /// Start closing a toast now, whatever is left of its countdown.
    pub async fn dismiss(&self, id: &str) {
        if !self.queue.lock().await.begin_close(id) {
            return;
        }
        let _ = self.events.send(ToastEvent::Closing { id: id.to_string() });

        let notifier = self.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(notifier.close_delay).await;
            if notifier.queue.lock().await.remove(&id).is_some() {
                tracing::debug!("Toast {} removed", id);
                let _ = notifier.events.send(ToastEvent::Removed { id });
            }
        });
    }

    /// Snapshot of the active queue in enqueue order.
    pub async fn active(&self) -> Vec<Toast> {
        self.queue.lock().await.active().to_vec()
    }

    pub async fn get(&self, id: &str) -> Option<Toast> {
        self.queue.lock().await.get(id).cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.events.subscribe()
    }
}
