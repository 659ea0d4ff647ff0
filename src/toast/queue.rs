use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Visible,
    Closing,
}

/// What a caller asks for. Anything left unset falls back to the notifier's
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct ToastSpec {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
    pub duration: Option<Duration>,
}

impl ToastSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = Variant::Destructive;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: Variant,
    pub duration_ms: u64,
    pub phase: Phase,
}

impl Toast {
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Visible
    }
}

/// Active toasts in enqueue order. No eviction: everything stays until it has
/// gone through `closing` and been removed.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: &str) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Move a visible toast to `closing`. Returns false when the toast is
    /// unknown or already closing.
    pub fn begin_close(&mut self, id: &str) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == Phase::Visible => {
                toast.phase = Phase::Closing;
                true
            }
            _ => false,
        }
    }

    /// Drop a closing toast from the queue.
    pub fn remove(&mut self, id: &str) -> Option<Toast> {
        let idx = self
            .toasts
            .iter()
            .position(|t| t.id == id && t.phase == Phase::Closing)?;
        Some(self.toasts.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: &str) -> Toast {
        Toast {
            id: id.to_string(),
            title: format!("toast {}", id),
            description: None,
            variant: Variant::Default,
            duration_ms: 5000,
            phase: Phase::Visible,
        }
    }

    #[test]
    fn push_keeps_enqueue_order() {
        let mut queue = ToastQueue::new();
        queue.push(toast("a"));
        queue.push(toast("b"));
        queue.push(toast("c"));

        let ids: Vec<&str> = queue.active().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn begin_close_only_transitions_once() {
        let mut queue = ToastQueue::new();
        queue.push(toast("a"));

        assert!(queue.begin_close("a"));
        assert!(!queue.begin_close("a"));
        assert!(!queue.get("a").unwrap().is_open());
    }

    #[test]
    fn begin_close_unknown_is_false() {
        let mut queue = ToastQueue::new();
        assert!(!queue.begin_close("missing"));
    }

    #[test]
    fn remove_requires_closing_phase() {
        let mut queue = ToastQueue::new();
        queue.push(toast("a"));

        assert!(queue.remove("a").is_none());
        queue.begin_close("a");
        assert_eq!(queue.remove("a").unwrap().id, "a");
        assert!(queue.active().is_empty());
    }

    #[test]
    fn spec_builder_sets_fields() {
        let spec = ToastSpec::new("Saved")
            .description("All good")
            .destructive()
            .duration(Duration::from_millis(100));

        assert_eq!(spec.title, "Saved");
        assert_eq!(spec.description.as_deref(), Some("All good"));
        assert_eq!(spec.variant, Variant::Destructive);
        assert_eq!(spec.duration, Some(Duration::from_millis(100)));
    }

    #[test]
    fn toast_serializes_lowercase_enums() {
        let json = serde_json::to_value(toast("a")).unwrap();
        assert_eq!(json["variant"], "default");
        assert_eq!(json["phase"], "visible");
        assert!(json.get("description").is_none());
    }
}
