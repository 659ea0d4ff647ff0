pub mod notifier;
pub mod queue;

pub use notifier::{Notifier, ToastEvent};
pub use queue::{Phase, Toast, ToastQueue, ToastSpec, Variant};
