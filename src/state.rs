use std::sync::Arc;

use crate::config::Config;
use crate::feed::{Feeds, MockPostSource, PostSource};
use crate::toast::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub feeds: Feeds,
    pub source: Arc<dyn PostSource>,
    pub toasts: Notifier,
}

impl AppState {
    /// Wire up the mock backend and the toast notifier from `config`.
    pub fn new(config: Config) -> Self {
        let source = Arc::new(MockPostSource::new(config.load_delay()));
        Self::with_source(config, source)
    }

    pub fn with_source(config: Config, source: Arc<dyn PostSource>) -> Self {
        let toasts = Notifier::new(config.toast_duration(), config.toast_close_delay());
        Self {
            config,
            feeds: Feeds::new(),
            source,
            toasts,
        }
    }
}
