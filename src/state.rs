use crate::config::Config;
use crate::session::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let idle_timeout = chrono::Duration::try_minutes(config.session_idle_minutes)
            .filter(|d| *d > chrono::Duration::zero())
            .unwrap_or_else(|| {
                tracing::warn!(
                    minutes = config.session_idle_minutes,
                    "Session idle timeout out of range, using default"
                );
                chrono::Duration::minutes(Config::default().session_idle_minutes)
            });
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(idle_timeout),
        }
    }
}
