//! Analyzer session state.
//!
//! Each browser session owns one [`AnalyzerState`]. States are immutable
//! values: a successful submit builds a new state with both the metrics and
//! the series replaced, and swaps it in under the store lock. A rejected
//! submit leaves the held state exactly as it was.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tower_cookies::{Cookie, Cookies};
use tracing::debug;
use uuid::Uuid;

use crate::config::AnalyzerConfig;
use crate::error::InvalidInputError;
use crate::models::{CashFlowSeries, InsightSet, RawInput};
use crate::services::{cash_flow, insights};

/// Cookie name for the analyzer session id.
pub const SESSION_COOKIE: &str = "analyzer_session";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerState {
    pub metrics: InsightSet,
    pub series: CashFlowSeries,
}

impl AnalyzerState {
    /// Placeholder metrics and the seeded six-period series.
    pub fn initial() -> Self {
        Self {
            metrics: InsightSet::placeholder(),
            series: CashFlowSeries::seeded(),
        }
    }

    /// Analyze `raw` and return the next state. `self` is never modified.
    pub fn submit(
        &self,
        raw: &RawInput,
        config: &AnalyzerConfig,
    ) -> Result<AnalyzerState, InvalidInputError> {
        let (input, metrics) = insights::analyze(raw, config)?;
        Ok(AnalyzerState {
            metrics,
            series: cash_flow::fold_input(&self.series, &input),
        })
    }
}

impl Default for AnalyzerState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Holds the current state of one analyzer view.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerSession {
    state: AnalyzerState,
}

impl AnalyzerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    /// Replace the held state on success; keep it untouched on error.
    pub fn submit(
        &mut self,
        raw: &RawInput,
        config: &AnalyzerConfig,
    ) -> Result<&AnalyzerState, InvalidInputError> {
        self.state = self.state.submit(raw, config)?;
        Ok(&self.state)
    }

    pub fn reset(&mut self) -> &AnalyzerState {
        self.state = AnalyzerState::initial();
        &self.state
    }
}

struct SessionEntry {
    session: AnalyzerSession,
    last_seen: DateTime<Utc>,
}

/// In-memory analyzer sessions keyed by cookie id.
///
/// One mutex guards the whole map, so submits are applied one at a time.
/// Nothing is persisted; idle sessions are dropped on the next access.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Current state for `id`, creating the session if needed.
    pub fn current(&self, id: &str) -> AnalyzerState {
        self.with_session(id, Utc::now(), |session| session.state().clone())
    }

    /// Submit to the session `id`. On error the session keeps its state and
    /// the error is returned together with that unchanged state.
    pub fn submit(
        &self,
        id: &str,
        raw: &RawInput,
        config: &AnalyzerConfig,
    ) -> Result<AnalyzerState, (InvalidInputError, AnalyzerState)> {
        self.with_session(id, Utc::now(), |session| {
            let result = session.submit(raw, config).cloned();
            result.map_err(|e| {
                debug!(session = id, error = %e, "Rejected analyzer input");
                (e, session.state().clone())
            })
        })
    }

    pub fn reset(&self, id: &str) -> AnalyzerState {
        self.with_session(id, Utc::now(), |session| session.reset().clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop sessions last seen more than the idle timeout before `now`.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        // A timeout reaching past the earliest representable time evicts nothing.
        let Some(cutoff) = now.checked_sub_signed(self.idle_timeout) else {
            return 0;
        };
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    fn with_session<T>(
        &self,
        id: &str,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut AnalyzerSession) -> T,
    ) -> T {
        self.evict_idle(now);
        let mut sessions = self.lock();
        let entry = sessions
            .entry(id.to_string())
            .or_insert_with(|| SessionEntry {
                session: AnalyzerSession::new(),
                last_seen: now,
            });
        entry.last_seen = now;
        f(&mut entry.session)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Read the session id from the cookie jar, issuing a new one if absent.
pub fn session_id(cookies: &Cookies) -> String {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        return cookie.value().to_string();
    }

    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(tower_cookies::cookie::SameSite::Strict)
        .build();
    cookies.add(cookie);
    id
}
