//! Per-session history of rendered recommendations.
//!
//! Each session keeps two slots. Recording a new snapshot moves `current`
//! into `previous`, so "show history" always displays the result before the
//! latest one. Sessions are keyed by a random UUID carried in a cookie.
//!
//! Sessions live in process memory for the lifetime of the server. The
//! store holds a bounded number of them and drops the least recently used
//! session to make room for a new one.

use std::sync::atomic::{AtomicU64, Ordering};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

/// A rendered recommendation result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub meals_html: String,
    pub exercises_html: String,
    pub meal_summary: String,
    pub exercise_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    pub current: Option<Snapshot>,
    pub previous: Option<Snapshot>,
    /// Store clock value of the last recording
    last_used: u64,
}

impl SessionHistory {
    fn push(&mut self, snapshot: Snapshot) {
        self.previous = self.current.replace(snapshot);
    }
}

/// Sessions kept before the least recently used one is dropped
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, SessionHistory>,
    max_sessions: usize,
    clock: AtomicU64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding at most `max_sessions` sessions (at least one)
    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_sessions: max_sessions.max(1),
            clock: AtomicU64::new(0),
        }
    }

    /// Store `snapshot` as the session's current result
    pub fn record(&self, session: Uuid, snapshot: Snapshot) {
        if !self.sessions.contains_key(&session) && self.sessions.len() >= self.max_sessions {
            self.evict_least_recent();
        }

        let tick = self.clock.fetch_add(1, Ordering::Relaxed);
        // The entry guard holds the shard lock across the read-modify-write
        let mut history = self.sessions.entry(session).or_default();
        history.push(snapshot);
        history.last_used = tick;
        debug!("Recorded snapshot for session {}", session);
    }

    fn evict_least_recent(&self) {
        // The iterator's shard guards must be released before removing
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().last_used)
            .map(|entry| *entry.key());

        if let Some(session) = oldest {
            self.sessions.remove(&session);
            debug!("Evicted session {}", session);
        }
    }

    /// The result shown before the current one, if any
    pub fn previous(&self, session: Uuid) -> Option<Snapshot> {
        self.sessions.get(&session).and_then(|h| h.previous.clone())
    }

    pub fn current(&self, session: Uuid) -> Option<Snapshot> {
        self.sessions.get(&session).and_then(|h| h.current.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// The session id carried by the `name` cookie, if present and well-formed
pub fn session_from_headers(headers: &HeaderMap, name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to `session`
pub fn session_cookie(name: &str, session: Uuid) -> String {
    format!("{name}={session}; HttpOnly; Path=/; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn snapshot(label: &str) -> Snapshot {
        Snapshot {
            meals_html: format!("<table>{label}</table>"),
            meal_summary: label.to_string(),
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_history_slots() {
        let store = SessionStore::new();
        let session = Uuid::new_v4();

        assert_eq!(store.previous(session), None);

        store.record(session, snapshot("first"));
        assert_eq!(store.current(session), Some(snapshot("first")));
        assert_eq!(store.previous(session), None);

        store.record(session, snapshot("second"));
        store.record(session, snapshot("third"));
        assert_eq!(store.current(session), Some(snapshot("third")));
        assert_eq!(store.previous(session), Some(snapshot("second")));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.record(a, snapshot("a1"));
        store.record(a, snapshot("a2"));
        store.record(b, snapshot("b1"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.previous(a), Some(snapshot("a1")));
        assert_eq!(store.previous(b), None);
    }

    #[test]
    fn test_store_drops_least_recent_session_when_full() {
        let store = SessionStore::with_capacity(2);
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        store.record(a, snapshot("a1"));
        store.record(b, snapshot("b1"));
        // Touch `a` so `b` becomes the least recently used
        store.record(a, snapshot("a2"));
        store.record(c, snapshot("c1"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.current(b), None);
        assert_eq!(store.previous(a), Some(snapshot("a1")));
        assert_eq!(store.current(c), Some(snapshot("c1")));
    }

    #[test]
    fn test_known_session_never_evicts() {
        let store = SessionStore::with_capacity(1);
        let session = Uuid::new_v4();

        store.record(session, snapshot("first"));
        store.record(session, snapshot("second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.previous(session), Some(snapshot("first")));
    }

    #[test]
    fn test_session_from_headers() {
        let session = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; fitrecs_session={session}")).unwrap(),
        );

        assert_eq!(session_from_headers(&headers, "fitrecs_session"), Some(session));
        assert_eq!(session_from_headers(&headers, "other"), None);
    }

    #[test]
    fn test_malformed_session_cookie_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("fitrecs_session=not-a-uuid"));
        assert_eq!(session_from_headers(&headers, "fitrecs_session"), None);
    }

    #[test]
    fn test_session_cookie_format() {
        let session = Uuid::nil();
        assert_eq!(
            session_cookie("fitrecs_session", session),
            "fitrecs_session=00000000-0000-0000-0000-000000000000; HttpOnly; Path=/; SameSite=Lax"
        );
    }
}
