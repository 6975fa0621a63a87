//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::sources::{HttpResponse, NewsTransport, TransportError};
use crate::state::{NewsItem, NewsKind};

/// Outcome scripted for one request.
type Scripted = Result<HttpResponse, TransportError>;

/// In-memory transport answering from per-path queues.
///
/// Paths are matched without their query string. When a queue runs dry the
/// path's sticky default (if any) is returned; otherwise the request fails
/// with a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    /// Queued responses keyed by path.
    queues: Mutex<HashMap<String, VecDeque<Scripted>>>,
    /// Responses repeated once a queue is empty.
    defaults: Mutex<HashMap<String, Scripted>>,
    /// Every requested path, query included, in order.
    log: Mutex<Vec<String>>,
    /// Token cancelled when the request count reaches the given number.
    cancel_at: Mutex<Option<(usize, CancellationToken)>>,
}

impl ScriptedTransport {
    /// What: Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Queue a response with the given status and body.
    pub fn push_json(&self, path: &str, status: u16, body: &str) {
        self.push(path, Ok(response(status, body)));
    }

    /// What: Queue a transport-level failure.
    pub fn push_error(&self, path: &str, msg: &str) {
        self.push(path, Err(TransportError(msg.to_string())));
    }

    /// What: Set the response repeated after the queue for `path` is drained.
    pub fn set_default(&self, path: &str, status: u16, body: &str) {
        lock(&self.defaults).insert(path.to_string(), Ok(response(status, body)));
    }

    /// What: Cancel `token` as soon as the `nth` request (1-based) arrives.
    pub fn cancel_on_request(&self, nth: usize, token: CancellationToken) {
        *lock(&self.cancel_at) = Some((nth, token));
    }

    /// What: Snapshot of requested paths so far.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.log).clone()
    }

    /// What: Count requests whose path (without query) equals `path`.
    pub fn count(&self, path: &str) -> usize {
        lock(&self.log)
            .iter()
            .filter(|p| strip_query(p) == path)
            .count()
    }

    fn push(&self, path: &str, item: Scripted) {
        lock(&self.queues)
            .entry(path.to_string())
            .or_default()
            .push_back(item);
    }
}

impl NewsTransport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let n = {
            let mut log = lock(&self.log);
            log.push(path.to_string());
            log.len()
        };
        if let Some((nth, token)) = lock(&self.cancel_at).as_ref()
            && *nth == n
        {
            token.cancel();
        }
        let key = strip_query(path);
        let queued = lock(&self.queues).get_mut(key).and_then(VecDeque::pop_front);
        queued
            .or_else(|| lock(&self.defaults).get(key).cloned())
            .unwrap_or_else(|| Err(TransportError(format!("no scripted response for {key}"))))
    }
}

fn strip_query(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
        correlation_id: None,
    }
}

/// What: Settings with short, test-friendly polling parameters.
///
/// Output:
/// - Defaults with a 2 s poll interval, 10 attempts and a 2 s minimum duration.
pub fn fast_settings() -> Settings {
    Settings {
        poll_interval: std::time::Duration::from_secs(2),
        max_poll_attempts: 10,
        min_refresh_duration: std::time::Duration::from_secs(2),
        ..Settings::default()
    }
}

/// What: Build a news item with a title and kind.
pub fn news(title: &str, kind: NewsKind) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        kind,
        bullets: Vec::new(),
        why_it_matters: None,
        url: None,
    }
}
