//! Cached REST
//!
//! The server remains the authoritative data source. This layer keeps a
//! signature-keyed response cache with a bounded freshness window, ensures
//! at most one in-flight request per signature, retries transient failures
//! a fixed number of times and tracks the most recent completed request so
//! that a stale response never replaces a newer one for display purposes.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use ironlog_domain as domain;
use tokio::sync::{Mutex, OnceCell};

use crate::rest::{Rest, SendRequest};

const RETRY_ATTEMPTS: u32 = 3;

macro_rules! with_retry {
    ($request:expr) => {{
        let mut attempt = 0;
        loop {
            attempt += 1;
            match $request.await {
                Ok(value) => break Ok(value),
                Err(err) if attempt < RETRY_ATTEMPTS && is_transient(&err) => {
                    log::warn!("retrying request after transient failure: {err}");
                }
                Err(err) => break Err(err),
            }
        }
    }};
}

pub struct CachedRest<S: SendRequest> {
    pub rest: Rest<S>,
    max_age: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
    inflight: Mutex<HashMap<String, InflightRequest>>,
    latest: Mutex<Option<LatestPage>>,
    generation: AtomicU64,
}

type InflightRequest = Arc<OnceCell<Result<domain::ExercisePage, domain::ReadError>>>;

struct CacheEntry {
    page: domain::ExercisePage,
    fetched_at: Instant,
}

struct LatestPage {
    generation: u64,
    page: domain::ExercisePage,
}

impl<S: SendRequest> CachedRest<S> {
    pub fn new(rest: Rest<S>, max_age: Duration) -> Self {
        Self {
            rest,
            max_age,
            entries: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
            latest: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the result of the most recent completed request. Responses of
    /// requests that have been superseded by a newer one are not surfaced
    /// here, even if they resolve later.
    pub async fn latest_exercises(&self) -> Option<domain::ExercisePage> {
        self.latest.lock().await.as_ref().map(|l| l.page.clone())
    }

    async fn cached(&self, signature: &str) -> Option<domain::ExercisePage> {
        let mut entries = self.entries.lock().await;
        match entries.get(signature) {
            Some(entry) if entry.fetched_at.elapsed() < self.max_age => Some(entry.page.clone()),
            Some(_) => {
                entries.remove(signature);
                None
            }
            None => None,
        }
    }

    async fn join_inflight(&self, signature: &str) -> InflightRequest {
        self.inflight
            .lock()
            .await
            .entry(signature.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }

    async fn promote(&self, generation: u64, page: &domain::ExercisePage) {
        let mut latest = self.latest.lock().await;
        if latest.as_ref().is_none_or(|l| generation > l.generation) {
            *latest = Some(LatestPage {
                generation,
                page: page.clone(),
            });
        }
    }
}

impl<S: SendRequest> domain::ExerciseRepository for CachedRest<S> {
    async fn read_exercises(
        &self,
        filter: &domain::ExerciseFilter,
    ) -> Result<domain::ExercisePage, domain::ReadError> {
        let signature = filter.signature();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(page) = self.cached(&signature).await {
            self.promote(generation, &page).await;
            return Ok(page);
        }

        let cell = self.join_inflight(&signature).await;
        let result = cell
            .get_or_init(|| async {
                let result = with_retry!(self.rest.read_exercises(filter));
                self.inflight.lock().await.remove(&signature);
                if let Ok(ref page) = result {
                    self.entries.lock().await.insert(
                        signature.clone(),
                        CacheEntry {
                            page: page.clone(),
                            fetched_at: Instant::now(),
                        },
                    );
                }
                result
            })
            .await
            .clone();

        if let Ok(ref page) = result {
            self.promote(generation, page).await;
        }
        result
    }

    async fn read_exercise(
        &self,
        id: domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        with_retry!(self.rest.read_exercise(id))
    }
}

fn is_transient(err: &domain::ReadError) -> bool {
    matches!(
        err,
        domain::ReadError::Storage(
            domain::StorageError::NoConnection | domain::StorageError::Upstream(_)
        )
    )
}
