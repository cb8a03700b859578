//! Lazy classifier acquisition with cooldown guarding
//!
//! Loading a zero-shot model is expensive and can fail when the model
//! backend is unreachable. The provider loads once, caches the live handle
//! for the process lifetime, and after a failed attempt refuses new attempts
//! until the cooldown window has elapsed so concurrent callers cannot
//! thunder-herd the model backend.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use triagescore_core::{Error, Result};

use crate::classifier::ZeroShotClassifier;

/// Default minimum elapsed time between consecutive load attempts.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60);

/// Default bound on a single load attempt. A hung load counts as a failed
/// attempt so the cooldown window can apply.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Time source for cooldown bookkeeping. Injectable so tests can drive the
/// window with a fake clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time source used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The expensive, potentially failing acquisition of a classification
/// capability (model download and initialization).
#[async_trait]
pub trait ClassifierLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn ZeroShotClassifier>>;
}

struct ProviderState {
    handle: Option<Arc<dyn ZeroShotClassifier>>,
    last_attempt: Option<Instant>,
}

/// Owns the at-most-one live classifier handle and the cooldown state.
///
/// One instance per process or service, constructed once and shared by
/// reference. The state mutex is held across the whole
/// check-handle → maybe-load → record-timestamp sequence, so concurrent
/// callers cannot start overlapping load attempts.
pub struct ClassifierProvider {
    loader: Arc<dyn ClassifierLoader>,
    clock: Arc<dyn Clock>,
    cooldown: Duration,
    load_timeout: Duration,
    state: Mutex<ProviderState>,
}

impl ClassifierProvider {
    /// Create a provider with the default cooldown and load timeout.
    pub fn new(loader: Arc<dyn ClassifierLoader>) -> Self {
        Self {
            loader,
            clock: Arc::new(SystemClock),
            cooldown: DEFAULT_COOLDOWN,
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            state: Mutex::new(ProviderState {
                handle: None,
                last_attempt: None,
            }),
        }
    }

    /// Set the cooldown window
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Set the bound on a single load attempt
    pub fn with_load_timeout(mut self, load_timeout: Duration) -> Self {
        self.load_timeout = load_timeout;
        self
    }

    /// Replace the time source (tests)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Lazily acquire the classifier.
    ///
    /// Returns the cached handle if one is live. Otherwise attempts a load
    /// unless a previous attempt happened within the cooldown window, in
    /// which case this fast-fails with `None` and issues no external call.
    /// The attempt timestamp is recorded regardless of outcome, so the
    /// cooldown applies to the next caller after a failure.
    pub async fn acquire(&self) -> Option<Arc<dyn ZeroShotClassifier>> {
        let mut state = self.state.lock().await;

        if let Some(handle) = &state.handle {
            return Some(Arc::clone(handle));
        }

        let now = self.clock.now();
        if let Some(last) = state.last_attempt {
            if now.duration_since(last) <= self.cooldown {
                debug!("classifier load within cooldown window, fast-failing");
                return None;
            }
        }

        state.last_attempt = Some(now);
        match self.try_load().await {
            Ok(handle) => {
                info!(classifier = handle.name(), "classifier loaded");
                state.handle = Some(Arc::clone(&handle));
                Some(handle)
            }
            Err(e) => {
                warn!(error = %e, "classifier load failed, cooldown applies");
                None
            }
        }
    }

    /// Eagerly load the classifier, bypassing the cooldown guard.
    ///
    /// Used by the batch pipeline where a load failure is fatal to the whole
    /// run and must surface as an error rather than a sentinel. The handle
    /// is cached on success like any other load.
    pub async fn load_eager(&self) -> Result<Arc<dyn ZeroShotClassifier>> {
        let mut state = self.state.lock().await;

        if let Some(handle) = &state.handle {
            return Ok(Arc::clone(handle));
        }

        state.last_attempt = Some(self.clock.now());
        let handle = self.try_load().await?;
        info!(classifier = handle.name(), "classifier loaded");
        state.handle = Some(Arc::clone(&handle));
        Ok(handle)
    }

    async fn try_load(&self) -> Result<Arc<dyn ZeroShotClassifier>> {
        match tokio::time::timeout(self.load_timeout, self.loader.load()).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout),
        }
    }
}
