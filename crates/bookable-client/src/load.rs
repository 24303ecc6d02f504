//! Page Load Cycle
//!
//! Every page load is `Loading` → `Loaded` | `Failed`. A trigger (mount or
//! route-parameter change) takes a ticket from the cycle's generation
//! counter; the outcome is committed only while that ticket is current.
//! Superseded loads and loads outliving their page are dropped. Once a
//! cycle is cancelled no ticket it hands out is ever current again.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<ApiResult<T>> for LoadState<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(e.message().to_string()),
        }
    }
}

/// Generation token captured when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Generation counter shared by all loads of one page instance
#[derive(Debug, Clone, Default)]
pub struct LoadCycle {
    generation: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

impl LoadCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any in flight
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate every outstanding and future ticket (page unmounted)
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.is_cancelled() && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Take a ticket now and drive the load with it.
    pub async fn run<T, F, C>(&self, load: F, commit: C) -> bool
    where
        F: Future<Output = ApiResult<T>>,
        C: FnMut(LoadState<T>),
    {
        let ticket = self.begin();
        self.run_with(ticket, load, commit).await
    }

    /// Drive one load under a ticket taken when it was triggered: commit
    /// `Loading`, await, then commit the outcome if the ticket is still
    /// current. Returns whether the outcome was committed.
    pub async fn run_with<T, F, C>(&self, ticket: LoadTicket, load: F, mut commit: C) -> bool
    where
        F: Future<Output = ApiResult<T>>,
        C: FnMut(LoadState<T>),
    {
        if !self.is_current(ticket) {
            log::debug!("[LOAD] ticket {} invalidated before start", ticket.0);
            return false;
        }
        commit(LoadState::Loading);

        let outcome = load.await;
        if !self.is_current(ticket) {
            log::debug!("[LOAD] dropping stale result (ticket {})", ticket.0);
            return false;
        }
        if let Err(e) = &outcome {
            log::warn!("[LOAD] load failed: {}", e);
        }
        commit(outcome.into());
        true
    }
}
