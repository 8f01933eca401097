// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use finetrack_core::{Fine, FinePatch};

use super::remote::{Remote, RemoteError, RemoteFuture, RemoteResult};
use crate::storage::{MemoryKv, PendingQueue, RecordStore};
use crate::sync::Synchronizer;

/// In-memory stand-in for the remote fine service.
///
/// Clones share state, so a test can keep a handle after moving one into
/// a synchronizer.
#[derive(Clone, Default)]
pub struct FakeRemote {
    inner: Arc<FakeState>,
}

#[derive(Default)]
struct FakeState {
    fines: Mutex<Vec<Fine>>,
    unreachable: AtomicBool,
    failing_ids: Mutex<HashSet<String>>,
    fail_loads: AtomicBool,
    calls: AtomicUsize,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fines(fines: Vec<Fine>) -> Self {
        let remote = Self::new();
        *remote.inner.fines.lock().unwrap() = fines;
        remote
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.inner.unreachable.store(!reachable, Ordering::SeqCst);
    }

    /// Make every mutation of `id` answer with a 500.
    pub fn fail_id(&self, id: &str) {
        self.inner.failing_ids.lock().unwrap().insert(id.to_string());
    }

    pub fn clear_failures(&self) {
        self.inner.failing_ids.lock().unwrap().clear();
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.inner.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn fines(&self) -> Vec<Fine> {
        self.inner.fines.lock().unwrap().clone()
    }

    pub fn ids(&self) -> Vec<String> {
        self.fines().into_iter().map(|f| f.id).collect()
    }

    /// Number of requests that reached the fake.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    fn begin(&self, id: Option<&str>) -> RemoteResult<()> {
        if self.inner.unreachable.load(Ordering::SeqCst) {
            return Err(RemoteError::Connect {
                url: "http://fake".to_string(),
                reason: "connection refused".to_string(),
            });
        }
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(id) = id {
            if self.inner.failing_ids.lock().unwrap().contains(id) {
                return Err(status(500, id));
            }
        }
        Ok(())
    }
}

fn status(status: u16, id: &str) -> RemoteError {
    RemoteError::Status {
        status,
        url: format!("http://fake/fines/{}", id),
    }
}

impl Remote for FakeRemote {
    fn load_fines(&self) -> RemoteFuture<'_, Vec<Fine>> {
        Box::pin(async move {
            self.begin(None)?;
            if self.inner.fail_loads.load(Ordering::SeqCst) {
                return Err(status(503, ""));
            }
            Ok(self.fines())
        })
    }

    fn add_fine<'a>(&'a self, fine: &'a Fine) -> RemoteFuture<'a, Fine> {
        Box::pin(async move {
            self.begin(Some(&fine.id))?;
            let mut fines = self.inner.fines.lock().unwrap();
            if fines.iter().any(|f| f.id == fine.id) {
                return Err(status(409, &fine.id));
            }
            fines.push(fine.clone());
            Ok(fine.clone())
        })
    }

    fn update_fine<'a>(&'a self, id: &'a str, updates: &'a FinePatch) -> RemoteFuture<'a, Fine> {
        Box::pin(async move {
            self.begin(Some(id))?;
            let mut fines = self.inner.fines.lock().unwrap();
            let fine = fines
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| status(404, id))?;
            updates.apply(fine);
            Ok(fine.clone())
        })
    }

    fn delete_fine<'a>(&'a self, id: &'a str) -> RemoteFuture<'a, ()> {
        Box::pin(async move {
            self.begin(Some(id))?;
            let mut fines = self.inner.fines.lock().unwrap();
            let before = fines.len();
            fines.retain(|f| f.id != id);
            if fines.len() == before {
                return Err(status(404, id));
            }
            Ok(())
        })
    }

    fn is_reachable(&self) -> bool {
        !self.inner.unreachable.load(Ordering::SeqCst)
    }

    fn probe(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        Box::pin(async move { self.is_reachable() })
    }
}

/// A synchronizer over memory storage, returning a handle to its remote.
pub fn make_synchronizer(remote: FakeRemote) -> Synchronizer<FakeRemote> {
    let kv = Arc::new(MemoryKv::new());
    let queue = PendingQueue::open(kv.clone()).unwrap();
    Synchronizer::new(RecordStore::new(kv), queue, remote)
}
