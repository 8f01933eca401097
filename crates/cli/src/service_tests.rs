// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::RemoteConfig;
use crate::storage::test_helpers::{make_fine, make_new_fine};
use crate::storage::MemoryKv;
use crate::sync::test_helpers::{make_synchronizer, FakeRemote};
use finetrack_core::FineStatus;

fn local_service() -> FineService<FakeRemote> {
    FineService::local(RecordStore::new(Arc::new(MemoryKv::new())))
}

fn hybrid_service(remote: FakeRemote) -> FineService<FakeRemote> {
    FineService::hybrid(make_synchronizer(remote))
}

// Local mode

#[tokio::test]
async fn local_add_update_delete_scenario() {
    let service = local_service();
    assert!(service.load_fines().await.unwrap().is_empty());

    let added = service.add_fine(make_new_fine("High Street")).await.unwrap();
    assert_eq!(added.id.len(), 36);
    assert_eq!(added.title, "High Street");
    assert_eq!(added.amount, 60.0);

    let fines = service.load_fines().await.unwrap();
    assert_eq!(fines, vec![added.clone()]);

    let updated = service
        .update_fine(&added.id, FinePatch::status(FineStatus::Paid))
        .await
        .unwrap();
    assert_eq!(updated.status, FineStatus::Paid);
    assert_eq!(updated.title, "High Street");
    assert_eq!(service.get_fine(&added.id).await.unwrap(), updated);

    service.delete_fine(&added.id).await.unwrap();
    assert!(service.load_fines().await.unwrap().is_empty());
}

#[tokio::test]
async fn local_ids_are_unique() {
    let service = local_service();
    let a = service.add_fine(make_new_fine("A")).await.unwrap();
    let b = service.add_fine(make_new_fine("A")).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn local_update_unknown_is_not_found() {
    let service = local_service();
    let err = service
        .update_fine("ghost", FinePatch::status(FineStatus::Paid))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FineNotFound(id) if id == "ghost"));
}

#[tokio::test]
async fn local_delete_unknown_succeeds() {
    let service = local_service();
    service.delete_fine("ghost").await.unwrap();
}

#[tokio::test]
async fn local_mode_reports_offline_and_no_sync() {
    let service = local_service();
    assert_eq!(service.mode(), StorageMode::Local);
    assert!(!service.is_online());
    assert_eq!(service.pending_count(), 0);
    assert!(service.sync_with_server().await.unwrap().is_none());
}

#[tokio::test]
async fn get_unknown_is_not_found() {
    let service = local_service();
    let err = service.get_fine("ghost").await.unwrap_err();
    assert!(matches!(err, Error::FineNotFound(_)));
}

// Remote mode

#[tokio::test]
async fn remote_mode_goes_straight_to_remote() {
    let remote = FakeRemote::new();
    let service = FineService::remote(remote.clone());

    let added = service.add_fine(make_new_fine("A")).await.unwrap();
    assert_eq!(remote.ids(), vec![added.id.clone()]);

    let updated = service
        .update_fine(&added.id, FinePatch::status(FineStatus::Disputed))
        .await
        .unwrap();
    assert_eq!(updated.status, FineStatus::Disputed);

    service.delete_fine(&added.id).await.unwrap();
    assert!(remote.fines().is_empty());
    assert_eq!(service.mode(), StorageMode::Remote);
    assert!(service.sync_with_server().await.unwrap().is_none());
}

#[tokio::test]
async fn remote_mode_update_404_is_not_found() {
    let service = FineService::remote(FakeRemote::new());
    let err = service
        .update_fine("ghost", FinePatch::status(FineStatus::Paid))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FineNotFound(id) if id == "ghost"));
}

#[tokio::test]
async fn remote_mode_delete_404_succeeds() {
    let service = FineService::remote(FakeRemote::new());
    service.delete_fine("ghost").await.unwrap();
}

#[tokio::test]
async fn remote_mode_errors_propagate() {
    let remote = FakeRemote::new();
    remote.set_reachable(false);
    let service = FineService::remote(remote);

    let err = service.load_fines().await.unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
    assert!(!service.is_online());
    assert!(!service.check_connection().await);
}

// Hybrid mode

#[tokio::test]
async fn hybrid_add_offline_then_sync() {
    let remote = FakeRemote::new();
    remote.set_reachable(false);
    let service = hybrid_service(remote.clone());

    let added = service.add_fine(make_new_fine("Offline")).await.unwrap();
    assert!(!service.is_online());
    assert_eq!(service.pending_count(), 1);
    assert_eq!(service.load_fines().await.unwrap(), vec![added.clone()]);

    remote.set_reachable(true);
    let report = service.sync_with_server().await.unwrap().unwrap();

    assert!(report.reachable);
    assert_eq!(report.applied, 1);
    assert_eq!(service.pending_count(), 0);
    assert_eq!(remote.fines(), vec![added.clone()]);
    assert_eq!(service.load_fines().await.unwrap(), vec![added]);
}

#[tokio::test]
async fn hybrid_update_and_delete_online() {
    let remote = FakeRemote::new();
    let service = hybrid_service(remote.clone());

    let added = service.add_fine(make_new_fine("A")).await.unwrap();
    service
        .update_fine(&added.id, FinePatch::status(FineStatus::Paid))
        .await
        .unwrap();
    assert_eq!(remote.fines()[0].status, FineStatus::Paid);

    service.delete_fine(&added.id).await.unwrap();
    assert!(remote.fines().is_empty());
    assert!(service.load_fines().await.unwrap().is_empty());
    assert_eq!(service.pending_count(), 0);
}

#[tokio::test]
async fn hybrid_load_pulls_remote_state() {
    let remote = FakeRemote::with_fines(vec![make_fine("r1")]);
    let service = hybrid_service(remote);

    let fines = service.load_fines().await.unwrap();
    assert_eq!(fines.len(), 1);
    assert!(service.synchronizer().unwrap().store().contains("r1"));
}

#[tokio::test]
async fn hybrid_update_unknown_is_not_found() {
    let remote = FakeRemote::new();
    let service = hybrid_service(remote.clone());
    let err = service
        .update_fine("ghost", FinePatch::status(FineStatus::Paid))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FineNotFound(_)));
    assert_eq!(service.pending_count(), 0);
    assert_eq!(remote.calls(), 0);
}

// Construction from config

#[test]
fn from_config_selects_backend() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKv::new());

    let local = FineService::from_config(&Config::default(), Arc::clone(&kv)).unwrap();
    assert_eq!(local.mode(), StorageMode::Local);

    let remote = Some(RemoteConfig::new("http://127.0.0.1:9"));
    let config = Config::new(StorageMode::Hybrid, remote.clone()).unwrap();
    let hybrid = FineService::from_config(&config, Arc::clone(&kv)).unwrap();
    assert_eq!(hybrid.mode(), StorageMode::Hybrid);
    assert!(hybrid.synchronizer().is_some());

    let config = Config::new(StorageMode::Remote, remote).unwrap();
    let remote_only = FineService::from_config(&config, kv).unwrap();
    assert_eq!(remote_only.mode(), StorageMode::Remote);
    assert!(remote_only.is_online());
}

#[test]
fn from_config_rejects_missing_remote() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKv::new());
    let config = Config {
        mode: StorageMode::Hybrid,
        remote: None,
    };
    assert!(FineService::from_config(&config, kv).is_err());
}
