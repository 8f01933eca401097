// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[tokio::test]
async fn delete_removes_fines() {
    let mut ctx = TestContext::new();
    ctx.insert_id("a1").insert_id("b2").insert_id("c3");

    run(&ctx.service, &["a1".to_string(), "c".to_string()])
        .await
        .unwrap();

    let ids: Vec<String> = ctx.fines().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["b2"]);
}

#[tokio::test]
async fn delete_with_unknown_id_removes_nothing() {
    let mut ctx = TestContext::new();
    ctx.insert_id("a1");

    let err = run(&ctx.service, &["a1".to_string(), "zz".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FineNotFound(_)));
    assert_eq!(ctx.fines().len(), 1);
}

#[tokio::test]
async fn delete_hybrid_offline_queues() {
    let mut ctx = TestContext::hybrid();
    ctx.remote.set_reachable(false);
    ctx.insert_id("a1");

    run(&ctx.service, &["a1".to_string()]).await.unwrap();

    assert!(ctx.fines().is_empty());
    assert_eq!(ctx.service.pending_count(), 1);
}

#[tokio::test]
async fn delete_fine_still_queued_after_remote_returns() {
    let ctx = TestContext::hybrid();
    ctx.remote.set_reachable(false);
    ctx.service
        .add_fine(crate::storage::test_helpers::make_new_fine("Queued"))
        .await
        .unwrap();
    let id = ctx.fines()[0].id.clone();
    ctx.remote.set_reachable(true);

    run(&ctx.service, &[id]).await.unwrap();

    assert!(ctx.fines().is_empty());
    ctx.service.sync_with_server().await.unwrap();
    assert!(ctx.remote.fines().is_empty());
    assert_eq!(ctx.service.pending_count(), 0);
}
