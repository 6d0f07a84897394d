// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_runtime::{timer_stream, TokioTimer};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{advance, pause, timeout};

#[tokio::test]
async fn test_timer_stream_completes_after_duration() -> anyhow::Result<()> {
    // Arrange
    pause();
    let mut stream = Box::pin(timer_stream(&TokioTimer, Duration::from_millis(150)));

    // Act & Assert: nothing before the deadline
    let pending = timeout(Duration::from_millis(0), stream.next()).await;
    assert!(pending.is_err(), "timer must not fire before its deadline");

    advance(Duration::from_millis(150)).await;
    assert!(stream.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_timer_stream_never_yields_an_item() -> anyhow::Result<()> {
    pause();
    let mut stream = Box::pin(timer_stream(&TokioTimer, Duration::from_millis(10)));

    advance(Duration::from_millis(10)).await;

    // The first notification is completion, not a value.
    assert!(stream.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_timer_stream_zero_duration_completes_immediately() -> anyhow::Result<()> {
    pause();
    let mut stream = Box::pin(timer_stream(&TokioTimer, Duration::from_millis(0)));

    assert!(stream.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_timer_stream_is_fused_after_completion() -> anyhow::Result<()> {
    pause();
    let mut stream = Box::pin(timer_stream(&TokioTimer, Duration::from_millis(5)));

    advance(Duration::from_millis(5)).await;
    assert!(stream.next().await.is_none());
    assert!(stream.next().await.is_none());
    Ok(())
}
