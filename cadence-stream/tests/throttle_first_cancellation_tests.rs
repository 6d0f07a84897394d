// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::StreamItem;
use cadence_stream::prelude::*;
use cadence_test_utils::{
    test_channel,
    test_data::{person_alice, person_bob},
    unwrap_stream,
    TestData,
};
use std::time::Duration;
use tokio::time::pause;

#[tokio::test]
async fn test_drop_mid_window_disposes_source_and_gate() -> anyhow::Result<()> {
    // Arrange
    pause();

    let (gate_tx, gate_rx) = tokio::sync::mpsc::unbounded_channel::<StreamItem<()>>();
    let mut gates = vec![tokio_stream::wrappers::UnboundedReceiverStream::new(gate_rx)].into_iter();

    let (tx, source) = test_channel::<TestData>();
    let mut throttled =
        source.throttle_first_with(move |_item: &TestData| gates.next().expect("one gate"));

    tx.send(person_alice())?;
    assert_eq!(unwrap_stream(&mut throttled).await?, person_alice());

    // Act: abandon the operator while the window is still open
    drop(throttled);

    // Assert: both upstream subscriptions are gone
    assert!(tx.send(person_bob()).is_err());
    assert!(gate_tx.send(StreamItem::Value(())).is_err());

    Ok(())
}

#[tokio::test]
async fn test_drop_while_idle_disposes_source() -> anyhow::Result<()> {
    // Arrange
    pause();

    let (tx, source) = test_channel::<TestData>();
    let throttled = source.throttle_first(Duration::from_secs(1));

    // Act
    drop(throttled);

    // Assert
    assert!(tx.send(person_alice()).is_err());

    Ok(())
}

#[tokio::test]
async fn test_items_sent_before_drop_are_not_observed_elsewhere() -> anyhow::Result<()> {
    // Suppressed and queued notifications die with the operator; nothing
    // leaks once downstream walks away.
    pause();

    let (tx, source) = test_channel::<TestData>();
    let mut throttled = source.throttle_first(Duration::from_secs(1));

    tx.send(person_alice())?;
    tx.send(person_bob())?;
    assert_eq!(unwrap_stream(&mut throttled).await?, person_alice());

    drop(throttled);
    assert!(tx.send(person_bob()).is_err());

    Ok(())
}
