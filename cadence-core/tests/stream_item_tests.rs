// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::{CadenceError, StreamItem};

#[test]
fn test_stream_item_value_creation() {
    let item: StreamItem<i32> = StreamItem::Value(42);
    assert!(item.is_value());
    assert!(!item.is_error());
}

#[test]
fn test_stream_item_error_creation() {
    let item: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("test error"));
    assert!(!item.is_value());
    assert!(item.is_error());
}

#[test]
fn test_stream_item_ok_extracts_value() {
    let item = StreamItem::Value(42);
    assert_eq!(item.ok(), Some(42));
}

#[test]
fn test_stream_item_ok_discards_error() {
    let item: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("test"));
    assert_eq!(item.ok(), None);
}

#[test]
fn test_stream_item_err_extracts_error() {
    let item: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("test error"));
    assert!(item.err().is_some());
}

#[test]
fn test_stream_item_err_discards_value() {
    let item = StreamItem::Value(42);
    assert!(item.err().is_none());
}

#[test]
fn test_stream_item_map_transforms_value() {
    let item = StreamItem::Value(5);
    let mapped = item.map(|x| x * 2);
    assert_eq!(mapped.ok(), Some(10));
}

#[test]
fn test_stream_item_map_propagates_error() {
    let item: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("test"));
    let mapped = item.map(|x| x * 2);
    assert!(mapped.is_error());
}

#[test]
fn test_stream_item_and_then_chains() {
    let item = StreamItem::Value(5);
    let chained = item.and_then(|x| StreamItem::Value(x + 1));
    assert_eq!(chained.ok(), Some(6));
}

#[test]
fn test_stream_item_and_then_can_fail() {
    let item = StreamItem::Value(5);
    let chained: StreamItem<i32> =
        item.and_then(|_| StreamItem::Error(CadenceError::stream_error("rejected")));
    assert!(chained.is_error());
}

#[test]
fn test_stream_item_errors_are_never_equal() {
    let a: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("same"));
    let b: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("same"));
    assert_ne!(a, b);
}

#[test]
fn test_stream_item_from_result_round_trip() {
    let ok: StreamItem<i32> = Ok(7).into();
    assert_eq!(ok.clone().ok(), Some(7));

    let back: Result<i32, CadenceError> = ok.into();
    assert_eq!(back.unwrap(), 7);

    let err: StreamItem<i32> = Err(CadenceError::stream_error("boom")).into();
    let back: Result<i32, CadenceError> = err.into();
    assert!(back.is_err());
}

#[test]
#[should_panic(expected = "called `StreamItem::unwrap()` on an `Error` value")]
fn test_stream_item_unwrap_panics_on_error() {
    let item: StreamItem<i32> = StreamItem::Error(CadenceError::stream_error("boom"));
    let _ = item.unwrap();
}
