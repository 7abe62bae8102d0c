#![allow(clippy::unwrap_used, clippy::expect_used)]

use phonespec_core::errors::CatalogError;
use phonespec_core::logging_facility::test_capture::init_test_capture;
use phonespec_core::types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use phonespec_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert!(
        !capture.events_for(op_name, EVENT_START).is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro_with_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, result_len = 7);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
    assert_eq!(end_events[0].field("result_len"), Some("7"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, CatalogError::IncompleteSelection, duration_ms = 1);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field("err_code"),
        Some("ERR_INCOMPLETE_SELECTION")
    );
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name, query = "pixel");
    log_op_end!(op_name, duration_ms = 3);

    assert_eq!(capture.events_for(op_name, EVENT_START).len(), 1);
    assert_eq!(capture.events_for(op_name, EVENT_END).len(), 1);
    capture.assert_event_exists(op_name, EVENT_END);
}

#[test]
fn test_bool_fields_captured() {
    let capture = init_test_capture();
    let op_name = "test_bool_fields_unique_5";

    log_op_start!(op_name, need_5g = true, min_screen = 6.5);

    let start = &capture.events_for(op_name, EVENT_START)[0];
    assert_eq!(start.field("need_5g"), Some("true"));
    assert_eq!(start.field("min_screen"), Some("6.5"));
}
