use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn process_leave_endpoint_formats_expected_path() {
    assert_eq!(process_leave_endpoint(12), "/leaves/12/process");
}

#[test]
fn cancel_leave_endpoint_formats_expected_path() {
    assert_eq!(cancel_leave_endpoint(5), "/leaves/5/cancel");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(42), "/users/42");
}
