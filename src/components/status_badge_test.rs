use super::*;

// =============================================================
// Status colors
// =============================================================

#[test]
fn approved_is_green() {
    assert_eq!(status_color(LeaveStatus::Approved), "#10b981");
}

#[test]
fn rejected_is_red() {
    assert_eq!(status_color(LeaveStatus::Rejected), "#ef4444");
}

#[test]
fn cancelled_is_gray() {
    assert_eq!(status_color(LeaveStatus::Cancelled), "#6b7280");
}

#[test]
fn pending_is_amber() {
    assert_eq!(status_color(LeaveStatus::Pending), "#f59e0b");
}
