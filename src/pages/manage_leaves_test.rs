use super::*;
use crate::net::types::{LeaveApplicant, LeaveType};

fn leave_with_status(id: i64, status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id,
        user: LeaveApplicant {
            id: 1,
            username: "carol".to_owned(),
            full_name: "Carol C".to_owned(),
            department: "Sales".to_owned(),
            role: Some("ROLE_USER".to_owned()),
        },
        leave_type: LeaveType {
            id: 2,
            type_name: "Annual Leave".to_owned(),
            max_days: 14,
            description: String::new(),
        },
        start_date: "2026-08-10".to_owned(),
        end_date: "2026-08-12".to_owned(),
        reason: "trip".to_owned(),
        status,
        total_days: 3,
        applied_date: "2026-08-07".to_owned(),
        processed_date: None,
        remarks: None,
    }
}

fn sample_leaves() -> Vec<LeaveRequest> {
    vec![
        leave_with_status(1, LeaveStatus::Pending),
        leave_with_status(2, LeaveStatus::Approved),
        leave_with_status(3, LeaveStatus::Rejected),
        leave_with_status(4, LeaveStatus::Approved),
        leave_with_status(5, LeaveStatus::Cancelled),
    ]
}

// =============================================================
// apply_filter
// =============================================================

#[test]
fn all_filter_keeps_everything() {
    let filtered = apply_filter(LeaveFilter::All, sample_leaves());
    assert_eq!(filtered.len(), 5);
}

#[test]
fn approved_filter_keeps_only_approved() {
    let filtered = apply_filter(LeaveFilter::Approved, sample_leaves());
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|leave| leave.status == LeaveStatus::Approved));
}

#[test]
fn rejected_filter_keeps_only_rejected() {
    let filtered = apply_filter(LeaveFilter::Rejected, sample_leaves());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 3);
}

#[test]
fn pending_filter_passes_the_pending_endpoint_result_through() {
    // The pending tab already fetches only pending requests; filtering the
    // result again must be a no-op.
    let pending = vec![
        leave_with_status(1, LeaveStatus::Pending),
        leave_with_status(6, LeaveStatus::Pending),
    ];
    let filtered = apply_filter(LeaveFilter::Pending, pending.clone());
    assert_eq!(filtered, pending);
}

#[test]
fn cancelled_requests_only_show_under_all() {
    let filtered = apply_filter(LeaveFilter::All, sample_leaves());
    assert!(filtered.iter().any(|leave| leave.status == LeaveStatus::Cancelled));

    for filter in [LeaveFilter::Pending, LeaveFilter::Approved, LeaveFilter::Rejected] {
        let filtered = apply_filter(filter, sample_leaves());
        assert!(filtered.iter().all(|leave| leave.status != LeaveStatus::Cancelled));
    }
}

// =============================================================
// Filter tabs
// =============================================================

#[test]
fn default_tab_is_pending() {
    assert_eq!(LeaveFilter::default(), LeaveFilter::Pending);
}

#[test]
fn tab_labels_match_the_ui() {
    assert_eq!(LeaveFilter::Pending.label(), "Pending");
    assert_eq!(LeaveFilter::All.label(), "All");
}
