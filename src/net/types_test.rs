use super::*;

// =============================================================
// Session wire format
// =============================================================

#[test]
fn session_deserializes_signin_response() {
    let raw = concat!(
        r#"{"token":"abc123","type":"Bearer","id":1,"#,
        r#""username":"alice","email":"a@x.com","roles":["ROLE_ADMIN"]}"#,
    );
    let session: Session = serde_json::from_str(raw).expect("parses");
    assert_eq!(session.token, "abc123");
    assert_eq!(session.token_type, "Bearer");
    assert_eq!(session.id, 1);
    assert_eq!(session.username, "alice");
    assert_eq!(session.email, "a@x.com");
    assert_eq!(session.roles, vec!["ROLE_ADMIN".to_owned()]);
}

#[test]
fn session_serializes_type_field_name() {
    let session = Session {
        token: "t".to_owned(),
        token_type: "Bearer".to_owned(),
        id: 7,
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        roles: vec!["ROLE_USER".to_owned()],
    };
    let value = serde_json::to_value(&session).expect("serializes");
    assert_eq!(value["type"], "Bearer");
    assert!(value.get("token_type").is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn signup_request_uses_camel_case_field_names() {
    let request = SignupRequest {
        username: "alice".to_owned(),
        full_name: "Alice Example".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret".to_owned(),
        department: "Engineering".to_owned(),
        role: ROLE_USER.to_owned(),
    };
    let value = serde_json::to_value(&request).expect("serializes");
    assert_eq!(value["fullName"], "Alice Example");
    assert_eq!(value["department"], "Engineering");
}

#[test]
fn apply_leave_request_uses_camel_case_field_names() {
    let request = ApplyLeaveRequest {
        leave_type_id: 3,
        start_date: "2026-08-10".to_owned(),
        end_date: "2026-08-12".to_owned(),
        reason: "trip".to_owned(),
    };
    let value = serde_json::to_value(&request).expect("serializes");
    assert_eq!(value["leaveTypeId"], 3);
    assert_eq!(value["startDate"], "2026-08-10");
}

#[test]
fn process_request_serializes_status_label() {
    let request = ProcessLeaveRequest {
        status: LeaveStatus::Approved,
        remarks: "ok".to_owned(),
    };
    let value = serde_json::to_value(&request).expect("serializes");
    assert_eq!(value["status"], "APPROVED");
}

// =============================================================
// LeaveStatus
// =============================================================

#[test]
fn leave_status_round_trips_wire_labels() {
    for (status, label) in [
        (LeaveStatus::Pending, "\"PENDING\""),
        (LeaveStatus::Approved, "\"APPROVED\""),
        (LeaveStatus::Rejected, "\"REJECTED\""),
        (LeaveStatus::Cancelled, "\"CANCELLED\""),
    ] {
        assert_eq!(serde_json::to_string(&status).expect("serializes"), label);
        let parsed: LeaveStatus = serde_json::from_str(label).expect("parses");
        assert_eq!(parsed, status);
    }
}

#[test]
fn leave_status_label_matches_wire_form() {
    assert_eq!(LeaveStatus::Pending.label(), "PENDING");
    assert_eq!(LeaveStatus::Cancelled.label(), "CANCELLED");
}

// =============================================================
// Leave records
// =============================================================

#[test]
fn leave_request_parses_backend_payload() {
    let raw = r#"{
        "id": 12,
        "user": {"id": 4, "username": "carol", "fullName": "Carol C", "department": "Sales", "role": "ROLE_USER"},
        "leaveType": {"id": 2, "typeName": "Annual Leave", "maxDays": 14, "description": "Paid time off"},
        "startDate": "2026-08-10",
        "endDate": "2026-08-12",
        "reason": "family visit",
        "status": "PENDING",
        "totalDays": 3,
        "appliedDate": "2026-08-07T08:00:00"
    }"#;
    let leave: LeaveRequest = serde_json::from_str(raw).expect("parses");
    assert_eq!(leave.user.full_name, "Carol C");
    assert_eq!(leave.leave_type.type_name, "Annual Leave");
    assert_eq!(leave.status, LeaveStatus::Pending);
    assert_eq!(leave.processed_date, None);
    assert_eq!(leave.remarks, None);
}

#[test]
fn leave_applicant_role_may_be_absent() {
    let raw = r#"{"id": 4, "username": "carol", "fullName": "Carol C"}"#;
    let applicant: LeaveApplicant = serde_json::from_str(raw).expect("parses");
    assert_eq!(applicant.role, None);
    assert_eq!(applicant.department, "");
}

#[test]
fn leave_balance_parses_camel_case_fields() {
    let raw = r#"{
        "id": 1,
        "leaveType": {"id": 2, "typeName": "Sick Leave", "maxDays": 10, "description": ""},
        "totalDays": 10,
        "usedDays": 4,
        "remainingDays": 6
    }"#;
    let balance: LeaveBalance = serde_json::from_str(raw).expect("parses");
    assert_eq!(balance.used_days, 4);
    assert_eq!(balance.remaining_days, 6);
}

// =============================================================
// Admin stats
// =============================================================

#[test]
fn admin_stats_parse_breakdown_maps() {
    let raw = r#"{
        "totalEmployees": 25,
        "pendingLeaves": 3,
        "approvedLeavesToday": 1,
        "rejectedLeaves": 2,
        "leavesByType": {"Annual Leave": 9, "Sick Leave": 4},
        "leavesByStatus": {"APPROVED": 10, "PENDING": 3}
    }"#;
    let stats: AdminDashboardStats = serde_json::from_str(raw).expect("parses");
    assert_eq!(stats.total_employees, 25);
    assert_eq!(stats.leaves_by_type.get("Annual Leave"), Some(&9));
    assert_eq!(stats.leaves_by_status.get("PENDING"), Some(&3));
}

#[test]
fn admin_stats_breakdowns_default_to_empty() {
    let raw = r#"{
        "totalEmployees": 0,
        "pendingLeaves": 0,
        "approvedLeavesToday": 0,
        "rejectedLeaves": 0
    }"#;
    let stats: AdminDashboardStats = serde_json::from_str(raw).expect("parses");
    assert!(stats.leaves_by_type.is_empty());
    assert!(stats.leaves_by_status.is_empty());
}
