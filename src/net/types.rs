//! Wire DTOs for the leave-portal REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase on the wire) so
//! serde round-trips stay lossless and the page code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Role label for a standard employee.
pub const ROLE_USER: &str = "ROLE_USER";
/// Role label for a manager.
pub const ROLE_MANAGER: &str = "ROLE_MANAGER";
/// Role label for an administrator.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// The authenticated session as returned by `POST /auth/signin`.
///
/// This exact object is what gets persisted to browser storage for the life
/// of the login; a session exists in storage iff the user is authenticated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential attached to every backend call.
    pub token: String,
    /// Token scheme label (e.g. `"Bearer"`).
    #[serde(rename = "type")]
    pub token_type: String,
    /// Numeric account identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Role labels as returned by the backend; non-empty once authenticated.
    pub roles: Vec<String>,
}

/// Body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    /// One of the `ROLE_*` labels.
    pub role: String,
}

/// Body for `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// A configured leave category with its yearly day limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: i64,
    pub type_name: String,
    pub max_days: i32,
    #[serde(default)]
    pub description: String,
}

/// Body for `POST /leave-types`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveType {
    pub type_name: String,
    pub max_days: i32,
    pub description: String,
}

/// An employee's balance against one leave type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub id: i64,
    pub leave_type: LeaveType,
    pub total_days: i32,
    pub used_days: i32,
    pub remaining_days: i32,
}

/// Processing state of a leave request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    /// Wire/display label for the status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// The requesting employee as embedded in a [`LeaveRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicant {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    /// `ROLE_*` label; absent on older records.
    #[serde(default)]
    pub role: Option<String>,
}

/// A submitted leave request with its review state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i64,
    pub user: LeaveApplicant,
    pub leave_type: LeaveType,
    /// Inclusive first day of leave, ISO-8601.
    pub start_date: String,
    /// Inclusive last day of leave, ISO-8601.
    pub end_date: String,
    pub reason: String,
    pub status: LeaveStatus,
    pub total_days: i32,
    /// When the request was submitted, ISO-8601.
    pub applied_date: String,
    /// When the request was approved/rejected, if processed.
    #[serde(default)]
    pub processed_date: Option<String>,
    /// Reviewer remarks recorded at processing time.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Body for `POST /leaves/apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    pub leave_type_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// Body for `PUT /leaves/{id}/process`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessLeaveRequest {
    pub status: LeaveStatus,
    pub remarks: String,
}

/// An employee record as managed on the admin users screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAccount {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub department: String,
    pub role: String,
}

/// Body for `PUT /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

/// Organization-wide counters for the admin dashboard.
///
/// The breakdown maps are keyed by leave-type name and status label; ordered
/// maps keep the rendered rows stable across refreshes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardStats {
    pub total_employees: i64,
    pub pending_leaves: i64,
    pub approved_leaves_today: i64,
    pub rejected_leaves: i64,
    #[serde(default)]
    pub leaves_by_type: BTreeMap<String, i64>,
    #[serde(default)]
    pub leaves_by_status: BTreeMap<String, i64>,
}
