//! Typed REST collaborators for leaves, balances, users, and statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers over the shared request plumbing in [`crate::net::api`];
//! every call attaches the stored session's bearer credential. Pages own all
//! orchestration and error display.

#[cfg(test)]
#[path = "leave_test.rs"]
mod leave_test;

#[cfg(not(feature = "hydrate"))]
use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::api::{self, ApiError};
use crate::net::types::{
    AdminDashboardStats, ApplyLeaveRequest, EmployeeAccount, LeaveBalance, LeaveRequest, LeaveType,
    NewLeaveType, ProcessLeaveRequest, UpdateEmployeeRequest,
};

#[cfg(any(test, feature = "hydrate"))]
fn process_leave_endpoint(id: i64) -> String {
    format!("/leaves/{id}/process")
}

#[cfg(any(test, feature = "hydrate"))]
fn cancel_leave_endpoint(id: i64) -> String {
    format!("/leaves/{id}/cancel")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: i64) -> String {
    format!("/users/{id}")
}

/// Fetch all configured leave types (`GET /leave-types`).
pub async fn fetch_leave_types() -> Result<Vec<LeaveType>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/leave-types").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Create a leave type (`POST /leave-types`). Admin only.
pub async fn create_leave_type(request: &NewLeaveType) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::post_unit("/leave-types", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Fetch the signed-in employee's balances (`GET /leave-balances/my-balances`).
pub async fn fetch_my_balances() -> Result<Vec<LeaveBalance>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/leave-balances/my-balances").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Submit a leave application (`POST /leaves/apply`).
pub async fn apply_leave(request: &ApplyLeaveRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::post_unit("/leaves/apply", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Fetch the signed-in employee's own requests (`GET /leaves/my-leaves`).
pub async fn fetch_my_leaves() -> Result<Vec<LeaveRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/leaves/my-leaves").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch all pending requests (`GET /leaves/pending`). Admin only.
pub async fn fetch_pending_leaves() -> Result<Vec<LeaveRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/leaves/pending").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch every request regardless of status (`GET /leaves`). Admin only.
pub async fn fetch_all_leaves() -> Result<Vec<LeaveRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/leaves").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Approve or reject a request (`PUT /leaves/{id}/process`). Admin only.
pub async fn process_leave(id: i64, request: &ProcessLeaveRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::put_unit(&process_leave_endpoint(id), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, request);
        Err(ApiError::unavailable())
    }
}

/// Cancel one of the caller's own requests (`DELETE /leaves/{id}/cancel`).
pub async fn cancel_leave(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::delete_unit(&cancel_leave_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Fetch organization-wide counters (`GET /statistics/admin-dashboard`). Admin only.
pub async fn fetch_admin_stats() -> Result<AdminDashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/statistics/admin-dashboard").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch all employee records (`GET /users`). Admin only.
pub async fn fetch_users() -> Result<Vec<EmployeeAccount>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::get_json("/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Update an employee record (`PUT /users/{id}`). Admin only.
pub async fn update_user(id: i64, request: &UpdateEmployeeRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::put_unit(&user_endpoint(id), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, request);
        Err(ApiError::unavailable())
    }
}

/// Delete an employee and their leave records (`DELETE /users/{id}`). Admin only.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        api::delete_unit(&user_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}
