//! REST API helpers for communicating with the faculty backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying an
//! `Authorization: Bearer <token>` header sourced from the injected
//! [`TokenAccessor`]. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Transport and status
//! detail stays inside [`ApiError`] for logging; user-facing messages are
//! generic and chosen by the caller.

#![allow(clippy::unused_async)]

use crate::state::auth::TokenAccessor;

use super::types::{Credentials, FacultyProfile, FilterCriteria, Student, UpdateStudentRequest};
#[cfg(feature = "hydrate")]
use super::types::{DeleteStudentRequest, LoginResponse, StudentListResponse};

/// Failure of a backend call. Never shown to the user verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
fn bearer(tokens: &TokenAccessor) -> String {
    format!("Bearer {}", tokens.token().unwrap_or_default())
}

#[cfg(feature = "hydrate")]
fn check_ok(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

/// Fetch the student list for the given criteria via
/// `POST /api/faculty/getStudents`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_students(
    tokens: &TokenAccessor,
    criteria: &FilterCriteria,
) -> Result<Vec<Student>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/faculty/getStudents")
            .header("Authorization", &bearer(tokens))
            .json(criteria)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_ok(&resp)?;
        let body: StudentListResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.students)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tokens, criteria);
        Err(ApiError::Unavailable)
    }
}

/// Update one student via `PUT /api/faculty/updateStudent`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn update_student(
    tokens: &TokenAccessor,
    request: &UpdateStudentRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/faculty/updateStudent")
            .header("Authorization", &bearer(tokens))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tokens, request);
        Err(ApiError::Unavailable)
    }
}

/// Delete one student via `DELETE /api/faculty/deleteStudent`.
/// The key travels in the request body, matching the backend contract.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn delete_student(tokens: &TokenAccessor, student_usn: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = DeleteStudentRequest { student_usn: student_usn.to_owned() };
        let resp = gloo_net::http::Request::delete("/api/faculty/deleteStudent")
            .header("Authorization", &bearer(tokens))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tokens, student_usn);
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /api/auth/login`; returns the bearer token.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, rejection, or an
/// undecodable body.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_ok(&resp)?;
        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Request a password-reset mail via `POST /api/auth/forgotPassword`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/forgotPassword")
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in faculty member's profile from `/api/faculty/profile`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_profile(tokens: &TokenAccessor) -> Option<FacultyProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/faculty/profile")
            .header("Authorization", &bearer(tokens))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<FacultyProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tokens;
        None
    }
}
