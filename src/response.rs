//! # HTTP Responses
//!
//! Handlers build an [`ApiResponse`] instead of a `worker::Response` so the
//! routing logic stays independent of the JavaScript runtime. The entry point
//! converts it with [`ApiResponse::into_worker`].

use http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use worker::Response;

use crate::errors::AppResult;

pub const NOT_FOUND_BODY: &str = "Not Found";

#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(&'static str),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: ResponseBody,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> AppResult<Self> {
        Ok(Self {
            status,
            body: ResponseBody::Json(serde_json::to_value(value)?),
        })
    }

    /// JSON error body of the form `{"error": ..., "details": ...}`.
    pub fn error(status: StatusCode, error: &str, details: String) -> Self {
        Self {
            status,
            body: ResponseBody::Json(json!({ "error": error, "details": details })),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ResponseBody::Text(NOT_FOUND_BODY),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: ResponseBody::Empty,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    pub fn into_worker(self) -> worker::Result<Response> {
        let status = self.status.as_u16();
        let response = match self.body {
            ResponseBody::Json(value) => Response::from_json(&value)?,
            ResponseBody::Text(text) => Response::ok(text)?,
            ResponseBody::Empty => Response::empty()?,
        };
        Ok(response.with_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_has_error_and_details() {
        let response = ApiResponse::error(
            StatusCode::BAD_REQUEST,
            "Invalid request",
            "expected value".to_string(),
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body(),
            &ResponseBody::Json(json!({"error": "Invalid request", "details": "expected value"}))
        );
    }

    #[test]
    fn not_found_is_plain_text() {
        let response = ApiResponse::not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), &ResponseBody::Text("Not Found"));
    }
}
