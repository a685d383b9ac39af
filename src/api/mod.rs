//! Remote person API
//!
//! The client for the two REST endpoints this application talks to, behind a
//! small HTTP abstraction so its behavior can be tested against mocked
//! responses.

use thiserror::Error;

pub mod http;
pub mod person;

pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use person::PersonApi;

/// API-related errors
///
/// Network-level failures and application-level rejections collapse into one
/// handling path per operation; callers only decide between "worked" and
/// "didn't".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
