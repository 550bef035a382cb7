// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT

//! The fault descriptor carried by [`DataResult::Error`](crate::DataResult::Error).

use crate::error::{Error, ErrorBodyErrorType};
use crate::result::Result;
use serde_derive::Deserialize;
use std::fmt;

/// Code used when the producer of a fault has nothing more specific.
pub const UNKNOWN_CODE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiExceptionKind {
    /// The remote endpoint answered with a non-success status.
    Http(u16),
    Network,
    Timeout,
    Serialization,
    Unknown,
}

impl fmt::Display for ApiExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiExceptionKind::Http(status) => write!(f, "http status {status}"),
            ApiExceptionKind::Network => f.write_str("network"),
            ApiExceptionKind::Timeout => f.write_str("timeout"),
            ApiExceptionKind::Serialization => f.write_str("serialization"),
            ApiExceptionKind::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("code: {code}, message: {message}")]
pub struct ApiException {
    kind: ApiExceptionKind,
    code: i32,
    message: String,
}

impl ApiException {
    /// `code` is taken as given. For [`ApiExceptionKind::Http`] it may differ from
    /// the status, e.g. an application code read from the response body.
    pub fn new(kind: ApiExceptionKind, code: i32, message: impl Into<String>) -> Self {
        ApiException {
            kind,
            code,
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(ApiExceptionKind::Http(status), status as i32, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiExceptionKind::Network, UNKNOWN_CODE, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiExceptionKind::Timeout, UNKNOWN_CODE, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ApiExceptionKind::Serialization, UNKNOWN_CODE, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ApiExceptionKind::Unknown, UNKNOWN_CODE, message)
    }

    /// Builds an [`ApiExceptionKind::Http`] fault from a failed response.
    ///
    /// A JSON body of the form `{"code": 1001, "message": "..."}` supplies the
    /// code and message; either field may be absent. Any other body becomes the
    /// message verbatim and the status becomes the code.
    pub fn from_response(status: u16, body: &str) -> Self {
        match ErrorBody::parse(body) {
            Ok(error_body) => Self::new(
                ApiExceptionKind::Http(status),
                error_body.code.unwrap_or(status as i32),
                error_body.message.unwrap_or_default(),
            ),
            Err(e) => {
                log::debug!("Status {status} carries no structured error body: {e}");
                Self::http(status, body.trim())
            }
        }
    }

    pub fn kind(&self) -> ApiExceptionKind {
        self.kind
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiExceptionKind::Http(status) => Some(status),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }
}

// Each field is typed on its own in `ErrorBody::parse`.
#[derive(Debug, Deserialize)]
struct RawErrorBody {
    code: Option<serde_json::Value>,
    message: Option<serde_json::Value>,
}

#[derive(Debug)]
struct ErrorBody {
    code: Option<i32>,
    message: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> Result<ErrorBody> {
        if body.trim().is_empty() {
            return Err(Error::ErrorBody(ErrorBodyErrorType::Empty));
        }

        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(Error::ErrorBody(ErrorBodyErrorType::NotAnObject));
        }

        let raw: RawErrorBody = serde_json::from_value(value)?;
        let error_body = ErrorBody {
            code: raw
                .code
                .as_ref()
                .and_then(serde_json::Value::as_i64)
                .and_then(|code| i32::try_from(code).ok()),
            message: raw
                .message
                .as_ref()
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        };
        if error_body.code.is_none() && raw.code.is_some() {
            log::debug!("Ignoring error body code that is not an i32: {:?}", raw.code);
        }
        if error_body.message.is_none() && raw.message.is_some() {
            log::debug!("Ignoring error body message that is not a string: {:?}", raw.message);
        }

        if error_body.code.is_none() && error_body.message.is_none() {
            return Err(Error::ErrorBody(ErrorBodyErrorType::MissingFields));
        }
        Ok(error_body)
    }
}

impl From<std::io::Error> for ApiException {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::TimedOut => ApiException::timeout(format!("IO Error: {value}")),
            _ => ApiException::network(format!("IO Error: {value}")),
        }
    }
}

impl From<serde_json::Error> for ApiException {
    fn from(value: serde_json::Error) -> Self {
        ApiException::serialization(format!("Json Error: {value}"))
    }
}

impl From<String> for ApiException {
    fn from(value: String) -> Self {
        ApiException::unknown(value)
    }
}

impl From<&str> for ApiException {
    fn from(value: &str) -> Self {
        ApiException::unknown(value)
    }
}
