// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT

//! `DataResult` is the outcome of a fallible data operation.
//! A failed operation hands back a `DataResult::Error` carrying an
//! [`ApiException`] instead of unwinding, and callers match on the two variants.

use crate::api_exception::ApiException;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataResult<T> {
    Success(T),
    Error(ApiException),
}

impl<T> DataResult<T> {
    pub fn success(response: T) -> Self {
        DataResult::Success(response)
    }

    pub fn error(exception: impl Into<ApiException>) -> Self {
        DataResult::Error(exception.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DataResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DataResult::Error(_))
    }

    pub fn response(&self) -> Option<&T> {
        match self {
            DataResult::Success(response) => Some(response),
            DataResult::Error(_) => None,
        }
    }

    pub fn exception(&self) -> Option<&ApiException> {
        match self {
            DataResult::Success(_) => None,
            DataResult::Error(exception) => Some(exception),
        }
    }

    pub fn into_response(self) -> Option<T> {
        match self {
            DataResult::Success(response) => Some(response),
            DataResult::Error(_) => None,
        }
    }

    pub fn into_exception(self) -> Option<ApiException> {
        match self {
            DataResult::Success(_) => None,
            DataResult::Error(exception) => Some(exception),
        }
    }

    /// Converts to a std `Result` so the outcome can be propagated with `?`.
    pub fn into_result(self) -> Result<T, ApiException> {
        match self {
            DataResult::Success(response) => Ok(response),
            DataResult::Error(exception) => Err(exception),
        }
    }
}

impl<T, E> From<Result<T, E>> for DataResult<T>
where
    E: Into<ApiException>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(response) => DataResult::Success(response),
            Err(e) => DataResult::Error(e.into()),
        }
    }
}

impl<T> From<DataResult<T>> for Result<T, ApiException> {
    fn from(value: DataResult<T>) -> Self {
        value.into_result()
    }
}
