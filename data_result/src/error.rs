// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Error body {0}")]
    ErrorBody(ErrorBodyErrorType),
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorBodyErrorType {
    #[error("is empty")]
    Empty,

    #[error("is not a json object")]
    NotAnObject,

    #[error("has neither code nor message")]
    MissingFields,
}
