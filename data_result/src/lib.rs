// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT

pub mod api_exception;
pub mod data_result;
pub mod error;
pub mod result;

pub use api_exception::{ApiException, ApiExceptionKind};
pub use data_result::DataResult;
