// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ScopeError;
use std::fmt;

/// Errors specific to state subject operations.
///
/// Distinct from stream processing errors; convertible to [`ScopeError`]
/// when one needs to flow through a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept values or subscribers.
    Closed,
}

impl fmt::Display for SubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Subject is closed"),
        }
    }
}

impl std::error::Error for SubjectError {}

impl From<SubjectError> for ScopeError {
    fn from(err: SubjectError) -> Self {
        ScopeError::stream_error(err.to_string())
    }
}
