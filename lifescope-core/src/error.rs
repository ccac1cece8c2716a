// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for lifecycle-scoped stream collection.
//!
//! [`ScopeError`] is the root error carried by stream items and returned
//! from collection tasks. Failures local to a single emitted value never
//! carry this type; they stay inside the observer's own error type and
//! are routed to the caller's error callback.

/// Root error type for scoped collection and callback bridging.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// An external service rejected a listener registration.
    ///
    /// Terminates the subscription instance it occurred in; a fresh
    /// subscription is only attempted on the next qualifying visibility
    /// transition.
    #[error("registration failed: {context}")]
    Registration {
        /// Description of the rejection.
        context: String,
    },

    /// General stream processing failure.
    #[error("stream processing error: {context}")]
    Stream {
        /// Description of what went wrong.
        context: String,
    },

    /// Failure raised by a user-provided observer callback.
    #[error("observer error: {0}")]
    Observer(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ScopeError {
    /// Create a registration error with the given context.
    pub fn registration(context: impl Into<String>) -> Self {
        Self::Registration {
            context: context.into(),
        }
    }

    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::Stream {
            context: context.into(),
        }
    }

    /// Wrap an observer error.
    pub fn observer(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Observer(Box::new(error))
    }
}

/// Specialized `Result` type for scoped collection operations.
pub type Result<T> = std::result::Result<T, ScopeError>;

impl Clone for ScopeError {
    fn clone(&self) -> Self {
        match self {
            Self::Registration { context } => Self::Registration {
                context: context.clone(),
            },
            Self::Stream { context } => Self::Stream {
                context: context.clone(),
            },
            // The boxed source is not Clone; degrade to its message.
            Self::Observer(e) => Self::Stream {
                context: format!("observer error: {e}"),
            },
        }
    }
}
