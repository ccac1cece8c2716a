// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod host;
pub mod state_subject;
pub mod stream_item;
pub mod subject_error;
pub mod visibility;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{Result, ScopeError};
pub use self::host::{LifecycleError, LifecycleHost};
pub use self::state_subject::StateSubject;
pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
pub use self::visibility::Visibility;
