// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod callback_stream;
pub mod receiver_ext;

pub use self::callback_stream::{callback_stream, CallbackSink, CallbackStream};
pub use self::receiver_ext::IntoScopedStream;
