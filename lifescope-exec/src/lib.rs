// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod collect_scoped;

pub use self::collect_scoped::{
    spawn_collect_scoped, CollectOptions, CollectScopedExt, CollectionHandle,
};
