// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! Host-side runtime for the chDB embedded engine
//!
//! This crate owns the boundary crossing: loading the engine library,
//! marshaling argument vectors into the shape the engine expects, invoking
//! the query entrypoint, and wrapping the foreign-allocated result in an
//! owning handle that reclaims it exactly once.

mod argv;
pub mod engine;
pub mod error;
pub mod result;

pub use engine::Engine;
pub use error::{EngineError, Result};
pub use result::LocalResult;

#[cfg(test)]
pub(crate) mod testing;
