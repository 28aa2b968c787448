// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 chdb-rust contributors

//! C ABI definitions for the chDB embedded engine
//!
//! This crate provides the stable C ABI surface the binding consumes. It
//! defines the FFI-safe result struct, the vtable of engine entrypoints,
//! and the symbol names and constants shared by the loader and the result
//! handle.

pub mod constants;
pub mod result;
pub mod vtable;
