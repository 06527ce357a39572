// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for stratum diagnostics.
//!
//! Everything here reads property groups through
//! [`PropertyStore`](stratum_core::properties::PropertyStore), so it works the
//! same for the Rust registry and for the native library's own groups.
//!
//! - [`pretty`]: one line per property or assertion.
//! - [`json`]: JSON documents for tooling.

pub mod json;
pub mod pretty;
