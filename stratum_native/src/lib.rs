// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe wrappers over the SDL3 multimedia library.
//!
//! Each module covers one native subsystem and owns the handles it creates:
//!
//! - [`properties`]: Property groups, with owned cleanups and enumeration
//! - [`storage`]: Storage containers, including Rust-implemented backends
//! - [`process`]: Child processes with piped standard streams
//! - [`surface`]: Software pixel buffers, blits and pixel conversion
//! - [`mouse`]: Mouse state and cursors
//! - [`log`]: Native log priorities, plus a bridge into the [`::log`] facade
//! - [`assert`]: Assertion handler and report
//! - [`loadso`], [`locale`], [`metal`], [`misc`], [`platform`], [`power`]
//!
//! Rectangle and property-value types live in [`stratum_core`] and are
//! re-exported here.
//!
//! Fallible calls return [`Result`]; a native failure carries the library's
//! last-error text in [`Error::Native`].
//!
//! # Crate features
//!
//! - `link` (disabled by default): Links against the native `SDL3` library.

#![expect(unsafe_code, reason = "safe wrappers over the native C ABI")]

pub mod assert;
pub mod error;
pub mod loadso;
pub mod locale;
pub mod log;
pub mod metal;
pub mod misc;
pub mod mouse;
pub mod platform;
pub mod power;
pub mod process;
pub mod properties;
pub mod storage;
pub mod surface;

pub use error::{Error, Result, clear_error, last_error, set_error};
pub use stratum_core::properties::{PropertiesId, PropertyType, PropertyValue};
pub use stratum_core::rect::{FPoint, FRect, Point, Rect};
