// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and property-bag data model for the stratum bindings.
//!
//! `stratum_core` holds the parts of the binding surface that have real
//! behavior of their own and therefore live in Rust rather than behind the
//! native library:
//!
//! **[`rect`]**: `#[repr(C)]` integer and float points and rectangles with
//! the containment, emptiness, equality, intersection, union, enclosing-point
//! and line-clipping semantics of the native headers. The types are layout
//! compatible with their C counterparts and are re-exported by `stratum_sys`.
//!
//! **[`properties`]**: The typed key/value model shared by every property
//! implementation ([`PropertiesId`](properties::PropertiesId),
//! [`PropertyType`](properties::PropertyType),
//! [`PropertyValue`](properties::PropertyValue)), the
//! [`PropertyStore`](properties::PropertyStore) seam, and (with `std`) a
//! thread-safe [`PropertyRegistry`](properties::PropertyRegistry) that
//! implements the full group contract natively.
//!
//! # Crate features
//!
//! - `std` (enabled by default): Enables the thread-safe property registry and
//!   `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod properties;
pub mod rect;
