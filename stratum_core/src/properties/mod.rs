// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed key/value property groups.
//!
//! A *property group* is a named collection of typed values identified by a
//! [`PropertiesId`]. Each property holds exactly one of five types (see
//! [`PropertyType`]); storing under an existing name with a different type
//! replaces both the value and the type.
//!
//! Lookups never fail: asking for a missing property, or for a property of a
//! different type than requested, returns the caller's default. Absence and
//! type mismatch are indistinguishable to the caller.
//!
//! Two implementations share the [`PropertyStore`] seam:
//!
//! - [`PropertyRegistry`] (requires `std`): a native, thread-safe registry
//!   with per-group locking and cleanup callbacks.
//! - The binding to the native library's own groups in `stratum_native`.

mod value;

#[cfg(feature = "std")]
mod registry;

pub use value::{PropertiesId, PropertyType, PropertyValue, RawAddress};

#[cfg(feature = "std")]
pub use registry::{Cleanup, LockedProperties, PropertyError, PropertyRegistry};

use alloc::string::String;
use alloc::vec::Vec;

/// Read access to property groups, independent of where they are stored.
///
/// Diagnostics and other generic consumers are written against this trait so
/// they work with both the native registry and the bound native groups.
pub trait PropertyStore {
    /// Error returned when `group` does not name a live group.
    type Error;

    /// Returns the names of every property in `group`, in unspecified order.
    fn names(&self, group: PropertiesId) -> Result<Vec<String>, Self::Error>;

    /// Returns a copy of the named property's value, if present.
    fn value(&self, group: PropertiesId, name: &str) -> Option<PropertyValue>;

    /// Returns every property in `group` sorted by name.
    ///
    /// Properties removed between listing and reading are skipped.
    fn snapshot(&self, group: PropertiesId) -> Result<Vec<(String, PropertyValue)>, Self::Error> {
        let mut names = self.names(group)?;
        names.sort_unstable();
        Ok(names
            .into_iter()
            .filter_map(|name| self.value(group, &name).map(|value| (name, value)))
            .collect())
    }
}
