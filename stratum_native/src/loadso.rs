// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared library loading.

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use stratum_sys::loadso::{self as sys, SDL_SharedObject};

use crate::error::{Error, Result, c_string, non_null};

/// A loaded shared library, unloaded on drop.
///
/// Function pointers obtained through [`function`](Self::function) dangle
/// once the library is unloaded.
pub struct SharedObject {
    raw: NonNull<SDL_SharedObject>,
    path: String,
}

impl fmt::Debug for SharedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedObject")
            .field("raw", &self.raw)
            .field("path", &self.path)
            .finish()
    }
}

impl SharedObject {
    /// Loads a library by file name or path.
    pub fn load(path: &str) -> Result<Self> {
        let c_path = c_string(path)?;
        // SAFETY: valid C string.
        let raw = non_null(unsafe { sys::SDL_LoadObject(c_path.as_ptr()) })?;
        ::log::debug!(target: "stratum::loadso", "loaded {path}");
        Ok(Self {
            raw,
            path: path.to_owned(),
        })
    }

    /// The path this library was loaded from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Looks up an exported function by name.
    ///
    /// # Safety
    ///
    /// The returned address must be transmuted to the symbol's true
    /// signature before it is called, and not used after `self` drops.
    pub unsafe fn function(&self, name: &str) -> Result<NonNull<c_void>> {
        let c_name = c_string(name)?;
        // SAFETY: live handle and valid C string.
        let f = unsafe { sys::SDL_LoadFunction(self.raw.as_ptr(), c_name.as_ptr()) };
        f.and_then(|f| NonNull::new(f as *mut c_void)).ok_or_else(|| {
            let err = Error::native();
            ::log::trace!(target: "stratum::loadso", "{name} not found in {}: {err}", self.path);
            err
        })
    }
}

impl Drop for SharedObject {
    fn drop(&mut self) {
        // SAFETY: loaded by this handle and unloaded once.
        unsafe { sys::SDL_UnloadObject(self.raw.as_ptr()) };
        ::log::debug!(target: "stratum::loadso", "unloaded {}", self.path);
    }
}
