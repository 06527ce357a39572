// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_locale.h`.

use core::ffi::{c_char, c_int};

/// A language with an optional country, such as `en` / `GB`.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_Locale {
    /// ISO-639 language code. Never null.
    pub language: *const c_char,
    /// ISO-3166 country code. May be null.
    pub country: *const c_char,
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Returns a null-terminated array in order of preference, released as a
    /// single allocation with `SDL_free`.
    pub fn SDL_GetPreferredLocales(count: *mut c_int) -> *mut *mut SDL_Locale;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn locale_is_two_pointers() {
        assert_eq!(size_of::<SDL_Locale>(), 2 * size_of::<*const c_char>());
    }
}
