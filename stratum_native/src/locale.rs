// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The user's preferred locales.

use std::ffi::c_int;
use std::fmt;

use stratum_sys::locale::{self as sys, SDL_Locale};
use stratum_sys::stdinc::SDL_free;

use crate::error::{Result, borrowed_string, non_null};

/// A language with an optional country, such as `en_GB`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639 language code, e.g. `"en"`.
    pub language: String,
    /// ISO 3166 country code, e.g. `"GB"`.
    pub country: Option<String>,
}

impl Locale {
    /// Copies a native locale; `None` if it has no language.
    ///
    /// # Safety
    ///
    /// Both strings in `raw` must be null or NUL-terminated.
    unsafe fn from_raw(raw: &SDL_Locale) -> Option<Self> {
        // SAFETY: forwarded from the caller.
        let language = unsafe { borrowed_string(raw.language) }?;
        // SAFETY: as above.
        let country = unsafe { borrowed_string(raw.country) };
        Some(Self { language, country })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{country}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

/// Copies `count` locales out of a null-terminated list.
///
/// # Safety
///
/// `list` must hold `count` pointers to valid locales, stopping early at a
/// null entry.
unsafe fn collect_locales(list: *const *mut SDL_Locale, count: usize) -> Vec<Locale> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        // SAFETY: within the list per the caller.
        let entry = unsafe { *list.add(i) };
        if entry.is_null() {
            break;
        }
        // SAFETY: non-null entries point to valid locales.
        if let Some(locale) = unsafe { Locale::from_raw(&*entry) } {
            out.push(locale);
        }
    }
    out
}

/// Locales in order of preference.
///
/// The list is read from the OS on every call, so it follows changes made
/// while the program runs. It may be empty.
pub fn preferred_locales() -> Result<Vec<Locale>> {
    let mut count: c_int = 0;
    // SAFETY: valid out pointer.
    let list = non_null(unsafe { sys::SDL_GetPreferredLocales(&mut count) })?;
    // SAFETY: the list holds `count` entries and is one allocation.
    let locales = unsafe {
        let locales = collect_locales(list.as_ptr(), usize::try_from(count).unwrap_or(0));
        SDL_free(list.as_ptr().cast());
        locales
    };
    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_underscore() {
        let gb = Locale {
            language: "en".into(),
            country: Some("GB".into()),
        };
        let fr = Locale {
            language: "fr".into(),
            country: None,
        };
        assert_eq!(gb.to_string(), "en_GB");
        assert_eq!(fr.to_string(), "fr");
    }

    #[test]
    fn collect_skips_missing_language_and_stops_at_null() {
        let mut en = SDL_Locale {
            language: c"en".as_ptr(),
            country: c"US".as_ptr(),
        };
        let mut bare = SDL_Locale {
            language: core::ptr::null(),
            country: c"DE".as_ptr(),
        };
        let mut ja = SDL_Locale {
            language: c"ja".as_ptr(),
            country: core::ptr::null(),
        };
        let list = [
            &raw mut en,
            &raw mut bare,
            &raw mut ja,
            core::ptr::null_mut(),
        ];
        // SAFETY: every entry is a valid locale or the terminator.
        let locales = unsafe { collect_locales(list.as_ptr(), 4) };
        let names: Vec<String> = locales.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["en_US", "ja"]);
    }
}
