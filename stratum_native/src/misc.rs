// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odds and ends.

use stratum_sys::misc as sys;

use crate::error::{Result, c_string, check};

/// Opens `url` with the system's default handler: a browser for web
/// addresses, the file manager or a viewer for `file:` URLs.
///
/// Success only means the request was handed off; nothing reports whether
/// the URL actually opened.
pub fn open_url(url: &str) -> Result<()> {
    let url = c_string(url)?;
    ::log::debug!(target: "stratum::misc", "opening {url:?}");
    // SAFETY: valid C string.
    check(unsafe { sys::SDL_OpenURL(url.as_ptr()) })
}
