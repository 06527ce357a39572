// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_misc.h`.

use core::ffi::c_char;

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Opens a URL or file in the system's default handler.
    pub fn SDL_OpenURL(url: *const c_char) -> bool;
}
