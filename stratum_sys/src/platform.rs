// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_platform.h`.

use core::ffi::c_char;

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Returns a static string such as `"Windows"`, `"macOS"` or `"Linux"`.
    pub safe fn SDL_GetPlatform() -> *const c_char;
}
