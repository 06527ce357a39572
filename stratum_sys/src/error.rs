// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_error.h`: the thread-local last-error side channel.

use core::ffi::c_char;

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Always returns `false`, so it can be used as `return SDL_SetError(..)`.
    pub fn SDL_SetError(fmt: *const c_char, ...) -> bool;
    pub fn SDL_OutOfMemory() -> bool;
    /// Never null; empty when no error is set.
    pub fn SDL_GetError() -> *const c_char;
    pub fn SDL_ClearError() -> bool;
}
