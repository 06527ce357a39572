// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_loadso.h`: dynamic library loading.

use core::ffi::c_char;

use crate::stdinc::SDL_FunctionPointer;

opaque! {
    /// A loaded shared object.
    SDL_SharedObject;
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_LoadObject(sofile: *const c_char) -> *mut SDL_SharedObject;
    pub fn SDL_LoadFunction(handle: *mut SDL_SharedObject, name: *const c_char)
    -> SDL_FunctionPointer;
    pub fn SDL_UnloadObject(handle: *mut SDL_SharedObject);
}
