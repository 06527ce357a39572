// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_metal.h`: `CAMetalLayer`-backed views on Apple platforms.

use core::ffi::c_void;

use crate::video::SDL_Window;

/// An opaque `NSView` (macOS) or `UIView` (iOS) handle.
pub type SDL_MetalView = *mut c_void;

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_Metal_CreateView(window: *mut SDL_Window) -> SDL_MetalView;
    pub fn SDL_Metal_DestroyView(view: SDL_MetalView);
    /// Returns the view's `CAMetalLayer`, unretained.
    pub fn SDL_Metal_GetLayer(view: SDL_MetalView) -> *mut c_void;
}
