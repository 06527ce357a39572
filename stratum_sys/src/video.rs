// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parts of `SDL_video.h` other modules refer to.
//!
//! Windows are created elsewhere; the bound modules only accept them.

/// Identifies a window for the lifetime of the application.
pub type SDL_WindowID = u32;

opaque! {
    /// A native window.
    SDL_Window;
}
