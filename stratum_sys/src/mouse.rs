// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_mouse.h`.

use core::ffi::{c_char, c_int};

use crate::surface::SDL_Surface;
use crate::video::SDL_Window;

/// Identifies a mouse while it stays connected. `0` is invalid.
pub type SDL_MouseID = u32;

/// Mouse events synthesized from touch input carry this id.
pub const SDL_TOUCH_MOUSEID: SDL_MouseID = u32::MAX;
/// Mouse events synthesized from pen input carry this id.
pub const SDL_PEN_MOUSEID: SDL_MouseID = u32::MAX - 1;

opaque! {
    SDL_Cursor;
}

c_enum! {
    pub struct SDL_SystemCursor(c_int) {
        DEFAULT = SDL_SYSTEM_CURSOR_DEFAULT = 0,
        TEXT = SDL_SYSTEM_CURSOR_TEXT = 1,
        WAIT = SDL_SYSTEM_CURSOR_WAIT = 2,
        CROSSHAIR = SDL_SYSTEM_CURSOR_CROSSHAIR = 3,
        PROGRESS = SDL_SYSTEM_CURSOR_PROGRESS = 4,
        NWSE_RESIZE = SDL_SYSTEM_CURSOR_NWSE_RESIZE = 5,
        NESW_RESIZE = SDL_SYSTEM_CURSOR_NESW_RESIZE = 6,
        EW_RESIZE = SDL_SYSTEM_CURSOR_EW_RESIZE = 7,
        NS_RESIZE = SDL_SYSTEM_CURSOR_NS_RESIZE = 8,
        MOVE = SDL_SYSTEM_CURSOR_MOVE = 9,
        NOT_ALLOWED = SDL_SYSTEM_CURSOR_NOT_ALLOWED = 10,
        POINTER = SDL_SYSTEM_CURSOR_POINTER = 11,
        NW_RESIZE = SDL_SYSTEM_CURSOR_NW_RESIZE = 12,
        N_RESIZE = SDL_SYSTEM_CURSOR_N_RESIZE = 13,
        NE_RESIZE = SDL_SYSTEM_CURSOR_NE_RESIZE = 14,
        E_RESIZE = SDL_SYSTEM_CURSOR_E_RESIZE = 15,
        SE_RESIZE = SDL_SYSTEM_CURSOR_SE_RESIZE = 16,
        S_RESIZE = SDL_SYSTEM_CURSOR_S_RESIZE = 17,
        SW_RESIZE = SDL_SYSTEM_CURSOR_SW_RESIZE = 18,
        W_RESIZE = SDL_SYSTEM_CURSOR_W_RESIZE = 19,
        COUNT = SDL_SYSTEM_CURSOR_COUNT = 20,
    }
}

c_enum! {
    pub struct SDL_MouseWheelDirection(c_int) {
        NORMAL = SDL_MOUSEWHEEL_NORMAL = 0,
        FLIPPED = SDL_MOUSEWHEEL_FLIPPED = 1,
    }
}

/// A bitmask of pressed mouse buttons.
pub type SDL_MouseButtonFlags = u32;

pub const SDL_BUTTON_LEFT: u8 = 1;
pub const SDL_BUTTON_MIDDLE: u8 = 2;
pub const SDL_BUTTON_RIGHT: u8 = 3;
pub const SDL_BUTTON_X1: u8 = 4;
pub const SDL_BUTTON_X2: u8 = 5;

/// The mask bit for a 1-based button index.
#[inline]
#[must_use]
pub const fn SDL_BUTTON_MASK(button: u8) -> SDL_MouseButtonFlags {
    1 << (button - 1)
}

pub const SDL_BUTTON_LMASK: SDL_MouseButtonFlags = SDL_BUTTON_MASK(SDL_BUTTON_LEFT);
pub const SDL_BUTTON_MMASK: SDL_MouseButtonFlags = SDL_BUTTON_MASK(SDL_BUTTON_MIDDLE);
pub const SDL_BUTTON_RMASK: SDL_MouseButtonFlags = SDL_BUTTON_MASK(SDL_BUTTON_RIGHT);
pub const SDL_BUTTON_X1MASK: SDL_MouseButtonFlags = SDL_BUTTON_MASK(SDL_BUTTON_X1);
pub const SDL_BUTTON_X2MASK: SDL_MouseButtonFlags = SDL_BUTTON_MASK(SDL_BUTTON_X2);

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub safe fn SDL_HasMouse() -> bool;
    /// Returns a zero-terminated array released with `SDL_free`.
    pub fn SDL_GetMice(count: *mut c_int) -> *mut SDL_MouseID;
    pub fn SDL_GetMouseNameForID(instance_id: SDL_MouseID) -> *const c_char;
    pub fn SDL_GetMouseFocus() -> *mut SDL_Window;

    pub fn SDL_GetMouseState(x: *mut f32, y: *mut f32) -> SDL_MouseButtonFlags;
    pub fn SDL_GetGlobalMouseState(x: *mut f32, y: *mut f32) -> SDL_MouseButtonFlags;
    pub fn SDL_GetRelativeMouseState(x: *mut f32, y: *mut f32) -> SDL_MouseButtonFlags;
    pub fn SDL_WarpMouseInWindow(window: *mut SDL_Window, x: f32, y: f32);
    pub fn SDL_WarpMouseGlobal(x: f32, y: f32) -> bool;
    pub fn SDL_SetWindowRelativeMouseMode(window: *mut SDL_Window, enabled: bool) -> bool;
    pub fn SDL_GetWindowRelativeMouseMode(window: *mut SDL_Window) -> bool;
    pub fn SDL_CaptureMouse(enabled: bool) -> bool;

    pub fn SDL_CreateCursor(
        data: *const u8,
        mask: *const u8,
        w: c_int,
        h: c_int,
        hot_x: c_int,
        hot_y: c_int,
    ) -> *mut SDL_Cursor;
    pub fn SDL_CreateColorCursor(surface: *mut SDL_Surface, hot_x: c_int, hot_y: c_int)
    -> *mut SDL_Cursor;
    pub fn SDL_CreateSystemCursor(id: SDL_SystemCursor) -> *mut SDL_Cursor;
    /// A null cursor forces a redraw of the current one.
    pub fn SDL_SetCursor(cursor: *mut SDL_Cursor) -> bool;
    pub fn SDL_GetCursor() -> *mut SDL_Cursor;
    pub fn SDL_GetDefaultCursor() -> *mut SDL_Cursor;
    pub fn SDL_DestroyCursor(cursor: *mut SDL_Cursor);
    pub fn SDL_ShowCursor() -> bool;
    pub fn SDL_HideCursor() -> bool;
    pub fn SDL_CursorVisible() -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_masks() {
        assert_eq!(SDL_BUTTON_LMASK, 0b00001);
        assert_eq!(SDL_BUTTON_MMASK, 0b00010);
        assert_eq!(SDL_BUTTON_RMASK, 0b00100);
        assert_eq!(SDL_BUTTON_X1MASK, 0b01000);
        assert_eq!(SDL_BUTTON_X2MASK, 0b10000);
    }

    #[test]
    fn system_cursor_count() {
        assert_eq!(SDL_SYSTEM_CURSOR_W_RESIZE.0 + 1, SDL_SYSTEM_CURSOR_COUNT.0);
    }
}
