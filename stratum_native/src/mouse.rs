// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse state, capture and cursors.
//!
//! Windows are not wrapped by this crate; functions that need one take a raw
//! `SDL_Window` pointer and are `unsafe`.

use std::ffi::c_int;
use std::fmt;
use std::ptr::NonNull;

use bitflags::bitflags;
use stratum_sys::mouse::{self as sys, SDL_Cursor};
use stratum_sys::stdinc::SDL_free;
use stratum_sys::video::SDL_Window;

pub use stratum_sys::mouse::{SDL_MouseID as MouseId, SDL_SystemCursor as SystemCursor};

use crate::error::{Error, Result, borrowed_string, check, non_null};
use crate::surface::Surface;

bitflags! {
    /// Mouse buttons held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtonFlags: u32 {
        /// Primary button.
        const LEFT = sys::SDL_BUTTON_LMASK;
        /// Middle button or wheel press.
        const MIDDLE = sys::SDL_BUTTON_MMASK;
        /// Secondary button.
        const RIGHT = sys::SDL_BUTTON_RMASK;
        /// First extra button.
        const X1 = sys::SDL_BUTTON_X1MASK;
        /// Second extra button.
        const X2 = sys::SDL_BUTTON_X2MASK;
    }
}

/// Pointer position and held buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseState {
    /// Horizontal position, or motion for relative state.
    pub x: f32,
    /// Vertical position, or motion for relative state.
    pub y: f32,
    /// Buttons held down.
    pub buttons: MouseButtonFlags,
}

impl MouseState {
    fn query(f: unsafe extern "C" fn(*mut f32, *mut f32) -> u32) -> Self {
        let (mut x, mut y) = (0.0, 0.0);
        // SAFETY: every state query only writes through the two out pointers.
        let bits = unsafe { f(&mut x, &mut y) };
        Self {
            x,
            y,
            buttons: MouseButtonFlags::from_bits_truncate(bits),
        }
    }
}

/// `true` if a mouse is connected.
#[must_use]
pub fn has_mouse() -> bool {
    sys::SDL_HasMouse()
}

/// Ids of the connected mice.
pub fn mice() -> Result<Vec<MouseId>> {
    let mut count: c_int = 0;
    // SAFETY: valid out pointer.
    let list = non_null(unsafe { sys::SDL_GetMice(&mut count) })?;
    let count = usize::try_from(count).unwrap_or(0);
    // SAFETY: the list holds `count` ids and is released right after copying.
    let ids = unsafe {
        let ids = core::slice::from_raw_parts(list.as_ptr(), count).to_vec();
        SDL_free(list.as_ptr().cast());
        ids
    };
    Ok(ids)
}

/// The name of a mouse, if it has one.
#[must_use]
pub fn mouse_name(id: MouseId) -> Option<String> {
    // SAFETY: the returned string is owned by the library and copied at once.
    unsafe { borrowed_string(sys::SDL_GetMouseNameForID(id)) }
}

/// The window with mouse focus.
#[must_use]
pub fn focus_window() -> Option<NonNull<SDL_Window>> {
    // SAFETY: no preconditions.
    NonNull::new(unsafe { sys::SDL_GetMouseFocus() })
}

/// State relative to the focus window, as of the last event pump.
#[must_use]
pub fn state() -> MouseState {
    MouseState::query(sys::SDL_GetMouseState)
}

/// State in desktop coordinates, queried from the OS.
#[must_use]
pub fn global_state() -> MouseState {
    MouseState::query(sys::SDL_GetGlobalMouseState)
}

/// Motion accumulated since the previous call.
#[must_use]
pub fn relative_state() -> MouseState {
    MouseState::query(sys::SDL_GetRelativeMouseState)
}

/// Moves the pointer within `window`, or within the focus window for null.
///
/// # Safety
///
/// `window` must be null or a live window.
pub unsafe fn warp_in_window(window: *mut SDL_Window, x: f32, y: f32) {
    // SAFETY: forwarded from the caller.
    unsafe { sys::SDL_WarpMouseInWindow(window, x, y) };
}

/// Moves the pointer in desktop coordinates.
pub fn warp_global(x: f32, y: f32) -> Result<()> {
    // SAFETY: plain value arguments.
    check(unsafe { sys::SDL_WarpMouseGlobal(x, y) })
}

/// Hides the pointer and reports only relative motion for `window`.
///
/// # Safety
///
/// `window` must be a live window.
pub unsafe fn set_relative_mode(window: *mut SDL_Window, enabled: bool) -> Result<()> {
    // SAFETY: forwarded from the caller.
    check(unsafe { sys::SDL_SetWindowRelativeMouseMode(window, enabled) })
}

/// `true` if `window` is in relative mode.
///
/// # Safety
///
/// `window` must be a live window.
pub unsafe fn relative_mode(window: *mut SDL_Window) -> bool {
    // SAFETY: forwarded from the caller.
    unsafe { sys::SDL_GetWindowRelativeMouseMode(window) }
}

/// Keeps delivering mouse events to the focus window while the pointer is
/// outside it.
pub fn capture(enabled: bool) -> Result<()> {
    // SAFETY: plain value argument.
    check(unsafe { sys::SDL_CaptureMouse(enabled) })
}

/// Shows the cursor.
pub fn show_cursor() -> Result<()> {
    // SAFETY: no preconditions.
    check(unsafe { sys::SDL_ShowCursor() })
}

/// Hides the cursor.
pub fn hide_cursor() -> Result<()> {
    // SAFETY: no preconditions.
    check(unsafe { sys::SDL_HideCursor() })
}

/// `true` if the cursor is shown.
#[must_use]
pub fn cursor_visible() -> bool {
    // SAFETY: no preconditions.
    unsafe { sys::SDL_CursorVisible() }
}

/// The active cursor. Owned by the library or by a [`Cursor`].
#[must_use]
pub fn current_cursor() -> Option<NonNull<SDL_Cursor>> {
    // SAFETY: no preconditions.
    NonNull::new(unsafe { sys::SDL_GetCursor() })
}

/// The cursor shown before any was set. Owned by the library.
#[must_use]
pub fn default_cursor() -> Option<NonNull<SDL_Cursor>> {
    // SAFETY: no preconditions.
    NonNull::new(unsafe { sys::SDL_GetDefaultCursor() })
}

/// Forces the active cursor to be drawn again.
pub fn redraw_cursor() -> Result<()> {
    // SAFETY: null asks for a redraw without changing the cursor.
    check(unsafe { sys::SDL_SetCursor(core::ptr::null_mut()) })
}

/// Bytes in a monochrome cursor plane of `width` x `height`.
///
/// Rows are packed eight pixels to a byte, so `width` must be a multiple of 8.
fn bitmap_len(width: u32, height: u32) -> Result<usize> {
    if width % 8 != 0 {
        return Err(Error::Invalid(format!(
            "cursor width {width} is not a multiple of 8"
        )));
    }
    (width as usize / 8)
        .checked_mul(height as usize)
        .ok_or(Error::SizeOverflow)
}

fn check_plane(len: usize, needed: usize) -> Result<()> {
    if len < needed {
        return Err(Error::BufferTooSmall {
            needed,
            actual: len,
        });
    }
    Ok(())
}

/// An owned cursor, destroyed on drop.
///
/// Destroying the active cursor puts the default one back.
pub struct Cursor {
    raw: NonNull<SDL_Cursor>,
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("raw", &self.raw).finish()
    }
}

impl Cursor {
    /// Creates a monochrome cursor.
    ///
    /// Each pixel takes one bit from `data` and one from `mask`:
    /// data 0 / mask 1 is white, 1 / 1 black, 0 / 0 transparent and 1 / 0
    /// inverted where the platform supports it.
    pub fn from_bitmap(
        data: &[u8],
        mask: &[u8],
        width: u32,
        height: u32,
        hot_x: i32,
        hot_y: i32,
    ) -> Result<Self> {
        let needed = bitmap_len(width, height)?;
        check_plane(data.len(), needed)?;
        check_plane(mask.len(), needed)?;
        let w = c_int::try_from(width).map_err(|_| Error::SizeOverflow)?;
        let h = c_int::try_from(height).map_err(|_| Error::SizeOverflow)?;
        // SAFETY: both planes hold at least `needed` bytes.
        let raw = non_null(unsafe {
            sys::SDL_CreateCursor(data.as_ptr(), mask.as_ptr(), w, h, hot_x, hot_y)
        })?;
        Ok(Self { raw })
    }

    /// Creates a color cursor from a surface. Alternate images on the
    /// surface are used on high-DPI displays.
    pub fn from_surface(surface: &Surface, hot_x: i32, hot_y: i32) -> Result<Self> {
        // SAFETY: live surface; the cursor copies what it needs.
        let raw = non_null(unsafe { sys::SDL_CreateColorCursor(surface.as_ptr(), hot_x, hot_y) })?;
        Ok(Self { raw })
    }

    /// Creates one of the platform's stock cursors.
    pub fn system(id: SystemCursor) -> Result<Self> {
        // SAFETY: plain value argument.
        let raw = non_null(unsafe { sys::SDL_CreateSystemCursor(id) })?;
        Ok(Self { raw })
    }

    /// Makes this the active cursor.
    pub fn set_active(&self) -> Result<()> {
        // SAFETY: live cursor; the library stops using it when it is
        // destroyed.
        check(unsafe { sys::SDL_SetCursor(self.raw.as_ptr()) })
    }

    /// `true` if this is the active cursor.
    #[must_use]
    pub fn is_active(&self) -> bool {
        current_cursor() == Some(self.raw)
    }

    /// Returns the native cursor; it stays owned by `self`.
    #[must_use]
    pub const fn as_ptr(&self) -> *mut SDL_Cursor {
        self.raw.as_ptr()
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        // SAFETY: created by this handle and destroyed once.
        unsafe { sys::SDL_DestroyCursor(self.raw.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_flags_match_native_masks() {
        let held = MouseButtonFlags::from_bits_truncate(0b10101);
        assert_eq!(
            held,
            MouseButtonFlags::LEFT | MouseButtonFlags::RIGHT | MouseButtonFlags::X2
        );
        assert!(
            !MouseButtonFlags::from_bits_truncate(1 << 7).contains(MouseButtonFlags::LEFT),
            "unknown bits are dropped"
        );
    }

    #[test]
    fn bitmap_sizes() {
        assert_eq!(bitmap_len(16, 16).unwrap(), 32);
        assert_eq!(bitmap_len(0, 5).unwrap(), 0);
        assert!(
            matches!(bitmap_len(12, 4), Err(Error::Invalid(_))),
            "width must be a whole number of bytes"
        );
    }

    #[test]
    fn short_planes_are_rejected() {
        assert_eq!(
            check_plane(31, 32),
            Err(Error::BufferTooSmall {
                needed: 32,
                actual: 31
            })
        );
        assert!(check_plane(40, 32).is_ok(), "longer planes are fine");
    }
}
