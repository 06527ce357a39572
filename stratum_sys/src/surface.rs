// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_surface.h`: CPU-side pixel buffers and blits.

use core::ffi::{CStr, c_char, c_int, c_void};

use crate::blendmode::SDL_BlendMode;
use crate::iostream::SDL_IOStream;
use crate::pixels::{SDL_Colorspace, SDL_Palette, SDL_PixelFormat};
use crate::properties::SDL_PropertiesID;
use crate::rect::SDL_Rect;

/// Surface flags, as stored in [`SDL_Surface::flags`].
pub type SDL_SurfaceFlags = u32;
/// The pixels are owned by the caller.
pub const SDL_SURFACE_PREALLOCATED: SDL_SurfaceFlags = 0x0000_0001;
/// The surface must be locked before its pixels are accessed.
pub const SDL_SURFACE_LOCK_NEEDED: SDL_SurfaceFlags = 0x0000_0002;
/// The surface is currently locked.
pub const SDL_SURFACE_LOCKED: SDL_SurfaceFlags = 0x0000_0004;
/// The pixels are padded and aligned for SIMD.
pub const SDL_SURFACE_SIMD_ALIGNED: SDL_SurfaceFlags = 0x0000_0008;

c_enum! {
    pub struct SDL_ScaleMode(c_int) {
        /// Nearest-pixel sampling.
        NEAREST = SDL_SCALEMODE_NEAREST = 0,
        /// Linear filtering.
        LINEAR = SDL_SCALEMODE_LINEAR = 1,
    }
}

c_enum! {
    pub struct SDL_FlipMode(c_int) {
        NONE = SDL_FLIP_NONE = 0,
        HORIZONTAL = SDL_FLIP_HORIZONTAL = 1,
        VERTICAL = SDL_FLIP_VERTICAL = 2,
    }
}

/// A collection of pixels used in software blitting.
///
/// Only the public fields are declared; the library keeps the rest private.
/// Surfaces are reference counted: `refcount` may be incremented to keep a
/// surface alive past an [`SDL_DestroySurface`] call.
#[repr(C)]
#[derive(Debug)]
pub struct SDL_Surface {
    pub flags: SDL_SurfaceFlags,
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub refcount: c_int,
    pub reserved: *mut c_void,
}

/// `true` if `surface` must be locked before its pixels are touched.
///
/// # Safety
///
/// `surface` must point to a live surface.
#[inline]
#[must_use]
pub unsafe fn SDL_MUSTLOCK(surface: *const SDL_Surface) -> bool {
    // SAFETY: the caller guarantees `surface` is live.
    unsafe { (*surface).flags & SDL_SURFACE_LOCK_NEEDED == SDL_SURFACE_LOCK_NEEDED }
}

pub const SDL_PROP_SURFACE_SDR_WHITE_POINT_FLOAT: &CStr = c"SDL.surface.SDR_white_point";
pub const SDL_PROP_SURFACE_HDR_HEADROOM_FLOAT: &CStr = c"SDL.surface.HDR_headroom";
pub const SDL_PROP_SURFACE_TONEMAP_OPERATOR_STRING: &CStr = c"SDL.surface.tonemap";
pub const SDL_PROP_SURFACE_HOTSPOT_X_NUMBER: &CStr = c"SDL.surface.hotspot.x";
pub const SDL_PROP_SURFACE_HOTSPOT_Y_NUMBER: &CStr = c"SDL.surface.hotspot.y";

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    // -- Lifecycle --

    pub fn SDL_CreateSurface(width: c_int, height: c_int, format: SDL_PixelFormat)
    -> *mut SDL_Surface;
    pub fn SDL_CreateSurfaceFrom(
        width: c_int,
        height: c_int,
        format: SDL_PixelFormat,
        pixels: *mut c_void,
        pitch: c_int,
    ) -> *mut SDL_Surface;
    pub fn SDL_DestroySurface(surface: *mut SDL_Surface);
    pub fn SDL_GetSurfaceProperties(surface: *mut SDL_Surface) -> SDL_PropertiesID;

    // -- Colorspace and palette --

    pub fn SDL_SetSurfaceColorspace(surface: *mut SDL_Surface, colorspace: SDL_Colorspace)
    -> bool;
    pub fn SDL_GetSurfaceColorspace(surface: *mut SDL_Surface) -> SDL_Colorspace;
    pub fn SDL_CreateSurfacePalette(surface: *mut SDL_Surface) -> *mut SDL_Palette;
    pub fn SDL_SetSurfacePalette(surface: *mut SDL_Surface, palette: *mut SDL_Palette) -> bool;
    pub fn SDL_GetSurfacePalette(surface: *mut SDL_Surface) -> *mut SDL_Palette;

    // -- Alternate images --

    pub fn SDL_AddSurfaceAlternateImage(surface: *mut SDL_Surface, image: *mut SDL_Surface)
    -> bool;
    pub fn SDL_SurfaceHasAlternateImages(surface: *mut SDL_Surface) -> bool;
    /// Returns a null-terminated array released with `SDL_free`.
    pub fn SDL_GetSurfaceImages(surface: *mut SDL_Surface, count: *mut c_int)
    -> *mut *mut SDL_Surface;
    pub fn SDL_RemoveSurfaceAlternateImages(surface: *mut SDL_Surface);

    // -- Locking --

    pub fn SDL_LockSurface(surface: *mut SDL_Surface) -> bool;
    pub fn SDL_UnlockSurface(surface: *mut SDL_Surface);

    // -- BMP --

    pub fn SDL_LoadBMP_IO(src: *mut SDL_IOStream, closeio: bool) -> *mut SDL_Surface;
    pub fn SDL_LoadBMP(file: *const c_char) -> *mut SDL_Surface;
    pub fn SDL_SaveBMP_IO(surface: *mut SDL_Surface, dst: *mut SDL_IOStream, closeio: bool)
    -> bool;
    pub fn SDL_SaveBMP(surface: *mut SDL_Surface, file: *const c_char) -> bool;

    // -- Blit state --

    pub fn SDL_SetSurfaceRLE(surface: *mut SDL_Surface, enabled: bool) -> bool;
    pub fn SDL_SurfaceHasRLE(surface: *mut SDL_Surface) -> bool;
    pub fn SDL_SetSurfaceColorKey(surface: *mut SDL_Surface, enabled: bool, key: u32) -> bool;
    pub fn SDL_SurfaceHasColorKey(surface: *mut SDL_Surface) -> bool;
    pub fn SDL_GetSurfaceColorKey(surface: *mut SDL_Surface, key: *mut u32) -> bool;
    pub fn SDL_SetSurfaceColorMod(surface: *mut SDL_Surface, r: u8, g: u8, b: u8) -> bool;
    pub fn SDL_GetSurfaceColorMod(surface: *mut SDL_Surface, r: *mut u8, g: *mut u8, b: *mut u8)
    -> bool;
    pub fn SDL_SetSurfaceAlphaMod(surface: *mut SDL_Surface, alpha: u8) -> bool;
    pub fn SDL_GetSurfaceAlphaMod(surface: *mut SDL_Surface, alpha: *mut u8) -> bool;
    pub fn SDL_SetSurfaceBlendMode(surface: *mut SDL_Surface, blendMode: SDL_BlendMode) -> bool;
    pub fn SDL_GetSurfaceBlendMode(surface: *mut SDL_Surface, blendMode: *mut SDL_BlendMode)
    -> bool;
    /// A null `rect` disables clipping.
    pub fn SDL_SetSurfaceClipRect(surface: *mut SDL_Surface, rect: *const SDL_Rect) -> bool;
    pub fn SDL_GetSurfaceClipRect(surface: *mut SDL_Surface, rect: *mut SDL_Rect) -> bool;

    // -- Transformations --

    pub fn SDL_FlipSurface(surface: *mut SDL_Surface, flip: SDL_FlipMode) -> bool;
    pub fn SDL_DuplicateSurface(surface: *mut SDL_Surface) -> *mut SDL_Surface;
    pub fn SDL_ScaleSurface(
        surface: *mut SDL_Surface,
        width: c_int,
        height: c_int,
        scaleMode: SDL_ScaleMode,
    ) -> *mut SDL_Surface;
    pub fn SDL_ConvertSurface(surface: *mut SDL_Surface, format: SDL_PixelFormat)
    -> *mut SDL_Surface;
    pub fn SDL_ConvertSurfaceAndColorspace(
        surface: *mut SDL_Surface,
        format: SDL_PixelFormat,
        palette: *mut SDL_Palette,
        colorspace: SDL_Colorspace,
        props: SDL_PropertiesID,
    ) -> *mut SDL_Surface;

    // -- Raw pixel conversion --

    pub fn SDL_ConvertPixels(
        width: c_int,
        height: c_int,
        src_format: SDL_PixelFormat,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: SDL_PixelFormat,
        dst: *mut c_void,
        dst_pitch: c_int,
    ) -> bool;
    pub fn SDL_ConvertPixelsAndColorspace(
        width: c_int,
        height: c_int,
        src_format: SDL_PixelFormat,
        src_colorspace: SDL_Colorspace,
        src_properties: SDL_PropertiesID,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: SDL_PixelFormat,
        dst_colorspace: SDL_Colorspace,
        dst_properties: SDL_PropertiesID,
        dst: *mut c_void,
        dst_pitch: c_int,
    ) -> bool;
    pub fn SDL_PremultiplyAlpha(
        width: c_int,
        height: c_int,
        src_format: SDL_PixelFormat,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: SDL_PixelFormat,
        dst: *mut c_void,
        dst_pitch: c_int,
        linear: bool,
    ) -> bool;
    pub fn SDL_PremultiplySurfaceAlpha(surface: *mut SDL_Surface, linear: bool) -> bool;

    // -- Fills --

    pub fn SDL_ClearSurface(surface: *mut SDL_Surface, r: f32, g: f32, b: f32, a: f32) -> bool;
    /// A null `rect` fills the whole surface.
    pub fn SDL_FillSurfaceRect(dst: *mut SDL_Surface, rect: *const SDL_Rect, color: u32) -> bool;
    pub fn SDL_FillSurfaceRects(
        dst: *mut SDL_Surface,
        rects: *const SDL_Rect,
        count: c_int,
        color: u32,
    ) -> bool;

    // -- Blits --

    pub fn SDL_BlitSurface(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    pub fn SDL_BlitSurfaceUnchecked(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    pub fn SDL_BlitSurfaceScaled(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
        scaleMode: SDL_ScaleMode,
    ) -> bool;
    pub fn SDL_BlitSurfaceUncheckedScaled(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
        scaleMode: SDL_ScaleMode,
    ) -> bool;
    pub fn SDL_BlitSurfaceTiled(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    pub fn SDL_BlitSurfaceTiledWithScale(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        scale: f32,
        scaleMode: SDL_ScaleMode,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    pub fn SDL_BlitSurface9Grid(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        left_width: c_int,
        right_width: c_int,
        top_height: c_int,
        bottom_height: c_int,
        scale: f32,
        scaleMode: SDL_ScaleMode,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;

    // -- Pixel access --

    pub fn SDL_MapSurfaceRGB(surface: *mut SDL_Surface, r: u8, g: u8, b: u8) -> u32;
    pub fn SDL_MapSurfaceRGBA(surface: *mut SDL_Surface, r: u8, g: u8, b: u8, a: u8) -> u32;
    pub fn SDL_ReadSurfacePixel(
        surface: *mut SDL_Surface,
        x: c_int,
        y: c_int,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    ) -> bool;
    pub fn SDL_ReadSurfacePixelFloat(
        surface: *mut SDL_Surface,
        x: c_int,
        y: c_int,
        r: *mut f32,
        g: *mut f32,
        b: *mut f32,
        a: *mut f32,
    ) -> bool;
    pub fn SDL_WriteSurfacePixel(
        surface: *mut SDL_Surface,
        x: c_int,
        y: c_int,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> bool;
    pub fn SDL_WriteSurfacePixelFloat(
        surface: *mut SDL_Surface,
        x: c_int,
        y: c_int,
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    ) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn surface_layout() {
        let ptr = size_of::<*mut c_void>();
        assert_eq!(offset_of!(SDL_Surface, pitch), 16);
        assert_eq!(offset_of!(SDL_Surface, pixels), 20_usize.next_multiple_of(ptr));
        assert_eq!(offset_of!(SDL_Surface, refcount), offset_of!(SDL_Surface, pixels) + ptr);
    }

    #[test]
    fn must_lock_reads_flags() {
        let mut surface = SDL_Surface {
            flags: SDL_SURFACE_LOCK_NEEDED | SDL_SURFACE_PREALLOCATED,
            format: crate::pixels::SDL_PIXELFORMAT_ARGB8888,
            w: 1,
            h: 1,
            pitch: 4,
            pixels: core::ptr::null_mut(),
            refcount: 1,
            reserved: core::ptr::null_mut(),
        };
        // SAFETY: `surface` is a live local.
        assert!(unsafe { SDL_MUSTLOCK(&surface) }, "lock-needed flag is set");
        surface.flags = SDL_SURFACE_SIMD_ALIGNED;
        // SAFETY: `surface` is a live local.
        assert!(!unsafe { SDL_MUSTLOCK(&surface) }, "lock-needed flag is clear");
    }

    #[test]
    fn mode_values() {
        assert_eq!(SDL_SCALEMODE_LINEAR.0, 1);
        assert_eq!(SDL_FLIP_VERTICAL.0, 2);
    }
}
