// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Software surfaces and pixel conversion.
//!
//! [`Surface`] owns one reference to a native surface and releases it on
//! drop. Pixel memory is only reachable while the surface is locked, through
//! [`SurfaceLock`].
//!
//! The free functions [`convert_pixels`], [`convert_pixels_and_colorspace`]
//! and [`premultiply_alpha`] work on caller-owned byte slices. Each slice is
//! checked against its width, height, format and pitch before the native
//! call, so an undersized buffer is an [`Error::BufferTooSmall`] rather than
//! an out-of-bounds access.

use std::ffi::c_int;
use std::fmt;
use std::ptr::NonNull;

use stratum_core::properties::PropertiesId;
use stratum_core::rect::Rect;
use stratum_sys::pixels::{
    SDL_BYTESPERPIXEL, SDL_BITSPERPIXEL, SDL_CreatePalette, SDL_DestroyPalette,
    SDL_ISPIXELFORMAT_FOURCC, SDL_SetPaletteColors,
};
use stratum_sys::stdinc::SDL_free;
use stratum_sys::surface::{self as sys, SDL_FlipMode, SDL_ScaleMode, SDL_Surface};

pub use stratum_sys::blendmode::SDL_BlendMode as BlendMode;
pub use stratum_sys::pixels::{
    SDL_Color as Color, SDL_Colorspace as Colorspace, SDL_FColor as FColor,
    SDL_PixelFormat as PixelFormat,
};

use crate::error::{Error, Result, c_string, check, non_null, to_c_int};
use crate::properties::Properties;

/// Sampling used when scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Nearest-pixel sampling.
    #[default]
    Nearest,
    /// Linear filtering.
    Linear,
}

impl ScaleMode {
    const fn to_raw(self) -> SDL_ScaleMode {
        match self {
            Self::Nearest => SDL_ScaleMode::NEAREST,
            Self::Linear => SDL_ScaleMode::LINEAR,
        }
    }
}

/// Mirror axis for [`Surface::flip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipMode {
    /// Leave as is.
    None,
    /// Mirror left to right.
    Horizontal,
    /// Mirror top to bottom.
    Vertical,
}

impl FlipMode {
    const fn to_raw(self) -> SDL_FlipMode {
        match self {
            Self::None => SDL_FlipMode::NONE,
            Self::Horizontal => SDL_FlipMode::HORIZONTAL,
            Self::Vertical => SDL_FlipMode::VERTICAL,
        }
    }
}

/// Border sizes and scaling for [`Surface::blit_9grid`].
///
/// Corners are copied at `scale`, edges stretched along one axis and the
/// center along both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NineGrid {
    /// Width of the left column, in source pixels.
    pub left_width: i32,
    /// Width of the right column, in source pixels.
    pub right_width: i32,
    /// Height of the top row, in source pixels.
    pub top_height: i32,
    /// Height of the bottom row, in source pixels.
    pub bottom_height: i32,
    /// Scale applied to the corners; `0.0` means unscaled.
    pub scale: f32,
    /// Sampling for stretched regions.
    pub scale_mode: ScaleMode,
}

/// Format and row stride of a caller-owned pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    /// Pixel format.
    pub format: PixelFormat,
    /// Bytes from the start of one row to the next.
    pub pitch: usize,
}

impl PixelLayout {
    /// A layout with the given format and pitch.
    #[must_use]
    pub const fn new(format: PixelFormat, pitch: usize) -> Self {
        Self { format, pitch }
    }

    /// A tightly packed layout, or `None` for formats without a fixed row
    /// size (planar YUV, compressed).
    #[must_use]
    pub fn packed(format: PixelFormat, width: u32) -> Option<Self> {
        let pitch = row_bytes(format, width).ok()?;
        Some(Self { format, pitch })
    }

    /// Bytes spanned by the first plane's `height` rows. The last row need
    /// not be padded to the pitch.
    pub fn plane_len(&self, width: u32, height: u32) -> Result<usize> {
        let row = row_bytes(self.format, width)?;
        if height == 0 || width == 0 {
            return Ok(0);
        }
        if self.pitch < row {
            return Err(Error::Invalid(format!(
                "pitch {} is shorter than a {row}-byte row",
                self.pitch
            )));
        }
        let h = usize::try_from(height).map_err(|_| Error::SizeOverflow)?;
        mul(self.pitch, h - 1)?
            .checked_add(row)
            .ok_or(Error::SizeOverflow)
    }

    /// Bytes a `width` x `height` image in this layout occupies, including
    /// the chroma planes of planar YUV formats.
    pub fn required_len(&self, width: u32, height: u32) -> Result<usize> {
        let plane = self.plane_len(width, height)?;
        if plane == 0 {
            return Ok(0);
        }
        let h = usize::try_from(height).map_err(|_| Error::SizeOverflow)?;
        let luma = mul(self.pitch, h)?;
        let half_rows = h.div_ceil(2);
        let planes = match self.format {
            PixelFormat::YV12 | PixelFormat::IYUV => {
                mul(2, mul(self.pitch.div_ceil(2), half_rows)?)?
            }
            PixelFormat::NV12 | PixelFormat::NV21 => mul(self.pitch.div_ceil(2) * 2, half_rows)?,
            PixelFormat::P010 => mul(self.pitch.div_ceil(4) * 4, half_rows)?,
            _ => return Ok(plane),
        };
        luma.checked_add(planes).ok_or(Error::SizeOverflow)
    }

    fn check(&self, width: u32, height: u32, len: usize) -> Result<()> {
        let needed = self.required_len(width, height)?;
        if len < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: len,
            });
        }
        Ok(())
    }
}

fn mul(a: usize, b: usize) -> Result<usize> {
    a.checked_mul(b).ok_or(Error::SizeOverflow)
}

/// Bytes in one row of the first plane.
fn row_bytes(format: PixelFormat, width: u32) -> Result<usize> {
    let w = usize::try_from(width).map_err(|_| Error::SizeOverflow)?;
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        return match format {
            PixelFormat::YUY2 | PixelFormat::UYVY | PixelFormat::YVYU => mul(w.div_ceil(2), 4),
            PixelFormat::P010 => mul(w, 2),
            PixelFormat::YV12 | PixelFormat::IYUV | PixelFormat::NV12 | PixelFormat::NV21 => Ok(w),
            _ => Err(Error::Invalid(format!("{format:?} has no CPU pixel layout"))),
        };
    }
    let bytes = SDL_BYTESPERPIXEL(format) as usize;
    if bytes > 0 {
        return mul(w, bytes);
    }
    let bits = SDL_BITSPERPIXEL(format) as usize;
    if bits == 0 {
        return Err(Error::Invalid(format!("{format:?} has no CPU pixel layout")));
    }
    Ok(mul(w, bits)?.div_ceil(8))
}

fn dims(width: u32, height: u32) -> Result<(c_int, c_int)> {
    Ok((
        c_int::try_from(width).map_err(|_| Error::SizeOverflow)?,
        c_int::try_from(height).map_err(|_| Error::SizeOverflow)?,
    ))
}

fn rect_ptr(rect: Option<&Rect>) -> *const Rect {
    rect.map_or(core::ptr::null(), core::ptr::from_ref)
}

/// Converts pixels between formats.
pub fn convert_pixels(
    width: u32,
    height: u32,
    src_layout: PixelLayout,
    src: &[u8],
    dst_layout: PixelLayout,
    dst: &mut [u8],
) -> Result<()> {
    src_layout.check(width, height, src.len())?;
    dst_layout.check(width, height, dst.len())?;
    let (w, h) = dims(width, height)?;
    // SAFETY: both buffers were checked against their layouts above.
    check(unsafe {
        sys::SDL_ConvertPixels(
            w,
            h,
            src_layout.format,
            src.as_ptr().cast(),
            to_c_int(src_layout.pitch)?,
            dst_layout.format,
            dst.as_mut_ptr().cast(),
            to_c_int(dst_layout.pitch)?,
        )
    })
}

/// Converts pixels between formats and colorspaces.
///
/// `src_props` and `dst_props` carry HDR parameters such as
/// [`SDL_PROP_SURFACE_SDR_WHITE_POINT_FLOAT`](sys::SDL_PROP_SURFACE_SDR_WHITE_POINT_FLOAT).
#[expect(clippy::too_many_arguments, reason = "mirrors the native signature")]
pub fn convert_pixels_and_colorspace(
    width: u32,
    height: u32,
    src_layout: PixelLayout,
    src_colorspace: Colorspace,
    src_props: Option<PropertiesId>,
    src: &[u8],
    dst_layout: PixelLayout,
    dst_colorspace: Colorspace,
    dst_props: Option<PropertiesId>,
    dst: &mut [u8],
) -> Result<()> {
    src_layout.check(width, height, src.len())?;
    dst_layout.check(width, height, dst.len())?;
    let (w, h) = dims(width, height)?;
    // SAFETY: both buffers were checked against their layouts above.
    check(unsafe {
        sys::SDL_ConvertPixelsAndColorspace(
            w,
            h,
            src_layout.format,
            src_colorspace,
            src_props.unwrap_or_default(),
            src.as_ptr().cast(),
            to_c_int(src_layout.pitch)?,
            dst_layout.format,
            dst_colorspace,
            dst_props.unwrap_or_default(),
            dst.as_mut_ptr().cast(),
            to_c_int(dst_layout.pitch)?,
        )
    })
}

/// Premultiplies the alpha channel into the color channels while
/// converting. `linear` does the math in linear light.
pub fn premultiply_alpha(
    width: u32,
    height: u32,
    src_layout: PixelLayout,
    src: &[u8],
    dst_layout: PixelLayout,
    dst: &mut [u8],
    linear: bool,
) -> Result<()> {
    src_layout.check(width, height, src.len())?;
    dst_layout.check(width, height, dst.len())?;
    let (w, h) = dims(width, height)?;
    // SAFETY: both buffers were checked against their layouts above.
    check(unsafe {
        sys::SDL_PremultiplyAlpha(
            w,
            h,
            src_layout.format,
            src.as_ptr().cast(),
            to_c_int(src_layout.pitch)?,
            dst_layout.format,
            dst.as_mut_ptr().cast(),
            to_c_int(dst_layout.pitch)?,
            linear,
        )
    })
}

/// An owned reference to a native surface.
pub struct Surface {
    raw: NonNull<SDL_Surface>,
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format())
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocates a surface.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let (w, h) = dims(width, height)?;
        // SAFETY: plain value arguments.
        let raw = non_null(unsafe { sys::SDL_CreateSurface(w, h, format) })?;
        Ok(Self { raw })
    }

    /// Wraps caller-owned pixels without copying them.
    ///
    /// # Safety
    ///
    /// `pixels` must point to at least
    /// [`layout.required_len(width, height)`](PixelLayout::required_len)
    /// bytes that stay valid for the surface's whole lifetime, including any
    /// references taken through [`images`](Self::images).
    pub unsafe fn from_pixels(
        width: u32,
        height: u32,
        layout: PixelLayout,
        pixels: *mut u8,
    ) -> Result<Self> {
        let (w, h) = dims(width, height)?;
        // SAFETY: the caller keeps `pixels` valid for the surface's lifetime.
        let raw = non_null(unsafe {
            sys::SDL_CreateSurfaceFrom(w, h, layout.format, pixels.cast(), to_c_int(layout.pitch)?)
        })?;
        Ok(Self { raw })
    }

    /// Takes over one reference to a native surface.
    ///
    /// # Safety
    ///
    /// `raw` must be a live surface whose reference is not released
    /// elsewhere.
    #[must_use]
    pub const unsafe fn from_raw(raw: NonNull<SDL_Surface>) -> Self {
        Self { raw }
    }

    /// Returns the native surface; it stays owned by `self`.
    #[must_use]
    pub const fn as_ptr(&self) -> *mut SDL_Surface {
        self.raw.as_ptr()
    }

    /// Loads a BMP file.
    pub fn load_bmp(path: &str) -> Result<Self> {
        let path = c_string(path)?;
        // SAFETY: valid C string.
        let raw = non_null(unsafe { sys::SDL_LoadBMP(path.as_ptr()) })?;
        Ok(Self { raw })
    }

    /// Saves as a BMP file.
    pub fn save_bmp(&self, path: &str) -> Result<()> {
        let path = c_string(path)?;
        // SAFETY: live surface and valid C string.
        check(unsafe { sys::SDL_SaveBMP(self.as_ptr(), path.as_ptr()) })
    }

    fn header(&self) -> &SDL_Surface {
        // SAFETY: the public header fields stay valid while we hold a
        // reference, and only the library writes them.
        unsafe { self.raw.as_ref() }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.header().w.unsigned_abs()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.header().h.unsigned_abs()
    }

    /// Bytes between rows.
    #[must_use]
    pub fn pitch(&self) -> usize {
        self.header().pitch.unsigned_abs() as usize
    }

    /// Pixel format.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.header().format
    }

    /// `true` if pixels may only be touched while locked.
    #[must_use]
    pub fn must_lock(&self) -> bool {
        // SAFETY: live surface.
        unsafe { sys::SDL_MUSTLOCK(self.as_ptr()) }
    }

    /// The surface's property group (HDR parameters, cursor hotspot).
    pub fn properties(&self) -> Result<Properties> {
        // SAFETY: live surface.
        let id = unsafe { sys::SDL_GetSurfaceProperties(self.as_ptr()) };
        if id.is_valid() {
            Ok(Properties::borrowed(id))
        } else {
            Err(Error::native())
        }
    }

    /// Sets the colorspace pixels are interpreted in.
    pub fn set_colorspace(&mut self, colorspace: Colorspace) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_SetSurfaceColorspace(self.as_ptr(), colorspace) })
    }

    /// Returns the colorspace.
    #[must_use]
    pub fn colorspace(&self) -> Colorspace {
        // SAFETY: live surface.
        unsafe { sys::SDL_GetSurfaceColorspace(self.as_ptr()) }
    }

    /// Gives an indexed surface a palette holding `colors`.
    pub fn set_palette(&mut self, colors: &[Color]) -> Result<()> {
        let count = to_c_int(colors.len())?;
        // SAFETY: plain value argument.
        let palette = non_null(unsafe { SDL_CreatePalette(count) })?;
        // SAFETY: `palette` is live and sized for `colors`; the surface takes
        // its own reference, so ours is released either way.
        unsafe {
            let ok = SDL_SetPaletteColors(palette.as_ptr(), colors.as_ptr(), 0, count)
                && sys::SDL_SetSurfacePalette(self.as_ptr(), palette.as_ptr());
            let result = check(ok);
            SDL_DestroyPalette(palette.as_ptr());
            result
        }
    }

    /// Adds a differently sized version of the image, used for high-DPI
    /// cursors and icons.
    pub fn add_alternate_image(&mut self, image: &Self) -> Result<()> {
        // SAFETY: both surfaces are live; the library takes its own reference.
        check(unsafe { sys::SDL_AddSurfaceAlternateImage(self.as_ptr(), image.as_ptr()) })
    }

    /// `true` if alternate images were added.
    #[must_use]
    pub fn has_alternate_images(&self) -> bool {
        // SAFETY: live surface.
        unsafe { sys::SDL_SurfaceHasAlternateImages(self.as_ptr()) }
    }

    /// Returns this surface followed by its alternate images.
    pub fn images(&self) -> Result<Vec<Self>> {
        let mut count: c_int = 0;
        // SAFETY: live surface and valid out pointer.
        let list = non_null(unsafe { sys::SDL_GetSurfaceImages(self.as_ptr(), &mut count) })?;
        let count = usize::try_from(count).unwrap_or(0);
        let mut images = Vec::with_capacity(count);
        for i in 0..count {
            // SAFETY: the list holds `count` live surfaces; each gets its own
            // reference before it is wrapped.
            unsafe {
                let image = *list.as_ptr().add(i);
                if let Some(image) = NonNull::new(image) {
                    (*image.as_ptr()).refcount += 1;
                    images.push(Self { raw: image });
                }
            }
        }
        // SAFETY: allocated by the library.
        unsafe { SDL_free(list.as_ptr().cast()) };
        Ok(images)
    }

    /// Drops every alternate image.
    pub fn remove_alternate_images(&mut self) {
        // SAFETY: live surface.
        unsafe { sys::SDL_RemoveSurfaceAlternateImages(self.as_ptr()) };
    }

    /// Locks the pixels for direct access.
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_LockSurface(self.as_ptr()) })?;
        Ok(SurfaceLock { surface: self })
    }

    /// Enables run-length encoding, which speeds up color-key blits.
    pub fn set_rle(&mut self, enabled: bool) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_SetSurfaceRLE(self.as_ptr(), enabled) })
    }

    /// `true` if run-length encoding is enabled.
    #[must_use]
    pub fn has_rle(&self) -> bool {
        // SAFETY: live surface.
        unsafe { sys::SDL_SurfaceHasRLE(self.as_ptr()) }
    }

    /// Sets or clears the transparent pixel value.
    pub fn set_color_key(&mut self, key: Option<u32>) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_SetSurfaceColorKey(self.as_ptr(), key.is_some(), key.unwrap_or(0)) })
    }

    /// Returns the transparent pixel value, if set.
    #[must_use]
    pub fn color_key(&self) -> Option<u32> {
        let mut key = 0;
        // SAFETY: live surface and valid out pointer.
        unsafe { sys::SDL_GetSurfaceColorKey(self.as_ptr(), &mut key) }.then_some(key)
    }

    /// Sets the color multiplied into blits.
    pub fn set_color_mod(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_SetSurfaceColorMod(self.as_ptr(), r, g, b) })
    }

    /// Returns the color multiplied into blits.
    pub fn color_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        // SAFETY: live surface and valid out pointers.
        check(unsafe { sys::SDL_GetSurfaceColorMod(self.as_ptr(), &mut r, &mut g, &mut b) })?;
        Ok((r, g, b))
    }

    /// Sets the alpha multiplied into blits.
    pub fn set_alpha_mod(&mut self, alpha: u8) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_SetSurfaceAlphaMod(self.as_ptr(), alpha) })
    }

    /// Returns the alpha multiplied into blits.
    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        // SAFETY: live surface and valid out pointer.
        check(unsafe { sys::SDL_GetSurfaceAlphaMod(self.as_ptr(), &mut alpha) })?;
        Ok(alpha)
    }

    /// Sets how blits from this surface combine with the destination.
    pub fn set_blend_mode(&mut self, mode: BlendMode) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_SetSurfaceBlendMode(self.as_ptr(), mode) })
    }

    /// Returns the blend mode.
    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut mode = BlendMode::NONE;
        // SAFETY: live surface and valid out pointer.
        check(unsafe { sys::SDL_GetSurfaceBlendMode(self.as_ptr(), &mut mode) })?;
        Ok(mode)
    }

    /// Restricts blits into this surface to `rect`, or lifts the
    /// restriction with `None`. Returns `false` if `rect` misses the surface
    /// entirely, in which case nothing will be drawn.
    pub fn set_clip_rect(&mut self, rect: Option<&Rect>) -> bool {
        // SAFETY: live surface; `rect` is null or valid.
        unsafe { sys::SDL_SetSurfaceClipRect(self.as_ptr(), rect_ptr(rect)) }
    }

    /// Returns the clip rectangle.
    pub fn clip_rect(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        // SAFETY: live surface and valid out pointer.
        check(unsafe { sys::SDL_GetSurfaceClipRect(self.as_ptr(), &mut rect) })?;
        Ok(rect)
    }

    /// Mirrors the surface in place.
    pub fn flip(&mut self, mode: FlipMode) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_FlipSurface(self.as_ptr(), mode.to_raw()) })
    }

    /// Copies the surface, including its palette and alternate images.
    pub fn duplicate(&self) -> Result<Self> {
        // SAFETY: live surface.
        let raw = non_null(unsafe { sys::SDL_DuplicateSurface(self.as_ptr()) })?;
        Ok(Self { raw })
    }

    /// Returns a resized copy.
    pub fn scaled(&self, width: u32, height: u32, mode: ScaleMode) -> Result<Self> {
        let (w, h) = dims(width, height)?;
        // SAFETY: live surface.
        let raw = non_null(unsafe { sys::SDL_ScaleSurface(self.as_ptr(), w, h, mode.to_raw()) })?;
        Ok(Self { raw })
    }

    /// Returns a copy in another pixel format.
    pub fn convert(&self, format: PixelFormat) -> Result<Self> {
        // SAFETY: live surface.
        let raw = non_null(unsafe { sys::SDL_ConvertSurface(self.as_ptr(), format) })?;
        Ok(Self { raw })
    }

    /// Returns a copy in another pixel format and colorspace.
    pub fn convert_with_colorspace(
        &self,
        format: PixelFormat,
        colorspace: Colorspace,
        props: Option<PropertiesId>,
    ) -> Result<Self> {
        // SAFETY: live surface; a null palette lets the library pick one.
        let raw = non_null(unsafe {
            sys::SDL_ConvertSurfaceAndColorspace(
                self.as_ptr(),
                format,
                core::ptr::null_mut(),
                colorspace,
                props.unwrap_or_default(),
            )
        })?;
        Ok(Self { raw })
    }

    /// Premultiplies alpha in place.
    pub fn premultiply_alpha(&mut self, linear: bool) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_PremultiplySurfaceAlpha(self.as_ptr(), linear) })
    }

    /// Fills the whole surface with a float color, ignoring the clip rect.
    pub fn clear(&mut self, color: FColor) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe { sys::SDL_ClearSurface(self.as_ptr(), color.r, color.g, color.b, color.a) })
    }

    /// Fills `rect` (or the clip area for `None`) with a mapped pixel value.
    pub fn fill_rect(&mut self, rect: Option<&Rect>, color: u32) -> Result<()> {
        // SAFETY: live surface; `rect` is null or valid.
        check(unsafe { sys::SDL_FillSurfaceRect(self.as_ptr(), rect_ptr(rect), color) })
    }

    /// Fills several rectangles with a mapped pixel value.
    pub fn fill_rects(&mut self, rects: &[Rect], color: u32) -> Result<()> {
        let count = to_c_int(rects.len())?;
        // SAFETY: live surface; `rects` holds `count` rectangles.
        check(unsafe { sys::SDL_FillSurfaceRects(self.as_ptr(), rects.as_ptr(), count, color) })
    }

    /// Copies `src_rect` (or all of `self`) to `dst` at the position of
    /// `dst_rect` (or the origin), clipped. Only the position of `dst_rect`
    /// is used.
    pub fn blit(&self, src_rect: Option<&Rect>, dst: &mut Self, dst_rect: Option<&Rect>) -> Result<()> {
        // SAFETY: both surfaces are live and distinct; rects are null or valid.
        check(unsafe {
            sys::SDL_BlitSurface(self.as_ptr(), rect_ptr(src_rect), dst.as_ptr(), rect_ptr(dst_rect))
        })
    }

    /// Copies with stretching to fill `dst_rect` (or all of `dst`).
    pub fn blit_scaled(
        &self,
        src_rect: Option<&Rect>,
        dst: &mut Self,
        dst_rect: Option<&Rect>,
        mode: ScaleMode,
    ) -> Result<()> {
        // SAFETY: both surfaces are live and distinct; rects are null or valid.
        check(unsafe {
            sys::SDL_BlitSurfaceScaled(
                self.as_ptr(),
                rect_ptr(src_rect),
                dst.as_ptr(),
                rect_ptr(dst_rect),
                mode.to_raw(),
            )
        })
    }

    /// Repeats `src_rect` across `dst_rect`.
    pub fn blit_tiled(&self, src_rect: Option<&Rect>, dst: &mut Self, dst_rect: Option<&Rect>) -> Result<()> {
        // SAFETY: both surfaces are live and distinct; rects are null or valid.
        check(unsafe {
            sys::SDL_BlitSurfaceTiled(self.as_ptr(), rect_ptr(src_rect), dst.as_ptr(), rect_ptr(dst_rect))
        })
    }

    /// Repeats `src_rect`, scaled by `scale`, across `dst_rect`.
    pub fn blit_tiled_with_scale(
        &self,
        src_rect: Option<&Rect>,
        scale: f32,
        mode: ScaleMode,
        dst: &mut Self,
        dst_rect: Option<&Rect>,
    ) -> Result<()> {
        // SAFETY: both surfaces are live and distinct; rects are null or valid.
        check(unsafe {
            sys::SDL_BlitSurfaceTiledWithScale(
                self.as_ptr(),
                rect_ptr(src_rect),
                scale,
                mode.to_raw(),
                dst.as_ptr(),
                rect_ptr(dst_rect),
            )
        })
    }

    /// Stretches `src_rect` into `dst_rect` as a nine-patch.
    pub fn blit_9grid(
        &self,
        src_rect: Option<&Rect>,
        grid: NineGrid,
        dst: &mut Self,
        dst_rect: Option<&Rect>,
    ) -> Result<()> {
        // SAFETY: both surfaces are live and distinct; rects are null or valid.
        check(unsafe {
            sys::SDL_BlitSurface9Grid(
                self.as_ptr(),
                rect_ptr(src_rect),
                grid.left_width,
                grid.right_width,
                grid.top_height,
                grid.bottom_height,
                grid.scale,
                grid.scale_mode.to_raw(),
                dst.as_ptr(),
                rect_ptr(dst_rect),
            )
        })
    }

    /// Maps an opaque color to this surface's pixel format.
    #[must_use]
    pub fn map_rgb(&self, r: u8, g: u8, b: u8) -> u32 {
        // SAFETY: live surface.
        unsafe { sys::SDL_MapSurfaceRGB(self.as_ptr(), r, g, b) }
    }

    /// Maps a color to this surface's pixel format.
    #[must_use]
    pub fn map_rgba(&self, color: Color) -> u32 {
        // SAFETY: live surface.
        unsafe { sys::SDL_MapSurfaceRGBA(self.as_ptr(), color.r, color.g, color.b, color.a) }
    }

    /// Reads one pixel.
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<Color> {
        let mut c = Color::default();
        // SAFETY: live surface and valid out pointers.
        check(unsafe {
            sys::SDL_ReadSurfacePixel(self.as_ptr(), x, y, &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        })?;
        Ok(c)
    }

    /// Reads one pixel as floats.
    pub fn read_pixel_float(&self, x: i32, y: i32) -> Result<FColor> {
        let mut c = FColor::default();
        // SAFETY: live surface and valid out pointers.
        check(unsafe {
            sys::SDL_ReadSurfacePixelFloat(self.as_ptr(), x, y, &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        })?;
        Ok(c)
    }

    /// Writes one pixel.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe {
            sys::SDL_WriteSurfacePixel(self.as_ptr(), x, y, color.r, color.g, color.b, color.a)
        })
    }

    /// Writes one pixel from floats.
    pub fn write_pixel_float(&mut self, x: i32, y: i32, color: FColor) -> Result<()> {
        // SAFETY: live surface.
        check(unsafe {
            sys::SDL_WriteSurfacePixelFloat(self.as_ptr(), x, y, color.r, color.g, color.b, color.a)
        })
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        // SAFETY: releases the one reference this handle owns.
        unsafe { sys::SDL_DestroySurface(self.as_ptr()) };
    }
}

/// Direct pixel access; unlocks on drop.
#[must_use = "the surface is unlocked when the guard drops"]
pub struct SurfaceLock<'a> {
    surface: &'a mut Surface,
}

impl fmt::Debug for SurfaceLock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceLock")
            .field("surface", &self.surface)
            .finish()
    }
}

impl SurfaceLock<'_> {
    /// Bytes between rows.
    #[must_use]
    pub fn pitch(&self) -> usize {
        self.surface.pitch()
    }

    /// Bytes of the first plane; the last row stops at the image width.
    fn len(&self) -> usize {
        PixelLayout::new(self.surface.format(), self.pitch())
            .plane_len(self.surface.width(), self.surface.height())
            .unwrap_or(0)
    }

    /// The pixel rows of the first plane, `pitch` bytes apart.
    ///
    /// The last row is not padded to the pitch. Formats without a CPU pixel
    /// layout yield an empty slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        let ptr = self.surface.header().pixels.cast::<u8>();
        if ptr.is_null() {
            return &[];
        }
        // SAFETY: a locked surface exposes at least its first plane, and
        // `from_pixels` callers provide at least as much.
        unsafe { core::slice::from_raw_parts(ptr, self.len()) }
    }

    /// The pixel rows, writable.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        let ptr = self.surface.header().pixels.cast::<u8>();
        if ptr.is_null() {
            return &mut [];
        }
        let len = self.len();
        // SAFETY: as in `pixels`; the guard borrows the surface mutably.
        unsafe { core::slice::from_raw_parts_mut(ptr, len) }
    }

    /// One row of pixels including its padding, or `None` past the bottom.
    /// The last row has no padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.surface.height() {
            return None;
        }
        let pixels = self.pixels();
        let start = self.pitch().checked_mul(y as usize)?;
        let end = start.saturating_add(self.pitch()).min(pixels.len());
        pixels.get(start..end)
    }
}

impl Drop for SurfaceLock<'_> {
    fn drop(&mut self) {
        // SAFETY: locked in `Surface::lock`.
        unsafe { sys::SDL_UnlockSurface(self.surface.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_rows() {
        assert_eq!(row_bytes(PixelFormat::RGBA8888, 10).unwrap(), 40);
        assert_eq!(row_bytes(PixelFormat::RGB24, 3).unwrap(), 9);
        assert_eq!(row_bytes(PixelFormat::XRGB8888, 2).unwrap(), 8);
        assert_eq!(row_bytes(PixelFormat::INDEX1MSB, 9).unwrap(), 2);
        assert_eq!(row_bytes(PixelFormat::INDEX4LSB, 3).unwrap(), 2);
        assert_eq!(row_bytes(PixelFormat::YUY2, 3).unwrap(), 8);
    }

    #[test]
    fn last_row_may_be_short() {
        let layout = PixelLayout::new(PixelFormat::RGBA8888, 64);
        assert_eq!(layout.required_len(10, 3).unwrap(), 64 * 2 + 40);
        assert_eq!(layout.required_len(0, 3).unwrap(), 0);
        assert_eq!(layout.required_len(10, 0).unwrap(), 0);
    }

    #[test]
    fn plane_len_matches_single_plane_requirement() {
        let layout = PixelLayout::new(PixelFormat::RGBA8888, 64);
        assert_eq!(layout.plane_len(10, 3).unwrap(), 64 * 2 + 40);
        assert_eq!(layout.plane_len(10, 3), layout.required_len(10, 3));
        assert_eq!(layout.plane_len(10, 1).unwrap(), 40);

        let yv12 = PixelLayout::new(PixelFormat::YV12, 8);
        assert_eq!(yv12.plane_len(8, 4).unwrap(), 32);
        assert!(
            yv12.plane_len(8, 4).unwrap() <= yv12.required_len(8, 4).unwrap(),
            "the first plane fits in the full image"
        );
    }

    #[test]
    fn planar_yuv_sizes() {
        let yv12 = PixelLayout::new(PixelFormat::YV12, 8);
        assert_eq!(yv12.required_len(8, 4).unwrap(), 32 + 2 * 4 * 2);
        let nv12 = PixelLayout::new(PixelFormat::NV12, 7);
        assert_eq!(nv12.required_len(7, 3).unwrap(), 21 + 8 * 2);
        let p010 = PixelLayout::new(PixelFormat::P010, 16);
        assert_eq!(p010.required_len(8, 2).unwrap(), 32 + 16);
    }

    #[test]
    fn short_buffers_are_rejected() {
        let layout = PixelLayout::packed(PixelFormat::RGBA8888, 4).unwrap();
        assert_eq!(layout.pitch, 16);
        assert_eq!(
            layout.check(4, 4, 63),
            Err(Error::BufferTooSmall {
                needed: 64,
                actual: 63
            })
        );
        assert!(layout.check(4, 4, 64).is_ok(), "exact length is enough");
    }

    #[test]
    fn narrow_pitch_is_invalid() {
        let layout = PixelLayout::new(PixelFormat::RGBA8888, 12);
        assert!(
            matches!(layout.required_len(4, 1), Err(Error::Invalid(_))),
            "a 16-byte row does not fit a 12-byte pitch"
        );
    }

    #[test]
    fn opaque_formats_have_no_layout() {
        assert!(PixelLayout::packed(PixelFormat::MJPG, 4).is_none(), "compressed");
        assert!(PixelLayout::packed(PixelFormat::UNKNOWN, 4).is_none(), "unknown");
    }

    #[test]
    fn rect_pointer() {
        let r = Rect::new(1, 2, 3, 4);
        assert!(rect_ptr(None).is_null(), "absent rect is null");
        assert_eq!(rect_ptr(Some(&r)), &raw const r);
    }

    #[test]
    fn dims_reject_huge_sizes() {
        assert_eq!(dims(u32::MAX, 1), Err(Error::SizeOverflow));
        assert_eq!(dims(640, 480).unwrap(), (640, 480));
    }
}
