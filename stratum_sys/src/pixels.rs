// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_pixels.h`: pixel formats, colorspaces, colors and palettes.
//!
//! Pixel formats and colorspaces are bit-packed `u32`s. The packing macros of
//! the header are provided as `const fn`s, and every named format is built
//! with them, so the catalog below reads like the header.

use core::ffi::{c_char, c_int};

pub const SDL_ALPHA_OPAQUE: u8 = 255;
pub const SDL_ALPHA_OPAQUE_FLOAT: f32 = 1.0;
pub const SDL_ALPHA_TRANSPARENT: u8 = 0;
pub const SDL_ALPHA_TRANSPARENT_FLOAT: f32 = 0.0;

c_enum! {
    pub struct SDL_PixelType(c_int) {
        UNKNOWN = SDL_PIXELTYPE_UNKNOWN = 0,
        INDEX1 = SDL_PIXELTYPE_INDEX1 = 1,
        INDEX4 = SDL_PIXELTYPE_INDEX4 = 2,
        INDEX8 = SDL_PIXELTYPE_INDEX8 = 3,
        PACKED8 = SDL_PIXELTYPE_PACKED8 = 4,
        PACKED16 = SDL_PIXELTYPE_PACKED16 = 5,
        PACKED32 = SDL_PIXELTYPE_PACKED32 = 6,
        ARRAYU8 = SDL_PIXELTYPE_ARRAYU8 = 7,
        ARRAYU16 = SDL_PIXELTYPE_ARRAYU16 = 8,
        ARRAYU32 = SDL_PIXELTYPE_ARRAYU32 = 9,
        ARRAYF16 = SDL_PIXELTYPE_ARRAYF16 = 10,
        ARRAYF32 = SDL_PIXELTYPE_ARRAYF32 = 11,
        INDEX2 = SDL_PIXELTYPE_INDEX2 = 12,
    }
}

c_enum! {
    pub struct SDL_BitmapOrder(c_int) {
        NONE = SDL_BITMAPORDER_NONE = 0,
        _4321 = SDL_BITMAPORDER_4321 = 1,
        _1234 = SDL_BITMAPORDER_1234 = 2,
    }
}

c_enum! {
    pub struct SDL_PackedOrder(c_int) {
        NONE = SDL_PACKEDORDER_NONE = 0,
        XRGB = SDL_PACKEDORDER_XRGB = 1,
        RGBX = SDL_PACKEDORDER_RGBX = 2,
        ARGB = SDL_PACKEDORDER_ARGB = 3,
        RGBA = SDL_PACKEDORDER_RGBA = 4,
        XBGR = SDL_PACKEDORDER_XBGR = 5,
        BGRX = SDL_PACKEDORDER_BGRX = 6,
        ABGR = SDL_PACKEDORDER_ABGR = 7,
        BGRA = SDL_PACKEDORDER_BGRA = 8,
    }
}

c_enum! {
    pub struct SDL_ArrayOrder(c_int) {
        NONE = SDL_ARRAYORDER_NONE = 0,
        RGB = SDL_ARRAYORDER_RGB = 1,
        RGBA = SDL_ARRAYORDER_RGBA = 2,
        ARGB = SDL_ARRAYORDER_ARGB = 3,
        BGR = SDL_ARRAYORDER_BGR = 4,
        BGRA = SDL_ARRAYORDER_BGRA = 5,
        ABGR = SDL_ARRAYORDER_ABGR = 6,
    }
}

c_enum! {
    pub struct SDL_PackedLayout(c_int) {
        NONE = SDL_PACKEDLAYOUT_NONE = 0,
        _332 = SDL_PACKEDLAYOUT_332 = 1,
        _4444 = SDL_PACKEDLAYOUT_4444 = 2,
        _1555 = SDL_PACKEDLAYOUT_1555 = 3,
        _5551 = SDL_PACKEDLAYOUT_5551 = 4,
        _565 = SDL_PACKEDLAYOUT_565 = 5,
        _8888 = SDL_PACKEDLAYOUT_8888 = 6,
        _2101010 = SDL_PACKEDLAYOUT_2101010 = 7,
        _1010102 = SDL_PACKEDLAYOUT_1010102 = 8,
    }
}

/// Packs four ASCII bytes little-endian, as `SDL_FOURCC` does.
#[inline]
#[must_use]
pub const fn SDL_FOURCC(a: u8, b: u8, c: u8, d: u8) -> u32 {
    u32::from_le_bytes([a, b, c, d])
}

#[inline]
#[must_use]
pub const fn SDL_DEFINE_PIXELFOURCC(a: u8, b: u8, c: u8, d: u8) -> SDL_PixelFormat {
    SDL_PixelFormat(SDL_FOURCC(a, b, c, d))
}

/// Packs a non-FOURCC pixel format.
///
/// `order` is a [`SDL_BitmapOrder`], [`SDL_PackedOrder`] or
/// [`SDL_ArrayOrder`] value and `layout` a [`SDL_PackedLayout`] value, given
/// as their raw integers.
#[inline]
#[must_use]
pub const fn SDL_DEFINE_PIXELFORMAT(
    r#type: SDL_PixelType,
    order: c_int,
    layout: SDL_PackedLayout,
    bits: u32,
    bytes: u32,
) -> SDL_PixelFormat {
    SDL_PixelFormat(
        (1 << 28)
            | ((r#type.0 as u32) << 24)
            | ((order as u32) << 20)
            | ((layout.0 as u32) << 16)
            | (bits << 8)
            | bytes,
    )
}

c_enum! {
    /// A pixel format.
    pub struct SDL_PixelFormat(u32) {
        UNKNOWN = SDL_PIXELFORMAT_UNKNOWN = 0,
        INDEX1LSB = SDL_PIXELFORMAT_INDEX1LSB = indexed(SDL_PIXELTYPE_INDEX1, SDL_BITMAPORDER_4321, 1),
        INDEX1MSB = SDL_PIXELFORMAT_INDEX1MSB = indexed(SDL_PIXELTYPE_INDEX1, SDL_BITMAPORDER_1234, 1),
        INDEX2LSB = SDL_PIXELFORMAT_INDEX2LSB = indexed(SDL_PIXELTYPE_INDEX2, SDL_BITMAPORDER_4321, 2),
        INDEX2MSB = SDL_PIXELFORMAT_INDEX2MSB = indexed(SDL_PIXELTYPE_INDEX2, SDL_BITMAPORDER_1234, 2),
        INDEX4LSB = SDL_PIXELFORMAT_INDEX4LSB = indexed(SDL_PIXELTYPE_INDEX4, SDL_BITMAPORDER_4321, 4),
        INDEX4MSB = SDL_PIXELFORMAT_INDEX4MSB = indexed(SDL_PIXELTYPE_INDEX4, SDL_BITMAPORDER_1234, 4),
        INDEX8 = SDL_PIXELFORMAT_INDEX8 = SDL_DEFINE_PIXELFORMAT(
            SDL_PIXELTYPE_INDEX8, 0, SDL_PACKEDLAYOUT_NONE, 8, 1,
        ).0,
        RGB332 = SDL_PIXELFORMAT_RGB332 = packed(SDL_PIXELTYPE_PACKED8, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_332, 8, 1),
        XRGB4444 = SDL_PIXELFORMAT_XRGB4444 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_4444, 12, 2),
        XBGR4444 = SDL_PIXELFORMAT_XBGR4444 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_4444, 12, 2),
        XRGB1555 = SDL_PIXELFORMAT_XRGB1555 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_1555, 15, 2),
        XBGR1555 = SDL_PIXELFORMAT_XBGR1555 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_1555, 15, 2),
        ARGB4444 = SDL_PIXELFORMAT_ARGB4444 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_4444, 16, 2),
        RGBA4444 = SDL_PIXELFORMAT_RGBA4444 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_4444, 16, 2),
        ABGR4444 = SDL_PIXELFORMAT_ABGR4444 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_4444, 16, 2),
        BGRA4444 = SDL_PIXELFORMAT_BGRA4444 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_4444, 16, 2),
        ARGB1555 = SDL_PIXELFORMAT_ARGB1555 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_1555, 16, 2),
        RGBA5551 = SDL_PIXELFORMAT_RGBA5551 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_5551, 16, 2),
        ABGR1555 = SDL_PIXELFORMAT_ABGR1555 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_1555, 16, 2),
        BGRA5551 = SDL_PIXELFORMAT_BGRA5551 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_5551, 16, 2),
        RGB565 = SDL_PIXELFORMAT_RGB565 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_565, 16, 2),
        BGR565 = SDL_PIXELFORMAT_BGR565 = packed(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_565, 16, 2),
        RGB24 = SDL_PIXELFORMAT_RGB24 = array(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_RGB, 24, 3),
        BGR24 = SDL_PIXELFORMAT_BGR24 = array(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_BGR, 24, 3),
        XRGB8888 = SDL_PIXELFORMAT_XRGB8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_8888, 24, 4),
        RGBX8888 = SDL_PIXELFORMAT_RGBX8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_RGBX, SDL_PACKEDLAYOUT_8888, 24, 4),
        XBGR8888 = SDL_PIXELFORMAT_XBGR8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_8888, 24, 4),
        BGRX8888 = SDL_PIXELFORMAT_BGRX8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_BGRX, SDL_PACKEDLAYOUT_8888, 24, 4),
        ARGB8888 = SDL_PIXELFORMAT_ARGB8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_8888, 32, 4),
        RGBA8888 = SDL_PIXELFORMAT_RGBA8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_8888, 32, 4),
        ABGR8888 = SDL_PIXELFORMAT_ABGR8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_8888, 32, 4),
        BGRA8888 = SDL_PIXELFORMAT_BGRA8888 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_8888, 32, 4),
        XRGB2101010 = SDL_PIXELFORMAT_XRGB2101010 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_2101010, 32, 4),
        XBGR2101010 = SDL_PIXELFORMAT_XBGR2101010 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_2101010, 32, 4),
        ARGB2101010 = SDL_PIXELFORMAT_ARGB2101010 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_2101010, 32, 4),
        ABGR2101010 = SDL_PIXELFORMAT_ABGR2101010 = packed(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_2101010, 32, 4),
        RGB48 = SDL_PIXELFORMAT_RGB48 = array(SDL_PIXELTYPE_ARRAYU16, SDL_ARRAYORDER_RGB, 48, 6),
        BGR48 = SDL_PIXELFORMAT_BGR48 = array(SDL_PIXELTYPE_ARRAYU16, SDL_ARRAYORDER_BGR, 48, 6),
        RGBA64 = SDL_PIXELFORMAT_RGBA64 = array(SDL_PIXELTYPE_ARRAYU16, SDL_ARRAYORDER_RGBA, 64, 8),
        ARGB64 = SDL_PIXELFORMAT_ARGB64 = array(SDL_PIXELTYPE_ARRAYU16, SDL_ARRAYORDER_ARGB, 64, 8),
        BGRA64 = SDL_PIXELFORMAT_BGRA64 = array(SDL_PIXELTYPE_ARRAYU16, SDL_ARRAYORDER_BGRA, 64, 8),
        ABGR64 = SDL_PIXELFORMAT_ABGR64 = array(SDL_PIXELTYPE_ARRAYU16, SDL_ARRAYORDER_ABGR, 64, 8),
        RGB48_FLOAT = SDL_PIXELFORMAT_RGB48_FLOAT = array(SDL_PIXELTYPE_ARRAYF16, SDL_ARRAYORDER_RGB, 48, 6),
        BGR48_FLOAT = SDL_PIXELFORMAT_BGR48_FLOAT = array(SDL_PIXELTYPE_ARRAYF16, SDL_ARRAYORDER_BGR, 48, 6),
        RGBA64_FLOAT = SDL_PIXELFORMAT_RGBA64_FLOAT = array(SDL_PIXELTYPE_ARRAYF16, SDL_ARRAYORDER_RGBA, 64, 8),
        ARGB64_FLOAT = SDL_PIXELFORMAT_ARGB64_FLOAT = array(SDL_PIXELTYPE_ARRAYF16, SDL_ARRAYORDER_ARGB, 64, 8),
        BGRA64_FLOAT = SDL_PIXELFORMAT_BGRA64_FLOAT = array(SDL_PIXELTYPE_ARRAYF16, SDL_ARRAYORDER_BGRA, 64, 8),
        ABGR64_FLOAT = SDL_PIXELFORMAT_ABGR64_FLOAT = array(SDL_PIXELTYPE_ARRAYF16, SDL_ARRAYORDER_ABGR, 64, 8),
        RGB96_FLOAT = SDL_PIXELFORMAT_RGB96_FLOAT = array(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_RGB, 96, 12),
        BGR96_FLOAT = SDL_PIXELFORMAT_BGR96_FLOAT = array(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_BGR, 96, 12),
        RGBA128_FLOAT = SDL_PIXELFORMAT_RGBA128_FLOAT = array(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_RGBA, 128, 16),
        ARGB128_FLOAT = SDL_PIXELFORMAT_ARGB128_FLOAT = array(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_ARGB, 128, 16),
        BGRA128_FLOAT = SDL_PIXELFORMAT_BGRA128_FLOAT = array(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_BGRA, 128, 16),
        ABGR128_FLOAT = SDL_PIXELFORMAT_ABGR128_FLOAT = array(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_ABGR, 128, 16),
        /// Planar mode: Y + V + U (3 planes).
        YV12 = SDL_PIXELFORMAT_YV12 = SDL_FOURCC(b'Y', b'V', b'1', b'2'),
        /// Planar mode: Y + U + V (3 planes).
        IYUV = SDL_PIXELFORMAT_IYUV = SDL_FOURCC(b'I', b'Y', b'U', b'V'),
        /// Packed mode: Y0+U0+Y1+V0 (1 plane).
        YUY2 = SDL_PIXELFORMAT_YUY2 = SDL_FOURCC(b'Y', b'U', b'Y', b'2'),
        /// Packed mode: U0+Y0+V0+Y1 (1 plane).
        UYVY = SDL_PIXELFORMAT_UYVY = SDL_FOURCC(b'U', b'Y', b'V', b'Y'),
        /// Packed mode: Y0+V0+Y1+U0 (1 plane).
        YVYU = SDL_PIXELFORMAT_YVYU = SDL_FOURCC(b'Y', b'V', b'Y', b'U'),
        /// Planar mode: Y + U/V interleaved (2 planes).
        NV12 = SDL_PIXELFORMAT_NV12 = SDL_FOURCC(b'N', b'V', b'1', b'2'),
        /// Planar mode: Y + V/U interleaved (2 planes).
        NV21 = SDL_PIXELFORMAT_NV21 = SDL_FOURCC(b'N', b'V', b'2', b'1'),
        /// Planar mode: Y + U/V interleaved (2 planes), 16 bits per channel.
        P010 = SDL_PIXELFORMAT_P010 = SDL_FOURCC(b'P', b'0', b'1', b'0'),
        /// Android video texture format.
        EXTERNAL_OES = SDL_PIXELFORMAT_EXTERNAL_OES = SDL_FOURCC(b'O', b'E', b'S', b' '),
        /// Motion JPEG.
        MJPG = SDL_PIXELFORMAT_MJPG = SDL_FOURCC(b'M', b'J', b'P', b'G'),
    }
}

const fn indexed(ty: SDL_PixelType, order: SDL_BitmapOrder, bits: u32) -> u32 {
    SDL_DEFINE_PIXELFORMAT(ty, order.0, SDL_PACKEDLAYOUT_NONE, bits, 0).0
}

const fn packed(
    ty: SDL_PixelType,
    order: SDL_PackedOrder,
    layout: SDL_PackedLayout,
    bits: u32,
    bytes: u32,
) -> u32 {
    SDL_DEFINE_PIXELFORMAT(ty, order.0, layout, bits, bytes).0
}

const fn array(ty: SDL_PixelType, order: SDL_ArrayOrder, bits: u32, bytes: u32) -> u32 {
    SDL_DEFINE_PIXELFORMAT(ty, order.0, SDL_PACKEDLAYOUT_NONE, bits, bytes).0
}

// Byte-order aliases: the named format whose bytes appear in memory in the
// order of its name.
#[cfg(target_endian = "big")]
mod byte_order {
    use super::SDL_PixelFormat;
    pub const RGBA32: SDL_PixelFormat = SDL_PixelFormat::RGBA8888;
    pub const ARGB32: SDL_PixelFormat = SDL_PixelFormat::ARGB8888;
    pub const BGRA32: SDL_PixelFormat = SDL_PixelFormat::BGRA8888;
    pub const ABGR32: SDL_PixelFormat = SDL_PixelFormat::ABGR8888;
    pub const RGBX32: SDL_PixelFormat = SDL_PixelFormat::RGBX8888;
    pub const XRGB32: SDL_PixelFormat = SDL_PixelFormat::XRGB8888;
    pub const BGRX32: SDL_PixelFormat = SDL_PixelFormat::BGRX8888;
    pub const XBGR32: SDL_PixelFormat = SDL_PixelFormat::XBGR8888;
}

#[cfg(target_endian = "little")]
mod byte_order {
    use super::SDL_PixelFormat;
    pub const RGBA32: SDL_PixelFormat = SDL_PixelFormat::ABGR8888;
    pub const ARGB32: SDL_PixelFormat = SDL_PixelFormat::BGRA8888;
    pub const BGRA32: SDL_PixelFormat = SDL_PixelFormat::ARGB8888;
    pub const ABGR32: SDL_PixelFormat = SDL_PixelFormat::RGBA8888;
    pub const RGBX32: SDL_PixelFormat = SDL_PixelFormat::XBGR8888;
    pub const XRGB32: SDL_PixelFormat = SDL_PixelFormat::BGRX8888;
    pub const BGRX32: SDL_PixelFormat = SDL_PixelFormat::XRGB8888;
    pub const XBGR32: SDL_PixelFormat = SDL_PixelFormat::RGBX8888;
}

pub const SDL_PIXELFORMAT_RGBA32: SDL_PixelFormat = byte_order::RGBA32;
pub const SDL_PIXELFORMAT_ARGB32: SDL_PixelFormat = byte_order::ARGB32;
pub const SDL_PIXELFORMAT_BGRA32: SDL_PixelFormat = byte_order::BGRA32;
pub const SDL_PIXELFORMAT_ABGR32: SDL_PixelFormat = byte_order::ABGR32;
pub const SDL_PIXELFORMAT_RGBX32: SDL_PixelFormat = byte_order::RGBX32;
pub const SDL_PIXELFORMAT_XRGB32: SDL_PixelFormat = byte_order::XRGB32;
pub const SDL_PIXELFORMAT_BGRX32: SDL_PixelFormat = byte_order::BGRX32;
pub const SDL_PIXELFORMAT_XBGR32: SDL_PixelFormat = byte_order::XBGR32;

impl SDL_PixelFormat {
    pub const RGBA32: Self = SDL_PIXELFORMAT_RGBA32;
    pub const ARGB32: Self = SDL_PIXELFORMAT_ARGB32;
    pub const BGRA32: Self = SDL_PIXELFORMAT_BGRA32;
    pub const ABGR32: Self = SDL_PIXELFORMAT_ABGR32;
    pub const RGBX32: Self = SDL_PIXELFORMAT_RGBX32;
    pub const XRGB32: Self = SDL_PIXELFORMAT_XRGB32;
    pub const BGRX32: Self = SDL_PIXELFORMAT_BGRX32;
    pub const XBGR32: Self = SDL_PIXELFORMAT_XBGR32;
}

// -- Pixel format classification --

#[inline]
#[must_use]
pub const fn SDL_PIXELFLAG(format: SDL_PixelFormat) -> u32 {
    (format.0 >> 28) & 0x0F
}

#[inline]
#[must_use]
pub const fn SDL_PIXELTYPE(format: SDL_PixelFormat) -> SDL_PixelType {
    SDL_PixelType(((format.0 >> 24) & 0x0F) as c_int)
}

/// The raw order nibble; its meaning depends on [`SDL_PIXELTYPE`].
#[inline]
#[must_use]
pub const fn SDL_PIXELORDER(format: SDL_PixelFormat) -> c_int {
    ((format.0 >> 20) & 0x0F) as c_int
}

#[inline]
#[must_use]
pub const fn SDL_PIXELLAYOUT(format: SDL_PixelFormat) -> SDL_PackedLayout {
    SDL_PackedLayout(((format.0 >> 16) & 0x0F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_FOURCC(format: SDL_PixelFormat) -> bool {
    format.0 != 0 && SDL_PIXELFLAG(format) != 1
}

/// Bits per pixel; `0` for FOURCC formats.
#[inline]
#[must_use]
pub const fn SDL_BITSPERPIXEL(format: SDL_PixelFormat) -> u32 {
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        0
    } else {
        (format.0 >> 8) & 0xFF
    }
}

/// Bytes per pixel; for FOURCC formats, bytes per luma sample.
#[inline]
#[must_use]
pub const fn SDL_BYTESPERPIXEL(format: SDL_PixelFormat) -> u32 {
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        match format {
            SDL_PIXELFORMAT_YUY2 | SDL_PIXELFORMAT_UYVY | SDL_PIXELFORMAT_YVYU
            | SDL_PIXELFORMAT_P010 => 2,
            _ => 1,
        }
    } else {
        format.0 & 0xFF
    }
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_INDEXED(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_INDEX1 | SDL_PIXELTYPE_INDEX2 | SDL_PIXELTYPE_INDEX4 | SDL_PIXELTYPE_INDEX8
        )
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_PACKED(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_PACKED8 | SDL_PIXELTYPE_PACKED16 | SDL_PIXELTYPE_PACKED32
        )
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_ARRAY(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_ARRAYU8
                | SDL_PIXELTYPE_ARRAYU16
                | SDL_PIXELTYPE_ARRAYU32
                | SDL_PIXELTYPE_ARRAYF16
                | SDL_PIXELTYPE_ARRAYF32
        )
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_10BIT(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && SDL_PIXELTYPE(format).0 == SDL_PIXELTYPE_PACKED32.0
        && SDL_PIXELLAYOUT(format).0 == SDL_PACKEDLAYOUT_2101010.0
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_FLOAT(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_ARRAYF16 | SDL_PIXELTYPE_ARRAYF32
        )
}

#[inline]
#[must_use]
pub const fn SDL_ISPIXELFORMAT_ALPHA(format: SDL_PixelFormat) -> bool {
    let order = SDL_PIXELORDER(format);
    (SDL_ISPIXELFORMAT_PACKED(format)
        && matches!(
            SDL_PackedOrder(order),
            SDL_PACKEDORDER_ARGB | SDL_PACKEDORDER_RGBA | SDL_PACKEDORDER_ABGR | SDL_PACKEDORDER_BGRA
        ))
        || (SDL_ISPIXELFORMAT_ARRAY(format)
            && matches!(
                SDL_ArrayOrder(order),
                SDL_ARRAYORDER_ARGB | SDL_ARRAYORDER_RGBA | SDL_ARRAYORDER_ABGR | SDL_ARRAYORDER_BGRA
            ))
}

// -- Colorspaces --

c_enum! {
    pub struct SDL_ColorType(c_int) {
        UNKNOWN = SDL_COLOR_TYPE_UNKNOWN = 0,
        RGB = SDL_COLOR_TYPE_RGB = 1,
        YCBCR = SDL_COLOR_TYPE_YCBCR = 2,
    }
}

c_enum! {
    pub struct SDL_ColorRange(c_int) {
        UNKNOWN = SDL_COLOR_RANGE_UNKNOWN = 0,
        /// Narrow range, e.g. 16-235 for 8-bit RGB and luma.
        LIMITED = SDL_COLOR_RANGE_LIMITED = 1,
        /// Full range, e.g. 0-255 for 8-bit RGB and luma.
        FULL = SDL_COLOR_RANGE_FULL = 2,
    }
}

c_enum! {
    pub struct SDL_ColorPrimaries(c_int) {
        UNKNOWN = SDL_COLOR_PRIMARIES_UNKNOWN = 0,
        BT709 = SDL_COLOR_PRIMARIES_BT709 = 1,
        UNSPECIFIED = SDL_COLOR_PRIMARIES_UNSPECIFIED = 2,
        BT470M = SDL_COLOR_PRIMARIES_BT470M = 4,
        BT470BG = SDL_COLOR_PRIMARIES_BT470BG = 5,
        BT601 = SDL_COLOR_PRIMARIES_BT601 = 6,
        SMPTE240 = SDL_COLOR_PRIMARIES_SMPTE240 = 7,
        GENERIC_FILM = SDL_COLOR_PRIMARIES_GENERIC_FILM = 8,
        BT2020 = SDL_COLOR_PRIMARIES_BT2020 = 9,
        XYZ = SDL_COLOR_PRIMARIES_XYZ = 10,
        SMPTE431 = SDL_COLOR_PRIMARIES_SMPTE431 = 11,
        SMPTE432 = SDL_COLOR_PRIMARIES_SMPTE432 = 12,
        EBU3213 = SDL_COLOR_PRIMARIES_EBU3213 = 22,
        CUSTOM = SDL_COLOR_PRIMARIES_CUSTOM = 31,
    }
}

c_enum! {
    pub struct SDL_TransferCharacteristics(c_int) {
        UNKNOWN = SDL_TRANSFER_CHARACTERISTICS_UNKNOWN = 0,
        BT709 = SDL_TRANSFER_CHARACTERISTICS_BT709 = 1,
        UNSPECIFIED = SDL_TRANSFER_CHARACTERISTICS_UNSPECIFIED = 2,
        GAMMA22 = SDL_TRANSFER_CHARACTERISTICS_GAMMA22 = 4,
        GAMMA28 = SDL_TRANSFER_CHARACTERISTICS_GAMMA28 = 5,
        BT601 = SDL_TRANSFER_CHARACTERISTICS_BT601 = 6,
        SMPTE240 = SDL_TRANSFER_CHARACTERISTICS_SMPTE240 = 7,
        LINEAR = SDL_TRANSFER_CHARACTERISTICS_LINEAR = 8,
        LOG100 = SDL_TRANSFER_CHARACTERISTICS_LOG100 = 9,
        LOG100_SQRT10 = SDL_TRANSFER_CHARACTERISTICS_LOG100_SQRT10 = 10,
        IEC61966 = SDL_TRANSFER_CHARACTERISTICS_IEC61966 = 11,
        BT1361 = SDL_TRANSFER_CHARACTERISTICS_BT1361 = 12,
        SRGB = SDL_TRANSFER_CHARACTERISTICS_SRGB = 13,
        BT2020_10BIT = SDL_TRANSFER_CHARACTERISTICS_BT2020_10BIT = 14,
        BT2020_12BIT = SDL_TRANSFER_CHARACTERISTICS_BT2020_12BIT = 15,
        /// SMPTE ST 2084 for 10-, 12-, 14- and 16-bit systems.
        PQ = SDL_TRANSFER_CHARACTERISTICS_PQ = 16,
        SMPTE428 = SDL_TRANSFER_CHARACTERISTICS_SMPTE428 = 17,
        /// ARIB STD-B67, known as "hybrid log-gamma".
        HLG = SDL_TRANSFER_CHARACTERISTICS_HLG = 18,
        CUSTOM = SDL_TRANSFER_CHARACTERISTICS_CUSTOM = 31,
    }
}

c_enum! {
    pub struct SDL_MatrixCoefficients(c_int) {
        IDENTITY = SDL_MATRIX_COEFFICIENTS_IDENTITY = 0,
        BT709 = SDL_MATRIX_COEFFICIENTS_BT709 = 1,
        UNSPECIFIED = SDL_MATRIX_COEFFICIENTS_UNSPECIFIED = 2,
        FCC = SDL_MATRIX_COEFFICIENTS_FCC = 4,
        BT470BG = SDL_MATRIX_COEFFICIENTS_BT470BG = 5,
        BT601 = SDL_MATRIX_COEFFICIENTS_BT601 = 6,
        SMPTE240 = SDL_MATRIX_COEFFICIENTS_SMPTE240 = 7,
        YCGCO = SDL_MATRIX_COEFFICIENTS_YCGCO = 8,
        BT2020_NCL = SDL_MATRIX_COEFFICIENTS_BT2020_NCL = 9,
        BT2020_CL = SDL_MATRIX_COEFFICIENTS_BT2020_CL = 10,
        SMPTE2085 = SDL_MATRIX_COEFFICIENTS_SMPTE2085 = 11,
        CHROMA_DERIVED_NCL = SDL_MATRIX_COEFFICIENTS_CHROMA_DERIVED_NCL = 12,
        CHROMA_DERIVED_CL = SDL_MATRIX_COEFFICIENTS_CHROMA_DERIVED_CL = 13,
        ICTCP = SDL_MATRIX_COEFFICIENTS_ICTCP = 14,
        CUSTOM = SDL_MATRIX_COEFFICIENTS_CUSTOM = 31,
    }
}

c_enum! {
    /// Where chroma samples sit relative to luma.
    pub struct SDL_ChromaLocation(c_int) {
        /// RGB, no chroma sampling.
        NONE = SDL_CHROMA_LOCATION_NONE = 0,
        LEFT = SDL_CHROMA_LOCATION_LEFT = 1,
        CENTER = SDL_CHROMA_LOCATION_CENTER = 2,
        TOPLEFT = SDL_CHROMA_LOCATION_TOPLEFT = 3,
    }
}

#[inline]
#[must_use]
pub const fn SDL_DEFINE_COLORSPACE(
    r#type: SDL_ColorType,
    range: SDL_ColorRange,
    chroma: SDL_ChromaLocation,
    primaries: SDL_ColorPrimaries,
    transfer: SDL_TransferCharacteristics,
    matrix: SDL_MatrixCoefficients,
) -> SDL_Colorspace {
    SDL_Colorspace(
        ((r#type.0 as u32) << 28)
            | ((range.0 as u32) << 24)
            | ((chroma.0 as u32) << 20)
            | ((primaries.0 as u32) << 10)
            | ((transfer.0 as u32) << 5)
            | (matrix.0 as u32),
    )
}

c_enum! {
    /// A colorspace: color type, range, chroma siting, primaries, transfer
    /// function and matrix, packed into a `u32`.
    pub struct SDL_Colorspace(u32) {
        UNKNOWN = SDL_COLORSPACE_UNKNOWN = 0,
        /// sRGB, the default for RGB surfaces.
        SRGB = SDL_COLORSPACE_SRGB = SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_RGB,
            SDL_COLOR_RANGE_FULL,
            SDL_CHROMA_LOCATION_NONE,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_SRGB,
            SDL_MATRIX_COEFFICIENTS_IDENTITY,
        ).0,
        /// sRGB primaries with a linear transfer function.
        SRGB_LINEAR = SDL_COLORSPACE_SRGB_LINEAR = SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_RGB,
            SDL_COLOR_RANGE_FULL,
            SDL_CHROMA_LOCATION_NONE,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_LINEAR,
            SDL_MATRIX_COEFFICIENTS_IDENTITY,
        ).0,
        /// BT.2020 primaries with the PQ transfer function.
        HDR10 = SDL_COLORSPACE_HDR10 = SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_RGB,
            SDL_COLOR_RANGE_FULL,
            SDL_CHROMA_LOCATION_NONE,
            SDL_COLOR_PRIMARIES_BT2020,
            SDL_TRANSFER_CHARACTERISTICS_PQ,
            SDL_MATRIX_COEFFICIENTS_IDENTITY,
        ).0,
        /// Full-range BT.601 YCbCr, as used by JPEG.
        JPEG = SDL_COLORSPACE_JPEG = SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_YCBCR,
            SDL_COLOR_RANGE_FULL,
            SDL_CHROMA_LOCATION_NONE,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_BT601,
            SDL_MATRIX_COEFFICIENTS_BT601,
        ).0,
        BT601_LIMITED = SDL_COLORSPACE_BT601_LIMITED = ycbcr(
            SDL_COLOR_RANGE_LIMITED,
            SDL_COLOR_PRIMARIES_BT601,
            SDL_TRANSFER_CHARACTERISTICS_BT601,
            SDL_MATRIX_COEFFICIENTS_BT601,
        ),
        BT601_FULL = SDL_COLORSPACE_BT601_FULL = ycbcr(
            SDL_COLOR_RANGE_FULL,
            SDL_COLOR_PRIMARIES_BT601,
            SDL_TRANSFER_CHARACTERISTICS_BT601,
            SDL_MATRIX_COEFFICIENTS_BT601,
        ),
        BT709_LIMITED = SDL_COLORSPACE_BT709_LIMITED = ycbcr(
            SDL_COLOR_RANGE_LIMITED,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_BT709,
            SDL_MATRIX_COEFFICIENTS_BT709,
        ),
        BT709_FULL = SDL_COLORSPACE_BT709_FULL = ycbcr(
            SDL_COLOR_RANGE_FULL,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_BT709,
            SDL_MATRIX_COEFFICIENTS_BT709,
        ),
        BT2020_LIMITED = SDL_COLORSPACE_BT2020_LIMITED = ycbcr(
            SDL_COLOR_RANGE_LIMITED,
            SDL_COLOR_PRIMARIES_BT2020,
            SDL_TRANSFER_CHARACTERISTICS_PQ,
            SDL_MATRIX_COEFFICIENTS_BT2020_NCL,
        ),
        BT2020_FULL = SDL_COLORSPACE_BT2020_FULL = ycbcr(
            SDL_COLOR_RANGE_FULL,
            SDL_COLOR_PRIMARIES_BT2020,
            SDL_TRANSFER_CHARACTERISTICS_PQ,
            SDL_MATRIX_COEFFICIENTS_BT2020_NCL,
        ),
    }
}

/// YCbCr with left-sited chroma, the shape shared by the video colorspaces.
const fn ycbcr(
    range: SDL_ColorRange,
    primaries: SDL_ColorPrimaries,
    transfer: SDL_TransferCharacteristics,
    matrix: SDL_MatrixCoefficients,
) -> u32 {
    SDL_DEFINE_COLORSPACE(
        SDL_COLOR_TYPE_YCBCR,
        range,
        SDL_CHROMA_LOCATION_LEFT,
        primaries,
        transfer,
        matrix,
    )
    .0
}

/// The default colorspace for RGB surfaces.
pub const SDL_COLORSPACE_RGB_DEFAULT: SDL_Colorspace = SDL_COLORSPACE_SRGB;
/// The default colorspace for YUV surfaces.
pub const SDL_COLORSPACE_YUV_DEFAULT: SDL_Colorspace = SDL_COLORSPACE_BT601_LIMITED;

impl SDL_Colorspace {
    pub const RGB_DEFAULT: Self = SDL_COLORSPACE_RGB_DEFAULT;
    pub const YUV_DEFAULT: Self = SDL_COLORSPACE_YUV_DEFAULT;
}

#[inline]
#[must_use]
pub const fn SDL_COLORSPACETYPE(cspace: SDL_Colorspace) -> SDL_ColorType {
    SDL_ColorType(((cspace.0 >> 28) & 0x0F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_COLORSPACERANGE(cspace: SDL_Colorspace) -> SDL_ColorRange {
    SDL_ColorRange(((cspace.0 >> 24) & 0x0F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_COLORSPACECHROMA(cspace: SDL_Colorspace) -> SDL_ChromaLocation {
    SDL_ChromaLocation(((cspace.0 >> 20) & 0x0F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_COLORSPACEPRIMARIES(cspace: SDL_Colorspace) -> SDL_ColorPrimaries {
    SDL_ColorPrimaries(((cspace.0 >> 10) & 0x1F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_COLORSPACETRANSFER(cspace: SDL_Colorspace) -> SDL_TransferCharacteristics {
    SDL_TransferCharacteristics(((cspace.0 >> 5) & 0x1F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_COLORSPACEMATRIX(cspace: SDL_Colorspace) -> SDL_MatrixCoefficients {
    SDL_MatrixCoefficients((cspace.0 & 0x1F) as c_int)
}

#[inline]
#[must_use]
pub const fn SDL_ISCOLORSPACE_MATRIX_BT601(cspace: SDL_Colorspace) -> bool {
    matches!(
        SDL_COLORSPACEMATRIX(cspace),
        SDL_MATRIX_COEFFICIENTS_BT601 | SDL_MATRIX_COEFFICIENTS_BT470BG
    )
}

#[inline]
#[must_use]
pub const fn SDL_ISCOLORSPACE_MATRIX_BT709(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACEMATRIX(cspace).0 == SDL_MATRIX_COEFFICIENTS_BT709.0
}

#[inline]
#[must_use]
pub const fn SDL_ISCOLORSPACE_MATRIX_BT2020_NCL(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACEMATRIX(cspace).0 == SDL_MATRIX_COEFFICIENTS_BT2020_NCL.0
}

#[inline]
#[must_use]
pub const fn SDL_ISCOLORSPACE_LIMITED_RANGE(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACERANGE(cspace).0 != SDL_COLOR_RANGE_FULL.0
}

#[inline]
#[must_use]
pub const fn SDL_ISCOLORSPACE_FULL_RANGE(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACERANGE(cspace).0 == SDL_COLOR_RANGE_FULL.0
}

// -- Colors and palettes --

/// An 8-bit RGBA color. Byte order is `r, g, b, a` regardless of endianness.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SDL_Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A float RGBA color, nominally in `0.0..=1.0`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SDL_FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A set of indexed colors.
#[repr(C)]
#[derive(Debug)]
pub struct SDL_Palette {
    pub ncolors: c_int,
    pub colors: *mut SDL_Color,
    pub version: u32,
    pub refcount: c_int,
}

/// Channel masks, widths and shifts of a non-FOURCC pixel format.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SDL_PixelFormatDetails {
    pub format: SDL_PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub padding: [u8; 2],
    pub Rmask: u32,
    pub Gmask: u32,
    pub Bmask: u32,
    pub Amask: u32,
    pub Rbits: u8,
    pub Gbits: u8,
    pub Bbits: u8,
    pub Abits: u8,
    pub Rshift: u8,
    pub Gshift: u8,
    pub Bshift: u8,
    pub Ashift: u8,
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Returns a static name such as `"SDL_PIXELFORMAT_ARGB8888"`.
    pub safe fn SDL_GetPixelFormatName(format: SDL_PixelFormat) -> *const c_char;
    pub fn SDL_GetMasksForPixelFormat(
        format: SDL_PixelFormat,
        bpp: *mut c_int,
        Rmask: *mut u32,
        Gmask: *mut u32,
        Bmask: *mut u32,
        Amask: *mut u32,
    ) -> bool;
    pub safe fn SDL_GetPixelFormatForMasks(
        bpp: c_int,
        Rmask: u32,
        Gmask: u32,
        Bmask: u32,
        Amask: u32,
    ) -> SDL_PixelFormat;
    /// Returns a pointer to static data, or null on failure.
    pub safe fn SDL_GetPixelFormatDetails(format: SDL_PixelFormat) -> *const SDL_PixelFormatDetails;
    pub fn SDL_CreatePalette(ncolors: c_int) -> *mut SDL_Palette;
    pub fn SDL_SetPaletteColors(
        palette: *mut SDL_Palette,
        colors: *const SDL_Color,
        firstcolor: c_int,
        ncolors: c_int,
    ) -> bool;
    pub fn SDL_DestroyPalette(palette: *mut SDL_Palette);
    pub fn SDL_MapRGB(
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: u8,
        g: u8,
        b: u8,
    ) -> u32;
    pub fn SDL_MapRGBA(
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> u32;
    pub fn SDL_GetRGB(
        pixel: u32,
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
    );
    pub fn SDL_GetRGBA(
        pixel: u32,
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn packed_formats_match_header_values() {
        assert_eq!(SDL_PIXELFORMAT_ARGB8888.0, 0x1636_2004);
        assert_eq!(SDL_PIXELFORMAT_XRGB4444.0, 0x1512_0c02);
        assert_eq!(SDL_PIXELFORMAT_RGB24.0, 0x1710_1803);
        assert_eq!(SDL_PIXELFORMAT_INDEX8.0, 0x1300_0801);
        assert_eq!(SDL_PIXELFORMAT_INDEX2LSB.0, 0x1c10_0200);
        assert_eq!(SDL_PIXELFORMAT_RGB96_FLOAT.0, 0x1b10_600c);
    }

    #[test]
    fn fourcc_formats_match_header_values() {
        assert_eq!(SDL_PIXELFORMAT_YV12.0, 0x3231_5659);
        assert_eq!(SDL_PIXELFORMAT_IYUV.0, 0x5655_5949);
        assert_eq!(SDL_PIXELFORMAT_YUY2.0, 0x3259_5559);
        assert_eq!(SDL_PIXELFORMAT_UYVY.0, 0x5956_5955);
        assert_eq!(SDL_PIXELFORMAT_YVYU.0, 0x5559_5659);
        assert_eq!(SDL_PIXELFORMAT_NV12.0, 0x3231_564e);
        assert_eq!(SDL_PIXELFORMAT_NV21.0, 0x3132_564e);
        assert_eq!(SDL_PIXELFORMAT_P010.0, 0x3031_3050);
        assert_eq!(SDL_PIXELFORMAT_EXTERNAL_OES.0, 0x2053_454f);
    }

    #[test]
    fn classification() {
        assert!(SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_ARGB8888), "ARGB8888 has alpha");
        assert!(!SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_XRGB8888), "XRGB8888 has none");
        assert!(SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_RGBA64_FLOAT), "array alpha");
        assert!(SDL_ISPIXELFORMAT_INDEXED(SDL_PIXELFORMAT_INDEX4MSB), "INDEX4 is indexed");
        assert!(SDL_ISPIXELFORMAT_PACKED(SDL_PIXELFORMAT_RGB565), "RGB565 is packed");
        assert!(SDL_ISPIXELFORMAT_ARRAY(SDL_PIXELFORMAT_BGR24), "BGR24 is an array");
        assert!(SDL_ISPIXELFORMAT_10BIT(SDL_PIXELFORMAT_ABGR2101010), "10-bit layout");
        assert!(SDL_ISPIXELFORMAT_FLOAT(SDL_PIXELFORMAT_RGB48_FLOAT), "half float");
        assert!(SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_NV12), "NV12 is FOURCC");
        assert!(!SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_UNKNOWN), "unknown is not FOURCC");
        assert!(!SDL_ISPIXELFORMAT_INDEXED(SDL_PIXELFORMAT_YV12), "FOURCC is never indexed");
    }

    #[test]
    fn sizes_per_pixel() {
        assert_eq!(SDL_BITSPERPIXEL(SDL_PIXELFORMAT_XRGB1555), 15);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_XRGB1555), 2);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_RGBA128_FLOAT), 16);
        assert_eq!(SDL_BITSPERPIXEL(SDL_PIXELFORMAT_YUY2), 0);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YUY2), 2);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_NV12), 1);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_INDEX1LSB), 0);
    }

    #[test]
    fn byte_order_aliases() {
        let expected = if cfg!(target_endian = "little") {
            SDL_PIXELFORMAT_ABGR8888
        } else {
            SDL_PIXELFORMAT_RGBA8888
        };
        assert_eq!(SDL_PIXELFORMAT_RGBA32, expected);
        assert_eq!(SDL_PixelFormat::RGBA32, expected);
    }

    #[test]
    fn colorspaces_match_header_values() {
        assert_eq!(SDL_COLORSPACE_SRGB.0, 0x1200_05a0);
        assert_eq!(SDL_COLORSPACE_SRGB_LINEAR.0, 0x1200_0500);
        assert_eq!(SDL_COLORSPACE_HDR10.0, 0x1200_2600);
        assert_eq!(SDL_COLORSPACE_JPEG.0, 0x2200_04c6);
        assert_eq!(SDL_COLORSPACE_BT601_LIMITED.0, 0x2110_18c6);
        assert_eq!(SDL_COLORSPACE_BT601_FULL.0, 0x2210_18c6);
        assert_eq!(SDL_COLORSPACE_BT709_LIMITED.0, 0x2110_0421);
        assert_eq!(SDL_COLORSPACE_BT709_FULL.0, 0x2210_0421);
        assert_eq!(SDL_COLORSPACE_BT2020_LIMITED.0, 0x2110_2609);
        assert_eq!(SDL_COLORSPACE_BT2020_FULL.0, 0x2210_2609);
        assert_eq!(SDL_COLORSPACE_YUV_DEFAULT, SDL_COLORSPACE_BT601_LIMITED);
    }

    #[test]
    fn colorspace_accessors() {
        let cs = SDL_COLORSPACE_BT709_LIMITED;
        assert_eq!(SDL_COLORSPACETYPE(cs), SDL_COLOR_TYPE_YCBCR);
        assert_eq!(SDL_COLORSPACECHROMA(cs), SDL_CHROMA_LOCATION_LEFT);
        assert_eq!(SDL_COLORSPACEPRIMARIES(cs), SDL_COLOR_PRIMARIES_BT709);
        assert_eq!(SDL_COLORSPACETRANSFER(cs), SDL_TRANSFER_CHARACTERISTICS_BT709);
        assert!(SDL_ISCOLORSPACE_MATRIX_BT709(cs), "BT.709 matrix");
        assert!(SDL_ISCOLORSPACE_LIMITED_RANGE(cs), "limited range");
        assert!(SDL_ISCOLORSPACE_FULL_RANGE(SDL_COLORSPACE_SRGB), "sRGB is full range");
        assert!(SDL_ISCOLORSPACE_MATRIX_BT601(SDL_COLORSPACE_JPEG), "JPEG uses BT.601");
        assert!(
            !SDL_ISCOLORSPACE_MATRIX_BT2020_NCL(SDL_COLORSPACE_HDR10),
            "HDR10 is RGB"
        );
    }

    #[test]
    fn struct_layouts() {
        assert_eq!(size_of::<SDL_Color>(), 4);
        assert_eq!(size_of::<SDL_FColor>(), 16);
        assert_eq!(size_of::<SDL_PixelFormatDetails>(), 32);
        assert_eq!(offset_of!(SDL_PixelFormatDetails, Rmask), 8);
        assert_eq!(offset_of!(SDL_PixelFormatDetails, Rbits), 24);
        assert_eq!(offset_of!(SDL_PixelFormatDetails, Ashift), 31);
        assert_eq!(offset_of!(SDL_Palette, colors), size_of::<*mut SDL_Color>());
    }
}
