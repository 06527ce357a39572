// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_blendmode.h`.

use core::ffi::c_int;

c_enum! {
    /// A blend mode. Custom modes come from [`SDL_ComposeCustomBlendMode`].
    pub struct SDL_BlendMode(u32) {
        /// `dstRGBA = srcRGBA`
        NONE = SDL_BLENDMODE_NONE = 0x0000_0000,
        /// Alpha blending.
        BLEND = SDL_BLENDMODE_BLEND = 0x0000_0001,
        /// Pre-multiplied alpha blending.
        BLEND_PREMULTIPLIED = SDL_BLENDMODE_BLEND_PREMULTIPLIED = 0x0000_0010,
        /// Additive blending.
        ADD = SDL_BLENDMODE_ADD = 0x0000_0002,
        /// Pre-multiplied additive blending.
        ADD_PREMULTIPLIED = SDL_BLENDMODE_ADD_PREMULTIPLIED = 0x0000_0020,
        /// Color modulate.
        MOD = SDL_BLENDMODE_MOD = 0x0000_0004,
        /// Color multiply.
        MUL = SDL_BLENDMODE_MUL = 0x0000_0008,
        INVALID = SDL_BLENDMODE_INVALID = 0x7FFF_FFFF,
    }
}

c_enum! {
    pub struct SDL_BlendOperation(c_int) {
        ADD = SDL_BLENDOPERATION_ADD = 0x1,
        SUBTRACT = SDL_BLENDOPERATION_SUBTRACT = 0x2,
        REV_SUBTRACT = SDL_BLENDOPERATION_REV_SUBTRACT = 0x3,
        MINIMUM = SDL_BLENDOPERATION_MINIMUM = 0x4,
        MAXIMUM = SDL_BLENDOPERATION_MAXIMUM = 0x5,
    }
}

c_enum! {
    pub struct SDL_BlendFactor(c_int) {
        ZERO = SDL_BLENDFACTOR_ZERO = 0x1,
        ONE = SDL_BLENDFACTOR_ONE = 0x2,
        SRC_COLOR = SDL_BLENDFACTOR_SRC_COLOR = 0x3,
        ONE_MINUS_SRC_COLOR = SDL_BLENDFACTOR_ONE_MINUS_SRC_COLOR = 0x4,
        SRC_ALPHA = SDL_BLENDFACTOR_SRC_ALPHA = 0x5,
        ONE_MINUS_SRC_ALPHA = SDL_BLENDFACTOR_ONE_MINUS_SRC_ALPHA = 0x6,
        DST_COLOR = SDL_BLENDFACTOR_DST_COLOR = 0x7,
        ONE_MINUS_DST_COLOR = SDL_BLENDFACTOR_ONE_MINUS_DST_COLOR = 0x8,
        DST_ALPHA = SDL_BLENDFACTOR_DST_ALPHA = 0x9,
        ONE_MINUS_DST_ALPHA = SDL_BLENDFACTOR_ONE_MINUS_DST_ALPHA = 0xA,
    }
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub safe fn SDL_ComposeCustomBlendMode(
        src_color_factor: SDL_BlendFactor,
        dst_color_factor: SDL_BlendFactor,
        color_operation: SDL_BlendOperation,
        src_alpha_factor: SDL_BlendFactor,
        dst_alpha_factor: SDL_BlendFactor,
        alpha_operation: SDL_BlendOperation,
    ) -> SDL_BlendMode;
}
