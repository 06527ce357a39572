// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw C ABI declarations for the SDL3 multimedia library.
//!
//! Every item here restates a type layout, enumeration value, callback
//! signature or function prototype from the native headers. Nothing is
//! implemented locally except header-inline helpers, which are `const fn`s
//! (pixel-format and colorspace packing) or re-exports from `stratum_core`
//! (rectangle types and predicates).
//!
//! Names keep their C spelling so code can be cross-read against the native
//! documentation. C enumerations are `#[repr(transparent)]` newtypes over
//! their integer type: each value is available both as an associated constant
//! (`SDL_LogPriority::WARN`) and under its C name (`SDL_LOG_PRIORITY_WARN`),
//! and values the bindings do not know about survive a round trip.
//!
//! Fallible functions return `bool` and leave a message for
//! [`error::SDL_GetError`]. Strings returned as `*const c_char` are owned by
//! the library unless the documentation says to release them with
//! [`stdinc::SDL_free`].
//!
//! # Crate features
//!
//! - `link` (disabled by default): Emits `-lSDL3` from the extern blocks.

#![no_std]
#![allow(unsafe_code, reason = "extern blocks declare the native ABI")]
#![allow(non_camel_case_types, reason = "types keep their C names")]
#![allow(non_upper_case_globals, reason = "constants keep their C names")]
#![allow(non_snake_case, reason = "functions and fields keep their C names")]
#![allow(
    missing_docs,
    reason = "declarations mirror the native headers, which are the reference"
)]

#[cfg(test)]
extern crate alloc;

/// Declares a C enumeration as a transparent integer newtype.
///
/// Each variant becomes an associated constant plus a module-level constant
/// with the C name. `Debug` prints the C name for known values.
macro_rules! c_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $(
                $(#[$vmeta:meta])*
                $short:ident = $cname:ident = $value:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub $repr);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $short: Self = Self($value);
            )*
        }

        $(
            $(#[$vmeta])*
            pub const $cname: $name = $name::$short;
        )*

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match *self {
                    $(Self::$short => f.write_str(stringify!($cname)),)*
                    _ => write!(f, concat!(stringify!($name), "({:#x})"), self.0),
                }
            }
        }
    };
}

/// Declares zero-sized opaque handle types that are only used behind
/// pointers.
macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
            }

            impl core::fmt::Debug for $name {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )*
    };
}

pub mod assert;
pub mod blendmode;
pub mod error;
pub mod filesystem;
pub mod iostream;
pub mod loadso;
pub mod locale;
pub mod log;
pub mod metal;
pub mod misc;
pub mod mouse;
pub mod pixels;
pub mod platform;
pub mod power;
pub mod process;
pub mod properties;
pub mod rect;
pub mod stdinc;
pub mod storage;
pub mod surface;
pub mod video;

#[cfg(test)]
mod tests {
    c_enum! {
        pub struct Sample(i32) {
            A = SAMPLE_A = 0,
            B = SAMPLE_B = -1,
        }
    }

    use alloc::format;

    #[test]
    fn c_enum_debug_uses_c_names() {
        assert_eq!(format!("{:?}", Sample::A), "SAMPLE_A");
        assert_eq!(format!("{SAMPLE_B:?}"), "SAMPLE_B");
        assert_eq!(format!("{:?}", Sample(7)), "Sample(0x7)");
        assert_eq!(Sample::default(), SAMPLE_A);
    }
}
