// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property identity and value types.

use alloc::string::String;
use core::ffi::c_void;
use core::fmt;
use core::num::NonZeroUsize;

/// Identifies a property group.
///
/// `0` is the invalid sentinel ([`PropertiesId::INVALID`]). The layout is a
/// plain `u32`, matching the native `SDL_PropertiesID`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PropertiesId(pub u32);

impl PropertiesId {
    /// The id no group ever has.
    pub const INVALID: Self = Self(0);

    /// Returns `true` unless this is [`INVALID`](Self::INVALID).
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for PropertiesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertiesId({})", self.0)
    }
}

/// The type tag of a stored property.
///
/// Discriminants match the native `SDL_PropertyType` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// No such property.
    Invalid = 0,
    /// An address, optionally with a cleanup callback.
    Pointer = 1,
    /// An owned UTF-8 string.
    String = 2,
    /// A signed 64-bit integer.
    Number = 3,
    /// A 32-bit float.
    Float = 4,
    /// A boolean.
    Boolean = 5,
}

impl PropertyType {
    /// Converts a native type tag, mapping unknown values to
    /// [`Invalid`](Self::Invalid).
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Pointer,
            2 => Self::String,
            3 => Self::Number,
            4 => Self::Float,
            5 => Self::Boolean,
            _ => Self::Invalid,
        }
    }

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Pointer => "pointer",
            Self::String => "string",
            Self::Number => "number",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

/// A non-null address stored in a pointer property.
///
/// Property groups store the address only; they never read through it. The
/// address keeps its exposed provenance so it can be turned back into a
/// usable pointer by whoever owns the pointee.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawAddress(NonZeroUsize);

impl RawAddress {
    /// Captures the address of `ptr`, or `None` if it is null.
    #[must_use]
    pub fn from_ptr<T>(ptr: *mut T) -> Option<Self> {
        NonZeroUsize::new(ptr.expose_provenance()).map(Self)
    }

    /// Returns the address as a raw pointer.
    #[must_use]
    pub fn as_ptr<T>(self) -> *mut T {
        core::ptr::with_exposed_provenance_mut(self.0.get())
    }

    /// Returns the address as an untyped pointer.
    #[must_use]
    pub fn as_void_ptr(self) -> *mut c_void {
        self.as_ptr()
    }

    /// Returns the numeric address.
    #[inline]
    #[must_use]
    pub const fn addr(self) -> usize {
        self.0.get()
    }
}

impl fmt::Debug for RawAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawAddress({:#x})", self.0)
    }
}

/// A property value together with its type.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// An address; the group does not own the pointee.
    Pointer(RawAddress),
    /// A string copied into the group.
    String(String),
    /// A signed 64-bit integer.
    Number(i64),
    /// A 32-bit float.
    Float(f32),
    /// A boolean.
    Boolean(bool),
}

impl PropertyValue {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn property_type(&self) -> PropertyType {
        match self {
            Self::Pointer(_) => PropertyType::Pointer,
            Self::String(_) => PropertyType::String,
            Self::Number(_) => PropertyType::Number,
            Self::Float(_) => PropertyType::Float,
            Self::Boolean(_) => PropertyType::Boolean,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer(addr) => write!(f, "{:#x}", addr.addr()),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn invalid_id_is_zero() {
        assert!(!PropertiesId::INVALID.is_valid());
        assert!(PropertiesId(7).is_valid());
        assert_eq!(PropertiesId::default(), PropertiesId::INVALID);
    }

    #[test]
    fn raw_type_tags_round_trip() {
        for ty in [
            PropertyType::Invalid,
            PropertyType::Pointer,
            PropertyType::String,
            PropertyType::Number,
            PropertyType::Float,
            PropertyType::Boolean,
        ] {
            assert_eq!(PropertyType::from_raw(ty as i32), ty);
        }
        assert_eq!(PropertyType::from_raw(99), PropertyType::Invalid);
    }

    #[test]
    fn raw_address_rejects_null() {
        assert!(RawAddress::from_ptr(core::ptr::null_mut::<u8>()).is_none());
        let mut slot = 5_u32;
        let addr = RawAddress::from_ptr(&raw mut slot).unwrap();
        assert_eq!(addr.as_ptr::<u32>(), &raw mut slot);
    }

    #[test]
    fn display_formats_each_variant() {
        assert_eq!(PropertyValue::Number(-3).to_string(), "-3");
        assert_eq!(PropertyValue::Boolean(true).to_string(), "true");
        assert_eq!(PropertyValue::String("a b".into()).to_string(), "\"a b\"");
        assert_eq!(
            PropertyValue::Float(1.5).property_type(),
            PropertyType::Float
        );
    }
}
