// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_properties.h`.

use core::ffi::{c_char, c_int, c_void};

pub use stratum_core::properties::PropertiesId as SDL_PropertiesID;

c_enum! {
    pub struct SDL_PropertyType(c_int) {
        INVALID = SDL_PROPERTY_TYPE_INVALID = 0,
        POINTER = SDL_PROPERTY_TYPE_POINTER = 1,
        STRING = SDL_PROPERTY_TYPE_STRING = 2,
        NUMBER = SDL_PROPERTY_TYPE_NUMBER = 3,
        FLOAT = SDL_PROPERTY_TYPE_FLOAT = 4,
        BOOLEAN = SDL_PROPERTY_TYPE_BOOLEAN = 5,
    }
}

/// Called once when a pointer property is overwritten, cleared or destroyed,
/// or when storing it fails.
pub type SDL_CleanupPropertyCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, value: *mut c_void)>;

/// Called once per property, with the group's lock held.
pub type SDL_EnumeratePropertiesCallback = Option<
    unsafe extern "C" fn(userdata: *mut c_void, props: SDL_PropertiesID, name: *const c_char),
>;

/// Key under which the library stores its own name in the global group.
pub const SDL_PROP_APP_METADATA_NAME_STRING: &core::ffi::CStr = c"SDL.app.metadata.name";
/// Key for the application version in the global group.
pub const SDL_PROP_APP_METADATA_VERSION_STRING: &core::ffi::CStr = c"SDL.app.metadata.version";
/// Key for the application identifier in the global group.
pub const SDL_PROP_APP_METADATA_IDENTIFIER_STRING: &core::ffi::CStr =
    c"SDL.app.metadata.identifier";

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub safe fn SDL_GetGlobalProperties() -> SDL_PropertiesID;
    pub safe fn SDL_CreateProperties() -> SDL_PropertiesID;
    pub safe fn SDL_CopyProperties(src: SDL_PropertiesID, dst: SDL_PropertiesID) -> bool;
    pub safe fn SDL_LockProperties(props: SDL_PropertiesID) -> bool;
    pub fn SDL_UnlockProperties(props: SDL_PropertiesID);

    pub fn SDL_SetPointerPropertyWithCleanup(
        props: SDL_PropertiesID,
        name: *const c_char,
        value: *mut c_void,
        cleanup: SDL_CleanupPropertyCallback,
        userdata: *mut c_void,
    ) -> bool;
    pub fn SDL_SetPointerProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        value: *mut c_void,
    ) -> bool;
    pub fn SDL_SetStringProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        value: *const c_char,
    ) -> bool;
    pub fn SDL_SetNumberProperty(props: SDL_PropertiesID, name: *const c_char, value: i64) -> bool;
    pub fn SDL_SetFloatProperty(props: SDL_PropertiesID, name: *const c_char, value: f32) -> bool;
    pub fn SDL_SetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, value: bool)
    -> bool;

    pub fn SDL_HasProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
    pub fn SDL_GetPropertyType(props: SDL_PropertiesID, name: *const c_char) -> SDL_PropertyType;

    pub fn SDL_GetPointerProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        default_value: *mut c_void,
    ) -> *mut c_void;
    pub fn SDL_GetStringProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        default_value: *const c_char,
    ) -> *const c_char;
    pub fn SDL_GetNumberProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        default_value: i64,
    ) -> i64;
    pub fn SDL_GetFloatProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        default_value: f32,
    ) -> f32;
    pub fn SDL_GetBooleanProperty(
        props: SDL_PropertiesID,
        name: *const c_char,
        default_value: bool,
    ) -> bool;

    pub fn SDL_ClearProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
    pub fn SDL_EnumerateProperties(
        props: SDL_PropertiesID,
        callback: SDL_EnumeratePropertiesCallback,
        userdata: *mut c_void,
    ) -> bool;
    pub fn SDL_DestroyProperties(props: SDL_PropertiesID);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use stratum_core::properties::PropertyType;

    #[test]
    fn properties_id_is_u32() {
        assert_eq!(size_of::<SDL_PropertiesID>(), size_of::<u32>());
    }

    #[test]
    fn type_tags_agree_with_core() {
        for raw in 0..=5 {
            let core_ty = PropertyType::from_raw(raw);
            assert_eq!(core_ty as c_int, SDL_PropertyType(raw).0);
        }
    }
}
