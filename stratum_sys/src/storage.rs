// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_storage.h`: title, user, file and custom storage containers.

use core::ffi::{c_char, c_int, c_void};

use crate::filesystem::{SDL_EnumerateDirectoryCallback, SDL_GlobFlags, SDL_PathInfo};
use crate::properties::SDL_PropertiesID;

/// Function table for a custom storage backend.
///
/// Every member takes the `userdata` passed to [`SDL_OpenStorage`]. Members
/// left as `None` make the corresponding operation fail as unsupported.
/// `version` must be the size of this struct; [`Default`] fills it in, as
/// `SDL_INIT_INTERFACE` does.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_StorageInterface {
    pub version: u32,
    pub close: Option<unsafe extern "C" fn(userdata: *mut c_void) -> bool>,
    pub ready: Option<unsafe extern "C" fn(userdata: *mut c_void) -> bool>,
    pub enumerate: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            path: *const c_char,
            callback: SDL_EnumerateDirectoryCallback,
            callback_userdata: *mut c_void,
        ) -> bool,
    >,
    pub info: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            path: *const c_char,
            info: *mut SDL_PathInfo,
        ) -> bool,
    >,
    pub read_file: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            path: *const c_char,
            destination: *mut c_void,
            length: u64,
        ) -> bool,
    >,
    pub write_file: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            path: *const c_char,
            source: *const c_void,
            length: u64,
        ) -> bool,
    >,
    pub mkdir: Option<unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char) -> bool>,
    pub remove: Option<unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char) -> bool>,
    pub rename: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            oldpath: *const c_char,
            newpath: *const c_char,
        ) -> bool,
    >,
    pub copy: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            oldpath: *const c_char,
            newpath: *const c_char,
        ) -> bool,
    >,
    pub space_remaining: Option<unsafe extern "C" fn(userdata: *mut c_void) -> u64>,
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<SDL_StorageInterface>() == 96);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(size_of::<SDL_StorageInterface>() == 48);

impl Default for SDL_StorageInterface {
    fn default() -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the struct is 96 bytes at most"
        )]
        let version = size_of::<Self>() as u32;
        Self {
            version,
            close: None,
            ready: None,
            enumerate: None,
            info: None,
            read_file: None,
            write_file: None,
            mkdir: None,
            remove: None,
            rename: None,
            copy: None,
            space_remaining: None,
        }
    }
}

opaque! {
    /// An open storage container.
    SDL_Storage;
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Read-only storage for the application's own files.
    pub fn SDL_OpenTitleStorage(r#override: *const c_char, props: SDL_PropertiesID)
    -> *mut SDL_Storage;
    /// Writable storage for a user's data.
    pub fn SDL_OpenUserStorage(
        org: *const c_char,
        app: *const c_char,
        props: SDL_PropertiesID,
    ) -> *mut SDL_Storage;
    /// Storage rooted at a local directory, or the whole filesystem for null.
    pub fn SDL_OpenFileStorage(path: *const c_char) -> *mut SDL_Storage;
    /// The interface is copied; `userdata` is passed to every member.
    pub fn SDL_OpenStorage(
        iface: *const SDL_StorageInterface,
        userdata: *mut c_void,
    ) -> *mut SDL_Storage;
    pub fn SDL_CloseStorage(storage: *mut SDL_Storage) -> bool;
    pub fn SDL_StorageReady(storage: *mut SDL_Storage) -> bool;

    pub fn SDL_GetStorageFileSize(
        storage: *mut SDL_Storage,
        path: *const c_char,
        length: *mut u64,
    ) -> bool;
    pub fn SDL_ReadStorageFile(
        storage: *mut SDL_Storage,
        path: *const c_char,
        destination: *mut c_void,
        length: u64,
    ) -> bool;
    pub fn SDL_WriteStorageFile(
        storage: *mut SDL_Storage,
        path: *const c_char,
        source: *const c_void,
        length: u64,
    ) -> bool;
    pub fn SDL_CreateStorageDirectory(storage: *mut SDL_Storage, path: *const c_char) -> bool;
    pub fn SDL_EnumerateStorageDirectory(
        storage: *mut SDL_Storage,
        path: *const c_char,
        callback: SDL_EnumerateDirectoryCallback,
        userdata: *mut c_void,
    ) -> bool;
    pub fn SDL_RemoveStoragePath(storage: *mut SDL_Storage, path: *const c_char) -> bool;
    pub fn SDL_RenameStoragePath(
        storage: *mut SDL_Storage,
        oldpath: *const c_char,
        newpath: *const c_char,
    ) -> bool;
    pub fn SDL_CopyStorageFile(
        storage: *mut SDL_Storage,
        oldpath: *const c_char,
        newpath: *const c_char,
    ) -> bool;
    pub fn SDL_GetStoragePathInfo(
        storage: *mut SDL_Storage,
        path: *const c_char,
        info: *mut SDL_PathInfo,
    ) -> bool;
    pub fn SDL_GetStorageSpaceRemaining(storage: *mut SDL_Storage) -> u64;
    /// Returns a null-terminated array released as one allocation with
    /// `SDL_free`.
    pub fn SDL_GlobStorageDirectory(
        storage: *mut SDL_Storage,
        path: *const c_char,
        pattern: *const c_char,
        flags: SDL_GlobFlags,
        count: *mut c_int,
    ) -> *mut *mut c_char;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn default_sets_version_to_struct_size() {
        let iface = SDL_StorageInterface::default();
        assert_eq!(iface.version as usize, size_of::<SDL_StorageInterface>());
        assert!(iface.read_file.is_none(), "members start unset");
    }

    #[test]
    fn members_follow_version_word() {
        let ptr = size_of::<*const c_void>();
        assert_eq!(offset_of!(SDL_StorageInterface, close), ptr.max(4));
        assert_eq!(
            offset_of!(SDL_StorageInterface, space_remaining),
            ptr.max(4) + 10 * ptr
        );
    }
}
