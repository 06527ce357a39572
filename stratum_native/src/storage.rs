// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storage containers.
//!
//! A [`Storage`] is opened from one of the native backends (title, user or a
//! local directory) or from any Rust type implementing [`StorageBackend`].
//! Paths inside a container are `/`-separated and relative to its root.
//!
//! Custom backends are handed to the native library as a generated
//! `SDL_StorageInterface` table. The library owns the backend from then on
//! and drops it through the table's `close` member when the container
//! closes.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{CStr, c_char, c_int, c_void};
use std::io;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr::NonNull;
use std::sync::{Mutex, PoisonError};

use stratum_core::properties::PropertiesId;
use stratum_sys::filesystem::{
    SDL_EnumerateDirectoryCallback, SDL_EnumerationResult, SDL_GLOB_CASEINSENSITIVE, SDL_PathInfo,
    SDL_PathType,
};
use stratum_sys::stdinc::SDL_free;
use stratum_sys::storage::{self as sys, SDL_Storage, SDL_StorageInterface};

use crate::error::{Error, Result, borrowed_string, c_string, check, non_null, set_error};

/// What a path inside a container refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathType {
    /// Nothing.
    #[default]
    None,
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Something else, such as a device node.
    Other,
}

impl PathType {
    const fn from_raw(raw: SDL_PathType) -> Self {
        match raw {
            SDL_PathType::FILE => Self::File,
            SDL_PathType::DIRECTORY => Self::Directory,
            SDL_PathType::OTHER => Self::Other,
            _ => Self::None,
        }
    }

    const fn to_raw(self) -> SDL_PathType {
        match self {
            Self::None => SDL_PathType::NONE,
            Self::File => SDL_PathType::FILE,
            Self::Directory => SDL_PathType::DIRECTORY,
            Self::Other => SDL_PathType::OTHER,
        }
    }
}

/// Metadata for a path. Times are nanoseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathInfo {
    /// What the path refers to.
    pub kind: PathType,
    /// File size in bytes.
    pub size: u64,
    /// Creation time.
    pub create_time: i64,
    /// Last modification time.
    pub modify_time: i64,
    /// Last access time.
    pub access_time: i64,
}

impl From<SDL_PathInfo> for PathInfo {
    fn from(raw: SDL_PathInfo) -> Self {
        Self {
            kind: PathType::from_raw(raw.r#type),
            size: raw.size,
            create_time: raw.create_time,
            modify_time: raw.modify_time,
            access_time: raw.access_time,
        }
    }
}

impl From<PathInfo> for SDL_PathInfo {
    fn from(info: PathInfo) -> Self {
        Self {
            r#type: info.kind.to_raw(),
            size: info.size,
            create_time: info.create_time,
            modify_time: info.modify_time,
            access_time: info.access_time,
        }
    }
}

/// What a directory enumeration callback wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumerationResult {
    /// Keep going.
    Continue,
    /// Stop; the enumeration succeeded.
    Success,
    /// Stop; the enumeration failed.
    Failure,
}

impl EnumerationResult {
    const fn to_raw(self) -> SDL_EnumerationResult {
        match self {
            Self::Continue => SDL_EnumerationResult::CONTINUE,
            Self::Success => SDL_EnumerationResult::SUCCESS,
            Self::Failure => SDL_EnumerationResult::FAILURE,
        }
    }

    const fn from_raw(raw: SDL_EnumerationResult) -> Self {
        match raw {
            SDL_EnumerationResult::CONTINUE => Self::Continue,
            SDL_EnumerationResult::SUCCESS => Self::Success,
            _ => Self::Failure,
        }
    }
}

fn unsupported() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "operation not supported by this storage")
}

/// A storage backend implemented in Rust.
///
/// Only [`list`](Self::list), [`info`](Self::info) and
/// [`read_file`](Self::read_file) are required; the remaining operations
/// default to [`io::ErrorKind::Unsupported`], giving a read-only container.
/// Errors are reported to the native side as its last-error text.
pub trait StorageBackend: Send + 'static {
    /// Returns `true` once the container can be used.
    fn ready(&mut self) -> bool {
        true
    }

    /// Returns the names of the entries directly under `path`.
    fn list(&mut self, path: &str) -> io::Result<Vec<String>>;

    /// Returns metadata for `path`.
    fn info(&mut self, path: &str) -> io::Result<PathInfo>;

    /// Fills `dst` with the contents of `path`. `dst` is exactly as long as
    /// the size reported by [`info`](Self::info).
    fn read_file(&mut self, path: &str, dst: &mut [u8]) -> io::Result<()>;

    /// Replaces the contents of `path`.
    fn write_file(&mut self, path: &str, src: &[u8]) -> io::Result<()> {
        let _ = (path, src);
        Err(unsupported())
    }

    /// Creates a directory.
    fn create_directory(&mut self, path: &str) -> io::Result<()> {
        let _ = path;
        Err(unsupported())
    }

    /// Removes a file or an empty directory.
    fn remove(&mut self, path: &str) -> io::Result<()> {
        let _ = path;
        Err(unsupported())
    }

    /// Moves `from` to `to`.
    fn rename(&mut self, from: &str, to: &str) -> io::Result<()> {
        let _ = (from, to);
        Err(unsupported())
    }

    /// Copies the file `from` to `to`.
    fn copy(&mut self, from: &str, to: &str) -> io::Result<()> {
        let _ = (from, to);
        Err(unsupported())
    }

    /// Returns the bytes left for writing.
    fn space_remaining(&mut self) -> u64 {
        0
    }

    /// Called once when the container closes, before the backend drops.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory, writable [`StorageBackend`].
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
    capacity: Option<u64>,
}

fn normalize(path: &str) -> String {
    path.split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

fn parent(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no such path: {path:?}"))
}

impl MemoryBackend {
    /// Creates an empty backend with unlimited space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total size of stored files.
    #[must_use]
    pub fn with_capacity(mut self, bytes: u64) -> Self {
        self.capacity = Some(bytes);
        self
    }

    fn is_dir(&self, path: &str) -> bool {
        path.is_empty() || self.dirs.contains(path)
    }

    fn used(&self) -> u64 {
        self.files.values().map(|data| data.len() as u64).sum()
    }

    fn require_parent(&self, path: &str) -> io::Result<()> {
        if self.is_dir(parent(path)) {
            Ok(())
        } else {
            Err(not_found(parent(path)))
        }
    }

    fn store(&mut self, path: String, data: Vec<u8>) -> io::Result<()> {
        if path.is_empty() || self.is_dir(&path) {
            return Err(io::Error::new(io::ErrorKind::IsADirectory, "path is a directory"));
        }
        self.require_parent(&path)?;
        if let Some(capacity) = self.capacity {
            let existing = self.files.get(&path).map_or(0, |d| d.len() as u64);
            if self.used() - existing + data.len() as u64 > capacity {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "storage is full"));
            }
        }
        self.files.insert(path, data);
        Ok(())
    }
}

impl StorageBackend for MemoryBackend {
    fn list(&mut self, path: &str) -> io::Result<Vec<String>> {
        let path = normalize(path);
        if !self.is_dir(&path) {
            return Err(not_found(&path));
        }
        let children = self
            .dirs
            .iter()
            .chain(self.files.keys())
            .filter(|entry| !entry.is_empty() && parent(entry) == path)
            .map(|entry| entry.rsplit('/').next().unwrap_or(entry).to_owned())
            .collect();
        Ok(children)
    }

    fn info(&mut self, path: &str) -> io::Result<PathInfo> {
        let path = normalize(path);
        if self.is_dir(&path) {
            Ok(PathInfo {
                kind: PathType::Directory,
                ..PathInfo::default()
            })
        } else if let Some(data) = self.files.get(&path) {
            Ok(PathInfo {
                kind: PathType::File,
                size: data.len() as u64,
                ..PathInfo::default()
            })
        } else {
            Err(not_found(&path))
        }
    }

    fn read_file(&mut self, path: &str, dst: &mut [u8]) -> io::Result<()> {
        let path = normalize(path);
        let data = self.files.get(&path).ok_or_else(|| not_found(&path))?;
        if data.len() != dst.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "reading file with the wrong size",
            ));
        }
        dst.copy_from_slice(data);
        Ok(())
    }

    fn write_file(&mut self, path: &str, src: &[u8]) -> io::Result<()> {
        self.store(normalize(path), src.to_vec())
    }

    fn create_directory(&mut self, path: &str) -> io::Result<()> {
        let path = normalize(path);
        if self.files.contains_key(&path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "a file has that name"));
        }
        self.require_parent(&path)?;
        if !path.is_empty() {
            self.dirs.insert(path);
        }
        Ok(())
    }

    fn remove(&mut self, path: &str) -> io::Result<()> {
        let path = normalize(path);
        if self.files.remove(&path).is_some() {
            return Ok(());
        }
        if !self.dirs.contains(&path) {
            return Err(not_found(&path));
        }
        if !self.list(&path)?.is_empty() {
            return Err(io::Error::new(io::ErrorKind::DirectoryNotEmpty, "directory not empty"));
        }
        self.dirs.remove(&path);
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> io::Result<()> {
        let (from, to) = (normalize(from), normalize(to));
        self.require_parent(&to)?;
        if self.files.contains_key(&from) {
            if self.is_dir(&to) {
                return Err(io::Error::new(io::ErrorKind::IsADirectory, "target is a directory"));
            }
            if let Some(data) = self.files.remove(&from) {
                self.files.insert(to, data);
            }
            return Ok(());
        }
        if !self.dirs.contains(&from) {
            return Err(not_found(&from));
        }
        if to == from {
            return Ok(());
        }
        let prefix = format!("{from}/");
        if to.starts_with(&prefix) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot move a directory into itself",
            ));
        }
        if self.files.contains_key(&to) || self.is_dir(&to) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "target exists"));
        }
        let moved: Vec<String> = self
            .dirs
            .iter()
            .chain(self.files.keys())
            .filter(|entry| **entry == from || entry.starts_with(&prefix))
            .cloned()
            .collect();
        for old in moved {
            let new = format!("{to}{}", &old[from.len()..]);
            if let Some(data) = self.files.remove(&old) {
                self.files.insert(new, data);
            } else if self.dirs.remove(&old) {
                self.dirs.insert(new);
            }
        }
        Ok(())
    }

    fn copy(&mut self, from: &str, to: &str) -> io::Result<()> {
        let from = normalize(from);
        let data = self.files.get(&from).ok_or_else(|| not_found(&from))?.clone();
        self.store(normalize(to), data)
    }

    fn space_remaining(&mut self) -> u64 {
        self.capacity
            .map_or(u64::MAX, |capacity| capacity.saturating_sub(self.used()))
    }
}

/// Userdata behind a generated interface table.
struct Adapter<B> {
    backend: Mutex<B>,
    report: fn(&str),
}

impl<B: StorageBackend> Adapter<B> {
    /// Runs `f` on the backend, reporting errors and panics through
    /// `report`.
    fn run<R>(&self, f: impl FnOnce(&mut B) -> io::Result<R>) -> Option<R> {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let mut backend = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut backend)
        }));
        match outcome {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                (self.report)(&err.to_string());
                None
            }
            Err(_) => {
                (self.report)("storage backend panicked");
                None
            }
        }
    }
}

/// # Safety
///
/// `userdata` must come from [`adapter_userdata`] with the same `B` and not
/// have been closed.
unsafe fn adapter<'a, B>(userdata: *mut c_void) -> &'a Adapter<B> {
    // SAFETY: per the function contract.
    unsafe { &*userdata.cast::<Adapter<B>>() }
}

/// # Safety
///
/// `ptr` must be null or a NUL-terminated string.
unsafe fn path_arg(ptr: *const c_char) -> io::Result<String> {
    // SAFETY: per the function contract.
    unsafe { borrowed_string(ptr) }
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "null path"))
}

fn adapter_userdata<B: StorageBackend>(backend: B, report: fn(&str)) -> *mut c_void {
    Box::into_raw(Box::new(Adapter {
        backend: Mutex::new(backend),
        report,
    }))
    .cast()
}

/// # Safety
///
/// `userdata` must come from [`adapter_userdata`] with the same `B` and must
/// not be used again.
unsafe fn free_adapter<B>(userdata: *mut c_void) -> Adapter<B> {
    // SAFETY: per the function contract.
    *unsafe { Box::from_raw(userdata.cast::<Adapter<B>>()) }
}

unsafe extern "C" fn close_trampoline<B: StorageBackend>(userdata: *mut c_void) -> bool {
    // SAFETY: the native side calls `close` once, last.
    let adapter = unsafe { free_adapter::<B>(userdata) };
    adapter.run(B::close).is_some()
}

unsafe extern "C" fn ready_trampoline<B: StorageBackend>(userdata: *mut c_void) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter.run(|b| Ok(b.ready())).unwrap_or(false)
}

unsafe extern "C" fn enumerate_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    path: *const c_char,
    callback: SDL_EnumerateDirectoryCallback,
    callback_userdata: *mut c_void,
) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    // SAFETY: the native side passes a NUL-terminated path.
    let Some(path) = adapter.run(|_| unsafe { path_arg(path) }) else {
        return false;
    };
    let Some(entries) = adapter.run(|b| b.list(&path)) else {
        return false;
    };
    let Some(callback) = callback else {
        return true;
    };

    let mut dirname = path;
    if !dirname.ends_with('/') {
        dirname.push('/');
    }
    let Ok(dirname) = c_string(&dirname) else {
        (adapter.report)("path contains a NUL byte");
        return false;
    };
    for entry in entries {
        let Ok(entry) = c_string(&entry) else {
            continue;
        };
        // SAFETY: both strings outlive the call; `callback_userdata` is the
        // caller's own.
        let next = unsafe { callback(callback_userdata, dirname.as_ptr(), entry.as_ptr()) };
        match EnumerationResult::from_raw(next) {
            EnumerationResult::Continue => {}
            EnumerationResult::Success => return true,
            EnumerationResult::Failure => {
                (adapter.report)("enumeration callback reported failure");
                return false;
            }
        }
    }
    true
}

unsafe extern "C" fn info_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    path: *const c_char,
    info: *mut SDL_PathInfo,
) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    // SAFETY: the native side passes a NUL-terminated path.
    let found = adapter.run(|b| b.info(&unsafe { path_arg(path) }?));
    match found {
        Some(found) => {
            if !info.is_null() {
                // SAFETY: non-null `info` points at writable storage.
                unsafe { info.write(found.into()) };
            }
            true
        }
        None => false,
    }
}

unsafe extern "C" fn read_file_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    path: *const c_char,
    destination: *mut c_void,
    length: u64,
) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter
        .run(|b| {
            // SAFETY: the native side passes a NUL-terminated path.
            let path = unsafe { path_arg(path) }?;
            let len = usize::try_from(length).map_err(|_| io::Error::other(Error::SizeOverflow))?;
            let dst: &mut [u8] = if len == 0 || destination.is_null() {
                &mut []
            } else {
                // SAFETY: the caller provides `length` writable bytes.
                unsafe { core::slice::from_raw_parts_mut(destination.cast::<u8>(), len) }
            };
            b.read_file(&path, dst)
        })
        .is_some()
}

unsafe extern "C" fn write_file_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    path: *const c_char,
    source: *const c_void,
    length: u64,
) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter
        .run(|b| {
            // SAFETY: the native side passes a NUL-terminated path.
            let path = unsafe { path_arg(path) }?;
            let len = usize::try_from(length).map_err(|_| io::Error::other(Error::SizeOverflow))?;
            let src: &[u8] = if len == 0 || source.is_null() {
                &[]
            } else {
                // SAFETY: the caller provides `length` readable bytes.
                unsafe { core::slice::from_raw_parts(source.cast::<u8>(), len) }
            };
            b.write_file(&path, src)
        })
        .is_some()
}

unsafe extern "C" fn mkdir_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    path: *const c_char,
) -> bool {
    // SAFETY: `userdata` is the live adapter; `path` is NUL-terminated.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter
        .run(|b| b.create_directory(&unsafe { path_arg(path) }?))
        .is_some()
}

unsafe extern "C" fn remove_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    path: *const c_char,
) -> bool {
    // SAFETY: `userdata` is the live adapter; `path` is NUL-terminated.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter.run(|b| b.remove(&unsafe { path_arg(path) }?)).is_some()
}

unsafe extern "C" fn rename_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    oldpath: *const c_char,
    newpath: *const c_char,
) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter
        .run(|b| {
            // SAFETY: the native side passes NUL-terminated paths.
            let (from, to) = unsafe { (path_arg(oldpath)?, path_arg(newpath)?) };
            b.rename(&from, &to)
        })
        .is_some()
}

unsafe extern "C" fn copy_trampoline<B: StorageBackend>(
    userdata: *mut c_void,
    oldpath: *const c_char,
    newpath: *const c_char,
) -> bool {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter
        .run(|b| {
            // SAFETY: the native side passes NUL-terminated paths.
            let (from, to) = unsafe { (path_arg(oldpath)?, path_arg(newpath)?) };
            b.copy(&from, &to)
        })
        .is_some()
}

unsafe extern "C" fn space_trampoline<B: StorageBackend>(userdata: *mut c_void) -> u64 {
    // SAFETY: `userdata` is the live adapter.
    let adapter = unsafe { adapter::<B>(userdata) };
    adapter.run(|b| Ok(b.space_remaining())).unwrap_or(0)
}

/// Builds the interface table dispatching to `B`.
fn interface<B: StorageBackend>() -> SDL_StorageInterface {
    SDL_StorageInterface {
        close: Some(close_trampoline::<B>),
        ready: Some(ready_trampoline::<B>),
        enumerate: Some(enumerate_trampoline::<B>),
        info: Some(info_trampoline::<B>),
        read_file: Some(read_file_trampoline::<B>),
        write_file: Some(write_file_trampoline::<B>),
        mkdir: Some(mkdir_trampoline::<B>),
        remove: Some(remove_trampoline::<B>),
        rename: Some(rename_trampoline::<B>),
        copy: Some(copy_trampoline::<B>),
        space_remaining: Some(space_trampoline::<B>),
        ..SDL_StorageInterface::default()
    }
}

/// Options for [`Storage::glob`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobOptions {
    /// Match names ignoring ASCII case.
    pub case_insensitive: bool,
}

/// An open storage container, closed on drop.
#[derive(Debug)]
pub struct Storage {
    raw: NonNull<SDL_Storage>,
}

impl Storage {
    fn from_raw(raw: *mut SDL_Storage, what: &str) -> Result<Self> {
        let raw = non_null(raw)?;
        ::log::debug!(target: "stratum::storage", "opened {what} storage");
        Ok(Self { raw })
    }

    /// Opens the application's read-only data. `override_path` replaces the
    /// platform default location.
    pub fn title(override_path: Option<&str>, props: Option<PropertiesId>) -> Result<Self> {
        let path = override_path.map(c_string).transpose()?;
        let path_ptr = path.as_ref().map_or(core::ptr::null(), |p| p.as_ptr());
        // SAFETY: `path_ptr` is null or a valid C string.
        let raw = unsafe { sys::SDL_OpenTitleStorage(path_ptr, props.unwrap_or_default()) };
        Self::from_raw(raw, "title")
    }

    /// Opens writable storage for an organization and application.
    pub fn user(org: &str, app: &str, props: Option<PropertiesId>) -> Result<Self> {
        let (org, app) = (c_string(org)?, c_string(app)?);
        // SAFETY: both strings are valid C strings.
        let raw =
            unsafe { sys::SDL_OpenUserStorage(org.as_ptr(), app.as_ptr(), props.unwrap_or_default()) };
        Self::from_raw(raw, "user")
    }

    /// Opens storage rooted at a local directory, or the whole filesystem
    /// for `None`.
    pub fn file(root: Option<&str>) -> Result<Self> {
        let root = root.map(c_string).transpose()?;
        let root_ptr = root.as_ref().map_or(core::ptr::null(), |p| p.as_ptr());
        // SAFETY: `root_ptr` is null or a valid C string.
        let raw = unsafe { sys::SDL_OpenFileStorage(root_ptr) };
        Self::from_raw(raw, "file")
    }

    /// Opens a container served by a Rust backend.
    pub fn custom<B: StorageBackend>(backend: B) -> Result<Self> {
        let iface = interface::<B>();
        let userdata = adapter_userdata(backend, set_error);
        // SAFETY: `iface` is copied by the callee; `userdata` matches `B`.
        let raw = unsafe { sys::SDL_OpenStorage(&iface, userdata) };
        if raw.is_null() {
            // SAFETY: the library did not take ownership.
            drop(unsafe { free_adapter::<B>(userdata) });
            return Err(Error::native());
        }
        Self::from_raw(raw, "custom")
    }

    fn as_ptr(&self) -> *mut SDL_Storage {
        self.raw.as_ptr()
    }

    /// Returns `true` once the container can be used.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        // SAFETY: live handle.
        unsafe { sys::SDL_StorageReady(self.as_ptr()) }
    }

    /// Closes the container, reporting any failure to flush it.
    pub fn close(self) -> Result<()> {
        let raw = self.as_ptr();
        core::mem::forget(self);
        // SAFETY: the handle is consumed.
        check(unsafe { sys::SDL_CloseStorage(raw) })
    }

    /// Returns the size of a file in bytes.
    pub fn file_size(&self, path: &str) -> Result<u64> {
        let path = c_string(path)?;
        let mut len = 0_u64;
        // SAFETY: live handle, valid path and out pointer.
        check(unsafe { sys::SDL_GetStorageFileSize(self.as_ptr(), path.as_ptr(), &mut len) })?;
        Ok(len)
    }

    /// Reads a file into `dst`, which must be exactly the file's size.
    pub fn read_into(&self, path: &str, dst: &mut [u8]) -> Result<()> {
        let path = c_string(path)?;
        // SAFETY: `dst` is writable for its whole length.
        check(unsafe {
            sys::SDL_ReadStorageFile(
                self.as_ptr(),
                path.as_ptr(),
                dst.as_mut_ptr().cast(),
                dst.len() as u64,
            )
        })
    }

    /// Reads a whole file.
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        let len = usize::try_from(self.file_size(path)?).map_err(|_| Error::SizeOverflow)?;
        let mut data = vec![0; len];
        self.read_into(path, &mut data)?;
        Ok(data)
    }

    /// Replaces the contents of a file.
    pub fn write(&self, path: &str, data: &[u8]) -> Result<()> {
        let path = c_string(path)?;
        // SAFETY: `data` is readable for its whole length.
        check(unsafe {
            sys::SDL_WriteStorageFile(
                self.as_ptr(),
                path.as_ptr(),
                data.as_ptr().cast(),
                data.len() as u64,
            )
        })
    }

    /// Creates a directory.
    pub fn create_directory(&self, path: &str) -> Result<()> {
        let path = c_string(path)?;
        // SAFETY: live handle and valid path.
        check(unsafe { sys::SDL_CreateStorageDirectory(self.as_ptr(), path.as_ptr()) })
    }

    /// Calls `f` with the directory name (ending in `/`) and each entry name
    /// under `path`.
    pub fn enumerate<F>(&self, path: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&str, &str) -> EnumerationResult,
    {
        let path = c_string(path)?;
        let mut visitor: &mut dyn FnMut(&str, &str) -> EnumerationResult = &mut f;
        // SAFETY: `visitor` outlives the call and `visit_entry` only runs
        // during it.
        check(unsafe {
            sys::SDL_EnumerateStorageDirectory(
                self.as_ptr(),
                path.as_ptr(),
                Some(visit_entry),
                (&raw mut visitor).cast(),
            )
        })
    }

    /// Returns the entries directly under `path`.
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        self.enumerate(path, |_, name| {
            names.push(name.to_owned());
            EnumerationResult::Continue
        })?;
        Ok(names)
    }

    /// Removes a file or an empty directory.
    pub fn remove(&self, path: &str) -> Result<()> {
        let path = c_string(path)?;
        // SAFETY: live handle and valid path.
        check(unsafe { sys::SDL_RemoveStoragePath(self.as_ptr(), path.as_ptr()) })
    }

    /// Moves a file or directory.
    pub fn rename(&self, from: &str, to: &str) -> Result<()> {
        let (from, to) = (c_string(from)?, c_string(to)?);
        // SAFETY: live handle and valid paths.
        check(unsafe { sys::SDL_RenameStoragePath(self.as_ptr(), from.as_ptr(), to.as_ptr()) })
    }

    /// Copies a file.
    pub fn copy(&self, from: &str, to: &str) -> Result<()> {
        let (from, to) = (c_string(from)?, c_string(to)?);
        // SAFETY: live handle and valid paths.
        check(unsafe { sys::SDL_CopyStorageFile(self.as_ptr(), from.as_ptr(), to.as_ptr()) })
    }

    /// Returns metadata for a path.
    pub fn path_info(&self, path: &str) -> Result<PathInfo> {
        let path = c_string(path)?;
        let mut info = SDL_PathInfo::default();
        // SAFETY: live handle, valid path and out pointer.
        check(unsafe { sys::SDL_GetStoragePathInfo(self.as_ptr(), path.as_ptr(), &mut info) })?;
        Ok(info.into())
    }

    /// Returns `true` if `path` exists.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.path_info(path).is_ok_and(|info| info.kind != PathType::None)
    }

    /// Returns the bytes left for writing.
    #[must_use]
    pub fn space_remaining(&self) -> u64 {
        // SAFETY: live handle.
        unsafe { sys::SDL_GetStorageSpaceRemaining(self.as_ptr()) }
    }

    /// Returns the paths under `path` matching `pattern` (`*` and `?`
    /// wildcards), recursing into subdirectories. `None` matches everything.
    pub fn glob(&self, path: &str, pattern: Option<&str>, options: GlobOptions) -> Result<Vec<String>> {
        let path = c_string(path)?;
        let pattern = pattern.map(c_string).transpose()?;
        let pattern_ptr = pattern.as_ref().map_or(core::ptr::null(), |p| p.as_ptr());
        let flags = if options.case_insensitive { SDL_GLOB_CASEINSENSITIVE } else { 0 };
        let mut count: c_int = 0;
        // SAFETY: live handle, valid strings and out pointer.
        let list = unsafe {
            sys::SDL_GlobStorageDirectory(self.as_ptr(), path.as_ptr(), pattern_ptr, flags, &mut count)
        };
        let list = non_null(list)?;
        // SAFETY: the library returns `count` valid strings in one
        // allocation, released below.
        let paths = unsafe { collect_strings(list.as_ptr(), count) };
        // SAFETY: `list` came from the library's allocator.
        unsafe { SDL_free(list.as_ptr().cast()) };
        Ok(paths)
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        // SAFETY: the handle is live and dropped once.
        if !unsafe { sys::SDL_CloseStorage(self.as_ptr()) } {
            ::log::warn!(
                target: "stratum::storage",
                "closing storage failed: {}",
                crate::error::last_error()
            );
        }
    }
}

/// Copies a counted array of C strings.
///
/// # Safety
///
/// `list` must point to at least `count` readable pointers, each null or
/// NUL-terminated.
pub(crate) unsafe fn collect_strings(list: *const *mut c_char, count: c_int) -> Vec<String> {
    let count = usize::try_from(count).unwrap_or(0);
    (0..count)
        // SAFETY: per the function contract.
        .filter_map(|i| unsafe { borrowed_string(*list.add(i)) })
        .collect()
}

unsafe extern "C" fn visit_entry(
    userdata: *mut c_void,
    dirname: *const c_char,
    fname: *const c_char,
) -> SDL_EnumerationResult {
    if dirname.is_null() || fname.is_null() {
        return SDL_EnumerationResult::FAILURE;
    }
    // SAFETY: `userdata` points at the visitor set up in
    // `Storage::enumerate`, alive for the whole enumeration.
    let visitor = unsafe { &mut *userdata.cast::<&mut dyn FnMut(&str, &str) -> EnumerationResult>() };
    // SAFETY: the native side passes NUL-terminated strings.
    let (dir, name) = unsafe { (CStr::from_ptr(dirname), CStr::from_ptr(fname)) };
    visitor(&dir.to_string_lossy(), &name.to_string_lossy()).to_raw()
}

#[cfg(test)]
mod tests {
    use super::*;
    static REPORTED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn record(msg: &str) {
        REPORTED.lock().unwrap().push(msg.to_owned());
    }

    fn reported_containing(needle: &str) -> bool {
        REPORTED.lock().unwrap().iter().any(|m| m.contains(needle))
    }

    /// Drives a backend through its generated table, as the native side
    /// would.
    struct Harness {
        iface: SDL_StorageInterface,
        userdata: *mut c_void,
    }

    impl Harness {
        fn new<B: StorageBackend>(backend: B) -> Self {
            Self {
                iface: interface::<B>(),
                userdata: adapter_userdata(backend, record),
            }
        }

        fn write(&self, path: &CStr, data: &[u8]) -> bool {
            let f = self.iface.write_file.unwrap();
            // SAFETY: live adapter; `data` is readable.
            unsafe { f(self.userdata, path.as_ptr(), data.as_ptr().cast(), data.len() as u64) }
        }

        fn read(&self, path: &CStr, dst: &mut [u8]) -> bool {
            let f = self.iface.read_file.unwrap();
            // SAFETY: live adapter; `dst` is writable.
            unsafe { f(self.userdata, path.as_ptr(), dst.as_mut_ptr().cast(), dst.len() as u64) }
        }

        fn mkdir(&self, path: &CStr) -> bool {
            // SAFETY: live adapter.
            unsafe { self.iface.mkdir.unwrap()(self.userdata, path.as_ptr()) }
        }

        fn info(&self, path: &CStr) -> Option<SDL_PathInfo> {
            let mut info = SDL_PathInfo::default();
            // SAFETY: live adapter; `info` is writable.
            unsafe { self.iface.info.unwrap()(self.userdata, path.as_ptr(), &mut info) }.then_some(info)
        }

        fn close(self) -> bool {
            // SAFETY: closes the adapter exactly once.
            unsafe { self.iface.close.unwrap()(self.userdata) }
        }
    }

    unsafe extern "C" fn collect_entry(
        userdata: *mut c_void,
        dirname: *const c_char,
        fname: *const c_char,
    ) -> SDL_EnumerationResult {
        // SAFETY: test userdata is a `Vec<String>`; strings are valid.
        let out = unsafe { &mut *userdata.cast::<Vec<String>>() };
        let (dir, name) = unsafe { (CStr::from_ptr(dirname), CStr::from_ptr(fname)) };
        out.push(format!("{}{}", dir.to_string_lossy(), name.to_string_lossy()));
        SDL_EnumerationResult::CONTINUE
    }

    unsafe extern "C" fn stop_after_first(
        userdata: *mut c_void,
        _dirname: *const c_char,
        _fname: *const c_char,
    ) -> SDL_EnumerationResult {
        // SAFETY: test userdata is a `usize` counter.
        unsafe { *userdata.cast::<usize>() += 1 };
        SDL_EnumerationResult::SUCCESS
    }

    #[test]
    fn interface_fills_every_member() {
        let iface = interface::<MemoryBackend>();
        assert_eq!(iface.version as usize, size_of::<SDL_StorageInterface>());
        assert!(iface.close.is_some(), "close is required to free the backend");
        assert!(iface.space_remaining.is_some(), "space is always answered");
    }

    #[test]
    fn write_then_read_through_table() {
        let h = Harness::new(MemoryBackend::new());
        assert!(h.mkdir(c"saves"), "mkdir at root succeeds");
        assert!(h.write(c"saves/slot1", b"hello"), "write succeeds");

        let info = h.info(c"saves/slot1").unwrap();
        assert_eq!(info.r#type, SDL_PathType::FILE);
        assert_eq!(info.size, 5);

        let mut buf = [0_u8; 5];
        assert!(h.read(c"saves/slot1", &mut buf), "read succeeds");
        assert_eq!(&buf, b"hello");
        assert!(h.close(), "close succeeds");
    }

    #[test]
    fn wrong_size_read_is_reported() {
        let h = Harness::new(MemoryBackend::new());
        assert!(h.write(c"a", b"abc"), "write succeeds");
        let mut buf = [0_u8; 2];
        assert!(!h.read(c"a", &mut buf), "short buffer is rejected");
        assert!(reported_containing("wrong size"), "error text reaches the native side");
        assert!(h.close(), "close succeeds");
    }

    #[test]
    fn enumerate_passes_dirname_with_slash() {
        let h = Harness::new(MemoryBackend::new());
        assert!(h.mkdir(c"d"), "mkdir succeeds");
        assert!(h.write(c"d/x", b"1"), "write succeeds");
        assert!(h.write(c"d/y", b"2"), "write succeeds");

        let mut seen: Vec<String> = Vec::new();
        let enumerate = h.iface.enumerate.unwrap();
        // SAFETY: live adapter; `seen` outlives the call.
        let ok = unsafe {
            enumerate(h.userdata, c"d".as_ptr(), Some(collect_entry), (&raw mut seen).cast())
        };
        assert!(ok, "enumeration succeeds");
        seen.sort();
        assert_eq!(seen, ["d/x", "d/y"]);

        let mut calls = 0_usize;
        // SAFETY: as above.
        let ok = unsafe {
            enumerate(h.userdata, c"d".as_ptr(), Some(stop_after_first), (&raw mut calls).cast())
        };
        assert!(ok, "an early success ends the enumeration successfully");
        assert_eq!(calls, 1);
        assert!(h.close(), "close succeeds");
    }

    struct ReadOnly;

    impl StorageBackend for ReadOnly {
        fn list(&mut self, _path: &str) -> io::Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn info(&mut self, _path: &str) -> io::Result<PathInfo> {
            Ok(PathInfo::default())
        }

        fn read_file(&mut self, _path: &str, _dst: &mut [u8]) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_members_are_unsupported() {
        let h = Harness::new(ReadOnly);
        assert!(!h.write(c"f", b"x"), "writes fail on a read-only backend");
        assert!(reported_containing("not supported"), "failure is reported");
        // SAFETY: live adapter.
        assert_eq!(unsafe { h.iface.space_remaining.unwrap()(h.userdata) }, 0);
        assert!(h.close(), "close succeeds");
    }

    struct Panics;

    impl StorageBackend for Panics {
        fn list(&mut self, _path: &str) -> io::Result<Vec<String>> {
            panic!("list");
        }

        fn info(&mut self, _path: &str) -> io::Result<PathInfo> {
            panic!("info");
        }

        fn read_file(&mut self, _path: &str, _dst: &mut [u8]) -> io::Result<()> {
            panic!("read");
        }
    }

    #[test]
    fn backend_panics_become_failures() {
        let h = Harness::new(Panics);
        assert!(h.info(c"x").is_none(), "a panic is a failure");
        assert!(reported_containing("panicked"), "the panic is reported");
        assert!(h.close(), "close still frees the backend");
    }

    #[test]
    fn memory_backend_directories() {
        let mut m = MemoryBackend::new();
        assert!(m.write_file("missing/f", b"x").is_err(), "parent must exist");
        m.create_directory("a").unwrap();
        m.create_directory("a/b").unwrap();
        m.write_file("/a/b/f", b"data").unwrap();
        assert_eq!(m.list("a").unwrap(), ["b"]);

        let err = m.remove("a/b").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::DirectoryNotEmpty);

        m.rename("a/b", "a/c").unwrap();
        assert_eq!(m.info("a/c/f").unwrap().size, 4);
        assert!(m.info("a/b/f").is_err(), "old path is gone");

        m.copy("a/c/f", "g").unwrap();
        let mut buf = [0_u8; 4];
        m.read_file("g", &mut buf).unwrap();
        assert_eq!(&buf, b"data");
    }

    #[test]
    fn memory_backend_rename_rejects_collisions() {
        let mut m = MemoryBackend::new();
        m.create_directory("a").unwrap();
        m.create_directory("d").unwrap();
        m.write_file("a/f", b"1").unwrap();
        m.write_file("g", b"2").unwrap();

        let err = m.rename("a", "a/b").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(m.list("a").unwrap(), ["f"]);

        let err = m.rename("g", "d").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);
        assert_eq!(m.info("g").unwrap().kind, PathType::File);
        assert_eq!(m.info("d").unwrap().kind, PathType::Directory);

        let err = m.rename("a", "g").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        let err = m.rename("a", "d").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        m.rename("a", "a").unwrap();
        m.rename("g", "a/g").unwrap();
        assert_eq!(m.info("a/g").unwrap().size, 1);
    }

    #[test]
    fn memory_backend_capacity() {
        let mut m = MemoryBackend::new().with_capacity(4);
        m.write_file("a", b"123").unwrap();
        assert_eq!(m.space_remaining(), 1);
        let err = m.write_file("b", b"12").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        m.write_file("a", b"1234").unwrap();
        assert_eq!(m.space_remaining(), 0);
    }

    #[test]
    fn visit_entry_forwards_and_converts() {
        let mut seen = Vec::new();
        let mut f = |dir: &str, name: &str| {
            seen.push(format!("{dir}{name}"));
            EnumerationResult::Failure
        };
        let mut visitor: &mut dyn FnMut(&str, &str) -> EnumerationResult = &mut f;
        // SAFETY: `visitor` is live; strings are valid.
        let next = unsafe { visit_entry((&raw mut visitor).cast(), c"dir/".as_ptr(), c"f".as_ptr()) };
        assert_eq!(next, SDL_EnumerationResult::FAILURE);
        assert_eq!(seen, ["dir/f"]);
    }

    #[test]
    fn path_info_conversion() {
        let info = PathInfo {
            kind: PathType::Directory,
            size: 0,
            create_time: 1,
            modify_time: 2,
            access_time: 3,
        };
        let raw = SDL_PathInfo::from(info);
        assert_eq!(raw.r#type, SDL_PathType::DIRECTORY);
        assert_eq!(PathInfo::from(raw), info);
        assert_eq!(PathType::from_raw(SDL_PathType(42)), PathType::None);
    }
}
