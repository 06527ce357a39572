// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native property groups.
//!
//! [`Properties`] wraps a group id. Groups created with [`Properties::new`]
//! are destroyed on drop; the global group and groups handed out by other
//! objects (surfaces, processes) are borrowed and left alone.
//!
//! Pointer cleanups are boxed Rust closures. The native side calls them back
//! when the value is replaced, cleared or its group destroyed; a closure that
//! is never needed (for example because the value was null) is dropped
//! without running.
//!
//! Typed getters never convert: reading a property as a type other than the
//! one it was stored with returns the caller's default.

use std::any::Any;
use std::ffi::{CStr, c_char, c_void};
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use stratum_core::properties::{PropertiesId, PropertyStore, PropertyType, PropertyValue, RawAddress};
use stratum_sys::properties as sys;

use crate::error::{Error, Result, borrowed_string, c_string, check};

type CleanupFn = Box<dyn FnOnce(RawAddress) + Send>;

/// A handle to a native property group.
pub struct Properties {
    id: PropertiesId,
    owned: bool,
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("id", &self.id)
            .field("owned", &self.owned)
            .finish()
    }
}

impl Properties {
    /// Creates an empty group, destroyed when the handle drops.
    pub fn new() -> Result<Self> {
        let id = sys::SDL_CreateProperties();
        if !id.is_valid() {
            return Err(Error::native());
        }
        ::log::trace!(target: "stratum::properties", "created group {id:?}");
        Ok(Self { id, owned: true })
    }

    /// Returns the process-wide group. It is never destroyed by this handle.
    pub fn global() -> Result<Self> {
        let id = sys::SDL_GetGlobalProperties();
        if id.is_valid() {
            Ok(Self::borrowed(id))
        } else {
            Err(Error::native())
        }
    }

    /// Wraps a group owned by someone else.
    ///
    /// Operations on an id that does not name a live group fail or return
    /// defaults; they never touch freed memory.
    #[must_use]
    pub const fn borrowed(id: PropertiesId) -> Self {
        Self { id, owned: false }
    }

    /// Returns the group id.
    #[must_use]
    pub const fn id(&self) -> PropertiesId {
        self.id
    }

    /// Stores an address without a cleanup. `None` clears the property.
    pub fn set_pointer(&self, name: &str, value: Option<RawAddress>) -> Result<()> {
        let name = c_string(name)?;
        let value = value.map_or(core::ptr::null_mut(), RawAddress::as_void_ptr);
        // SAFETY: `name` is a valid C string; the group only stores `value`.
        check(unsafe { sys::SDL_SetPointerProperty(self.id, name.as_ptr(), value) })
    }

    /// Stores an address and a closure to run on it once the group lets go
    /// of it.
    ///
    /// If the call fails the closure runs immediately, so ownership of the
    /// pointee is always handed over.
    pub fn set_pointer_with_cleanup<F>(&self, name: &str, value: RawAddress, cleanup: F) -> Result<()>
    where
        F: FnOnce(RawAddress) + Send + 'static,
    {
        let name = match c_string(name) {
            Ok(name) => name,
            Err(err) => {
                cleanup(value);
                return Err(err);
            }
        };
        let userdata = cleanup_userdata(Box::new(cleanup));
        // SAFETY: `run_cleanup` consumes `userdata` exactly once: on failure,
        // on replacement, on clear or when the group is destroyed.
        check(unsafe {
            sys::SDL_SetPointerPropertyWithCleanup(
                self.id,
                name.as_ptr(),
                value.as_void_ptr(),
                Some(run_cleanup),
                userdata,
            )
        })
    }

    /// Stores a copy of `value`. `None` clears the property.
    pub fn set_string(&self, name: &str, value: Option<&str>) -> Result<()> {
        let name = c_string(name)?;
        let value = value.map(c_string).transpose()?;
        let value_ptr = value.as_ref().map_or(core::ptr::null(), |v| v.as_ptr());
        // SAFETY: both strings are valid for the call; the group copies them.
        check(unsafe { sys::SDL_SetStringProperty(self.id, name.as_ptr(), value_ptr) })
    }

    /// Stores a signed integer.
    pub fn set_number(&self, name: &str, value: i64) -> Result<()> {
        let name = c_string(name)?;
        // SAFETY: `name` is a valid C string.
        check(unsafe { sys::SDL_SetNumberProperty(self.id, name.as_ptr(), value) })
    }

    /// Stores a float.
    pub fn set_float(&self, name: &str, value: f32) -> Result<()> {
        let name = c_string(name)?;
        // SAFETY: `name` is a valid C string.
        check(unsafe { sys::SDL_SetFloatProperty(self.id, name.as_ptr(), value) })
    }

    /// Stores a boolean.
    pub fn set_boolean(&self, name: &str, value: bool) -> Result<()> {
        let name = c_string(name)?;
        // SAFETY: `name` is a valid C string.
        check(unsafe { sys::SDL_SetBooleanProperty(self.id, name.as_ptr(), value) })
    }

    /// Removes a property, running its cleanup if it has one.
    pub fn clear(&self, name: &str) -> Result<()> {
        let name = c_string(name)?;
        // SAFETY: `name` is a valid C string.
        check(unsafe { sys::SDL_ClearProperty(self.id, name.as_ptr()) })
    }

    /// Returns `true` if the property exists.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        let Ok(name) = c_string(name) else {
            return false;
        };
        // SAFETY: `name` is a valid C string.
        unsafe { sys::SDL_HasProperty(self.id, name.as_ptr()) }
    }

    /// Returns the type of a property, [`PropertyType::Invalid`] if absent.
    #[must_use]
    pub fn property_type(&self, name: &str) -> PropertyType {
        let Ok(name) = c_string(name) else {
            return PropertyType::Invalid;
        };
        // SAFETY: `name` is a valid C string.
        let raw = unsafe { sys::SDL_GetPropertyType(self.id, name.as_ptr()) };
        PropertyType::from_raw(raw.0)
    }

    /// Reads `name` with `read` if it is stored as `expected`, holding the
    /// group lock so the type cannot change in between.
    fn read_typed<T>(
        &self,
        name: &str,
        expected: PropertyType,
        default: T,
        read: impl FnOnce(&CStr, T) -> T,
    ) -> T {
        let Ok(name) = c_string(name) else {
            return default;
        };
        let _guard = self.lock();
        // SAFETY: `name` is a valid C string.
        let raw = unsafe { sys::SDL_GetPropertyType(self.id, name.as_ptr()) };
        read_if(PropertyType::from_raw(raw.0), expected, default, |default| {
            read(&name, default)
        })
    }

    /// Returns a pointer property, or `default` if absent or not a pointer.
    #[must_use]
    pub fn get_pointer(&self, name: &str, default: Option<RawAddress>) -> Option<RawAddress> {
        self.read_typed(name, PropertyType::Pointer, default, |name, default| {
            // SAFETY: `name` is a valid C string; the result is only an address.
            RawAddress::from_ptr(unsafe {
                sys::SDL_GetPointerProperty(self.id, name.as_ptr(), core::ptr::null_mut())
            })
            .or(default)
        })
    }

    /// Returns a copy of a string property, or `default` if absent or not a
    /// string.
    #[must_use]
    pub fn get_string(&self, name: &str, default: &str) -> String {
        self.read_typed(name, PropertyType::String, default.to_owned(), |name, default| {
            // SAFETY: the group is locked, so the returned string stays valid
            // until it has been copied.
            let value = unsafe {
                borrowed_string(sys::SDL_GetStringProperty(
                    self.id,
                    name.as_ptr(),
                    core::ptr::null(),
                ))
            };
            value.unwrap_or(default)
        })
    }

    /// Returns a number property, or `default` if absent or not a number.
    #[must_use]
    pub fn get_number(&self, name: &str, default: i64) -> i64 {
        self.read_typed(name, PropertyType::Number, default, |name, default| {
            // SAFETY: `name` is a valid C string.
            unsafe { sys::SDL_GetNumberProperty(self.id, name.as_ptr(), default) }
        })
    }

    /// Returns a float property, or `default` if absent or not a float.
    #[must_use]
    pub fn get_float(&self, name: &str, default: f32) -> f32 {
        self.read_typed(name, PropertyType::Float, default, |name, default| {
            // SAFETY: `name` is a valid C string.
            unsafe { sys::SDL_GetFloatProperty(self.id, name.as_ptr(), default) }
        })
    }

    /// Returns a boolean property, or `default` if absent or not a boolean.
    #[must_use]
    pub fn get_boolean(&self, name: &str, default: bool) -> bool {
        self.read_typed(name, PropertyType::Boolean, default, |name, default| {
            // SAFETY: `name` is a valid C string.
            unsafe { sys::SDL_GetBooleanProperty(self.id, name.as_ptr(), default) }
        })
    }

    /// Copies every property into `dst`, replacing same-named entries.
    ///
    /// Pointers that carry a cleanup are not copied.
    pub fn copy_to(&self, dst: &Self) -> Result<()> {
        check(sys::SDL_CopyProperties(self.id, dst.id))
    }

    /// Calls `f` with each property name while the group is locked.
    ///
    /// `f` may read the group through `self`; the lock is reentrant. If `f`
    /// panics, the remaining names are skipped and the panic resumes once the
    /// native call has returned.
    pub fn enumerate<F: FnMut(&str)>(&self, mut f: F) -> Result<()> {
        let mut visitor = Visitor::new(&mut f);
        let userdata = (&raw mut visitor).cast::<c_void>();
        // SAFETY: `userdata` points at `visitor`, which outlives the call;
        // `visit_name` is only invoked during it.
        let ok = unsafe { sys::SDL_EnumerateProperties(self.id, Some(visit_name), userdata) };
        visitor.finish();
        check(ok)
    }

    /// Returns every property name, in unspecified order.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        self.enumerate(|name| names.push(name.to_owned()))?;
        Ok(names)
    }

    /// Returns the typed value of a property, if present.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<PropertyValue> {
        let _guard = self.lock();
        match self.property_type(name) {
            PropertyType::Invalid => None,
            PropertyType::Pointer => self.get_pointer(name, None).map(PropertyValue::Pointer),
            PropertyType::String => Some(PropertyValue::String(self.get_string(name, ""))),
            PropertyType::Number => Some(PropertyValue::Number(self.get_number(name, 0))),
            PropertyType::Float => Some(PropertyValue::Float(self.get_float(name, 0.0))),
            PropertyType::Boolean => Some(PropertyValue::Boolean(self.get_boolean(name, false))),
        }
    }

    /// Locks the group against other threads until the guard drops.
    ///
    /// The lock is recursive, so the calling thread keeps full access.
    pub fn lock(&self) -> Result<PropertiesLock<'_>> {
        check(sys::SDL_LockProperties(self.id))?;
        Ok(PropertiesLock { props: self })
    }
}

impl Drop for Properties {
    fn drop(&mut self) {
        if self.owned {
            ::log::trace!(target: "stratum::properties", "destroying group {:?}", self.id);
            // SAFETY: this handle created the group and nothing else destroys it.
            unsafe { sys::SDL_DestroyProperties(self.id) };
        }
    }
}

/// Holds a group's lock; see [`Properties::lock`].
#[must_use = "the group is unlocked when the guard drops"]
pub struct PropertiesLock<'a> {
    props: &'a Properties,
}

impl fmt::Debug for PropertiesLock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesLock")
            .field("id", &self.props.id)
            .finish_non_exhaustive()
    }
}

impl core::ops::Deref for PropertiesLock<'_> {
    type Target = Properties;

    fn deref(&self) -> &Properties {
        self.props
    }
}

impl Drop for PropertiesLock<'_> {
    fn drop(&mut self) {
        // SAFETY: the lock was taken in `Properties::lock`.
        unsafe { sys::SDL_UnlockProperties(self.props.id) };
    }
}

/// [`PropertyStore`] over the native library's groups.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeStore;

impl PropertyStore for NativeStore {
    type Error = Error;

    fn names(&self, group: PropertiesId) -> Result<Vec<String>> {
        Properties::borrowed(group).names()
    }

    fn value(&self, group: PropertiesId, name: &str) -> Option<PropertyValue> {
        Properties::borrowed(group).value(name)
    }
}

/// Returns `read(default)` when `actual` is `expected`, otherwise `default`.
fn read_if<T>(
    actual: PropertyType,
    expected: PropertyType,
    default: T,
    read: impl FnOnce(T) -> T,
) -> T {
    if actual == expected {
        read(default)
    } else {
        default
    }
}

fn cleanup_userdata(cleanup: CleanupFn) -> *mut c_void {
    Box::into_raw(Box::new(cleanup)).cast()
}

/// Runs a boxed cleanup for a non-null value; otherwise just frees it.
unsafe extern "C" fn run_cleanup(userdata: *mut c_void, value: *mut c_void) {
    // SAFETY: `userdata` came from `cleanup_userdata` and the native side
    // hands it back exactly once.
    let cleanup = unsafe { Box::from_raw(userdata.cast::<CleanupFn>()) };
    let Some(addr) = RawAddress::from_ptr(value) else {
        return;
    };
    if catch_unwind(AssertUnwindSafe(|| cleanup(addr))).is_err() {
        ::log::error!(
            target: "stratum::properties",
            "pointer cleanup panicked for {:#x}",
            addr.addr()
        );
    }
}

/// Enumeration state handed to `visit_name`.
struct Visitor<'a> {
    f: &'a mut dyn FnMut(&str),
    panic: Option<Box<dyn Any + Send>>,
}

impl<'a> Visitor<'a> {
    fn new(f: &'a mut dyn FnMut(&str)) -> Self {
        Self { f, panic: None }
    }

    fn visit(&mut self, name: &str) {
        if self.panic.is_some() {
            return;
        }
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| (self.f)(name))) {
            self.panic = Some(payload);
        }
    }

    /// Resumes a panic caught during the enumeration.
    fn finish(self) {
        if let Some(payload) = self.panic {
            resume_unwind(payload);
        }
    }
}

unsafe extern "C" fn visit_name(userdata: *mut c_void, _props: PropertiesId, name: *const c_char) {
    if name.is_null() {
        return;
    }
    // SAFETY: `userdata` points at the `Visitor` set up in
    // `Properties::enumerate`, alive for the whole enumeration.
    let visitor = unsafe { &mut *userdata.cast::<Visitor<'_>>() };
    // SAFETY: the native side passes a NUL-terminated name.
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy();
    visitor.visit(&name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn addr(n: usize) -> RawAddress {
        RawAddress::from_ptr(core::ptr::without_provenance_mut::<u8>(n)).unwrap()
    }

    #[test]
    fn cleanup_runs_once_with_value() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let userdata = cleanup_userdata(Box::new(move |a: RawAddress| {
            sink.store(a.addr(), Ordering::SeqCst);
        }));
        // SAFETY: `userdata` is fresh from `cleanup_userdata`.
        unsafe { run_cleanup(userdata, addr(0x40).as_void_ptr()) };
        assert_eq!(seen.load(Ordering::SeqCst), 0x40);
    }

    #[test]
    fn null_value_drops_cleanup_without_running() {
        let runs = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&runs);
        let userdata = cleanup_userdata(Box::new(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        }));
        // SAFETY: `userdata` is fresh from `cleanup_userdata`.
        unsafe { run_cleanup(userdata, core::ptr::null_mut()) };
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(Arc::strong_count(&runs), 1, "the closure was freed");
    }

    #[test]
    fn visit_name_forwards_names() {
        let mut names = Vec::new();
        let mut f = |name: &str| names.push(name.to_owned());
        let mut visitor = Visitor::new(&mut f);
        let userdata = (&raw mut visitor).cast::<c_void>();
        for name in [c"alpha", c"beta"] {
            // SAFETY: `userdata` points at a live visitor.
            unsafe { visit_name(userdata, PropertiesId(2), name.as_ptr()) };
        }
        // SAFETY: null names are skipped.
        unsafe { visit_name(userdata, PropertiesId(2), core::ptr::null()) };
        visitor.finish();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn panicking_visitor_stops_and_resumes() {
        let mut calls = 0;
        let mut f = |_: &str| {
            calls += 1;
            if calls == 1 {
                panic!("visitor failed");
            }
        };
        let mut visitor = Visitor::new(&mut f);
        let userdata = (&raw mut visitor).cast::<c_void>();
        for name in [c"alpha", c"beta"] {
            // SAFETY: `userdata` points at a live visitor.
            unsafe { visit_name(userdata, PropertiesId(2), name.as_ptr()) };
        }
        let resumed = catch_unwind(AssertUnwindSafe(|| visitor.finish()));
        assert!(resumed.is_err(), "the panic surfaces after the native call");
        assert_eq!(calls, 1, "names after a panic are skipped");
    }

    #[test]
    fn panicking_cleanup_is_contained() {
        fn fail(_: RawAddress) {
            panic!("cleanup failed");
        }
        let userdata = cleanup_userdata(Box::new(fail));
        // SAFETY: `userdata` is fresh from `cleanup_userdata`.
        unsafe { run_cleanup(userdata, addr(0x50).as_void_ptr()) };
    }

    #[test]
    fn mismatched_type_reads_default() {
        let read = |_: i64| 5;
        assert_eq!(
            read_if(PropertyType::Number, PropertyType::Number, 9, read),
            5
        );
        assert_eq!(
            read_if(PropertyType::String, PropertyType::Number, 9, read),
            9
        );
        assert_eq!(
            read_if(PropertyType::Invalid, PropertyType::Number, 9, read),
            9
        );
        assert_eq!(
            read_if(
                PropertyType::Number,
                PropertyType::String,
                "d".to_owned(),
                |_| "5".to_owned()
            ),
            "d"
        );
    }
}
