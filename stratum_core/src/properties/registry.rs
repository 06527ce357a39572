// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thread-safe native property registry.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;
use core::mem;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use super::{PropertiesId, PropertyStore, PropertyType, PropertyValue, RawAddress};

/// The id reserved for the registry's global group.
const GLOBAL_ID: PropertiesId = PropertiesId(1);

/// Errors from [`PropertyRegistry`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyError {
    /// The id does not name a live group.
    InvalidGroup(PropertiesId),
    /// Property names must be non-empty.
    InvalidName,
    /// Every group id has been handed out.
    Exhausted,
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGroup(id) => write!(f, "invalid property group {}", id.0),
            Self::InvalidName => f.write_str("property name must not be empty"),
            Self::Exhausted => f.write_str("out of property group ids"),
        }
    }
}

impl core::error::Error for PropertyError {}

/// Releases the resource behind a pointer property.
///
/// The closure runs exactly once: when the property is overwritten, cleared,
/// or its group is destroyed, or immediately if storing the property fails.
/// Whatever the native API would pass as `userdata` is captured by the
/// closure instead.
pub struct Cleanup(Box<dyn FnOnce(RawAddress) + Send>);

impl Cleanup {
    /// Wraps a cleanup closure.
    pub fn new<F: FnOnce(RawAddress) + Send + 'static>(f: F) -> Self {
        Self(Box::new(f))
    }

    fn run(self, addr: RawAddress) {
        (self.0)(addr);
    }
}

impl fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleanup").finish_non_exhaustive()
    }
}

struct Property {
    value: PropertyValue,
    cleanup: Option<Cleanup>,
}

impl Property {
    /// Splits off the pending cleanup, if this is a pointer with one.
    fn into_pending(self) -> Option<(Cleanup, RawAddress)> {
        match (self.value, self.cleanup) {
            (PropertyValue::Pointer(addr), Some(cleanup)) => Some((cleanup, addr)),
            _ => None,
        }
    }

    fn is_copyable(&self) -> bool {
        !(matches!(self.value, PropertyValue::Pointer(_)) && self.cleanup.is_some())
    }
}

type Props = HashMap<String, Property>;
type Pending = Vec<(Cleanup, RawAddress)>;

/// State guarded by a group's lock.
///
/// The lock is re-entrant, so the owning thread may reach this state again
/// from inside [`PropertyRegistry::with_lock`]. `RefCell` borrows are
/// therefore only taken for the span of a single operation.
#[derive(Default)]
struct GroupState {
    props: RefCell<Props>,
    /// Cleanups waiting for the outermost lock to be released.
    pending: RefCell<Pending>,
    depth: Cell<usize>,
}

/// One level of lock nesting, undone even if the holder panics.
struct Hold<'a>(&'a GroupState);

impl<'a> Hold<'a> {
    fn enter(state: &'a GroupState) -> Self {
        state.depth.set(state.depth.get() + 1);
        Self(state)
    }
}

impl Drop for Hold<'_> {
    fn drop(&mut self) {
        self.0.depth.set(self.0.depth.get() - 1);
    }
}

#[derive(Default)]
struct Group {
    state: ReentrantMutex<GroupState>,
}

impl Group {
    fn lock(&self) -> ReentrantMutexGuard<'_, GroupState> {
        self.state.lock()
    }
}

fn run_pending(pending: Pending) {
    for (cleanup, addr) in pending {
        cleanup.run(addr);
    }
}

/// A thread-safe registry of property groups.
///
/// Every group carries its own re-entrant lock. Each operation on the
/// registry takes that lock for its duration; [`with_lock`](Self::with_lock)
/// holds it across several operations, and [`enumerate`](Self::enumerate)
/// holds it for the whole traversal. The thread holding the lock may keep
/// calling the registry for the same group; other threads wait.
///
/// Cleanup callbacks always run after the outermost hold of the group lock
/// has been released, so a cleanup may itself use the registry.
///
/// The global group is created on first use by
/// [`global_group`](Self::global_group). Dropping the registry destroys every
/// remaining group, running all outstanding cleanups.
///
/// # Example
///
/// ```
/// use stratum_core::properties::PropertyRegistry;
///
/// let registry = PropertyRegistry::new();
/// let group = registry.create_group().unwrap();
/// registry.set_string(group, "app.name", Some("demo")).unwrap();
/// assert_eq!(registry.get_string(group, "app.name", "none"), "demo");
/// registry.clear(group, "app.name").unwrap();
/// assert_eq!(registry.get_string(group, "app.name", "none"), "none");
/// ```
pub struct PropertyRegistry {
    groups: RwLock<HashMap<PropertiesId, Arc<Group>>>,
    next_id: AtomicU32,
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("groups", &self.read_groups().len())
            .finish_non_exhaustive()
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            next_id: AtomicU32::new(GLOBAL_ID.0 + 1),
        }
    }

    fn read_groups(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<PropertiesId, Arc<Group>>> {
        self.groups.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_groups(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<PropertiesId, Arc<Group>>> {
        self.groups.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn group(&self, id: PropertiesId) -> Result<Arc<Group>, PropertyError> {
        self.read_groups()
            .get(&id)
            .cloned()
            .ok_or(PropertyError::InvalidGroup(id))
    }

    // -- Group lifecycle --

    /// Returns the global group, creating it if needed.
    ///
    /// The returned id is always valid while the registry lives.
    pub fn global_group(&self) -> PropertiesId {
        if !self.read_groups().contains_key(&GLOBAL_ID) {
            self.write_groups().entry(GLOBAL_ID).or_default();
        }
        GLOBAL_ID
    }

    /// Creates a new empty group.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Exhausted`] once every `u32` id has been
    /// used. Ids are never reused.
    pub fn create_group(&self) -> Result<PropertiesId, PropertyError> {
        let raw = self
            .next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map_err(|_| PropertyError::Exhausted)?;
        let id = PropertiesId(raw);
        self.write_groups().insert(id, Arc::default());
        log::trace!(target: "stratum::properties", "created group {}", raw);
        Ok(id)
    }

    /// Returns `true` if `id` names a live group.
    #[must_use]
    pub fn is_valid(&self, id: PropertiesId) -> bool {
        self.read_groups().contains_key(&id)
    }

    /// Destroys a group, running the cleanup of every pointer property it
    /// holds. Unknown ids are ignored.
    ///
    /// If another thread holds the group's lock, this waits for it. The group
    /// must not be destroyed from inside its own [`with_lock`](Self::with_lock).
    pub fn destroy(&self, id: PropertiesId) {
        let Some(group) = self.write_groups().remove(&id) else {
            return;
        };
        let pending: Pending = {
            let state = group.lock();
            let mut pending = mem::take(&mut *state.pending.borrow_mut());
            pending.extend(
                state
                    .props
                    .borrow_mut()
                    .drain()
                    .filter_map(|(_, prop)| prop.into_pending()),
            );
            pending
        };
        log::trace!(target: "stratum::properties", "destroyed group {}", id.0);
        run_pending(pending);
    }

    /// Destroys every group, including the global group.
    ///
    /// The registry stays usable; the global group is recreated by the next
    /// call to [`global_group`](Self::global_group).
    pub fn teardown(&self) {
        let groups: Vec<PropertiesId> = self.read_groups().keys().copied().collect();
        if !groups.is_empty() {
            log::debug!(
                target: "stratum::properties",
                "tearing down {} property groups",
                groups.len()
            );
        }
        for id in groups {
            self.destroy(id);
        }
    }

    /// Copies every property of `src` into `dst`, replacing same-named
    /// properties in `dst`.
    ///
    /// Pointer properties that carry a cleanup are skipped: ownership of a
    /// cleanup-bound resource cannot be shared.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] if either id is not live.
    pub fn copy_properties(&self, src: PropertiesId, dst: PropertiesId) -> Result<(), PropertyError> {
        let src_group = self.group(src)?;
        let dst_group = self.group(dst)?;
        if src == dst {
            return Ok(());
        }
        let copied: Vec<(String, PropertyValue)> = Self::locked(&src_group, src, |locked| {
            locked
                .state
                .props
                .borrow()
                .iter()
                .filter(|(_, prop)| prop.is_copyable())
                .map(|(name, prop)| (name.clone(), prop.value.clone()))
                .collect()
        });
        Self::locked(&dst_group, dst, |locked| {
            for (name, value) in copied {
                locked.insert(&name, value, None);
            }
        });
        Ok(())
    }

    // -- Locking --

    /// Runs `f` with the group's lock held, giving it a view through which
    /// several operations happen atomically.
    ///
    /// `f` may call back into this registry for the same group; those calls
    /// reuse the held lock. Cleanups triggered inside `f`, directly or through
    /// such calls, run after the outermost lock is released.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] if `id` is not live.
    pub fn with_lock<R>(
        &self,
        id: PropertiesId,
        f: impl FnOnce(&mut LockedProperties<'_>) -> R,
    ) -> Result<R, PropertyError> {
        let group = self.group(id)?;
        Ok(Self::locked(&group, id, f))
    }

    fn locked<R>(
        group: &Group,
        id: PropertiesId,
        f: impl FnOnce(&mut LockedProperties<'_>) -> R,
    ) -> R {
        let (result, pending) = {
            let state = group.lock();
            let hold = Hold::enter(&state);
            let result = f(&mut LockedProperties { id, state: &state });
            drop(hold);
            let pending = if state.depth.get() == 0 {
                mem::take(&mut *state.pending.borrow_mut())
            } else {
                Pending::new()
            };
            (result, pending)
        };
        run_pending(pending);
        result
    }

    /// Calls `f` once per property name while holding the group's lock for
    /// the whole traversal. Order is unspecified.
    ///
    /// `f` receives a read-only view of the locked group so it can inspect
    /// values. Like [`with_lock`](Self::with_lock), it may call back into
    /// this registry for the same group.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] if `id` is not live.
    pub fn enumerate(
        &self,
        id: PropertiesId,
        mut f: impl FnMut(&LockedProperties<'_>, &str),
    ) -> Result<(), PropertyError> {
        self.with_lock(id, |locked| {
            let names = locked.names();
            for name in &names {
                f(locked, name);
            }
        })
    }

    // -- Setters --

    /// Stores a pointer property, or clears it when `value` is `None`.
    ///
    /// `cleanup` runs exactly once, when the property is later overwritten,
    /// cleared, or destroyed. If this call fails, `cleanup` runs before the
    /// error is returned. With a `None` value there is no resource to release
    /// and `cleanup` is dropped without running.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] or [`PropertyError::InvalidName`].
    pub fn set_pointer(
        &self,
        id: PropertiesId,
        name: &str,
        value: Option<RawAddress>,
        cleanup: Option<Cleanup>,
    ) -> Result<(), PropertyError> {
        let group = match self.group(id) {
            Ok(group) => group,
            Err(err) => {
                if let (Some(addr), Some(cleanup)) = (value, cleanup) {
                    cleanup.run(addr);
                }
                return Err(err);
            }
        };
        Self::locked(&group, id, move |locked| locked.set_pointer(name, value, cleanup))
    }

    /// Stores a copy of `value`, or clears the property when `value` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] or [`PropertyError::InvalidName`].
    pub fn set_string(
        &self,
        id: PropertiesId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), PropertyError> {
        self.with_lock(id, |locked| locked.set_string(name, value))?
    }

    /// Stores a 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] or [`PropertyError::InvalidName`].
    pub fn set_number(&self, id: PropertiesId, name: &str, value: i64) -> Result<(), PropertyError> {
        self.with_lock(id, |locked| locked.set_number(name, value))?
    }

    /// Stores a 32-bit float.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] or [`PropertyError::InvalidName`].
    pub fn set_float(&self, id: PropertiesId, name: &str, value: f32) -> Result<(), PropertyError> {
        self.with_lock(id, |locked| locked.set_float(name, value))?
    }

    /// Stores a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] or [`PropertyError::InvalidName`].
    pub fn set_boolean(&self, id: PropertiesId, name: &str, value: bool) -> Result<(), PropertyError> {
        self.with_lock(id, |locked| locked.set_boolean(name, value))?
    }

    /// Removes a property, running its cleanup if any. Absent names succeed.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidGroup`] or [`PropertyError::InvalidName`].
    pub fn clear(&self, id: PropertiesId, name: &str) -> Result<(), PropertyError> {
        self.with_lock(id, |locked| locked.clear(name))?
    }

    // -- Getters --

    /// Returns `true` if the group holds a property called `name`.
    #[must_use]
    pub fn has(&self, id: PropertiesId, name: &str) -> bool {
        self.with_lock(id, |locked| locked.has(name))
            .unwrap_or(false)
    }

    /// Returns the type of the named property, or
    /// [`PropertyType::Invalid`] if it (or the group) does not exist.
    #[must_use]
    pub fn property_type(&self, id: PropertiesId, name: &str) -> PropertyType {
        self.with_lock(id, |locked| locked.property_type(name))
            .unwrap_or(PropertyType::Invalid)
    }

    /// Returns the named pointer, or `default` if absent or not a pointer.
    #[must_use]
    pub fn get_pointer(
        &self,
        id: PropertiesId,
        name: &str,
        default: Option<RawAddress>,
    ) -> Option<RawAddress> {
        self.with_lock(id, |locked| locked.get_pointer(name, default))
            .unwrap_or(default)
    }

    /// Returns a copy of the named string, or `default` if absent or not a
    /// string.
    #[must_use]
    pub fn get_string(&self, id: PropertiesId, name: &str, default: &str) -> String {
        self.with_lock(id, |locked| locked.get_string(name, default))
            .unwrap_or_else(|_| default.to_owned())
    }

    /// Returns the named integer, or `default` if absent or not a number.
    #[must_use]
    pub fn get_number(&self, id: PropertiesId, name: &str, default: i64) -> i64 {
        self.with_lock(id, |locked| locked.get_number(name, default))
            .unwrap_or(default)
    }

    /// Returns the named float, or `default` if absent or not a float.
    #[must_use]
    pub fn get_float(&self, id: PropertiesId, name: &str, default: f32) -> f32 {
        self.with_lock(id, |locked| locked.get_float(name, default))
            .unwrap_or(default)
    }

    /// Returns the named boolean, or `default` if absent or not a boolean.
    #[must_use]
    pub fn get_boolean(&self, id: PropertiesId, name: &str, default: bool) -> bool {
        self.with_lock(id, |locked| locked.get_boolean(name, default))
            .unwrap_or(default)
    }
}

impl Drop for PropertyRegistry {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl PropertyStore for PropertyRegistry {
    type Error = PropertyError;

    fn names(&self, group: PropertiesId) -> Result<Vec<String>, PropertyError> {
        self.with_lock(group, |locked| locked.names())
    }

    fn value(&self, group: PropertiesId, name: &str) -> Option<PropertyValue> {
        self.with_lock(group, |locked| locked.value(name))
            .ok()
            .flatten()
    }
}

/// A group whose lock is held.
///
/// Obtained from [`PropertyRegistry::with_lock`] and
/// [`PropertyRegistry::enumerate`]. Reads return copies, so nothing read
/// through the view can be invalidated by a later write on the same thread.
pub struct LockedProperties<'a> {
    id: PropertiesId,
    state: &'a GroupState,
}

impl fmt::Debug for LockedProperties<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedProperties")
            .field("id", &self.id)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl LockedProperties<'_> {
    /// Returns the id of the locked group.
    #[must_use]
    pub fn id(&self) -> PropertiesId {
        self.id
    }

    /// Returns the number of properties in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.props.borrow().len()
    }

    /// Returns `true` if the group holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.props.borrow().is_empty()
    }

    /// Returns the property names in unspecified order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.state.props.borrow().keys().cloned().collect()
    }

    /// Returns a copy of the named property's value.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<PropertyValue> {
        self.state
            .props
            .borrow()
            .get(name)
            .map(|prop| prop.value.clone())
    }

    fn defer(&self, pending: Option<(Cleanup, RawAddress)>) {
        if let Some(pending) = pending {
            self.state.pending.borrow_mut().push(pending);
        }
    }

    fn insert(&mut self, name: &str, value: PropertyValue, cleanup: Option<Cleanup>) {
        let old = self
            .state
            .props
            .borrow_mut()
            .insert(name.to_owned(), Property { value, cleanup });
        self.defer(old.and_then(Property::into_pending));
    }

    /// See [`PropertyRegistry::set_pointer`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] for an empty name, after
    /// running `cleanup`.
    pub fn set_pointer(
        &mut self,
        name: &str,
        value: Option<RawAddress>,
        cleanup: Option<Cleanup>,
    ) -> Result<(), PropertyError> {
        if name.is_empty() {
            if let (Some(addr), Some(cleanup)) = (value, cleanup) {
                self.defer(Some((cleanup, addr)));
            }
            return Err(PropertyError::InvalidName);
        }
        match value {
            Some(addr) => {
                self.insert(name, PropertyValue::Pointer(addr), cleanup);
                Ok(())
            }
            None => self.clear(name),
        }
    }

    /// See [`PropertyRegistry::set_string`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] for an empty name.
    pub fn set_string(&mut self, name: &str, value: Option<&str>) -> Result<(), PropertyError> {
        check_name(name)?;
        match value {
            Some(s) => {
                self.insert(name, PropertyValue::String(s.to_owned()), None);
                Ok(())
            }
            None => self.clear(name),
        }
    }

    /// See [`PropertyRegistry::set_number`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] for an empty name.
    pub fn set_number(&mut self, name: &str, value: i64) -> Result<(), PropertyError> {
        check_name(name)?;
        self.insert(name, PropertyValue::Number(value), None);
        Ok(())
    }

    /// See [`PropertyRegistry::set_float`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] for an empty name.
    pub fn set_float(&mut self, name: &str, value: f32) -> Result<(), PropertyError> {
        check_name(name)?;
        self.insert(name, PropertyValue::Float(value), None);
        Ok(())
    }

    /// See [`PropertyRegistry::set_boolean`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] for an empty name.
    pub fn set_boolean(&mut self, name: &str, value: bool) -> Result<(), PropertyError> {
        check_name(name)?;
        self.insert(name, PropertyValue::Boolean(value), None);
        Ok(())
    }

    /// See [`PropertyRegistry::clear`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidName`] for an empty name.
    pub fn clear(&mut self, name: &str) -> Result<(), PropertyError> {
        check_name(name)?;
        let old = self.state.props.borrow_mut().remove(name);
        self.defer(old.and_then(Property::into_pending));
        Ok(())
    }

    /// See [`PropertyRegistry::has`].
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.state.props.borrow().contains_key(name)
    }

    /// See [`PropertyRegistry::property_type`].
    #[must_use]
    pub fn property_type(&self, name: &str) -> PropertyType {
        self.value(name)
            .map_or(PropertyType::Invalid, |value| value.property_type())
    }

    /// See [`PropertyRegistry::get_pointer`].
    #[must_use]
    pub fn get_pointer(&self, name: &str, default: Option<RawAddress>) -> Option<RawAddress> {
        match self.value(name) {
            Some(PropertyValue::Pointer(addr)) => Some(addr),
            _ => default,
        }
    }

    /// See [`PropertyRegistry::get_string`].
    #[must_use]
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.value(name) {
            Some(PropertyValue::String(s)) => s,
            _ => default.to_owned(),
        }
    }

    /// See [`PropertyRegistry::get_number`].
    #[must_use]
    pub fn get_number(&self, name: &str, default: i64) -> i64 {
        match self.value(name) {
            Some(PropertyValue::Number(n)) => n,
            _ => default,
        }
    }

    /// See [`PropertyRegistry::get_float`].
    #[must_use]
    pub fn get_float(&self, name: &str, default: f32) -> f32 {
        match self.value(name) {
            Some(PropertyValue::Float(v)) => v,
            _ => default,
        }
    }

    /// See [`PropertyRegistry::get_boolean`].
    #[must_use]
    pub fn get_boolean(&self, name: &str, default: bool) -> bool {
        match self.value(name) {
            Some(PropertyValue::Boolean(b)) => b,
            _ => default,
        }
    }
}

fn check_name(name: &str) -> Result<(), PropertyError> {
    if name.is_empty() {
        Err(PropertyError::InvalidName)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::sync::atomic::{AtomicBool, AtomicUsize};
    use std::sync::{Mutex, mpsc};
    use std::thread;
    use std::time::Duration;

    fn counting_cleanup(counter: &Arc<AtomicUsize>, seen: &Arc<Mutex<Vec<usize>>>) -> Cleanup {
        let counter = Arc::clone(counter);
        let seen = Arc::clone(seen);
        Cleanup::new(move |addr| {
            counter.fetch_add(1, Ordering::SeqCst);
            seen.lock().unwrap().push(addr.addr());
        })
    }

    fn addr(n: usize) -> RawAddress {
        RawAddress::from_ptr(core::ptr::without_provenance_mut::<u8>(n)).unwrap()
    }

    #[test]
    fn string_set_get_clear() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_string(g, "name", Some("x")).unwrap();
        assert_eq!(reg.get_string(g, "name", "d"), "x");
        reg.clear(g, "name").unwrap();
        assert_eq!(reg.get_string(g, "name", "d"), "d");
    }

    #[test]
    fn string_value_is_copied() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        let mut buf = String::from("first");
        reg.set_string(g, "s", Some(&buf)).unwrap();
        buf.push_str("-changed");
        assert_eq!(reg.get_string(g, "s", ""), "first");
    }

    #[test]
    fn none_string_clears() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_string(g, "s", Some("v")).unwrap();
        reg.set_string(g, "s", None).unwrap();
        assert!(!reg.has(g, "s"));
    }

    #[test]
    fn scalars_round_trip_and_mismatch_returns_default() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_number(g, "n", -42).unwrap();
        reg.set_float(g, "f", 2.5).unwrap();
        reg.set_boolean(g, "b", true).unwrap();

        assert_eq!(reg.get_number(g, "n", 0), -42);
        assert_eq!(reg.get_float(g, "f", 0.0), 2.5);
        assert!(reg.get_boolean(g, "b", false));

        assert_eq!(reg.get_string(g, "n", "default"), "default");
        assert_eq!(reg.get_number(g, "f", 7), 7);
        assert_eq!(reg.get_float(g, "b", 1.25), 1.25);
        assert!(!reg.get_boolean(g, "n", false));
        assert_eq!(reg.get_pointer(g, "n", None), None);
    }

    #[test]
    fn retyping_replaces_value_and_type() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_number(g, "k", 1).unwrap();
        assert_eq!(reg.property_type(g, "k"), PropertyType::Number);
        reg.set_string(g, "k", Some("one")).unwrap();
        assert_eq!(reg.property_type(g, "k"), PropertyType::String);
        assert_eq!(reg.get_number(g, "k", -1), -1);
        assert_eq!(reg.property_type(g, "missing"), PropertyType::Invalid);
    }

    #[test]
    fn names_are_case_sensitive() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_number(g, "Key", 1).unwrap();
        assert!(reg.has(g, "Key"));
        assert!(!reg.has(g, "key"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        assert_eq!(reg.set_number(g, "", 1), Err(PropertyError::InvalidName));
        assert_eq!(reg.clear(g, ""), Err(PropertyError::InvalidName));
    }

    #[test]
    fn destroy_runs_cleanup_once_with_original_value() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        reg.set_pointer(g, "p", Some(addr(0x1000)), Some(counting_cleanup(&count, &seen)))
            .unwrap();
        assert_eq!(reg.get_pointer(g, "p", None), Some(addr(0x1000)));
        reg.destroy(g);
        reg.destroy(g);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![0x1000]);
        assert!(!reg.is_valid(g));
    }

    #[test]
    fn overwrite_and_clear_run_cleanup() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        reg.set_pointer(g, "p", Some(addr(0x10)), Some(counting_cleanup(&count, &seen)))
            .unwrap();
        reg.set_number(g, "p", 3).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        reg.set_pointer(g, "q", Some(addr(0x20)), Some(counting_cleanup(&count, &seen)))
            .unwrap();
        reg.set_pointer(g, "q", None, None).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(*seen.lock().unwrap(), vec![0x10, 0x20]);
    }

    #[test]
    fn failed_set_runs_cleanup_once() {
        let reg = PropertyRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let err = reg.set_pointer(
            PropertiesId(9999),
            "p",
            Some(addr(0x30)),
            Some(counting_cleanup(&count, &seen)),
        );
        assert_eq!(err, Err(PropertyError::InvalidGroup(PropertiesId(9999))));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![0x30]);

        let g = reg.create_group().unwrap();
        let err = reg.set_pointer(g, "", Some(addr(0x40)), Some(counting_cleanup(&count, &seen)));
        assert_eq!(err, Err(PropertyError::InvalidName));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn copy_skips_cleanup_bound_pointers() {
        let reg = PropertyRegistry::new();
        let src = reg.create_group().unwrap();
        let dst = reg.create_group().unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        reg.set_pointer(src, "owned", Some(addr(0x50)), Some(counting_cleanup(&count, &seen)))
            .unwrap();
        reg.set_pointer(src, "plain", Some(addr(0x60)), None).unwrap();
        reg.set_string(src, "s", Some("text")).unwrap();
        reg.set_number(src, "n", 5).unwrap();
        reg.set_float(src, "f", 0.5).unwrap();
        reg.set_boolean(src, "b", true).unwrap();
        reg.set_number(dst, "n", 1).unwrap();

        reg.copy_properties(src, dst).unwrap();

        assert!(!reg.has(dst, "owned"));
        assert_eq!(reg.get_pointer(dst, "plain", None), Some(addr(0x60)));
        assert_eq!(reg.get_string(dst, "s", ""), "text");
        assert_eq!(reg.get_number(dst, "n", 0), 5);
        assert_eq!(reg.get_float(dst, "f", 0.0), 0.5);
        assert!(reg.get_boolean(dst, "b", false));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn copy_with_invalid_group_fails() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        assert_eq!(
            reg.copy_properties(g, PropertiesId(77)),
            Err(PropertyError::InvalidGroup(PropertiesId(77)))
        );
        assert_eq!(
            reg.copy_properties(PropertiesId::INVALID, g),
            Err(PropertyError::InvalidGroup(PropertiesId::INVALID))
        );
    }

    #[test]
    fn global_group_is_always_valid() {
        let reg = PropertyRegistry::new();
        let global = reg.global_group();
        assert!(global.is_valid());
        assert!(reg.is_valid(global));
        assert_eq!(reg.global_group(), global);
        reg.teardown();
        assert!(!reg.is_valid(global));
        assert!(reg.is_valid(reg.global_group()));
    }

    #[test]
    fn ids_are_unique() {
        let reg = PropertyRegistry::new();
        let a = reg.create_group().unwrap();
        reg.destroy(a);
        let b = reg.create_group().unwrap();
        assert_ne!(a, b);
        assert_ne!(b, reg.global_group());
    }

    #[test]
    fn operations_on_invalid_group() {
        let reg = PropertyRegistry::new();
        let bogus = PropertiesId(123);
        assert!(reg.set_number(bogus, "n", 1).is_err());
        assert!(!reg.has(bogus, "n"));
        assert_eq!(reg.get_number(bogus, "n", 9), 9);
        assert!(reg.enumerate(bogus, |_, _| {}).is_err());
        reg.destroy(bogus);
    }

    #[test]
    fn dropping_registry_runs_outstanding_cleanups() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let reg = PropertyRegistry::new();
            let g = reg.create_group().unwrap();
            let global = reg.global_group();
            reg.set_pointer(g, "a", Some(addr(1)), Some(counting_cleanup(&count, &seen)))
                .unwrap();
            reg.set_pointer(global, "b", Some(addr(2)), Some(counting_cleanup(&count, &seen)))
                .unwrap();
        }
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn cleanup_may_use_the_registry() {
        let reg = Arc::new(PropertyRegistry::new());
        let g = reg.create_group().unwrap();
        let inner = Arc::clone(&reg);
        reg.set_pointer(
            g,
            "p",
            Some(addr(0x70)),
            Some(Cleanup::new(move |_| {
                inner.set_boolean(g, "cleaned", true).unwrap();
            })),
        )
        .unwrap();
        reg.clear(g, "p").unwrap();
        assert!(reg.get_boolean(g, "cleaned", false));
    }

    #[test]
    fn with_lock_groups_operations() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        let total = reg
            .with_lock(g, |locked| {
                locked.set_number("a", 1).unwrap();
                locked.set_number("b", 2).unwrap();
                locked.set_string("s", Some("borrowed")).unwrap();
                assert_eq!(locked.get_string("s", ""), "borrowed");
                locked.get_number("a", 0) + locked.get_number("b", 0)
            })
            .unwrap();
        assert_eq!(total, 3);
    }

    #[test]
    fn registry_calls_nest_under_with_lock() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_number(g, "n", 5).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        reg.set_pointer(g, "p", Some(addr(0x80)), Some(counting_cleanup(&count, &seen)))
            .unwrap();

        let read = reg
            .with_lock(g, |locked| {
                let n = reg.get_number(g, "n", 7);
                reg.set_string(g, "s", Some("inner")).unwrap();
                assert_eq!(locked.get_string("s", ""), "inner");
                reg.clear(g, "p").unwrap();
                assert_eq!(
                    count.load(Ordering::SeqCst),
                    0,
                    "cleanup waits for the outer lock"
                );
                reg.with_lock(g, |inner| inner.set_boolean("b", true))
                    .unwrap()
                    .unwrap();
                n
            })
            .unwrap();

        assert_eq!(read, 5);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(reg.get_boolean(g, "b", false));
    }

    #[test]
    fn nested_lock_still_excludes_other_threads() {
        let reg = Arc::new(PropertyRegistry::new());
        let g = reg.create_group().unwrap();
        let (locked_tx, locked_rx) = mpsc::channel();
        let holder = {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                reg.with_lock(g, |_| {
                    reg.with_lock(g, |locked| {
                        locked_tx.send(()).unwrap();
                        thread::sleep(Duration::from_millis(50));
                        locked.set_number("n", 1).unwrap();
                    })
                    .unwrap();
                })
                .unwrap();
            })
        };
        locked_rx.recv().unwrap();
        assert_eq!(reg.get_number(g, "n", 0), 1, "reader waits for both holds");
        holder.join().unwrap();
    }

    #[test]
    fn enumerate_visits_each_name_once() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_number(g, "a", 1).unwrap();
        reg.set_number(g, "b", 2).unwrap();
        reg.set_number(g, "c", 3).unwrap();

        let mut seen = Vec::new();
        reg.enumerate(g, |locked, name| {
            seen.push((name.to_owned(), locked.get_number(name, 0)));
        })
        .unwrap();
        seen.sort();
        assert_eq!(
            seen,
            vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
        );
    }

    #[test]
    fn enumerate_blocks_concurrent_mutation() {
        let reg = Arc::new(PropertyRegistry::new());
        let g = reg.create_group().unwrap();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            reg.set_number(g, name, i as i64).unwrap();
        }

        let finished = Arc::new(AtomicBool::new(false));
        let (started_tx, started_rx) = mpsc::channel();
        let enumerator = {
            let reg = Arc::clone(&reg);
            let finished = Arc::clone(&finished);
            thread::spawn(move || {
                let mut visits = 0;
                reg.enumerate(g, |_, _| {
                    visits += 1;
                    if visits == 1 {
                        started_tx.send(()).unwrap();
                        thread::sleep(Duration::from_millis(50));
                    }
                    if visits == 3 {
                        finished.store(true, Ordering::SeqCst);
                    }
                })
                .unwrap();
                visits
            })
        };

        started_rx.recv().unwrap();
        reg.set_number(g, "d", 4).unwrap();
        assert!(
            finished.load(Ordering::SeqCst),
            "mutation must wait for the enumeration to finish"
        );
        assert_eq!(enumerator.join().unwrap(), 3);
        assert_eq!(reg.get_number(g, "d", 0), 4);
    }

    #[test]
    fn snapshot_is_sorted() {
        let reg = PropertyRegistry::new();
        let g = reg.create_group().unwrap();
        reg.set_boolean(g, "z", false).unwrap();
        reg.set_number(g, "m", 2).unwrap();
        let snap = reg.snapshot(g).unwrap();
        assert_eq!(
            snap,
            vec![
                ("m".into(), PropertyValue::Number(2)),
                ("z".into(), PropertyValue::Boolean(false)),
            ]
        );
    }
}
