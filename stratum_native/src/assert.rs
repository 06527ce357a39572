// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native assertion handling.
//!
//! A failed native assertion is passed to the handler, which decides whether
//! to retry, break into the debugger, abort or ignore. [`set_handler`]
//! installs a Rust closure as that handler; [`report`] lists every assertion
//! that has fired so far.

use std::ffi::c_void;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, PoisonError};

use stratum_sys::assert::{self as sys, SDL_AssertData, SDL_AssertState};

use crate::error::borrowed_string;

/// What to do about a failed assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssertState {
    /// Evaluate the condition again.
    Retry,
    /// Break into the debugger.
    Break,
    /// Terminate the program.
    Abort,
    /// Carry on this time.
    Ignore,
    /// Carry on and never report this assertion again.
    AlwaysIgnore,
}

impl AssertState {
    const fn to_raw(self) -> SDL_AssertState {
        match self {
            Self::Retry => SDL_AssertState::RETRY,
            Self::Break => SDL_AssertState::BREAK,
            Self::Abort => SDL_AssertState::ABORT,
            Self::Ignore => SDL_AssertState::IGNORE,
            Self::AlwaysIgnore => SDL_AssertState::ALWAYS_IGNORE,
        }
    }
}

/// An owned copy of one assertion site's data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssertionRecord {
    /// Source text of the condition.
    pub condition: String,
    /// File containing the assertion.
    pub file: String,
    /// Line of the assertion.
    pub line: u32,
    /// Function containing the assertion.
    pub function: String,
    /// Times the assertion has failed.
    pub trigger_count: u32,
    /// `true` once the handler chose [`AssertState::AlwaysIgnore`].
    pub always_ignore: bool,
}

impl AssertionRecord {
    /// # Safety
    ///
    /// The strings in `data` must be null or NUL-terminated.
    unsafe fn from_raw(data: &SDL_AssertData) -> Self {
        // SAFETY: forwarded from the caller.
        let text = |p| unsafe { borrowed_string(p) }.unwrap_or_default();
        Self {
            condition: text(data.condition),
            file: text(data.filename),
            line: data.linenum.unsigned_abs(),
            function: text(data.function),
            trigger_count: data.trigger_count,
            always_ignore: data.always_ignore,
        }
    }
}

/// Copies every record in a native report list.
///
/// # Safety
///
/// `head` must be null or the start of a well-formed, null-terminated list.
unsafe fn records_from(mut head: *const SDL_AssertData) -> Vec<AssertionRecord> {
    let mut out = Vec::new();
    while !head.is_null() {
        // SAFETY: non-null entries of the list are valid.
        let data = unsafe { &*head };
        // SAFETY: as above.
        out.push(unsafe { AssertionRecord::from_raw(data) });
        head = data.next;
    }
    out
}

/// Every assertion that has failed since startup or the last
/// [`reset_report`], most recent first.
#[must_use]
pub fn report() -> Vec<AssertionRecord> {
    // SAFETY: the library hands out its internal list, which stays valid
    // until the next reset; it is copied before returning.
    unsafe { records_from(sys::SDL_GetAssertionReport()) }
}

/// Clears the report and the trigger counts.
pub fn reset_report() {
    // SAFETY: no preconditions.
    unsafe { sys::SDL_ResetAssertionReport() };
}

type Handler = Arc<dyn Fn(&AssertionRecord) -> AssertState + Send + Sync>;

static HANDLER: Mutex<Option<Handler>> = Mutex::new(None);

/// Installs `handler` for every thread, replacing any previous one.
///
/// If the handler panics, the default handler decides instead.
pub fn set_handler<F>(handler: F)
where
    F: Fn(&AssertionRecord) -> AssertState + Send + Sync + 'static,
{
    *HANDLER.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(handler));
    // SAFETY: `handle` reads the handler from a static, not from userdata.
    unsafe { sys::SDL_SetAssertionHandler(Some(handle), core::ptr::null_mut()) };
    ::log::debug!(target: "stratum::assert", "assertion handler installed");
}

/// Puts the default handler back.
pub fn restore_default_handler() {
    // SAFETY: a null handler selects the default.
    unsafe { sys::SDL_SetAssertionHandler(None, core::ptr::null_mut()) };
    HANDLER.lock().unwrap_or_else(PoisonError::into_inner).take();
}

/// Runs the installed handler, or returns `None` if there is none or it
/// panicked.
///
/// The handler is cloned out of the slot first, so it may itself trip an
/// assertion without deadlocking.
fn dispatch(slot: &Mutex<Option<Handler>>, record: &AssertionRecord) -> Option<AssertState> {
    let handler = slot.lock().unwrap_or_else(PoisonError::into_inner).clone()?;
    match catch_unwind(AssertUnwindSafe(|| handler(record))) {
        Ok(state) => Some(state),
        Err(_) => {
            ::log::error!(
                target: "stratum::assert",
                "assertion handler panicked on {}:{}",
                record.file,
                record.line
            );
            None
        }
    }
}

unsafe extern "C" fn handle(data: *const SDL_AssertData, _userdata: *mut c_void) -> SDL_AssertState {
    if data.is_null() {
        return SDL_AssertState::ABORT;
    }
    // SAFETY: the library passes the live data of the failing site.
    let record = unsafe { AssertionRecord::from_raw(&*data) };
    if let Some(state) = dispatch(&HANDLER, &record) {
        return state.to_raw();
    }
    // SAFETY: the default handler ignores its userdata.
    unsafe {
        match sys::SDL_GetDefaultAssertionHandler() {
            Some(default) => default(data, core::ptr::null_mut()),
            None => SDL_AssertState::ABORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(condition: &'static core::ffi::CStr, line: i32, next: *const SDL_AssertData) -> SDL_AssertData {
        SDL_AssertData {
            always_ignore: false,
            trigger_count: 1,
            condition: condition.as_ptr(),
            filename: c"video.c".as_ptr(),
            linenum: line,
            function: c"SDL_CreateWindow".as_ptr(),
            next,
        }
    }

    #[test]
    fn report_list_is_walked_in_order() {
        let tail = site(c"w > 0", 20, core::ptr::null());
        let mut head = site(c"window != NULL", 10, &raw const tail);
        head.trigger_count = 3;
        head.always_ignore = true;

        // SAFETY: a two-element list of valid sites.
        let records = unsafe { records_from(&raw const head) };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].condition, "window != NULL");
        assert_eq!(records[0].trigger_count, 3);
        assert!(records[0].always_ignore, "flag is copied");
        assert_eq!(records[1].line, 20);
        assert_eq!(records[1].function, "SDL_CreateWindow");
        // SAFETY: null is an empty list.
        assert!(unsafe { records_from(core::ptr::null()) }.is_empty(), "null is empty");
    }

    #[test]
    fn dispatch_runs_the_handler() {
        let slot: Mutex<Option<Handler>> = Mutex::new(None);
        let record = AssertionRecord {
            condition: "x".into(),
            line: 4,
            ..AssertionRecord::default()
        };
        assert_eq!(dispatch(&slot, &record), None);

        let handler: Handler = Arc::new(|r: &AssertionRecord| {
            if r.line == 4 {
                AssertState::AlwaysIgnore
            } else {
                AssertState::Break
            }
        });
        *slot.lock().unwrap() = Some(handler);
        assert_eq!(dispatch(&slot, &record), Some(AssertState::AlwaysIgnore));
    }

    #[test]
    fn panicking_handler_falls_back() {
        let handler: Handler =
            Arc::new(|_: &AssertionRecord| -> AssertState { panic!("handler bug") });
        let slot = Mutex::new(Some(handler));
        assert_eq!(dispatch(&slot, &AssertionRecord::default()), None);
        assert!(slot.lock().is_ok(), "the slot is not poisoned");
    }

    #[test]
    fn states_map_to_native_values() {
        assert_eq!(AssertState::Retry.to_raw().0, 0);
        assert_eq!(AssertState::AlwaysIgnore.to_raw(), SDL_AssertState::ALWAYS_IGNORE);
    }
}
