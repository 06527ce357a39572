// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native log priorities and output.
//!
//! [`install_log_bridge`] routes native log output into the [`log`](::log)
//! facade, so whatever logger the application installed sees it. Each native
//! category gets its own target (`stratum::video`, `stratum::input`, ...).

use std::ffi::{CStr, c_char, c_int, c_void};
use std::fmt;

use ::log::Level;
use stratum_sys::log as sys;
use stratum_sys::log::SDL_LogPriority;

use crate::error::{Result, c_string, check};

/// A native log category.
///
/// Values from [`Category::CUSTOM`] up are free for application use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Category(pub i32);

impl Category {
    /// General application output.
    pub const APPLICATION: Self = Self(sys::SDL_LOG_CATEGORY_APPLICATION.0);
    /// Error reporting.
    pub const ERROR: Self = Self(sys::SDL_LOG_CATEGORY_ERROR.0);
    /// Assertion reports.
    pub const ASSERT: Self = Self(sys::SDL_LOG_CATEGORY_ASSERT.0);
    /// System messages.
    pub const SYSTEM: Self = Self(sys::SDL_LOG_CATEGORY_SYSTEM.0);
    /// Audio subsystem.
    pub const AUDIO: Self = Self(sys::SDL_LOG_CATEGORY_AUDIO.0);
    /// Video subsystem.
    pub const VIDEO: Self = Self(sys::SDL_LOG_CATEGORY_VIDEO.0);
    /// Render subsystem.
    pub const RENDER: Self = Self(sys::SDL_LOG_CATEGORY_RENDER.0);
    /// Input subsystem.
    pub const INPUT: Self = Self(sys::SDL_LOG_CATEGORY_INPUT.0);
    /// Test output.
    pub const TEST: Self = Self(sys::SDL_LOG_CATEGORY_TEST.0);
    /// GPU subsystem.
    pub const GPU: Self = Self(sys::SDL_LOG_CATEGORY_GPU.0);
    /// First application-defined category.
    pub const CUSTOM: Self = Self(sys::SDL_LOG_CATEGORY_CUSTOM.0);

    /// Returns the `log` target messages in this category are sent to.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self.0 {
            0 => "stratum::application",
            1 => "stratum::error",
            2 => "stratum::assert",
            3 => "stratum::system",
            4 => "stratum::audio",
            5 => "stratum::video",
            6 => "stratum::render",
            7 => "stratum::input",
            8 => "stratum::test",
            9 => "stratum::gpu",
            n if n >= sys::SDL_LOG_CATEGORY_CUSTOM.0 => "stratum::custom",
            _ => "stratum::reserved",
        }
    }
}

/// Severity of a native log message, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Very detailed tracing.
    Trace = 1,
    /// Verbose output.
    Verbose = 2,
    /// Debugging output.
    Debug = 3,
    /// Informational output.
    Info = 4,
    /// Warnings.
    Warn = 5,
    /// Errors.
    Error = 6,
    /// Unrecoverable errors.
    Critical = 7,
}

impl Priority {
    const fn to_raw(self) -> SDL_LogPriority {
        SDL_LogPriority(self as c_int)
    }

    /// Converts a native priority; `None` for invalid values.
    #[must_use]
    pub const fn from_raw(raw: SDL_LogPriority) -> Option<Self> {
        Some(match raw.0 {
            1 => Self::Trace,
            2 => Self::Verbose,
            3 => Self::Debug,
            4 => Self::Info,
            5 => Self::Warn,
            6 => Self::Error,
            7 => Self::Critical,
            _ => return None,
        })
    }

    /// The `log` level this priority maps to.
    ///
    /// `log` has fewer levels: verbose folds into trace and critical into
    /// error.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Trace | Self::Verbose => Level::Trace,
            Self::Debug => Level::Debug,
            Self::Info => Level::Info,
            Self::Warn => Level::Warn,
            Self::Error | Self::Critical => Level::Error,
        }
    }
}

/// Sets the minimum priority of every category.
pub fn set_priorities(priority: Priority) {
    // SAFETY: plain value argument.
    unsafe { sys::SDL_SetLogPriorities(priority.to_raw()) };
}

/// Sets the minimum priority of one category.
pub fn set_priority(category: Category, priority: Priority) {
    // SAFETY: plain value arguments.
    unsafe { sys::SDL_SetLogPriority(category.0, priority.to_raw()) };
}

/// Returns the minimum priority of a category.
#[must_use]
pub fn priority(category: Category) -> Option<Priority> {
    // SAFETY: plain value argument.
    Priority::from_raw(unsafe { sys::SDL_GetLogPriority(category.0) })
}

/// Restores the default priorities, including those read from the
/// environment at startup.
pub fn reset_priorities() {
    // SAFETY: no preconditions.
    unsafe { sys::SDL_ResetLogPriorities() };
}

/// Sets the text prepended to messages of `priority` by the default output.
/// `None` removes it.
pub fn set_priority_prefix(priority: Priority, prefix: Option<&str>) -> Result<()> {
    let prefix = prefix.map(c_string).transpose()?;
    let ptr = prefix.as_ref().map_or(core::ptr::null(), |p| p.as_ptr());
    // SAFETY: `ptr` is null or a valid C string, copied by the callee.
    check(unsafe { sys::SDL_SetLogPriorityPrefix(priority.to_raw(), ptr) })
}

/// Sends a message through the native log.
///
/// The text is passed as a `%s` argument, so it is never interpreted as a
/// format string. NUL bytes are dropped.
pub fn message(category: Category, priority: Priority, args: fmt::Arguments<'_>) {
    let text = args.to_string().replace('\0', "");
    let Ok(text) = c_string(&text) else {
        return;
    };
    // SAFETY: literal "%s" format with a single C string argument.
    unsafe { sys::SDL_LogMessage(category.0, priority.to_raw(), c"%s".as_ptr(), text.as_ptr()) };
}

/// Routes native log output into the [`log`](::log) facade.
///
/// Messages keep their native priority filtering; raise priorities with
/// [`set_priorities`] to see more.
pub fn install_log_bridge() {
    // SAFETY: `forward` ignores its userdata and lives for the program.
    unsafe { sys::SDL_SetLogOutputFunction(Some(forward), core::ptr::null_mut()) };
    ::log::debug!(target: "stratum::log", "native log output bridged");
}

/// Puts the native default output back.
pub fn restore_default_output() {
    // SAFETY: the default output function takes no userdata.
    unsafe {
        let default = sys::SDL_GetDefaultLogOutputFunction();
        sys::SDL_SetLogOutputFunction(default, core::ptr::null_mut());
    }
}

unsafe extern "C" fn forward(
    _userdata: *mut c_void,
    category: c_int,
    priority: SDL_LogPriority,
    message: *const c_char,
) {
    if message.is_null() {
        return;
    }
    let level = Priority::from_raw(priority).map_or(Level::Info, Priority::level);
    let target = Category(category).target();
    // SAFETY: the native side passes a NUL-terminated message.
    let text = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    ::log::log!(target: target, level, "{text}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Capture(Mutex<Vec<(Level, String, String)>>);

    impl ::log::Log for Capture {
        fn enabled(&self, meta: &::log::Metadata<'_>) -> bool {
            meta.target().starts_with("stratum::")
        }

        fn log(&self, record: &::log::Record<'_>) {
            if self.enabled(record.metadata()) {
                self.0.lock().unwrap().push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn forward_maps_category_and_priority() {
        ::log::set_logger(&CAPTURE).unwrap();
        ::log::set_max_level(::log::LevelFilter::Trace);

        // SAFETY: valid NUL-terminated messages; userdata is unused.
        unsafe {
            forward(
                core::ptr::null_mut(),
                Category::VIDEO.0,
                sys::SDL_LOG_PRIORITY_CRITICAL,
                c"mode switch failed".as_ptr(),
            );
            forward(
                core::ptr::null_mut(),
                Category::CUSTOM.0 + 3,
                sys::SDL_LOG_PRIORITY_VERBOSE,
                c"tick".as_ptr(),
            );
            forward(
                core::ptr::null_mut(),
                Category::INPUT.0,
                sys::SDL_LOG_PRIORITY_WARN,
                core::ptr::null(),
            );
        }

        let seen = CAPTURE.0.lock().unwrap();
        let seen: Vec<_> = seen
            .iter()
            .filter(|(_, target, _)| target != "stratum::properties")
            .cloned()
            .collect();
        assert_eq!(
            seen,
            [
                (Level::Error, "stratum::video".to_owned(), "mode switch failed".to_owned()),
                (Level::Trace, "stratum::custom".to_owned(), "tick".to_owned()),
            ]
        );
    }

    #[test]
    fn priority_round_trip_and_order() {
        for raw in 1..=7 {
            let p = Priority::from_raw(SDL_LogPriority(raw)).unwrap();
            assert_eq!(p.to_raw().0, raw);
        }
        assert_eq!(Priority::from_raw(sys::SDL_LOG_PRIORITY_INVALID), None);
        assert_eq!(Priority::from_raw(sys::SDL_LOG_PRIORITY_COUNT), None);
        assert!(Priority::Warn < Priority::Critical, "priorities sort by severity");
    }

    #[test]
    fn reserved_categories_share_a_target() {
        assert_eq!(Category(12).target(), "stratum::reserved");
        assert_eq!(Category::GPU.target(), "stratum::gpu");
        assert_eq!(Category(-1).target(), "stratum::reserved");
    }
}
