// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_process.h`: child processes with optional pipes.

use core::ffi::{CStr, c_char, c_int, c_void};

use crate::iostream::SDL_IOStream;
use crate::properties::SDL_PropertiesID;

opaque! {
    SDL_Process;
}

c_enum! {
    /// How a standard stream of a child process is connected.
    pub struct SDL_ProcessIO(c_int) {
        /// Inherited from the parent.
        INHERITED = SDL_PROCESS_STDIO_INHERITED = 0,
        /// Connected to the null device.
        NULL = SDL_PROCESS_STDIO_NULL = 1,
        /// Piped to the application.
        APP = SDL_PROCESS_STDIO_APP = 2,
        /// Redirected to an `SDL_IOStream` given alongside.
        REDIRECT = SDL_PROCESS_STDIO_REDIRECT = 3,
    }
}

// Creation keys for `SDL_CreateProcessWithProperties`.

/// A null-terminated `const char **` argv; required.
pub const SDL_PROP_PROCESS_CREATE_ARGS_POINTER: &CStr = c"SDL.process.create.args";
/// An `SDL_Environment *`; defaults to the parent's environment.
pub const SDL_PROP_PROCESS_CREATE_ENVIRONMENT_POINTER: &CStr = c"SDL.process.create.environment";
pub const SDL_PROP_PROCESS_CREATE_STDIN_NUMBER: &CStr = c"SDL.process.create.stdin_option";
pub const SDL_PROP_PROCESS_CREATE_STDIN_POINTER: &CStr = c"SDL.process.create.stdin_source";
pub const SDL_PROP_PROCESS_CREATE_STDOUT_NUMBER: &CStr = c"SDL.process.create.stdout_option";
pub const SDL_PROP_PROCESS_CREATE_STDOUT_POINTER: &CStr = c"SDL.process.create.stdout_source";
pub const SDL_PROP_PROCESS_CREATE_STDERR_NUMBER: &CStr = c"SDL.process.create.stderr_option";
pub const SDL_PROP_PROCESS_CREATE_STDERR_POINTER: &CStr = c"SDL.process.create.stderr_source";
pub const SDL_PROP_PROCESS_CREATE_STDERR_TO_STDOUT_BOOLEAN: &CStr =
    c"SDL.process.create.stderr_to_stdout";
pub const SDL_PROP_PROCESS_CREATE_BACKGROUND_BOOLEAN: &CStr = c"SDL.process.create.background";

// Keys on the group returned by `SDL_GetProcessProperties`.

pub const SDL_PROP_PROCESS_PID_NUMBER: &CStr = c"SDL.process.pid";
pub const SDL_PROP_PROCESS_STDIN_POINTER: &CStr = c"SDL.process.stdin";
pub const SDL_PROP_PROCESS_STDOUT_POINTER: &CStr = c"SDL.process.stdout";
pub const SDL_PROP_PROCESS_STDERR_POINTER: &CStr = c"SDL.process.stderr";
pub const SDL_PROP_PROCESS_BACKGROUND_BOOLEAN: &CStr = c"SDL.process.background";

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// `args` is a null-terminated argv. With `pipe_stdio`, stdin and stdout
    /// are piped to the application and stderr is inherited.
    pub fn SDL_CreateProcess(args: *const *const c_char, pipe_stdio: bool) -> *mut SDL_Process;
    pub fn SDL_CreateProcessWithProperties(props: SDL_PropertiesID) -> *mut SDL_Process;
    pub fn SDL_GetProcessProperties(process: *mut SDL_Process) -> SDL_PropertiesID;
    /// Blocks until the process exits, returning its whole output
    /// (null-terminated, released with `SDL_free`).
    pub fn SDL_ReadProcess(
        process: *mut SDL_Process,
        datasize: *mut usize,
        exitcode: *mut c_int,
    ) -> *mut c_void;
    pub fn SDL_GetProcessInput(process: *mut SDL_Process) -> *mut SDL_IOStream;
    pub fn SDL_GetProcessOutput(process: *mut SDL_Process) -> *mut SDL_IOStream;
    pub fn SDL_KillProcess(process: *mut SDL_Process, force: bool) -> bool;
    /// Returns `true` once the process has exited.
    pub fn SDL_WaitProcess(process: *mut SDL_Process, block: bool, exitcode: *mut c_int) -> bool;
    pub fn SDL_DestroyProcess(process: *mut SDL_Process);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdio_values() {
        assert_eq!(SDL_PROCESS_STDIO_INHERITED.0, 0);
        assert_eq!(SDL_PROCESS_STDIO_REDIRECT.0, 3);
    }

    #[test]
    fn creation_keys_share_a_namespace() {
        for key in [
            SDL_PROP_PROCESS_CREATE_ARGS_POINTER,
            SDL_PROP_PROCESS_CREATE_ENVIRONMENT_POINTER,
            SDL_PROP_PROCESS_CREATE_STDIN_NUMBER,
            SDL_PROP_PROCESS_CREATE_STDERR_TO_STDOUT_BOOLEAN,
            SDL_PROP_PROCESS_CREATE_BACKGROUND_BOOLEAN,
        ] {
            assert!(
                key.to_bytes().starts_with(b"SDL.process.create."),
                "{key:?} is a creation key"
            );
        }
    }
}
