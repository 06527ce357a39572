// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child processes.
//!
//! [`ProcessBuilder`] collects the command line, environment and stream
//! wiring, then hands them to the native library as creation properties.
//! Piped streams are exposed as [`std::io::Read`] and [`std::io::Write`]
//! adapters borrowed from the [`Process`].

use std::collections::BTreeMap;
use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::ptr::NonNull;

use stratum_sys::iostream::{
    SDL_CloseIO, SDL_FlushIO, SDL_GetIOStatus, SDL_IOStatus, SDL_IOStream, SDL_ReadIO, SDL_WriteIO,
};
use stratum_sys::process::{self as sys, SDL_Process, SDL_ProcessIO};
use stratum_sys::properties as props_sys;
use stratum_sys::stdinc::{
    SDL_CreateEnvironment, SDL_DestroyEnvironment, SDL_Environment, SDL_SetEnvironmentVariable,
    SDL_UnsetEnvironmentVariable, SDL_free,
};

use crate::error::{Error, Result, c_string, check, last_error, non_null};
use crate::properties::Properties;

/// A stream owned elsewhere, used as a redirection target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawStream(NonNull<SDL_IOStream>);

impl RawStream {
    /// Wraps a native stream.
    ///
    /// # Safety
    ///
    /// `stream` must stay open until the child process has been created.
    #[must_use]
    pub const unsafe fn from_raw(stream: NonNull<SDL_IOStream>) -> Self {
        Self(stream)
    }

    /// Returns the native stream.
    #[must_use]
    pub const fn as_ptr(self) -> *mut SDL_IOStream {
        self.0.as_ptr()
    }
}

/// How a standard stream of the child is connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stdio {
    /// Shared with this process.
    #[default]
    Inherit,
    /// Connected to the null device.
    Null,
    /// Piped to this process; see [`Process::stdin`] and friends.
    Piped,
    /// Connected to an existing native stream.
    Redirect(RawStream),
}

impl Stdio {
    const fn option(self) -> SDL_ProcessIO {
        match self {
            Self::Inherit => SDL_ProcessIO::INHERITED,
            Self::Null => SDL_ProcessIO::NULL,
            Self::Piped => SDL_ProcessIO::APP,
            Self::Redirect(_) => SDL_ProcessIO::REDIRECT,
        }
    }

    fn source(self) -> Option<*mut SDL_IOStream> {
        match self {
            Self::Redirect(stream) => Some(stream.as_ptr()),
            _ => None,
        }
    }
}

/// Environment changes applied on top of the parent's environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct EnvPlan {
    clear: bool,
    /// `None` unsets the variable.
    vars: BTreeMap<String, Option<String>>,
}

impl EnvPlan {
    fn is_inherited(&self) -> bool {
        !self.clear && self.vars.is_empty()
    }
}

/// Everything needed to fill the creation properties, already converted to
/// C strings.
#[derive(Debug)]
struct Plan {
    argv: Vec<CString>,
    env: Option<Vec<(CString, Option<CString>)>>,
    clear_env: bool,
    stdio: [(&'static CStr, &'static CStr, Stdio); 3],
    stderr_to_stdout: bool,
    background: bool,
}

/// Configures and starts a child process.
#[derive(Clone, Debug)]
pub struct ProcessBuilder {
    args: Vec<String>,
    env: EnvPlan,
    stdin: Stdio,
    stdout: Stdio,
    stderr: Stdio,
    stderr_to_stdout: bool,
    background: bool,
}

impl ProcessBuilder {
    /// Starts a command line with `program`, looked up on `PATH` if it has
    /// no directory part.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            args: vec![program.into()],
            env: EnvPlan::default(),
            stdin: Stdio::Null,
            stdout: Stdio::Inherit,
            stderr: Stdio::Inherit,
            stderr_to_stdout: false,
            background: false,
        }
    }

    /// Appends an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets an environment variable for the child.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.vars.insert(key.into(), Some(value.into()));
        self
    }

    /// Removes an environment variable for the child.
    #[must_use]
    pub fn env_remove(mut self, key: impl Into<String>) -> Self {
        self.env.vars.insert(key.into(), None);
        self
    }

    /// Starts the child with an empty environment plus anything set with
    /// [`env`](Self::env).
    #[must_use]
    pub fn env_clear(mut self) -> Self {
        self.env.clear = true;
        self.env.vars.retain(|_, value| value.is_some());
        self
    }

    /// Wires standard input. Defaults to [`Stdio::Null`].
    #[must_use]
    pub fn stdin(mut self, stdio: Stdio) -> Self {
        self.stdin = stdio;
        self
    }

    /// Wires standard output. Defaults to [`Stdio::Inherit`].
    #[must_use]
    pub fn stdout(mut self, stdio: Stdio) -> Self {
        self.stdout = stdio;
        self
    }

    /// Wires standard error. Defaults to [`Stdio::Inherit`]; ignored when
    /// [`stderr_to_stdout`](Self::stderr_to_stdout) is set.
    #[must_use]
    pub fn stderr(mut self, stdio: Stdio) -> Self {
        self.stderr = stdio;
        self
    }

    /// Sends standard error wherever standard output goes.
    #[must_use]
    pub fn stderr_to_stdout(mut self, merge: bool) -> Self {
        self.stderr_to_stdout = merge;
        self
    }

    /// Runs the child in the background. Its exit code is not available
    /// and always reads as `0`.
    #[must_use]
    pub fn background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    fn plan(&self) -> Result<Plan> {
        if self.args.first().is_none_or(String::is_empty) {
            return Err(Error::Invalid("no program given".to_owned()));
        }
        let argv = self
            .args
            .iter()
            .map(|arg| c_string(arg))
            .collect::<Result<Vec<_>>>()?;
        let env = if self.env.is_inherited() {
            None
        } else {
            let vars = self
                .env
                .vars
                .iter()
                .map(|(key, value)| {
                    if key.is_empty() || key.contains('=') {
                        return Err(Error::Invalid(format!("invalid variable name {key:?}")));
                    }
                    Ok((c_string(key)?, value.as_deref().map(c_string).transpose()?))
                })
                .collect::<Result<Vec<_>>>()?;
            Some(vars)
        };
        Ok(Plan {
            argv,
            env,
            clear_env: self.env.clear,
            stdio: [
                (
                    sys::SDL_PROP_PROCESS_CREATE_STDIN_NUMBER,
                    sys::SDL_PROP_PROCESS_CREATE_STDIN_POINTER,
                    self.stdin,
                ),
                (
                    sys::SDL_PROP_PROCESS_CREATE_STDOUT_NUMBER,
                    sys::SDL_PROP_PROCESS_CREATE_STDOUT_POINTER,
                    self.stdout,
                ),
                (
                    sys::SDL_PROP_PROCESS_CREATE_STDERR_NUMBER,
                    sys::SDL_PROP_PROCESS_CREATE_STDERR_POINTER,
                    self.stderr,
                ),
            ],
            stderr_to_stdout: self.stderr_to_stdout,
            background: self.background,
        })
    }

    /// Starts the child.
    pub fn spawn(&self) -> Result<Process> {
        let plan = self.plan()?;
        let props = Properties::new()?;
        let id = props.id();

        let mut argv: Vec<*const c_char> = plan.argv.iter().map(|arg| arg.as_ptr()).collect();
        argv.push(core::ptr::null());

        let env = match &plan.env {
            Some(vars) => Some(Environment::build(plan.clear_env, vars)?),
            None => None,
        };

        // SAFETY: every key is a valid C string; `argv` and `env` outlive
        // the creation call below, which is when the library reads them.
        unsafe {
            check(props_sys::SDL_SetPointerProperty(
                id,
                sys::SDL_PROP_PROCESS_CREATE_ARGS_POINTER.as_ptr(),
                argv.as_mut_ptr().cast(),
            ))?;
            if let Some(env) = &env {
                check(props_sys::SDL_SetPointerProperty(
                    id,
                    sys::SDL_PROP_PROCESS_CREATE_ENVIRONMENT_POINTER.as_ptr(),
                    env.0.as_ptr().cast(),
                ))?;
            }
            for (number_key, pointer_key, stdio) in plan.stdio {
                check(props_sys::SDL_SetNumberProperty(
                    id,
                    number_key.as_ptr(),
                    i64::from(stdio.option().0),
                ))?;
                if let Some(stream) = stdio.source() {
                    check(props_sys::SDL_SetPointerProperty(
                        id,
                        pointer_key.as_ptr(),
                        stream.cast(),
                    ))?;
                }
            }
            check(props_sys::SDL_SetBooleanProperty(
                id,
                sys::SDL_PROP_PROCESS_CREATE_STDERR_TO_STDOUT_BOOLEAN.as_ptr(),
                plan.stderr_to_stdout,
            ))?;
            check(props_sys::SDL_SetBooleanProperty(
                id,
                sys::SDL_PROP_PROCESS_CREATE_BACKGROUND_BOOLEAN.as_ptr(),
                plan.background,
            ))?;
        }

        // SAFETY: `props` is a live group filled above.
        let raw = non_null(unsafe { sys::SDL_CreateProcessWithProperties(id) })?;
        drop(env);
        let process = Process { raw };
        ::log::debug!(
            target: "stratum::process",
            "spawned {:?} (pid {})",
            self.args[0],
            process.pid()
        );
        Ok(process)
    }

    /// Runs the child to completion with standard output piped, returning
    /// its output and exit code.
    pub fn output(&self) -> Result<(Vec<u8>, i32)> {
        let mut process = self.clone().stdout(Stdio::Piped).spawn()?;
        process.read_to_end()
    }
}

/// A native environment block, destroyed on drop.
struct Environment(NonNull<SDL_Environment>);

impl Environment {
    fn build(clear: bool, vars: &[(CString, Option<CString>)]) -> Result<Self> {
        // SAFETY: no preconditions.
        let env = Self(non_null(unsafe { SDL_CreateEnvironment(!clear) })?);
        for (key, value) in vars {
            // SAFETY: live environment and valid C strings.
            let ok = unsafe {
                match value {
                    Some(value) => {
                        SDL_SetEnvironmentVariable(env.0.as_ptr(), key.as_ptr(), value.as_ptr(), true)
                    }
                    None => SDL_UnsetEnvironmentVariable(env.0.as_ptr(), key.as_ptr()),
                }
            };
            check(ok)?;
        }
        Ok(env)
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        // SAFETY: created in `build` and dropped once.
        unsafe { SDL_DestroyEnvironment(self.0.as_ptr()) };
    }
}

/// A running or finished child process.
///
/// Dropping the handle neither waits for nor stops the child; use
/// [`kill`](Self::kill) for that.
pub struct Process {
    raw: NonNull<SDL_Process>,
}

impl fmt::Debug for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Process").field("raw", &self.raw).finish()
    }
}

impl Process {
    fn properties(&self) -> Properties {
        // SAFETY: live handle.
        Properties::borrowed(unsafe { sys::SDL_GetProcessProperties(self.raw.as_ptr()) })
    }

    fn stream(&self, key: &CStr) -> Option<NonNull<SDL_IOStream>> {
        let id = self.properties().id();
        // SAFETY: live group and valid key; the result is only an address.
        let ptr = unsafe { props_sys::SDL_GetPointerProperty(id, key.as_ptr(), core::ptr::null_mut()) };
        NonNull::new(ptr.cast())
    }

    /// Returns the operating system's process id.
    #[must_use]
    pub fn pid(&self) -> i64 {
        let id = self.properties().id();
        // SAFETY: live group and valid key.
        unsafe { props_sys::SDL_GetNumberProperty(id, sys::SDL_PROP_PROCESS_PID_NUMBER.as_ptr(), 0) }
    }

    /// Returns `true` if the child was started in the background.
    #[must_use]
    pub fn is_background(&self) -> bool {
        let id = self.properties().id();
        // SAFETY: live group and valid key.
        unsafe {
            props_sys::SDL_GetBooleanProperty(id, sys::SDL_PROP_PROCESS_BACKGROUND_BOOLEAN.as_ptr(), false)
        }
    }

    /// Returns the write end of the child's standard input, if piped.
    pub fn stdin(&mut self) -> Option<ProcessInput<'_>> {
        // SAFETY: live handle.
        let raw = NonNull::new(unsafe { sys::SDL_GetProcessInput(self.raw.as_ptr()) })?;
        Some(ProcessInput {
            raw,
            _process: PhantomData,
        })
    }

    /// Returns the read end of the child's standard output, if piped.
    pub fn stdout(&mut self) -> Option<ProcessOutput<'_>> {
        // SAFETY: live handle.
        let raw = NonNull::new(unsafe { sys::SDL_GetProcessOutput(self.raw.as_ptr()) })?;
        Some(ProcessOutput {
            raw,
            _process: PhantomData,
        })
    }

    /// Returns the read end of the child's standard error, if piped.
    pub fn stderr(&mut self) -> Option<ProcessOutput<'_>> {
        let raw = self.stream(sys::SDL_PROP_PROCESS_STDERR_POINTER)?;
        Some(ProcessOutput {
            raw,
            _process: PhantomData,
        })
    }

    /// Closes the child's standard input so it sees end of file.
    pub fn close_stdin(&mut self) -> Result<()> {
        let Some(input) = self.stream(sys::SDL_PROP_PROCESS_STDIN_POINTER) else {
            return Ok(());
        };
        let id = self.properties().id();
        // SAFETY: the stream is live; clearing the property right after
        // keeps the library from closing it a second time.
        unsafe {
            let closed = SDL_CloseIO(input.as_ptr());
            props_sys::SDL_ClearProperty(id, sys::SDL_PROP_PROCESS_STDIN_POINTER.as_ptr());
            check(closed)
        }
    }

    /// Waits for the child to exit and returns everything it wrote to
    /// standard output along with its exit code.
    ///
    /// Standard output must be piped.
    pub fn read_to_end(&mut self) -> Result<(Vec<u8>, i32)> {
        let mut size = 0_usize;
        let mut exit_code: c_int = 0;
        // SAFETY: live handle and valid out pointers.
        let data = unsafe { sys::SDL_ReadProcess(self.raw.as_ptr(), &mut size, &mut exit_code) };
        let data = non_null(data.cast::<u8>())?;
        // SAFETY: the library returns `size` readable bytes.
        let bytes = unsafe { core::slice::from_raw_parts(data.as_ptr(), size) }.to_vec();
        // SAFETY: allocated by the library.
        unsafe { SDL_free(data.as_ptr().cast::<c_void>()) };
        Ok((bytes, exit_code))
    }

    /// Blocks until the child exits and returns its exit code.
    pub fn wait(&mut self) -> Result<i32> {
        let mut exit_code: c_int = 0;
        // SAFETY: live handle and valid out pointer.
        check(unsafe { sys::SDL_WaitProcess(self.raw.as_ptr(), true, &mut exit_code) })?;
        Ok(exit_code)
    }

    /// Returns the exit code if the child has exited.
    #[must_use]
    pub fn try_wait(&mut self) -> Option<i32> {
        let mut exit_code: c_int = 0;
        // SAFETY: live handle and valid out pointer.
        unsafe { sys::SDL_WaitProcess(self.raw.as_ptr(), false, &mut exit_code) }.then_some(exit_code)
    }

    /// Asks the child to stop, or terminates it outright with `force`.
    pub fn kill(&mut self, force: bool) -> Result<()> {
        // SAFETY: live handle.
        check(unsafe { sys::SDL_KillProcess(self.raw.as_ptr(), force) })
    }
}

impl Drop for Process {
    fn drop(&mut self) {
        ::log::trace!(target: "stratum::process", "destroying process handle");
        // SAFETY: the handle is live and dropped once.
        unsafe { sys::SDL_DestroyProcess(self.raw.as_ptr()) };
    }
}

/// Maps a native transfer count and stream status onto `io` results.
///
/// A short count is fine; zero bytes means end of file, would-block or an
/// error depending on the status. `message` supplies the error text.
fn transfer_result(
    count: usize,
    status: SDL_IOStatus,
    message: impl FnOnce() -> String,
) -> io::Result<usize> {
    if count > 0 {
        return Ok(count);
    }
    match status {
        SDL_IOStatus::NOT_READY => Err(io::ErrorKind::WouldBlock.into()),
        SDL_IOStatus::ERROR => Err(io::Error::other(message())),
        SDL_IOStatus::READONLY => Err(io::Error::new(io::ErrorKind::Unsupported, "stream is read-only")),
        SDL_IOStatus::WRITEONLY => Err(io::Error::new(io::ErrorKind::Unsupported, "stream is write-only")),
        _ => Ok(0),
    }
}

/// The write end of a child's standard input.
#[derive(Debug)]
pub struct ProcessInput<'a> {
    raw: NonNull<SDL_IOStream>,
    _process: PhantomData<&'a mut Process>,
}

impl io::Write for ProcessInput<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // SAFETY: live stream; `buf` is readable.
        let n = unsafe { SDL_WriteIO(self.raw.as_ptr(), buf.as_ptr().cast(), buf.len()) };
        // SAFETY: live stream.
        transfer_result(n, unsafe { SDL_GetIOStatus(self.raw.as_ptr()) }, last_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        // SAFETY: live stream.
        check(unsafe { SDL_FlushIO(self.raw.as_ptr()) }).map_err(io::Error::from)
    }
}

/// The read end of a child's standard output or error.
#[derive(Debug)]
pub struct ProcessOutput<'a> {
    raw: NonNull<SDL_IOStream>,
    _process: PhantomData<&'a mut Process>,
}

impl io::Read for ProcessOutput<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // SAFETY: live stream; `buf` is writable.
        let n = unsafe { SDL_ReadIO(self.raw.as_ptr(), buf.as_mut_ptr().cast(), buf.len()) };
        // SAFETY: live stream.
        transfer_result(n, unsafe { SDL_GetIOStatus(self.raw.as_ptr()) }, last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_native_defaults() {
        let plan = ProcessBuilder::new("ls").plan().unwrap();
        assert_eq!(plan.argv, [c"ls".to_owned()]);
        assert!(plan.env.is_none(), "environment is inherited untouched");
        let options: Vec<_> = plan.stdio.iter().map(|(_, _, s)| s.option()).collect();
        assert_eq!(
            options,
            [SDL_ProcessIO::NULL, SDL_ProcessIO::INHERITED, SDL_ProcessIO::INHERITED]
        );
        assert!(!plan.stderr_to_stdout, "streams stay separate by default");
        assert!(!plan.background, "children run in the foreground by default");
    }

    #[test]
    fn stdio_keys_line_up() {
        let plan = ProcessBuilder::new("cat")
            .stdin(Stdio::Piped)
            .stdout(Stdio::Piped)
            .plan()
            .unwrap();
        let [stdin, stdout, stderr] = plan.stdio;
        assert_eq!(stdin.0, sys::SDL_PROP_PROCESS_CREATE_STDIN_NUMBER);
        assert_eq!(stdin.2.option(), SDL_ProcessIO::APP);
        assert_eq!(stdout.1, sys::SDL_PROP_PROCESS_CREATE_STDOUT_POINTER);
        assert_eq!(stderr.0, sys::SDL_PROP_PROCESS_CREATE_STDERR_NUMBER);
        assert_eq!(Stdio::Piped.source(), None);
    }

    #[test]
    fn environment_plan() {
        let plan = ProcessBuilder::new("env")
            .env("B", "2")
            .env_remove("A")
            .plan()
            .unwrap();
        assert!(!plan.clear_env, "starts from the parent environment");
        assert_eq!(
            plan.env.unwrap(),
            [(c"A".to_owned(), None), (c"B".to_owned(), Some(c"2".to_owned()))]
        );

        let cleared = ProcessBuilder::new("env").env_remove("A").env_clear().plan().unwrap();
        assert!(cleared.clear_env, "clearing is recorded");
        assert!(
            cleared.env.unwrap().is_empty(),
            "removals are moot on an empty environment"
        );
    }

    #[test]
    fn invalid_command_lines_are_rejected() {
        assert!(ProcessBuilder::new("").plan().is_err(), "empty program");
        assert_eq!(
            ProcessBuilder::new("echo").arg("a\0b").plan().unwrap_err(),
            Error::InteriorNul
        );
        assert!(
            ProcessBuilder::new("env").env("A=B", "1").plan().is_err(),
            "`=` is not allowed in a variable name"
        );
    }

    #[test]
    fn args_accumulate() {
        let plan = ProcessBuilder::new("git")
            .arg("log")
            .args(["--oneline", "-n", "3"])
            .plan()
            .unwrap();
        let argv: Vec<_> = plan.argv.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(argv, ["git", "log", "--oneline", "-n", "3"]);
    }

    #[test]
    fn transfer_results() {
        let msg = || "pipe broke".to_owned();
        assert_eq!(transfer_result(4, SDL_IOStatus::ERROR, msg).unwrap(), 4);
        assert_eq!(transfer_result(0, SDL_IOStatus::EOF, msg).unwrap(), 0);
        assert_eq!(transfer_result(0, SDL_IOStatus::READY, msg).unwrap(), 0);
        assert_eq!(
            transfer_result(0, SDL_IOStatus::NOT_READY, msg).unwrap_err().kind(),
            io::ErrorKind::WouldBlock
        );
        assert_eq!(
            transfer_result(0, SDL_IOStatus::ERROR, msg).unwrap_err().to_string(),
            "pipe broke"
        );
        assert_eq!(
            transfer_result(0, SDL_IOStatus::READONLY, msg).unwrap_err().kind(),
            io::ErrorKind::Unsupported
        );
    }
}
