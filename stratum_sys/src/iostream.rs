// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parts of `SDL_iostream.h` used by surfaces and process pipes.

use core::ffi::{c_char, c_int, c_void};

opaque! {
    /// A readable and/or writable byte stream.
    SDL_IOStream;
}

c_enum! {
    pub struct SDL_IOStatus(c_int) {
        READY = SDL_IO_STATUS_READY = 0,
        ERROR = SDL_IO_STATUS_ERROR = 1,
        EOF = SDL_IO_STATUS_EOF = 2,
        NOT_READY = SDL_IO_STATUS_NOT_READY = 3,
        READONLY = SDL_IO_STATUS_READONLY = 4,
        WRITEONLY = SDL_IO_STATUS_WRITEONLY = 5,
    }
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_IOFromFile(file: *const c_char, mode: *const c_char) -> *mut SDL_IOStream;
    pub fn SDL_IOFromMem(mem: *mut c_void, size: usize) -> *mut SDL_IOStream;
    pub fn SDL_IOFromConstMem(mem: *const c_void, size: usize) -> *mut SDL_IOStream;
    pub fn SDL_CloseIO(context: *mut SDL_IOStream) -> bool;
    pub fn SDL_GetIOStatus(context: *mut SDL_IOStream) -> SDL_IOStatus;
    /// Returns the number of bytes read; `0` on end of stream or error.
    pub fn SDL_ReadIO(context: *mut SDL_IOStream, ptr: *mut c_void, size: usize) -> usize;
    /// Returns the number of bytes written; short on error.
    pub fn SDL_WriteIO(context: *mut SDL_IOStream, ptr: *const c_void, size: usize) -> usize;
    pub fn SDL_FlushIO(context: *mut SDL_IOStream) -> bool;
}
