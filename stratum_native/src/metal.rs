// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `CAMetalLayer`-backed views.
//!
//! A [`MetalView`] attaches a Metal layer to a window so a renderer such as
//! wgpu can draw into it. On Apple targets [`MetalView::layer`] returns the
//! typed layer; elsewhere only the raw pointer is available and views fail
//! to create.

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

#[cfg(target_vendor = "apple")]
use objc2::rc::Retained;
#[cfg(target_vendor = "apple")]
use objc2_core_foundation::CGSize;
#[cfg(target_vendor = "apple")]
use objc2_quartz_core::CAMetalLayer;
use stratum_sys::metal as sys;
use stratum_sys::video::SDL_Window;

use crate::error::{Result, non_null};

/// A Metal view on a window, destroyed on drop.
///
/// The window must outlive the view.
pub struct MetalView {
    raw: NonNull<c_void>,
}

impl fmt::Debug for MetalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MetalView");
        s.field("raw", &self.raw);
        #[cfg(target_vendor = "apple")]
        s.field("drawable_size", &self.layer().map(CAMetalLayer::drawableSize));
        s.finish()
    }
}

impl MetalView {
    /// Creates a view covering `window`'s content area.
    ///
    /// The window should have been created with the Metal flag; high-DPI
    /// windows get a layer whose drawable size is in pixels.
    ///
    /// # Safety
    ///
    /// `window` must be a live window that outlives the view.
    pub unsafe fn create(window: *mut SDL_Window) -> Result<Self> {
        // SAFETY: forwarded from the caller.
        let raw = non_null(unsafe { sys::SDL_Metal_CreateView(window) })?;
        ::log::debug!(target: "stratum::metal", "created view {raw:?}");
        Ok(Self { raw })
    }

    /// The backing `CAMetalLayer` as a raw pointer, for APIs such as
    /// wgpu's `create_surface_from_layer`. Valid while `self` lives.
    #[must_use]
    pub fn layer_ptr(&self) -> *mut c_void {
        // SAFETY: live view.
        unsafe { sys::SDL_Metal_GetLayer(self.raw.as_ptr()) }
    }

    /// The backing layer, for configuring pixel format, device and the like.
    #[cfg(target_vendor = "apple")]
    #[must_use]
    pub fn layer(&self) -> Option<&CAMetalLayer> {
        // SAFETY: the view's layer is a CAMetalLayer retained by the view,
        // which the returned borrow cannot outlive.
        unsafe { self.layer_ptr().cast::<CAMetalLayer>().as_ref() }
    }

    /// A strong reference to the layer that may outlive the view, for
    /// renderers that keep the layer themselves.
    #[cfg(target_vendor = "apple")]
    #[must_use]
    pub fn retained_layer(&self) -> Option<Retained<CAMetalLayer>> {
        // SAFETY: the pointer is null or a live CAMetalLayer; retaining it
        // takes a reference of our own.
        unsafe { Retained::retain(self.layer_ptr().cast::<CAMetalLayer>()) }
    }

    /// Sets the layer's drawable size in pixels.
    #[cfg(target_vendor = "apple")]
    pub fn set_drawable_size(&self, width: f64, height: f64) {
        if let Some(layer) = self.layer() {
            layer.setDrawableSize(CGSize::new(width, height));
        }
    }
}

impl Drop for MetalView {
    fn drop(&mut self) {
        // SAFETY: created by this handle and destroyed once.
        unsafe { sys::SDL_Metal_DestroyView(self.raw.as_ptr()) };
        ::log::debug!(target: "stratum::metal", "destroyed view {:?}", self.raw);
    }
}
