// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_rect.h`.
//!
//! The structs are the `stratum_core` types, which share their C layout. The
//! header-inline predicates are plain Rust functions over optional references,
//! where `None` plays the part of a null pointer.

use core::ffi::c_int;

pub use stratum_core::rect::{
    FPoint as SDL_FPoint, FRect as SDL_FRect, Point as SDL_Point, Rect as SDL_Rect,
};

/// Copies an integer rect into a float rect.
#[inline]
#[must_use]
pub const fn SDL_RectToFRect(rect: &SDL_Rect) -> SDL_FRect {
    rect.to_frect()
}

#[inline]
#[must_use]
pub fn SDL_PointInRect(p: Option<&SDL_Point>, r: Option<&SDL_Rect>) -> bool {
    matches!((p, r), (Some(p), Some(r)) if r.contains_point(*p))
}

/// `true` for a missing rect or one with no area.
#[inline]
#[must_use]
pub fn SDL_RectEmpty(r: Option<&SDL_Rect>) -> bool {
    r.is_none_or(SDL_Rect::is_empty)
}

#[inline]
#[must_use]
pub fn SDL_RectsEqual(a: Option<&SDL_Rect>, b: Option<&SDL_Rect>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

#[inline]
#[must_use]
pub fn SDL_PointInRectFloat(p: Option<&SDL_FPoint>, r: Option<&SDL_FRect>) -> bool {
    matches!((p, r), (Some(p), Some(r)) if r.contains_point(*p))
}

#[inline]
#[must_use]
pub fn SDL_RectEmptyFloat(r: Option<&SDL_FRect>) -> bool {
    r.is_none_or(SDL_FRect::is_empty)
}

#[inline]
#[must_use]
pub fn SDL_RectsEqualEpsilon(a: Option<&SDL_FRect>, b: Option<&SDL_FRect>, epsilon: f32) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.approx_eq_epsilon(b, epsilon))
}

#[inline]
#[must_use]
pub fn SDL_RectsEqualFloat(a: Option<&SDL_FRect>, b: Option<&SDL_FRect>) -> bool {
    SDL_RectsEqualEpsilon(a, b, f32::EPSILON)
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    pub fn SDL_HasRectIntersection(a: *const SDL_Rect, b: *const SDL_Rect) -> bool;
    pub fn SDL_GetRectIntersection(
        a: *const SDL_Rect,
        b: *const SDL_Rect,
        result: *mut SDL_Rect,
    ) -> bool;
    pub fn SDL_GetRectUnion(a: *const SDL_Rect, b: *const SDL_Rect, result: *mut SDL_Rect)
    -> bool;
    pub fn SDL_GetRectEnclosingPoints(
        points: *const SDL_Point,
        count: c_int,
        clip: *const SDL_Rect,
        result: *mut SDL_Rect,
    ) -> bool;
    pub fn SDL_GetRectAndLineIntersection(
        rect: *const SDL_Rect,
        X1: *mut c_int,
        Y1: *mut c_int,
        X2: *mut c_int,
        Y2: *mut c_int,
    ) -> bool;

    pub fn SDL_HasRectIntersectionFloat(a: *const SDL_FRect, b: *const SDL_FRect) -> bool;
    pub fn SDL_GetRectIntersectionFloat(
        a: *const SDL_FRect,
        b: *const SDL_FRect,
        result: *mut SDL_FRect,
    ) -> bool;
    pub fn SDL_GetRectUnionFloat(
        a: *const SDL_FRect,
        b: *const SDL_FRect,
        result: *mut SDL_FRect,
    ) -> bool;
    pub fn SDL_GetRectEnclosingPointsFloat(
        points: *const SDL_FPoint,
        count: c_int,
        clip: *const SDL_FRect,
        result: *mut SDL_FRect,
    ) -> bool;
    pub fn SDL_GetRectAndLineIntersectionFloat(
        rect: *const SDL_FRect,
        X1: *mut f32,
        Y1: *mut f32,
        X2: *mut f32,
        Y2: *mut f32,
    ) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn layouts_match_c() {
        assert_eq!(size_of::<SDL_Point>(), 8);
        assert_eq!(size_of::<SDL_FPoint>(), 8);
        assert_eq!(size_of::<SDL_Rect>(), 16);
        assert_eq!(size_of::<SDL_FRect>(), 16);
        assert_eq!(align_of::<SDL_Rect>(), 4);
    }

    #[test]
    fn inline_predicates_treat_none_as_null() {
        let r = SDL_Rect::new(0, 0, 1, 1);
        let p = SDL_Point::new(0, 0);
        assert!(SDL_PointInRect(Some(&p), Some(&r)), "origin lies in a unit rect");
        assert!(!SDL_PointInRect(None, Some(&r)), "null point is never inside");
        assert!(SDL_RectEmpty(None), "null rect is empty");
        assert!(!SDL_RectsEqual(Some(&r), None), "null never compares equal");
        assert!(SDL_RectsEqual(Some(&r), Some(&r)), "rect equals itself");
    }

    #[test]
    fn float_predicates() {
        let r = SDL_RectToFRect(&SDL_Rect::new(0, 0, 1, 1));
        let q = SDL_FRect::new(0.0, 0.0, 1.000_000_1, 1.0);
        assert!(SDL_PointInRectFloat(Some(&SDL_FPoint::new(0.0, 1.0)), Some(&r)), "closed edge");
        assert!(!SDL_RectEmptyFloat(Some(&SDL_FRect::new(0.0, 0.0, 0.0, 0.0))), "zero area");
        assert!(SDL_RectsEqualFloat(Some(&r), Some(&q)), "within machine epsilon");
        assert!(!SDL_RectsEqualEpsilon(
            Some(&r),
            Some(&SDL_FRect::new(0.0, 0.0, 1.01, 1.0)),
            f32::EPSILON
        ), "0.01 apart");
    }
}
