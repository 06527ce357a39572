// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer and float points and rectangles.
//!
//! [`Point`], [`FPoint`], [`Rect`] and [`FRect`] are `#[repr(C)]` and match
//! the native `SDL_Point`, `SDL_FPoint`, `SDL_Rect` and `SDL_FRect` layouts
//! exactly, so slices of them can be handed to the native library without
//! conversion.
//!
//! # Integer and float semantics differ
//!
//! The two flavors intentionally disagree at the far edge:
//!
//! | | Integer | Float |
//! |---|---|---|
//! | Point containment | `[x, x+w)` × `[y, y+h)` | `[x, x+w]` × `[y, y+h]` |
//! | Empty | `w <= 0 \|\| h <= 0` | `w < 0 \|\| h < 0` |
//! | Equality | exact | within an epsilon |
//!
//! Intersection, union, enclosing points and line clipping share one
//! algorithm for both flavors. Integer rectangles treat the far edge as
//! exclusive (`x + w - 1` is the last covered column); float rectangles treat
//! it as inclusive. Integer operations refuse rectangles whose coordinates
//! could overflow during the computation (see [`Rect::can_overflow`]).

use core::fmt;
use core::ops::{Add, Sub};

#[allow(unsafe_code, reason = "bytemuck derives expand to unsafe impls")]
mod pod {
    use bytemuck::{Pod, Zeroable};

    /// A point with integer coordinates.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
    pub struct Point {
        /// Horizontal coordinate.
        pub x: i32,
        /// Vertical coordinate.
        pub y: i32,
    }

    /// A point with float coordinates.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct FPoint {
        /// Horizontal coordinate.
        pub x: f32,
        /// Vertical coordinate.
        pub y: f32,
    }

    /// An axis-aligned rectangle with integer origin and size.
    ///
    /// The origin is the upper-left corner.
    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
    pub struct Rect {
        /// Left edge.
        pub x: i32,
        /// Top edge.
        pub y: i32,
        /// Width; zero or negative means empty.
        pub w: i32,
        /// Height; zero or negative means empty.
        pub h: i32,
    }

    /// An axis-aligned rectangle with float origin and size.
    ///
    /// The derived `PartialEq` is exact; use [`FRect::approx_eq`] for the
    /// tolerant comparison the native library performs.
    ///
    /// [`FRect::approx_eq`]: super::FRect::approx_eq
    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct FRect {
        /// Left edge.
        pub x: f32,
        /// Top edge.
        pub y: f32,
        /// Width; negative means empty.
        pub w: f32,
        /// Height; negative means empty.
        pub h: f32,
    }
}

pub use pod::{FPoint, FRect, Point, Rect};

/// Errors from integer rectangle arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectError {
    /// An input coordinate or the result does not fit the integer range.
    Overflow,
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("potential rect math overflow"),
        }
    }
}

impl core::error::Error for RectError {}

// -- Shared algorithm --

/// Coordinate type of a rectangle flavor.
trait Scalar: Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> {
    /// Subtracted from `x + w` to get the last covered coordinate.
    const EDGE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `a1 + (a2 - a1) * (b - b1) / (b2 - b1)` evaluated in a wider type.
    fn interpolate(a1: Self, a2: Self, b: Self, b1: Self, b2: Self) -> Self;
}

impl Scalar for i32 {
    const EDGE: Self = 1;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::checked_sub(self, rhs)
    }

    fn interpolate(a1: Self, a2: Self, b: Self, b1: Self, b2: Self) -> Self {
        // Both differences span up to 2^32, so the product needs 128 bits.
        let denom = i128::from(b2) - i128::from(b1);
        if denom == 0 {
            return a1;
        }
        let value = i128::from(a1)
            + (i128::from(a2) - i128::from(a1)) * (i128::from(b) - i128::from(b1)) / denom;
        Self::try_from(value).unwrap_or(if value < 0 { Self::MIN } else { Self::MAX })
    }
}

impl Scalar for f32 {
    const EDGE: Self = 0.0;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the interpolated value lies between two f32 endpoints"
    )]
    fn interpolate(a1: Self, a2: Self, b: Self, b1: Self, b2: Self) -> Self {
        let denom = f64::from(b2) - f64::from(b1);
        if denom == 0.0 {
            return a1;
        }
        (f64::from(a1) + (f64::from(a2) - f64::from(a1)) * (f64::from(b) - f64::from(b1)) / denom)
            as Self
    }
}

fn min_of<S: PartialOrd>(a: S, b: S) -> S {
    if b < a { b } else { a }
}

fn max_of<S: PartialOrd>(a: S, b: S) -> S {
    if b > a { b } else { a }
}

/// Overlap of `[a, a+alen)` and `[b, b+blen)` as `(start, len)`, or `None`
/// when the ranges do not overlap.
fn overlap<S: Scalar>(a: S, alen: S, b: S, blen: S) -> Option<(S, S)> {
    let mut min = a;
    let mut max = a + alen;
    let b_max = b + blen;
    if b > min {
        min = b;
    }
    if b_max < max {
        max = b_max;
    }
    if max - S::EDGE < min {
        None
    } else {
        Some((min, max - min))
    }
}

fn intersect<S: Scalar>(a: [S; 4], b: [S; 4]) -> Option<[S; 4]> {
    let (x, w) = overlap(a[0], a[2], b[0], b[2])?;
    let (y, h) = overlap(a[1], a[3], b[1], b[3])?;
    Some([x, y, w, h])
}

fn unite<S: Scalar>(a: [S; 4], b: [S; 4]) -> Option<[S; 4]> {
    let x = min_of(a[0], b[0]);
    let right = max_of(a[0] + a[2], b[0] + b[2]);
    let y = min_of(a[1], b[1]);
    let bottom = max_of(a[1] + a[3], b[1] + b[3]);
    Some([x, y, right.checked_sub(x)?, bottom.checked_sub(y)?])
}

fn enclose<S: Scalar>(points: impl Iterator<Item = (S, S)>, clip: Option<[S; 4]>) -> Option<[S; 4]> {
    let clip = clip.map(|[x, y, w, h]| (x, y, x + w - S::EDGE, y + h - S::EDGE));
    let mut bounds: Option<(S, S, S, S)> = None;
    for (x, y) in points {
        if let Some((min_x, min_y, max_x, max_y)) = clip {
            if x < min_x || x > max_x || y < min_y || y > max_y {
                continue;
            }
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => (
                min_of(min_x, x),
                min_of(min_y, y),
                max_of(max_x, x),
                max_of(max_y, y),
            ),
        });
    }
    let (min_x, min_y, max_x, max_y) = bounds?;
    let w = max_x.checked_sub(min_x)?.checked_add(S::EDGE)?;
    let h = max_y.checked_sub(min_y)?.checked_add(S::EDGE)?;
    Some([min_x, min_y, w, h])
}

const CODE_BOTTOM: u8 = 1;
const CODE_TOP: u8 = 2;
const CODE_LEFT: u8 = 4;
const CODE_RIGHT: u8 = 8;

/// Cohen–Sutherland clip of the segment `p1`–`p2` against a non-empty rect.
fn clip_segment<S: Scalar>(rect: [S; 4], p1: (S, S), p2: (S, S)) -> Option<((S, S), (S, S))> {
    let (left, top) = (rect[0], rect[1]);
    let right = rect[0] + rect[2] - S::EDGE;
    let bottom = rect[1] + rect[3] - S::EDGE;
    let ((mut x1, mut y1), (mut x2, mut y2)) = (p1, p2);

    let inside = |x: S, y: S| x >= left && x <= right && y >= top && y <= bottom;
    if inside(x1, y1) && inside(x2, y2) {
        return Some((p1, p2));
    }

    if (x1 < left && x2 < left)
        || (x1 > right && x2 > right)
        || (y1 < top && y2 < top)
        || (y1 > bottom && y2 > bottom)
    {
        return None;
    }

    let clamp = |v: S, lo: S, hi: S| {
        if v < lo {
            lo
        } else if v > hi {
            hi
        } else {
            v
        }
    };

    if y1 == y2 {
        return Some(((clamp(x1, left, right), y1), (clamp(x2, left, right), y2)));
    }
    if x1 == x2 {
        return Some(((x1, clamp(y1, top, bottom)), (x2, clamp(y2, top, bottom))));
    }

    let outcode = |x: S, y: S| {
        let mut code = 0;
        if y < top {
            code |= CODE_TOP;
        } else if y > bottom {
            code |= CODE_BOTTOM;
        }
        if x < left {
            code |= CODE_LEFT;
        } else if x > right {
            code |= CODE_RIGHT;
        }
        code
    };

    let mut code1 = outcode(x1, y1);
    let mut code2 = outcode(x2, y2);
    while code1 != 0 || code2 != 0 {
        if code1 & code2 != 0 {
            return None;
        }
        let code = if code1 != 0 { code1 } else { code2 };
        let (x, y) = if code & CODE_TOP != 0 {
            (S::interpolate(x1, x2, top, y1, y2), top)
        } else if code & CODE_BOTTOM != 0 {
            (S::interpolate(x1, x2, bottom, y1, y2), bottom)
        } else if code & CODE_LEFT != 0 {
            (left, S::interpolate(y1, y2, left, x1, x2))
        } else {
            (right, S::interpolate(y1, y2, right, x1, x2))
        };
        if code1 != 0 {
            (x1, y1) = (x, y);
            code1 = outcode(x, y);
        } else {
            (x2, y2) = (x, y);
            code2 = outcode(x, y);
        }
    }
    Some(((x1, y1), (x2, y2)))
}

// -- Point --

impl Point {
    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl FPoint {
    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// -- Rect --

impl Rect {
    /// Creates a rectangle from its origin and size.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns `true` if the rectangle has no area (`w <= 0` or `h <= 0`).
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Returns `true` if `p` lies within the half-open bounds
    /// `[x, x+w)` × `[y, y+h)`.
    #[inline]
    #[must_use]
    pub const fn contains_point(&self, p: Point) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && px < x + self.w as i64 && py >= y && py < y + self.h as i64
    }

    /// Returns `true` if any coordinate is large enough that edge arithmetic
    /// could overflow `i32`.
    ///
    /// Intersection, union, enclosing-points and line clipping refuse such
    /// rectangles.
    #[inline]
    #[must_use]
    pub const fn can_overflow(&self) -> bool {
        self.x <= i32::MIN / 2
            || self.x >= i32::MAX / 2
            || self.y <= i32::MIN / 2
            || self.y >= i32::MAX / 2
            || self.w >= i32::MAX / 2
            || self.h >= i32::MAX / 2
    }

    /// Returns `true` if the two rectangles share at least one pixel.
    ///
    /// Empty rectangles never intersect. Returns `false` if either rectangle
    /// [could overflow](Self::can_overflow).
    #[must_use]
    pub fn has_intersection(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns the overlapping region, or `None` if the rectangles do not
    /// overlap, either is empty, or either [could overflow](Self::can_overflow).
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.can_overflow() || other.can_overflow() || self.is_empty() || other.is_empty() {
            return None;
        }
        intersect(self.parts(), other.parts()).map(Self::from_parts)
    }

    /// Returns the smallest rectangle containing both rectangles.
    ///
    /// An empty input contributes nothing; the union of two empty rectangles
    /// is the zero rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`RectError::Overflow`] if either non-empty input
    /// [could overflow](Self::can_overflow) or the union does not fit `i32`.
    pub fn union(&self, other: &Self) -> Result<Self, RectError> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ok(Self::default()),
            (true, false) => Ok(*other),
            (false, true) => Ok(*self),
            (false, false) => {
                if self.can_overflow() || other.can_overflow() {
                    return Err(RectError::Overflow);
                }
                unite(self.parts(), other.parts())
                    .map(Self::from_parts)
                    .ok_or(RectError::Overflow)
            }
        }
    }

    /// Returns the smallest rectangle enclosing every point in `points` that
    /// falls inside `clip` (or every point, when `clip` is `None`).
    ///
    /// Returns `None` when no point qualifies, `points` is empty, `clip` is
    /// empty or [could overflow](Self::can_overflow), or the result does not
    /// fit `i32`.
    #[must_use]
    pub fn enclosing_points(points: &[Point], clip: Option<&Self>) -> Option<Self> {
        if let Some(clip) = clip {
            if clip.is_empty() || clip.can_overflow() {
                return None;
            }
        }
        enclose(points.iter().map(|p| (p.x, p.y)), clip.map(Self::parts)).map(Self::from_parts)
    }

    /// Clips the segment `start`–`end` to this rectangle.
    ///
    /// Returns the clipped endpoints, or `None` if the segment lies entirely
    /// outside, the rectangle is empty, or it [could overflow](Self::can_overflow).
    #[must_use]
    pub fn clip_line(&self, start: Point, end: Point) -> Option<(Point, Point)> {
        if self.is_empty() || self.can_overflow() {
            return None;
        }
        clip_segment(self.parts(), (start.x, start.y), (end.x, end.y))
            .map(|((x1, y1), (x2, y2))| (Point::new(x1, y1), Point::new(x2, y2)))
    }

    /// Converts to a float rectangle.
    #[inline]
    #[must_use]
    pub const fn to_frect(&self) -> FRect {
        FRect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }

    const fn parts(&self) -> [i32; 4] {
        [self.x, self.y, self.w, self.h]
    }

    const fn from_parts([x, y, w, h]: [i32; 4]) -> Self {
        Self { x, y, w, h }
    }
}

// -- FRect --

impl FRect {
    /// Creates a rectangle from its origin and size.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns `true` if the rectangle is empty (`w < 0` or `h < 0`).
    ///
    /// A zero-area float rectangle is *not* empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.w < 0.0 || self.h < 0.0
    }

    /// Returns `true` if `p` lies within the closed bounds
    /// `[x, x+w]` × `[y, y+h]`.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, p: FPoint) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    /// Returns `true` if every field differs by at most `epsilon`.
    #[must_use]
    pub fn approx_eq_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        let close = |a: f32, b: f32| {
            let d = a - b;
            d <= epsilon && -d <= epsilon
        };
        close(self.x, other.x)
            && close(self.y, other.y)
            && close(self.w, other.w)
            && close(self.h, other.h)
    }

    /// Returns `true` if every field differs by at most [`f32::EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_epsilon(other, f32::EPSILON)
    }

    /// Returns `true` if the two rectangles overlap; touching edges count.
    #[must_use]
    pub fn has_intersection(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns the overlapping region, or `None` if the rectangles do not
    /// overlap or either is empty.
    ///
    /// Rectangles that only touch produce a zero-width or zero-height result.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        intersect(self.parts(), other.parts()).map(Self::from_parts)
    }

    /// Returns the smallest rectangle containing both rectangles.
    ///
    /// An empty input contributes nothing; the union of two empty rectangles
    /// is the zero rectangle.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Self::default(),
            (true, false) => *other,
            (false, true) => *self,
            (false, false) => {
                unite(self.parts(), other.parts()).map_or_else(Self::default, Self::from_parts)
            }
        }
    }

    /// Returns the smallest rectangle enclosing every point in `points` that
    /// falls inside `clip` (or every point, when `clip` is `None`).
    ///
    /// Returns `None` when no point qualifies, `points` is empty, or `clip`
    /// is empty.
    #[must_use]
    pub fn enclosing_points(points: &[FPoint], clip: Option<&Self>) -> Option<Self> {
        if clip.is_some_and(Self::is_empty) {
            return None;
        }
        enclose(points.iter().map(|p| (p.x, p.y)), clip.map(Self::parts)).map(Self::from_parts)
    }

    /// Clips the segment `start`–`end` to this rectangle.
    ///
    /// Returns the clipped endpoints, or `None` if the segment lies entirely
    /// outside or the rectangle is empty.
    #[must_use]
    pub fn clip_line(&self, start: FPoint, end: FPoint) -> Option<(FPoint, FPoint)> {
        if self.is_empty() {
            return None;
        }
        clip_segment(self.parts(), (start.x, start.y), (end.x, end.y))
            .map(|((x1, y1), (x2, y2))| (FPoint::new(x1, y1), FPoint::new(x2, y2)))
    }

    const fn parts(&self) -> [f32; 4] {
        [self.x, self.y, self.w, self.h]
    }

    const fn from_parts([x, y, w, h]: [f32; 4]) -> Self {
        Self { x, y, w, h }
    }
}

impl From<Rect> for FRect {
    fn from(rect: Rect) -> Self {
        rect.to_frect()
    }
}

impl From<Point> for FPoint {
    fn from(p: Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

// -- kurbo interop --

impl From<FRect> for kurbo::Rect {
    fn from(r: FRect) -> Self {
        let (x, y) = (f64::from(r.x), f64::from(r.y));
        Self::new(x, y, x + f64::from(r.w), y + f64::from(r.h))
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        let (x, y) = (f64::from(r.x), f64::from(r.y));
        Self::new(x, y, x + f64::from(r.w), y + f64::from(r.h))
    }
}

impl From<kurbo::Rect> for FRect {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "native rectangles are single precision"
    )]
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0 as f32, r.y0 as f32, r.width() as f32, r.height() as f32)
    }
}

impl From<FPoint> for kurbo::Point {
    fn from(p: FPoint) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<kurbo::Point> for FPoint {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "native points are single precision"
    )]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_point_in_rect_is_half_open() {
        let r = Rect::new(0, 0, 1, 1);
        assert!(r.contains_point(Point::new(0, 0)), "origin is inside");
        assert!(!r.contains_point(Point::new(0, 1)), "far edge is outside");
        assert!(!r.contains_point(Point::new(1, 0)), "far edge is outside");
        assert!(!r.contains_point(Point::new(-1, 0)), "left of origin");
    }

    #[test]
    fn float_point_in_rect_is_closed() {
        let r = FRect::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.contains_point(FPoint::new(0.0, 1.0)), "far edge is inside");
        assert!(!r.contains_point(FPoint::new(0.0, 2.0)), "beyond far edge");
    }

    #[test]
    fn contains_point_does_not_overflow() {
        let r = Rect::new(i32::MAX - 1, 0, i32::MAX, 1);
        assert!(r.contains_point(Point::new(i32::MAX, 0)), "wide arithmetic");
    }

    #[test]
    fn emptiness_differs_between_flavors() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());

        assert!(!FRect::new(0.0, 0.0, 0.0, 0.0).is_empty());
        assert!(FRect::new(0.0, 0.0, -0.5, 1.0).is_empty());
    }

    #[test]
    fn int_equality_is_exact() {
        assert_eq!(Rect::new(1, 2, 3, 4), Rect::new(1, 2, 3, 4));
        assert_ne!(Rect::new(1, 2, 3, 4), Rect::new(1, 2, 3, 5));
    }

    #[test]
    fn float_equality_uses_epsilon() {
        let a = FRect::new(0.0, 0.0, 1.0, 1.0);
        let b = FRect::new(0.0, 0.0, 1.000_000_1, 1.0);
        assert!(a.approx_eq(&b), "delta below machine epsilon");
        let c = FRect::new(0.0, 0.0, 1.01, 1.0);
        assert!(!a.approx_eq(&c), "delta of 0.01 is not equal");
        assert!(a.approx_eq_epsilon(&c, 0.02), "explicit epsilon widens");
    }

    #[test]
    fn float_equality_rejects_nan() {
        let a = FRect::new(f32::NAN, 0.0, 1.0, 1.0);
        assert!(!a.approx_eq(&a), "NaN never compares equal");
    }

    #[test]
    fn int_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
        assert!(a.has_intersection(&b));
    }

    #[test]
    fn int_touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersection(&b), None);
        assert!(!a.has_intersection(&b));
    }

    #[test]
    fn float_touching_rects_intersect_with_zero_width() {
        let a = FRect::new(0.0, 0.0, 10.0, 10.0);
        let b = FRect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(FRect::new(10.0, 0.0, 0.0, 10.0)));
        assert!(a.has_intersection(&b));
    }

    #[test]
    fn empty_rects_never_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(2, 2, 0, 4);
        assert!(!a.has_intersection(&empty));
        let fa = FRect::new(0.0, 0.0, 10.0, 10.0);
        let fempty = FRect::new(2.0, 2.0, -1.0, 4.0);
        assert!(!fa.has_intersection(&fempty));
    }

    #[test]
    fn overflowing_rects_are_refused() {
        let huge = Rect::new(0, 0, i32::MAX, 10);
        let small = Rect::new(0, 0, 10, 10);
        assert!(huge.can_overflow());
        assert!(!huge.has_intersection(&small));
        assert_eq!(huge.union(&small), Err(RectError::Overflow));
    }

    #[test]
    fn union_skips_empty_inputs() {
        let a = Rect::new(1, 1, 2, 2);
        let empty = Rect::new(50, 50, 0, 0);
        assert_eq!(a.union(&empty), Ok(a));
        assert_eq!(empty.union(&a), Ok(a));
        assert_eq!(empty.union(&empty), Ok(Rect::default()));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, -3, 1, 1);
        assert_eq!(a.union(&b), Ok(Rect::new(0, -3, 6, 5)));

        let fa = FRect::new(0.0, 0.0, 2.0, 2.0);
        let fb = FRect::new(5.0, -3.0, 1.0, 1.0);
        assert_eq!(fa.union(&fb), FRect::new(0.0, -3.0, 6.0, 5.0));
    }

    #[test]
    fn union_result_overflow_is_reported() {
        let a = Rect::new(i32::MIN / 2 + 1, 0, 1, 1);
        let b = Rect::new(i32::MAX / 2 - 1, 0, i32::MAX / 2 - 1, 1);
        assert_eq!(a.union(&b), Err(RectError::Overflow));
    }

    #[test]
    fn enclosing_points_int_adds_one() {
        let pts = [Point::new(1, 1), Point::new(4, 3), Point::new(2, 6)];
        assert_eq!(
            Rect::enclosing_points(&pts, None),
            Some(Rect::new(1, 1, 4, 6))
        );
    }

    #[test]
    fn enclosing_points_float_is_tight() {
        let pts = [FPoint::new(1.0, 1.0), FPoint::new(4.0, 3.0)];
        assert_eq!(
            FRect::enclosing_points(&pts, None),
            Some(FRect::new(1.0, 1.0, 3.0, 2.0))
        );
    }

    #[test]
    fn enclosing_points_respects_clip() {
        let pts = [Point::new(1, 1), Point::new(40, 3), Point::new(2, 6)];
        let clip = Rect::new(0, 0, 10, 10);
        assert_eq!(
            Rect::enclosing_points(&pts, Some(&clip)),
            Some(Rect::new(1, 1, 2, 6))
        );

        let outside = [Point::new(20, 20)];
        assert_eq!(Rect::enclosing_points(&outside, Some(&clip)), None);
        assert_eq!(
            Rect::enclosing_points(&pts, Some(&Rect::new(0, 0, 0, 0))),
            None
        );
        assert_eq!(Rect::enclosing_points(&[], None), None);
    }

    #[test]
    fn enclosing_points_clip_far_edge_follows_flavor() {
        let clip = Rect::new(0, 0, 10, 10);
        assert_eq!(Rect::enclosing_points(&[Point::new(10, 5)], Some(&clip)), None);

        let fclip = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            FRect::enclosing_points(&[FPoint::new(10.0, 5.0)], Some(&fclip)),
            Some(FRect::new(10.0, 5.0, 0.0, 0.0))
        );
    }

    #[test]
    fn clip_line_inside_is_unchanged() {
        let r = Rect::new(0, 0, 10, 10);
        let (a, b) = (Point::new(1, 1), Point::new(8, 5));
        assert_eq!(r.clip_line(a, b), Some((a, b)));
    }

    #[test]
    fn clip_line_outside_is_rejected() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r.clip_line(Point::new(-5, -5), Point::new(-1, 20)), None);
        assert_eq!(r.clip_line(Point::new(20, 0), Point::new(30, 9)), None);
    }

    #[test]
    fn clip_horizontal_and_vertical_lines() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            r.clip_line(Point::new(-5, 3), Point::new(15, 3)),
            Some((Point::new(0, 3), Point::new(9, 3)))
        );
        assert_eq!(
            r.clip_line(Point::new(4, -5), Point::new(4, 15)),
            Some((Point::new(4, 0), Point::new(4, 9)))
        );
    }

    #[test]
    fn clip_diagonal_line() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            r.clip_line(Point::new(-5, -5), Point::new(20, 20)),
            Some((Point::new(0, 0), Point::new(9, 9)))
        );

        let fr = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            fr.clip_line(FPoint::new(-5.0, -5.0), FPoint::new(20.0, 20.0)),
            Some((FPoint::new(0.0, 0.0), FPoint::new(10.0, 10.0)))
        );
    }

    #[test]
    fn clip_line_missing_a_corner() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r.clip_line(Point::new(-10, 5), Point::new(5, -10)), None);
    }

    #[test]
    fn clip_line_with_extreme_endpoints() {
        let far = Rect::new(0, (1 << 30) - 10, 10, 5);
        assert_eq!(
            far.clip_line(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            None
        );

        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            r.clip_line(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            Some((Point::new(0, 0), Point::new(9, 9)))
        );
        assert_eq!(
            r.clip_line(Point::new(i32::MIN, 5), Point::new(i32::MAX, 5)),
            Some((Point::new(0, 5), Point::new(9, 5)))
        );
    }

    #[test]
    fn clip_line_against_empty_rect() {
        assert_eq!(
            Rect::new(0, 0, 0, 10).clip_line(Point::new(0, 0), Point::new(1, 1)),
            None
        );
    }

    #[test]
    fn kurbo_round_trip() {
        let r = FRect::new(1.0, 2.0, 3.0, 4.0);
        let k: kurbo::Rect = r.into();
        assert_eq!(k, kurbo::Rect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(FRect::from(k), r);

        let p: kurbo::Point = Point::new(3, -4).into();
        assert_eq!(p, kurbo::Point::new(3.0, -4.0));
    }

    #[test]
    fn layout_matches_c() {
        assert_eq!(size_of::<Point>(), 8);
        assert_eq!(size_of::<FPoint>(), 8);
        assert_eq!(size_of::<Rect>(), 16);
        assert_eq!(size_of::<FRect>(), 16);
        assert_eq!(align_of::<Rect>(), 4);
        let rect = Rect::new(1, 0, 0, 0);
        let bytes = bytemuck::bytes_of(&rect);
        assert_eq!(bytes.len(), 16);
    }
}
