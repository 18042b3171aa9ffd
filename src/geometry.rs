//! Integer 2D vectors and rectangles.
//!
//! [`Size2D`] is used for sizes, offsets, and deltas alike. [`Box2D`] is an
//! offset plus a size, where the size may be negative to describe a box
//! extending backward from its anchor corner.
//!
//! Neither type knows which coordinate space it lives in. See
//! [`space`](crate::space) for the tagged wrappers used by the selection code.
//!
//! # Example
//!
//! ```
//! use zencrop::{Box2D, Size2D};
//!
//! let b = Box2D::new(Size2D::new(10, 10), Size2D::new(100, 100));
//! let c = b.clamped(Size2D::new(50, 50));
//! assert_eq!(c.offset, Size2D::new(-50, -50));
//! assert_eq!(c.size, b.size);
//! ```

use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Width × height, or an x/y offset, in integer pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size2D {
    pub width: i32,
    pub height: i32,
}

impl Size2D {
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Offset that centers `source` within `destination`.
    ///
    /// Negative when `source` is larger. Truncates toward zero.
    pub fn center(source: Size2D, destination: Size2D) -> Size2D {
        (destination - source) / 2
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Whether both components are strictly positive.
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn to_f64(self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }
}

impl From<(i32, i32)> for Size2D {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

impl Add for Size2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul for Size2D {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.width * rhs.width, self.height * rhs.height)
    }
}

/// # Panics
///
/// Panics if either component of `rhs` is zero.
impl Div for Size2D {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.width / rhs.width, self.height / rhs.height)
    }
}

impl Mul<i32> for Size2D {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<i32> for Size2D {
    type Output = Self;
    fn div(self, rhs: i32) -> Self {
        Self::new(self.width / rhs, self.height / rhs)
    }
}

impl Neg for Size2D {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.width, -self.height)
    }
}

/// A rectangle: top-left `offset` plus `size`.
///
/// `size` may be negative, in which case `offset` is the anchor corner and the
/// box extends up/left from it. [`positive_size`](Self::positive_size)
/// normalizes such a box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box2D {
    pub offset: Size2D,
    pub size: Size2D,
}

impl Box2D {
    /// Create a box from integer offset and size.
    pub const fn new(offset: Size2D, size: Size2D) -> Self {
        Self { offset, size }
    }

    /// Create a box from fractional values.
    ///
    /// The offset is truncated toward zero and the size is rounded up, so a
    /// fractional box never loses coverage on its far edge.
    pub fn from_f64(offset: (f64, f64), size: (f64, f64)) -> Self {
        Self {
            offset: Size2D::new(to_i32(offset.0.trunc()), to_i32(offset.1.trunc())),
            size: Size2D::new(to_i32(size.0.ceil()), to_i32(size.1.ceil())),
        }
    }

    /// Same size, new offset.
    pub const fn with_offset(self, offset: Size2D) -> Self {
        Self {
            offset,
            size: self.size,
        }
    }

    /// Same offset, new size.
    pub const fn with_size(self, size: Size2D) -> Self {
        Self {
            offset: self.offset,
            size,
        }
    }

    /// Move the box, keeping its size, so that it lies within `(0, 0)..container`.
    ///
    /// The far edge is pulled back first, then the near edge pushed forward.
    /// A box larger than the container on some axis can't fit; on that axis it
    /// ends up with its far edge at the container edge minus the overflow.
    pub fn clamped(self, container: Size2D) -> Self {
        let delta_over = (self.offset + self.size).max(container) - container;
        let delta_under = self.offset.min(Size2D::ZERO);
        self.with_offset(self.offset - delta_over - delta_under)
    }

    /// Explicit `(min, max)` corners, regardless of the sign of `size`.
    pub fn min_max(self) -> (Size2D, Size2D) {
        let far = self.offset + self.size;
        (self.offset.min(far), self.offset.max(far))
    }

    /// Box spanning `min..max`.
    pub fn from_min_max(min: Size2D, max: Size2D) -> Self {
        Self::new(min, max - min)
    }

    /// Equivalent box with a non-negative size.
    pub fn positive_size(self) -> Self {
        let (min, max) = self.min_max();
        Self::from_min_max(min, max)
    }

    /// `[left, top, right, bottom]`.
    pub fn coords(self) -> [i32; 4] {
        let far = self.offset + self.size;
        [self.offset.width, self.offset.height, far.width, far.height]
    }

    /// Remap the box from a coordinate system of extent `source` to one of
    /// extent `destination`, scaling each axis independently.
    ///
    /// An axis with zero `source` extent has no defined ratio and is left
    /// unscaled.
    pub fn scaled(self, source: Size2D, destination: Size2D) -> Self {
        let sx = |v: i32| scale_axis(v, source.width, destination.width);
        let sy = |v: i32| scale_axis(v, source.height, destination.height);
        Self::from_f64(
            (sx(self.offset.width), sy(self.offset.height)),
            (sx(self.size.width), sy(self.size.height)),
        )
    }

    /// Middle vertical and horizontal thirds, for rule-of-thirds guides.
    ///
    /// Returns `(vertical_band, horizontal_band)`. The band edges lie on the
    /// third lines.
    pub fn thirds(self) -> (Self, Self) {
        let third = self.size / 3;
        let vertical = Self::new(
            Size2D::new(self.offset.width + third.width, self.offset.height),
            Size2D::new(third.width, self.size.height),
        );
        let horizontal = Self::new(
            Size2D::new(self.offset.width, self.offset.height + third.height),
            Size2D::new(self.size.width, third.height),
        );
        (vertical, horizontal)
    }

    /// Intersection with `(0, 0)..container`. Empty intersections have zero size.
    pub fn clipped(self, container: Size2D) -> Self {
        let (min, max) = self.min_max();
        let min = min.max(Size2D::ZERO).min(container);
        let max = max.min(container).max(min);
        Self::from_min_max(min, max)
    }
}

impl Add<Size2D> for Box2D {
    type Output = Self;
    fn add(self, rhs: Size2D) -> Self {
        self.with_offset(self.offset + rhs)
    }
}

impl Sub<Size2D> for Box2D {
    type Output = Self;
    fn sub(self, rhs: Size2D) -> Self {
        self.with_offset(self.offset - rhs)
    }
}

/// Translates by the other box's offset; its size is ignored.
impl Add for Box2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self + rhs.offset
    }
}

/// Translates by the negated offset of the other box; its size is ignored.
impl Sub for Box2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self - rhs.offset
    }
}

fn scale_axis(v: i32, source: i32, destination: i32) -> f64 {
    if source == 0 {
        return v as f64;
    }
    v as f64 * destination as f64 / source as f64
}

// Float to int casts saturate, and NaN maps to 0.
fn to_i32(v: f64) -> i32 {
    v as i32
}
