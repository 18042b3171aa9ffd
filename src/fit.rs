//! CSS `object-fit` style placement of one size inside another.
//!
//! Computes where a source of a given size lands inside a destination area
//! under each fit policy. Pure geometry, no allocations.
//!
//! # Example
//!
//! ```
//! use zencrop::{Box2D, Placement, Size2D};
//!
//! // 16:9 source letterboxed into a square area
//! let b = Box2D::contain(Size2D::new(1920, 1080), Size2D::new(800, 800), Placement::Center);
//! assert_eq!(b.offset, Size2D::new(0, 175));
//! assert_eq!(b.size, Size2D::new(800, 450));
//! ```

use crate::geometry::{Box2D, Size2D};

/// How a source is scaled into a destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectFit {
    /// Stretch to exactly the destination, ignoring aspect ratio.
    Fill,
    /// Preserve aspect ratio, fit entirely within the destination.
    Contain,
    /// Preserve aspect ratio, fill the destination entirely. May overflow it.
    Cover,
    /// Like [`Contain`](Self::Contain), but never upscales.
    ScaleDown,
}

/// Where a fitted box sits within its destination.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Centered on both axes (letterboxed).
    #[default]
    Center,
    /// Anchored at `(0, 0)`.
    Origin,
}

/// Fit computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Source width or height is zero or negative.
    NonPositiveSource,
}

impl core::fmt::Display for FitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonPositiveSource => f.write_str("source size must be positive on both axes"),
        }
    }
}

impl core::error::Error for FitError {}

impl ObjectFit {
    /// Place `source` within `destination`.
    ///
    /// `destination` may be negative on an axis to flip that axis; the scale
    /// is computed from magnitudes.
    pub fn place(
        self,
        source: Size2D,
        destination: Size2D,
        placement: Placement,
    ) -> Result<Box2D, FitError> {
        if !source.is_positive() {
            return Err(FitError::NonPositiveSource);
        }
        Ok(fit_box(self, source, destination, placement))
    }
}

/// Fit constructors.
///
/// # Panics
///
/// All of these panic if `source` is not positive on both axes. Callers must
/// validate image dimensions first, or use [`ObjectFit::place`].
impl Box2D {
    /// Stretch to exactly `destination`, at the origin.
    pub fn fill(source: Size2D, destination: Size2D) -> Self {
        assert_positive(source);
        fit_box(ObjectFit::Fill, source, destination, Placement::Origin)
    }

    /// Largest aspect-preserving box that fits within `destination`.
    pub fn contain(source: Size2D, destination: Size2D, placement: Placement) -> Self {
        assert_positive(source);
        fit_box(ObjectFit::Contain, source, destination, placement)
    }

    /// Smallest aspect-preserving box that covers `destination`.
    pub fn cover(source: Size2D, destination: Size2D, placement: Placement) -> Self {
        assert_positive(source);
        fit_box(ObjectFit::Cover, source, destination, placement)
    }

    /// [`contain`](Self::contain), but never larger than `source`.
    pub fn scale_down(source: Size2D, destination: Size2D, placement: Placement) -> Self {
        assert_positive(source);
        fit_box(ObjectFit::ScaleDown, source, destination, placement)
    }
}

fn assert_positive(source: Size2D) {
    assert!(
        source.is_positive(),
        "fit source must be positive, got {}x{}",
        source.width,
        source.height
    );
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Requires a positive `source`.
fn fit_box(mode: ObjectFit, source: Size2D, destination: Size2D, placement: Placement) -> Box2D {
    if mode == ObjectFit::Fill {
        return Box2D::new(Size2D::ZERO, destination);
    }

    let (num, den) = scale_ratio(mode, source, destination);
    let w = sign(destination.width) * (source.width as i64 * num) as f64 / den as f64;
    let h = sign(destination.height) * (source.height as i64 * num) as f64 / den as f64;

    let offset = match placement {
        Placement::Center => {
            let (dw, dh) = destination.to_f64();
            ((dw - w) / 2.0, (dh - h) / 2.0)
        }
        Placement::Origin => (0.0, 0.0),
    };
    Box2D::from_f64(offset, (w, h))
}

/// Scale factor as an exact fraction `num / den`.
///
/// Uses cross-multiplication to pick the constraining axis, so that axis maps
/// exactly onto the destination extent without float error.
fn scale_ratio(mode: ObjectFit, source: Size2D, destination: Size2D) -> (i64, i64) {
    let sw = source.width as i64;
    let sh = source.height as i64;
    let dw = destination.width.unsigned_abs() as i64;
    let dh = destination.height.unsigned_abs() as i64;

    // dw / sw <= dh / sh
    let width_ratio_smaller = dw * sh <= dh * sw;
    let (min, max) = if width_ratio_smaller {
        ((dw, sw), (dh, sh))
    } else {
        ((dh, sh), (dw, sw))
    };

    match mode {
        ObjectFit::Cover => max,
        ObjectFit::ScaleDown if min.0 >= min.1 => (1, 1),
        _ => min,
    }
}

fn sign(v: i32) -> f64 {
    v.signum() as f64
}
