//! Target aspect ratios.
//!
//! The ratio is kept as two positive integers so that "perfect pixel ratio"
//! checks stay exact.

use crate::geometry::Size2D;

/// Width:height ratio with both terms `>= 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Size2D", into = "Size2D")
)]
pub struct AspectRatio {
    width: i32,
    height: i32,
}

/// Aspect ratio construction or parse error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AspectError {
    /// A term was zero or negative.
    NonPositive,
    /// The text was not of the form `W:H`, `WxH` or `W/H` with integer terms.
    Malformed,
}

impl core::fmt::Display for AspectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonPositive => f.write_str("aspect ratio terms must be positive"),
            Self::Malformed => f.write_str("aspect ratio must look like W:H, WxH or W/H"),
        }
    }
}

impl core::error::Error for AspectError {}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl AspectRatio {
    /// 1:1, the fallback for unusable input.
    pub const SQUARE: Self = Self {
        width: 1,
        height: 1,
    };

    /// Create a ratio. Both terms must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, AspectError> {
        if width <= 0 || height <= 0 {
            return Err(AspectError::NonPositive);
        }
        Ok(Self { width, height })
    }

    /// Build a ratio from two free-text fields, never failing.
    ///
    /// Terms below 1 are raised to 1. If either field isn't an integer the
    /// result is [`SQUARE`](Self::SQUARE).
    pub fn from_input(width: &str, height: &str) -> Self {
        Self::from_input_or(width, height, Self::SQUARE)
    }

    /// Like [`from_input`](Self::from_input) with a caller-chosen fallback,
    /// e.g. the image's [`native`](Self::native) ratio.
    pub fn from_input_or(width: &str, height: &str, fallback: Self) -> Self {
        match (width.trim().parse::<i32>(), height.trim().parse::<i32>()) {
            (Ok(w), Ok(h)) => Self {
                width: w.max(1),
                height: h.max(1),
            },
            _ => fallback,
        }
    }

    /// Strictly parse `W:H`, `WxH` or `W/H`.
    pub fn parse(text: &str) -> Result<Self, AspectError> {
        let (w, h) = text
            .trim()
            .split_once([':', 'x', 'X', '/'])
            .ok_or(AspectError::Malformed)?;
        let w = w.trim().parse::<i32>().map_err(|_| AspectError::Malformed)?;
        let h = h.trim().parse::<i32>().map_err(|_| AspectError::Malformed)?;
        Self::new(w, h)
    }

    /// The ratio of an image of the given size, reduced to lowest terms.
    ///
    /// Degenerate sizes give [`SQUARE`](Self::SQUARE).
    pub fn native(size: Size2D) -> Self {
        if !size.is_positive() {
            return Self::SQUARE;
        }
        let g = gcd(size.width, size.height);
        Self {
            width: size.width / g,
            height: size.height / g,
        }
    }

    pub fn width(self) -> i32 {
        self.width
    }

    pub fn height(self) -> i32 {
        self.height
    }

    /// The ratio as a size, e.g. `3:2` -> `3x2`.
    pub fn as_size(self) -> Size2D {
        Size2D::new(self.width, self.height)
    }

    /// Height matching `width` at this ratio, possibly fractional.
    pub fn height_for_width(self, width: i32) -> f64 {
        width as f64 * self.height as f64 / self.width as f64
    }

    /// Whether `width` maps to a whole number of pixels in height.
    pub fn has_whole_height(self, width: i32) -> bool {
        (width as i64 * self.height as i64) % self.width as i64 == 0
    }
}

impl core::str::FromStr for AspectRatio {
    type Err = AspectError;
    fn from_str(text: &str) -> Result<Self, AspectError> {
        Self::parse(text)
    }
}

impl TryFrom<Size2D> for AspectRatio {
    type Error = AspectError;
    fn try_from(size: Size2D) -> Result<Self, AspectError> {
        Self::new(size.width, size.height)
    }
}

impl From<AspectRatio> for Size2D {
    fn from(aspect: AspectRatio) -> Self {
        aspect.as_size()
    }
}

fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
