//! User preferences for selection and cropping.
//!
//! These are plain values handed to [`Selection`](crate::Selection) and
//! [`Job`](crate::Job). Loading and saving them is up to the caller; with the
//! `serde` feature every type here is (de)serializable, with missing fields
//! taking their defaults.
//!
//! ```
//! use zencrop::{AspectRatio, SelectionConfig, SelectionMode};
//!
//! let config = SelectionConfig::default()
//!     .mode(SelectionMode::ClickDrag)
//!     .aspect(AspectRatio::new(16, 9).unwrap())
//!     .fixed_aspect(false);
//! assert!(config.perfect_pixel_ratio);
//! ```

use crate::aspect::AspectRatio;
use crate::geometry::Size2D;

/// How the pointer shapes the crop rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SelectionMode {
    /// Press at one corner, drag to the opposite corner. Shift moves the
    /// selection instead.
    ClickDrag,
    /// A fixed-aspect rectangle centered on the pointer, sized with the wheel.
    #[default]
    Scroll,
}

/// 8-bit sRGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb {
    pub const YELLOW: Self = Self {
        r: 255,
        g: 255,
        b: 0,
    };
}

impl Default for Srgb {
    fn default() -> Self {
        Self::YELLOW
    }
}

/// Selection behavior.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SelectionConfig {
    pub mode: SelectionMode,
    /// Target aspect for scroll mode, and for click-drag when `fixed_aspect` is set.
    pub aspect: AspectRatio,
    /// Force click-drag selections to `aspect`.
    pub fixed_aspect: bool,
    /// Only allow scroll sizes whose height is a whole number of pixels.
    pub perfect_pixel_ratio: bool,
    /// Draw rule-of-thirds guides.
    pub show_guides: bool,
    /// Outline color of the selection and guides.
    pub color: Srgb,
    /// Coarse wheel step when growing the scroll selection.
    pub grow_factor: f64,
    /// Coarse wheel step when shrinking the scroll selection.
    pub shrink_factor: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Scroll,
            aspect: AspectRatio::new(3, 2).unwrap_or_default(),
            fixed_aspect: true,
            perfect_pixel_ratio: true,
            show_guides: false,
            color: Srgb::YELLOW,
            grow_factor: 1.1,
            shrink_factor: 0.9,
        }
    }
}

impl SelectionConfig {
    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn fixed_aspect(mut self, fixed: bool) -> Self {
        self.fixed_aspect = fixed;
        self
    }

    pub fn perfect_pixel_ratio(mut self, enabled: bool) -> Self {
        self.perfect_pixel_ratio = enabled;
        self
    }

    pub fn show_guides(mut self, enabled: bool) -> Self {
        self.show_guides = enabled;
        self
    }

    pub fn color(mut self, color: Srgb) -> Self {
        self.color = color;
        self
    }

    /// Set the coarse wheel step factors, e.g. `(1.1, 0.9)`.
    pub fn scroll_factors(mut self, grow: f64, shrink: f64) -> Self {
        self.grow_factor = grow;
        self.shrink_factor = shrink;
        self
    }
}

/// Post-crop processing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CropperConfig {
    /// Shrink cropped images to fit within `resize_width` × `resize_height`.
    pub resize: bool,
    pub resize_width: i32,
    pub resize_height: i32,
    /// Ask before a job overwrites an existing destination file.
    pub confirm_overwrite: bool,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            resize: true,
            resize_width: 1920,
            resize_height: 1080,
            confirm_overwrite: true,
        }
    }
}

impl CropperConfig {
    pub fn confirm_overwrite(mut self, confirm: bool) -> Self {
        self.confirm_overwrite = confirm;
        self
    }

    /// Resize bounds, each dimension at least 1.
    pub fn resize_bounds(&self) -> Size2D {
        Size2D::new(self.resize_width.max(1), self.resize_height.max(1))
    }

    /// Bounding size for the post-crop resize, or `None` when disabled.
    pub fn resize_within(&self) -> Option<Size2D> {
        self.resize.then(|| self.resize_bounds())
    }

    /// Whether the user must be asked before writing to a destination.
    pub fn needs_overwrite_confirmation(&self, destination_exists: bool) -> bool {
        self.confirm_overwrite && destination_exists
    }
}

/// All persisted preferences.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub selection: SelectionConfig,
    pub cropper: CropperConfig,
}
