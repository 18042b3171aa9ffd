//! Interactive crop selection.
//!
//! [`Selection`] owns the per-session pointer state and turns it into a crop
//! rectangle in original-image pixels. It is driven by the display surface's
//! events: pointer down/drag, wheel steps, area resizes and image loads.
//!
//! Two modes share the state and can be switched at any time without losing
//! either mode's progress:
//!
//! - **Scroll**: a rectangle of the target aspect ratio, centered on the last
//!   pointer position, clamped to the image. The wheel grows or shrinks it.
//! - **Click-drag**: the rectangle spans the press point and the current
//!   pointer position. Holding shift moves the existing selection instead.
//!   With a fixed aspect ratio, the rectangle grows from its anchor corner
//!   until it has that ratio and covers the dragged extent.
//!
//! # Example
//!
//! ```
//! use zencrop::{Modifiers, Position, Selection, SelectionConfig, SelectionMode, Size2D};
//!
//! let config = SelectionConfig::default()
//!     .mode(SelectionMode::ClickDrag)
//!     .fixed_aspect(false);
//! let mut selection = Selection::new(config);
//! selection.resize_area(Size2D::new(800, 800));
//! selection.load_image(Size2D::new(2000, 1000)).unwrap();
//!
//! // The preview is 800x400, centered vertically at y=200, at 1/2.5 scale.
//! selection.pointer_down(Position::new(100, 300));
//! selection.pointer_drag(Position::new(300, 400), Modifiers::NONE);
//!
//! let crop = selection.image_crop_box().unwrap();
//! assert_eq!(crop.coords(), [250, 250, 750, 500]);
//! ```

use crate::config::{SelectionConfig, SelectionMode};
use crate::fit::{FitError, Placement};
use crate::geometry::{Box2D, Size2D};
use crate::space::{Display, Image, Position, Preview, Region, Viewport};

/// Modifier keys held during a pointer or wheel event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Click-drag: move the selection rather than resize it.
    /// Scroll: step one pixel at a time.
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false };
    pub const SHIFT: Self = Self { shift: true };
}

/// Mouse wheel direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Away from the user. Shrinks the selection.
    Up,
    /// Toward the user. Grows the selection.
    Down,
}

/// Result of a scroll-size step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollStep {
    /// The crop width changed to this value.
    Resized(i32),
    /// The width is at its bound (image width, or 1 pixel).
    AtLimit(i32),
}

impl ScrollStep {
    /// The crop width after the step.
    pub fn width(self) -> i32 {
        match self {
            Self::Resized(w) | Self::AtLimit(w) => w,
        }
    }
}

const INITIAL_SELECTION: Region<Display> =
    Region::new(Box2D::new(Size2D::ZERO, Size2D::new(1, 1)));

/// Selection state for one cropping session.
#[derive(Clone, Debug)]
pub struct Selection {
    config: SelectionConfig,
    image_size: Option<Size2D>,
    image_area: Size2D,
    scroll_crop_width: i32,
    mouse_position: Position<Display>,
    mouse_down_position: Position<Display>,
    mouse_selection: Region<Display>,
}

impl Selection {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            image_size: None,
            image_area: Size2D::ZERO,
            scroll_crop_width: 1,
            mouse_position: Position::default(),
            mouse_down_position: Position::default(),
            mouse_selection: INITIAL_SELECTION,
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replace the configuration. Pointer state and scroll size are kept.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    pub fn mode(&self) -> SelectionMode {
        self.config.mode
    }

    /// Switch modes. The other mode's state is kept for when it comes back.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.config.mode = mode;
    }

    pub fn image_size(&self) -> Option<Size2D> {
        self.image_size
    }

    pub fn image_area(&self) -> Size2D {
        self.image_area
    }

    pub fn scroll_crop_width(&self) -> i32 {
        self.scroll_crop_width
    }

    pub fn mouse_position(&self) -> Position<Display> {
        self.mouse_position
    }

    /// The raw click-drag selection. Its size may be negative.
    pub fn mouse_selection(&self) -> Region<Display> {
        self.mouse_selection
    }

    /// Set the display area that pointer coordinates are relative to.
    ///
    /// Returns `false` if the area didn't change.
    pub fn resize_area(&mut self, area: Size2D) -> bool {
        if area == self.image_area {
            return false;
        }
        log::info!("image area {}x{}", area.width, area.height);
        self.image_area = area;
        true
    }

    /// Start a new image.
    ///
    /// Resets the scroll size to a bit over half the image width, centers the
    /// pointer, and re-derives the click-drag selection from the new image's
    /// crop box. If the area isn't laid out yet, the click-drag selection is
    /// reset instead.
    pub fn load_image(&mut self, image_size: Size2D) -> Result<(), FitError> {
        let viewport = Viewport::new(image_size, self.image_area).inspect_err(|_| {
            log::warn!(
                "rejecting image of size {}x{}",
                image_size.width,
                image_size.height
            )
        })?;
        log::info!("image is {}x{}", image_size.width, image_size.height);

        self.image_size = Some(image_size);
        self.scroll_crop_width = image_size.width / 2;
        self.grow_scroll_crop(false);
        self.mouse_position = Position::from_size(self.image_area / 2);
        // Before layout there is nothing to derive from; drop the old image's box.
        self.mouse_selection = self
            .displayed_crop_box()
            .map_or(INITIAL_SELECTION, |crop| viewport.preview_to_display(crop));
        Ok(())
    }

    /// Mapping for the current image and area, if both are usable.
    pub fn viewport(&self) -> Option<Viewport> {
        let image = self.image_size?;
        Viewport::new(image, self.image_area)
            .ok()
            .filter(Viewport::is_visible)
    }

    // ── Scroll mode ─────────────────────────────────────────────────────

    /// Scroll-mode crop size in image pixels. The height may be fractional.
    pub fn scroll_crop_size(&self) -> (i32, f64) {
        (
            self.scroll_crop_width,
            self.config.aspect.height_for_width(self.scroll_crop_width),
        )
    }

    /// Whether the current scroll size satisfies the perfect-pixel-ratio
    /// setting (always true when it's off).
    pub fn has_whole_scroll_size(&self) -> bool {
        self.has_whole_size(self.scroll_crop_width)
    }

    /// Set the scroll width directly, clamped to `1..=image width`.
    pub fn set_scroll_crop_width(&mut self, width: i32) {
        let max = self.image_size.map_or(i32::MAX, |s| s.width.max(1));
        self.scroll_crop_width = width.clamp(1, max);
    }

    /// Apply a wheel step. Shift forces single-pixel steps.
    pub fn scroll(&mut self, direction: ScrollDirection, modifiers: Modifiers) -> ScrollStep {
        match direction {
            ScrollDirection::Down => self.grow_scroll_crop(modifiers.shift),
            ScrollDirection::Up => self.shrink_scroll_crop(modifiers.shift),
        }
    }

    /// Grow the scroll selection.
    ///
    /// Unless `fine`, jumps by the grow factor first. Then steps one pixel at
    /// a time until the size has a whole height or the image width is reached.
    pub fn grow_scroll_crop(&mut self, fine: bool) -> ScrollStep {
        let Some(image) = self.image_size else {
            return ScrollStep::AtLimit(self.scroll_crop_width);
        };
        let max = image.width;
        let mut width = self.scroll_crop_width;
        if !fine {
            width = max.min((width as f64 * self.config.grow_factor) as i32);
        }
        while width < max {
            width += 1;
            if self.has_whole_size(width) {
                break;
            }
        }
        self.scroll_crop_width = width;
        report_step(width, width >= max, "maximum")
    }

    /// Shrink the scroll selection. Mirror of
    /// [`grow_scroll_crop`](Self::grow_scroll_crop), bounded at 1 pixel.
    pub fn shrink_scroll_crop(&mut self, fine: bool) -> ScrollStep {
        if self.image_size.is_none() {
            return ScrollStep::AtLimit(self.scroll_crop_width);
        }
        let mut width = self.scroll_crop_width;
        if !fine {
            width = 1.max((width as f64 * self.config.shrink_factor) as i32);
        }
        while width > 1 {
            width -= 1;
            if self.has_whole_size(width) {
                break;
            }
        }
        self.scroll_crop_width = width;
        report_step(width, width <= 1, "minimum")
    }

    fn has_whole_size(&self, width: i32) -> bool {
        !self.config.perfect_pixel_ratio || self.config.aspect.has_whole_height(width)
    }

    // ── Pointer ─────────────────────────────────────────────────────────

    /// Pointer pressed. Starts a click-drag gesture and, in scroll mode,
    /// re-centers the selection.
    pub fn pointer_down(&mut self, position: Position<Display>) {
        self.mouse_down_position = position;
        self.mouse_position = position;
    }

    /// Pointer moved with the button held.
    pub fn pointer_drag(&mut self, position: Position<Display>, modifiers: Modifiers) {
        let delta = position - self.mouse_position;
        self.mouse_position = position;

        if self.config.mode != SelectionMode::ClickDrag {
            return;
        }
        if modifiers.shift {
            self.mouse_selection = self.mouse_selection + delta;
        } else {
            // Size may be negative, keeping the press point as the anchor.
            let extent = position - self.mouse_down_position;
            if extent.width != 0 && extent.height != 0 {
                self.mouse_selection =
                    Region::new(Box2D::new(self.mouse_down_position.point(), extent));
            }
        }
        log::debug!("selection {:?}", self.mouse_selection.coords());
    }

    // ── Crop boxes ──────────────────────────────────────────────────────

    /// The crop rectangle in original-image pixels.
    ///
    /// `None` without an image or before the display area is laid out.
    /// Scroll-mode boxes are clamped to the image. Click-drag boxes are not,
    /// and may extend past the image edges.
    pub fn image_crop_box(&self) -> Option<Region<Image>> {
        let viewport = self.viewport()?;
        let crop = match self.config.mode {
            SelectionMode::ClickDrag => {
                let raw = viewport.display_to_image(self.mouse_selection);
                if self.config.fixed_aspect {
                    let fitted =
                        Box2D::cover(self.config.aspect.as_size(), raw.size(), Placement::Origin);
                    Region::new((fitted + raw.offset()).positive_size())
                } else {
                    raw.positive_size()
                }
            }
            SelectionMode::Scroll => {
                let (width, height) = self.scroll_crop_size();
                let center = viewport.position_to_image(self.mouse_position);
                let region = Box2D::from_f64(center, (width as f64, height));
                Region::new((region - region.size / 2).clamped(viewport.image_size()))
            }
        };
        Some(crop)
    }

    /// The crop rectangle in preview pixels.
    pub fn displayed_crop_box(&self) -> Option<Region<Preview>> {
        let viewport = self.viewport()?;
        Some(viewport.image_to_preview(self.image_crop_box()?))
    }

    /// The crop rectangle as drawn on the display surface.
    pub fn selection_box(&self) -> Option<Region<Display>> {
        let viewport = self.viewport()?;
        Some(viewport.preview_to_display(self.displayed_crop_box()?))
    }

    /// Rule-of-thirds bands `(vertical, horizontal)` inside the selection box,
    /// when guides are enabled.
    pub fn guides(&self) -> Option<(Region<Display>, Region<Display>)> {
        if !self.config.show_guides {
            return None;
        }
        self.selection_box().map(Region::thirds)
    }
}

fn report_step(width: i32, at_limit: bool, bound: &str) -> ScrollStep {
    if at_limit {
        log::info!("crop width at {bound}: {width}");
        ScrollStep::AtLimit(width)
    } else {
        log::info!("crop width: {width}");
        ScrollStep::Resized(width)
    }
}
