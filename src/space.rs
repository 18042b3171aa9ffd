//! Coordinate spaces and the mapping between them.
//!
//! A crop rectangle can be expressed in three spaces:
//!
//! ```text
//!     Display (pointer coordinates, whole image area)
//!     ┌──────────────────────────────┐
//!     │      ┌──────────────┐        │
//!     │      │ Preview      │        │  preview = scale_down(image, area)
//!     │      │ (scaled-down │        │
//!     │      │  image)      │        │
//!     │      └──────────────┘        │
//!     └──────────────────────────────┘
//!     Image: original source pixels, same shape as Preview
//! ```
//!
//! [`Region`] and [`Position`] carry their space as a type parameter, and only
//! [`Viewport`] converts between spaces. Mixing a display-space box into an
//! image-space computation is a type error.

use core::marker::PhantomData;
use core::ops::{Add, Sub};

use crate::fit::{FitError, ObjectFit, Placement};
use crate::geometry::{Box2D, Size2D};

mod sealed {
    pub trait Sealed {}
}

/// Marker for a coordinate space.
pub trait Space: sealed::Sealed + Copy + core::fmt::Debug {}

/// Original source-image pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Image {}

/// Pixels of the scaled-down preview, relative to its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Preview {}

/// Pointer coordinates of the display surface, relative to the whole image area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Display {}

impl sealed::Sealed for Image {}
impl sealed::Sealed for Preview {}
impl sealed::Sealed for Display {}
impl Space for Image {}
impl Space for Preview {}
impl Space for Display {}

/// A [`Box2D`] in space `S`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region<S: Space> {
    rect: Box2D,
    space: PhantomData<S>,
}

impl<S: Space> Region<S> {
    pub const fn new(rect: Box2D) -> Self {
        Self {
            rect,
            space: PhantomData,
        }
    }

    /// The untagged box.
    pub const fn rect(self) -> Box2D {
        self.rect
    }

    pub const fn offset(self) -> Size2D {
        self.rect.offset
    }

    pub const fn size(self) -> Size2D {
        self.rect.size
    }

    /// `[left, top, right, bottom]`.
    pub fn coords(self) -> [i32; 4] {
        self.rect.coords()
    }

    pub fn positive_size(self) -> Self {
        Self::new(self.rect.positive_size())
    }

    /// See [`Box2D::clamped`]. `container` must be an extent in the same space.
    pub fn clamped(self, container: Size2D) -> Self {
        Self::new(self.rect.clamped(container))
    }

    /// See [`Box2D::clipped`].
    pub fn clipped(self, container: Size2D) -> Self {
        Self::new(self.rect.clipped(container))
    }

    /// See [`Box2D::thirds`].
    pub fn thirds(self) -> (Self, Self) {
        let (v, h) = self.rect.thirds();
        (Self::new(v), Self::new(h))
    }

    fn retag<T: Space>(self) -> Region<T> {
        Region::new(self.rect)
    }
}

impl<S: Space> Add<Size2D> for Region<S> {
    type Output = Self;
    fn add(self, delta: Size2D) -> Self {
        Self::new(self.rect + delta)
    }
}

impl<S: Space> Sub<Size2D> for Region<S> {
    type Output = Self;
    fn sub(self, delta: Size2D) -> Self {
        Self::new(self.rect - delta)
    }
}

/// A point in space `S`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position<S: Space> {
    point: Size2D,
    space: PhantomData<S>,
}

impl<S: Space> Position<S> {
    pub const fn new(x: i32, y: i32) -> Self {
        Self::from_size(Size2D::new(x, y))
    }

    pub const fn from_size(point: Size2D) -> Self {
        Self {
            point,
            space: PhantomData,
        }
    }

    pub const fn x(self) -> i32 {
        self.point.width
    }

    pub const fn y(self) -> i32 {
        self.point.height
    }

    /// The untagged vector.
    pub const fn point(self) -> Size2D {
        self.point
    }
}

impl<S: Space> Default for Position<S> {
    fn default() -> Self {
        Self::from_size(Size2D::ZERO)
    }
}

/// Difference of two positions in the same space.
impl<S: Space> Sub for Position<S> {
    type Output = Size2D;
    fn sub(self, rhs: Self) -> Size2D {
        self.point - rhs.point
    }
}

/// Where an image's preview sits inside the display area, and the mappings
/// between [`Display`], [`Preview`] and [`Image`] space that follow from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    image_size: Size2D,
    area: Size2D,
    preview: Box2D,
}

impl Viewport {
    /// Place an image of `image_size` within a display `area`.
    ///
    /// The preview is scaled down to fit and centered; it is never upscaled.
    pub fn new(image_size: Size2D, area: Size2D) -> Result<Self, FitError> {
        let preview = ObjectFit::ScaleDown.place(image_size, area, Placement::Center)?;
        Ok(Self {
            image_size,
            area,
            preview,
        })
    }

    pub fn image_size(&self) -> Size2D {
        self.image_size
    }

    pub fn area(&self) -> Size2D {
        self.area
    }

    /// The preview rectangle in display space.
    pub fn preview_box(&self) -> Region<Display> {
        Region::new(self.preview)
    }

    /// Whether the preview has any on-screen extent.
    ///
    /// False before the display area has been laid out; mapping into image
    /// space is meaningless then.
    pub fn is_visible(&self) -> bool {
        self.preview.size.is_positive()
    }

    pub fn display_to_preview(&self, region: Region<Display>) -> Region<Preview> {
        (region - self.preview.offset).retag()
    }

    pub fn preview_to_display(&self, region: Region<Preview>) -> Region<Display> {
        region.retag::<Display>() + self.preview.offset
    }

    pub fn preview_to_image(&self, region: Region<Preview>) -> Region<Image> {
        Region::new(region.rect.scaled(self.preview.size, self.image_size))
    }

    pub fn image_to_preview(&self, region: Region<Image>) -> Region<Preview> {
        Region::new(region.rect.scaled(self.image_size, self.preview.size))
    }

    pub fn display_to_image(&self, region: Region<Display>) -> Region<Image> {
        self.preview_to_image(self.display_to_preview(region))
    }

    pub fn image_to_display(&self, region: Region<Image>) -> Region<Display> {
        self.preview_to_display(self.image_to_preview(region))
    }

    /// Unrounded image-space coordinates of a display-space point.
    pub fn position_to_image(&self, position: Position<Display>) -> (f64, f64) {
        let rel = position.point - self.preview.offset;
        (
            ratio(rel.width, self.image_size.width, self.preview.size.width),
            ratio(rel.height, self.image_size.height, self.preview.size.height),
        )
    }
}

fn ratio(v: i32, num: i32, den: i32) -> f64 {
    if den == 0 {
        return v as f64;
    }
    v as f64 * num as f64 / den as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(x: i32, y: i32, w: i32, h: i32) -> Box2D {
        Box2D::new(Size2D::new(x, y), Size2D::new(w, h))
    }

    fn viewport() -> Viewport {
        // 2000x1000 image in an 800x800 area: preview 800x400 at (0, 200)
        Viewport::new(Size2D::new(2000, 1000), Size2D::new(800, 800)).unwrap()
    }

    #[test]
    fn preview_is_scaled_down_and_centered() {
        let v = viewport();
        assert_eq!(v.preview_box().rect(), b(0, 200, 800, 400));
        assert!(v.is_visible());
    }

    #[test]
    fn small_image_is_not_upscaled() {
        let v = Viewport::new(Size2D::new(200, 100), Size2D::new(800, 800)).unwrap();
        assert_eq!(v.preview_box().rect(), b(300, 350, 200, 100));
    }

    #[test]
    fn invalid_image_size_errors() {
        assert_eq!(
            Viewport::new(Size2D::new(0, 100), Size2D::new(800, 800)),
            Err(FitError::NonPositiveSource)
        );
    }

    #[test]
    fn zero_area_is_not_visible() {
        let v = Viewport::new(Size2D::new(2000, 1000), Size2D::ZERO).unwrap();
        assert!(!v.is_visible());
    }

    #[test]
    fn display_to_image() {
        let v = viewport();
        let sel = Region::<Display>::new(b(100, 300, 200, 100));
        assert_eq!(v.display_to_preview(sel).rect(), b(100, 100, 200, 100));
        assert_eq!(v.display_to_image(sel).rect(), b(250, 250, 500, 250));
    }

    #[test]
    fn image_to_display_inverts() {
        let v = viewport();
        let crop = Region::<Image>::new(b(250, 250, 500, 250));
        assert_eq!(v.image_to_display(crop).rect(), b(100, 300, 200, 100));
    }

    #[test]
    fn position_maps_through_preview_offset() {
        let v = viewport();
        assert_eq!(v.position_to_image(Position::new(400, 400)), (1000.0, 500.0));
        assert_eq!(v.position_to_image(Position::new(0, 0)), (0.0, -500.0));
    }

    #[test]
    fn region_translation_keeps_space() {
        let r = Region::<Display>::new(b(0, 0, 5, 5)) + Size2D::new(3, 4);
        assert_eq!(r.offset(), Size2D::new(3, 4));
        let r = r - Size2D::new(1, 1);
        assert_eq!(r.coords(), [2, 3, 7, 8]);
    }

    #[test]
    fn position_difference() {
        let a = Position::<Display>::new(10, 5);
        let c = Position::<Display>::new(4, 9);
        assert_eq!(a - c, Size2D::new(6, -4));
    }
}
