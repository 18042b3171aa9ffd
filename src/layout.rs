//! Window layout: the image area the user selects in, and the preview area
//! showing the cropped result.

use crate::fit::{ObjectFit, Placement};
use crate::geometry::{Box2D, Size2D};

/// The two side-by-side panels of the cropping window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowLayout {
    /// Left panel, where pointer selection happens.
    pub image_area: Size2D,
    /// Right panel, showing the letterboxed crop result.
    pub preview_area: Size2D,
}

impl WindowLayout {
    /// Split a window into a left half for the image and the remainder for
    /// the preview. Both span the full height.
    pub fn split(window: Size2D) -> Self {
        let image_area = Size2D::new(window.width / 2, window.height);
        let preview_area = Size2D::new(window.width - image_area.width, window.height);
        Self {
            image_area,
            preview_area,
        }
    }
}

/// Where the cropped image is drawn inside the preview area, keeping its
/// aspect ratio and centering it. `None` for an empty crop.
pub fn letterbox(crop_size: Size2D, preview_area: Size2D) -> Option<Box2D> {
    ObjectFit::Contain
        .place(crop_size, preview_area, Placement::Center)
        .ok()
}
