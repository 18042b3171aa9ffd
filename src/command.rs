//! What to ask of the image provider once a crop is confirmed.
//!
//! A [`Job`] describes the copy, resize or crop+resize for one file. Executing
//! it (decoding, pixel work, writing) is the provider's business; this module
//! only plans it, predicts the output size, and formats the ImageMagick-style
//! geometry arguments.
//!
//! ```
//! use zencrop::{Box2D, CropGeometry, CropperConfig, Job, Region, Size2D};
//!
//! let region = Region::new(Box2D::new(Size2D::new(100, 50), Size2D::new(3000, 2000)));
//! let job = Job::crop(region, &CropperConfig::default());
//! assert_eq!(job.output_size(Size2D::new(4000, 3000)), Size2D::new(1620, 1080));
//! assert_eq!(CropGeometry(region.rect()).to_string(), "3000x2000+100+50");
//! ```

use core::fmt;

use crate::config::CropperConfig;
use crate::geometry::{Box2D, Size2D};
use crate::space::{Image, Region};

/// A single-file operation for the image provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Job {
    /// Copy the file unchanged.
    Copy,
    /// Shrink to fit within `within`, never enlarging.
    Resize { within: Size2D },
    /// Crop to `region`, then optionally shrink to fit within `within`.
    Crop {
        region: Region<Image>,
        within: Option<Size2D>,
    },
}

impl Job {
    /// Crop to `region`, resizing afterwards if the cropper config asks for it.
    pub fn crop(region: Region<Image>, cropper: &CropperConfig) -> Self {
        let region = region.positive_size();
        let within = cropper.resize_within();
        log::debug!(
            "crop {} {}",
            CropGeometry(region.rect()),
            within.map_or(ResizeNote::None, ResizeNote::Shrink)
        );
        Self::Crop { region, within }
    }

    /// Resize only, to the configured bounds.
    ///
    /// The `resize` flag only governs crops; an explicit resize always
    /// shrinks.
    pub fn resize(cropper: &CropperConfig) -> Self {
        let within = cropper.resize_bounds();
        log::debug!("resize {}", ShrinkGeometry(within));
        Self::Resize { within }
    }

    /// Dimensions of the written image for a source of `image_size`.
    ///
    /// Crop regions are clipped to the image first, as the provider does.
    /// Resizing follows ImageMagick's `WxH>`: aspect preserved, rounded to
    /// the nearest pixel, never enlarged.
    pub fn output_size(&self, image_size: Size2D) -> Size2D {
        let (size, within) = match *self {
            Self::Copy => return image_size,
            Self::Resize { within } => (image_size, Some(within)),
            Self::Crop { region, within } => (region.clipped(image_size).size(), within),
        };
        match within {
            Some(within) if size.is_positive() => shrink_within(size, within),
            _ => size,
        }
    }

    /// Arguments for an ImageMagick `convert`/`magick` run:
    /// `source [-crop G] [-resize G] destination`.
    #[cfg(feature = "alloc")]
    pub fn convert_args(
        &self,
        source: &str,
        destination: &str,
    ) -> alloc::vec::Vec<alloc::string::String> {
        use alloc::string::ToString;

        let mut args = alloc::vec![source.to_string()];
        let (crop, within) = match *self {
            Self::Copy => (None, None),
            Self::Resize { within } => (None, Some(within)),
            Self::Crop { region, within } => (Some(region.rect()), within),
        };
        if let Some(crop) = crop {
            args.push("-crop".to_string());
            args.push(CropGeometry(crop).to_string());
        }
        if let Some(within) = within {
            args.push("-resize".to_string());
            args.push(ShrinkGeometry(within).to_string());
        }
        args.push(destination.to_string());
        args
    }
}

/// Shrink `size` to fit `within`, rounding each axis to the nearest pixel.
///
/// The constraining axis lands exactly on its bound. Requires a positive `size`.
fn shrink_within(size: Size2D, within: Size2D) -> Size2D {
    if size.width <= within.width && size.height <= within.height {
        return size;
    }
    let (sw, sh) = (size.width as i64, size.height as i64);
    let (dw, dh) = (within.width as i64, within.height as i64);

    // dw / sw <= dh / sh
    let (num, den) = if dw * sh <= dh * sw { (dw, sw) } else { (dh, sh) };
    let round = |v: i64| ((2 * v * num + den) / (2 * den)).max(1) as i32;
    Size2D::new(round(sw), round(sh))
}

/// `{w}x{h}{+x}{+y}` crop geometry, e.g. `300x200+10+20` or `300x200-5+0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CropGeometry(pub Box2D);

impl fmt::Display for CropGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Box2D { offset, size } = self.0;
        write!(
            f,
            "{}x{}{:+}{:+}",
            size.width, size.height, offset.width, offset.height
        )
    }
}

/// `{w}x{h}>` resize geometry: shrink to fit, only if larger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShrinkGeometry(pub Size2D);

impl fmt::Display for ShrinkGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}>", self.0.width, self.0.height)
    }
}

enum ResizeNote {
    None,
    Shrink(Size2D),
}

impl fmt::Display for ResizeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("no resize"),
            Self::Shrink(within) => ShrinkGeometry(*within).fmt(f),
        }
    }
}
