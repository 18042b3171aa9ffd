//! Crop-selection geometry: rectangles, CSS-style object fitting, and the
//! pointer/wheel state machine of an interactive cropping tool.
//!
//! Pure geometry. No pixel operations, no windowing, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`]: integer [`Size2D`] and [`Box2D`] with component-wise arithmetic
//! - [`fit`]: fill / contain / cover / scale-down placement
//! - [`aspect`]: validated aspect ratios and their text input forms
//! - [`space`]: typed display, preview and image coordinates, and the [`Viewport`] between them
//! - [`selection`]: scroll and click-drag selection modes
//! - [`layout`]: window split and preview letterboxing
//! - [`config`]: user preferences
//! - [`command`]: crop/resize jobs for the image provider

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aspect;
pub mod command;
pub mod config;
pub mod fit;
pub mod geometry;
pub mod layout;
pub mod selection;
pub mod space;

pub use aspect::{AspectError, AspectRatio};
pub use command::{CropGeometry, Job, ShrinkGeometry};
pub use config::{Config, CropperConfig, SelectionConfig, SelectionMode, Srgb};
pub use fit::{FitError, ObjectFit, Placement};
pub use geometry::{Box2D, Size2D};
pub use layout::{WindowLayout, letterbox};
pub use selection::{Modifiers, ScrollDirection, ScrollStep, Selection};
// Space markers stay under `space::` (`Display` would shadow `core::fmt::Display`).
pub use space::{Position, Region, Space, Viewport};
