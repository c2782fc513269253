//! Procedural renderer for the Notiv icon.
//!
//! The icon is a geometric "N": two vertical legs joined by a diagonal
//! spine, with a thinner yellow stripe running alongside the spine. Shapes
//! are painted without antialiasing onto an oversized canvas and smoothed
//! by [`resample::downsample`].

pub mod color;
pub mod draw;
pub mod geometry;
pub mod icon;
pub mod resample;
pub mod stroke;

pub use color::{ACCENT, INK, TRANSPARENT};
pub use geometry::{PixelRect, Point};
pub use icon::{COMPACT_THRESHOLD, IconLayout, Proportions, draw_icon, render_icon};
pub use stroke::{Stroke, draw_parallelogram};
