#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points on the complex plane that
//! stay bounded when you repeatedly square them and add the original
//! point back.  Points outside the set run off to infinity, and the
//! number of rounds it takes them to leave the circle of radius two
//! is their "escape time."  This crate maps every pixel of an image
//! to a point, measures its escape time, and shades it: bright for
//! points that flee quickly, darker as they linger, and black for
//! points that never leave.
//!
//! No pixel depends on any other, so each row of the image is
//! rendered as a separate unit of work on a pool of threads, and the
//! finished buffer is handed to the PNG encoder.

pub mod buffer;
pub mod config;
pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;

pub use crate::buffer::PixelBuffer;
pub use crate::config::Config;
pub use crate::errors::{ConfigError, OutputError, RenderError};
pub use crate::escape::{escape_time, Escape, MAX_ITERATIONS};
pub use crate::output::write_png;
pub use crate::palette::Shade;
pub use crate::planes::{Pixel, PlaneMapper};
pub use crate::render::Renderer;
