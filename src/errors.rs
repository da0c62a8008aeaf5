// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types.  The numeric kernel itself cannot fail; everything
//! here is either a bad configuration caught before rendering starts,
//! a worker that died mid-render, or the output file misbehaving.

use failure::Fail;
use std::io;

/// Rejected before any rendering work begins.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// Width or height was zero.
    #[fail(display = "image dimensions must be non-zero, got {}x{}", width, height)]
    EmptyImage {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// The complex plane region has no area, is inverted, or isn't finite.
    #[fail(display = "degenerate plane bounds: {}", reason)]
    DegenerateBounds {
        /// What was wrong with the corners
        reason: String,
    },

    /// An iteration limit of zero can't tell anything apart.
    #[fail(display = "iteration limit must be greater than zero")]
    NoIterations,

    /// At least one worker is needed.
    #[fail(display = "thread count must be greater than zero")]
    NoThreads,
}

/// The render aborted.  No partially filled buffer survives one of these.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// A row worker panicked before the barrier was reached.
    #[fail(display = "a row worker panicked; render aborted")]
    WorkerPanicked,
}

/// Problems persisting the finished image.
#[derive(Debug, Fail)]
pub enum OutputError {
    /// The destination file couldn't be opened for writing.
    #[fail(display = "cannot create {}: {}", path, cause)]
    Create {
        /// Where we tried to write
        path: String,
        /// The underlying I/O error
        #[cause]
        cause: io::Error,
    },

    /// The buffer is bigger than a PNG can describe.
    #[fail(display = "{}x{} is too large to encode as a PNG", width, height)]
    TooLarge {
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },

    /// The PNG encoder failed while writing pixel data.
    #[fail(display = "cannot encode {}: {}", path, cause)]
    Encode {
        /// Where we tried to write
        path: String,
        /// The underlying I/O error
        #[cause]
        cause: io::Error,
    },
}
