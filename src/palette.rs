// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns escape counts into grayscale.  Fast escapes are bright, and
//! the ramp wraps every 256 rounds, which draws contour bands around
//! the set.  Points that never escape are painted solid black.

use crate::escape::Escape;

/// The color of a single pixel.
///
/// `Gray(0)` and `Black` come out as the same byte, but they mean
/// different things: the first is a point that escaped on a round
/// that is a multiple of 256 minus one, the second is a point that
/// never escaped at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    /// An escaped point, brightest for the quickest escape.
    Gray(u8),
    /// A point that stayed bounded.
    Black,
}

impl Shade {
    /// The 8-bit luminance sample for this shade.
    pub fn luma(self) -> u8 {
        match self {
            Shade::Gray(v) => v,
            Shade::Black => 0,
        }
    }
}

impl From<Escape> for Shade {
    fn from(escape: Escape) -> Shade {
        match escape {
            Escape::Escaped(i) => Shade::Gray(255 - (i % 256) as u8),
            Escape::Bounded => Shade::Black,
        }
    }
}
