// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Takes a point on the complex plane and
//! repeatedly squares it and adds the original point back, counting
//! how many rounds it takes before the value leaves the circle of
//! radius two centered on the origin.  Once outside that circle it
//! can never come back, so the count is a measure of how quickly the
//! point runs off to infinity.

use num::Complex;

/// The default number of rounds we try before deciding a point is
/// inside the set.
pub const MAX_ITERATIONS: usize = 1000;

/// The outcome of iterating a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Escape {
    /// The orbit left the radius-two circle after this many rounds.
    Escaped(usize),
    /// The orbit was still inside the circle when we ran out of rounds.
    Bounded,
}

impl Escape {
    /// Collapse the outcome into a plain count in `[0, limit]`, with
    /// `Bounded` reported as the limit itself.
    pub fn iterations(self, limit: usize) -> usize {
        match self {
            Escape::Escaped(i) => i,
            Escape::Bounded => limit,
        }
    }
}

/// Iterate `z = z² + c`, starting from `z = c`, for at most `limit`
/// rounds.  The magnitude test happens before each squaring, so any
/// point that starts outside the circle escapes at round zero.
#[inline]
pub fn escape_time(c: Complex<f64>, limit: usize) -> Escape {
    let mut z = c;
    for i in 0..limit {
        if z.norm() > 2.0 {
            return Escape::Escaped(i);
        }
        z = z * z + c;
    }
    Escape::Bounded
}
