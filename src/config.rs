// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render parameters, their defaults, and the little parsers the
//! command line uses to fill them in.

use num::Complex;
use std::str::FromStr;

use crate::errors::ConfigError;
use crate::escape::MAX_ITERATIONS;
use crate::output::DEFAULT_OUTPUT;
use crate::planes::PlaneMapper;
use crate::render::Renderer;

/// Everything needed to produce one image.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Left lower corner of the complex region
    pub leftlower: Complex<f64>,
    /// Right upper corner of the complex region
    pub rightupper: Complex<f64>,
    /// Iterations tried per point
    pub iterations: usize,
    /// Worker threads
    pub threads: usize,
    /// Where the PNG goes
    pub output: String,
}

impl Default for Config {
    /// A 4K image of the square from -2-2i to 2+2i, one worker per CPU.
    fn default() -> Config {
        Config {
            width: 3840,
            height: 2160,
            leftlower: Complex::new(-2.0, -2.0),
            rightupper: Complex::new(2.0, 2.0),
            iterations: MAX_ITERATIONS,
            threads: num_cpus::get(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

impl Config {
    /// Validate the whole configuration and build a renderer from it.
    pub fn renderer(&self) -> Result<Renderer, ConfigError> {
        let plane = PlaneMapper::new(self.width, self.height, self.leftlower, self.rightupper)?;
        Renderer::new(plane, self.iterations, self.threads)
    }
}

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}
