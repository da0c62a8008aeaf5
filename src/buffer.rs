// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major 8-bit grayscale pixel buffer.

use itertools::iproduct;
use std::slice::ChunksMut;

/// One byte per pixel, `width * height` bytes, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer.
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            pixels: vec![0 as u8; width * height],
        }
    }

    /// Builds a buffer by asking `shade` for every pixel, row by row.
    pub fn from_fn<F>(width: usize, height: usize, mut shade: F) -> PixelBuffer
    where
        F: FnMut(usize, usize) -> u8,
    {
        PixelBuffer {
            width,
            height,
            pixels: iproduct!(0..height, 0..width)
                .map(|(y, x)| shade(x, y))
                .collect(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The sample at `x, y`, or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Splits the buffer into disjoint rows, top to bottom.  Each
    /// slice can be handed to a different thread.
    pub fn rows_mut(&mut self) -> ChunksMut<'_, u8> {
        self.pixels.chunks_mut(self.width)
    }

    /// The raw samples, suitable for an encoder.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Gives up the raw samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_disjoint_and_cover_the_buffer() {
        let mut buffer = PixelBuffer::new(3, 4);
        for (y, row) in buffer.rows_mut().enumerate() {
            assert_eq!(row.len(), 3);
            for p in row.iter_mut() {
                *p = y as u8 + 1;
            }
        }
        assert_eq!(buffer.as_raw(), &[1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
        assert_eq!(buffer.rows_mut().count(), 4);
    }

    #[test]
    fn from_fn_visits_rows_then_columns() {
        let buffer = PixelBuffer::from_fn(3, 2, |x, y| (y * 10 + x) as u8);
        assert_eq!(buffer.as_raw(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(buffer.get(2, 1), Some(12));
    }

    #[test]
    fn get_is_row_major_and_bounded() {
        let mut buffer = PixelBuffer::new(2, 2);
        if let Some(row) = buffer.rows_mut().nth(1) {
            row[0] = 9;
        }
        assert_eq!(buffer.get(0, 1), Some(9));
        assert_eq!(buffer.get(1, 0), Some(0));
        assert_eq!(buffer.get(2, 0), None);
        assert_eq!(buffer.get(0, 2), None);
        assert_eq!(buffer.into_raw(), vec![0, 0, 9, 0]);
    }
}
