// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished buffer out as an 8-bit grayscale PNG.

use image::png::PNGEncoder;
use image::ColorType;
use log::info;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::errors::OutputError;

/// The file name used when nobody asks for another one.
pub const DEFAULT_OUTPUT: &str = "mandelbrot.png";

/// Create `path` and encode `buffer` into it.  Failing to open the
/// file and failing to encode are reported as different errors.
pub fn write_png<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<(), OutputError> {
    let path = path.as_ref();
    let (width, height) = match (u32::try_from(buffer.width()), u32::try_from(buffer.height())) {
        (Ok(width), Ok(height)) => (width, height),
        _ => {
            return Err(OutputError::TooLarge {
                width: buffer.width(),
                height: buffer.height(),
            })
        }
    };
    let output = File::create(path).map_err(|cause| OutputError::Create {
        path: path.display().to_string(),
        cause,
    })?;
    let encode_error = |cause| OutputError::Encode {
        path: path.display().to_string(),
        cause,
    };
    // BufWriter swallows errors when dropped, so flush by hand.
    let mut writer = BufWriter::new(output);
    PNGEncoder::new(&mut writer)
        .encode(buffer.as_raw(), width, height, ColorType::Gray(8))
        .map_err(encode_error)?;
    writer.flush().map_err(encode_error)?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn written_png_reads_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let buffer = PixelBuffer::from_fn(7, 5, |x, y| (x * 30 + y) as u8);

        write_png(&path, &buffer).unwrap();

        let image = image::open(&path).unwrap();
        assert_eq!(image.dimensions(), (7, 5));
        assert_eq!(image.to_luma().into_raw(), buffer.into_raw());
    }

    #[test]
    fn missing_directory_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("place.png");
        let buffer = PixelBuffer::new(2, 2);

        match write_png(&path, &buffer) {
            Err(OutputError::Create { path: p, .. }) => assert!(p.ends_with("place.png")),
            other => panic!("expected a create error, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_disk_is_an_encode_error() {
        let buffer = PixelBuffer::from_fn(16, 16, |x, y| (x + y) as u8);
        match write_png("/dev/full", &buffer) {
            Err(OutputError::Encode { path, .. }) => assert_eq!(path, "/dev/full"),
            other => panic!("expected an encode error, got {:?}", other),
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_buffer_is_refused_before_creating_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        let buffer = PixelBuffer::new(u32::max_value() as usize + 1, 0);

        match write_png(&path, &buffer) {
            Err(OutputError::TooLarge { width, height }) => {
                assert_eq!(width, u32::max_value() as usize + 1);
                assert_eq!(height, 0);
            }
            other => panic!("expected a size error, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
