// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of that
//! plane.
use num::Complex;

use crate::errors::ConfigError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.  For that reason,
/// the lower-left-hand corner is not included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the x, y of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from the first to
/// points on the second.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // Width and height of the complex region.
    extent: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.  Everything that could
    /// make the mapping meaningless is rejected here, before any
    /// pixel is rendered.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyImage { width, height });
        }

        let corners = [leftlower.re, leftlower.im, rightupper.re, rightupper.im];
        if corners.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::DegenerateBounds {
                reason: "corners must be finite".to_string(),
            });
        }

        if rightupper.re <= leftlower.re {
            return Err(ConfigError::DegenerateBounds {
                reason: "the left lower corner is not to the left of the right upper corner"
                    .to_string(),
            });
        }

        if rightupper.im <= leftlower.im {
            return Err(ConfigError::DegenerateBounds {
                reason: "the left lower corner is not lower than the right upper corner"
                    .to_string(),
            });
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            extent: (rightupper.re - leftlower.re, rightupper.im - leftlower.im),
        })
    }

    /// Width of the integral plane, in pixels.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the integral plane, in pixels.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.  Always false
    /// for a mapper that made it through `new`.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, interpolate
    /// the matching point on the complex plane.  Pixel 0 lands
    /// exactly on the left lower corner; the right upper corner
    /// itself is one pixel past the last column and row.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let origin = self.complex_plane.0;
        Complex::new(
            (pixel.0 as f64) / (self.integral_plane.0 as f64) * self.extent.0 + origin.re,
            (pixel.1 as f64) / (self.integral_plane.1 as f64) * self.extent.1 + origin.im,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(1.0, -1.0), Complex::new(-1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_flat_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 0.5), Complex::new(1.0, 0.5));
        match pm {
            Err(ConfigError::DegenerateBounds { .. }) => {}
            other => panic!("expected degenerate bounds, got {:?}", other),
        }
    }

    #[test]
    fn planemapper_fails_on_infinite_corners() {
        let pm = PlaneMapper::new(
            4,
            4,
            Complex::new(std::f64::NEG_INFINITY, -1.0),
            Complex::new(1.0, 1.0),
        );
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(std::f64::NAN, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_image() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert_eq!(
            pm.err(),
            Some(ConfigError::EmptyImage {
                width: 0,
                height: 4
            })
        );
        let pm = PlaneMapper::new(4, 0, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
        let pm = pm.unwrap();
        assert_eq!(pm.len(), 16);
        assert!(!pm.is_empty());
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn pixel_to_point_on_wide_planes() {
        let pm =
            PlaneMapper::new(3840, 2160, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(1920, 1080)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(960, 540)), Complex::new(-1.0, -1.0));
    }
}
