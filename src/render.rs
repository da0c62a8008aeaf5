// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The row scheduler.  Every row of the image is an independent unit
//! of work: nothing one row computes is needed by any other.  The
//! buffer is cut into row slices up front, and a pool of scoped
//! worker threads takes them one at a time from a shared queue, so
//! each slice is written by exactly one thread and the pixel writes
//! themselves need no locking.  Only the queue is locked, and only
//! long enough to take the next row.
//!
//! The crossbeam scope is the completion barrier.  `render` does not
//! hand back the buffer until every worker has joined, and if any of
//! them panicked, the buffer is thrown away and the whole render
//! fails.

use log::{debug, info};
use std::cmp;
use std::sync::Mutex;
use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::errors::{ConfigError, RenderError};
use crate::escape::escape_time;
use crate::palette::Shade;
use crate::planes::{Pixel, PlaneMapper};

/// Holds the parameters of a render.  Once built it is never mutated,
/// and it carries no state between renders, so the same renderer can
/// be run as many times as you like and from as many threads.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
    threads: usize,
}

impl Renderer {
    /// Requires a mapping from the image to the complex plane, the
    /// number of iterations to try per point, and the number of
    /// worker threads to spread the rows over.
    pub fn new(plane: PlaneMapper, limit: usize, threads: usize) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::NoIterations);
        }
        if threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        Ok(Renderer {
            plane,
            limit,
            threads,
        })
    }

    /// The pixel-to-plane mapping.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Iterations tried per point.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Size of the worker pool.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Map one pixel onto the plane, iterate it, and pick its shade.
    #[inline]
    pub fn shade_at(&self, pixel: &Pixel) -> Shade {
        Shade::from(escape_time(self.plane.pixel_to_point(pixel), self.limit))
    }

    /// Fill row `y`.  `row` must be exactly one row wide.
    pub fn render_row(&self, y: usize, row: &mut [u8]) {
        debug_assert_eq!(row.len(), self.plane.width());
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = self.shade_at(&Pixel(x, y)).luma();
        }
    }

    /// Single-threaded reference render.  Produces exactly what
    /// `render` does, only slower.
    pub fn render_serial(&self) -> PixelBuffer {
        PixelBuffer::from_fn(self.plane.width(), self.plane.height(), |x, y| {
            self.shade_at(&Pixel(x, y)).luma()
        })
    }

    /// Render the whole image on the worker pool, blocking until
    /// every row is done.
    pub fn render(&self) -> Result<PixelBuffer, RenderError> {
        self.render_with(|y, row| self.render_row(y, row))
    }

    fn render_with<F>(&self, fill: F) -> Result<PixelBuffer, RenderError>
    where
        F: Fn(usize, &mut [u8]) + Sync,
    {
        let started = Instant::now();
        let mut buffer = PixelBuffer::new(self.plane.width(), self.plane.height());
        let workers = cmp::min(self.threads, self.plane.height());
        info!(
            "rendering {}x{} at {} iterations on {} threads",
            self.plane.width(),
            self.plane.height(),
            self.limit,
            workers
        );

        {
            let queue = Mutex::new(buffer.rows_mut().enumerate());
            let queue = &queue;
            let fill = &fill;
            crossbeam::scope(|spawner| {
                for worker in 0..workers {
                    spawner.spawn(move |_| {
                        let mut rendered = 0;
                        loop {
                            // A poisoned queue means some worker already
                            // died; the scope will report it.
                            let next = match queue.lock() {
                                Ok(mut rows) => rows.next(),
                                Err(_) => None,
                            };
                            match next {
                                Some((y, row)) => {
                                    fill(y, row);
                                    rendered += 1;
                                }
                                None => break,
                            }
                        }
                        debug!("worker {} rendered {} rows", worker, rendered);
                    });
                }
            })
            .map_err(|_| RenderError::WorkerPanicked)?;
        }

        let elapsed = started.elapsed();
        info!(
            "rendered {} rows in {}.{:03}s",
            self.plane.height(),
            elapsed.as_secs(),
            elapsed.subsec_millis()
        );
        Ok(buffer)
    }
}
