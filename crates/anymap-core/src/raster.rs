/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The in-memory raster model produced by decoding and consumed by
//! encoding.

use crate::colorspace::ColorSpace;
use crate::sample_depth::SampleDepth;

/// Decoded samples, stored at the width the header's maximum value
/// selected.
///
/// `U16` samples are held in native endian; big-endian byte order only
/// exists on the wire.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SampleBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>)
}

impl SampleBuffer {
    /// Number of samples in the buffer, independent of their width.
    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::U8(samples) => samples.len(),
            SampleBuffer::U16(samples) => samples.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The width of the samples held by this buffer.
    pub const fn sample_depth(&self) -> SampleDepth {
        match self {
            SampleBuffer::U8(_) => SampleDepth::Eight,
            SampleBuffer::U16(_) => SampleDepth::Sixteen
        }
    }
}

/// A decoded image.
///
/// Samples are laid out row-major, channel-interleaved within a pixel,
/// `width * height * channels` of them in total. A raster is built whole
/// via [`from_samples`](Raster::from_samples), which validates the
/// shape invariant, after which the raster is immutable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    samples:    SampleBuffer
}

impl Raster {
    /// Assemble a raster from its parts.
    ///
    /// Returns an error if the sample count does not match
    /// `width * height * colorspace.num_components()`.
    pub fn from_samples(
        width: usize, height: usize, colorspace: ColorSpace, samples: SampleBuffer
    ) -> Result<Raster, &'static str> {
        let expected = width
            .checked_mul(height)
            .and_then(|wh| wh.checked_mul(colorspace.num_components()));

        if expected != Some(samples.len()) {
            return Err("sample count does not match image dimensions");
        }

        Ok(Raster {
            width,
            height,
            colorspace,
            samples
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return image dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// The width of the stored samples, derived from the buffer itself.
    pub const fn sample_depth(&self) -> SampleDepth {
        self.samples.sample_depth()
    }

    pub const fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// Destroy the raster, returning the sample buffer.
    pub fn into_samples(self) -> SampleBuffer {
        self.samples
    }
}
