/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integration tests for the anymap workspace.
//!
//! Everything here drives the public API only: in-memory sources for the
//! codec tests, throwaway temp files for the file helpers.

#![allow(unused_imports, unused)]

use anymap_core::colorspace::ColorSpace;
use anymap_core::raster::{Raster, SampleBuffer};

mod encode;
mod files;
mod roundtrip;

/// Build a raster or panic; test inputs are statically well-shaped.
pub fn raster_u8(width: usize, height: usize, colorspace: ColorSpace, samples: Vec<u8>) -> Raster {
    Raster::from_samples(width, height, colorspace, SampleBuffer::U8(samples)).unwrap()
}

pub fn raster_u16(
    width: usize, height: usize, colorspace: ColorSpace, samples: Vec<u16>
) -> Raster {
    Raster::from_samples(width, height, colorspace, SampleBuffer::U16(samples)).unwrap()
}
