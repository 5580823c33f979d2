/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the anymap decoder and encoder
//!
//! This crate provides the primitives the PNM codec crate is built on
//!
//! It currently contains
//!
//! - A byte-source trait and a pull-based reader that splits a source into
//!   whitespace-delimited ASCII tokens without buffering the whole input
//! - Colorspace and sample-depth information shared by images
//! - The in-memory raster model produced by decoding
//! - Decoder options
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!    present in the crate

pub mod bytestream;
pub mod colorspace;
pub mod options;
pub mod raster;
pub mod sample_depth;
pub mod serde;
