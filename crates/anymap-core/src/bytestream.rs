/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte sources and the token stream
//!
//! This module exposes [`ByteReaderTrait`], the seam through which the
//! decoder pulls bytes from a source, and [`ByteReader`], the cursor that
//! layers token extraction on top of any such source.
//!
//! Reads are strictly single-pass: every byte is consumed exactly once and
//! never revisited, which is what lets header parsing and payload parsing
//! share one uninterrupted stream.

pub use crate::bytestream::reader::{ByteIoError, ByteReader};
pub use crate::bytestream::traits::ByteReaderTrait;

mod reader;
mod traits;
