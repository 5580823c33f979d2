/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoder and encoder for the classic PNM formats.
//!
//! The four supported variants are selected by the two-byte tag a file
//! opens with:
//! ```text
//! ╔═════╤═══════════╤═══════════════════════════════════╗
//! ║ Tag │ Channels  │ Payload                           ║
//! ╠═════╪═══════════╪═══════════════════════════════════╣
//! ║ P2  │ grayscale │ whitespace-separated decimal text ║
//! ╟─────┼───────────┼───────────────────────────────────╢
//! ║ P3  │ RGB       │ whitespace-separated decimal text ║
//! ╟─────┼───────────┼───────────────────────────────────╢
//! ║ P5  │ grayscale │ raw binary samples                ║
//! ╟─────┼───────────┼───────────────────────────────────╢
//! ║ P6  │ RGB       │ raw binary samples                ║
//! ╚═════╧═══════════╧═══════════════════════════════════╝
//! ```
//! The header is the tag followed by three whitespace-delimited decimal
//! fields: width, height and the maximum sample value. A maximum value up
//! to 255 stores each sample in one byte, anything above (to 65535) in two
//! big-endian bytes; samples are row-major and channel-interleaved.
//!
//! Decoding works off any byte source ([`ByteReaderTrait`]) and never
//! buffers the whole input ahead of parsing; encoding always writes the
//! raw variants.
//!
//! [`ByteReaderTrait`]: anymap_core::bytestream::ByteReaderTrait

pub use anymap_core;

pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;
pub use crate::file::*;

mod decoder;
mod encoder;
mod errors;
mod file;
