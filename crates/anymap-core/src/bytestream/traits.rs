/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits for reading bytes in anymap
//!
//! This exposes the trait implemented by byte sources the decoder can
//! consume, with easy support for extending it to multiple implementations.

use crate::bytestream::reader::ByteIoError;

/// The de-facto input trait implemented for readers.
///
/// The decoder only ever moves forward through a source, so the trait is
/// deliberately small: one byte at a time, an exact-fill read, and a
/// drain-to-end read. No seeking and no peeking: a byte handed out is
/// consumed.
///
/// A blanket implementation covers every [`BufRead`](std::io::BufRead)
/// type, so `&[u8]`, [`Cursor`](std::io::Cursor) and
/// [`BufReader`](std::io::BufReader) all work out of the box.
pub trait ByteReaderTrait {
    /// Read a single byte from the source, returning `Ok(None)` once the
    /// source is exhausted.
    ///
    /// The implementation should try to be as fast as possible as this is
    /// called from some hot loops where it may become the bottleneck
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that
    /// isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Read all bytes remaining in this input to `sink` until we hit eof
    ///
    /// # Returns
    /// - `Ok(usize)` The actual number of bytes added to the sink
    /// - `Err()` An error that occurred when reading bytes
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError>;
}
