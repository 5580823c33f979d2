/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use crate::bytestream::ByteReaderTrait;

pub(crate) mod std_readers;

/// Errors surfaced by byte sources.
pub enum ByteIoError {
    /// An error from the underlying standard library reader
    StdIoError(std::io::Error),
    /// Not enough bytes, expected and found
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// Whitespace as classified by ASCII `isspace`.
///
/// `u8::is_ascii_whitespace` leaves out vertical tab (0x0B), which the
/// PNM grammar counts as a separator, hence the local set.
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// A forward-only cursor over a byte source.
///
/// Wraps any [`ByteReaderTrait`] source and layers the token stream on top
/// of it: [`next_token`](ByteReader::next_token) yields maximal runs of
/// non-whitespace bytes, one per call, without buffering anything beyond
/// the token currently being built.
///
/// Because the cursor never rewinds, raw reads and token reads compose:
/// after a token is returned the source sits exactly one delimiter past it,
/// i.e. on the first byte of whatever follows.
pub struct ByteReader<T: ByteReaderTrait> {
    inner:        T,
    token_buffer: Vec<u8>
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:        source,
            token_buffer: vec![]
        }
    }

    /// Destroy this reader returning the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Read a single byte, `Ok(None)` on a drained source.
    #[inline(always)]
    pub fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        self.inner.read_byte()
    }

    /// Read exactly `N` bytes or error out.
    #[inline(always)]
    pub fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        match self.inner.read_exact_bytes(&mut byte_store) {
            Ok(_) => Ok(byte_store),
            Err(e) => Err(e)
        }
    }

    /// Fill `buf` completely or error out.
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    /// Drain every byte left in the source into a freshly allocated buffer.
    pub fn read_remaining(&mut self) -> Result<Vec<u8>, ByteIoError> {
        let mut sink = Vec::new();
        self.inner.read_remaining(&mut sink)?;
        Ok(sink)
    }

    /// Return the next whitespace-delimited token, or `Ok(None)` once the
    /// source holds nothing but whitespace.
    ///
    /// A token is the maximal run of non-whitespace bytes between
    /// whitespace runs; leading whitespace is discarded. The delimiter that
    /// terminates a token is consumed with it, so the byte after a token
    /// read is the first byte following that single delimiter. This is
    /// what puts the cursor on the first payload byte after the last header
    /// field.
    ///
    /// The returned slice borrows the reader's internal buffer and is valid
    /// until the next call.
    pub fn next_token(&mut self) -> Result<Option<&[u8]>, ByteIoError> {
        self.token_buffer.clear();

        loop {
            match self.inner.read_byte()? {
                Some(byte) if is_space(byte) => {
                    if !self.token_buffer.is_empty() {
                        break;
                    }
                    // still in a leading whitespace run
                }
                Some(byte) => self.token_buffer.push(byte),
                None => {
                    if self.token_buffer.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
            }
        }

        Ok(Some(&self.token_buffer))
    }
}
