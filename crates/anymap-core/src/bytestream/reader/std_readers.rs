/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::BufRead;

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

/// Every `BufRead` type is a byte source.
///
/// This single implementation covers `&[u8]`, `Cursor<T>` and
/// `BufReader<File>` alike; without seeking in the trait they all reduce
/// to `fill_buf`/`consume` plus `Read`.
impl<T: BufRead> ByteReaderTrait for T {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        let available = self.fill_buf().map_err(ByteIoError::from)?;

        match available.first() {
            Some(byte) => {
                let byte = *byte;
                self.consume(1);
                Ok(Some(byte))
            }
            None => Ok(None)
        }
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        self.read_to_end(sink).map_err(ByteIoError::from)
    }
}
