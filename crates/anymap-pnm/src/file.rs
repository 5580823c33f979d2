/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing PNM files.
//!
//! These are the conveniences a front end calls: open-and-decode a path,
//! encode a raster to bytes, save bytes to a path. File handles are
//! scoped: they close when the value owning them drops, on success and on
//! every error path alike. Open failures surface as
//! [`FileOpen`](PnmErrors::FileOpen) rather than a raw I/O error.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anymap_core::options::DecoderOptions;
use anymap_core::raster::Raster;

use crate::decoder::PnmDecoder;
use crate::encoder::PnmEncoder;
use crate::errors::PnmErrors;

/// Open `path` for reading, mapping any failure to `FileOpen`.
fn open_pnm_file(path: &Path) -> Result<BufReader<File>, PnmErrors> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) => Err(PnmErrors::FileOpen(path.to_path_buf(), err))
    }
}

/// Decode the PNM file at `path`.
///
/// Returns the raster together with the maximum sample value the header
/// declared; callers re-encoding the image need the latter.
///
/// The file is read through a buffered reader as the decoder pulls bytes;
/// it is never loaded whole ahead of parsing.
pub fn open_and_decode<P: AsRef<Path>>(path: P) -> Result<(Raster, usize), PnmErrors> {
    open_and_decode_with_options(path, DecoderOptions::default())
}

/// Decode the PNM file at `path` with non default options, as opposed to
/// [`open_and_decode`]
pub fn open_and_decode_with_options<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<(Raster, usize), PnmErrors> {
    let file = open_pnm_file(path.as_ref())?;

    let mut decoder = PnmDecoder::new_with_options(file, options);
    let raster = decoder.decode()?;
    let max_value = decoder.max_value();

    Ok((raster, max_value))
}

/// Encode `raster` into an in-memory PNM byte sequence.
pub fn encode_to_bytes(raster: &Raster, max_value: usize) -> Result<Vec<u8>, PnmErrors> {
    let mut out = Vec::new();

    PnmEncoder::new(&mut out).encode(raster, max_value)?;

    Ok(out)
}

/// Write `data` to the file at `path`, creating or truncating it.
///
/// Creation failures map to `FileOpen` like the read side; write failures
/// surface as I/O errors.
pub fn save<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), PnmErrors> {
    let path = path.as_ref();

    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(err) => return Err(PnmErrors::FileOpen(path.to_path_buf(), err))
    };

    file.write_all(data)?;

    Ok(())
}
