/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors surfaced by the PNM decoder and encoder.
//!
//! Everything that can go wrong is a variant of [`PnmErrors`]; callers
//! pattern-match once on the kind and can fall back to a generic message
//! for kinds they do not recognize. The codec never recovers internally,
//! each failure is terminal for the call that hit it.

use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use anymap_core::bytestream::ByteIoError;

/// The header or payload section that failed to parse.
pub enum FormatProblem {
    /// The tag line's width/height/maxval fields were missing or not
    /// numeric
    Header,
    /// The declared maximum value is outside `[1, 65535]`
    MaxVal,
    /// The pixel payload is short, ragged or not numeric
    Image,
    /// The assembled sample count does not match the declared dimensions
    ImageDataLength
}

impl Display for FormatProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatProblem::Header => write!(f, "header"),
            FormatProblem::MaxVal => write!(f, "max_val"),
            FormatProblem::Image => write!(f, "image"),
            FormatProblem::ImageDataLength => write!(f, "image data length")
        }
    }
}

/// Why an in-memory raster could not be encoded.
pub enum DataProblem {
    /// The raster's channel count has no PNM tag (only grayscale and RGB
    /// can be written)
    Shape,
    /// The requested maximum value is above 65535
    MaxVal,
    /// A sample does not fit the sample width the maximum value selected
    Dtype
}

impl Display for DataProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            DataProblem::Shape => write!(f, "shape"),
            DataProblem::MaxVal => write!(f, "max_val"),
            DataProblem::Dtype => write!(f, "dtype")
        }
    }
}

/// Errors occurring during decoding and encoding
pub enum PnmErrors {
    /// Opening the underlying file failed; carries the path for the
    /// one-line message and the source error for the full trace
    FileOpen(PathBuf, std::io::Error),
    /// The first bytes of the source are not one of the `P2`, `P3`, `P5`,
    /// `P6` tags; carries whatever bytes were actually read
    UnknownTag(Vec<u8>),
    /// A malformed header field or pixel payload
    Format(FormatProblem),
    /// A supplied raster that cannot be encoded
    Data(DataProblem),
    /// Dimensions above the configured decode limit, expected and found
    LargeDimensions(usize, usize),
    /// An I/O failure below the codec
    IoErrors(ByteIoError)
}

impl Debug for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FileOpen(path, err) => {
                writeln!(f, "Error opening file {}: {err}", path.display())
            }
            Self::UnknownTag(tag) => {
                writeln!(f, "Unknown tag {:?}", String::from_utf8_lossy(tag))
            }
            Self::Format(part) => {
                writeln!(f, "Invalid {part}")
            }
            Self::Data(problem) => {
                writeln!(f, "Invalid image ({problem})")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err:?}")
            }
        }
    }
}

impl From<ByteIoError> for PnmErrors {
    fn from(value: ByteIoError) -> Self {
        PnmErrors::IoErrors(value)
    }
}

impl From<std::io::Error> for PnmErrors {
    fn from(value: std::io::Error) -> Self {
        PnmErrors::IoErrors(ByteIoError::StdIoError(value))
    }
}
