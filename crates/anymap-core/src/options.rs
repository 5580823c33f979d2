//! Decoder options
//!
//! This module exposes a struct for which the decoder gets shared options
//! for decoding
//!

pub use crate::options::decoder::DecoderOptions;

mod decoder;
