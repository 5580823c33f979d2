use core::fmt::{Display, Formatter};

use anymap_core::bytestream::{ByteReader, ByteReaderTrait};
use anymap_core::colorspace::ColorSpace;
use anymap_core::options::DecoderOptions;
use anymap_core::raster::{Raster, SampleBuffer};
use anymap_core::sample_depth::SampleDepth;
use log::info;

use crate::errors::{FormatProblem, PnmErrors};

/// The four classic PNM tags.
///
/// The tag is the only thing that decides payload encoding and channel
/// count: `P2`/`P3` carry whitespace-separated decimal samples, `P5`/`P6`
/// carry raw binary samples; `P2`/`P5` are grayscale, `P3`/`P6` RGB.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PnmTag {
    /// Plain (ASCII) grayscale
    P2,
    /// Plain (ASCII) RGB
    P3,
    /// Raw (binary) grayscale
    P5,
    /// Raw (binary) RGB
    P6
}

impl Display for PnmTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::P2 => write!(f, "P2"),
            Self::P3 => write!(f, "P3"),
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

impl PnmTag {
    /// Recognize a tag from the first bytes of a stream.
    ///
    /// Anything that is not exactly one of the four known two-byte tags,
    /// including a short read, is `None`.
    pub fn from_tag_bytes(bytes: &[u8]) -> Option<PnmTag> {
        match bytes {
            b"P2" => Some(PnmTag::P2),
            b"P3" => Some(PnmTag::P3),
            b"P5" => Some(PnmTag::P5),
            b"P6" => Some(PnmTag::P6),
            _ => None
        }
    }

    /// The colorspace this tag stores samples in.
    pub const fn colorspace(self) -> ColorSpace {
        match self {
            Self::P2 | Self::P5 => ColorSpace::Luma,
            Self::P3 | Self::P6 => ColorSpace::RGB
        }
    }

    /// Whether the payload is whitespace-separated decimal text rather
    /// than raw binary.
    pub const fn is_plain(self) -> bool {
        matches!(self, Self::P2 | Self::P3)
    }
}

/// An instance of a PNM decoder
///
/// The decoder can decode the P2, P3, P5 and P6 formats from any byte
/// source, pulling bytes strictly front to back. Headers and payload
/// share one cursor, so plain payload tokens continue exactly where the
/// header fields stopped.
pub struct PnmDecoder<T: ByteReaderTrait> {
    reader:          ByteReader<T>,
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    tag:             Option<PnmTag>,
    sample_depth:    SampleDepth,
    max_value:       usize,
    options:         DecoderOptions
}

impl<T: ByteReaderTrait> PnmDecoder<T> {
    /// Create a new PNM decoder with default options
    ///
    /// # Arguments
    /// - source: PNM encoded bytes
    ///
    /// # Example
    /// ```
    /// use anymap_pnm::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(&b"NOT VALID PNM"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(source: T) -> PnmDecoder<T> {
        PnmDecoder::new_with_options(source, DecoderOptions::default())
    }

    /// Create a new PNM decoder with the specified options
    ///
    /// # Arguments
    /// - source: PNM encoded bytes
    /// - options: Modified options for the decoder
    pub fn new_with_options(source: T, options: DecoderOptions) -> PnmDecoder<T> {
        PnmDecoder {
            reader: ByteReader::new(source),
            width: 0,
            height: 0,
            decoded_headers: false,
            tag: None,
            sample_depth: SampleDepth::Unknown,
            max_value: 0,
            options
        }
    }

    /// Read the PNM header and store it in internal state
    ///
    /// The header is the two raw tag bytes followed by three
    /// whitespace-delimited decimal fields: width, height and the maximum
    /// sample value. Calling this more than once is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PnmErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        // the tag is two raw bytes, before any whitespace handling starts
        let mut tag_bytes = Vec::with_capacity(2);

        for _ in 0..2 {
            match self.reader.read_byte()? {
                Some(byte) => tag_bytes.push(byte),
                None => break
            }
        }

        let tag = match PnmTag::from_tag_bytes(&tag_bytes) {
            Some(tag) => tag,
            None => return Err(PnmErrors::UnknownTag(tag_bytes))
        };

        let width = self.read_header_field()?;
        let height = self.read_header_field()?;

        if width == 0 || height == 0 {
            return Err(PnmErrors::Format(FormatProblem::Header));
        }

        if width > self.options.get_max_width() {
            return Err(PnmErrors::LargeDimensions(self.options.get_max_width(), width));
        }

        if height > self.options.get_max_height() {
            return Err(PnmErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        let max_value = self.read_header_field()?;

        if max_value == 0 || max_value > usize::from(u16::MAX) {
            return Err(PnmErrors::Format(FormatProblem::MaxVal));
        }

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.sample_depth = SampleDepth::from_max_value(max_value);
        self.tag = Some(tag);
        self.decoded_headers = true;

        info!("Tag: {tag}");
        info!("Colorspace: {:?}", tag.colorspace());
        info!("Width: {width}, height: {height}");
        info!("Max value: {max_value}, sample depth: {:?}", self.sample_depth);

        Ok(())
    }

    /// Draw one header field from the token stream.
    fn read_header_field(&mut self) -> Result<usize, PnmErrors> {
        let token = match self.reader.next_token()? {
            Some(token) => token,
            None => return Err(PnmErrors::Format(FormatProblem::Header))
        };

        match parse_decimal(token) {
            Some(value) => Ok(value),
            None => Err(PnmErrors::Format(FormatProblem::Header))
        }
    }

    /// Decode a PNM encoded source and return the raster from it
    ///
    /// The sample width of the returned raster follows the header's
    /// maximum value: up to 255 gives 8-bit samples, above gives 16-bit.
    pub fn decode(&mut self) -> Result<Raster, PnmErrors> {
        self.decode_headers()?;

        let Some(tag) = self.tag else {
            // decode_headers leaves a tag behind on success
            return Err(PnmErrors::Format(FormatProblem::Header));
        };

        let colorspace = tag.colorspace();
        let sample_count = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(colorspace.num_components());

        let samples = if tag.is_plain() {
            self.decode_plain_samples(sample_count)?
        } else {
            self.decode_raw_samples(sample_count)?
        };

        match Raster::from_samples(self.width, self.height, colorspace, samples) {
            Ok(raster) => Ok(raster),
            Err(_) => Err(PnmErrors::Format(FormatProblem::ImageDataLength))
        }
    }

    /// Read a raw binary payload (P5/P6).
    ///
    /// Everything left in the source is payload. Too few bytes for the
    /// declared shape, or a trailing remainder that is not a whole sample,
    /// is malformed image data; surplus whole samples surface as a length
    /// mismatch when the raster is assembled.
    fn decode_raw_samples(&mut self, sample_count: usize) -> Result<SampleBuffer, PnmErrors> {
        let data = self.reader.read_remaining()?;

        match self.sample_depth {
            SampleDepth::Eight => {
                if data.len() < sample_count {
                    return Err(PnmErrors::Format(FormatProblem::Image));
                }
                Ok(SampleBuffer::U8(data))
            }
            SampleDepth::Sixteen => {
                if data.len() % 2 != 0 || data.len() / 2 < sample_count {
                    return Err(PnmErrors::Format(FormatProblem::Image));
                }

                let mut samples = Vec::with_capacity(data.len() / 2);

                for pair in data.chunks_exact(2) {
                    // 16 bit samples happen to be written in big-endian,
                    // i.e. that's what is supported by netpbm, so we
                    // emulate that.
                    samples.push(u16::from_be_bytes([pair[0], pair[1]]));
                }

                Ok(SampleBuffer::U16(samples))
            }
            SampleDepth::Unknown => unreachable!()
        }
    }

    /// Read a plain payload (P2/P3): one decimal token per sample, drawn
    /// from the same stream that produced the header.
    fn decode_plain_samples(&mut self, sample_count: usize) -> Result<SampleBuffer, PnmErrors> {
        match self.sample_depth {
            SampleDepth::Eight => {
                let mut samples = Vec::new();

                while samples.len() < sample_count {
                    samples.push(self.next_plain_value()? as u8);
                }

                Ok(SampleBuffer::U8(samples))
            }
            SampleDepth::Sixteen => {
                let mut samples = Vec::new();

                while samples.len() < sample_count {
                    samples.push(self.next_plain_value()? as u16);
                }

                Ok(SampleBuffer::U16(samples))
            }
            SampleDepth::Unknown => unreachable!()
        }
    }

    fn next_plain_value(&mut self) -> Result<usize, PnmErrors> {
        let token = match self.reader.next_token()? {
            Some(token) => token,
            None => return Err(PnmErrors::Format(FormatProblem::Image))
        };

        match parse_decimal(token) {
            Some(value) if value <= self.max_value => Ok(value),
            _ => Err(PnmErrors::Format(FormatProblem::Image))
        }
    }

    /// Return image dimensions as `(width, height)` or `None` if headers
    /// haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the image colorspace or `None` if headers haven't been
    /// decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        match self.tag {
            Some(tag) => Some(tag.colorspace()),
            None => None
        }
    }

    /// Return the image sample depth or `None` if headers haven't been
    /// decoded
    pub const fn sample_depth(&self) -> Option<SampleDepth> {
        if self.decoded_headers {
            Some(self.sample_depth)
        } else {
            None
        }
    }

    /// Return the tag the source declared or `None` if headers haven't
    /// been decoded
    pub const fn tag(&self) -> Option<PnmTag> {
        self.tag
    }

    /// Return the maximum sample value the header declared.
    ///
    /// This is `0` until headers have been decoded; a decoded header
    /// always carries a value in `[1, 65535]`.
    pub const fn max_value(&self) -> usize {
        self.max_value
    }
}

/// Parse a whole token as a base-10 unsigned integer.
///
/// Every byte must be an ASCII digit; empty tokens and overflow are
/// rejected.
fn parse_decimal(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }

    let mut value = 0_usize;

    for &byte in token {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))?;
    }

    Some(value)
}
