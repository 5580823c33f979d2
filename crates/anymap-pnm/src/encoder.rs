use std::borrow::Cow;
use std::io::Write;

use anymap_core::colorspace::ColorSpace;
use anymap_core::raster::{Raster, SampleBuffer};
use anymap_core::sample_depth::SampleDepth;

use crate::decoder::PnmTag;
use crate::errors::{DataProblem, PnmErrors};

/// A PNM encoder
///
/// Writes a raster out as one of the raw binary variants, `P5` for
/// grayscale and `P6` for RGB, picked from the raster's shape. The sample
/// width on the wire follows the requested maximum value with the same
/// rule decoding uses, not the width the raster happens to be stored at;
/// samples are re-cast where the two differ.
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new PNM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    /// Write the header line for the raw formats
    fn write_headers(
        &mut self, tag: PnmTag, width: usize, height: usize, max_value: usize
    ) -> Result<(), PnmErrors> {
        let header = format!("{tag} {width} {height} {max_value}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `raster` with the given maximum sample value.
    ///
    /// # Errors
    /// - a raster that is neither grayscale nor RGB has no PNM tag
    /// - a maximum value above 65535 is unrepresentable
    /// - a stored sample that does not fit the width `max_value` selects
    ///   cannot be narrowed
    pub fn encode(&mut self, raster: &Raster, max_value: usize) -> Result<(), PnmErrors> {
        let tag = tag_for_colorspace(raster.colorspace())?;

        if max_value > usize::from(u16::MAX) {
            return Err(PnmErrors::Data(DataProblem::MaxVal));
        }

        let depth = SampleDepth::from_max_value(max_value);

        // the payload is assembled before any byte is written, so a cast
        // failure leaves the sink untouched
        let payload: Cow<[u8]> = match (raster.samples(), depth) {
            (SampleBuffer::U8(samples), SampleDepth::Eight) => Cow::Borrowed(samples.as_slice()),
            (SampleBuffer::U8(samples), SampleDepth::Sixteen) => {
                // widening is always value preserving
                Cow::Owned(
                    samples
                        .iter()
                        .flat_map(|x| u16::from(*x).to_be_bytes())
                        .collect()
                )
            }
            (SampleBuffer::U16(samples), SampleDepth::Sixteen) => {
                // netpbm stores 16 bit samples as big-endian, so we
                // emulate that
                Cow::Owned(samples.iter().flat_map(|x| x.to_be_bytes()).collect())
            }
            (SampleBuffer::U16(samples), SampleDepth::Eight) => {
                // narrowing must preserve every value exactly
                let mut owned_data = Vec::with_capacity(samples.len());

                for sample in samples {
                    match u8::try_from(*sample) {
                        Ok(byte) => owned_data.push(byte),
                        Err(_) => return Err(PnmErrors::Data(DataProblem::Dtype))
                    }
                }

                Cow::Owned(owned_data)
            }
            (_, SampleDepth::Unknown) => unreachable!()
        };

        self.write_headers(tag, raster.width(), raster.height(), max_value)?;
        self.writer.write_all(&payload)?;

        Ok(())
    }
}

fn tag_for_colorspace(colorspace: ColorSpace) -> Result<PnmTag, PnmErrors> {
    match colorspace {
        ColorSpace::Luma => Ok(PnmTag::P5),
        ColorSpace::RGB => Ok(PnmTag::P6),
        _ => Err(PnmErrors::Data(DataProblem::Shape))
    }
}
