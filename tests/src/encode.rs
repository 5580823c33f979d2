use anymap_core::colorspace::ColorSpace;
use anymap_pnm::{encode_to_bytes, DataProblem, PnmEncoder, PnmErrors};

use crate::{raster_u16, raster_u8};

#[test]
fn grayscale_takes_the_p5_tag() {
    let raster = raster_u8(2, 2, ColorSpace::Luma, vec![1, 2, 3, 4]);

    let bytes = encode_to_bytes(&raster, 255).unwrap();

    assert_eq!(bytes, b"P5 2 2 255\n\x01\x02\x03\x04");
}

#[test]
fn rgb_takes_the_p6_tag() {
    let raster = raster_u8(1, 1, ColorSpace::RGB, vec![9, 8, 7]);

    let bytes = encode_to_bytes(&raster, 255).unwrap();

    assert_eq!(bytes, b"P6 1 1 255\n\x09\x08\x07");
}

#[test]
fn sixteen_bit_payload_is_big_endian_row_major() {
    let raster = raster_u16(2, 1, ColorSpace::Luma, vec![0x0102, 0x0304]);

    let bytes = encode_to_bytes(&raster, 65535).unwrap();

    assert_eq!(bytes, b"P5 2 1 65535\n\x01\x02\x03\x04");
}

#[test]
fn unencodable_channel_counts_are_shape_errors() {
    let raster = raster_u8(1, 1, ColorSpace::RGBA, vec![1, 2, 3, 4]);

    let result = encode_to_bytes(&raster, 255);

    assert!(matches!(result, Err(PnmErrors::Data(DataProblem::Shape))));
}

#[test]
fn max_val_above_sixteen_bits_is_a_data_error() {
    let raster = raster_u8(1, 1, ColorSpace::Luma, vec![0]);

    let result = encode_to_bytes(&raster, 70000);

    assert!(matches!(result, Err(PnmErrors::Data(DataProblem::MaxVal))));
}

#[test]
fn sixteen_bit_raster_narrows_when_max_val_allows() {
    let raster = raster_u16(2, 1, ColorSpace::Luma, vec![10, 200]);

    let bytes = encode_to_bytes(&raster, 255).unwrap();

    assert_eq!(bytes, b"P5 2 1 255\n\x0a\xc8");
}

#[test]
fn narrowing_a_wide_sample_is_a_dtype_error() {
    let raster = raster_u16(1, 1, ColorSpace::Luma, vec![256]);

    let result = encode_to_bytes(&raster, 100);

    assert!(matches!(result, Err(PnmErrors::Data(DataProblem::Dtype))));
}

#[test]
fn encoder_writes_into_any_sink() {
    let raster = raster_u8(1, 1, ColorSpace::Luma, vec![42]);

    let mut sink = Vec::new();
    PnmEncoder::new(&mut sink).encode(&raster, 255).unwrap();

    assert_eq!(sink, encode_to_bytes(&raster, 255).unwrap());
}

#[test]
fn max_val_choice_controls_the_sample_width() {
    let raster = raster_u8(1, 1, ColorSpace::Luma, vec![1]);

    // one byte per sample at 255, two at 256
    assert_eq!(encode_to_bytes(&raster, 255).unwrap().len(), b"P5 1 1 255\n".len() + 1);
    assert_eq!(encode_to_bytes(&raster, 256).unwrap().len(), b"P5 1 1 256\n".len() + 2);
}
