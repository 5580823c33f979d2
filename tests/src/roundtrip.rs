use anymap_core::colorspace::ColorSpace;
use anymap_core::raster::{Raster, SampleBuffer};
use anymap_pnm::{encode_to_bytes, PnmDecoder};
use nanorand::{Rng, WyRand};

use crate::{raster_u16, raster_u8};

/// encode → decode must reproduce the raster and the max value exactly.
fn assert_roundtrip(raster: &Raster, max_value: usize) {
    let bytes = encode_to_bytes(raster, max_value).unwrap();

    let mut decoder = PnmDecoder::new(&bytes[..]);
    let decoded = decoder.decode().unwrap();

    assert_eq!(&decoded, raster);
    assert_eq!(decoder.max_value(), max_value);
}

#[test]
fn eight_bit_grayscale_roundtrips() {
    let raster = raster_u8(3, 2, ColorSpace::Luma, vec![0, 1, 127, 128, 254, 255]);

    assert_roundtrip(&raster, 255);
}

#[test]
fn eight_bit_rgb_roundtrips() {
    let raster = raster_u8(2, 2, ColorSpace::RGB, (0..12).collect());

    assert_roundtrip(&raster, 255);
}

#[test]
fn sixteen_bit_grayscale_roundtrips() {
    let raster = raster_u16(2, 2, ColorSpace::Luma, vec![0, 300, 40000, 65535]);

    assert_roundtrip(&raster, 65535);
}

#[test]
fn sixteen_bit_rgb_roundtrips() {
    let raster = raster_u16(1, 2, ColorSpace::RGB, vec![1, 2, 3, 60000, 500, 65535]);

    assert_roundtrip(&raster, 65535);
}

#[test]
fn odd_max_values_roundtrip() {
    // a max value is carried verbatim, samples are never rescaled to it
    let raster = raster_u8(2, 1, ColorSpace::Luma, vec![3, 17]);
    assert_roundtrip(&raster, 100);

    let raster = raster_u16(2, 1, ColorSpace::Luma, vec![3, 300]);
    assert_roundtrip(&raster, 300);
}

#[test]
fn random_rasters_roundtrip() {
    let mut rand = WyRand::new();

    for _ in 0..50 {
        let width = rand.generate_range(1_usize..=16);
        let height = rand.generate_range(1_usize..=16);
        let colorspace = if rand.generate::<bool>() {
            ColorSpace::RGB
        } else {
            ColorSpace::Luma
        };
        let count = width * height * colorspace.num_components();

        if rand.generate::<bool>() {
            let max_value = rand.generate_range(1_usize..=255);
            let samples = (0..count)
                .map(|_| rand.generate_range(0_u64..=max_value as u64) as u8)
                .collect();

            assert_roundtrip(&raster_u8(width, height, colorspace, samples), max_value);
        } else {
            let max_value = rand.generate_range(256_usize..=65535);
            let samples = (0..count)
                .map(|_| rand.generate_range(0_u64..=max_value as u64) as u16)
                .collect();

            assert_roundtrip(&raster_u16(width, height, colorspace, samples), max_value);
        }
    }
}

#[test]
fn plain_sources_roundtrip_through_the_raw_encoder() {
    // P2 in, P5 out, identical samples either way
    let plain = b"P2 3 1 255\n0 128 255";

    let raster = PnmDecoder::new(&plain[..]).decode().unwrap();
    let bytes = encode_to_bytes(&raster, 255).unwrap();

    assert!(bytes.starts_with(b"P5 3 1 255\n"));

    let again = PnmDecoder::new(&bytes[..]).decode().unwrap();
    assert_eq!(again, raster);
    assert_eq!(again.samples(), &SampleBuffer::U8(vec![0, 128, 255]));
}

#[test]
fn widened_eight_bit_raster_survives_a_sixteen_bit_trip() {
    // encoding an 8-bit raster at a wide max value decodes as 16-bit
    let raster = raster_u8(2, 1, ColorSpace::Luma, vec![5, 250]);
    let bytes = encode_to_bytes(&raster, 1000).unwrap();

    let decoded = PnmDecoder::new(&bytes[..]).decode().unwrap();

    assert_eq!(decoded.samples(), &SampleBuffer::U16(vec![5, 250]));
}
