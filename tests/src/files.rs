use std::path::PathBuf;

use anymap_core::colorspace::ColorSpace;
use anymap_core::raster::SampleBuffer;
use anymap_pnm::{encode_to_bytes, open_and_decode, save, PnmErrors};

use crate::raster_u8;

/// A unique throwaway path under the system temp directory.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("anymap-{}-{name}", std::process::id()))
}

#[test]
fn save_then_open_and_decode() {
    let path = temp_path("roundtrip.pgm");

    let raster = raster_u8(2, 2, ColorSpace::Luma, vec![1, 2, 3, 4]);
    let bytes = encode_to_bytes(&raster, 255).unwrap();

    save(&path, &bytes).unwrap();
    let (decoded, max_value) = open_and_decode(&path).unwrap();

    std::fs::remove_file(&path).ok();

    assert_eq!(decoded, raster);
    assert_eq!(max_value, 255);
}

#[test]
fn sixteen_bit_file_roundtrip() {
    let path = temp_path("wide.ppm");

    let source = {
        let mut bytes = b"P6 1 1 1000\n".to_vec();
        bytes.extend(300_u16.to_be_bytes());
        bytes.extend(0_u16.to_be_bytes());
        bytes.extend(1000_u16.to_be_bytes());
        bytes
    };

    save(&path, &source).unwrap();
    let (decoded, max_value) = open_and_decode(&path).unwrap();

    std::fs::remove_file(&path).ok();

    assert_eq!(max_value, 1000);
    assert_eq!(decoded.colorspace(), ColorSpace::RGB);
    assert_eq!(decoded.samples(), &SampleBuffer::U16(vec![300, 0, 1000]));
}

#[test]
fn opening_a_missing_path_is_a_file_open_error() {
    let path = temp_path("does-not-exist.pnm");

    let result = open_and_decode(&path);

    assert!(matches!(result, Err(PnmErrors::FileOpen(_, _))));
}

#[test]
fn a_decode_failure_still_reports_its_kind_through_files() {
    let path = temp_path("truncated.pgm");

    save(&path, b"P5 2 2 255\n\x00").unwrap();
    let result = open_and_decode(&path);

    std::fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(PnmErrors::Format(anymap_pnm::FormatProblem::Image))
    ));
}
