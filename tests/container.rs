//! End-to-end MANS container tests: dispatcher wiring, codec tag framing,
//! and the public typed API.

use mans::{compress, compress_u16, compress_u32, decompress, decompress_u16, decompress_u32, ElementType};

#[test]
fn empty_input_round_trips_to_empty_output() {
    assert!(compress_u16(&[], None).unwrap().is_empty());
    assert_eq!(decompress_u16(&[]).unwrap(), Vec::<u16>::new());
}

#[test]
fn low_variance_selects_adm_then_pans() {
    // Every 512-window stays within the default threshold of 4000.
    let elements: Vec<u16> = (0..4096).map(|i| (30_000 + (i % 50) as i64) as u16).collect();
    let container = compress_u16(&elements, None).unwrap();
    assert_eq!(container[0], 1, "dispatcher should have selected ADM+PANS");
    assert_eq!(decompress_u16(&container).unwrap(), elements);
}

#[test]
fn high_variance_selects_pans_only() {
    // Every window's range is the full u16 span, well past the threshold.
    let elements: Vec<u16> = (0..4096).map(|i| if i % 2 == 0 { 0u16 } else { 60_000u16 }).collect();
    let container = compress_u16(&elements, None).unwrap();
    assert_eq!(container[0], 2, "dispatcher should have selected PANS-only");
    assert_eq!(decompress_u16(&container).unwrap(), elements);
}

#[test]
fn custom_threshold_forces_pans_only() {
    let elements: Vec<u16> = vec![1000; 1024];
    let container = compress_u16(&elements, Some(0)).unwrap();
    assert_eq!(container[0], 2);
    assert_eq!(decompress_u16(&container).unwrap(), elements);
}

#[test]
fn u32_round_trip() {
    let elements: Vec<u32> = (0..3000).map(|i| 1_000_000 + i * 7).collect();
    let container = compress_u32(&elements, None).unwrap();
    assert_eq!(decompress_u32(&container).unwrap(), elements);
}

#[test]
fn rejects_unknown_codec_tag() {
    let elements: Vec<u16> = vec![1, 2, 3, 4];
    let mut container = compress_u16(&elements, None).unwrap();
    container[0] = 99;
    assert!(decompress_u16(&container).is_err());
}

#[test]
fn byte_oriented_api_matches_typed_api() {
    let elements: Vec<u16> = (0..1500).map(|i| i as u16).collect();
    let mut raw = Vec::with_capacity(elements.len() * 2);
    for &v in &elements {
        raw.extend_from_slice(&v.to_le_bytes());
    }

    let via_bytes = compress(ElementType::U16, &raw, None).unwrap();
    let via_typed = compress_u16(&elements, None).unwrap();
    assert_eq!(via_bytes, via_typed);

    let recovered = decompress(ElementType::U16, &via_bytes).unwrap();
    assert_eq!(recovered, raw);
}
