//! Round-trip and boundary tests for the ADM encoder/decoder.

use mans::adm::{decode, encode};

fn roundtrip_u16(elements: &[u16]) {
    let container = encode(elements);
    let recovered: Vec<u16> = decode(&container).unwrap();
    assert_eq!(recovered, elements);
}

fn roundtrip_u32(elements: &[u32]) {
    let container = encode(elements);
    let recovered: Vec<u32> = decode(&container).unwrap();
    assert_eq!(recovered, elements);
}

#[test]
fn empty_input_maps_to_empty_container() {
    let container = encode::<u16>(&[]);
    assert!(container.is_empty());
    let recovered: Vec<u16> = decode(&container).unwrap();
    assert!(recovered.is_empty());
}

#[test]
fn single_element() {
    roundtrip_u16(&[42]);
}

#[test]
fn exactly_one_group() {
    let elements: Vec<u16> = (0..512).map(|i| 1000 + i as u16).collect();
    roundtrip_u16(&elements);
}

#[test]
fn partial_final_group() {
    // 512*3 + 37: exercises the trailing-empty-lane path in the encoder.
    let elements: Vec<u16> = (0..(512 * 3 + 37)).map(|i| (i % 4000) as u16).collect();
    roundtrip_u16(&elements);
}

#[test]
fn partial_final_lane_within_group() {
    // A final group with fewer than 16 elements in its last lane.
    let elements: Vec<u16> = (0..520).map(|i| 50_000u16.wrapping_add(i as u16)).collect();
    roundtrip_u16(&elements);
}

#[test]
fn constant_array_all_equal_to_center() {
    // spec.md §8 Property 5: every code byte is 1, and every element needs
    // zero overflow bytes, so each lane writes a single terminal '1' bit per
    // element with no interior '0' continuation bits.
    let elements = vec![7u16; 1024];
    let container = encode(&elements);

    let header = mans::adm::FileHeader::read(&container).unwrap();
    let codes_start = mans::adm::FILE_HEADER_LEN + header.len1 as usize + header.len2 as usize;
    let codes = &container[codes_start..codes_start + header.len3 as usize];
    assert!(codes.iter().all(|&c| c == 1), "every code byte must be 1 when every element equals its group center");

    let bit_signals = &container[codes_start + header.len3 as usize..];
    assert!(!bit_signals.is_empty());
    assert!(
        bit_signals.iter().all(|&b| b == 0xFF),
        "bit_signals must carry only terminal bits (no overflow continuation) for a constant array"
    );

    let recovered: Vec<u16> = decode(&container).unwrap();
    assert_eq!(recovered, elements);
}

#[test]
fn u32_wide_range() {
    let elements: Vec<u32> = (0..2000).map(|i| i * 100_003).collect();
    roundtrip_u32(&elements);
}

#[test]
fn residual_boundary_diffs() {
    // diff values straddling the 126-wide residual bucket boundary, both
    // above and below the center, exercise the sign-bit/overflow-count edges.
    let center = 10_000u16;
    let diffs: [i32; 6] = [125, 126, 127, 251, 252, 253];
    let mut elements = vec![center; 512];
    for (i, &d) in diffs.iter().enumerate() {
        elements[i * 2] = (center as i32 + d) as u16;
        elements[i * 2 + 1] = (center as i32 - d) as u16;
    }
    roundtrip_u16(&elements);
}

#[test]
fn rejects_truncated_container() {
    let elements: Vec<u16> = (0..600).map(|i| i as u16).collect();
    let mut container = encode(&elements);
    container.truncate(container.len() - 4);
    let result: Result<Vec<u16>, _> = decode(&container);
    assert!(result.is_err());
}
