//! Round-trip tests for the PANS tabulated-rANS byte coder.

use mans::pans::{decode, encode};

fn roundtrip(data: &[u8]) {
    let container = encode(data);
    let recovered = decode(&container).unwrap();
    assert_eq!(recovered, data);
}

#[test]
fn empty_input_maps_to_empty_container() {
    let container = encode(&[]);
    assert!(container.is_empty());
    assert_eq!(decode(&container).unwrap(), Vec::<u8>::new());
}

#[test]
fn single_byte() {
    roundtrip(&[0xAB]);
}

#[test]
fn single_symbol_repeated() {
    // Degenerate histogram: one symbol gets the entire 1024-slot table.
    let data = vec![7u8; 5000];
    let container = encode(&data);

    let pdf = mans::pans::types::read_symbol_table(&container[mans::pans::types::PANS_HEADER_LEN..]).unwrap();
    for (s, &p) in pdf.iter().enumerate() {
        if s == 7 {
            assert_eq!(p, 1024, "the sole observed symbol must claim the entire probability table");
        } else {
            assert_eq!(p, 0, "symbols never observed must carry zero probability mass");
        }
    }

    roundtrip(&data);
}

#[test]
fn two_symbols_skewed() {
    let mut data = vec![0u8; 4000];
    data.extend(std::iter::repeat(1u8).take(96));
    roundtrip(&data);
}

#[test]
fn exactly_one_block() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    roundtrip(&data);
}

#[test]
fn multiple_blocks_with_partial_final_block() {
    let data: Vec<u8> = (0..10_000u32).map(|i| ((i * 37) % 256) as u8).collect();
    roundtrip(&data);
}

#[test]
fn full_256_symbol_alphabet_uniform() {
    let data: Vec<u8> = (0..PANS_TEST_N).map(|i| (i % 256) as u8).collect();
    roundtrip(&data);
}

const PANS_TEST_N: usize = 20_000;

#[test]
fn block_not_a_multiple_of_warp_size() {
    // decoded_bytes in the final block isn't a multiple of 32, exercising
    // the uneven per-lane symbol counts.
    let data: Vec<u8> = (0..4096 * 2 + 17).map(|i| (i % 13) as u8).collect();
    roundtrip(&data);
}

#[test]
fn rejects_bad_magic() {
    let mut container = encode(&vec![3u8; 5000]);
    container[0] ^= 0xFF;
    assert!(decode(&container).is_err());
}

#[test]
fn rejects_truncated_container() {
    let container = encode(&vec![9u8; 5000]);
    let truncated = &container[..container.len() - 8];
    assert!(decode(truncated).is_err());
}
