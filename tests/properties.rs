//! End-to-end property and scenario tests for the streaming
//! piece-commitment calculator.

use commp::{extend_commp, CommpAccumulator, Error};
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use rstest::rstest;

fn deterministic_bytes(seed: u64, len: usize) -> Vec<u8> {
    // XorShift seeded from a fixed value for reproducible test data.
    let mut seed_bytes = [0u8; 16];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    let mut rng = XorShiftRng::from_seed(seed_bytes);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

#[test]
fn chunk_independence_across_many_partitions() {
    let data = deterministic_bytes(1337, 1 << 16);

    let mut whole = CommpAccumulator::new();
    whole.write(&data).unwrap();
    let (expected_root, expected_size) = whole.digest().unwrap();

    for chunk_size in [1usize, 2, 3, 127, 128, 254, 4096, data.len() + 1] {
        let mut acc = CommpAccumulator::new();
        for chunk in data.chunks(chunk_size.max(1)) {
            acc.write(chunk).unwrap();
        }
        let (root, size) = acc.digest().unwrap();
        assert_eq!(root, expected_root, "chunk size {chunk_size}");
        assert_eq!(size, expected_size, "chunk size {chunk_size}");
    }
}

#[rstest]
#[case(65, 128)]
#[case(66, 128)]
#[case(126, 128)]
#[case(127, 128)]
#[case(128, 256)]
#[case(1016, 1024)]
#[case(1017, 2048)]
#[case(70_000, 131_072)]
fn padded_size_law_holds_across_many_lengths(#[case] payload_len: u64, #[case] expected_padded: u64) {
    let mut acc = CommpAccumulator::new();
    acc.write(&vec![0xAAu8; payload_len as usize]).unwrap();
    let (_, padded) = acc.digest().unwrap();

    let raw = payload_len.div_ceil(127) * 128;
    assert_eq!(raw.next_power_of_two().max(128), expected_padded, "fixture sanity check");
    assert_eq!(padded.bytes(), expected_padded, "payload length {payload_len}");
}

#[test]
fn extension_agreement_zero_padding_to_a_larger_piece() {
    // A payload whose natural padded size is 128 bytes, extended to
    // 1024 bytes, must equal digesting the same payload directly
    // zero-padded out to occupy the full 1024-byte piece.
    let payload = deterministic_bytes(99, 100);

    let mut small = CommpAccumulator::new();
    small.write(&payload).unwrap();
    let (small_commitment, small_size) = small.digest().unwrap();
    assert_eq!(small_size.bytes(), 128);

    let extended = extend_commp(&small_commitment, 128, 1024).unwrap();

    // 889 bytes is exactly 7 full Fr32 quads (7 * 127): the smallest
    // unpadded length whose padded size rounds up to 1024 bytes
    // (raw = 7 * 128 = 896, next_power_of_two(896) = 1024). Zero-fill
    // the payload out to that length and digest it directly.
    let mut zero_filled = payload.clone();
    zero_filled.resize(889, 0);
    let mut direct = CommpAccumulator::new();
    direct.write(&zero_filled).unwrap();
    let (direct_commitment, direct_size) = direct.digest().unwrap();

    assert_eq!(direct_size.bytes(), 1024);
    assert_eq!(extended, direct_commitment);
}

#[test]
fn extension_is_identity_when_sizes_match() {
    let payload = deterministic_bytes(7, 500);
    let mut acc = CommpAccumulator::new();
    acc.write(&payload).unwrap();
    let (commitment, size) = acc.digest().unwrap();

    let extended = extend_commp(&commitment, size.bytes(), size.bytes()).unwrap();
    assert_eq!(extended, commitment);
}

#[test]
fn threshold_error_below_65_bytes_succeeds_at_65() {
    for n in 0..65 {
        let mut acc = CommpAccumulator::new();
        if n > 0 {
            acc.write(&vec![0u8; n]).unwrap();
        }
        assert_eq!(acc.digest(), Err(Error::InsufficientInput), "n = {n}");
    }

    let mut acc = CommpAccumulator::new();
    acc.write(&[0u8; 65]).unwrap();
    assert!(acc.digest().is_ok());
}

#[test]
fn reset_after_writes_is_indistinguishable_from_fresh() {
    let mut acc = CommpAccumulator::new();
    acc.write(&deterministic_bytes(5, 10_000)).unwrap();
    acc.reset();

    let payload = deterministic_bytes(6, 300);
    acc.write(&payload).unwrap();
    let (reset_commitment, reset_size) = acc.digest().unwrap();

    let mut fresh = CommpAccumulator::new();
    fresh.write(&payload).unwrap();
    let (fresh_commitment, fresh_size) = fresh.digest().unwrap();

    assert_eq!(reset_commitment, fresh_commitment);
    assert_eq!(reset_size, fresh_size);
}

#[test]
fn reset_is_safe_on_a_never_used_accumulator() {
    let mut acc = CommpAccumulator::new();
    acc.reset();
    assert_eq!(acc.digest(), Err(Error::InsufficientInput));
}

#[test]
fn every_node_and_the_final_commitment_have_clear_top_bits() {
    let payload = deterministic_bytes(42, 5_000);
    let mut acc = CommpAccumulator::new();
    acc.write(&payload).unwrap();
    let (commitment, _) = acc.digest().unwrap();
    assert_eq!(commitment[31] & 0xC0, 0);
}
