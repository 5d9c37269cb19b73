use rand::Rng;

use crate::seed_stream::{mix64, Purpose, SeedStream};

#[test]
fn test_mix64_reference_values() {
    // SplitMix64 finalizer of 0 is 0; of GOLDEN_GAMMA is the first SplitMix64 output for seed 0
    assert_eq!(mix64(0), 0);
    assert_eq!(mix64(0x9E37_79B9_7F4A_7C15), 0xE220_A839_7B1D_CDAF);
}

#[test]
fn test_same_seed_same_stream() {
    let a: Vec<u64> = (0..8)
        .map({
            let mut rng = SeedStream::for_purpose(12_345_678, Purpose::Properties).rng();
            move |_| rng.random()
        })
        .collect();
    let b: Vec<u64> = (0..8)
        .map({
            let mut rng = SeedStream::for_purpose(12_345_678, Purpose::Properties).rng();
            move |_| rng.random()
        })
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_purposes_and_children_are_independent() {
    let seed = 987_654_321;
    let streams = [
        SeedStream::for_purpose(seed, Purpose::Position),
        SeedStream::for_purpose(seed, Purpose::Properties),
        SeedStream::for_purpose(seed, Purpose::Companions),
        SeedStream::for_purpose(seed, Purpose::Planets),
        SeedStream::for_purpose(seed, Purpose::Moons),
        SeedStream::for_purpose(seed, Purpose::Planets).child(1),
        SeedStream::for_purpose(seed, Purpose::Planets).child(2),
    ];
    for (i, a) in streams.iter().enumerate() {
        for b in streams.iter().skip(i + 1) {
            assert_ne!(a.value(), b.value());
        }
    }
}

#[test]
fn test_neighbouring_seeds_diverge() {
    let a = SeedStream::new(1).value();
    let b = SeedStream::new(2).value();
    // Avalanche: roughly half the bits differ
    let differing = (a ^ b).count_ones();
    assert!((16..=48).contains(&differing), "{} bits differ", differing);
}
