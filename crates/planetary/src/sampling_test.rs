use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{SpectralType, StellarType};
use units::Length;

use crate::sampling::{
    metallicity_boost, sample_from_bins, sample_moon_count, sample_planet_count,
    sample_planet_mass, MoonHostClass, OrbitalBand, MAX_MOONS, MAX_PLANETS, PLANET_MASS_BINS,
};

#[test]
fn test_metallicity_boost() {
    assert_relative_eq!(metallicity_boost(0.0), 1.0);
    assert_relative_eq!(metallicity_boost(0.3), 10.0_f64.powf(0.6), epsilon = 1e-12);
    assert_relative_eq!(metallicity_boost(-2.0), 0.1);
    assert_relative_eq!(metallicity_boost(0.6), 4.0);
}

#[test]
fn test_orbital_band_from_frost_ratio() {
    let frost = Length::from_au(2.67);
    assert_eq!(OrbitalBand::from_distance(Length::from_au(1.0), frost), OrbitalBand::Inner);
    assert_eq!(OrbitalBand::from_distance(Length::from_au(5.2), frost), OrbitalBand::NearFrost);
    assert_eq!(OrbitalBand::from_distance(Length::from_au(30.0), frost), OrbitalBand::Outer);
}

#[test]
fn test_bin_sampling_stays_in_bin() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let weights = [0.0, 1.0, 0.0];
    let bins = [(0.1, 0.5), (2.0, 10.0), (50.0, 100.0)];
    for _ in 0..1000 {
        let x = sample_from_bins(&mut rng, &weights, &bins);
        assert!((2.0..=10.0).contains(&x), "sampled {x}");
    }
}

#[test]
fn test_planet_mass_within_table() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let (min, max) = (PLANET_MASS_BINS[0].0, PLANET_MASS_BINS[6].1);
    for band in [OrbitalBand::Inner, OrbitalBand::NearFrost, OrbitalBand::Outer] {
        for _ in 0..1000 {
            let m = sample_planet_mass(&mut rng, band, 0.0);
            assert!(m >= min && m <= max);
        }
    }
}

#[test]
fn test_inner_band_has_no_super_jupiters() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    for _ in 0..5000 {
        assert!(sample_planet_mass(&mut rng, OrbitalBand::Inner, 0.5) <= 1000.0);
    }
}

#[test]
fn test_metal_rich_stars_form_more_giants() {
    let giants = |metallicity: f64| {
        let mut rng = ChaChaRng::seed_from_u64(21);
        (0..10_000)
            .filter(|_| sample_planet_mass(&mut rng, OrbitalBand::NearFrost, metallicity) > 50.0)
            .count()
    };
    assert!(giants(0.3) > giants(-0.5));
}

#[test]
fn test_planet_count_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let g = StellarType::MainSequence(SpectralType::G);
    for _ in 0..2000 {
        assert!(sample_planet_count(&mut rng, &g, 0.6) <= MAX_PLANETS);
    }
}

#[test]
fn test_sunlike_stars_have_more_planets_than_neutron_stars() {
    let total = |stellar_type: StellarType| {
        let mut rng = ChaChaRng::seed_from_u64(13);
        (0..2000)
            .map(|_| sample_planet_count(&mut rng, &stellar_type, 0.0))
            .sum::<u32>()
    };
    let sunlike = total(StellarType::MainSequence(SpectralType::G));
    assert!(sunlike > 4 * total(StellarType::NeutronStar));
}

#[test]
fn test_moon_host_class() {
    assert_eq!(MoonHostClass::from_earth_masses(1.0), MoonHostClass::Terrestrial);
    assert_eq!(MoonHostClass::from_earth_masses(5.0), MoonHostClass::SuperEarth);
    assert_eq!(MoonHostClass::from_earth_masses(17.0), MoonHostClass::IceGiant);
    assert_eq!(MoonHostClass::from_earth_masses(318.0), MoonHostClass::GasGiant);
}

#[test]
fn test_terrestrial_moon_count_at_most_two() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    for _ in 0..2000 {
        assert!(sample_moon_count(&mut rng, MoonHostClass::Terrestrial) <= 2);
    }
}

#[test]
fn test_gas_giants_have_more_moons() {
    let total = |host: MoonHostClass| {
        let mut rng = ChaChaRng::seed_from_u64(2);
        (0..2000).map(|_| sample_moon_count(&mut rng, host)).sum::<u32>()
    };
    assert!(total(MoonHostClass::GasGiant) > 5 * total(MoonHostClass::Terrestrial));
    let mut rng = ChaChaRng::seed_from_u64(3);
    for _ in 0..2000 {
        assert!(sample_moon_count(&mut rng, MoonHostClass::GasGiant) <= MAX_MOONS);
    }
}
