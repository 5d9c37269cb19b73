use spatial::ChunkCoord;

use crate::address::{Address, BodyRef};
use crate::error::ForgeError;

fn parse(text: &str) -> Address {
    text.parse().unwrap_or_else(|e| panic!("{text}: {e}"))
}

fn is_malformed(text: &str) -> bool {
    matches!(
        text.parse::<Address>(),
        Err(ForgeError::MalformedAddress { .. })
    )
}

#[test]
fn test_bare_seed() {
    let address = parse("12345678");
    assert_eq!(address, Address::seed(12345678));
    assert_eq!(address.path().star, 'A');
}

#[test]
fn test_dash_form_full_suffix() {
    let address = parse("12345678-A-2-b");
    assert_eq!(address.body, BodyRef::Seed(12345678));
    assert_eq!(address.star, Some('A'));
    assert_eq!(address.planet, Some(2));
    assert_eq!(address.moon, Some('b'));
}

#[test]
fn test_dash_form_partial_suffixes() {
    let companion = parse("99-C");
    assert_eq!(companion.star, Some('C'));
    assert_eq!(companion.planet, None);

    let primary_planet = parse("99-3");
    assert_eq!(primary_planet.star, None);
    assert_eq!(primary_planet.planet, Some(3));

    let primary_moon = parse("99-12-a");
    assert_eq!(primary_moon.planet, Some(12));
    assert_eq!(primary_moon.moon, Some('a'));
}

#[test]
fn test_underscore_form() {
    let address = parse("260_45_0_100_A_2_b");
    let chunk = ChunkCoord::new(260, 45, 0).unwrap();
    assert_eq!(address.body, BodyRef::Chunk { chunk, index: 100 });
    assert_eq!(address.star, Some('A'));
    assert_eq!(address.planet, Some(2));
    assert_eq!(address.moon, Some('b'));
}

#[test]
fn test_underscore_form_negative_vertical() {
    let address = parse("260_45_-3_7_2");
    let chunk = ChunkCoord::new(260, 45, -3).unwrap();
    assert_eq!(address.body, BodyRef::Chunk { chunk, index: 7 });
    assert_eq!(address.planet, Some(2));
}

#[test]
fn test_both_forms_name_the_same_seed() {
    let chunked = parse("260_45_0_100_B_1");
    let seed = chunked.body.seed().unwrap();
    assert_eq!(seed, spatial::encode(260, 45, 0, 100).unwrap());

    let dashed = parse(&format!("{seed}-B-1"));
    assert_eq!(dashed.body.seed().unwrap(), seed);
    assert_eq!(dashed.path(), chunked.path());
}

#[test]
fn test_display_round_trips_text() {
    for text in ["12345678", "12345678-A-2-b", "7-C", "260_45_-3_100_A_2_b", "1_2_3_4"] {
        assert_eq!(parse(text).to_string(), text);
    }
}

#[test]
fn test_malformed_addresses() {
    assert!(is_malformed(""));
    assert!(is_malformed("abc"));
    assert!(is_malformed("-5"));
    assert!(is_malformed("12-"));
    assert!(is_malformed("12--2"));
    assert!(is_malformed("12-0"));
    assert!(is_malformed("12-b"));
    assert!(is_malformed("12-A-b"));
    assert!(is_malformed("12-AB"));
    assert!(is_malformed("12-2-B"));
    assert!(is_malformed("12-2-b-c"));
    assert!(is_malformed("12-A-B"));
    assert!(is_malformed("1_2_3"));
    assert!(is_malformed("1_x_3_4"));
    assert!(is_malformed("1_2_3_-4"));
    assert!(is_malformed("18446744073709551616"));
}

#[test]
fn test_out_of_range_chunk_is_validation_error() {
    let err = "1500_0_0_1".parse::<Address>().unwrap_err();
    assert!(matches!(err, ForgeError::Validation(_)));
    assert!(err.is_validation());
    assert!(!err.is_not_found());

    let err = "0_360_0_1".parse::<Address>().unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_index_past_seed_width_fails_on_seed() {
    let address = parse("1_2_3_68719476736");
    let err = address.body.seed().unwrap_err();
    assert!(matches!(err, ForgeError::Validation(_)));
}
