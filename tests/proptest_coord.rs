//! Property-based tests for the coordinate codec, hash, ordering and parser.
//!
//! These tests verify:
//! - C1: Binary records roundtrip within one lattice step
//! - C2: Spatial hash and id are deterministic and collision-free on lattice pairs
//! - C3: Ordering is a strict weak order, latitude first
//! - C4: Display text always parses back to the displayed coordinate

// Lattice roundtrips compare floats for bit-exact equality on purpose.
#![allow(clippy::float_cmp)]

use std::cmp::Ordering;

use geocoord_core::coord::hash::{deinterleave, interleave};
use geocoord_core::coord::lattice::{LAT_STEP, LON_STEP};
use geocoord_core::coord::MAX_RAW_COORD_VALUE;
use geocoord_core::{GeoCoord, LatticeCoord};
use proptest::prelude::*;

fn lattice_pair() -> impl Strategy<Value = LatticeCoord> {
    (0..=MAX_RAW_COORD_VALUE, 0..=MAX_RAW_COORD_VALUE)
        .prop_map(|(lat, lon)| LatticeCoord::new(lat, lon))
}

fn valid_coord() -> impl Strategy<Value = GeoCoord> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoCoord::new(lat, lon))
}

/// Coordinates drawn from a small grid so that ties on latitude are common.
fn grid_coord() -> impl Strategy<Value = GeoCoord> {
    (-3i32..=3, -3i32..=3).prop_map(|(lat, lon)| GeoCoord::new(f64::from(lat), f64::from(lon)))
}

// ============================================================================
// C1: Binary codec roundtrip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: decode(encode(c)) differs from c by at most one step per axis.
    #[test]
    fn c1_decode_encode_within_one_step(coord in valid_coord()) {
        let decoded = GeoCoord::decode(&coord.encode());

        prop_assert!((decoded.lat() - coord.lat()).abs() <= LAT_STEP);
        prop_assert!((decoded.lon() - coord.lon()).abs() <= LON_STEP);
    }

    /// Property: encode(decode(b)) reproduces any record produced by encode.
    #[test]
    fn c1_encode_decode_reproduces_bytes(coord in valid_coord()) {
        let record = coord.encode();
        prop_assert_eq!(GeoCoord::decode(&record).encode(), record);
    }

    /// Property: a record written for a lattice point decodes to that point.
    #[test]
    fn c1_lattice_points_survive_exactly(lattice in lattice_pair()) {
        let coord = lattice.to_coord();
        prop_assert_eq!(coord.lattice(), lattice);
        prop_assert_eq!(GeoCoord::decode(&coord.encode()), coord);
    }

    /// Property: the reserved top bit of each nibble in byte 6 stays clear.
    #[test]
    fn c1_terminal_byte_reserved_bits_clear(coord in valid_coord()) {
        prop_assert_eq!(coord.encode()[6] & 0x88, 0);
    }

    /// Property: shifting a lattice point by far less than a step changes
    /// neither the record nor the hash.
    #[test]
    fn c1_sub_resolution_shift_is_invisible(
        lattice in lattice_pair(),
        lat_shift in -0.25f64..0.25,
        lon_shift in -0.25f64..0.25,
    ) {
        let base = lattice.to_coord();
        let shifted = GeoCoord::new(
            base.lat() + lat_shift * LAT_STEP,
            base.lon() + lon_shift * LON_STEP,
        );

        prop_assert_eq!(shifted.encode(), base.encode());
        prop_assert_eq!(shifted.hash(), base.hash());
    }
}

// ============================================================================
// C2: Spatial hash and id
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: coordinates sharing a lattice pair share hash and id.
    #[test]
    fn c2_hash_deterministic_on_lattice(coord in valid_coord()) {
        let snapped = coord.snapped();
        prop_assert_eq!(snapped.hash(), coord.hash());
        prop_assert_eq!(snapped.id(), coord.id());
    }

    /// Property: distinct lattice pairs never share a hash or an id.
    #[test]
    fn c2_distinct_lattice_pairs_do_not_collide(a in lattice_pair(), b in lattice_pair()) {
        prop_assume!(a != b);
        let (ca, cb) = (a.to_coord(), b.to_coord());

        prop_assert_ne!(ca.hash(), cb.hash());
        prop_assert_ne!(ca.id(), cb.id());
    }

    /// Property: the hash is the bit interleaving of the lattice pair and
    /// can be split back into it.
    #[test]
    fn c2_hash_inverts_to_lattice(lattice in lattice_pair()) {
        let hash = lattice.to_coord().hash();

        prop_assert_eq!(hash, interleave(u64::from(lattice.lat), u64::from(lattice.lon)));
        prop_assert_eq!(deinterleave(hash), lattice);
        prop_assert!(hash < 1 << 54);
    }
}

// ============================================================================
// C3: Ordering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: exactly one of a < b, a == b, a > b holds, decided by
    /// latitude first and longitude on ties.
    #[test]
    fn c3_trichotomy_latitude_first(a in grid_coord(), b in grid_coord()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&held| held).count(), 1);

        let expected = a.lat()
            .partial_cmp(&b.lat())
            .and_then(|ord| if ord == Ordering::Equal { a.lon().partial_cmp(&b.lon()) } else { Some(ord) });
        prop_assert_eq!(a.partial_cmp(&b), expected);
    }

    /// Property: a < b implies !(b < a).
    #[test]
    fn c3_antisymmetric(a in grid_coord(), b in grid_coord()) {
        if a < b {
            prop_assert!(!(b < a));
        }
    }

    /// Property: a < b and b < c imply a < c.
    #[test]
    fn c3_transitive(a in grid_coord(), b in grid_coord(), c in grid_coord()) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
    }

    /// Property: total_cmp agrees with partial_cmp for finite, non-zero-signed values.
    #[test]
    fn c3_total_cmp_agrees(a in valid_coord(), b in valid_coord()) {
        prop_assume!(a.lat() != 0.0 && a.lon() != 0.0 && b.lat() != 0.0 && b.lon() != 0.0);
        prop_assert_eq!(Some(a.total_cmp(&b)), a.partial_cmp(&b));
    }
}

// ============================================================================
// C4: Parser
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: display text parses back to within half a unit of the last
    /// displayed decimal.
    #[test]
    fn c4_display_text_roundtrip(coord in valid_coord()) {
        let text = coord.display_text();
        let parsed = GeoCoord::parse(&text);
        prop_assert!(parsed.is_ok(), "display text {} failed to parse", text);

        let parsed = parsed.unwrap();
        prop_assert!((parsed.lat() - coord.lat()).abs() <= 0.000_005_000_1);
        prop_assert!((parsed.lon() - coord.lon()).abs() <= 0.000_005_000_1);
    }

    /// Property: degree/minute/second text parses to the sexagesimal sum with
    /// the hemisphere applied.
    #[test]
    fn c4_dms_roundtrip(
        lat_deg in 0u32..90,
        lon_deg in 0u32..180,
        minutes in 0u32..60,
        seconds in 0u32..60,
        south in any::<bool>(),
        west in any::<bool>(),
    ) {
        let text = format!(
            "{lat_deg}°{minutes}'{seconds}\" {} {lon_deg}° {minutes}' {seconds}\" {}",
            if south { 'S' } else { 'N' },
            if west { 'W' } else { 'E' },
        );
        let parsed = GeoCoord::parse(&text).expect("generated DMS text must parse");

        let fraction = f64::from(minutes) / 60.0 + f64::from(seconds) / 3600.0;
        let lat = (f64::from(lat_deg) + fraction) * if south { -1.0 } else { 1.0 };
        let lon = (f64::from(lon_deg) + fraction) * if west { -1.0 } else { 1.0 };

        prop_assert!((parsed.lat() - lat).abs() < 1e-9);
        prop_assert!((parsed.lon() - lon).abs() < 1e-9);
    }

    /// Property: signed decimal text and hinted decimal text agree.
    #[test]
    fn c4_sign_and_direction_agree(coord in valid_coord()) {
        let signed = format!("{:.6} {:.6}", coord.lat(), coord.lon());
        let hinted = format!(
            "{:.6}{} {:.6}{}",
            coord.lat().abs(),
            if coord.lat() < 0.0 { 'S' } else { 'N' },
            coord.lon().abs(),
            if coord.lon() < 0.0 { 'W' } else { 'E' },
        );

        let from_signed = GeoCoord::parse(&signed).expect("signed text must parse");
        let from_hinted = GeoCoord::parse(&hinted).expect("hinted text must parse");
        prop_assert_eq!(from_signed.lat().abs(), from_hinted.lat().abs());
        prop_assert_eq!(from_signed.lon().abs(), from_hinted.lon().abs());
        prop_assert_eq!(from_signed.lat() < 0.0, from_hinted.lat() < 0.0);
        prop_assert_eq!(from_signed.lon() < 0.0, from_hinted.lon() < 0.0);
    }

    /// Property: arbitrary text never panics, and any accepted result is valid.
    #[test]
    fn c4_arbitrary_text_never_panics(text in "\\PC{0,40}") {
        if let Ok(coord) = GeoCoord::parse(&text) {
            prop_assert!(coord.is_valid());
        }
    }

    /// Property: JSON roundtrip preserves the exact values.
    #[test]
    fn c4_json_roundtrip(coord in valid_coord()) {
        let json = serde_json::to_string(&coord).expect("serialization must succeed");
        let recovered: GeoCoord = serde_json::from_str(&json).expect("deserialization must succeed");
        prop_assert_eq!(recovered, coord);
    }
}
