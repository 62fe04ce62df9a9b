/*!
 * Tests for timecode parsing, clamping, and ordering
 */

use std::cmp::Ordering;

use cuelist::timecode::{MAX_HOURS, MAX_HUNDREDTHS, MAX_MINUTES, MAX_SECONDS};
use cuelist::TimeCode;

use crate::common::timecode;

/// Clamping is total: whatever the raw fields, the output is in bounds
#[test]
fn test_parseFields_withArbitraryInput_shouldStayInBounds() {
    let raw_inputs = [
        ("00", "00", "00", "00"),
        ("99", "59", "59", "99"),
        ("100", "60", "60", "100"),
        ("123456", "999", "999", "999"),
        ("", "", "", ""),
        ("abc", "-5", "1e3", "0x10"),
        ("7", "61", "3", "250"),
    ];

    for (h, m, s, c) in raw_inputs {
        let tc = TimeCode::parse_fields(h, m, s, c);
        assert!(tc.hours() <= MAX_HOURS, "hours out of bounds for {:?}", (h, m, s, c));
        assert!(tc.minutes() <= MAX_MINUTES, "minutes out of bounds for {:?}", (h, m, s, c));
        assert!(tc.seconds() <= MAX_SECONDS, "seconds out of bounds for {:?}", (h, m, s, c));
        assert!(
            tc.hundredths() <= MAX_HUNDREDTHS,
            "hundredths out of bounds for {:?}",
            (h, m, s, c)
        );
    }
}

/// compare(a, b) == Less iff key(a) < key(b)
#[test]
fn test_compare_shouldAgreeWithSecondsKey() {
    let samples = [
        timecode("00:00:00:00"),
        timecode("00:00:00:01"),
        timecode("00:00:01:00"),
        timecode("00:00:59:99"),
        timecode("00:01:00:00"),
        timecode("00:59:59:99"),
        timecode("01:00:00:00"),
        timecode("99:59:59:99"),
    ];

    for a in &samples {
        for b in &samples {
            let by_key = a.to_seconds().partial_cmp(&b.to_seconds()).unwrap();
            assert_eq!(a.cmp(b), by_key, "order mismatch for {} vs {}", a, b);
        }
    }
}

/// The order is strict and total: antisymmetric and transitive
#[test]
fn test_compare_shouldBeStrictTotalOrder() {
    let samples = [
        timecode("00:00:00:50"),
        timecode("00:00:30:00"),
        timecode("00:30:00:00"),
        timecode("12:00:00:00"),
    ];

    for a in &samples {
        for b in &samples {
            // Antisymmetry
            if a < b {
                assert!(b > a);
                assert_ne!(a, b);
            }
            for c in &samples {
                // Transitivity
                if a < b && b < c {
                    assert!(a < c);
                }
            }
        }
    }

    // Exactly one of Less/Equal/Greater holds for any pair
    let a = timecode("00:00:01:00");
    let b = timecode("00:00:02:00");
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
    assert_eq!(a.cmp(&a), Ordering::Equal);
}

/// Canonical text form round-trips through FromStr and Display
#[test]
fn test_canonicalForm_shouldRoundTrip() {
    for text in ["00:00:00:00", "01:23:45:67", "99:59:59:99"] {
        let tc: TimeCode = text.parse().unwrap();
        assert_eq!(tc.to_string(), text);
    }
}

/// Hour boundary: 00:59:59:99 immediately precedes 01:00:00:00
#[test]
fn test_ordering_acrossHourBoundary_shouldBeConsistent() {
    let before = timecode("00:59:59:99");
    let after = timecode("01:00:00:00");
    assert!(before < after);
    assert_eq!(before.total_hundredths() + 1, after.total_hundredths());
}
