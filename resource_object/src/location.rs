//! Location codec
//!
//! A coordinate pair rounded to 4 decimal degrees is packed into one integer,
//! laid out as `<lat_sign><lat_mag7><lon_sign><lon_mag7>` in base 10. A sign
//! digit is `1` for negative values and `0` otherwise. Two entities at the same
//! rounded coordinate share the same key, which is what the scheduling
//! procedure uses to tell optimization nodes apart.
//!
//! Input ranges (`-90..=90`, `-180..=180`) are checked upstream. Nothing here
//! re-checks them.

use serde::{Deserialize, Serialize};

/// Integer surrogate for a rounded coordinate pair
pub type LocationKey = i64;

const SCALE: f64 = 10_000.0;
/// One sign digit plus a 7 digit magnitude
const AXIS_DIGITS: i64 = 100_000_000;
const SIGN_DIGIT: i64 = 10_000_000;

/// Collapse `(latitude, longitude)` into its location key.
pub fn encode(latitude: f64, longitude: f64) -> LocationKey {
    encode_axis(latitude) * AXIS_DIGITS + encode_axis(longitude)
}

/// Expand a location key back into `(latitude, longitude)`.
pub fn decode(key: LocationKey) -> (f64, f64) {
    (decode_axis(key / AXIS_DIGITS), decode_axis(key % AXIS_DIGITS))
}

/// Round a coordinate to the precision the codec keeps.
pub fn round4(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

#[inline]
fn encode_axis(value: f64) -> i64 {
    // sign comes from the rounded value so -0.0 and -0.00001 both encode as 0
    let scaled = (value * SCALE).round() as i64;
    let sign = if scaled < 0 { SIGN_DIGIT } else { 0 };
    sign + scaled.abs()
}

#[inline]
fn decode_axis(group: i64) -> f64 {
    let magnitude = (group % SIGN_DIGIT) as f64 / SCALE;
    if group / SIGN_DIGIT == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// A coordinate pair. Both halves are always present together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Location key of this coordinate
    pub fn key(&self) -> LocationKey {
        encode(self.latitude, self.longitude)
    }

    /// Rounded coordinate stored under `key`
    pub fn from_key(key: LocationKey) -> Self {
        let (latitude, longitude) = decode(key);
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_keys() {
        let cases = [
            ("zero_value", 0.0, 0.0, 0),
            ("max_value", 90.0, 180.0, 90000001800000),
            ("min_value", -90.0, -180.0, 1090000011800000),
            ("decimal_one_digit1", 1.23456789, -8.90123456, 1234610089012),
            ("decimal_one_digit2", -8.90123456, 1.23456789, 1008901200012346),
            ("decimal_two_digits1", 12.3456789, -89.0123456, 12345710890123),
            ("decimal_two_digits2", -89.0123456, 12.3456789, 1089012300123457),
            ("decimal_three_digits1", -12.3456789, 170.123456, 1012345701701235),
            ("decimal_three_digits2", 12.3456789, -170.123456, 12345711701235),
        ];

        for (name, latitude, longitude, key) in cases {
            assert_eq!(encode(latitude, longitude), key, "{}", name);
        }
    }

    #[test]
    fn test_decode_known_keys() {
        let cases = [
            (0, 0.0, 0.0),
            (90000001800000, 90.0, 180.0),
            (1090000011800000, -90.0, -180.0),
            (1234610089012, 1.2346, -8.9012),
            (1008901200012346, -8.9012, 1.2346),
            (12345710890123, 12.3457, -89.0123),
            (1089012300123457, -89.0123, 12.3457),
            (1012345701701235, -12.3457, 170.1235),
            (12345711701235, 12.3457, -170.1235),
        ];

        for (key, latitude, longitude) in cases {
            assert_eq!(decode(key), (latitude, longitude), "key {}", key);
        }
    }

    #[test]
    fn test_round_trip_rounds_to_four_decimals() {
        let key = encode(12.34567, 56.78);
        assert_eq!(decode(key), (12.3457, 56.78));

        // idempotent after the first rounding
        let (latitude, longitude) = decode(key);
        assert_eq!(encode(latitude, longitude), key);
    }

    #[test]
    fn test_round_trip_law() {
        let mut latitude = -90.0;
        while latitude <= 90.0 {
            let mut longitude = -180.0;
            while longitude <= 180.0 {
                let key = encode(latitude, longitude);
                assert_eq!(decode(key), (round4(latitude), round4(longitude)));
                assert_eq!(encode(round4(latitude), round4(longitude)), key);
                longitude += 7.123456;
            }
            latitude += 3.987654;
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(-0.0, -0.0), 0);
        assert_eq!(encode(-0.00001, 0.00001), 0);
        assert_eq!(decode(encode(90.0, 180.0)), (90.0, 180.0));
        assert_eq!(decode(encode(-90.0, -180.0)), (-90.0, -180.0));
        assert_ne!(encode(90.0, 180.0), encode(-90.0, -180.0));
        assert_ne!(encode(1.0, -1.0), encode(-1.0, 1.0));
    }

    #[test]
    fn test_location_key_helpers() {
        let location = Location::new(48.6113, 2.0365);
        let restored = Location::from_key(location.key());
        assert_eq!(restored, location);

        // same rounded coordinate, same key
        assert_eq!(
            Location::new(48.61131, 2.03649).key(),
            Location::new(48.6113, 2.0365).key()
        );
    }
}
