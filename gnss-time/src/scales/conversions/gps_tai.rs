//! Conversions between GPS time and TAI.
//!
//! GPS time was aligned with UTC at its epoch, 1980-01-06 00:00:00 UTC, when
//! TAI - UTC was 19 s. It has no leap seconds, so the offset to TAI is fixed:
//!
//! ```text
//! TAI = GPS + 19 s
//! ```

use crate::constants::GPS_TO_TAI_OFFSET_SECONDS;
use crate::pair::DualPair;

pub fn gps_to_tai(gps: DualPair) -> DualPair {
    gps.add_seconds(GPS_TO_TAI_OFFSET_SECONDS)
}

pub fn tai_to_gps(tai: DualPair) -> DualPair {
    tai.add_seconds(-GPS_TO_TAI_OFFSET_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnss_core::constants::GPS_EPOCH_JD;

    #[test]
    fn test_fixed_offset() {
        let gps = DualPair::new(GPS_EPOCH_JD, 0.0);
        let tai = gps_to_tai(gps);
        assert!((tai.sub(gps).to_seconds() - 19.0).abs() < 1e-9);
        assert_eq!(tai_to_gps(tai).compare(&gps), std::cmp::Ordering::Equal);
    }
}
