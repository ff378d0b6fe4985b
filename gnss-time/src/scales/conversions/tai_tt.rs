//! Conversions between TAI and Terrestrial Time (TT).
//!
//! TT is the idealized form of TAI used for geocentric ephemerides:
//!
//! ```text
//! TT = TAI + 32.184 s
//! ```

use crate::constants::TT_TAI_OFFSET_SECONDS;
use crate::pair::DualPair;

pub fn tai_to_tt(tai: DualPair) -> DualPair {
    tai.add_seconds(TT_TAI_OFFSET_SECONDS)
}

pub fn tt_to_tai(tt: DualPair) -> DualPair {
    tt.add_seconds(-TT_TAI_OFFSET_SECONDS)
}
