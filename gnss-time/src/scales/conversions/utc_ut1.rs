//! Conversions between UTC and Universal Time (UT1).
//!
//! UT1 follows the rotation of the Earth. Its difference from UTC is published
//! by the IERS as DUT1:
//!
//! ```text
//! UT1 = UTC + DUT1(date)
//! ```
//!
//! DUT1 comes from a [`Dut1Model`]. With [`Dut1Model::Zero`] the two scales
//! coincide. The inverse evaluates DUT1 at a UTC estimate and refines it twice,
//! which is exact for any table whose slope is far below one second per day.

use crate::constants::UT1_TO_UTC_ITERATIONS;
use crate::pair::DualPair;
use crate::scales::Dut1Model;
use crate::TimeResult;
use gnss_core::constants::MJD_ZERO_POINT;

fn mjd(pair: DualPair) -> f64 {
    (pair.hi() - MJD_ZERO_POINT) + pair.lo()
}

pub fn utc_to_ut1(utc: DualPair, dut1: &Dut1Model) -> TimeResult<DualPair> {
    Ok(utc.add_seconds(dut1.dut1_seconds(mjd(utc))?))
}

pub fn ut1_to_utc(ut1: DualPair, dut1: &Dut1Model) -> TimeResult<DualPair> {
    let mut utc = ut1;
    for _ in 0..UT1_TO_UTC_ITERATIONS {
        utc = ut1.add_seconds(-dut1.dut1_seconds(mjd(utc))?);
    }
    Ok(utc)
}
