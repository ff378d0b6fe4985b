//! Julian Date codecs: `jd`, `mjd`, `jd2000` and `decimalyear`.

use super::{numeric_inputs, Format};
use crate::pair::DualPair;
use crate::scales::Scale;
use crate::values::Values;
use crate::TimeResult;
use gnss_core::calendar::{calendar_to_julian, julian_to_calendar};
use gnss_core::constants::{J2000_JD, MJD_ZERO_POINT};

/// Decodes `val + val2` days counted from `epoch`.
fn decode_from_epoch(format: Format, epoch: f64, val: &Values, val2: Option<&Values>) -> TimeResult<Vec<DualPair>> {
    let (first, second) = numeric_inputs(format, val, val2)?;
    let epoch = DualPair::new(epoch, 0.0);
    Ok(first
        .iter()
        .zip(&second)
        .map(|(v1, v2)| DualPair::new(*v1, *v2).add(epoch))
        .collect())
}

fn encode_from_epoch(epoch: f64, pairs: &[DualPair]) -> Values {
    let epoch = DualPair::new(epoch, 0.0);
    Values::Float(pairs.iter().map(|pair| pair.sub(epoch).to_f64()).collect())
}

pub(super) fn decode_jd(val: &Values, val2: Option<&Values>, _scale: Scale) -> TimeResult<Vec<DualPair>> {
    decode_from_epoch(Format::Jd, 0.0, val, val2)
}

pub(super) fn encode_jd(pairs: &[DualPair], _scale: Scale) -> TimeResult<Values> {
    Ok(Values::Float(pairs.iter().map(DualPair::to_f64).collect()))
}

pub(super) fn decode_mjd(val: &Values, val2: Option<&Values>, _scale: Scale) -> TimeResult<Vec<DualPair>> {
    decode_from_epoch(Format::Mjd, MJD_ZERO_POINT, val, val2)
}

pub(super) fn encode_mjd(pairs: &[DualPair], _scale: Scale) -> TimeResult<Values> {
    Ok(encode_from_epoch(MJD_ZERO_POINT, pairs))
}

pub(super) fn decode_jd2000(val: &Values, val2: Option<&Values>, _scale: Scale) -> TimeResult<Vec<DualPair>> {
    decode_from_epoch(Format::Jd2000, J2000_JD, val, val2)
}

pub(super) fn encode_jd2000(pairs: &[DualPair], _scale: Scale) -> TimeResult<Values> {
    Ok(encode_from_epoch(J2000_JD, pairs))
}

/// Julian Dates of 0h on January 1 of `year` and of `year + 1`.
fn year_bounds(year: i32) -> (DualPair, DualPair) {
    let (s1, s2) = calendar_to_julian(year, 1, 1);
    let (e1, e2) = calendar_to_julian(year + 1, 1, 1);
    (DualPair::new(s1, s2), DualPair::new(e1, e2))
}

/// Decimal years interpolate linearly between January 1 of consecutive years,
/// so one unit spans 365 or 366 days.
pub(super) fn decode_decimalyear(
    val: &Values,
    val2: Option<&Values>,
    _scale: Scale,
) -> TimeResult<Vec<DualPair>> {
    let (first, second) = numeric_inputs(Format::DecimalYear, val, val2)?;
    Ok(first
        .iter()
        .zip(&second)
        .map(|(v1, v2)| {
            let value = DualPair::new(*v1, *v2);
            let year = value.to_f64().floor();
            let fraction = value.sub(DualPair::new(year, 0.0)).to_f64();
            let (start, end) = year_bounds(year as i32);
            start.add(end.sub(start).scale(fraction))
        })
        .collect())
}

pub(super) fn encode_decimalyear(pairs: &[DualPair], _scale: Scale) -> TimeResult<Values> {
    pairs
        .iter()
        .map(|pair| {
            let (year, _, _, _) = julian_to_calendar(pair.hi(), pair.lo())?;
            let (start, end) = year_bounds(year);
            let fraction = pair.sub(start).to_f64() / end.sub(start).to_f64();
            Ok(year as f64 + fraction)
        })
        .collect::<TimeResult<Vec<f64>>>()
        .map(Values::Float)
}
