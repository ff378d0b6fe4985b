//! Conversion graph between time scales.
//!
//! Each edge converts a split Julian Date between two adjacent scales:
//!
//! ```text
//!          leap seconds         19 s
//!   UTC <--------------> TAI <--------> GPS
//!    ^                    ^
//!    | DUT1               | 32.184 s
//!    v                    v
//!   UT1                   TT
//! ```
//!
//! | Edge | Relationship | Module |
//! |------|--------------|--------|
//! | UTC <-> TAI | leap second table | [`utc_tai`] |
//! | TAI <-> GPS | TAI = GPS + 19 s | [`gps_tai`] |
//! | TAI <-> TT | TT = TAI + 32.184 s | [`tai_tt`] |
//! | UTC <-> UT1 | UT1 = UTC + DUT1 | [`utc_ut1`] |
//!
//! Conversions between non-adjacent scales compose the shortest path found by
//! [`conversion_path`], e.g. UT1 -> UTC -> TAI -> GPS. The path is computed once
//! per vector and every element is converted independently, so elements on
//! either side of a leap second get their own offset.

pub mod gps_tai;
pub mod tai_tt;
pub mod utc_tai;
pub mod utc_ut1;

use super::{Dut1Model, Scale};
use crate::elementwise::try_map;
use crate::pair::DualPair;
use crate::{TimeError, TimeResult};
use std::collections::VecDeque;

type EdgeFn = fn(DualPair, &Dut1Model) -> TimeResult<DualPair>;

struct Edge {
    from: Scale,
    to: Scale,
    convert: EdgeFn,
}

const EDGES: &[Edge] = &[
    Edge {
        from: Scale::Utc,
        to: Scale::Tai,
        convert: |pair, _| utc_tai::utc_to_tai(pair),
    },
    Edge {
        from: Scale::Tai,
        to: Scale::Utc,
        convert: |pair, _| utc_tai::tai_to_utc(pair),
    },
    Edge {
        from: Scale::Gps,
        to: Scale::Tai,
        convert: |pair, _| Ok(gps_tai::gps_to_tai(pair)),
    },
    Edge {
        from: Scale::Tai,
        to: Scale::Gps,
        convert: |pair, _| Ok(gps_tai::tai_to_gps(pair)),
    },
    Edge {
        from: Scale::Tai,
        to: Scale::Tt,
        convert: |pair, _| Ok(tai_tt::tai_to_tt(pair)),
    },
    Edge {
        from: Scale::Tt,
        to: Scale::Tai,
        convert: |pair, _| Ok(tai_tt::tt_to_tai(pair)),
    },
    Edge {
        from: Scale::Utc,
        to: Scale::Ut1,
        convert: utc_ut1::utc_to_ut1,
    },
    Edge {
        from: Scale::Ut1,
        to: Scale::Utc,
        convert: utc_ut1::ut1_to_utc,
    },
];

fn edge(from: Scale, to: Scale) -> Option<EdgeFn> {
    EDGES
        .iter()
        .find(|edge| edge.from == from && edge.to == to)
        .map(|edge| edge.convert)
}

/// Shortest chain of scales from `from` to `to`, both ends included.
pub fn conversion_path(from: Scale, to: Scale) -> TimeResult<Vec<Scale>> {
    if from == to {
        return Ok(vec![from]);
    }

    let mut previous: Vec<Option<Scale>> = vec![None; Scale::ALL.len()];
    let index = |scale: Scale| Scale::ALL.iter().position(|s| *s == scale).unwrap_or(0);
    let mut queue = VecDeque::from([from]);
    previous[index(from)] = Some(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        for next in EDGES.iter().filter(|e| e.from == current).map(|e| e.to) {
            if previous[index(next)].is_none() {
                previous[index(next)] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if previous[index(to)].is_none() {
        return Err(TimeError::ConversionError(format!(
            "no conversion path from {} to {}",
            from, to
        )));
    }

    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match previous[index(current)] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    Ok(path)
}

fn steps(from: Scale, to: Scale) -> TimeResult<Vec<EdgeFn>> {
    let path = conversion_path(from, to)?;
    path.windows(2)
        .map(|hop| {
            edge(hop[0], hop[1]).ok_or_else(|| {
                TimeError::ConversionError(format!("missing edge {} -> {}", hop[0], hop[1]))
            })
        })
        .collect()
}

/// Converts a single split Julian Date between scales.
pub fn convert_pair(pair: DualPair, from: Scale, to: Scale, dut1: &Dut1Model) -> TimeResult<DualPair> {
    steps(from, to)?
        .iter()
        .try_fold(pair, |acc, step| step(acc, dut1))
}

/// Converts every element of a vector between scales.
pub fn convert_pairs(
    pairs: &[DualPair],
    from: Scale,
    to: Scale,
    dut1: &Dut1Model,
) -> TimeResult<Vec<DualPair>> {
    if from == to {
        return Ok(pairs.to_vec());
    }

    let steps = steps(from, to)?;
    tracing::debug!(%from, %to, hops = steps.len(), elements = pairs.len(), "converting time scale");

    try_map(pairs, |pair| {
        steps.iter().try_fold(*pair, |acc, step| step(acc, dut1))
    })
}
