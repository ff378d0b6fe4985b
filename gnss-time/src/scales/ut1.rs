//! UT1 - UTC (DUT1) sources.
//!
//! UT1 follows Earth rotation and cannot be computed from the leap second
//! table alone. Each time value carries a [`Dut1Model`]:
//!
//! - [`Dut1Model::Zero`] (default) treats UT1 as UTC. The IERS keeps
//!   |UT1 - UTC| below 0.9 s, which bounds the error.
//! - [`Dut1Model::Table`] interpolates a [`Dut1Table`] of daily values, for
//!   example from IERS Bulletin A.
//!
//! ```
//! use gnss_time::scales::{Dut1Model, Dut1Table};
//! use std::sync::Arc;
//!
//! let table = Dut1Table::new(vec![(57203.0, 0.6), (57204.0, -0.4)]).unwrap();
//! let model = Dut1Model::Table(Arc::new(table));
//! assert!((model.dut1_seconds(57203.5).unwrap() - 0.1).abs() < 1e-12);
//! ```

use crate::{TimeError, TimeResult};
use std::sync::Arc;

/// Daily UT1 - UTC values keyed by UTC Modified Julian Date.
#[derive(Debug, Clone, PartialEq)]
pub struct Dut1Table {
    records: Vec<(f64, f64)>,
}

impl Dut1Table {
    /// Builds a table from `(mjd, ut1_minus_utc_seconds)` records in any order.
    pub fn new(mut records: Vec<(f64, f64)>) -> TimeResult<Self> {
        if records.is_empty() {
            return Err(TimeError::ConversionError(
                "DUT1 table needs at least one record".to_string(),
            ));
        }
        if let Some(bad) = records
            .iter()
            .find(|(mjd, dut1)| !mjd.is_finite() || !dut1.is_finite())
        {
            return Err(TimeError::ConversionError(format!(
                "non-finite DUT1 record ({}, {})",
                bad.0, bad.1
            )));
        }

        records.sort_by(|a, b| a.0.total_cmp(&b.0));
        records.dedup_by(|a, b| a.0 == b.0);

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last MJD covered by the table.
    pub fn span(&self) -> (f64, f64) {
        let first = self.records[0].0;
        let last = self.records[self.records.len() - 1].0;
        (first, last)
    }

    /// Linearly interpolated UT1 - UTC at `mjd`, clamped to the end records
    /// outside the table span.
    pub fn dut1_at(&self, mjd: f64) -> TimeResult<f64> {
        if !mjd.is_finite() {
            return Err(TimeError::ConversionError(format!(
                "cannot look up DUT1 at non-finite MJD {}",
                mjd
            )));
        }
        let (first, last) = self.span();
        if mjd <= first || mjd >= last {
            if mjd < first || mjd > last {
                tracing::warn!(mjd, first, last, "DUT1 requested outside table span, clamping");
            }
            return Ok(if mjd <= first {
                self.records[0].1
            } else {
                self.records[self.records.len() - 1].1
            });
        }

        let after = self.records.partition_point(|&(record_mjd, _)| record_mjd <= mjd);
        let (mjd0, dut0) = self.records[after - 1];
        let (mjd1, dut1) = self.records[after];
        if mjd == mjd0 {
            return Ok(dut0);
        }

        let factor = (mjd - mjd0) / (mjd1 - mjd0);
        Ok(dut0 + factor * (dut1 - dut0))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dut1Model {
    #[default]
    Zero,
    Table(Arc<Dut1Table>),
}

impl Dut1Model {
    pub fn from_table(table: Dut1Table) -> Self {
        Self::Table(Arc::new(table))
    }

    /// UT1 - UTC in seconds at the given UTC MJD.
    pub fn dut1_seconds(&self, utc_mjd: f64) -> TimeResult<f64> {
        match self {
            Dut1Model::Zero => Ok(0.0),
            Dut1Model::Table(table) => table.dut1_at(utc_mjd),
        }
    }
}
