//! Durations.
//!
//! A [`TimeDelta`] is an immutable vector of durations stored as split day
//! counts. All supported scales tick SI seconds, so a duration carries its
//! scale only as a tag: converting it to another scale keeps the values.

use crate::formats::DeltaFormat;
use crate::pair::DualPair;
use crate::scales::Scale;
use crate::values::Values;
use crate::TimeResult;
use std::fmt;
use std::ops::RangeBounds;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDelta {
    scale: Scale,
    format: DeltaFormat,
    pairs: Vec<DualPair>,
}

impl TimeDelta {
    /// Builds durations from raw values in the given scale and format.
    pub fn new(
        val: impl Into<Values>,
        val2: Option<Values>,
        scale: Scale,
        format: DeltaFormat,
    ) -> TimeResult<Self> {
        let val = val.into();
        let pairs = format.decode(&val, val2.as_ref())?;
        tracing::debug!(%scale, %format, elements = pairs.len(), "constructed time delta");
        Ok(Self {
            scale,
            format,
            pairs,
        })
    }

    /// Wraps split day counts.
    pub fn from_pairs(pairs: Vec<DualPair>, scale: Scale, format: DeltaFormat) -> Self {
        Self {
            scale,
            format,
            pairs,
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn format(&self) -> DeltaFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        self.pairs.len() == 1
    }

    /// Split day counts.
    pub fn pairs(&self) -> &[DualPair] {
        &self.pairs
    }

    pub fn to_scale(&self, scale: Scale) -> TimeDelta {
        TimeDelta {
            scale,
            ..self.clone()
        }
    }

    pub fn with_format(&self, format: DeltaFormat) -> TimeDelta {
        TimeDelta {
            format,
            ..self.clone()
        }
    }

    pub fn as_format(&self, format: DeltaFormat) -> TimeResult<Values> {
        format.encode(&self.pairs)
    }

    pub fn value(&self) -> TimeResult<Values> {
        self.as_format(self.format)
    }

    pub fn days(&self) -> Vec<f64> {
        self.pairs.iter().map(DualPair::to_f64).collect()
    }

    pub fn seconds(&self) -> Vec<f64> {
        self.pairs.iter().map(DualPair::to_seconds).collect()
    }

    fn with_pairs(&self, pairs: Vec<DualPair>) -> TimeDelta {
        TimeDelta {
            scale: self.scale,
            format: self.format,
            pairs,
        }
    }

    pub fn get(&self, index: usize) -> Option<TimeDelta> {
        self.pairs.get(index).map(|pair| self.with_pairs(vec![*pair]))
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<TimeDelta> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.pairs
            .get(bounds)
            .map(|pairs| self.with_pairs(pairs.to_vec()))
    }

    pub fn iter(&self) -> impl Iterator<Item = TimeDelta> + '_ {
        self.pairs.iter().map(|pair| self.with_pairs(vec![*pair]))
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .seconds()
            .iter()
            .map(|seconds| format!("{} s", seconds))
            .collect();
        if rendered.len() == 1 {
            write!(f, "{} {}", rendered[0], self.scale)
        } else {
            write!(f, "[{}] {}", rendered.join(", "), self.scale)
        }
    }
}
