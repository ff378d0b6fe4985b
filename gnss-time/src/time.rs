//! Time instants.
//!
//! A [`Time`] is an immutable vector of instants sharing one time scale and
//! one display format. Internally every instant is a split Julian Date in its
//! own scale; formats are applied only when values are read back.
//!
//! ```
//! use chrono::NaiveDate;
//! use gnss_time::{Format, Scale, Time};
//!
//! let dt = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(1, 1, 1).unwrap();
//! let t = Time::new(dt, None, Scale::Utc, Format::Datetime).unwrap();
//!
//! assert_eq!(t.yydddsssss().unwrap(), vec!["00:001:03661"]);
//! assert_eq!(t.sec_of_day().unwrap(), vec![3661]);
//!
//! // TAI was 32 s ahead of UTC in 2000
//! let tai = t.tai().unwrap();
//! assert_eq!(tai.sec_of_day().unwrap(), vec![3693]);
//! ```

use crate::formats::calendar::fields_from_pair;
use crate::formats::{CalendarFields, Format};
use crate::pair::DualPair;
use crate::scales::{convert_pairs, Dut1Model, Scale};
use crate::values::Values;
use crate::TimeResult;
use gnss_core::constants::{UNIX_EPOCH_JD, NANOSECONDS_PER_MICROSECOND};
use std::fmt;
use std::ops::RangeBounds;

const NOW_SCALE: Scale = Scale::Utc;
const NOW_FORMAT: Format = Format::Datetime;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    scale: Scale,
    format: Format,
    pairs: Vec<DualPair>,
    #[cfg_attr(feature = "serde", serde(skip))]
    dut1: Dut1Model,
}

impl Time {
    /// Builds instants from raw values in the given scale and format.
    ///
    /// `val2` is added element-wise to `val` without loss of precision:
    /// a second float for numeric formats, a duration for `datetime`.
    pub fn new(
        val: impl Into<Values>,
        val2: Option<Values>,
        scale: Scale,
        format: Format,
    ) -> TimeResult<Self> {
        let val = val.into();
        let pairs = format.decode(&val, val2.as_ref(), scale)?;
        tracing::debug!(%scale, %format, elements = pairs.len(), "constructed time");
        Ok(Self {
            scale,
            format,
            pairs,
            dut1: Dut1Model::default(),
        })
    }

    /// Wraps split Julian Dates that are already in `scale`.
    pub fn from_pairs(pairs: Vec<DualPair>, scale: Scale, format: Format) -> TimeResult<Self> {
        format.check_scale(scale)?;
        Ok(Self {
            scale,
            format,
            pairs,
            dut1: Dut1Model::default(),
        })
    }

    /// The current instant from the system clock, in UTC with `datetime` format.
    pub fn now() -> Self {
        let now = chrono::Utc::now();
        let nanos = now.timestamp_subsec_nanos();
        let since_epoch = DualPair::from_seconds(
            now.timestamp() as f64,
            (nanos / NANOSECONDS_PER_MICROSECOND) as f64 * 1e-6,
        );
        Self {
            scale: NOW_SCALE,
            format: NOW_FORMAT,
            pairs: vec![DualPair::new(UNIX_EPOCH_JD, 0.0).add(since_epoch)],
            dut1: Dut1Model::default(),
        }
    }

    /// Attaches the UT1 - UTC model used by conversions to and from UT1.
    pub fn with_dut1(mut self, dut1: Dut1Model) -> Self {
        self.dut1 = dut1;
        self
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn dut1(&self) -> &Dut1Model {
        &self.dut1
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

    /// Split Julian Dates in this value's scale.
    pub fn pairs(&self) -> &[DualPair] {
        &self.pairs
    }

    pub fn jd1(&self) -> Vec<f64> {
        self.pairs.iter().map(DualPair::hi).collect()
    }

    pub fn jd2(&self) -> Vec<f64> {
        self.pairs.iter().map(DualPair::lo).collect()
    }

    /// The same instants in another scale.
    ///
    /// The format is kept when it is defined in the target scale and falls
    /// back to `jd` otherwise (leaving GPS with a `gps_ws` format).
    pub fn to_scale(&self, scale: Scale) -> TimeResult<Time> {
        let pairs = convert_pairs(&self.pairs, self.scale, scale, &self.dut1)?;
        let format = if self.format.is_valid_for(scale) {
            self.format
        } else {
            Format::Jd
        };
        Ok(Time {
            scale,
            format,
            pairs,
            dut1: self.dut1.clone(),
        })
    }

    pub fn utc(&self) -> TimeResult<Time> {
        self.to_scale(Scale::Utc)
    }

    pub fn tai(&self) -> TimeResult<Time> {
        self.to_scale(Scale::Tai)
    }

    pub fn gps(&self) -> TimeResult<Time> {
        self.to_scale(Scale::Gps)
    }

    pub fn tt(&self) -> TimeResult<Time> {
        self.to_scale(Scale::Tt)
    }

    pub fn ut1(&self) -> TimeResult<Time> {
        self.to_scale(Scale::Ut1)
    }

    /// Split Julian Dates converted to TAI.
    pub(crate) fn tai_pairs(&self) -> TimeResult<Vec<DualPair>> {
        convert_pairs(&self.pairs, self.scale, Scale::Tai, &self.dut1)
    }

    /// Rebuilds this value from TAI pairs, keeping scale, format and DUT1 model.
    pub(crate) fn from_tai_pairs(&self, tai: &[DualPair]) -> TimeResult<Time> {
        Ok(Time {
            scale: self.scale,
            format: self.format,
            pairs: convert_pairs(tai, Scale::Tai, self.scale, &self.dut1)?,
            dut1: self.dut1.clone(),
        })
    }

    /// The same instants with another display format.
    pub fn with_format(&self, format: Format) -> TimeResult<Time> {
        format.check_scale(self.scale)?;
        Ok(Time {
            format,
            ..self.clone()
        })
    }

    /// Renders the instants in `format`, which must be valid for this scale.
    pub fn as_format(&self, format: Format) -> TimeResult<Values> {
        format.encode(&self.pairs, self.scale)
    }

    /// Renders the instants in this value's own format.
    pub fn value(&self) -> TimeResult<Values> {
        self.as_format(self.format)
    }

    /// Calendar breakdown of every instant.
    pub fn fields(&self) -> TimeResult<Vec<CalendarFields>> {
        self.pairs
            .iter()
            .map(|pair| fields_from_pair(*pair, self.scale))
            .collect()
    }

    fn map_fields<T>(&self, f: impl Fn(&CalendarFields) -> T) -> TimeResult<Vec<T>> {
        Ok(self.fields()?.iter().map(f).collect())
    }

    pub fn year(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(|fields| fields.year)
    }

    pub fn month(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(|fields| fields.month)
    }

    pub fn day(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(|fields| fields.day)
    }

    pub fn hour(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(CalendarFields::hour)
    }

    pub fn minute(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(CalendarFields::minute)
    }

    /// Whole seconds of the minute (60 during a leap second).
    pub fn second(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(CalendarFields::second)
    }

    /// Whole seconds since midnight.
    pub fn sec_of_day(&self) -> TimeResult<Vec<i64>> {
        self.map_fields(CalendarFields::sec_of_day)
    }

    pub fn doy(&self) -> TimeResult<Vec<i32>> {
        self.map_fields(|fields| fields.doy)
    }

    pub fn yydddsssss(&self) -> TimeResult<Vec<String>> {
        match self.as_format(Format::Yydddsssss)? {
            Values::Text(strings) => Ok(strings),
            _ => Ok(Vec::new()),
        }
    }

    fn with_pairs(&self, pairs: Vec<DualPair>) -> Time {
        Time {
            scale: self.scale,
            format: self.format,
            pairs,
            dut1: self.dut1.clone(),
        }
    }

    /// The element at `index` as a scalar value.
    pub fn get(&self, index: usize) -> Option<Time> {
        self.pairs.get(index).map(|pair| self.with_pairs(vec![*pair]))
    }

    /// The elements in `range`, in order.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<Time> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.pairs
            .get(bounds)
            .map(|pairs| self.with_pairs(pairs.to_vec()))
    }

    /// Iterates over the elements as scalar values.
    pub fn iter(&self) -> impl Iterator<Item = Time> + '_ {
        self.pairs.iter().map(|pair| self.with_pairs(vec![*pair]))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = match self.as_format(Format::Iso) {
            Ok(Values::Text(strings)) => strings,
            _ => self.pairs.iter().map(|pair| format!("JD {}", pair)).collect(),
        };
        if rendered.len() == 1 {
            write!(f, "{} {}", rendered[0], self.scale)
        } else {
            write!(f, "[{}] {}", rendered.join(", "), self.scale)
        }
    }
}
