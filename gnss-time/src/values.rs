//! Raw input and output values of the format codecs.

use chrono::{NaiveDateTime, TimeDelta as Duration};

/// A homogeneous sequence of raw values.
///
/// Numeric formats use [`Values::Float`] (integers are accepted on input),
/// calendar formats use [`Values::DateTime`] or [`Values::Text`], durations
/// use [`Values::Duration`] and GPS week/second-of-week pairs use
/// [`Values::WeekSeconds`].
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Float(Vec<f64>),
    Int(Vec<i64>),
    Text(Vec<String>),
    DateTime(Vec<NaiveDateTime>),
    Duration(Vec<Duration>),
    WeekSeconds(Vec<(i64, f64)>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Float(v) => v.len(),
            Values::Int(v) => v.len(),
            Values::Text(v) => v.len(),
            Values::DateTime(v) => v.len(),
            Values::Duration(v) => v.len(),
            Values::WeekSeconds(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Values::Float(_) => "float",
            Values::Int(_) => "integer",
            Values::Text(_) => "string",
            Values::DateTime(_) => "datetime",
            Values::Duration(_) => "timedelta",
            Values::WeekSeconds(_) => "week/seconds",
        }
    }

    /// Numeric values widened to `f64`; `None` for non-numeric kinds.
    pub fn to_floats(&self) -> Option<Vec<f64>> {
        match self {
            Values::Float(v) => Some(v.clone()),
            Values::Int(v) => Some(v.iter().map(|x| *x as f64).collect()),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Values::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            Values::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Values::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_datetimes(&self) -> Option<&[NaiveDateTime]> {
        match self {
            Values::DateTime(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_durations(&self) -> Option<&[Duration]> {
        match self {
            Values::Duration(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_week_seconds(&self) -> Option<&[(i64, f64)]> {
        match self {
            Values::WeekSeconds(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_values {
    ($variant:ident, $ty:ty) => {
        impl From<Vec<$ty>> for Values {
            fn from(values: Vec<$ty>) -> Self {
                Values::$variant(values)
            }
        }

        impl From<$ty> for Values {
            fn from(value: $ty) -> Self {
                Values::$variant(vec![value])
            }
        }

        impl From<&[$ty]> for Values {
            fn from(values: &[$ty]) -> Self {
                Values::$variant(values.to_vec())
            }
        }
    };
}

impl_from_values!(Float, f64);
impl_from_values!(Int, i64);
impl_from_values!(Text, String);
impl_from_values!(DateTime, NaiveDateTime);
impl_from_values!(Duration, Duration);
impl_from_values!(WeekSeconds, (i64, f64));

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values::Text(vec![value.to_string()])
    }
}

impl From<Vec<&str>> for Values {
    fn from(values: Vec<&str>) -> Self {
        Values::Text(values.into_iter().map(str::to_string).collect())
    }
}
