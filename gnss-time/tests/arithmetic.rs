use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta as Duration};
use gnss_time::{
    is_time, is_timedelta, DeltaFormat, Format, Scale, TemporalValue, Time, TimeDelta, TimeError,
    Values,
};

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn utc(values: Vec<NaiveDateTime>) -> Time {
    Time::new(values, None, Scale::Utc, Format::Datetime).unwrap()
}

fn timedelta(duration: Duration) -> TimeDelta {
    TimeDelta::new(duration, None, Scale::Utc, DeltaFormat::Timedelta).unwrap()
}

fn t1() -> Time {
    utc(vec![datetime(2009, 11, 2, 0, 0, 0)])
}

fn t2() -> Time {
    utc(vec![datetime(2011, 5, 5, 0, 0, 0)])
}

fn td1() -> TimeDelta {
    timedelta(Duration::seconds(30))
}

fn td2() -> TimeDelta {
    timedelta(Duration::days(10))
}

// --- Operator table ---

#[test]
fn time_plus_timedelta_is_time() {
    let sum = (&t1() + &td1()).unwrap();
    assert_eq!(sum.value().unwrap(), Values::from(datetime(2009, 11, 2, 0, 0, 30)));
    assert!(is_time(&sum));
}

#[test]
fn timedelta_plus_time_is_time() {
    let sum = (&td1() + &t1()).unwrap();
    assert_eq!(sum.value().unwrap(), Values::from(datetime(2009, 11, 2, 0, 0, 30)));
    assert_eq!(sum.scale(), Scale::Utc);
    assert_eq!(sum.format(), Format::Datetime);
}

#[test]
fn time_minus_timedelta_is_time() {
    let difference = (&t1() - &td1()).unwrap();
    assert_eq!(
        difference.value().unwrap(),
        Values::from(datetime(2009, 11, 1, 23, 59, 30))
    );
}

#[test]
fn time_minus_time_is_timedelta() {
    let elapsed = (&t1() - &t2()).unwrap();
    assert!(is_timedelta(&elapsed));
    assert_eq!(elapsed.format(), DeltaFormat::Days);
    assert_eq!(elapsed.days(), vec![-549.0]);
    assert_eq!(
        elapsed.as_format(DeltaFormat::Timedelta).unwrap(),
        Values::from(Duration::days(-549))
    );
}

#[test]
fn timedelta_plus_and_minus_timedelta() {
    let sum = (&td1() + &td2()).unwrap();
    assert_eq!(
        sum.value().unwrap(),
        Values::from(Duration::days(10) + Duration::seconds(30))
    );

    let difference = (&td1() - &td2()).unwrap();
    assert_eq!(
        difference.value().unwrap(),
        Values::from(Duration::days(-10) + Duration::seconds(30))
    );
}

#[test]
fn illegal_combinations_are_type_errors() {
    let t = TemporalValue::from(t1());
    let other = TemporalValue::from(t2());
    let d = TemporalValue::from(td1());

    let err = (&d - &t).unwrap_err();
    assert_eq!(
        err,
        TimeError::InvalidOperation {
            left: "TimeDelta",
            op: "-",
            right: "Time"
        }
    );
    assert!((&t + &other).unwrap_err().is_type_error());
}

#[test]
fn comparisons() {
    assert!(!(t1() > t2()));
    assert!(t1() < t2());
    assert!(!(td1() > td2()));
    assert!(td1() < td2());
    assert!(t1() == t1());
    assert!(t1() != t2());
}

#[test]
fn comparison_converts_the_right_operand() {
    let tai = t1().tai().unwrap();
    let later = (&tai + &td1()).unwrap();
    assert!(t1() < later);
    assert!(later > t1());
}

// --- Identities ---

#[test]
fn arithmetic_identities() {
    let t = t1();
    let d = td2();

    let back = (&(&t + &d).unwrap() - &d).unwrap();
    assert_abs_diff_eq!((&back - &t).unwrap().seconds()[0], 0.0, epsilon = 1e-9);

    let d1 = td1();
    let round = (&(&d1 + &d).unwrap() - &d).unwrap();
    assert_abs_diff_eq!(round.seconds()[0], 30.0, epsilon = 1e-9);

    let elapsed = (&t1() - &t2()).unwrap();
    let rebuilt = (&t2() + &elapsed).unwrap();
    assert_eq!(rebuilt.value().unwrap(), t1().value().unwrap());
}

#[test]
fn vector_arithmetic_broadcasts_scalars() {
    let times = utc((0..4).map(|h| datetime(2020, 1, 1, h, 0, 0)).collect());
    let step = TimeDelta::new(1.0, None, Scale::Utc, DeltaFormat::Hours).unwrap();

    let shifted = (&times + &step).unwrap();
    assert_eq!(shifted.hour().unwrap(), vec![1, 2, 3, 4]);

    let steps = TimeDelta::new(vec![1.0, 2.0], None, Scale::Utc, DeltaFormat::Hours).unwrap();
    assert!(matches!(
        &times + &steps,
        Err(TimeError::ShapeMismatch {
            expected: 4,
            found: 2
        })
    ));
}

// --- Properties, slicing, empty values ---

#[test]
fn calendar_properties() {
    let t = utc(vec![datetime(2000, 1, 1, 1, 1, 1), datetime(2001, 1, 1, 1, 1, 1)]);
    assert_eq!(t.year().unwrap(), vec![2000, 2001]);
    assert_eq!(t.month().unwrap(), vec![1, 1]);
    assert_eq!(t.day().unwrap(), vec![1, 1]);
    assert_eq!(t.hour().unwrap(), vec![1, 1]);
    assert_eq!(t.minute().unwrap(), vec![1, 1]);
    assert_eq!(t.second().unwrap(), vec![1, 1]);
    assert_eq!(t.sec_of_day().unwrap(), vec![3661, 3661]);
    assert_eq!(t.yydddsssss().unwrap(), vec!["00:001:03661", "01:001:03661"]);
    assert_eq!(t.doy().unwrap(), vec![1, 1]);
}

#[test]
fn slicing_values_rebuilt_from_every_format() {
    let t = utc(vec![datetime(2015, 6, 30, 23, 59, 0), datetime(2015, 6, 30, 23, 59, 1)]);
    for scale in Scale::ALL {
        let converted = t.to_scale(scale).unwrap();
        assert_eq!(converted.slice(0..2).unwrap().len(), 2);

        for format in Format::ALL {
            let values = match converted.as_format(format) {
                Ok(values) => values,
                Err(err) => {
                    assert!(err.is_invalid_combination());
                    assert!(scale != Scale::Gps && format.name().contains("gps"));
                    continue;
                }
            };
            // doy carries no year of its own
            let val2 = (format == Format::Doy).then(|| {
                Values::Int(converted.year().unwrap().into_iter().map(i64::from).collect())
            });
            let rebuilt = Time::new(values, val2, scale, format).unwrap();
            assert_eq!(rebuilt.slice(0..2).unwrap().len(), 2, "{} in {}", format, scale);
        }
    }
}

#[test]
fn scalar_view_matches_scalar_construction() {
    let moments = vec![datetime(2015, 6, 30, 23, 59, 0), datetime(2015, 7, 1, 0, 0, 0)];
    let t = utc(moments.clone());
    for (i, moment) in moments.into_iter().enumerate() {
        let scalar = utc(vec![moment]);
        assert_eq!(t.get(i).unwrap().pairs(), scalar.pairs());
        assert!(t.get(i).unwrap() == scalar);
    }
}

#[test]
fn empty_values() {
    let t = Time::new(Values::DateTime(vec![]), None, Scale::Utc, Format::Datetime).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
    assert!(t.gps().unwrap().is_empty());
    assert_eq!(t.yydddsssss().unwrap(), Vec::<String>::new());

    let d = TimeDelta::new(Values::Float(vec![]), None, Scale::Utc, DeltaFormat::Seconds).unwrap();
    assert!(d.is_empty());
}

#[test]
fn now_is_a_utc_instant() {
    let now = Time::now();
    assert_eq!(now.scale(), Scale::Utc);
    assert!(now > t1());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let t = utc(vec![datetime(2000, 1, 1, 1, 1, 1)]);
    let json = serde_json::to_string(&t).unwrap();
    let back: Time = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pairs(), t.pairs());
    assert_eq!(back.format(), Format::Datetime);
    assert!(json.contains("\"utc\""));
}
