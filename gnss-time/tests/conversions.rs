use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta as Duration, Timelike};
use gnss_time::{Format, Scale, Time, TimeDelta, DeltaFormat, Values};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn leap_day_evening(second: i64) -> NaiveDateTime {
    midnight(2015, 6, 30) + Duration::hours(23) + Duration::minutes(59) + Duration::seconds(second)
}

fn datetimes(values: Vec<NaiveDateTime>) -> Time {
    Time::new(values, None, Scale::Utc, Format::Datetime).unwrap()
}

// --- Fixtures ---

fn dt_utc_scalar() -> Time {
    datetimes(vec![leap_day_evening(20)])
}

fn dt_utc_single_element_array() -> Time {
    Time::new(vec![leap_day_evening(20)], None, Scale::Utc, Format::Datetime).unwrap()
}

fn dt_utc_array() -> Time {
    datetimes((0..2).map(leap_day_evening).collect())
}

fn dt_utc_scalar_with_val2() -> Time {
    Time::new(
        midnight(2015, 6, 30),
        Some(Values::from(Duration::seconds(23 * 3600 + 59 * 60 + 20))),
        Scale::Utc,
        Format::Datetime,
    )
    .unwrap()
}

fn dt_utc_array_with_val2() -> Time {
    Time::new(
        vec![midnight(2015, 6, 1), midnight(2015, 6, 2)],
        Some(Values::from(
            (0..2)
                .map(|i| Duration::seconds(23 * 3600 + 59 * 60 + i))
                .collect::<Vec<_>>(),
        )),
        Scale::Utc,
        Format::Datetime,
    )
    .unwrap()
}

fn jd_utc_scalar() -> Time {
    Time::new(2_451_544.5, None, Scale::Utc, Format::Jd).unwrap()
}

fn jd_utc_array() -> Time {
    Time::new(vec![2_451_544.5, 2_451_545.5], None, Scale::Utc, Format::Jd).unwrap()
}

fn jd_utc_scalar_with_val2() -> Time {
    Time::new(2_451_544.0, Some(Values::from(0.5)), Scale::Utc, Format::Jd).unwrap()
}

fn jd_utc_array_with_val2() -> Time {
    Time::new(
        vec![2_451_544.0, 2_451_545.0],
        Some(Values::from(vec![0.5, 0.5])),
        Scale::Utc,
        Format::Jd,
    )
    .unwrap()
}

fn around_leap_second() -> Time {
    datetimes((55..65).map(leap_day_evening).collect())
}

fn fixtures() -> Vec<(&'static str, Time)> {
    vec![
        ("dt_utc_scalar", dt_utc_scalar()),
        ("dt_utc_single_element_array", dt_utc_single_element_array()),
        ("dt_utc_array", dt_utc_array()),
        ("dt_utc_scalar_with_val2", dt_utc_scalar_with_val2()),
        ("dt_utc_array_with_val2", dt_utc_array_with_val2()),
        ("jd_utc_scalar", jd_utc_scalar()),
        ("jd_utc_array", jd_utc_array()),
        ("jd_utc_scalar_with_val2", jd_utc_scalar_with_val2()),
        ("jd_utc_array_with_val2", jd_utc_array_with_val2()),
        ("around_leap_second", around_leap_second()),
    ]
}

/// `doy` values only rebuild an instant together with their year.
fn year_for_doy(t: &Time, format: Format) -> Option<Values> {
    (format == Format::Doy).then(|| {
        Values::Int(t.year().unwrap().into_iter().map(i64::from).collect())
    })
}

fn assert_values_close(a: &Values, b: &Values, ctx: &str) {
    match (a, b) {
        (Values::Float(a), Values::Float(b)) => {
            assert_eq!(a.len(), b.len(), "{}", ctx);
            for (x, y) in a.iter().zip(b) {
                assert_abs_diff_eq!(x, y, epsilon = 1e-6);
            }
        }
        (Values::WeekSeconds(a), Values::WeekSeconds(b)) => {
            assert_eq!(a.len(), b.len(), "{}", ctx);
            for (x, y) in a.iter().zip(b) {
                assert_eq!(x.0, y.0, "{}", ctx);
                assert_abs_diff_eq!(x.1, y.1, epsilon = 1e-6);
            }
        }
        _ => assert_eq!(a, b, "{}", ctx),
    }
}

// --- Scale/format round trips ---

#[test]
fn every_format_survives_a_trip_through_every_scale() {
    init_tracing();
    for (name, t) in fixtures() {
        for scale in Scale::ALL {
            let converted = t.to_scale(scale).unwrap().to_scale(t.scale()).unwrap();

            for format in Format::ALL {
                let original = match t.as_format(format) {
                    Ok(values) => values,
                    Err(err) => {
                        assert!(err.is_invalid_combination(), "{}: {}", name, err);
                        assert!(t.scale() != Scale::Gps && format.name().contains("gps"));
                        continue;
                    }
                };
                let ctx = format!("{}: {} via {}", name, format, scale);
                assert_values_close(&original, &converted.as_format(format).unwrap(), &ctx);
            }
        }
    }
}

#[test]
fn jd_epoch_round_trips_through_every_scale_and_format() {
    let t = jd_utc_scalar();
    for scale in Scale::ALL {
        let in_scale = t.to_scale(scale).unwrap();
        for format in Format::ALL {
            let values = match in_scale.as_format(format) {
                Ok(values) => values,
                Err(err) => {
                    assert!(err.is_invalid_combination());
                    continue;
                }
            };
            let val2 = year_for_doy(&in_scale, format);
            let rebuilt = Time::new(values, val2, scale, format).unwrap();
            let back = rebuilt.to_scale(Scale::Utc).unwrap();
            // yydddsssss keeps whole seconds, doy whole days; a single f64 JD resolves ~40 us
            let tolerance = match format {
                Format::Yydddsssss => 1.0,
                Format::Doy => 86_400.0,
                _ => 1e-4,
            };
            let diff = (&back - &t).unwrap();
            assert!(
                diff.seconds()[0].abs() < tolerance,
                "{} in {}: off by {} s",
                format,
                scale,
                diff.seconds()[0]
            );
        }
    }
}

#[test]
fn fixed_offsets_between_scales() {
    let t = jd_utc_scalar();
    let tai = t.tai().unwrap();
    let gps = t.gps().unwrap();
    let tt = t.tt().unwrap();

    // 2000-01-01: TAI - UTC = 32 s
    assert_abs_diff_eq!(
        tai.pairs()[0].sub(t.pairs()[0]).to_seconds(),
        32.0,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        tai.pairs()[0].sub(gps.pairs()[0]).to_seconds(),
        19.0,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        tt.pairs()[0].sub(tai.pairs()[0]).to_seconds(),
        32.184,
        epsilon = 1e-6
    );
}

// --- Leap second ---

#[test]
fn tai_minus_utc_steps_at_the_leap_second() {
    let utc = around_leap_second();
    let tai = utc.tai().unwrap();

    let utc_dt = utc.as_format(Format::Datetime).unwrap();
    let tai_dt = tai.as_format(Format::Datetime).unwrap();
    let offsets: Vec<i64> = utc_dt
        .as_datetimes()
        .unwrap()
        .iter()
        .zip(tai_dt.as_datetimes().unwrap())
        .map(|(u, t)| (*t - *u).num_seconds())
        .collect();

    assert_eq!(offsets, vec![35, 35, 35, 35, 35, 36, 36, 36, 36, 36]);
}

#[test]
fn utc_day_with_leap_second_has_86401_seconds() {
    let start = datetimes(vec![midnight(2015, 6, 30)]);
    let end = datetimes(vec![midnight(2015, 7, 1)]);
    let length = (&end - &start).unwrap();
    assert_abs_diff_eq!(length.seconds()[0], 86_401.0, epsilon = 1e-6);

    let one_second = TimeDelta::new(1_i64, None, Scale::Utc, DeltaFormat::Seconds).unwrap();
    let last = datetimes(vec![leap_day_evening(59)]);
    let leap = (&last + &one_second).unwrap();
    assert_eq!(leap.second().unwrap(), vec![60]);
    assert_eq!(
        leap.as_format(Format::Iso).unwrap(),
        Values::from("2015-06-30T23:59:60.000000")
    );

    let rendered = leap.value().unwrap();
    let dt = rendered.as_datetimes().unwrap()[0];
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 59, 59));
    assert_eq!(dt.nanosecond(), 1_000_000_000);

    let next = (&leap + &one_second).unwrap();
    assert_eq!(next.value().unwrap(), Values::from(midnight(2015, 7, 1)));
}

// --- UT1 ---

#[test]
fn ut1_uses_attached_dut1_table() {
    use gnss_time::{Dut1Model, Dut1Table};

    let table = Dut1Table::new(vec![(51544.0, 0.3554), (51545.0, 0.3547)]).unwrap();
    let t = jd_utc_scalar().with_dut1(Dut1Model::from_table(table));
    let ut1 = t.ut1().unwrap();

    assert_abs_diff_eq!(
        ut1.pairs()[0].sub(t.pairs()[0]).to_seconds(),
        0.3554,
        epsilon = 1e-9
    );

    let back = ut1.utc().unwrap();
    assert_abs_diff_eq!(
        back.pairs()[0].sub(t.pairs()[0]).to_seconds(),
        0.0,
        epsilon = 1e-9
    );

    // without a table UT1 coincides with UTC
    let plain = jd_utc_scalar().ut1().unwrap();
    assert_eq!(plain.pairs(), jd_utc_scalar().pairs());
}

#[test]
fn non_finite_input_is_rejected_at_construction() {
    use gnss_time::TimeError;

    for bad in [f64::NAN, f64::INFINITY] {
        let err = Time::new(bad, None, Scale::Utc, Format::Jd).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput { .. }), "{:?}", err);
        let err = Time::new(2_451_544.0, Some(Values::from(bad)), Scale::Utc, Format::Mjd).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput { .. }), "{:?}", err);
        assert!(TimeDelta::new(bad, None, Scale::Utc, DeltaFormat::Seconds).is_err());
    }
}

#[test]
fn ut1_lookup_of_non_finite_pair_fails_cleanly() {
    use gnss_time::{DualPair, Dut1Model, Dut1Table};

    let table = Dut1Table::new(vec![(51544.0, 0.3554), (51545.0, 0.3547)]).unwrap();
    let t = Time::from_pairs(vec![DualPair::from_raw(f64::NAN, 0.0)], Scale::Utc, Format::Jd)
        .unwrap()
        .with_dut1(Dut1Model::from_table(table));
    assert!(t.ut1().is_err());
}

#[test]
fn jd_scalar_with_val2_matches_single_value() {
    assert_eq!(jd_utc_scalar_with_val2().pairs(), jd_utc_scalar().pairs());
    assert_eq!(dt_utc_single_element_array().pairs(), dt_utc_scalar().pairs());
    assert_eq!(dt_utc_scalar_with_val2().pairs(), dt_utc_scalar().pairs());
}

#[test]
fn second_60_is_rejected_away_from_a_leap_second() {
    for text in ["2000-01-01T12:00:60", "2015-06-30T12:30:60"] {
        assert!(Time::new(text, None, Scale::Utc, Format::Iso).is_err(), "{}", text);
    }
    let leap = Time::new("2015-06-30T23:59:60", None, Scale::Utc, Format::Iso).unwrap();
    assert_eq!(leap.second().unwrap(), vec![60]);
}
