use super::*;

fn at(ts: &str) -> OffsetDateTime {
    OffsetDateTime::parse(ts, &Rfc3339).unwrap()
}

#[test]
fn relative_buckets() {
    let now = at("2026-03-10T12:00:00+00:00");
    assert_eq!(fmt_since("2026-03-10T11:59:30+00:00", now).as_deref(), Some("just now"));
    assert_eq!(fmt_since("2026-03-10T11:15:00+00:00", now).as_deref(), Some("45m ago"));
    assert_eq!(fmt_since("2026-03-09T12:00:00+00:00", now).as_deref(), Some("24h ago"));
    assert_eq!(fmt_since("2026-03-05T12:00:00+00:00", now).as_deref(), Some("5d ago"));
    assert_eq!(fmt_since("2026-01-01T00:00:00+00:00", now), None);
    assert_eq!(fmt_since("2026-03-11T00:00:00+00:00", now), None);
}

#[test]
fn server_timestamps_with_fractions_and_offsets() {
    assert_eq!(
        fmt_ts_ui("2026-03-10T14:05:09.123456+02:00"),
        "2026-03-10 12:05Z"
    );
    assert_eq!(fmt_ts_ui("yesterday"), "yesterday");
}
