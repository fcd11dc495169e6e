use ytq::duration::{format_token, parse, DurationSpec};

#[test]
fn formats_reference_table() {
    assert_eq!(format_token("PT0S"), "0:00");
    assert_eq!(format_token("PT1H"), "1:00:00");
    assert_eq!(format_token("PT45S"), "0:45");
    assert_eq!(format_token("PT1H2M"), "1:02:00");
    assert_eq!(format_token("PT1H2M3S"), "1:02:03");
}

#[test]
fn components_are_literal_not_carried() {
    assert_eq!(format_token("PT90S"), "0:90");
    assert_eq!(
        parse("PT90S"),
        DurationSpec {
            hours: 0,
            minutes: 0,
            seconds: 90
        }
    );
}

#[test]
fn unmatched_components_are_zero() {
    assert_eq!(format_token("PT"), "0:00");
    assert_eq!(format_token("not a token"), "0:00");
}
