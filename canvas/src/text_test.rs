use super::*;

#[test]
fn fixed_advance_counts_chars_not_bytes() {
    let measure = FixedAdvance(10.0);
    assert!((measure.text_width("ÉTÉ") - 30.0).abs() < f64::EPSILON);
    assert!(measure.text_width("").abs() < f64::EPSILON);
}

#[test]
fn fixed_advance_default_uses_fallback() {
    assert!((FixedAdvance::default().0 - FALLBACK_ADVANCE_PX).abs() < f64::EPSILON);
}
