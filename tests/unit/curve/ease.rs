use super::*;

#[test]
fn every_curve_pins_its_endpoints() {
    for c in Curve::ALL {
        assert_eq!(c.scale(0), 0, "{c}");
        assert_eq!(c.scale(u16::MAX), u16::MAX, "{c}");
    }
}

#[test]
fn bezier_curves_are_monotonic() {
    for c in [Curve::Ease, Curve::EaseIn, Curve::EaseInOut, Curve::EaseOut] {
        let mut prev = 0;
        for v in (0..=u16::MAX).step_by(97) {
            let y = c.scale(v);
            assert!(y >= prev, "{c} at {v}: {y} < {prev}");
            prev = y;
        }
    }
}

#[test]
fn bezier_shapes() {
    // ease-in lags the identity, ease-out leads it, ease-in-out is symmetric.
    assert!(Curve::EaseIn.scale(16384) < 16384);
    assert!(Curve::EaseOut.scale(16384) > 16384);
    let mid = i32::from(Curve::EaseInOut.scale(32768));
    assert!((mid - 32768).abs() < 700, "{mid}");
}

#[test]
fn direct_is_identity() {
    for v in [0, 1, 255, 32767, 65534, 65535] {
        assert_eq!(Curve::Direct.scale(v), v);
    }
}

#[test]
fn step_thresholds() {
    assert_eq!(Curve::StepStart.scale(255), 0);
    assert_eq!(Curve::StepStart.scale(256), u16::MAX);
    assert_eq!(Curve::StepMiddle.scale(32767), 0);
    assert_eq!(Curve::StepMiddle.scale(32768), u16::MAX);
    assert_eq!(Curve::StepEnd.scale(65535 - 257), 0);
    assert_eq!(Curve::StepEnd.scale(65535 - 256), u16::MAX);
}

#[test]
fn scale8_takes_the_high_byte() {
    assert_eq!(Curve::Direct.scale8(0), 0);
    assert_eq!(Curve::Direct.scale8(32768), 128);
    assert_eq!(Curve::Direct.scale8(65535), 255);
    assert_eq!(Curve::StepMiddle.scale8(40000), 255);
}

#[test]
fn names_round_trip_and_fall_back() {
    for c in Curve::ALL {
        assert_eq!(Curve::parse(c.name()), Some(c));
        assert_eq!(c.to_string(), c.name());
    }
    assert_eq!(Curve::parse("bounce"), None);
    assert_eq!(Curve::from_name(""), Curve::EaseOut);
    assert_eq!(Curve::from_name("bounce"), Curve::EaseOut);
    assert_eq!(Curve::default(), Curve::EaseOut);
}

#[test]
fn bell_peaks_in_the_middle() {
    assert_eq!(Curve::bell(0), 0);
    assert_eq!(Curve::bell(u16::MAX), 0);
    assert_eq!(Curve::bell(32767), u16::MAX);
    assert_eq!(Curve::bell(32768), u16::MAX);
    assert_eq!(Curve::bell(16384), Curve::EaseInOut.scale(32768));
    let mut prev = 0;
    for v in (0..32767).step_by(101) {
        let y = Curve::bell(v);
        assert!(y >= prev, "rising at {v}");
        prev = y;
    }
    for v in (1000..32000).step_by(997) {
        let (up, down) = (Curve::bell(v), Curve::bell(u16::MAX - v));
        assert!(up.abs_diff(down) < 64, "{v}: {up} vs {down}");
    }
}
