use super::*;
use crate::curve::ease::Curve;
use crate::curve::interpolation::Interpolation;
use crate::foundation::error::StripError;
use crate::pattern::model::Render;
use crate::value::moves::MovePerHour;

#[test]
fn leaf_goldens() {
    assert_eq!(SPattern::from(Color::new(1, 2, 3)).encode(), r##""#010203""##);
    assert_eq!(SPattern::from(Frame::new()).encode(), r#""L""#);
    assert_eq!(
        SPattern::from(Frame::from([Color::new(1, 2, 3), Color::new(4, 5, 6)])).encode(),
        r#""L010203040506""#
    );
    assert_eq!(SPattern::from(Rainbow::new()).encode(), r#""Rainbow""#);
    assert_eq!(SPattern::absent().encode(), "{}");
}

#[test]
fn mixer_defaults_golden() {
    assert_eq!(
        SPattern::from(PingPong::default()).encode(),
        r#"{"Child":{},"MovePerHour":0,"_type":"PingPong"}"#
    );
    assert_eq!(
        SPattern::from(Chronometer::default()).encode(),
        r#"{"Child":{},"_type":"Chronometer"}"#
    );
}

#[test]
fn nested_transition_golden() {
    let p: SPattern = Transition {
        before: Transition {
            after: Color::WHITE.into(),
            offset_ms: 600_000,
            transition_ms: 600_000,
            curve: Curve::Direct,
            ..Default::default()
        }
        .into(),
        after: Color::BLACK.into(),
        offset_ms: 30 * 60_000,
        transition_ms: 600_000,
        curve: Curve::Direct,
        ..Default::default()
    }
    .into();
    let text = p.encode();
    assert_eq!(
        text,
        concat!(
            r##"{"After":"#000000","Before":{"After":"#ffffff","Before":{},"Curve":"direct","##,
            r#""OffsetMS":600000,"TransitionMS":600000,"_type":"Transition"},"Curve":"direct","#,
            r#""OffsetMS":1800000,"TransitionMS":600000,"_type":"Transition"}"#
        )
    );
    assert_eq!(SPattern::decode(&text).unwrap(), p);
}

#[test]
fn tagged_color_reencodes_as_literal() {
    let p = SPattern::decode(r#"{"B":3,"G":2,"R":1,"_type":"Color"}"#).unwrap();
    assert_eq!(p, SPattern::from(Color::new(1, 2, 3)));
    assert_eq!(p.encode(), r##""#010203""##);
    assert_eq!(
        SPattern::decode(r#"{"_type":"Frame","Pixels":"Lff0000"}"#).unwrap(),
        SPattern::from(Frame::from([Color::new(255, 0, 0)]))
    );
}

#[test]
fn every_default_variant_reencodes_and_behaves_the_same() {
    // Absent holders come back as 0 or {}, so compare behaviour, not structure.
    let reg = Registry::standard();
    for name in reg.pattern_names() {
        let mut p = SPattern::new(reg.default_pattern(name).unwrap());
        let text = p.encode();
        let mut back = SPattern::decode(&text).unwrap();
        assert_eq!(back.encode(), text);
        for t in [0, 1500, 3_600_000, u32::MAX] {
            let mut a = [Color::new(1, 1, 1); 9];
            let mut b = a;
            p.render(&mut a, t);
            back.render(&mut b, t);
            assert_eq!(a, b, "{name} t={t}");
        }
    }
    for name in reg.value_names() {
        let v = SValue::new(reg.default_value(name).unwrap());
        let text = v.encode();
        let back = SValue::decode(&text).unwrap();
        assert_eq!(back.encode(), text);
        for (t, len) in [(0, 0), (777, 150), (u32::MAX, -4)] {
            // An absent step period stops time; a zero one passes it through.
            let want = if name == "OpStep" { t as i32 } else { v.eval(t, len) };
            assert_eq!(back.eval(t, len), want, "{name} t={t}");
        }
    }
}

#[test]
fn absent_operands_come_back_as_zero() {
    let back = SPattern::decode(&SPattern::from(Crop::default()).encode()).unwrap();
    let Some(Pattern::Crop(crop)) = back.get() else {
        panic!("expected a crop, got {back:?}");
    };
    assert_eq!(crop.before, SValue::from(0));
    assert_eq!(crop.after, SValue::from(0));
}

fn busy_tree() -> SPattern {
    Loop {
        patterns: vec![
            Rotate {
                child: Frame::from([Color::new(9, 0, 0), Color::new(0, 9, 0)]).into(),
                move_per_hour: MovePerHour(Value::time_mod(5000).into()),
                ..Default::default()
            }
            .into(),
            Scale {
                child: Rainbow::new().into(),
                interpolation: Interpolation::NearestSkip,
                ratio_milli: Value::percent(150).into(),
                ..Default::default()
            }
            .into(),
            Split {
                left: Dim {
                    child: Color::new(200, 150, 100).into(),
                    intensity: Value::OpGroup {
                        v: Value::time_plus(-40).into(),
                    }
                    .into(),
                }
                .into(),
                right: Add {
                    patterns: vec![
                        Repeated {
                            frame: Frame::from([Color::WHITE, Color::BLACK]),
                        }
                        .into(),
                        Crop {
                            child: Gradient {
                                left: Color::WHITE.into(),
                                right: SPattern::absent(),
                                curve: Curve::StepMiddle,
                                ..Default::default()
                            }
                            .into(),
                            before: Value::Rand { tick_ms: 250 }.into(),
                            after: Value::OpMul {
                                l: Value::Length.into(),
                                r: 2.into(),
                            }
                            .into(),
                            ..Default::default()
                        }
                        .into(),
                    ],
                    ..Default::default()
                }
                .into(),
                offset: Value::OpSub {
                    l: Value::Length.into(),
                    r: 3.into(),
                }
                .into(),
            }
            .into(),
            Subset {
                child: PingPong {
                    child: Chronometer::default().into(),
                    move_per_hour: MovePerHour::constant(-7200),
                    ..Default::default()
                }
                .into(),
                offset: Value::OpStep { v: 1000.into() }.into(),
                length: Value::OpMod {
                    l: Value::Length.into(),
                    r: 7.into(),
                }
                .into(),
            }
            .into(),
        ],
        show_ms: 1000,
        transition_ms: 250,
        curve: Curve::EaseInOut,
        ..Default::default()
    }
    .into()
}

#[test]
fn populated_tree_round_trips_and_renders_the_same() {
    let mut original = busy_tree();
    let text = original.encode();
    let mut decoded = SPattern::decode(&text).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.encode(), text);

    for t in [0, 999, 1100, 2600, 3_600_000, u32::MAX] {
        let mut a = [Color::BLACK; 17];
        let mut b = [Color::BLACK; 17];
        original.render(&mut a, t);
        decoded.render(&mut b, t);
        assert_eq!(a, b, "t={t}");
    }
}

#[test]
fn values_prefer_numbers_then_literals_then_tags() {
    assert_eq!(SValue::from(-3).encode(), "-3");
    assert_eq!(SValue::from(Value::TimeMs).encode(), r#""t""#);
    assert_eq!(SValue::from(Value::percent(50)).encode(), r#""50%""#);
    assert_eq!(SValue::from(Value::time_plus(-5)).encode(), r#""-5""#);
    assert_eq!(
        SValue::from(Value::OpMod {
            l: Value::TimeMs.into(),
            r: (-5).into(),
        })
        .encode(),
        r#"{"L":"t","R":-5,"_type":"OpMod"}"#
    );
    assert_eq!(
        SValue::from(Value::OpStep {
            v: Value::OpSub {
                l: Value::Length.into(),
                r: 1.into(),
            }
            .into(),
        })
        .encode(),
        r#"{"V":{"L":"l","R":1,"_type":"OpSub"},"_type":"OpStep"}"#
    );
    assert_eq!(SValue::absent().encode(), "0");
}

#[test]
fn rand_decodes_from_its_tagged_form() {
    let v = SValue::decode(r#"{"TickMS":100,"_type":"Rand"}"#).unwrap();
    assert_eq!(v, SValue::from(Value::Rand { tick_ms: 100 }));
    assert_eq!(v.encode(), r#""Rand(100)""#);
    assert_eq!(
        SValue::decode(r#""Rand""#).unwrap().encode(),
        r#""rand""#
    );
}

#[test]
fn failed_load_leaves_the_holder_alone() {
    let original = SPattern::from(Color::new(1, 2, 3));
    let mut p = original.clone();

    assert!(matches!(
        p.load(r#""Sparkle""#),
        Err(StripError::UnrecognizedLiteral(_))
    ));
    assert_eq!(p.load(r#"{"Child":{}}"#), Err(StripError::MissingTypeTag));
    assert_eq!(
        p.load(r#"{"_type":"Sparkle"}"#),
        Err(StripError::unknown_type("Sparkle"))
    );
    assert!(matches!(
        p.load(r##""#zz0000""##),
        Err(StripError::MalformedLiteral { .. })
    ));
    assert_eq!(p, original);

    let mut v = SValue::from(Value::Length);
    assert!(v.load(r#""tt""#).is_err());
    assert_eq!(v, SValue::from(Value::Length));
    v.load("12").unwrap();
    assert_eq!(v, SValue::from(12));
}

#[test]
fn interpolation_names_accept_the_legacy_spelling() {
    let p = SPattern::decode(r#"{"Interpolation":"nearestskip","_type":"Scale"}"#).unwrap();
    let Some(Pattern::Scale(s)) = p.get() else {
        panic!("{p:?}");
    };
    assert_eq!(s.interpolation, Interpolation::NearestSkip);
    assert!(p.encode().contains(r#""Interpolation":"nearest-skip""#));
}
