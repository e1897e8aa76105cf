use super::*;
use crate::value::moves::MovePerHour;

#[test]
fn absent_holder_is_a_no_op() {
    let mut p = SPattern::absent();
    let mut buf = [Color::WHITE; 2];
    p.render(&mut buf, 1234);
    assert_eq!(buf, [Color::WHITE; 2]);
    p.render(&mut [], 0);
}

#[test]
fn holder_forwards_to_the_variant() {
    let mut p: SPattern = Color::new(1, 2, 3).into();
    let mut buf = [Color::BLACK; 2];
    p.render(&mut buf, 0);
    assert_eq!(buf, [Color::new(1, 2, 3); 2]);
    assert_eq!(p.get().map(Pattern::type_name), Some("Color"));
}

#[test]
fn scratch_is_not_part_of_identity() {
    let mut a = Rotate {
        child: Frame::from([Color::WHITE, Color::BLACK]).into(),
        move_per_hour: MovePerHour::constant(1),
        ..Default::default()
    };
    let b = a.clone();
    a.render(&mut [Color::BLACK; 2], 0);
    assert_eq!(a, b);
}

#[test]
fn type_names_are_unique() {
    let all: Vec<Pattern> = vec![
        Color::BLACK.into(),
        Frame::new().into(),
        Rainbow::new().into(),
        Repeated::default().into(),
        Gradient::default().into(),
        Split::default().into(),
        Transition::default().into(),
        Loop::default().into(),
        Rotate::default().into(),
        Chronometer::default().into(),
        PingPong::default().into(),
        Crop::default().into(),
        Subset::default().into(),
        Dim::default().into(),
        Add::default().into(),
        Scale::default().into(),
    ];
    let mut names: Vec<_> = all.iter().map(Pattern::type_name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), all.len());
}
